use alloc::vec::Vec;

use tracing::{info, warn};

use crate::dealer::{Dealer, DealerPlay};
use crate::error::RoundError;
use crate::hand::DrawOutcome;
use crate::player::{Player, SeatStatus};
use crate::result::{Outcome, PlayerResult, RoundResult};
use crate::shoe::Shoe;

use super::io::{Action, BetLimits, RoundEvent, TableIo, TableView};
use super::RoundPhase;

/// A single round among the seated players.
///
/// The round borrows the dealer and the players for its lifetime and owns its
/// shoe. Once played it is discarded; only balances and win counts remain.
pub struct Round<'t> {
    id: u64,
    phase: RoundPhase,
    min_bet: usize,
    shoe: Shoe,
    dealer: &'t mut Dealer,
    players: Vec<&'t mut Player>,
    /// Stake each seat placed this round, by seat index.
    stakes: Vec<usize>,
}

impl<'t> Round<'t> {
    /// Seats `players` for a round dealt from `shoe`.
    ///
    /// The dealer's hand and each player's hand and status are reset.
    #[must_use]
    pub fn new(
        id: u64,
        min_bet: usize,
        shoe: Shoe,
        dealer: &'t mut Dealer,
        mut players: Vec<&'t mut Player>,
    ) -> Self {
        dealer.reset();
        for player in &mut players {
            player.reset_for_round();
        }
        let stakes = alloc::vec![0; players.len()];

        Self {
            id,
            phase: RoundPhase::Betting,
            min_bet,
            shoe,
            dealer,
            players,
            stakes,
        }
    }

    /// Returns the round ID.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Returns the number of cards left in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.len()
    }

    /// Returns a snapshot of the table.
    #[must_use]
    pub fn view(&self) -> TableView<'_> {
        TableView {
            round_id: self.id,
            phase: self.phase,
            players: self.players.iter().map(|p| &**p).collect(),
            dealer: &*self.dealer,
        }
    }

    /// Plays the round to settlement.
    ///
    /// # Errors
    ///
    /// Returns an error if there is nobody to play, the shoe runs out, the
    /// I/O boundary fails, or a bet outside the limits is supplied. Every
    /// unsettled stake is returned to its player before the error is passed on.
    pub fn play<I: TableIo + ?Sized>(mut self, io: &mut I) -> Result<RoundResult, RoundError> {
        match self.run(io) {
            Ok(result) => Ok(result),
            Err(err) => {
                warn!(round = self.id, error = %err, "round abandoned");
                self.refund_open_bets();
                Err(err)
            }
        }
    }

    fn run<I: TableIo + ?Sized>(&mut self, io: &mut I) -> Result<RoundResult, RoundError> {
        if self.players.is_empty() {
            return Err(RoundError::NoPlayers);
        }
        info!(round = self.id, players = self.players.len(), "round started");
        io.render(&RoundEvent::Started(self.view()));

        self.take_bets(io)?;
        self.deal(io)?;
        self.player_turns(io)?;
        let dealer_play = self.dealer_turn(io)?;
        let result = self.settle(dealer_play.as_ref(), io);

        io.render(&RoundEvent::Finished(&result));
        Ok(result)
    }

    fn take_bets<I: TableIo + ?Sized>(&mut self, io: &mut I) -> Result<(), RoundError> {
        self.phase = RoundPhase::Betting;

        for (player, stake) in self.players.iter_mut().zip(self.stakes.iter_mut()) {
            let limits = BetLimits::new(self.min_bet, player.balance());
            let amount = limits.check(io.bet(&**player, limits)?)?;
            player.place_bet(amount)?;
            *stake = amount;
            info!(player = player.name(), amount, "bet placed");
        }
        Ok(())
    }

    fn deal<I: TableIo + ?Sized>(&mut self, io: &mut I) -> Result<(), RoundError> {
        self.phase = RoundPhase::Dealing;

        let cards_needed = (self.players.len() + 1) * 2;
        if self.shoe.len() < cards_needed {
            return Err(RoundError::ShoeExhausted);
        }
        self.dealer.deal_initial(&mut self.shoe, &mut self.players)?;

        for player in &self.players {
            if player.status == SeatStatus::Paid {
                io.render(&RoundEvent::Blackjack(&**player));
            }
        }
        io.render(&RoundEvent::Table(self.view()));
        Ok(())
    }

    fn player_turns<I: TableIo + ?Sized>(&mut self, io: &mut I) -> Result<(), RoundError> {
        self.phase = RoundPhase::PlayerTurns;

        for index in 0..self.players.len() {
            while self.players[index].status == SeatStatus::Active {
                let action = io.action(&*self.players[index], &self.view())?;
                let player = &mut *self.players[index];

                match action {
                    Action::Hit => {
                        if Dealer::give_card(&mut self.shoe, player)? == DrawOutcome::Bust {
                            info!(player = player.name(), total = player.hand.value(), "bust");
                            Dealer::collect_bet(player);
                            player.status = SeatStatus::Busted;
                        }
                        io.render(&RoundEvent::Table(self.view()));
                    }
                    Action::Stand => player.status = SeatStatus::Standing,
                }
            }
        }
        Ok(())
    }

    fn dealer_turn<I: TableIo + ?Sized>(
        &mut self,
        io: &mut I,
    ) -> Result<Option<DealerPlay>, RoundError> {
        let anyone_standing = self
            .players
            .iter()
            .any(|p| p.status == SeatStatus::Standing);
        if !anyone_standing {
            return Ok(None);
        }

        self.phase = RoundPhase::DealerTurn;
        io.render(&RoundEvent::Table(self.view()));

        let mut drawn = Vec::new();
        while let Some(card) = self.dealer.draw_next(&mut self.shoe)? {
            drawn.push(card);
            io.render(&RoundEvent::DealerDraw(card));
            io.render(&RoundEvent::Table(self.view()));
        }

        let bust = self.dealer.hand.is_bust();
        info!(total = self.dealer.hand.value(), bust, "dealer stands");
        Ok(Some(DealerPlay { drawn, bust }))
    }

    fn settle<I: TableIo + ?Sized>(
        &mut self,
        dealer_play: Option<&DealerPlay>,
        io: &mut I,
    ) -> RoundResult {
        self.phase = RoundPhase::Settled;

        let dealer_value = self.dealer.hand.value();
        let dealer_bust = dealer_play.is_some_and(|play| play.bust);
        let mut results = Vec::with_capacity(self.players.len());

        for (player, &bet) in self.players.iter_mut().zip(&self.stakes) {
            let outcome = match player.status {
                SeatStatus::Paid => Outcome::Blackjack,
                SeatStatus::Busted => Outcome::Lose,
                SeatStatus::Active | SeatStatus::Standing => {
                    let total = player.hand.value();
                    if dealer_bust || total > dealer_value {
                        Dealer::pay_bet(player);
                        Outcome::Win
                    } else if total == dealer_value {
                        Dealer::push_bet(player);
                        Outcome::Push
                    } else {
                        Dealer::collect_bet(player);
                        Outcome::Lose
                    }
                }
            };

            let payout = match outcome {
                Outcome::Win | Outcome::Blackjack => bet.saturating_mul(2),
                Outcome::Push => bet,
                Outcome::Lose => 0,
            };
            let result = PlayerResult {
                player_id: player.id(),
                name: player.name().into(),
                outcome,
                bet,
                payout,
                player_value: player.hand.value(),
            };
            info!(player = player.name(), ?outcome, payout, "settled");

            if matches!(player.status, SeatStatus::Active | SeatStatus::Standing) {
                io.render(&RoundEvent::Settled(&result));
            }
            results.push(result);
        }

        RoundResult {
            round_id: self.id,
            players: results,
            dealer_value,
            dealer_bust,
            dealer_played: dealer_play.is_some(),
        }
    }

    fn refund_open_bets(&mut self) {
        for player in &mut self.players {
            if player.current_bet() > 0 {
                Dealer::push_bet(player);
            }
        }
    }
}
