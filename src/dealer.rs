//! The dealer: deals the cards, plays the house hand, moves the chips.

extern crate alloc;

use alloc::vec::Vec;

use tracing::{debug, info};

use crate::card::Card;
use crate::error::RoundError;
use crate::hand::{DrawOutcome, Hand};
use crate::player::{Player, SeatStatus};
use crate::shoe::Shoe;

/// Cards the dealer drew during auto-play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealerPlay {
    /// Cards drawn after the initial deal, in order.
    pub drawn: Vec<Card>,
    /// Whether the dealer went over 21.
    pub bust: bool,
}

/// The house. Reused across rounds; only the hand is reset.
#[derive(Debug, Clone)]
pub struct Dealer {
    stop: u8,
    /// The dealer's hand for the current round.
    pub hand: Hand,
}

impl Dealer {
    /// Creates a dealer that draws while its total is below `stop`.
    #[must_use]
    pub const fn new(stop: u8) -> Self {
        Self {
            stop,
            hand: Hand::new(),
        }
    }

    /// Returns the stop threshold.
    #[must_use]
    pub const fn stop(&self) -> u8 {
        self.stop
    }

    /// Clears the dealer's hand for a new round.
    pub fn reset(&mut self) {
        self.hand.clear();
    }

    /// Deals two passes of one card to each active player, then one to the
    /// dealer.
    ///
    /// A player reaching 21 is paid immediately and marked [`SeatStatus::Paid`],
    /// so the second pass skips nobody still waiting for a card. The dealer's
    /// own cards are not checked here; the first of them is the hole card.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::ShoeExhausted`] if the shoe runs out.
    pub fn deal_initial(
        &mut self,
        shoe: &mut Shoe,
        players: &mut [&mut Player],
    ) -> Result<(), RoundError> {
        for _ in 0..2 {
            for player in players.iter_mut() {
                if player.status != SeatStatus::Active {
                    continue;
                }
                Self::give_card(shoe, player)?;
                if player.hand.is_blackjack() {
                    info!(player = player.name(), "natural blackjack");
                    Self::pay_bet(player);
                    player.status = SeatStatus::Paid;
                }
            }

            let card = shoe.draw().ok_or(RoundError::ShoeExhausted)?;
            self.hand.apply_card(card);
        }
        Ok(())
    }

    /// Deals one card to a player.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::ShoeExhausted`] if the shoe is empty.
    pub fn give_card(shoe: &mut Shoe, player: &mut Player) -> Result<DrawOutcome, RoundError> {
        let card = shoe.draw().ok_or(RoundError::ShoeExhausted)?;
        let outcome = player.hand.apply_card(card);
        debug!(player = player.name(), %card, total = player.hand.value(), "card dealt");
        Ok(outcome)
    }

    /// Draws a single card if the hand is below the stop value and not bust.
    ///
    /// Returns `None` once the dealer stands or busts.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::ShoeExhausted`] if a card is due but the shoe is
    /// empty.
    pub fn draw_next(&mut self, shoe: &mut Shoe) -> Result<Option<Card>, RoundError> {
        if self.hand.is_bust() || self.hand.value() >= self.stop {
            return Ok(None);
        }
        let card = shoe.draw().ok_or(RoundError::ShoeExhausted)?;
        self.hand.apply_card(card);
        debug!(%card, total = self.hand.value(), "dealer draws");
        Ok(Some(card))
    }

    /// Plays the dealer's hand: draw while the total is below the stop value.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::ShoeExhausted`] if the shoe runs out mid-draw.
    pub fn auto_play(&mut self, shoe: &mut Shoe) -> Result<DealerPlay, RoundError> {
        let mut drawn = Vec::new();
        while let Some(card) = self.draw_next(shoe)? {
            drawn.push(card);
        }

        let bust = self.hand.is_bust();
        info!(total = self.hand.value(), bust, "dealer stands");
        Ok(DealerPlay { drawn, bust })
    }

    /// Forfeits the player's bet to the house.
    pub const fn collect_bet(player: &mut Player) {
        player.lose_bet();
    }

    /// Pays the player their stake back plus equal winnings.
    pub const fn pay_bet(player: &mut Player) {
        player.win_bet();
    }

    /// Hands the player's stake back on a tie.
    pub const fn push_bet(player: &mut Player) {
        player.return_bet();
    }

    /// Returns the cards a spectator may see.
    ///
    /// Until `reveal` is set the first dealt card is left out.
    #[must_use]
    pub fn visible_cards(&self, reveal: bool) -> &[Card] {
        let cards = self.hand.cards();
        if reveal || cards.is_empty() {
            cards
        } else {
            &cards[1..]
        }
    }
}
