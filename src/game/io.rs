//! The boundary between the round engine and whoever drives it.

extern crate alloc;

use alloc::vec::Vec;
use core::str::FromStr;

use crate::card::Card;
use crate::dealer::Dealer;
use crate::error::{BetError, InputError, RoundError};
use crate::player::Player;
use crate::result::{PlayerResult, RoundResult};

use super::RoundPhase;

/// A player's decision on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Take another card.
    Hit,
    /// Keep the current total.
    Stand,
}

impl FromStr for Action {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("h") || s.eq_ignore_ascii_case("hit") {
            Ok(Self::Hit)
        } else if s.eq_ignore_ascii_case("s")
            || s.eq_ignore_ascii_case("stand")
            || s.eq_ignore_ascii_case("stop")
        {
            Ok(Self::Stand)
        } else {
            Err(InputError::InvalidInput)
        }
    }
}

/// Bounds a bet must fall within.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BetLimits {
    /// The table minimum.
    pub minimum: usize,
    /// The player's balance.
    pub balance: usize,
}

impl BetLimits {
    /// Creates limits for a player holding `balance` at a table with `minimum`.
    #[must_use]
    pub const fn new(minimum: usize, balance: usize) -> Self {
        Self { minimum, balance }
    }

    /// Checks a bet against the limits.
    ///
    /// ```
    /// use bjtable::{BetError, BetLimits};
    ///
    /// let limits = BetLimits::new(5, 50);
    /// assert_eq!(limits.check(10), Ok(10));
    /// assert_eq!(limits.check(2), Err(BetError::BelowTableMinimum));
    /// assert_eq!(limits.check(60), Err(BetError::InsufficientBalance));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the bet is zero, below the minimum or above the
    /// balance, checked in that order.
    pub const fn check(&self, amount: usize) -> Result<usize, BetError> {
        if amount == 0 {
            Err(BetError::ZeroBet)
        } else if amount < self.minimum {
            Err(BetError::BelowTableMinimum)
        } else if amount > self.balance {
            Err(BetError::InsufficientBalance)
        } else {
            Ok(amount)
        }
    }
}

/// Read-only snapshot of the table for rendering and decisions.
#[derive(Debug, Clone)]
pub struct TableView<'a> {
    /// The round ID.
    pub round_id: u64,
    /// Current phase of the round.
    pub phase: RoundPhase,
    /// Seated players in seating order.
    pub players: Vec<&'a Player>,
    /// The dealer.
    pub dealer: &'a Dealer,
}

impl TableView<'_> {
    /// Returns whether the dealer's hole card is shown.
    #[must_use]
    pub const fn dealer_revealed(&self) -> bool {
        self.phase.reveals_dealer()
    }

    /// Returns the dealer cards a spectator may see.
    #[must_use]
    pub fn dealer_cards(&self) -> &[Card] {
        self.dealer.visible_cards(self.dealer_revealed())
    }

    /// Returns the dealer total once the hole card is shown.
    #[must_use]
    pub fn dealer_value(&self) -> Option<u8> {
        self.dealer_revealed().then(|| self.dealer.hand.value())
    }
}

/// Something that happened during a round.
#[derive(Debug, Clone)]
pub enum RoundEvent<'a> {
    /// A player was left out because they cannot cover the table minimum.
    SatOut(&'a Player),
    /// Players are seated and betting is about to start.
    Started(TableView<'a>),
    /// The table after a deal, a hit, or the dealer's reveal.
    Table(TableView<'a>),
    /// A player was dealt a natural and has been paid.
    Blackjack(&'a Player),
    /// The dealer drew a card during auto-play.
    DealerDraw(Card),
    /// A standing player's bet was settled against the dealer.
    Settled(&'a PlayerResult),
    /// The round is over.
    Finished(&'a RoundResult),
}

/// Input and output capabilities a round needs.
///
/// The round engine never reads or writes anything itself; a console, a test
/// script, or a bot supplies decisions and receives events through this trait.
pub trait TableIo {
    /// Returns a bet for `player` inside `limits`.
    ///
    /// Implementations retry invalid input themselves.
    ///
    /// # Errors
    ///
    /// Returns an error if no bet can be obtained, e.g. input is closed.
    fn bet(&mut self, player: &Player, limits: BetLimits) -> Result<usize, RoundError>;

    /// Returns the next action for `player`, who is on their turn.
    ///
    /// # Errors
    ///
    /// Returns an error if no action can be obtained.
    fn action(&mut self, player: &Player, table: &TableView<'_>) -> Result<Action, RoundError>;

    /// Receives a round event.
    fn render(&mut self, event: &RoundEvent<'_>);
}
