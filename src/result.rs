//! Round result types for settlement.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// How a player's round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player wins (dealer busts or player has the higher total).
    Win,
    /// Player loses (player busts or dealer has the higher total).
    Lose,
    /// Push (tie).
    Push,
    /// Player was dealt a natural blackjack.
    Blackjack,
}

/// Result for a single player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerResult {
    /// The player ID.
    pub player_id: u8,
    /// The player's name.
    pub name: String,
    /// The outcome of the round.
    pub outcome: Outcome,
    /// The stake placed this round.
    pub bet: usize,
    /// Chips returned to the player's balance (stake included).
    pub payout: usize,
    /// The player's final total.
    pub player_value: u8,
}

impl PlayerResult {
    /// Net change to the player's chips over the round.
    ///
    /// Saturates at the `isize` bounds.
    #[must_use]
    pub fn net(&self) -> isize {
        if self.payout >= self.bet {
            isize::try_from(self.payout - self.bet).unwrap_or(isize::MAX)
        } else {
            isize::try_from(self.bet - self.payout).map_or(isize::MIN, |loss| -loss)
        }
    }
}

impl fmt::Display for PlayerResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            Outcome::Blackjack => write!(f, "Blackjack for {}!", self.name),
            Outcome::Win => write!(f, "{}: won", self.name),
            Outcome::Push => write!(f, "{}: Push", self.name),
            Outcome::Lose => write!(f, "{}: lost", self.name),
        }
    }
}

/// Result of an entire round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// The round ID.
    pub round_id: u64,
    /// Results for each seated player, in seating order.
    pub players: Vec<PlayerResult>,
    /// The dealer's final total.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer played out a hand (false when no player was left).
    pub dealer_played: bool,
}
