//! Players seated at the table.

extern crate alloc;

use alloc::string::String;

use crate::error::BetError;
use crate::hand::Hand;

/// Where a player stands within the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeatStatus {
    /// Still taking hit/stand decisions.
    #[default]
    Active,
    /// Stood; the total is locked in for settlement.
    Standing,
    /// Went over 21; the bet has been collected.
    Busted,
    /// Paid out on a natural blackjack.
    Paid,
}

/// A player, persisting across rounds.
#[derive(Debug, Clone)]
pub struct Player {
    id: u8,
    name: String,
    balance: usize,
    current_bet: usize,
    wins: u32,
    /// The player's hand for the current round.
    pub hand: Hand,
    /// Progress through the current round.
    pub status: SeatStatus,
}

impl Player {
    /// Creates a player with an empty balance.
    #[must_use]
    pub fn new(id: u8, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            balance: 0,
            current_bet: 0,
            wins: 0,
            hand: Hand::new(),
            status: SeatStatus::Active,
        }
    }

    /// Returns the player ID.
    #[must_use]
    pub const fn id(&self) -> u8 {
        self.id
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the chips not currently at stake.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.balance
    }

    /// Returns the stake riding on the current round.
    #[must_use]
    pub const fn current_bet(&self) -> usize {
        self.current_bet
    }

    /// Returns how many rounds the player has been paid on.
    #[must_use]
    pub const fn wins(&self) -> u32 {
        self.wins
    }

    /// Adds chips to the balance and returns the new balance.
    pub const fn buy_chips(&mut self, amount: usize) -> usize {
        self.balance = self.balance.saturating_add(amount);
        self.balance
    }

    /// Moves `amount` from the balance onto the current bet.
    ///
    /// The table minimum is checked by the round before this is called.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is zero or exceeds the balance. The
    /// player is left unchanged on error.
    pub const fn place_bet(&mut self, amount: usize) -> Result<(), BetError> {
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }
        if amount > self.balance {
            return Err(BetError::InsufficientBalance);
        }

        self.balance -= amount;
        self.current_bet += amount;
        Ok(())
    }

    /// Clears the hand and status before joining a round.
    pub fn reset_for_round(&mut self) {
        self.hand.clear();
        self.status = SeatStatus::Active;
    }

    /// Forfeits the current bet.
    pub(crate) const fn lose_bet(&mut self) {
        self.current_bet = 0;
    }

    /// Returns the current bet plus equal winnings and counts a win.
    ///
    /// The balance saturates at `usize::MAX`, like [`Player::buy_chips`].
    pub(crate) const fn win_bet(&mut self) {
        self.balance = self
            .balance
            .saturating_add(self.current_bet.saturating_mul(2));
        self.current_bet = 0;
        self.wins = self.wins.saturating_add(1);
    }

    /// Returns the current bet without winnings.
    pub(crate) const fn return_bet(&mut self) {
        self.balance = self.balance.saturating_add(self.current_bet);
        self.current_bet = 0;
    }
}
