//! Table configuration options.

use crate::error::ConfigError;
use crate::hand::BLACKJACK;

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjtable::TableOptions;
///
/// let options = TableOptions::default()
///     .with_decks(6)
///     .with_min_bet(5)
///     .with_dealer_stop(17);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Number of decks in each round's shoe.
    pub decks: u8,
    /// Smallest bet the table accepts.
    pub min_bet: usize,
    /// The dealer draws while its total is below this value.
    pub dealer_stop: u8,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            decks: 2,
            min_bet: 2,
            dealer_stop: 17,
        }
    }
}

impl TableOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the table minimum bet.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_min_bet(10);
    /// assert_eq!(options.min_bet, 10);
    /// ```
    #[must_use]
    pub const fn with_min_bet(mut self, min_bet: usize) -> Self {
        self.min_bet = min_bet;
        self
    }

    /// Sets the dealer stop value.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_dealer_stop(16);
    /// assert_eq!(options.dealer_stop, 16);
    /// ```
    #[must_use]
    pub const fn with_dealer_stop(mut self, stop: u8) -> Self {
        self.dealer_stop = stop;
        self
    }

    /// Checks the options describe a playable table.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no decks, the minimum bet is zero, or the
    /// dealer stop value is outside 1..=21.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.decks == 0 {
            return Err(ConfigError::NoDecks);
        }
        if self.min_bet == 0 {
            return Err(ConfigError::ZeroMinimumBet);
        }
        if self.dealer_stop == 0 || self.dealer_stop > BLACKJACK {
            return Err(ConfigError::DealerStopOutOfRange);
        }
        Ok(())
    }
}
