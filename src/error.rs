//! Error types for table operations.

use thiserror::Error;

/// Errors that can occur when placing a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Bet is lower than the table minimum.
    #[error("bet is lower than the table's minimum bet")]
    BelowTableMinimum,
    /// Bet exceeds the player's balance.
    #[error("bet exceeds the current balance")]
    InsufficientBalance,
}

/// Errors raised while reading a value from the operator.
///
/// These never reach the round logic; the console retries until it gets a
/// valid value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// Input is not a positive number or not a known action.
    #[error("invalid input")]
    InvalidInput,
    /// The number was read but is not an acceptable bet.
    #[error(transparent)]
    Bet(#[from] BetError),
}

/// Errors that stop a round from being played to the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// No player can cover the table minimum.
    #[error("not enough players for the game")]
    NoPlayers,
    /// Not enough cards left in the shoe.
    #[error("not enough cards in the shoe")]
    ShoeExhausted,
    /// A bet provider returned a bet outside the table limits.
    #[error("bet rejected: {0}")]
    Bet(#[from] BetError),
    /// The operator's input stream is closed.
    #[error("input closed")]
    InputClosed,
}

/// Errors in table configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The shoe must contain at least one deck.
    #[error("the shoe needs at least one deck")]
    NoDecks,
    /// The minimum bet must be at least 1.
    #[error("the minimum bet must be at least 1")]
    ZeroMinimumBet,
    /// The dealer stop value must be between 1 and 21.
    #[error("the dealer stop value must be between 1 and 21")]
    DealerStopOutOfRange,
}
