//! A turn-based blackjack table with an I/O-free round engine and optional
//! `no_std` support.
//!
//! The crate provides a [`Table`] that keeps players and the dealer between
//! rounds, and a [`Round`] that runs betting, the initial deal, player turns,
//! the dealer's turn, and settlement. All input and output goes through the
//! [`TableIo`] trait; the `std` feature ships a console implementation in
//! [`console`].
//!
//! # Example
//!
//! ```no_run
//! use bjtable::{Table, TableOptions};
//!
//! let mut table = Table::new(TableOptions::default(), 42).unwrap();
//! let id = table.join("Miguel").unwrap();
//! table.buy_chips(id, 100);
//! # #[cfg(feature = "std")]
//! # {
//! let mut console = bjtable::console::ConsoleIo::new(std::io::stdin().lock(), std::io::stdout());
//! let _ = table.play_round(&mut console);
//! # }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod console;
pub mod dealer;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;
pub mod shoe;

// Re-export main types
pub use card::{Card, CardKind, DECK_SIZE, Suit};
pub use dealer::{Dealer, DealerPlay};
pub use error::{BetError, ConfigError, InputError, RoundError};
pub use game::{Action, BetLimits, Round, RoundEvent, RoundPhase, Table, TableIo, TableView};
pub use hand::{BLACKJACK, DrawOutcome, Hand};
pub use options::TableOptions;
pub use player::{Player, SeatStatus};
pub use result::{Outcome, PlayerResult, RoundResult};
pub use shoe::Shoe;
