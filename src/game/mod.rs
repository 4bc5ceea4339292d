//! Table and round management.

use alloc::string::String;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::dealer::Dealer;
use crate::error::{ConfigError, RoundError};
use crate::options::TableOptions;
use crate::player::Player;
use crate::result::RoundResult;
use crate::shoe::Shoe;

pub mod io;
mod round;
pub mod state;

pub use io::{Action, BetLimits, RoundEvent, TableIo, TableView};
pub use round::Round;
pub use state::RoundPhase;

/// A blackjack table: the dealer, the registered players, and the rules.
///
/// The table outlives its rounds. Each call to [`Table::play_round`] builds a
/// fresh shoe, seats every player who can cover the minimum bet, and plays a
/// single [`Round`] through the supplied [`TableIo`].
pub struct Table {
    /// Table options.
    pub options: TableOptions,
    dealer: Dealer,
    players: Vec<Player>,
    /// Next player ID to assign; `None` once every ID has been handed out.
    next_id: Option<u8>,
    /// Next round ID to assign.
    next_round_id: u64,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Table {
    /// Creates a new table with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{Table, TableOptions};
    ///
    /// let mut table = Table::new(TableOptions::default(), 42).unwrap();
    /// let id = table.join("Miguel").unwrap();
    /// table.buy_chips(id, 100);
    /// assert_eq!(table.player(id).map(|p| p.balance()), Some(100));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid.
    pub fn new(options: TableOptions, seed: u64) -> Result<Self, ConfigError> {
        options.validate()?;

        Ok(Self {
            dealer: Dealer::new(options.dealer_stop),
            options,
            players: Vec::new(),
            next_id: Some(0),
            next_round_id: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    /// Registers a player with an empty balance.
    ///
    /// Returns the assigned player ID, or `None` once all 256 IDs have been
    /// used. IDs are never reused, even after a player leaves.
    pub fn join(&mut self, name: impl Into<String>) -> Option<u8> {
        let id = self.next_id?;
        self.next_id = id.checked_add(1);
        self.players.push(Player::new(id, name));
        Some(id)
    }

    /// Removes a player from the table.
    pub fn leave(&mut self, player_id: u8) -> Option<Player> {
        let index = self.players.iter().position(|p| p.id() == player_id)?;
        Some(self.players.remove(index))
    }

    /// Returns the specified player.
    #[must_use]
    pub fn player(&self, player_id: u8) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == player_id)
    }

    /// Returns the specified player mutably.
    pub fn player_mut(&mut self, player_id: u8) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id() == player_id)
    }

    /// Returns all registered players.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Adds chips to a player's balance.
    ///
    /// Returns the new balance, or `None` if the player is not found.
    pub fn buy_chips(&mut self, player_id: u8, amount: usize) -> Option<usize> {
        self.player_mut(player_id).map(|p| p.buy_chips(amount))
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// Returns how many rounds have been started.
    #[must_use]
    pub const fn rounds_played(&self) -> u64 {
        self.next_round_id
    }

    /// Builds and shuffles a shoe for the next round.
    pub fn new_shoe(&mut self) -> Shoe {
        let mut shoe = Shoe::generate(self.options.decks);
        shoe.shuffle(&mut self.rng);
        shoe
    }

    /// Plays one round with a freshly shuffled shoe.
    ///
    /// # Errors
    ///
    /// See [`Table::play_round_with_shoe`].
    pub fn play_round<I: TableIo + ?Sized>(&mut self, io: &mut I) -> Result<RoundResult, RoundError> {
        let shoe = self.new_shoe();
        self.play_round_with_shoe(shoe, io)
    }

    /// Plays one round dealt from `shoe`.
    ///
    /// Players whose balance is below the table minimum sit the round out.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::NoPlayers`] if nobody can be seated, or any error
    /// from [`Round::play`].
    pub fn play_round_with_shoe<I: TableIo + ?Sized>(
        &mut self,
        shoe: Shoe,
        io: &mut I,
    ) -> Result<RoundResult, RoundError> {
        let min_bet = self.options.min_bet;
        let mut seated = Vec::with_capacity(self.players.len());

        for player in &mut self.players {
            if player.balance() >= min_bet {
                seated.push(player);
            } else {
                debug!(player = player.name(), balance = player.balance(), "sitting out");
                io.render(&RoundEvent::SatOut(&*player));
            }
        }

        if seated.is_empty() {
            return Err(RoundError::NoPlayers);
        }

        let id = self.next_round_id;
        self.next_round_id += 1;
        Round::new(id, min_bet, shoe, &mut self.dealer, seated).play(io)
    }
}
