//! The shoe cards are dealt from.

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Suit};

/// An ordered sequence of cards consumed from the front.
#[derive(Debug, Clone, Default)]
pub struct Shoe {
    cards: VecDeque<Card>,
}

impl Shoe {
    /// Builds an unshuffled shoe of `num_decks` standard decks.
    ///
    /// Each deck is laid out suit by suit (Hearts, Spades, Diamonds, Clubs),
    /// and each suit as Ace, 2 through 10, Jack, Queen, King. Card ids count
    /// up from 0 across the whole shoe.
    ///
    /// ```
    /// use bjtable::Shoe;
    ///
    /// let shoe = Shoe::generate(2);
    /// assert_eq!(shoe.len(), 104);
    /// assert_eq!(shoe.cards().next().map(|c| c.id), Some(0));
    /// ```
    #[must_use]
    pub fn generate(num_decks: u8) -> Self {
        let mut cards = VecDeque::with_capacity(num_decks as usize * DECK_SIZE);
        let mut next_id: u32 = 0;

        for _ in 0..num_decks {
            for suit in Suit::ALL {
                for rank in 1..=13 {
                    cards.push_back(Card::new(next_id, suit, rank));
                    next_id += 1;
                }
            }
        }

        Self { cards }
    }

    /// Creates a shoe that deals `cards` in the given order.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }

    /// Applies a uniform random permutation to the remaining cards.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
    }

    /// Removes and returns the next card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Returns the remaining cards in dealing order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
