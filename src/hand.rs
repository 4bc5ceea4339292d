//! Hand state shared by players and the dealer.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Highest total a hand can hold without busting.
pub const BLACKJACK: u8 = 21;

/// Result of taking a card into a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOutcome {
    /// The hand is still at or under 21.
    Ok,
    /// The hand went over 21 with no soft ace left to reduce it.
    Bust,
}

/// Cards dealt to a seat together with their running total.
///
/// The total counts every ace as 11 and then softens aces to 1, one at a
/// time, while the total is over 21.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the order they were dealt.
    cards: Vec<Card>,
    /// Running total after ace adjustment.
    sum: u8,
    /// Aces still counted as 11.
    soft_aces: u8,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            sum: 0,
            soft_aces: 0,
        }
    }

    /// Takes a card into the hand.
    ///
    /// ```
    /// use bjtable::{Card, DrawOutcome, Hand, Suit};
    ///
    /// let mut hand = Hand::new();
    /// hand.apply_card(Card::new(0, Suit::Hearts, 1));
    /// assert_eq!(hand.apply_card(Card::new(1, Suit::Clubs, 1)), DrawOutcome::Ok);
    /// assert_eq!(hand.value(), 12);
    /// assert_eq!(hand.soft_aces(), 1);
    /// ```
    pub fn apply_card(&mut self, card: Card) -> DrawOutcome {
        self.cards.push(card);
        self.sum = self.sum.saturating_add(card.value());
        if card.is_ace() {
            self.soft_aces += 1;
        }

        while self.sum > BLACKJACK {
            if self.soft_aces == 0 {
                return DrawOutcome::Bust;
            }
            self.soft_aces -= 1;
            self.sum -= 10;
        }

        DrawOutcome::Ok
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the current total.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.sum
    }

    /// Returns how many aces are still counted as 11.
    #[must_use]
    pub const fn soft_aces(&self) -> u8 {
        self.soft_aces
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub const fn is_soft(&self) -> bool {
        self.soft_aces > 0
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.sum > BLACKJACK
    }

    /// Returns whether the hand is a natural: exactly two cards totalling 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.sum == BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.sum = 0;
        self.soft_aces = 0;
    }
}
