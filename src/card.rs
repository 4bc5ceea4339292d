//! Card types.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All suits in shoe generation order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Spades, Self::Diamonds, Self::Clubs];

    /// Returns the English name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hearts => "Hearts",
            Self::Spades => "Spades",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
        }
    }
}

/// Suit-independent category of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardKind {
    /// An ace, worth 11 until softened to 1.
    Ace,
    /// A number card from 2 to 10.
    Number,
    /// Jack, Queen or King.
    Face,
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// Identity of the card, unique within the shoe it was generated in.
    pub id: u32,
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are treated as number cards worth their rank.
    #[must_use]
    pub const fn new(id: u32, suit: Suit, rank: u8) -> Self {
        Self { id, suit, rank }
    }

    /// Returns the kind of the card.
    #[must_use]
    pub const fn kind(&self) -> CardKind {
        match self.rank {
            1 => CardKind::Ace,
            11..=13 => CardKind::Face,
            _ => CardKind::Number,
        }
    }

    /// Returns the blackjack value of the card with aces counted high.
    #[must_use]
    pub const fn value(&self) -> u8 {
        match self.kind() {
            CardKind::Ace => 11,
            CardKind::Face => 10,
            CardKind::Number => self.rank,
        }
    }

    /// Returns whether the card is an ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        matches!(self.kind(), CardKind::Ace)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = self.suit.name();
        match self.rank {
            1 => write!(f, "Ace of {suit}"),
            11 => write!(f, "Jack of {suit}"),
            12 => write!(f, "Queen of {suit}"),
            13 => write!(f, "King of {suit}"),
            rank => write!(f, "{rank} of {suit}"),
        }
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
