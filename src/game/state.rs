//! Round phase types.

/// Phase of a round. Phases only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RoundPhase {
    /// Collecting bets from seated players.
    Betting,
    /// Dealing the two initial cards.
    Dealing,
    /// Players take hit/stand decisions in seating order.
    PlayerTurns,
    /// Dealer reveals the hole card and plays out the hand.
    DealerTurn,
    /// Bets have been settled.
    Settled,
}

impl RoundPhase {
    /// Returns whether the dealer's hole card may be shown.
    #[must_use]
    pub const fn reveals_dealer(self) -> bool {
        matches!(self, Self::DealerTurn | Self::Settled)
    }
}
