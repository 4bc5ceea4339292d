//! Card, shoe and hand evaluation tests.

use std::collections::HashSet;

use bjtable::{Card, CardKind, DECK_SIZE, DrawOutcome, Hand, Shoe, Suit};
use proptest::prelude::*;

fn hand_of(ranks: &[u8]) -> (Hand, DrawOutcome) {
    let mut hand = Hand::new();
    let mut outcome = DrawOutcome::Ok;
    for (i, &rank) in ranks.iter().enumerate() {
        outcome = hand.apply_card(Card::new(i as u32, Suit::Clubs, rank));
    }
    (hand, outcome)
}

#[test]
fn card_kinds_values_and_names() {
    let ace = Card::new(0, Suit::Hearts, 1);
    let seven = Card::new(1, Suit::Clubs, 7);
    let queen = Card::new(2, Suit::Spades, 12);

    assert_eq!((ace.kind(), ace.value()), (CardKind::Ace, 11));
    assert_eq!((seven.kind(), seven.value()), (CardKind::Number, 7));
    assert_eq!((queen.kind(), queen.value()), (CardKind::Face, 10));

    assert_eq!(ace.to_string(), "Ace of Hearts");
    assert_eq!(seven.to_string(), "7 of Clubs");
    assert_eq!(queen.to_string(), "Queen of Spades");
    assert_eq!(Card::new(3, Suit::Diamonds, 10).to_string(), "10 of Diamonds");
}

#[test]
fn shoe_is_generated_suit_by_suit() {
    let shoe = Shoe::generate(1);
    let cards: Vec<Card> = shoe.cards().copied().collect();

    assert_eq!(cards.len(), DECK_SIZE);
    assert_eq!(cards[0], Card::new(0, Suit::Hearts, 1));
    assert!(cards[1..10].iter().all(|c| c.kind() == CardKind::Number));
    assert_eq!(cards[9].value(), 10);
    assert_eq!(cards[10].to_string(), "Jack of Hearts");
    assert_eq!(cards[12].to_string(), "King of Hearts");
    assert_eq!(cards[13], Card::new(13, Suit::Spades, 1));
    assert_eq!(cards[26].suit, Suit::Diamonds);
    assert_eq!(cards[51], Card::new(51, Suit::Clubs, 13));
}

#[test]
fn shoe_deals_from_the_front() {
    let mut shoe = Shoe::generate(1);
    assert_eq!(shoe.draw().map(|c| c.id), Some(0));
    assert_eq!(shoe.draw().map(|c| c.id), Some(1));
    assert_eq!(shoe.len(), DECK_SIZE - 2);

    let mut empty = Shoe::generate(0);
    assert!(empty.is_empty());
    assert_eq!(empty.draw(), None);
}

#[test]
fn pair_of_aces_is_soft_twelve() {
    let (hand, outcome) = hand_of(&[1, 1]);
    assert_eq!(outcome, DrawOutcome::Ok);
    assert_eq!(hand.value(), 12);
    assert_eq!(hand.soft_aces(), 1);
    assert!(hand.is_soft());
    assert!(!hand.is_blackjack());
}

#[test]
fn ace_nine_is_soft_twenty() {
    let (hand, outcome) = hand_of(&[1, 9]);
    assert_eq!(outcome, DrawOutcome::Ok);
    assert_eq!(hand.value(), 20);
    assert_eq!(hand.soft_aces(), 1);
}

#[test]
fn hard_twenty_four_busts() {
    let (hand, outcome) = hand_of(&[10, 9, 5]);
    assert_eq!(outcome, DrawOutcome::Bust);
    assert_eq!(hand.value(), 24);
    assert_eq!(hand.soft_aces(), 0);
    assert!(hand.is_bust());
}

#[test]
fn several_aces_soften_one_at_a_time() {
    let (hand, outcome) = hand_of(&[1, 1, 1, 9]);
    assert_eq!(outcome, DrawOutcome::Ok);
    assert_eq!(hand.value(), 12);
    assert_eq!(hand.soft_aces(), 0);

    let (hand, _) = hand_of(&[1, 5, 1]);
    assert_eq!(hand.value(), 17);
    assert_eq!(hand.soft_aces(), 1);
}

#[test]
fn blackjack_needs_exactly_two_cards() {
    let (hand, _) = hand_of(&[1, 13]);
    assert!(hand.is_blackjack());

    let (hand, _) = hand_of(&[7, 7, 7]);
    assert_eq!(hand.value(), 21);
    assert!(!hand.is_blackjack());
}

#[test]
fn cleared_hand_starts_over() {
    let (mut hand, _) = hand_of(&[1, 6]);
    hand.clear();
    assert!(hand.is_empty());
    assert_eq!(hand.value(), 0);
    assert_eq!(hand.soft_aces(), 0);
    assert_eq!(hand.len(), 0);
}

/// Best blackjack total for a set of ranks, computed from scratch.
fn best_total(ranks: &[u8]) -> u8 {
    let low: u8 = ranks.iter().map(|&r| if r == 1 { 1 } else { r.min(10) }).sum();
    if ranks.contains(&1) && low + 10 <= 21 {
        low + 10
    } else {
        low
    }
}

fn low_total(ranks: &[u8]) -> u32 {
    ranks
        .iter()
        .map(|&r| if r == 1 { 1 } else { u32::from(r.min(10)) })
        .sum()
}

proptest! {
    #[test]
    fn shoe_has_every_card_once(decks in 1u8..=8) {
        let shoe = Shoe::generate(decks);
        let total = DECK_SIZE * decks as usize;

        prop_assert_eq!(shoe.len(), total);
        let ids: HashSet<u32> = shoe.cards().map(|c| c.id).collect();
        prop_assert_eq!(ids.len(), total);
        prop_assert!(shoe.cards().all(|c| (c.id as usize) < total));
        prop_assert_eq!(shoe.cards().filter(|c| c.is_ace()).count(), 4 * decks as usize);
    }

    #[test]
    fn shuffle_permutes_without_loss(decks in 1u8..=4, seed in any::<u64>()) {
        use rand::SeedableRng;

        let mut shoe = Shoe::generate(decks);
        shoe.shuffle(&mut rand_chacha::ChaCha8Rng::seed_from_u64(seed));

        let mut ids: Vec<u32> = shoe.cards().map(|c| c.id).collect();
        ids.sort_unstable();
        let expected: Vec<u32> = (0..(DECK_SIZE * decks as usize) as u32).collect();
        prop_assert_eq!(ids, expected);
    }

    #[test]
    fn total_does_not_depend_on_order(
        ranks in proptest::collection::vec(1u8..=13, 1..6)
            .prop_filter("never busts", |r| low_total(r) <= 21)
    ) {
        let mut reversed = ranks.clone();
        reversed.reverse();
        let mut sorted = ranks.clone();
        sorted.sort_unstable();

        let (forward, outcome) = hand_of(&ranks);
        prop_assert_eq!(outcome, DrawOutcome::Ok);
        prop_assert_eq!(forward.value(), best_total(&ranks));
        prop_assert_eq!(hand_of(&reversed).0.value(), forward.value());
        prop_assert_eq!(hand_of(&sorted).0.value(), forward.value());
        prop_assert_eq!(hand_of(&sorted).0.soft_aces(), forward.soft_aces());
    }
}
