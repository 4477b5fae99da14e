// Proptest generators for engine types.
// Card generators guarantee uniqueness where trick and deal tests need it.

use proptest::prelude::*;

use crate::cards::{Card, Suit, ALL_RANKS, ALL_SUITS};
use crate::state::Seat;

/// Generate a random Suit
pub fn suit() -> impl Strategy<Value = Suit> {
    prop_oneof![
        Just(Suit::Clubs),
        Just(Suit::Diamonds),
        Just(Suit::Hearts),
        Just(Suit::Spades),
    ]
}

/// Generate a Seat (0-3)
pub fn seat() -> impl Strategy<Value = Seat> {
    0u8..=3u8
}

/// Generate a vector of N unique cards from the 32-card universe
pub fn unique_cards(count: usize) -> impl Strategy<Value = Vec<Card>> {
    Just(()).prop_perturb(move |_, mut rng| {
        let mut all_cards = Vec::with_capacity(32);
        for &rank in &ALL_RANKS {
            for &suit in &ALL_SUITS {
                all_cards.push(Card { suit, rank });
            }
        }
        // Shuffle and take first N
        for i in 0..count.min(all_cards.len()) {
            let j = rng.random_range(i..all_cards.len());
            all_cards.swap(i, j);
        }
        all_cards.truncate(count);
        all_cards
    })
}

/// Complete trick: 4 unique cards played from `leader` around the table.
/// Returns (plays, trump_suit, lead_suit).
pub fn complete_trick() -> impl Strategy<Value = (Vec<(Seat, Card)>, Suit, Suit)> {
    (seat(), unique_cards(4), suit()).prop_map(|(leader, cards, trump)| {
        let lead_suit = cards[0].suit;
        let plays: Vec<(Seat, Card)> = cards
            .into_iter()
            .enumerate()
            .map(|(i, card)| ((leader + i as u8) % 4, card))
            .collect();
        (plays, trump, lead_suit)
    })
}

/// One shuffle's worth of provider samples
pub fn sample_seq() -> impl Strategy<Value = Vec<u64>> {
    proptest::collection::vec(any::<u64>(), 32)
}
