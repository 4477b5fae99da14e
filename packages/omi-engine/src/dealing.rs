//! Deck construction, provider-driven shuffling, and hand distribution.

use crate::cards::{Card, ALL_RANKS, ALL_SUITS};
use crate::errors::EngineError;
use crate::rng::RandomnessProvider;
use crate::rules::{DECK_SIZE, PLAYERS};

/// The full 32-card deck in canonical order: ranks outer, suits inner.
pub fn build_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for rank in ALL_RANKS {
        for suit in ALL_SUITS {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

/// Permute `deck` by drawing one sample per card and stable-sorting the
/// cards by sample value (ties keep original deck order). The output is
/// fully determined by the provider's sample sequence; a provider failure
/// aborts the shuffle before any partial ordering escapes.
pub fn shuffle<P: RandomnessProvider>(
    deck: Vec<Card>,
    provider: &mut P,
) -> Result<Vec<Card>, EngineError> {
    let mut keyed = Vec::with_capacity(deck.len());
    for card in deck {
        keyed.push((provider.next_sample()?, card));
    }
    // Vec::sort_by_key is stable, which gives the original-index tie-break.
    keyed.sort_by_key(|&(sample, _)| sample);
    Ok(keyed.into_iter().map(|(_, card)| card).collect())
}

/// Split a shuffled deck into `num_players` contiguous equal hands in deck
/// order. The table is fixed at four seats; the divisibility check guards
/// against configuration drift rather than an expected runtime condition.
pub fn deal(deck: Vec<Card>, num_players: usize) -> Result<Vec<Vec<Card>>, EngineError> {
    if num_players != PLAYERS {
        return Err(EngineError::PlayerCount {
            players: num_players,
        });
    }
    if deck.len() % num_players != 0 {
        return Err(EngineError::UnevenDeal {
            deck_len: deck.len(),
            players: num_players,
        });
    }

    let per_player = deck.len() / num_players;
    let mut hands = Vec::with_capacity(num_players);
    let mut rest = deck;
    for _ in 0..num_players {
        let tail = rest.split_off(per_player);
        hands.push(rest);
        rest = tail;
    }
    Ok(hands)
}
