//! Trick resolution under follow-suit/trump precedence.

use crate::cards::{Card, Suit};
use crate::state::Seat;

/// Whether `candidate` displaces `incumbent` as the provisional trick
/// winner. A card displaces iff it is trump while the incumbent is not, or
/// it matches the incumbent's suit with a strictly higher rank. A card
/// matching neither trump nor the incumbent's suit can never win the
/// trick, whatever its rank.
pub fn card_displaces(candidate: Card, incumbent: Card, trump: Suit) -> bool {
    if candidate.suit == trump && incumbent.suit != trump {
        return true;
    }
    candidate.suit == incumbent.suit && candidate.rank > incumbent.rank
}

/// Winning seat of an ordered trick, or `None` for an empty trick.
/// Deterministic: rank ties cannot occur in a deck without duplicates.
pub fn trick_winner(plays: &[(Seat, Card)], trump: Suit) -> Option<Seat> {
    let (mut winner, mut best) = *plays.first()?;
    for &(seat, card) in &plays[1..] {
        if card_displaces(card, best, trump) {
            winner = seat;
            best = card;
        }
    }
    Some(winner)
}
