//! Seat and team math plus per-seat player state.
//!
//! Four fixed seats (0..=3). Seats 0 and 2 form team one, seats 1 and 3
//! team two, for the life of a match. These helpers are the single source
//! of truth for rotation and "who acts next".

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::rules::PLAYERS;

pub type Seat = u8; // 0..=3

/// Returns the seat `delta` steps around the table, wrapping modulo 4.
#[inline]
pub fn seat_offset(seat: Seat, delta: i8) -> Seat {
    let seat_i = seat as i16;
    let delta_i = delta as i16;
    ((seat_i + delta_i).rem_euclid(PLAYERS as i16)) as Seat
}

/// Returns the next seat in play order (0 → 1 → 2 → 3 → 0).
#[inline]
pub fn next_seat(seat: Seat) -> Seat {
    seat_offset(seat, 1)
}

/// Play order for a round led by `first`: the canonical order rotated so
/// that seats before `first` move to the end, relative order preserved.
pub fn rotation_from(first: Seat) -> [Seat; PLAYERS] {
    let mut order = [0; PLAYERS];
    for (i, slot) in order.iter_mut().enumerate() {
        *slot = seat_offset(first, i as i8);
    }
    order
}

/// Fixed two-team partition by seat parity.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Team {
    One,
    Two,
}

impl Team {
    pub fn of(seat: Seat) -> Team {
        if seat % 2 == 0 {
            Team::One
        } else {
            Team::Two
        }
    }

    /// Index into per-team tally arrays.
    pub fn index(self) -> usize {
        match self {
            Team::One => 0,
            Team::Two => 1,
        }
    }
}

/// Mutable per-seat state for one round.
#[derive(Debug, Clone)]
pub struct Player {
    pub seat: Seat,
    /// Cards currently held; shrinks by one per trick played.
    pub hand: Vec<Card>,
    /// Tricks won this round, monotone within the round.
    pub tricks_won: u8,
    /// Transient swap-request flag, set for exactly one seat at round start.
    pub swap_requested: bool,
}

impl Player {
    pub fn new(seat: Seat) -> Self {
        Self {
            seat,
            hand: Vec::new(),
            tricks_won: 0,
            swap_requested: false,
        }
    }
}
