//! Fixed table constants for the four-player short-deck game.

pub const PLAYERS: usize = 4;
pub const TEAMS: usize = 2;
pub const DECK_SIZE: usize = 32;
pub const HAND_SIZE: usize = DECK_SIZE / PLAYERS;
pub const TRICKS_PER_ROUND: u8 = HAND_SIZE as u8;
