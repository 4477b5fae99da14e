//! Engine error type shared across dealing, round, and match operations.
//!
//! Configuration errors (`UnevenDeal`, `PlayerCount`, `SeatOutOfRange`) and
//! provider failures (`Randomness`) abort round construction before any
//! player state exists. Usage errors (`SwapPromptPending`, `OutOfTurn`,
//! `CardIndexOutOfRange`, `RoundOver`) reject the operation with no state
//! mutation so the caller can re-prompt.

use thiserror::Error;

use crate::state::Seat;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("deck of {deck_len} cards cannot be split evenly across {players} players")]
    UnevenDeal { deck_len: usize, players: usize },

    #[error("a round needs exactly four players, got {players}")]
    PlayerCount { players: usize },

    #[error("seat {seat} is out of range")]
    SeatOutOfRange { seat: Seat },

    #[error("randomness provider failed: {0}")]
    Randomness(String),

    #[error("swap prompt must be taken before play begins")]
    SwapPromptPending,

    #[error("seat {seat} acted out of turn (expected seat {expected})")]
    OutOfTurn { seat: Seat, expected: Seat },

    #[error("card index {index} out of range for hand of {hand_len}")]
    CardIndexOutOfRange { index: usize, hand_len: usize },

    #[error("round is already complete")]
    RoundOver,

    #[error("`{0}` is not a valid card token")]
    ParseCard(String),
}
