//! Read-only snapshot of a round for rendering, without exposing the
//! state machine itself.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit};
use crate::round::{Round, RoundPhase};
use crate::rules::{PLAYERS, TEAMS};
use crate::state::Seat;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", content = "data")]
pub enum PhaseSnapshot {
    /// Swap prompt pending for the given seat.
    AwaitingSwapAck { seat: Seat },
    Trick { trick_no: u8 },
    Complete,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub trump: Suit,
    pub phase: PhaseSnapshot,
    pub play_order: [Seat; PLAYERS],
    pub to_act: Option<Seat>,
    /// Hands indexed by seat id. The driver decides which hands to show.
    pub hands: [Vec<Card>; PLAYERS],
    pub current_trick: Vec<(Seat, Card)>,
    pub last_trick: Option<Vec<(Seat, Card)>>,
    pub tricks_won: [u8; PLAYERS],
    pub team_tricks: [u8; TEAMS],
    pub tricks_completed: u8,
}

/// Copy out everything a presentation layer needs after each call.
pub fn snapshot(round: &Round) -> RoundSnapshot {
    let phase = match round.phase() {
        RoundPhase::AwaitingSwapAck => PhaseSnapshot::AwaitingSwapAck {
            seat: round.play_order()[0],
        },
        RoundPhase::Trick { trick_no } => PhaseSnapshot::Trick { trick_no },
        RoundPhase::Complete => PhaseSnapshot::Complete,
    };

    let mut hands: [Vec<Card>; PLAYERS] = Default::default();
    for (seat, slot) in hands.iter_mut().enumerate() {
        *slot = round.hand(seat as Seat).to_vec();
    }

    RoundSnapshot {
        trump: round.trump(),
        phase,
        play_order: round.play_order(),
        to_act: round.to_act(),
        hands,
        current_trick: round.current_trick().to_vec(),
        last_trick: round.last_trick().map(<[_]>::to_vec),
        tricks_won: round.tricks_won(),
        team_tricks: round.team_tricks(),
        tricks_completed: round.tricks_completed(),
    }
}
