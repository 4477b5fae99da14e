//! Match controller: cumulative team scores across rounds and the seat
//! that opens the next round.
//!
//! Deliberately thin. How many rounds to play is the caller's policy; the
//! controller only accumulates completed-round figures and reports state.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::round::RoundSummary;
use crate::rules::{PLAYERS, TEAMS};
use crate::state::Seat;

/// Relative position of the two teams.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Standing {
    TeamOneAhead,
    TeamTwoAhead,
    Level,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchState {
    team_scores: [u32; TEAMS],
    rounds_played: u32,
    next_starter: Seat,
}

/// First seat (in seat order) with the highest trick count. The tie-break
/// is deterministic so replays agree on the next starter.
pub fn next_starter_from(tricks_won: &[u8; PLAYERS]) -> Seat {
    let mut best = 0;
    for (seat, &won) in tricks_won.iter().enumerate().skip(1) {
        if won > tricks_won[best] {
            best = seat;
        }
    }
    best as Seat
}

impl MatchState {
    /// Fresh match; `first_starter` opens the first round.
    pub fn new(first_starter: Seat) -> Self {
        Self {
            team_scores: [0; TEAMS],
            rounds_played: 0,
            next_starter: first_starter,
        }
    }

    /// Fold a completed round into the match: team scores accumulate (never
    /// decrease) and the round's best seat becomes the next starter.
    pub fn record_round(&mut self, summary: &RoundSummary) {
        for (total, &won) in self.team_scores.iter_mut().zip(&summary.team_tricks) {
            *total += won as u32;
        }
        self.rounds_played += 1;
        self.next_starter = next_starter_from(&summary.tricks_won);
        info!(
            rounds_played = self.rounds_played,
            team_scores = ?self.team_scores,
            next_starter = self.next_starter,
            "round recorded"
        );
    }

    pub fn team_scores(&self) -> [u32; TEAMS] {
        self.team_scores
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Seat that should open the next round.
    pub fn next_starter(&self) -> Seat {
        self.next_starter
    }

    pub fn standing(&self) -> Standing {
        match self.team_scores[0].cmp(&self.team_scores[1]) {
            std::cmp::Ordering::Greater => Standing::TeamOneAhead,
            std::cmp::Ordering::Less => Standing::TeamTwoAhead,
            std::cmp::Ordering::Equal => Standing::Level,
        }
    }
}
