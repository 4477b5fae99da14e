//! Omi game engine: pure trick-taking logic for a 32-card, four-player,
//! two-team game.
//!
//! The crate owns dealing, trump assignment, turn sequencing, trick
//! resolution, and round/match bookkeeping. Rendering, input capture, and
//! the concrete entropy source live in the calling application; the engine
//! only mutates in-memory state and emits `tracing` events.

pub mod cards;
pub mod config;
pub mod dealing;
pub mod errors;
pub mod match_state;
pub mod rng;
pub mod round;
pub mod rules;
pub mod snapshot;
pub mod state;
pub mod trick;

#[cfg(test)]
mod test_bootstrap;
#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_match;
#[cfg(test)]
mod tests_props;

// Re-exports for ergonomics
pub use cards::{Card, Rank, Suit, ALL_RANKS, ALL_SUITS};
pub use config::{LeadPolicy, RoundConfig};
pub use dealing::{build_deck, deal, shuffle};
pub use errors::EngineError;
pub use match_state::{MatchState, Standing};
pub use rng::{RandomnessProvider, RngProvider, ScriptedProvider, SeededProvider};
pub use round::{PlayOutcome, Round, RoundPhase, RoundSummary};
pub use snapshot::{snapshot, PhaseSnapshot, RoundSnapshot};
pub use state::{Seat, Team};
pub use trick::{card_displaces, trick_winner};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::init();
}
