//! Round state machine: one full deal of eight tricks.
//!
//! A round owns the four players, the trump suit, the fixed play order,
//! and the in-progress trick. The driving application acknowledges the
//! swap prompt, then feeds one `select_card` call per observed input; the
//! engine validates each call fully before mutating anything, so a
//! rejected selection leaves the round exactly as it was.

use tracing::{debug, info};

use crate::cards::{Card, Suit, ALL_SUITS};
use crate::config::{LeadPolicy, RoundConfig};
use crate::dealing::{build_deck, deal, shuffle};
use crate::errors::EngineError;
use crate::rng::RandomnessProvider;
use crate::rules::{DECK_SIZE, PLAYERS, TEAMS, TRICKS_PER_ROUND};
use crate::state::{rotation_from, Player, Seat, Team};
use crate::trick::trick_winner;

/// Round progression phases.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RoundPhase {
    /// Dealt, but the swap prompt has not been surfaced yet.
    AwaitingSwapAck,
    /// Playing tricks; `trick_no` is 1-based.
    Trick { trick_no: u8 },
    /// All hands empty, eight tricks resolved.
    Complete,
}

/// Result of a single accepted card selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOutcome {
    /// Whether this selection completed a trick (4 cards played).
    pub trick_completed: bool,
    /// Winner of the completed trick, if one was completed.
    pub trick_winner: Option<Seat>,
    /// Whether this selection ended the round.
    pub round_complete: bool,
}

/// Final per-round figures reported to the match controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    pub tricks_won: [u8; PLAYERS],
    pub team_tricks: [u8; TEAMS],
}

#[derive(Debug, Clone)]
pub struct Round {
    config: RoundConfig,
    trump: Suit,
    /// Seats in play order: the canonical order rotated to the first seat.
    order: [Seat; PLAYERS],
    /// Players indexed by seat id (not play order).
    players: [Player; PLAYERS],
    phase: RoundPhase,
    /// Index into `order` of the seat expected to act.
    turn_idx: usize,
    trick_plays: Vec<(Seat, Card)>,
    /// Most recently resolved trick, retained for display.
    last_trick: Option<Vec<(Seat, Card)>>,
    tricks_completed: u8,
    team_tricks: [u8; TEAMS],
}

impl Round {
    /// Build, shuffle, and distribute a fresh deck, rotate seating so
    /// `first_seat` leads, flag that seat for the swap prompt, and draw the
    /// trump suit. Provider failure aborts before any round exists.
    pub fn deal<P: RandomnessProvider>(
        first_seat: Seat,
        provider: &mut P,
        config: RoundConfig,
    ) -> Result<Round, EngineError> {
        if first_seat as usize >= PLAYERS {
            return Err(EngineError::SeatOutOfRange { seat: first_seat });
        }

        let shuffled = shuffle(build_deck(), provider)?;
        let hands = deal(shuffled, PLAYERS)?;
        let trump = ALL_SUITS[(provider.next_sample()? % ALL_SUITS.len() as u64) as usize];

        let order = rotation_from(first_seat);
        let mut players = [
            Player::new(0),
            Player::new(1),
            Player::new(2),
            Player::new(3),
        ];
        for (&seat, hand) in order.iter().zip(hands) {
            players[seat as usize].hand = hand;
        }
        players[first_seat as usize].swap_requested = true;

        info!(first_seat, trump = ?trump, "round dealt");

        Ok(Round {
            config,
            trump,
            order,
            players,
            phase: RoundPhase::AwaitingSwapAck,
            turn_idx: 0,
            trick_plays: Vec::with_capacity(PLAYERS),
            last_trick: None,
            tricks_completed: 0,
            team_tricks: [0; TEAMS],
        })
    }

    /// Surface the swap prompt exactly once, clearing the flag and opening
    /// trick play. Returns `None` if the prompt was already taken.
    ///
    /// The prompt is display-only: no swap is ever executed.
    pub fn take_swap_prompt(&mut self) -> Option<Seat> {
        match self.phase {
            RoundPhase::AwaitingSwapAck => {
                let seat = self.order[0];
                self.players[seat as usize].swap_requested = false;
                self.phase = RoundPhase::Trick { trick_no: 1 };
                debug!(seat, "swap prompt taken, trick play open");
                Some(seat)
            }
            _ => None,
        }
    }

    /// Play the card at `index` of `seat`'s hand into the current trick.
    ///
    /// Validates phase, turn, and index before touching any state; the
    /// fourth card of a trick also resolves it and, on the eighth trick,
    /// completes the round.
    pub fn select_card(&mut self, seat: Seat, index: usize) -> Result<PlayOutcome, EngineError> {
        let trick_no = match self.phase {
            RoundPhase::AwaitingSwapAck => return Err(EngineError::SwapPromptPending),
            RoundPhase::Complete => return Err(EngineError::RoundOver),
            RoundPhase::Trick { trick_no } => trick_no,
        };

        let expected = self.order[self.turn_idx];
        if seat != expected {
            return Err(EngineError::OutOfTurn { seat, expected });
        }

        let hand_len = self.players[seat as usize].hand.len();
        if index >= hand_len {
            return Err(EngineError::CardIndexOutOfRange { index, hand_len });
        }

        let card = self.players[seat as usize].hand.remove(index);
        self.trick_plays.push((seat, card));
        self.turn_idx = (self.turn_idx + 1) % PLAYERS;
        debug!(seat, card = %card, trick_no, "card played");

        let mut outcome = PlayOutcome {
            trick_completed: false,
            trick_winner: None,
            round_complete: false,
        };

        if self.trick_plays.len() == PLAYERS {
            if let Some(winner) = trick_winner(&self.trick_plays, self.trump) {
                self.players[winner as usize].tricks_won += 1;
                self.team_tricks[Team::of(winner).index()] += 1;
                if self.config.lead_policy == LeadPolicy::WinnerLeads {
                    self.turn_idx = self
                        .order
                        .iter()
                        .position(|&s| s == winner)
                        .unwrap_or(self.turn_idx);
                }
                outcome.trick_winner = Some(winner);
                info!(winner, trick_no, "trick resolved");
            }
            outcome.trick_completed = true;
            self.last_trick = Some(std::mem::take(&mut self.trick_plays));
            self.tricks_completed += 1;

            if self.tricks_completed == TRICKS_PER_ROUND {
                self.phase = RoundPhase::Complete;
                outcome.round_complete = true;
                info!(
                    tricks_won = ?self.tricks_won(),
                    team_tricks = ?self.team_tricks,
                    "round complete"
                );
            } else {
                self.phase = RoundPhase::Trick {
                    trick_no: trick_no + 1,
                };
            }
        }

        self.debug_assert_conservation();
        Ok(outcome)
    }

    /// Every card is in exactly one place: a hand, the live trick, or a
    /// resolved trick.
    fn debug_assert_conservation(&self) {
        debug_assert_eq!(
            self.players.iter().map(|p| p.hand.len()).sum::<usize>()
                + PLAYERS * self.tricks_completed as usize
                + self.trick_plays.len(),
            DECK_SIZE,
        );
    }

    pub fn trump(&self) -> Suit {
        self.trump
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn config(&self) -> RoundConfig {
        self.config
    }

    /// Seats in play order; `play_order()[0]` is the round's first seat.
    pub fn play_order(&self) -> [Seat; PLAYERS] {
        self.order
    }

    /// Seat expected to act, `None` outside trick play.
    pub fn to_act(&self) -> Option<Seat> {
        match self.phase {
            RoundPhase::Trick { .. } => Some(self.order[self.turn_idx]),
            _ => None,
        }
    }

    /// Current hand of a seat (0..=3), in dealt order.
    pub fn hand(&self, seat: Seat) -> &[Card] {
        &self.players[seat as usize].hand
    }

    pub fn swap_requested(&self, seat: Seat) -> bool {
        self.players[seat as usize].swap_requested
    }

    pub fn current_trick(&self) -> &[(Seat, Card)] {
        &self.trick_plays
    }

    pub fn last_trick(&self) -> Option<&[(Seat, Card)]> {
        self.last_trick.as_deref()
    }

    pub fn tricks_completed(&self) -> u8 {
        self.tricks_completed
    }

    pub fn tricks_won(&self) -> [u8; PLAYERS] {
        let mut counts = [0; PLAYERS];
        for (slot, player) in counts.iter_mut().zip(&self.players) {
            *slot = player.tricks_won;
        }
        counts
    }

    pub fn team_tricks(&self) -> [u8; TEAMS] {
        self.team_tricks
    }

    pub fn is_complete(&self) -> bool {
        self.phase == RoundPhase::Complete
    }

    /// Final figures, available once the round is complete.
    pub fn summary(&self) -> Option<RoundSummary> {
        if !self.is_complete() {
            return None;
        }
        Some(RoundSummary {
            tricks_won: self.tricks_won(),
            team_tricks: self.team_tricks,
        })
    }
}
