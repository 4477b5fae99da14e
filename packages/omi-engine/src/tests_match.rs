//! Match controller tests.

use crate::config::RoundConfig;
use crate::match_state::{next_starter_from, MatchState, Standing};
use crate::rng::SeededProvider;
use crate::round::{Round, RoundSummary};

fn summary(tricks_won: [u8; 4]) -> RoundSummary {
    let mut team_tricks = [0u8; 2];
    for (seat, &won) in tricks_won.iter().enumerate() {
        team_tricks[seat % 2] += won;
    }
    RoundSummary {
        tricks_won,
        team_tricks,
    }
}

#[test]
fn next_starter_is_the_first_seat_with_the_max_count() {
    assert_eq!(next_starter_from(&[3, 2, 3, 0]), 0);
    assert_eq!(next_starter_from(&[0, 2, 3, 3]), 2);
    assert_eq!(next_starter_from(&[2, 2, 2, 2]), 0);
    assert_eq!(next_starter_from(&[0, 0, 0, 8]), 3);
}

#[test]
fn fresh_match_reports_level_scores_and_the_given_starter() {
    let m = MatchState::new(2);
    assert_eq!(m.team_scores(), [0, 0]);
    assert_eq!(m.rounds_played(), 0);
    assert_eq!(m.next_starter(), 2);
    assert_eq!(m.standing(), Standing::Level);
}

#[test]
fn recording_rounds_accumulates_team_scores() {
    let mut m = MatchState::new(0);
    m.record_round(&summary([3, 1, 2, 2]));
    assert_eq!(m.team_scores(), [5, 3]);
    assert_eq!(m.rounds_played(), 1);
    assert_eq!(m.standing(), Standing::TeamOneAhead);

    m.record_round(&summary([0, 4, 1, 3]));
    assert_eq!(m.team_scores(), [6, 10]);
    assert_eq!(m.rounds_played(), 2);
    assert_eq!(m.standing(), Standing::TeamTwoAhead);
}

#[test]
fn scores_never_decrease() {
    let mut m = MatchState::new(0);
    let mut previous = m.team_scores();
    for tricks in [[8, 0, 0, 0], [0, 0, 0, 8], [2, 2, 2, 2]] {
        m.record_round(&summary(tricks));
        let now = m.team_scores();
        assert!(now[0] >= previous[0] && now[1] >= previous[1]);
        previous = now;
    }
}

#[test]
fn drawn_match_reports_level() {
    let mut m = MatchState::new(0);
    m.record_round(&summary([2, 2, 2, 2]));
    assert_eq!(m.standing(), Standing::Level);
}

#[test]
fn the_round_winner_starts_the_next_round() {
    let mut m = MatchState::new(0);
    m.record_round(&summary([1, 5, 1, 1]));
    assert_eq!(m.next_starter(), 1);
}

#[test]
fn a_played_round_feeds_the_controller_end_to_end() {
    let mut m = MatchState::new(0);
    let mut provider = SeededProvider::from_seed(404);
    let mut round = Round::deal(m.next_starter(), &mut provider, RoundConfig::default()).unwrap();

    round.take_swap_prompt();
    while !round.is_complete() {
        let seat = round.to_act().unwrap();
        round.select_card(seat, 0).unwrap();
    }

    let summary = round.summary().unwrap();
    m.record_round(&summary);

    assert_eq!(m.rounds_played(), 1);
    assert_eq!(
        m.team_scores().iter().sum::<u32>(),
        8,
        "one round contributes exactly eight tricks"
    );
    assert!(m.next_starter() < 4);
    assert_eq!(
        summary.tricks_won[m.next_starter() as usize],
        *summary.tricks_won.iter().max().unwrap()
    );
}
