//! Property tests for shuffling, trick resolution, and whole rounds.
//!
//! Properties tested:
//! - A shuffle is a permutation, fully determined by the provider samples
//! - The trick winner is the highest trump played, or the highest card of
//!   the led suit when no trump appears
//! - Random full rounds preserve card conservation and tally invariants
//!   under both lead policies
//! - The next starter is always the first seat holding the maximum count

use proptest::prelude::*;

use crate::config::{LeadPolicy, RoundConfig};
use crate::dealing::{build_deck, shuffle};
use crate::match_state::next_starter_from;
use crate::rng::{ScriptedProvider, SeededProvider};
use crate::round::Round;
use crate::rules::DECK_SIZE;
use crate::test_gens;
use crate::trick::trick_winner;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_shuffle_is_a_deterministic_permutation(samples in test_gens::sample_seq()) {
        let a = shuffle(build_deck(), &mut ScriptedProvider::new(samples.clone())).unwrap();
        let b = shuffle(build_deck(), &mut ScriptedProvider::new(samples)).unwrap();
        prop_assert_eq!(&a, &b, "same samples must give the same order");

        let mut sorted = a;
        sorted.sort();
        let mut canonical = build_deck();
        canonical.sort();
        prop_assert_eq!(sorted, canonical, "no card may appear, vanish, or double");
    }

    #[test]
    fn prop_winner_is_highest_trump_or_highest_of_lead(
        (plays, trump, lead) in test_gens::complete_trick(),
    ) {
        let winner = trick_winner(&plays, trump).unwrap();

        let trumps: Vec<_> = plays.iter().filter(|(_, c)| c.suit == trump).collect();
        let expected = if trumps.is_empty() {
            plays
                .iter()
                .filter(|(_, c)| c.suit == lead)
                .max_by_key(|(_, c)| c.rank)
                .map(|&(seat, _)| seat)
                .unwrap()
        } else {
            trumps
                .iter()
                .max_by_key(|(_, c)| c.rank)
                .map(|&&(seat, _)| seat)
                .unwrap()
        };
        prop_assert_eq!(winner, expected);
    }

    #[test]
    fn prop_random_rounds_preserve_all_invariants(
        seed in any::<u64>(),
        first_seat in test_gens::seat(),
        picks in proptest::collection::vec(0usize..8, 32),
        winner_leads in any::<bool>(),
    ) {
        let config = RoundConfig {
            lead_policy: if winner_leads {
                LeadPolicy::WinnerLeads
            } else {
                LeadPolicy::FixedRotation
            },
        };
        let mut provider = SeededProvider::from_seed(seed);
        let mut round = Round::deal(first_seat, &mut provider, config).unwrap();
        prop_assert_eq!(round.take_swap_prompt(), Some(first_seat));

        for pick in picks {
            let seat = round.to_act().unwrap();
            let index = pick % round.hand(seat).len();
            round.select_card(seat, index).unwrap();

            let in_hands: usize = (0..4).map(|s| round.hand(s).len()).sum();
            prop_assert_eq!(
                in_hands + 4 * round.tricks_completed() as usize + round.current_trick().len(),
                DECK_SIZE,
            );
            prop_assert_eq!(
                round.team_tricks().iter().sum::<u8>(),
                round.tricks_completed(),
            );
        }

        prop_assert!(round.is_complete());
        prop_assert_eq!(round.tricks_completed(), 8);
        prop_assert_eq!(round.tricks_won().iter().sum::<u8>(), 8);
        for seat in 0..4 {
            prop_assert!(round.hand(seat).is_empty());
        }
    }

    #[test]
    fn prop_next_starter_is_the_first_max(
        tricks in [0u8..=8, 0u8..=8, 0u8..=8, 0u8..=8],
    ) {
        let starter = next_starter_from(&tricks) as usize;
        let max = *tricks.iter().max().unwrap();
        prop_assert_eq!(tricks[starter], max);
        for earlier in &tricks[..starter] {
            prop_assert!(*earlier < max);
        }
    }
}
