//! Omi simulator CLI - plays complete matches in memory.
//!
//! This tool is the "external driver" for the engine: it owns the match,
//! decides how many rounds to play, maps a selection strategy (random
//! picks here) onto `select_card` calls, and renders snapshots as text.

use clap::{Parser, ValueEnum};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use omi_engine::{
    snapshot, LeadPolicy, MatchState, Round, RoundConfig, Seat, SeededProvider, Standing,
};

#[derive(Parser)]
#[command(name = "omi-sim")]
#[command(about = "In-memory Omi match simulator")]
struct Args {
    /// Number of rounds to play in the match
    #[arg(short, long, default_value = "4")]
    rounds: u32,

    /// Seat that starts the first round
    #[arg(long, default_value = "0")]
    first_seat: Seat,

    /// Match seed (for deterministic deals and picks)
    #[arg(long)]
    seed: Option<u64>,

    /// Who leads after a resolved trick
    #[arg(long, default_value = "fixed-rotation")]
    lead: LeadChoice,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, ValueEnum)]
enum LeadChoice {
    FixedRotation,
    WinnerLeads,
}

impl From<LeadChoice> for LeadPolicy {
    fn from(choice: LeadChoice) -> Self {
        match choice {
            LeadChoice::FixedRotation => LeadPolicy::FixedRotation,
            LeadChoice::WinnerLeads => LeadPolicy::WinnerLeads,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    info!(seed, rounds = args.rounds, "starting match");

    let config = RoundConfig {
        lead_policy: args.lead.into(),
    };
    let mut picker = ChaCha8Rng::seed_from_u64(seed ^ 0x70c4);
    let mut game = MatchState::new(args.first_seat);

    for round_no in 1..=args.rounds {
        let summary = play_round(round_no, seed, &mut game, config, &mut picker)?;
        println!(
            "round {round_no}: tricks per seat {:?}, teams {:?}",
            summary.tricks_won, summary.team_tricks
        );
    }

    let [team1, team2] = game.team_scores();
    println!("final score: team 1 = {team1}, team 2 = {team2}");
    match game.standing() {
        Standing::TeamOneAhead => println!("team 1 wins!"),
        Standing::TeamTwoAhead => println!("team 2 wins!"),
        Standing::Level => println!("draw"),
    }
    println!("next match would start with seat {}", game.next_starter());

    Ok(())
}

fn play_round(
    round_no: u32,
    seed: u64,
    game: &mut MatchState,
    config: RoundConfig,
    picker: &mut ChaCha8Rng,
) -> Result<omi_engine::RoundSummary, Box<dyn std::error::Error>> {
    // One derived deal seed per round keeps whole matches replayable.
    let mut provider = SeededProvider::from_seed(seed.wrapping_add(round_no as u64));
    let mut round = Round::deal(game.next_starter(), &mut provider, config)?;

    if let Some(seat) = round.take_swap_prompt() {
        info!(seat, "seat may ask to swap with their teammate");
    }
    info!(round_no, trump = ?round.trump(), first_seat = round.play_order()[0], "round begins");

    while !round.is_complete() {
        let seat = round.to_act().expect("a seat must act");
        let index = picker.random_range(0..round.hand(seat).len());
        let outcome = round.select_card(seat, index)?;
        if let Some(winner) = outcome.trick_winner {
            debug!(winner, "trick taken");
            let snap = snapshot(&round);
            if let Some(trick) = snap.last_trick {
                let cards: Vec<String> =
                    trick.iter().map(|(s, c)| format!("{s}:{c}")).collect();
                debug!(trick = %cards.join(" "), "table");
            }
        }
    }

    let summary = round.summary().expect("complete round has a summary");
    game.record_round(&summary);
    Ok(summary)
}
