use std::path::PathBuf;

use anyhow::bail;
use rand::SeedableRng as _;
use rand_pcg::Pcg32;
use serde::Serialize;
use teamsplit_engine::{Player, Team, split_teams, split_teams_with_rng, validate_roster};
use teamsplit_evaluator::{BalanceReport, balance_report};

use crate::util::{read_json_file, write_json};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SplitArg {
    /// Roster JSON file: an array of {"name", "score"} objects
    #[arg(long)]
    roster: PathBuf,
    /// Number of teams to form
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u16).range(2..))]
    teams: u16,
    /// Seed for the randomized fallback, for reproducible output
    #[arg(long)]
    seed: Option<u64>,
    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,
    /// Write the JSON document to this file instead of stdout (implies --json)
    #[arg(long)]
    output: Option<PathBuf>,
}

/// What `split` produces: the teams plus their balance report.
#[derive(Debug, Serialize)]
struct SplitOutcome {
    teams: Vec<Team>,
    balance: Option<BalanceReport>,
}

pub(crate) fn run(arg: &SplitArg) -> anyhow::Result<()> {
    let players: Vec<Player> = read_json_file("roster", &arg.roster)?;
    validate_roster(&players)?;
    eprintln!("Loaded {} players from {}", players.len(), arg.roster.display());

    let num_teams = usize::from(arg.teams);
    let teams = match arg.seed {
        Some(seed) => split_teams_with_rng(&players, num_teams, &mut Pcg32::seed_from_u64(seed)),
        None => split_teams(&players, num_teams),
    };
    if teams.is_empty() {
        bail!(
            "not enough players to form {num_teams} teams: roster has {}, need at least {num_teams}",
            players.len()
        );
    }

    let balance = balance_report(&teams);
    let outcome = SplitOutcome { teams, balance };

    if arg.json || arg.output.is_some() {
        write_json(&outcome, arg.output.as_ref())?;
    } else {
        print_outcome(&outcome);
    }
    Ok(())
}

fn print_outcome(outcome: &SplitOutcome) {
    for (i, team) in outcome.teams.iter().enumerate() {
        println!("Team {} (score {})", i + 1, team.total_score());
        for player in team.players() {
            println!("  {} ({})", player.name, player.score);
        }
    }
    if let Some(balance) = &outcome.balance {
        println!();
        println!(
            "Balance: {}% ({}), spread {}, mean score {:.1}",
            balance.balance_percent(),
            balance.tier(),
            balance.spread(),
            balance.mean_score(),
        );
    }
}
