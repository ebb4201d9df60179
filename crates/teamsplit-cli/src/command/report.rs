use std::path::PathBuf;

use teamsplit_engine::Team;
use teamsplit_evaluator::balance_report;

use crate::util::{read_json_file, write_json};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ReportArg {
    /// Teams JSON file, as written by `split --json`'s `teams` field
    #[arg(long)]
    teams_file: PathBuf,
    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,
}

pub(crate) fn run(arg: &ReportArg) -> anyhow::Result<()> {
    let teams: Vec<Team> = read_json_file("teams", &arg.teams_file)?;

    let Some(balance) = balance_report(&teams) else {
        // Empty input is "nothing to score yet", not a failure.
        eprintln!("No teams to score in {}", arg.teams_file.display());
        return Ok(());
    };

    if arg.json {
        write_json(&balance, None)?;
    } else {
        println!(
            "Balance: {}% ({}), spread {}, mean score {:.1}",
            balance.balance_percent(),
            balance.tier(),
            balance.spread(),
            balance.mean_score(),
        );
    }
    Ok(())
}
