use clap::{Parser, Subcommand};

use self::{report::ReportArg, split::SplitArg};

mod report;
mod split;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Split a roster into balanced teams
    Split(#[clap(flatten)] SplitArg),
    /// Re-score a previously saved set of teams
    Report(#[clap(flatten)] ReportArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Split(arg) => split::run(&arg)?,
        Mode::Report(arg) => report::run(&arg)?,
    }
    Ok(())
}
