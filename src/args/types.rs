use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Scorecard document (json) with course, players and pairings.
    #[arg(
        short = 'i',
        long,
        value_name = "SCORECARD_JSON",
        value_parser = crate::args::validation::check_readable_json_file
    )]
    pub input: PathBuf,

    /// How to print the scored round.
    #[arg(short = 'o', long, value_name = "OUTPUT", default_value = "text")]
    pub output: OutputFormat,

    /// Only print the players, skip the match and team tables.
    #[arg(long)]
    pub players_only: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}
