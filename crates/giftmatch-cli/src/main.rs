//! Giftmatch CLI
//!
//! Runs Secret Santa drawings from a TOML roster file:
//!
//! ```text
//! giftmatch solve roster.toml          # generate pairings
//! giftmatch solve roster.toml --json   # machine-readable output
//! giftmatch check roster.toml          # feasibility + availability table
//! ```
//!
//! Exit status: 0 on success, 1 when no valid pairing exists, 2 on bad
//! input files. Set `RUST_LOG=giftmatch_solver=debug` to watch the search.

mod roster;
mod validation;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use giftmatch::{
    estimate_feasibility, find_pairings, receiver_availability, ConfigError, Feasibility,
    GenerationResult, GiftmatchError, MatchConfig,
};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Roster parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Roster(#[from] GiftmatchError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser)]
#[command(name = "giftmatch", version, about = "Secret Santa pairing from roster files")]
struct Cli {
    /// Match configuration file (TOML).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate giver -> receiver pairings from a roster
    Solve {
        /// Roster file (TOML).
        roster: PathBuf,

        /// Print the result as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Estimate feasibility and show recipient availability
    Check {
        /// Roster file (TOML).
        roster: PathBuf,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, CliError> {
    let config = match &cli.config {
        Some(path) => MatchConfig::load(path)?,
        None => MatchConfig::default(),
    };

    match cli.command {
        Command::Solve { roster, json } => solve(&roster, json, &config),
        Command::Check { roster } => check(&roster, &config),
    }
}

fn solve(path: &Path, json: bool, config: &MatchConfig) -> Result<ExitCode, CliError> {
    let (participants, exclusions) = roster::load(path)?;
    let result = find_pairings(&participants, &exclusions, config);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        render_result(&result);
    }

    Ok(if result.is_matched() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn render_result(result: &GenerationResult) {
    match result {
        GenerationResult::Matched(pairings) => {
            for pairing in pairings {
                println!(
                    "{} -> {} <{}>",
                    pairing.giver.name, pairing.receiver.name, pairing.receiver.email
                );
            }
        }
        GenerationResult::Unmatched(failure) => {
            println!("{}:", failure.kind);
            for reason in &failure.reasons {
                println!("  - {reason}");
            }
        }
    }
}

fn check(path: &Path, config: &MatchConfig) -> Result<ExitCode, CliError> {
    let (participants, exclusions) = roster::load(path)?;

    let verdict = estimate_feasibility(&participants, &exclusions, config);
    let note = match verdict {
        Feasibility::Solvable => "likely solvable",
        Feasibility::Warning => "possibly unsolvable",
        Feasibility::NotApplicable => "not enough participants to evaluate",
    };
    println!("Feasibility: {verdict} ({note})");

    let rows = receiver_availability(&participants, &exclusions);
    if !rows.is_empty() {
        println!("Recipient availability:");
        for row in &rows {
            println!(
                "  {:<24} {:>2}/{} available givers",
                row.participant.name, row.eligible_givers, row.max_possible
            );
        }
    }

    Ok(ExitCode::SUCCESS)
}
