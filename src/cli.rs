// src/cli.rs
use anyhow::{Context as _, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::env;
use std::path::PathBuf;
use tracing::{debug, instrument};

use crate::config::{Config, NumeralTarget, load_config};
use crate::core::stars::{average_rating, rating_glyphs};
use crate::models::Rating;
use crate::utils::{convert_numerals, render_row, row_to_json};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file to use instead of searching for .glyphs.toml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert digits between Western and Eastern Arabic-Indic forms
    Numerals(NumeralsArgs),

    /// Render ratings as rows of five stars
    Stars(StarsArgs),
}

#[derive(Parser, Debug)]
pub struct NumeralsArgs {
    /// Text or numbers to convert (e.g. "2024-01-01")
    #[arg(required = true)]
    pub inputs: Vec<String>,

    /// Digit set to convert into (defaults to the config setting)
    #[arg(short, long, value_enum)]
    pub to: Option<NumeralTarget>,
}

#[derive(Parser, Debug)]
pub struct StarsArgs {
    /// Ratings between 0 and 5
    #[arg(required = true, allow_negative_numbers = true)]
    pub ratings: Vec<f64>,

    /// Render a single row for the mean rating
    #[arg(short, long)]
    pub average: bool,

    /// Print rows right-to-left
    #[arg(long)]
    pub rtl: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Runs the command described by `args`, printing results to stdout.
///
/// # Errors
///
/// This function may return an error if:
/// * The config file cannot be found, read or parsed
/// * A rating is rejected by the configured out-of-range policy
/// * JSON output cannot be serialized
pub fn run(args: Args) -> Result<()> {
    let cwd = env::current_dir().context("Failed to read current directory")?;
    let config = load_config(args.config.as_deref(), &cwd)?;

    for line in execute(&args.command, &config)? {
        println!("{line}");
    }
    Ok(())
}

/// Produces the output lines for a command without printing them.
///
/// # Errors
///
/// Returns an error if a rating is rejected or JSON serialization fails.
#[instrument(skip(config))]
pub fn execute(command: &Command, config: &Config) -> Result<Vec<String>> {
    match command {
        Command::Numerals(numerals) => {
            let target = numerals.to.unwrap_or(config.numerals.target);
            debug!(?target, "Converting numerals");
            Ok(numerals
                .inputs
                .iter()
                .map(|input| convert_numerals(input, target))
                .collect())
        }
        Command::Stars(stars) => {
            let ratings = stars
                .ratings
                .iter()
                .map(|&value| {
                    config
                        .rating
                        .apply(value)
                        .with_context(|| format!("Cannot render rating {value}"))
                })
                .collect::<Result<Vec<Rating>>>()?;

            let ratings = if stars.average {
                average_rating(&ratings).into_iter().collect()
            } else {
                ratings
            };

            ratings
                .into_iter()
                .map(|rating| {
                    let row = rating_glyphs(rating);
                    match stars.format {
                        OutputFormat::Text => Ok(render_row(&row, &config.stars, stars.rtl)),
                        OutputFormat::Json => row_to_json(&row),
                    }
                })
                .collect()
        }
    }
}
