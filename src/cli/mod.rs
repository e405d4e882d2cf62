//! Command-line interface module

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use crate::conversion::convert;
use crate::error::{OddsError, OddsResult};
use crate::format::{resolve_input_format, resolve_output_format};
use crate::formatter::ConvertedOdds;
use crate::parser::{OddsInput, OddsValue};

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "oddsconv")]
#[command(about = "Convert betting odds between decimal, American, and fractional formats")]
#[command(version = "0.1.0")]
pub struct Args {
    /// Odds values to convert (numbers or "n/d" fraction text)
    #[arg(allow_negative_numbers = true)]
    pub odds: Vec<String>,

    /// Source format: decimal, american, or fractional (default: $INPUT_ODDS_FORMAT, then american)
    #[arg(long, value_name = "FORMAT")]
    pub from: Option<String>,

    /// Target format: decimal, american, or fractional (default: $OUTPUT_ODDS_FORMAT, then american)
    #[arg(long, value_name = "FORMAT")]
    pub to: Option<String>,

    /// Read odds as JSON from standard input
    #[arg(long)]
    pub stdin: bool,

    /// Read odds as JSON from a file
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Emit the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Print converted values only, without input labels
    #[arg(long)]
    pub quiet: bool,
}

pub fn run(args: &Args) -> Result<()> {
    let from = resolve_input_format(args.from.as_deref())?;
    let to = resolve_output_format(args.to.as_deref())?;

    let odds = read_odds(args)?;
    let converted = convert(&odds, from, to)?;
    print_converted(args, &odds, &converted)
}

fn read_odds(args: &Args) -> Result<OddsInput> {
    if args.stdin {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read stdin")?;
        parse_json_odds(&buffer)
    } else if let Some(path) = &args.input {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        parse_json_odds(&content)
    } else if !args.odds.is_empty() {
        let mut values = args
            .odds
            .iter()
            .map(|raw| classify_arg(raw))
            .collect::<OddsResult<Vec<_>>>()?;
        if values.len() == 1 {
            Ok(OddsInput::Scalar(values.remove(0)))
        } else {
            Ok(OddsInput::Sequence(values))
        }
    } else {
        Err(anyhow::anyhow!(
            "No odds provided. Pass odds values, --stdin, or --input"
        ))
    }
}

fn parse_json_odds(content: &str) -> Result<OddsInput> {
    let value: serde_json::Value =
        serde_json::from_str(content.trim()).context("Invalid JSON input")?;
    Ok(OddsInput::from_json(&value)?)
}

/// Classify one positional argument: a number, or fraction text
fn classify_arg(raw: &str) -> OddsResult<OddsValue> {
    if let Ok(number) = raw.parse::<f64>() {
        Ok(OddsValue::Number(number))
    } else if raw.contains('/') {
        Ok(OddsValue::Text(raw.to_string()))
    } else {
        Err(OddsError::type_mismatch(format!(
            "Argument {:?} cannot be interpreted as odds",
            raw
        )))
    }
}

fn print_converted(args: &Args, odds: &OddsInput, converted: &ConvertedOdds) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string(converted)?);
        return Ok(());
    }

    let labelled = !args.quiet && atty::is(atty::Stream::Stdout);
    if labelled && odds.len() == converted.len() {
        for (input, output) in odds.as_slice().iter().zip(converted.values()) {
            println!("{} {}", style(format!("{} =", input)).dim(), output);
        }
    } else {
        // Piped or quiet: bare values, one per line
        for output in converted.values() {
            println!("{}", output);
        }
    }
    Ok(())
}
