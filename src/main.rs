use std::fmt::Display;
use std::io::{self, Write};
use std::ops::{Add, Sub};
use std::str::FromStr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use flipsum::RandomArithmeticChooser;
use flipsum::coin::{Coin, SeededCoin, ThreadCoin};
use flipsum::consts::{DEFAULT_LOG_FILTER, DEFAULT_TRIALS, VERBOSE_LOG_FILTER};
use flipsum::notifier::{Notifier, NullNotifier, StdoutNotifier, WriterNotifier};
use flipsum::tally::run_trials;

#[derive(Parser)]
#[command(name = "flipsum", version, about = "Flip a coin, then add or subtract.")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Seed the coin for a reproducible sequence of operations
    #[arg(short, long, global = true, env = "FLIPSUM_SEED")]
    seed: Option<u64>,

    /// Parse operands as floating point instead of integers
    #[arg(short, long, global = true, default_value_t = false)]
    float: bool,

    /// Print results as JSON (notices move to stderr)
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    /// Enable debug logging on stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Add or subtract two numbers, chosen at random
    #[command(allow_negative_numbers = true)]
    Compute { a: String, b: String },
    /// Repeat the computation and report how often each operation ran
    #[command(allow_negative_numbers = true)]
    Tally {
        a: String,
        b: String,

        /// Number of trials to run
        #[arg(short = 'n', long, default_value_t = DEFAULT_TRIALS)]
        trials: usize,
    },
}

/// Where `compute` sends its operation notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NoticeTarget {
    Stdout,
    /// Keeps stdout pure JSON.
    Stderr,
}

impl NoticeTarget {
    fn for_output(json: bool) -> Self {
        if json {
            NoticeTarget::Stderr
        } else {
            NoticeTarget::Stdout
        }
    }

    fn notifier(self) -> Arc<dyn Notifier> {
        match self {
            NoticeTarget::Stdout => Arc::new(StdoutNotifier),
            NoticeTarget::Stderr => Arc::new(WriterNotifier::new(io::stderr())),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let coin = build_coin(cli.seed);
    let mut out = io::stdout().lock();

    match &cli.command {
        Command::Compute { a, b } => {
            let notifier = NoticeTarget::for_output(cli.json).notifier();
            let chooser = RandomArithmeticChooser::new(coin, notifier);
            if cli.float {
                handle_compute::<f64>(&chooser, a, b, cli.json, &mut out)
            } else {
                handle_compute::<i64>(&chooser, a, b, cli.json, &mut out)
            }
        }
        Command::Tally { a, b, trials } => {
            let chooser = RandomArithmeticChooser::new(coin, Arc::new(NullNotifier));
            if cli.float {
                handle_tally::<f64>(&chooser, a, b, *trials, cli.json, &mut out)
            } else {
                handle_tally::<i64>(&chooser, a, b, *trials, cli.json, &mut out)
            }
        }
    }
}

fn init_logging(verbose: bool) {
    let fallback = if verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_coin(seed: Option<u64>) -> Arc<dyn Coin> {
    match seed {
        Some(seed) => Arc::new(SeededCoin::new(seed)),
        None => Arc::new(ThreadCoin),
    }
}

fn parse_operand<T>(raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse()
        .with_context(|| format!("invalid operand: {raw:?}"))
}

fn handle_compute<T>(
    chooser: &RandomArithmeticChooser,
    a: &str,
    b: &str,
    json: bool,
    out: &mut impl Write,
) -> Result<()>
where
    T: FromStr + Display + Serialize + Add<Output = T> + Sub<Output = T>,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let a: T = parse_operand(a)?;
    let b: T = parse_operand(b)?;

    let outcome = chooser.compute_with_outcome(a, b);
    if json {
        let encoded = serde_json::to_string(&outcome).context("failed to encode result")?;
        writeln!(out, "{}", encoded)?;
    } else {
        writeln!(out, "{}", outcome.value)?;
    }
    Ok(())
}

fn handle_tally<T>(
    chooser: &RandomArithmeticChooser,
    a: &str,
    b: &str,
    trials: usize,
    json: bool,
    out: &mut impl Write,
) -> Result<()>
where
    T: Copy + FromStr + Add<Output = T> + Sub<Output = T>,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let a: T = parse_operand(a)?;
    let b: T = parse_operand(b)?;

    let tally = run_trials(chooser, a, b, trials);
    if json {
        let encoded = serde_json::to_string(&tally).context("failed to encode tally")?;
        writeln!(out, "{}", encoded)?;
    } else {
        writeln!(out, "trials:       {}", tally.total())?;
        writeln!(out, "additions:    {}", tally.additions)?;
        writeln!(out, "subtractions: {}", tally.subtractions)?;
        writeln!(out, "ratio:        {:.3}", tally.addition_ratio())?;
    }
    Ok(())
}
