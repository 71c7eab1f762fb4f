//! tau-filter - drop paired LIBSVM vectors that differ by at least tau.
//!
//! Prints surviving negative records (`-1`) then positive records (`+1`) to
//! stdout. Failures print one diagnostic line to stderr and exit with a
//! status specific to the failure kind.

use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use tau_filter::report::{self, FilterSummary};
use tau_filter::{
    filter_pairs, load_dataset, write_dataset, FilterError, FilterOutcome, ZeroPolicy,
};

/// CLI-friendly zero-denominator policy
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliZeroPolicy {
    /// Treat the dimension as infinitely different (pair is dropped)
    Infinite,
    /// Abort the run
    Error,
}

impl From<CliZeroPolicy> for ZeroPolicy {
    fn from(policy: CliZeroPolicy) -> Self {
        match policy {
            CliZeroPolicy::Infinite => ZeroPolicy::Infinite,
            CliZeroPolicy::Error => ZeroPolicy::Error,
        }
    }
}

/// Filter positive/negative vector pairs by maximum relative difference
#[derive(Parser)]
#[command(name = "tau-filter")]
#[command(author, version, about, long_about = None)]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// LIBSVM-style input file
    infile: PathBuf,

    /// Threshold; pairs scoring >= tau are dropped
    #[arg(value_parser = parse_tau)]
    tau: f64,

    /// What to do when a positive component is zero
    #[arg(long, value_enum, default_value = "infinite")]
    on_zero: CliZeroPolicy,

    /// Write per-pair scores as CSV (after the records are printed)
    #[arg(long)]
    scores: Option<PathBuf>,

    /// Write a JSON run summary (after the records are printed)
    #[arg(long)]
    summary: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn parse_tau(s: &str) -> std::result::Result<f64, String> {
    let tau: f64 = s.parse().map_err(|e| format!("'{s}' is not a number: {e}"))?;
    if tau.is_nan() {
        return Err("tau must not be NaN".to_string());
    }
    Ok(tau)
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(cli: &Cli) -> Result<()> {
    let zero_policy = ZeroPolicy::from(cli.on_zero);

    let dataset = load_dataset(&cli.infile)
        .with_context(|| format!("reading {}", cli.infile.display()))?;

    let outcome = filter_pairs(&dataset, cli.tau, zero_policy).context("filtering pairs")?;

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    emit(&mut out, cli, &outcome, zero_policy)
}

/// Print the surviving records, then write side outputs. Side outputs are
/// only created once the records are flushed.
fn emit<W: Write>(
    out: &mut W,
    cli: &Cli,
    outcome: &FilterOutcome,
    zero_policy: ZeroPolicy,
) -> Result<()> {
    write_dataset(out, &outcome.dataset).context("writing filtered records")?;

    if let Some(path) = &cli.scores {
        report::save_scores(path, outcome)
            .with_context(|| format!("writing scores to {}", path.display()))?;
    }
    if let Some(path) = &cli.summary {
        let summary = FilterSummary::new(outcome, cli.tau, zero_policy);
        report::save_summary(path, &summary)
            .with_context(|| format!("writing summary to {}", path.display()))?;
    }
    Ok(())
}

/// Exit status of the first library error in the chain, or 1.
fn exit_code(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<FilterError>())
        .map_or(1, FilterError::exit_code)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(&cli) {
        eprintln!("error: {err:#}");
        std::process::exit(exit_code(&err));
    }
}
