//! awesome_calc_cli: prints a fixed tour of the `awesome_calc` library.
//!
//! Results go to stdout, one labeled line per call. Diagnostics go to stderr and are
//! silent unless `--verbose` is given.

use anyhow::Result;
use awesome_calc::{RunningStats, add, clamp_add, mean, median, weighted_mean};
use clap::Parser;
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "awesome_calc_cli")]
#[command(version, about = "Demonstrates the awesome_calc library", long_about = None)]
struct Cli {
    /// Enable verbose logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Formats a float with up to six decimals, dropping trailing zeros.
fn display(value: f64) -> String {
    let fixed = format!("{value:.6}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let (a, b) = (2, 3);
    let sum = add(a, b);
    debug!(a, b, sum, "add");
    println!("add({a}, {b}) = {sum}");

    let values = [1.0, 2.0, 3.0, 4.0];
    let avg = mean(&values)?;
    debug!(?values, avg, "mean");
    println!("mean(1,2,3,4) = {}", display(avg));

    let mid = median(&values)?;
    debug!(?values, mid, "median");
    println!("median(1,2,3,4) = {}", display(mid));

    let weights = [0.1, 0.2, 0.3, 0.4];
    let wm = weighted_mean(&values, &weights)?;
    debug!(?weights, wm, "weighted_mean");
    println!(
        "weighted_mean(1,2,3,4 | 0.1,0.2,0.3,0.4) = {}",
        display(wm)
    );

    let clamped = clamp_add(100, 50, -100, 120)?;
    debug!(clamped, "clamp_add");
    println!("clamp_add(100, 50, -100, 120) = {clamped}");

    let mut stats = RunningStats::new();
    stats.push(10.0).push(20.0).push(30.0);
    debug!(?stats, "running_stats");
    println!(
        "running_stats count={} sum={} avg={} min={} max={}",
        stats.count(),
        display(stats.sum()),
        display(stats.average()?),
        display(stats.min()?),
        display(stats.max()?),
    );

    Ok(())
}
