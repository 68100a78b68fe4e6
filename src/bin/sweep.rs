//! Evaluate the estimator across the slider grid and write a CSV
//!
//! Outputs one row per grid point for offline review of the published figures

use anyhow::Context;
use clap::Parser;
use roi_calculator::calculator::{run_sweep, write_csv, SweepGrid};
use roi_calculator::{SavingsAssumptions, SavingsEstimator};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(name = "sweep", about = "Run the savings estimator over a grid of slider positions")]
struct Args {
    /// Step between employee counts
    #[arg(long, default_value_t = 1.0)]
    employees_step: f64,

    /// Step between weekly hours
    #[arg(long, default_value_t = 1.0)]
    hours_step: f64,

    /// Step between hourly rates
    #[arg(long, default_value_t = 5.0)]
    rate_step: f64,

    /// JSON file overriding the model assumptions
    #[arg(long)]
    assumptions: Option<PathBuf>,

    /// Output CSV path
    #[arg(short, long, default_value = "savings_sweep.csv")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let start = Instant::now();

    let assumptions = match &args.assumptions {
        Some(path) => SavingsAssumptions::load(path)
            .with_context(|| format!("loading assumptions from {}", path.display()))?,
        None => SavingsAssumptions::default(),
    };
    let estimator = SavingsEstimator::new(assumptions);
    let grid = SweepGrid::new(args.employees_step, args.hours_step, args.rate_step)?;

    let rows = run_sweep(&estimator, &grid)?;
    println!("Computed {} grid points in {:?}", rows.len(), start.elapsed());

    let file = File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    write_csv(&rows, BufWriter::new(file))?;
    println!("Output written to {}", args.output.display());

    if let (Some(first), Some(last)) = (rows.first(), rows.last()) {
        println!("\nSweep Summary:");
        println!("  Min inputs: annual savings=${:.0}, ROI={:.0}%", first.annual_savings, first.roi_percent);
        println!("  Max inputs: annual savings=${:.0}, ROI={:.0}%", last.annual_savings, last.roi_percent);
    }

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
