//! Print the calculator results for one set of slider positions
//!
//! Example: estimate --employees 5 --hours 11 --rate 25

use anyhow::Context;
use clap::Parser;
use roi_calculator::api::estimate;
use roi_calculator::estimator::InputField;
use roi_calculator::{CalculatorInputs, CalculatorSession, SavingsAssumptions, SavingsEstimator};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "estimate", about = "Estimate savings from automating employee task-hours")]
struct Args {
    /// Number of employees (slider 1-100)
    #[arg(short, long, default_value_t = 5.0)]
    employees: f64,

    /// Hours per week per employee spent on automatable tasks (slider 1-40)
    #[arg(long, default_value_t = 11.0)]
    hours: f64,

    /// Average hourly rate in USD (slider 15-200)
    #[arg(short, long, default_value_t = 25.0)]
    rate: f64,

    /// Clamp inputs to the slider ranges, as the page does
    #[arg(long)]
    clamp: bool,

    /// JSON file overriding the model assumptions
    #[arg(long)]
    assumptions: Option<PathBuf>,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let assumptions = match &args.assumptions {
        Some(path) => SavingsAssumptions::load(path)
            .with_context(|| format!("loading assumptions from {}", path.display()))?,
        None => SavingsAssumptions::default(),
    };
    let estimator = SavingsEstimator::new(assumptions);
    if !estimator.assumptions().is_default() {
        log::info!("using custom assumptions: {:?}", estimator.assumptions());
    }

    let raw = CalculatorInputs::new(args.employees, args.hours, args.rate);
    let session = CalculatorSession::with_inputs(estimator.clone(), raw);
    let inputs = if args.clamp {
        *session.inputs()
    } else {
        if !raw.in_domain() {
            log::warn!("inputs outside the slider ranges: {:?}", raw);
        }
        raw
    };

    let response = estimate(&estimator, inputs);

    if args.json {
        let json = serde_json::to_string_pretty(&response).context("serializing response")?;
        println!("{}", json);
        return Ok(());
    }

    println!("Business Information");
    if args.clamp {
        for slider in session.sliders() {
            println!("  {}", slider);
        }
    } else {
        for field in InputField::ALL {
            println!("  {}: {}", field.label(), inputs.get(field));
        }
    }
    println!();
    print!("{}", response.report);

    Ok(())
}
