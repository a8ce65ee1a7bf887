use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};
use rocket_optimization::utils::format::format_value;
use rocket_optimization::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Rocket flight objective evaluator", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate all objective parameters for a JSON flight data file
    Evaluate(EvaluateArgs),
    /// Evaluate a synthetic single-stage flight
    Demo(DemoArgs),
}

#[derive(Args, Debug)]
struct BandArgs {
    /// Reference acceleration (m/s², negative is down)
    #[arg(long, default_value_t = STANDARD_GRAVITY, allow_hyphen_values = true)]
    gravity: f64,

    /// Relative width of the free-fall band
    #[arg(long, default_value_t = FREE_FALL_TOLERANCE)]
    tolerance: f64,

    /// Count a free-fall run that is still open when the data ends
    #[arg(long, action = ArgAction::SetTrue)]
    flush_trailing: bool,
}

impl BandArgs {
    fn config(&self) -> FreeFallConfig {
        let policy = if self.flush_trailing {
            TrailingIntervalPolicy::Flush
        } else {
            TrailingIntervalPolicy::Drop
        };
        FreeFallConfig::new(self.gravity, self.tolerance).with_trailing_policy(policy)
    }
}

#[derive(Parser, Debug)]
struct EvaluateArgs {
    /// Flight data JSON file
    #[arg(value_hint = ValueHint::FilePath)]
    input: PathBuf,

    #[command(flatten)]
    band: BandArgs,
}

#[derive(Parser, Debug)]
struct DemoArgs {
    /// Motor burn time (s)
    #[arg(long, default_value_t = 2.0)]
    burn_time: f64,

    /// Thrust acceleration during the burn (m/s²)
    #[arg(long, default_value_t = 60.0)]
    thrust: f64,

    /// Quadratic drag factor (1/m)
    #[arg(long, default_value_t = 0.0)]
    drag: f64,

    /// Parachute deployment delay after apogee (s)
    #[arg(long, default_value_t = 3.0)]
    deployment_delay: f64,

    #[command(flatten)]
    band: BandArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    match cli.command {
        Command::Evaluate(args) => handle_evaluate(args),
        Command::Demo(args) => handle_demo(args),
    }
}

fn handle_evaluate(args: EvaluateArgs) -> Result<()> {
    let file = File::open(&args.input)
        .with_context(|| format!("failed to open {}", args.input.display()))?;
    let data = FlightData::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse {}", args.input.display()))?;
    info!(
        path = %args.input.display(),
        branches = data.branches.len(),
        "loaded flight data"
    );

    report(&data, &args.band.config())
}

fn handle_demo(args: DemoArgs) -> Result<()> {
    let profile = SyntheticProfile::new(args.burn_time, args.thrust, args.drag)
        .with_deployment_delay(args.deployment_delay);
    let data = profile.generate();
    info!(
        samples = data.branches.first().map_or(0, FlightDataBranch::len),
        "generated synthetic flight"
    );

    report(&data, &args.band.config())
}

fn report(data: &FlightData, config: &FreeFallConfig) -> Result<()> {
    let free_fall =
        FreeFallTimeParameter::with_config(config).context("invalid free-fall band")?;
    let parameters: Vec<Box<dyn OptimizableParameter>> = vec![
        Box::new(free_fall),
        Box::new(MaximumAltitudeParameter),
        Box::new(TotalFlightTimeParameter),
    ];

    println!("--- Objective Parameters ---");
    for parameter in &parameters {
        let value = parameter.evaluate_or_nan(data);
        println!(
            "{:<18} {:>14}  ({})",
            parameter.name(),
            format_value(value, parameter.unit_family()),
            parameter.unit_family()
        );
    }

    Ok(())
}
