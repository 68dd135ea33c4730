use std::error::Error;

use bevy_ecs::prelude::World;
use checkout_core::error::ConfigError;
use checkout_core::profiling::EventMetrics;
use checkout_core::report::{shopper_counts, CheckoutReport};
use checkout_core::runner::{initialize_simulation, run_until_horizon, simulation_schedule};
use checkout_core::scenario::{
    build_scenario, CheckoutParams, DEFAULT_ARRIVAL_INTERVAL, DEFAULT_HORIZON,
    DEFAULT_NUM_CHECKERS,
};
use checkout_core::telemetry::ShopperCounts;
use clap::{Parser, ValueEnum};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(
    name = "checkout-sim",
    about = "Discrete-event simulation of a grocery store checkout",
    long_about = "Shoppers arrive on a fixed cadence, shop for half a minute per item,\n\
                  then queue for the next free checker. Prints the queue remainder\n\
                  and summary statistics once the horizon is reached."
)]
struct Cli {
    /// Number of checkout lanes
    #[arg(long, default_value_t = DEFAULT_NUM_CHECKERS)]
    checkers: u32,
    /// Simulated minutes to run
    #[arg(long, default_value_t = DEFAULT_HORIZON)]
    horizon: u64,
    /// Minutes between shopper arrivals
    #[arg(long, default_value_t = DEFAULT_ARRIVAL_INTERVAL)]
    arrival_interval: u64,
    /// Seed for item counts; random when omitted
    #[arg(long, env = "CHECKOUT_SIM_SEED")]
    seed: Option<u64>,
    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Log every process step
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    fn params(&self) -> CheckoutParams {
        CheckoutParams {
            num_checkers: self.checkers,
            horizon: self.horizon,
            arrival_interval: self.arrival_interval,
            seed: self.seed,
            ..Default::default()
        }
    }
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    params: &'a CheckoutParams,
    report: &'a CheckoutReport,
    shoppers: ShopperCounts,
}

/// Everything a finished run hands back to the caller.
struct RunOutcome {
    report: CheckoutReport,
    shoppers: ShopperCounts,
}

fn simulate(params: CheckoutParams) -> Result<RunOutcome, ConfigError> {
    let mut world = World::new();
    build_scenario(&mut world, params)?;
    initialize_simulation(&mut world);
    let mut schedule = simulation_schedule();
    run_until_horizon(&mut world, &mut schedule);

    world.resource::<EventMetrics>().log_summary();
    let shoppers = shopper_counts(&mut world);
    tracing::info!(
        shopping = shoppers.shopping,
        queued = shoppers.queued,
        in_checkout = shoppers.in_checkout,
        checked_out = shoppers.checked_out,
        "shoppers at horizon"
    );
    Ok(RunOutcome {
        report: CheckoutReport::from_world(&world),
        shoppers,
    })
}

fn render(
    format: OutputFormat,
    params: &CheckoutParams,
    outcome: &RunOutcome,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(outcome.report.to_string()),
        OutputFormat::Json => {
            let output = JsonOutput {
                params,
                report: &outcome.report,
                shoppers: outcome.shoppers,
            };
            serde_json::to_string_pretty(&output).map(|json| json + "\n")
        }
    }
}

fn main() -> Result<(), Box<dyn Error + Send + Sync + 'static>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    let params = cli.params();
    tracing::info!(
        checkers = params.num_checkers,
        horizon = params.horizon,
        arrival_interval = params.arrival_interval,
        seed = ?params.seed,
        "starting checkout simulation"
    );

    let outcome = simulate(params.clone()).map_err(|e| {
        tracing::error!("Invalid simulation parameters: {}", e);
        Box::new(e) as Box<dyn Error + Send + Sync + 'static>
    })?;
    print!("{}", render(cli.format, &params, &outcome)?);
    Ok(())
}
