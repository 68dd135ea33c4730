//! Run the default store (5 checkers, 180 minutes, a shopper every 2 minutes) and print
//! the per-lane breakdown followed by the checkout report.
//!
//! Run with: cargo run -p checkout_core --example scenario_run

use bevy_ecs::prelude::World;
use checkout_core::ecs::Checker;
use checkout_core::report::CheckoutReport;
use checkout_core::runner::{initialize_simulation, run_until_horizon, simulation_schedule};
use checkout_core::scenario::{build_scenario, CheckoutParams};

fn main() {
    const SEED: u64 = 123;

    let mut world = World::new();
    let params = CheckoutParams::default().with_seed(SEED);
    if let Err(err) = build_scenario(&mut world, params.clone()) {
        eprintln!("invalid parameters: {err}");
        std::process::exit(1);
    }
    initialize_simulation(&mut world);

    let mut schedule = simulation_schedule();
    let steps = run_until_horizon(&mut world, &mut schedule);

    println!(
        "--- Scenario run ({} checkers, {} min, arrival every {} min, seed {}) ---",
        params.num_checkers, params.horizon, params.arrival_interval, SEED
    );
    println!("Steps executed: {}", steps);

    let mut lanes: Vec<Checker> = world.query::<&Checker>().iter(&world).cloned().collect();
    lanes.sort_by_key(|c| c.id);
    for lane in &lanes {
        println!(
            "  lane {}  served={}  idle={} min",
            lane.id, lane.served, lane.idle_time
        );
    }
    println!();
    print!("{}", CheckoutReport::from_world(&world));
}
