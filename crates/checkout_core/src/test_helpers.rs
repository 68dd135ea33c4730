//! Test helpers for common test setup and utilities.
//!
//! This module provides shared test utilities to reduce duplication across test files.

use bevy_ecs::prelude::World;

use crate::runner::{initialize_simulation, run_until_horizon, simulation_schedule};
use crate::scenario::{build_scenario, CheckoutParams};

/// Seed used by tests that only need some reproducible stream.
pub const TEST_SEED: u64 = 42;

/// Create a basic test world with essential resources and no checkers.
///
/// This is a convenience function for tests that drive individual systems.
/// For full runs, use [`run_scenario`].
pub fn create_test_world() -> World {
    let mut world = World::new();
    world.insert_resource(crate::clock::SimulationClock::default());
    world.insert_resource(crate::queue::CheckoutQueue::default());
    world.insert_resource(crate::telemetry::CheckoutTelemetry::default());
    world.insert_resource(crate::telemetry::IdleCounter::default());
    world.insert_resource(crate::profiling::EventMetrics::default());
    world.insert_resource(crate::spawner::ArrivalGenerator::new(
        crate::scenario::DEFAULT_ARRIVAL_INTERVAL,
    ));
    world.insert_resource(crate::distributions::ItemCountSource::uniform(Some(TEST_SEED)));
    world
}

/// Build, initialize and run a scenario to its horizon.
///
/// # Panics
///
/// Panics if `params` fail validation.
pub fn run_scenario(params: CheckoutParams) -> World {
    let mut world = World::new();
    build_scenario(&mut world, params).expect("test params should be valid");
    initialize_simulation(&mut world);
    let mut schedule = simulation_schedule();
    run_until_horizon(&mut world, &mut schedule);
    world
}
