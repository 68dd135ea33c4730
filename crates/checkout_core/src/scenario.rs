//! Scenario setup: validate parameters, install the shared resources and open the checkout lanes.

use bevy_ecs::prelude::{Resource, World};
use serde::Serialize;
use tracing::debug;

use crate::clock::SimulationClock;
use crate::distributions::ItemCountSource;
use crate::ecs::Checker;
use crate::error::ConfigError;
use crate::profiling::EventMetrics;
use crate::queue::CheckoutQueue;
use crate::spawner::ArrivalGenerator;
use crate::telemetry::{CheckoutTelemetry, IdleCounter};

pub const DEFAULT_NUM_CHECKERS: u32 = 5;
pub const DEFAULT_HORIZON: u64 = 180;
pub const DEFAULT_ARRIVAL_INTERVAL: u64 = 2;

/// Events at or past this time are never delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Resource)]
pub struct SimulationEndTime(pub u64);

/// Parameters for building a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutParams {
    pub num_checkers: u32,
    /// Simulated minutes to run.
    pub horizon: u64,
    /// Minutes between shopper arrivals.
    pub arrival_interval: u64,
    /// Random seed for reproducibility (optional; if None, seeded from entropy).
    pub seed: Option<u64>,
    /// Give every shopper this many items instead of drawing at random.
    pub fixed_item_count: Option<u32>,
}

impl Default for CheckoutParams {
    fn default() -> Self {
        Self {
            num_checkers: DEFAULT_NUM_CHECKERS,
            horizon: DEFAULT_HORIZON,
            arrival_interval: DEFAULT_ARRIVAL_INTERVAL,
            seed: None,
            fixed_item_count: None,
        }
    }
}

impl CheckoutParams {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_checkers(mut self, num_checkers: u32) -> Self {
        self.num_checkers = num_checkers;
        self
    }

    pub fn with_horizon(mut self, horizon: u64) -> Self {
        self.horizon = horizon;
        self
    }

    pub fn with_arrival_interval(mut self, interval: u64) -> Self {
        self.arrival_interval = interval;
        self
    }

    pub fn with_fixed_item_count(mut self, items: u32) -> Self {
        self.fixed_item_count = Some(items);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.horizon == 0 {
            return Err(ConfigError::ZeroHorizon);
        }
        if self.arrival_interval == 0 {
            return Err(ConfigError::ZeroArrivalInterval);
        }
        if self.num_checkers == 0 {
            return Err(ConfigError::NoCheckers);
        }
        Ok(())
    }

    fn item_source(&self) -> ItemCountSource {
        match self.fixed_item_count {
            Some(items) => ItemCountSource::fixed(items),
            None => ItemCountSource::uniform(self.seed),
        }
    }
}

/// Build a checkout scenario into `world`: shared resources plus one [Checker] per lane.
/// Call [crate::runner::initialize_simulation] afterwards to register the processes.
pub fn build_scenario(world: &mut World, params: CheckoutParams) -> Result<(), ConfigError> {
    params.validate()?;

    world.insert_resource(SimulationClock::default());
    world.insert_resource(SimulationEndTime(params.horizon));
    world.insert_resource(CheckoutQueue::default());
    world.insert_resource(CheckoutTelemetry::default());
    world.insert_resource(IdleCounter::default());
    world.insert_resource(EventMetrics::default());
    world.insert_resource(ArrivalGenerator::new(params.arrival_interval));
    world.insert_resource(params.item_source());

    for lane in 1..=params.num_checkers {
        world.spawn(Checker::new(lane));
    }

    debug!(
        checkers = params.num_checkers,
        horizon = params.horizon,
        arrival_interval = params.arrival_interval,
        "checkout scenario built"
    );
    Ok(())
}
