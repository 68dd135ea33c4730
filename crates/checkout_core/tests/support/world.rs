#![allow(dead_code)]

use bevy_ecs::prelude::World;
use checkout_core::distributions::ItemCountSource;
use checkout_core::runner::initialize_simulation;
use checkout_core::scenario::{build_scenario, CheckoutParams};

/// Builder for reproducible, initialized test worlds.
#[derive(Debug)]
pub struct TestWorldBuilder {
    params: CheckoutParams,
    baskets: Option<Vec<u32>>,
}

impl Default for TestWorldBuilder {
    fn default() -> Self {
        Self {
            params: CheckoutParams::default().with_seed(42),
            baskets: None,
        }
    }
}

impl TestWorldBuilder {
    /// Create a new builder: default store layout, seed 42.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.params.seed = Some(seed);
        self
    }

    pub fn with_checkers(mut self, checkers: u32) -> Self {
        self.params.num_checkers = checkers;
        self
    }

    pub fn with_horizon(mut self, horizon: u64) -> Self {
        self.params.horizon = horizon;
        self
    }

    pub fn with_arrival_interval(mut self, interval: u64) -> Self {
        self.params.arrival_interval = interval;
        self
    }

    /// Give every shopper the same basket.
    pub fn with_items(mut self, items: u32) -> Self {
        self.params.fixed_item_count = Some(items);
        self
    }

    /// Script each shopper's basket in arrival order.
    pub fn with_baskets(mut self, baskets: &[u32]) -> Self {
        self.baskets = Some(baskets.to_vec());
        self
    }

    pub fn params(&self) -> &CheckoutParams {
        &self.params
    }

    /// Build the scenario and schedule the start event.
    pub fn build(self) -> World {
        let mut world = World::new();
        build_scenario(&mut world, self.params).expect("test params should be valid");
        if let Some(baskets) = self.baskets {
            world.insert_resource(ItemCountSource::sequence(baskets));
        }
        initialize_simulation(&mut world);
        world
    }
}
