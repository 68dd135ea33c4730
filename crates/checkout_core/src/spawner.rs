//! Arrival generator: spawns a shopper on a fixed cadence.
//!
//! The generator reacts to `ShopperArrival` events and schedules its own next
//! tick, so it runs until the horizon cuts it off.

use bevy_ecs::prelude::Resource;

#[derive(Debug, Resource)]
pub struct ArrivalGenerator {
    /// Minutes between consecutive arrivals.
    pub interval: u64,
    spawned_count: u64,
    next_arrival_at: u64,
}

impl ArrivalGenerator {
    /// First arrival happens at time 0.
    pub fn new(interval: u64) -> Self {
        Self {
            interval,
            spawned_count: 0,
            next_arrival_at: 0,
        }
    }

    /// Count a new shopper and return its id (1-based, sequential).
    /// Moves the next arrival one interval past `current_time`.
    pub fn advance(&mut self, current_time: u64) -> u64 {
        self.spawned_count += 1;
        self.next_arrival_at = current_time + self.interval;
        self.spawned_count
    }

    pub fn next_arrival_at(&self) -> u64 {
        self.next_arrival_at
    }

    /// Number of shoppers spawned so far.
    pub fn spawned_count(&self) -> u64 {
        self.spawned_count
    }
}
