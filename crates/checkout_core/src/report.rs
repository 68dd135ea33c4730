//! End-of-run aggregation over the transaction log, plus the console report.

use std::fmt;

use bevy_ecs::prelude::World;
use serde::Serialize;

use crate::ecs::Shopper;
use crate::queue::CheckoutQueue;
use crate::telemetry::{CheckoutTelemetry, IdleCounter, ShopperCounts, TransactionRecord};

/// Aggregate statistics over every completed transaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutSummary {
    pub shoppers_served: usize,
    pub average_items: f64,
    pub average_shopping_time: f64,
    pub average_wait_time: f64,
    pub max_wait_time: u64,
    pub max_shopping_time: u64,
    pub total_idle_time: u64,
}

impl CheckoutSummary {
    /// Summarize `transactions`. Returns `None` when nobody was served.
    pub fn from_transactions(transactions: &[TransactionRecord], idle_time: u64) -> Option<Self> {
        if transactions.is_empty() {
            return None;
        }

        let mut total_items = 0u64;
        let mut total_shopping = 0u64;
        let mut total_wait = 0u64;
        let mut max_wait = 0u64;
        let mut max_shopping = 0u64;
        for record in transactions {
            let wait = record.wait_time();
            let shopping = record.shopping_time();
            total_items += u64::from(record.items);
            total_shopping += shopping;
            total_wait += wait;
            max_wait = max_wait.max(wait);
            max_shopping = max_shopping.max(shopping);
        }

        let served = transactions.len() as f64;
        Some(Self {
            shoppers_served: transactions.len(),
            average_items: total_items as f64 / served,
            average_shopping_time: total_shopping as f64 / served,
            average_wait_time: total_wait as f64 / served,
            max_wait_time: max_wait,
            max_shopping_time: max_shopping,
            total_idle_time: idle_time,
        })
    }
}

/// What the run leaves behind: the queue remainder and, if anyone was served, the summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutReport {
    pub shoppers_left_in_queue: usize,
    pub summary: Option<CheckoutSummary>,
}

impl CheckoutReport {
    /// Read the final state of a finished run.
    pub fn from_world(world: &World) -> Self {
        let telemetry = world.resource::<CheckoutTelemetry>();
        let idle = world.resource::<IdleCounter>();
        Self {
            shoppers_left_in_queue: world.resource::<CheckoutQueue>().len(),
            summary: CheckoutSummary::from_transactions(&telemetry.transactions, idle.0),
        }
    }
}

impl fmt::Display for CheckoutReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.shoppers_left_in_queue > 0 {
            writeln!(f, "Shoppers left in queue: {}", self.shoppers_left_in_queue)?;
        } else {
            writeln!(f, "No shoppers left waiting.")?;
        }

        let Some(summary) = &self.summary else {
            return writeln!(f, "No shoppers were processed.");
        };
        writeln!(f, "Number of shoppers served: {}", summary.shoppers_served)?;
        writeln!(f, "Average items per shopper: {:.2}", summary.average_items)?;
        writeln!(f, "Average shopping time: {:.2} minutes", summary.average_shopping_time)?;
        writeln!(f, "Average wait time in queue: {:.2} minutes", summary.average_wait_time)?;
        writeln!(f, "Maximum wait time: {} minutes", summary.max_wait_time)?;
        writeln!(f, "Maximum shopping time: {} minutes", summary.max_shopping_time)?;
        writeln!(f, "Total idle time (all checkers): {} minutes", summary.total_idle_time)
    }
}

/// Tally every shopper entity by lifecycle state.
pub fn shopper_counts(world: &mut World) -> ShopperCounts {
    let mut counts = ShopperCounts::default();
    for shopper in world.query::<&Shopper>().iter(world) {
        counts.add(shopper.state);
    }
    counts
}
