//! Telemetry: the transaction log and idle accounting written by checkers.

use bevy_ecs::prelude::Resource;
use serde::Serialize;

use crate::ecs::ShopperState;
use crate::queue::ShopperRecord;

/// One finished checkout, recorded when the checker releases the shopper.
/// Timestamps are simulation minutes; use the helper methods for derived KPIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TransactionRecord {
    pub shopper_id: u64,
    pub items: u32,
    pub arrived_at: u64,
    pub done_shopping_at: u64,
    pub departed_at: u64,
    pub checker_id: u32,
}

impl TransactionRecord {
    pub fn from_record(record: &ShopperRecord, departed_at: u64, checker_id: u32) -> Self {
        Self {
            shopper_id: record.id,
            items: record.items,
            arrived_at: record.arrived_at,
            done_shopping_at: record.done_shopping_at,
            departed_at,
            checker_id,
        }
    }

    /// Time from joining the queue to leaving the store, checkout included.
    pub fn wait_time(&self) -> u64 {
        self.departed_at.saturating_sub(self.done_shopping_at)
    }

    /// Time from arrival to joining the queue.
    pub fn shopping_time(&self) -> u64 {
        self.done_shopping_at.saturating_sub(self.arrived_at)
    }
}

/// Append-only event log. Only checkers write to it.
#[derive(Debug, Default, Resource)]
pub struct CheckoutTelemetry {
    pub transactions: Vec<TransactionRecord>,
}

impl CheckoutTelemetry {
    pub fn record(&mut self, transaction: TransactionRecord) {
        self.transactions.push(transaction);
    }
}

/// Idle minutes summed over all checkers.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Resource)]
pub struct IdleCounter(pub u64);

/// Shoppers tallied by lifecycle state at a point in time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ShopperCounts {
    pub arrived: usize,
    pub shopping: usize,
    pub queued: usize,
    pub in_checkout: usize,
    pub checked_out: usize,
}

impl ShopperCounts {
    pub fn add(&mut self, state: ShopperState) {
        match state {
            ShopperState::Arrived => self.arrived += 1,
            ShopperState::Shopping => self.shopping += 1,
            ShopperState::Queued => self.queued += 1,
            ShopperState::InCheckout => self.in_checkout += 1,
            ShopperState::CheckedOut => self.checked_out += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.arrived + self.shopping + self.queued + self.in_checkout + self.checked_out
    }
}
