//! Checkout queue: shoppers who finished shopping and wait for a checker.

use std::collections::VecDeque;

use bevy_ecs::prelude::{Entity, Resource};

/// A shopper that finished shopping. Moves from the queue to exactly one checker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShopperRecord {
    pub shopper: Entity,
    pub id: u64,
    pub items: u32,
    pub arrived_at: u64,
    pub done_shopping_at: u64,
}

impl ShopperRecord {
    /// Time spent shopping before joining the queue.
    pub fn shopping_time(&self) -> u64 {
        self.done_shopping_at.saturating_sub(self.arrived_at)
    }
}

/// FIFO shared by every checker.
#[derive(Debug, Default, Resource)]
pub struct CheckoutQueue {
    waiting: VecDeque<ShopperRecord>,
    total_enqueued: u64,
}

impl CheckoutQueue {
    pub fn push(&mut self, record: ShopperRecord) {
        self.waiting.push_back(record);
        self.total_enqueued += 1;
    }

    /// Remove the head of the queue.
    pub fn pop_front(&mut self) -> Option<ShopperRecord> {
        self.waiting.pop_front()
    }

    pub fn len(&self) -> usize {
        self.waiting.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waiting.is_empty()
    }

    /// Number of records ever pushed, including those already taken by checkers.
    pub fn total_enqueued(&self) -> u64 {
        self.total_enqueued
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShopperRecord> {
        self.waiting.iter()
    }
}
