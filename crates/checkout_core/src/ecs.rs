use bevy_ecs::prelude::Component;

use crate::queue::ShopperRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopperState {
    /// Spawned by the arrival generator; items not drawn yet.
    Arrived,
    Shopping,
    /// Waiting in the checkout queue.
    Queued,
    InCheckout,
    CheckedOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Component)]
pub struct Shopper {
    pub id: u64,
    pub state: ShopperState,
    /// Drawn when the shopper starts shopping; 0 until then.
    pub items: u32,
    pub arrived_at: u64,
    /// Simulation time when the shopper joined the checkout queue.
    pub done_shopping_at: Option<u64>,
    /// Simulation time when a checker finished the transaction.
    pub departed_at: Option<u64>,
}

impl Shopper {
    pub fn new(id: u64, arrived_at: u64) -> Self {
        Self {
            id,
            state: ShopperState::Arrived,
            items: 0,
            arrived_at,
            done_shopping_at: None,
            departed_at: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckerState {
    /// Registered but not yet woken for the first time.
    Opening,
    /// Polling an empty queue in one-unit steps.
    Idle,
    Serving,
}

#[derive(Debug, Clone, PartialEq, Eq, Component)]
pub struct Checker {
    /// 1-based lane number.
    pub id: u32,
    pub state: CheckerState,
    pub serving: Option<ShopperRecord>,
    pub served: u64,
    /// Idle units charged by this checker; the shared total lives in [crate::telemetry::IdleCounter].
    pub idle_time: u64,
}

impl Checker {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            state: CheckerState::Opening,
            serving: None,
            served: 0,
            idle_time: 0,
        }
    }
}
