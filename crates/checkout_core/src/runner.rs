//! Simulation runner: advances the clock and routes events into the ECS.
//!
//! Clock progression and event routing happen here, outside systems. Each step
//! pops the next event from [SimulationClock], inserts it as [CurrentEvent],
//! then runs the schedule. Exactly one process step runs per event.

use bevy_ecs::prelude::Res;
use bevy_ecs::prelude::{Schedule, World};
use bevy_ecs::schedule::{apply_deferred, ExecutorKind, IntoSystemConfigs};
use tracing::info;

use crate::clock::{CurrentEvent, Event, EventKind, SimulationClock};
use crate::profiling::EventMetrics;
use crate::scenario::SimulationEndTime;
use crate::systems::{
    arrival::{shopper_arrival_system, simulation_started_system},
    checker::checker_wake_system,
    shopper::{shopper_started_system, shopping_completed_system},
};

// Condition functions for each event kind
fn is_simulation_started(event: Option<Res<CurrentEvent>>) -> bool {
    event
        .map(|e| e.0.kind == EventKind::SimulationStarted)
        .unwrap_or(false)
}

fn is_shopper_arrival(event: Option<Res<CurrentEvent>>) -> bool {
    event
        .map(|e| e.0.kind == EventKind::ShopperArrival)
        .unwrap_or(false)
}

fn is_shopper_started(event: Option<Res<CurrentEvent>>) -> bool {
    event
        .map(|e| e.0.kind == EventKind::ShopperStarted)
        .unwrap_or(false)
}

fn is_shopping_completed(event: Option<Res<CurrentEvent>>) -> bool {
    event
        .map(|e| e.0.kind == EventKind::ShoppingCompleted)
        .unwrap_or(false)
}

fn is_checker_wake(event: Option<Res<CurrentEvent>>) -> bool {
    event
        .map(|e| e.0.kind == EventKind::CheckerWake)
        .unwrap_or(false)
}

/// Pops the next event unless it falls at or past [SimulationEndTime] (when that resource is present).
fn pop_due_event(world: &mut World) -> Option<Event> {
    let stop_at = world.get_resource::<SimulationEndTime>().map(|e| e.0);
    let next_ts = world
        .get_resource::<SimulationClock>()
        .and_then(|c| c.next_event_time());
    if let (Some(end), Some(ts)) = (stop_at, next_ts) {
        if ts >= end {
            return None;
        }
    }

    let event = world.get_resource_mut::<SimulationClock>()?.pop_next()?;
    world.insert_resource(CurrentEvent(event));

    if let Some(mut metrics) = world.get_resource_mut::<EventMetrics>() {
        metrics.record_event(event.kind);
    }
    Some(event)
}

/// Runs one simulation step: pops the next event, inserts it as [CurrentEvent], then runs the schedule.
/// Returns `true` if an event was processed, `false` if the clock was empty or if the next event
/// is at or past [SimulationEndTime].
pub fn run_next_event(world: &mut World, schedule: &mut Schedule) -> bool {
    if pop_due_event(world).is_none() {
        return false;
    }
    schedule.run(world);
    true
}

/// Runs one simulation step and invokes `hook` after the schedule completes.
pub fn run_next_event_with_hook<F>(world: &mut World, schedule: &mut Schedule, mut hook: F) -> bool
where
    F: FnMut(&World, &Event),
{
    let Some(event) = pop_due_event(world) else {
        return false;
    };
    schedule.run(world);
    hook(world, &event);
    true
}

/// Runs simulation steps until no event is due or `max_steps` is reached.
/// Returns the number of steps executed.
pub fn run_until_empty(world: &mut World, schedule: &mut Schedule, max_steps: usize) -> usize {
    let mut steps = 0;
    while steps < max_steps && run_next_event(world, schedule) {
        steps += 1;
    }
    steps
}

/// Runs until every remaining event falls at or past the horizon, then moves the clock to the
/// horizon. Pending processes are abandoned where they stand.
pub fn run_until_horizon(world: &mut World, schedule: &mut Schedule) -> usize {
    let steps = run_until_empty(world, schedule, usize::MAX);
    if let Some(end) = world.get_resource::<SimulationEndTime>().map(|e| e.0) {
        world.resource_mut::<SimulationClock>().advance_to(end);
    }
    let abandoned = world.resource::<SimulationClock>().pending();
    info!(
        steps,
        now = world.resource::<SimulationClock>().now(),
        abandoned,
        "simulation reached horizon"
    );
    steps
}

/// Builds the checkout schedule: one system per process step, each gated on its event kind.
///
/// The executor is single-threaded and the systems are chained, so a step never overlaps
/// another and spawned shoppers are applied before the next event.
pub fn simulation_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.set_executor_kind(ExecutorKind::SingleThreaded);

    schedule.add_systems(
        (
            // SimulationStarted
            simulation_started_system.run_if(is_simulation_started),
            // ShopperArrival
            shopper_arrival_system.run_if(is_shopper_arrival),
            // ShopperStarted
            shopper_started_system.run_if(is_shopper_started),
            // ShoppingCompleted
            shopping_completed_system.run_if(is_shopping_completed),
            // CheckerWake
            checker_wake_system.run_if(is_checker_wake),
            apply_deferred,
        )
            .chain(),
    );

    schedule
}

/// Initializes the simulation by scheduling the SimulationStarted event at time 0.
/// Call this after building the scenario and before running events.
pub fn initialize_simulation(world: &mut World) {
    let mut clock = world.resource_mut::<SimulationClock>();
    clock.schedule_at(0, EventKind::SimulationStarted, None);
}
