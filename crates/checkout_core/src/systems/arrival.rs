//! Arrival systems: register the store's processes and spawn shoppers on each tick.

use bevy_ecs::prelude::{Commands, Entity, Query, Res, ResMut};
use tracing::debug;

use crate::clock::{CurrentEvent, EventKind, EventSubject, SimulationClock};
use crate::ecs::{Checker, Shopper};
use crate::spawner::ArrivalGenerator;

/// Starts the arrival generator, then every checker in lane order, all at the current time.
pub fn simulation_started_system(
    mut clock: ResMut<SimulationClock>,
    event: Res<CurrentEvent>,
    checkers: Query<(Entity, &Checker)>,
) {
    if event.0.kind != EventKind::SimulationStarted {
        return;
    }

    clock.schedule_start(EventKind::ShopperArrival, None);

    let mut lanes: Vec<(u32, Entity)> = checkers
        .iter()
        .map(|(entity, checker)| (checker.id, entity))
        .collect();
    lanes.sort_unstable_by_key(|(lane, _)| *lane);
    for (_, entity) in lanes {
        clock.schedule_start(EventKind::CheckerWake, Some(EventSubject::Checker(entity)));
    }
}

pub fn shopper_arrival_system(
    mut commands: Commands,
    mut clock: ResMut<SimulationClock>,
    mut generator: ResMut<ArrivalGenerator>,
    event: Res<CurrentEvent>,
) {
    if event.0.kind != EventKind::ShopperArrival {
        return;
    }

    let now = clock.now();
    let id = generator.advance(now);
    let shopper = commands.spawn(Shopper::new(id, now)).id();

    // The new shopper starts ahead of any checker wake already due this minute.
    clock.schedule_start(EventKind::ShopperStarted, Some(EventSubject::Shopper(shopper)));
    clock.schedule_at(generator.next_arrival_at(), EventKind::ShopperArrival, None);
    debug!(shopper = id, at = now, "shopper arrived");
}
