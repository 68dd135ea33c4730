use bevy_ecs::prelude::{Query, Res, ResMut};
use tracing::debug;

use crate::clock::{CurrentEvent, EventKind, EventSubject, SimulationClock};
use crate::distributions::{shopping_duration, ItemCountSource};
use crate::ecs::{Shopper, ShopperState};
use crate::queue::{CheckoutQueue, ShopperRecord};

/// A new shopper draws a basket and starts shopping for `items / 2` minutes.
pub fn shopper_started_system(
    mut clock: ResMut<SimulationClock>,
    mut item_source: ResMut<ItemCountSource>,
    event: Res<CurrentEvent>,
    mut shoppers: Query<&mut Shopper>,
) {
    if event.0.kind != EventKind::ShopperStarted {
        return;
    }
    let Some(EventSubject::Shopper(entity)) = event.0.subject else {
        return;
    };
    let Ok(mut shopper) = shoppers.get_mut(entity) else {
        return;
    };
    if shopper.state != ShopperState::Arrived {
        return;
    }

    shopper.items = item_source.sample_items();
    shopper.state = ShopperState::Shopping;
    clock.schedule_in(
        shopping_duration(shopper.items),
        EventKind::ShoppingCompleted,
        Some(EventSubject::Shopper(entity)),
    );
}

pub fn shopping_completed_system(
    clock: Res<SimulationClock>,
    mut queue: ResMut<CheckoutQueue>,
    event: Res<CurrentEvent>,
    mut shoppers: Query<&mut Shopper>,
) {
    if event.0.kind != EventKind::ShoppingCompleted {
        return;
    }
    let Some(EventSubject::Shopper(entity)) = event.0.subject else {
        return;
    };
    let Ok(mut shopper) = shoppers.get_mut(entity) else {
        return;
    };
    if shopper.state != ShopperState::Shopping {
        return;
    }

    let now = clock.now();
    shopper.state = ShopperState::Queued;
    shopper.done_shopping_at = Some(now);
    queue.push(ShopperRecord {
        shopper: entity,
        id: shopper.id,
        items: shopper.items,
        arrived_at: shopper.arrived_at,
        done_shopping_at: now,
    });
    debug!(
        shopper = shopper.id,
        items = shopper.items,
        at = now,
        queue_len = queue.len(),
        "shopper joined checkout queue"
    );
}
