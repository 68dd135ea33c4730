mod support;

use bevy_ecs::prelude::World;
use checkout_core::ecs::{Shopper, ShopperState};
use checkout_core::queue::CheckoutQueue;
use checkout_core::report::{shopper_counts, CheckoutReport};
use checkout_core::spawner::ArrivalGenerator;
use checkout_core::telemetry::{CheckoutTelemetry, IdleCounter};
use support::schedule::ScheduleRunner;
use support::world::TestWorldBuilder;

/// One checker, a shopper every 2 minutes, 10 items each: shop 5 minutes, check out in 2.
fn single_lane_world(horizon: u64) -> World {
    let mut world = TestWorldBuilder::new()
        .with_checkers(1)
        .with_arrival_interval(2)
        .with_horizon(horizon)
        .with_items(10)
        .build();
    ScheduleRunner::new().run_full(&mut world);
    world
}

fn departures(world: &World) -> Vec<(u64, u64)> {
    world
        .resource::<CheckoutTelemetry>()
        .transactions
        .iter()
        .map(|t| (t.shopper_id, t.departed_at))
        .collect()
}

#[test]
fn single_lane_timeline_to_minute_ten() {
    let mut world = single_lane_world(10);

    // Arrivals at 0, 2, 4, 6, 8 join the queue at 5, 7, 9, 11, 13.
    assert_eq!(world.resource::<ArrivalGenerator>().spawned_count(), 5);
    assert_eq!(departures(&world), vec![(1, 7), (2, 9)]);
    // The checker polled an empty queue through minutes 0..5.
    assert_eq!(world.resource::<IdleCounter>().0, 5);
    assert!(world.resource::<CheckoutQueue>().is_empty());

    let mut states: Vec<(u64, ShopperState)> = world
        .query::<&Shopper>()
        .iter(&world)
        .map(|s| (s.id, s.state))
        .collect();
    states.sort_unstable_by_key(|(id, _)| *id);
    assert_eq!(
        states,
        vec![
            (1, ShopperState::CheckedOut),
            (2, ShopperState::CheckedOut),
            (3, ShopperState::InCheckout),
            (4, ShopperState::Shopping),
            (5, ShopperState::Shopping),
        ]
    );

    let report = CheckoutReport::from_world(&world);
    assert_eq!(
        report.to_string(),
        "No shoppers left waiting.\n\
         Number of shoppers served: 2\n\
         Average items per shopper: 10.00\n\
         Average shopping time: 5.00 minutes\n\
         Average wait time in queue: 2.00 minutes\n\
         Maximum wait time: 2 minutes\n\
         Maximum shopping time: 5 minutes\n\
         Total idle time (all checkers): 5 minutes\n"
    );
}

#[test]
fn single_lane_third_departure_needs_horizon_past_eleven() {
    let world = single_lane_world(12);
    assert_eq!(departures(&world), vec![(1, 7), (2, 9), (3, 11)]);
    assert_eq!(world.resource::<IdleCounter>().0, 5);
}

#[test]
fn shopper_queueing_as_a_checkout_ends_is_served_that_minute() {
    // Shopper 1 (12 items) is served 6..8. Shopper 4 arrives at 6 with 5 items and queues
    // at 8, the minute the register frees up.
    let mut world = TestWorldBuilder::new()
        .with_checkers(1)
        .with_arrival_interval(2)
        .with_horizon(12)
        .with_baskets(&[12, 20, 20, 5, 20])
        .build();
    ScheduleRunner::new().run_full(&mut world);

    assert_eq!(departures(&world), vec![(1, 8), (4, 9)]);
    // Polls end at 1..=6, then 10 and 11 after shopper 4 leaves.
    assert_eq!(world.resource::<IdleCounter>().0, 8);

    let served: Vec<(u64, u64)> = world
        .resource::<CheckoutTelemetry>()
        .transactions
        .iter()
        .map(|t| (t.shopper_id, t.wait_time()))
        .collect();
    assert_eq!(served, vec![(1, 2), (4, 1)]);
}

#[test]
fn nobody_served_when_horizon_ends_during_first_shop() {
    let mut world = TestWorldBuilder::new()
        .with_arrival_interval(5)
        .with_horizon(2)
        .build();
    ScheduleRunner::new().run_full(&mut world);

    assert!(world.resource::<CheckoutTelemetry>().transactions.is_empty());
    let counts = shopper_counts(&mut world);
    assert_eq!(counts.shopping, 1);
    assert_eq!(counts.total(), 1);

    let report = CheckoutReport::from_world(&world);
    assert!(report.summary.is_none());
    assert_eq!(
        report.to_string(),
        "No shoppers left waiting.\nNo shoppers were processed.\n"
    );
}

#[test]
fn overloaded_lane_leaves_shoppers_waiting() {
    // 20 items: 3 minutes at the register, but a new shopper every minute.
    let world = {
        let mut world = TestWorldBuilder::new()
            .with_checkers(1)
            .with_arrival_interval(1)
            .with_horizon(60)
            .with_items(20)
            .build();
        ScheduleRunner::new().run_full(&mut world);
        world
    };

    let report = CheckoutReport::from_world(&world);
    assert!(report.shoppers_left_in_queue > 0);
    assert!(report
        .to_string()
        .starts_with(&format!("Shoppers left in queue: {}\n", report.shoppers_left_in_queue)));
    let summary = report.summary.expect("some shoppers served");
    assert!(summary.max_wait_time > 3);
    assert_eq!(summary.max_shopping_time, 10);
}

#[test]
fn default_store_serves_most_shoppers() {
    let mut world = TestWorldBuilder::new().with_seed(2024).build();
    ScheduleRunner::new().run_full(&mut world);

    let report = CheckoutReport::from_world(&world);
    let summary = report.summary.expect("shoppers served over three hours");
    // 90 arrivals; five lanes easily keep up with one shopper every two minutes.
    assert!(summary.shoppers_served >= 80);
    assert!((5.0..=20.0).contains(&summary.average_items));
    assert!(summary.max_shopping_time <= 10);
    assert!(summary.max_wait_time >= 1);
    assert!(summary.total_idle_time > 0);
}
