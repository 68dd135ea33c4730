//! Load tests for checkout_core: long horizons and many lanes.

mod support;

use checkout_core::telemetry::CheckoutTelemetry;
use std::time::Instant;
use support::schedule::ScheduleRunner;
use support::world::TestWorldBuilder;

#[test]
#[ignore] // Only run explicitly: cargo test --package checkout_core --test load_tests -- --ignored
fn test_week_long_store() {
    let mut world = TestWorldBuilder::new()
        .with_checkers(20)
        .with_arrival_interval(1)
        .with_horizon(7 * 24 * 60)
        .build();

    let start = Instant::now();
    let events = ScheduleRunner::new().run_full(&mut world);
    let duration = start.elapsed();

    let events_per_sec = events as f64 / duration.as_secs_f64();
    println!(
        "Week-long store: {} events in {:.2}s ({:.0} events/sec)",
        events,
        duration.as_secs_f64(),
        events_per_sec
    );

    assert!(world.resource::<CheckoutTelemetry>().transactions.len() > 9_000);
    assert!(
        events_per_sec > 1000.0,
        "Should process >1000 events/sec, got {:.0}",
        events_per_sec
    );
}
