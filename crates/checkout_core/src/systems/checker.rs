use bevy_ecs::prelude::{Query, Res, ResMut};
use tracing::debug;

use crate::clock::{CurrentEvent, EventKind, EventSubject, SimulationClock};
use crate::distributions::checkout_duration;
use crate::ecs::{Checker, CheckerState, Shopper, ShopperState};
use crate::queue::CheckoutQueue;
use crate::telemetry::{CheckoutTelemetry, IdleCounter, TransactionRecord};

/// Minutes a checker waits before looking at an empty queue again.
pub const IDLE_POLL_MINUTES: u64 = 1;

/// One step of a checker's loop.
///
/// A wake first settles whatever the checker was blocked on: an idle poll charges one
/// minute to the idle counters, a finished checkout is written to the transaction log.
/// The checker then takes the queue head, or polls again after [IDLE_POLL_MINUTES]
/// when the queue is empty.
pub fn checker_wake_system(
    mut clock: ResMut<SimulationClock>,
    mut queue: ResMut<CheckoutQueue>,
    mut telemetry: ResMut<CheckoutTelemetry>,
    mut idle: ResMut<IdleCounter>,
    event: Res<CurrentEvent>,
    mut checkers: Query<&mut Checker>,
    mut shoppers: Query<&mut Shopper>,
) {
    if event.0.kind != EventKind::CheckerWake {
        return;
    }
    let Some(EventSubject::Checker(entity)) = event.0.subject else {
        return;
    };
    let Ok(mut checker) = checkers.get_mut(entity) else {
        return;
    };

    let now = clock.now();
    match checker.state {
        CheckerState::Opening => {}
        CheckerState::Idle => {
            checker.idle_time += IDLE_POLL_MINUTES;
            idle.0 += IDLE_POLL_MINUTES;
        }
        CheckerState::Serving => {
            if let Some(record) = checker.serving.take() {
                let transaction = TransactionRecord::from_record(&record, now, checker.id);
                telemetry.record(transaction);
                checker.served += 1;
                if let Ok(mut shopper) = shoppers.get_mut(record.shopper) {
                    shopper.state = ShopperState::CheckedOut;
                    shopper.departed_at = Some(now);
                }
                debug!(
                    checker = checker.id,
                    shopper = record.id,
                    at = now,
                    wait = transaction.wait_time(),
                    "checkout finished"
                );
            }
        }
    }

    match queue.pop_front() {
        Some(record) => {
            if let Ok(mut shopper) = shoppers.get_mut(record.shopper) {
                shopper.state = ShopperState::InCheckout;
            }
            checker.state = CheckerState::Serving;
            checker.serving = Some(record);
            clock.schedule_in(
                checkout_duration(record.items),
                EventKind::CheckerWake,
                Some(EventSubject::Checker(entity)),
            );
        }
        None => {
            checker.state = CheckerState::Idle;
            clock.schedule_in(
                IDLE_POLL_MINUTES,
                EventKind::CheckerWake,
                Some(EventSubject::Checker(entity)),
            );
        }
    }
}
