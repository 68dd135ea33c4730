use std::cmp::Ordering;
use std::collections::BinaryHeap;

use bevy_ecs::prelude::{Entity, Resource};

/// Kinds of process wake-ups the scheduler can deliver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    /// Registers the arrival generator and every checker at time 0.
    SimulationStarted,
    /// Arrival generator tick: spawn the next shopper.
    ShopperArrival,
    /// A freshly spawned shopper begins shopping.
    ShopperStarted,
    /// A shopper finished shopping and joins the checkout queue.
    ShoppingCompleted,
    /// A checker resumes, either after an idle poll or after serving a shopper.
    CheckerWake,
}

/// Entity a scheduled event is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventSubject {
    Shopper(Entity),
    Checker(Entity),
}

/// Delivery band within a single timestamp. Process starts run before ordinary wake-ups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EventPriority {
    Start,
    Normal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub timestamp: u64,
    pub priority: EventPriority,
    pub kind: EventKind,
    pub subject: Option<EventSubject>,
    /// Registration order; breaks ties within a timestamp and priority band.
    pub seq: u64,
}

impl Ord for Event {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering to make BinaryHeap a min-heap by (timestamp, priority, seq).
        other
            .timestamp
            .cmp(&self.timestamp)
            .then_with(|| other.priority.cmp(&self.priority))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Event {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The event being processed by the current schedule run.
#[derive(Debug, Clone, Copy, Resource)]
pub struct CurrentEvent(pub Event);

/// Virtual clock in whole time units (minutes). Only the runner advances it.
#[derive(Debug, Default, Resource)]
pub struct SimulationClock {
    now: u64,
    next_seq: u64,
    events: BinaryHeap<Event>,
}

impl SimulationClock {
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Schedule an event at an absolute time. Events at the same time pop in the
    /// order they were scheduled.
    pub fn schedule_at(&mut self, timestamp: u64, kind: EventKind, subject: Option<EventSubject>) {
        self.push(timestamp, EventPriority::Normal, kind, subject);
    }

    /// Schedule a process start at the current time. Starts pop ahead of every ordinary
    /// event due now, even ones scheduled earlier, and in registration order among themselves.
    pub fn schedule_start(&mut self, kind: EventKind, subject: Option<EventSubject>) {
        self.push(self.now, EventPriority::Start, kind, subject);
    }

    fn push(
        &mut self,
        timestamp: u64,
        priority: EventPriority,
        kind: EventKind,
        subject: Option<EventSubject>,
    ) {
        debug_assert!(
            timestamp >= self.now,
            "event timestamp must be >= current time"
        );
        let seq = self.next_seq;
        self.next_seq += 1;
        self.events.push(Event {
            timestamp,
            priority,
            kind,
            subject,
            seq,
        });
    }

    /// Schedule an event `delay` time units from now.
    pub fn schedule_in(&mut self, delay: u64, kind: EventKind, subject: Option<EventSubject>) {
        self.schedule_at(self.now + delay, kind, subject);
    }

    pub fn pop_next(&mut self) -> Option<Event> {
        let event = self.events.pop()?;
        self.now = event.timestamp;
        Some(event)
    }

    pub fn next_event_time(&self) -> Option<u64> {
        self.events.peek().map(|event| event.timestamp)
    }

    /// Move the clock forward without delivering anything. Never moves backwards.
    pub fn advance_to(&mut self, timestamp: u64) {
        self.now = self.now.max(timestamp);
    }

    pub fn pending(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
