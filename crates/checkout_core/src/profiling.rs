//! Event counters collected by the runner.

use std::collections::HashMap;

use bevy_ecs::prelude::Resource;
use tracing::info;

use crate::clock::EventKind;

/// Event processing metrics.
#[derive(Debug, Default, Resource)]
pub struct EventMetrics {
    /// Total events processed.
    pub events_processed: u64,
    /// Events per event kind.
    pub events_by_kind: HashMap<EventKind, u64>,
}

impl EventMetrics {
    /// Record an event being processed.
    pub fn record_event(&mut self, kind: EventKind) {
        self.events_processed += 1;
        *self.events_by_kind.entry(kind).or_insert(0) += 1;
    }

    pub fn count(&self, kind: EventKind) -> u64 {
        self.events_by_kind.get(&kind).copied().unwrap_or(0)
    }

    /// Log per-kind counts, most frequent first.
    pub fn log_summary(&self) {
        info!(total = self.events_processed, "events processed");
        let mut entries: Vec<_> = self.events_by_kind.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
        for (kind, count) in entries {
            info!(kind = ?kind, count, "events by kind");
        }
    }
}
