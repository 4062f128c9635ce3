// Observability sink for the change-processing engine.
//
// Purpose
// - Count record store operations and change events, time the dispatcher, and hold the
//   occupancy gauge refreshed by the item count worker.
//
// Boundaries
// - Recording never fails and never blocks: every metric is a lock-free atomic.
// - Components receive an `Arc<Metrics>` at construction; there is no global registry.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

pub const OPERATION_TOTAL: &str = "record_store_operation_total";
pub const OPERATION_ERROR_TOTAL: &str = "record_store_operation_error_total";
pub const EVENT_RECEIVED_TOTAL: &str = "change_event_received_total";
pub const EVENT_ERROR_TOTAL: &str = "change_event_error_total";
pub const PROCESS_MESSAGE_SECONDS: &str = "process_message_seconds";
pub const ITEMS_COUNT: &str = "record_store_items_count";

#[derive(Debug, Default)]
struct Timer {
    count: AtomicU64,
    total_ns: AtomicU64,
    max_ns: AtomicU64,
}

impl Timer {
    fn record(&self, elapsed: Duration) {
        let nanos = elapsed.as_nanos().min(u64::MAX as u128) as u64;
        self.count.fetch_add(1, Ordering::Relaxed);
        self.total_ns.fetch_add(nanos, Ordering::Relaxed);
        self.max_ns.fetch_max(nanos, Ordering::Relaxed);
    }
}

#[derive(Debug, Default)]
pub struct Metrics {
    inserts: AtomicU64,
    deletes: AtomicU64,
    store_errors: AtomicU64,
    events_received: AtomicU64,
    event_errors: AtomicU64,
    processing: Timer,
    items_count: AtomicU64,
}

/// Point-in-time copy of every metric.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub inserts: u64,
    pub deletes: u64,
    pub store_errors: u64,
    pub events_received: u64,
    pub event_errors: u64,
    pub processing_count: u64,
    pub processing_total_ns: u64,
    pub processing_max_ns: u64,
    pub items_count: u64,
}

impl MetricsSnapshot {
    pub fn average_processing_ns(&self) -> u64 {
        if self.processing_count == 0 {
            return 0;
        }
        self.processing_total_ns / self.processing_count
    }
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_insert(&self) {
        self.inserts.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_delete(&self) {
        self.deletes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_store_error(&self) {
        self.store_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_event_received(&self) {
        self.events_received.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_event_error(&self) {
        self.event_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_processing_time(&self, elapsed: Duration) {
        self.processing.record(elapsed);
    }

    pub fn set_items_count(&self, count: u64) {
        self.items_count.store(count, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            inserts: self.inserts.load(Ordering::Relaxed),
            deletes: self.deletes.load(Ordering::Relaxed),
            store_errors: self.store_errors.load(Ordering::Relaxed),
            events_received: self.events_received.load(Ordering::Relaxed),
            event_errors: self.event_errors.load(Ordering::Relaxed),
            processing_count: self.processing.count.load(Ordering::Relaxed),
            processing_total_ns: self.processing.total_ns.load(Ordering::Relaxed),
            processing_max_ns: self.processing.max_ns.load(Ordering::Relaxed),
            items_count: self.items_count.load(Ordering::Relaxed),
        }
    }

    /// Render every metric in the Prometheus text exposition format.
    pub fn render_prometheus(&self) -> String {
        let s = self.snapshot();
        let mut out = String::new();

        out.push_str(&format!(
            "# HELP {OPERATION_TOTAL} Number of operations performed on the record table\n\
             # TYPE {OPERATION_TOTAL} counter\n\
             {OPERATION_TOTAL}{{operation=\"INSERT\"}} {}\n\
             {OPERATION_TOTAL}{{operation=\"DELETE\"}} {}\n",
            s.inserts, s.deletes
        ));
        push_counter(
            &mut out,
            OPERATION_ERROR_TOTAL,
            "Number of errors during record table operations",
            s.store_errors,
        );
        push_counter(
            &mut out,
            EVENT_RECEIVED_TOTAL,
            "Number of change events received",
            s.events_received,
        );
        push_counter(
            &mut out,
            EVENT_ERROR_TOTAL,
            "Number of errors processing change events",
            s.event_errors,
        );
        out.push_str(&format!(
            "# HELP {PROCESS_MESSAGE_SECONDS} Time taken to process a message\n\
             # TYPE {PROCESS_MESSAGE_SECONDS} summary\n\
             {PROCESS_MESSAGE_SECONDS}_count {}\n\
             {PROCESS_MESSAGE_SECONDS}_sum {}\n\
             # HELP {PROCESS_MESSAGE_SECONDS}_max Longest time taken to process a message\n\
             # TYPE {PROCESS_MESSAGE_SECONDS}_max gauge\n\
             {PROCESS_MESSAGE_SECONDS}_max {}\n",
            s.processing_count,
            nanos_to_seconds(s.processing_total_ns),
            nanos_to_seconds(s.processing_max_ns),
        ));
        out.push_str(&format!(
            "# HELP {ITEMS_COUNT} Current number of items in the record table\n\
             # TYPE {ITEMS_COUNT} gauge\n\
             {ITEMS_COUNT} {}\n",
            s.items_count
        ));
        out
    }
}

fn push_counter(out: &mut String, name: &str, help: &str, value: u64) {
    out.push_str(&format!(
        "# HELP {name} {help}\n# TYPE {name} counter\n{name} {value}\n"
    ));
}

fn nanos_to_seconds(nanos: u64) -> f64 {
    Duration::from_nanos(nanos).as_secs_f64()
}
