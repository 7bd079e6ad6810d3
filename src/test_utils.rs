//! Helpers shared by unit tests.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Metadata, Subscriber};

/// Subscriber that only counts the events it receives.
#[derive(Clone, Default)]
pub(crate) struct EventCounter {
    events: Arc<AtomicUsize>,
    next_span: Arc<AtomicU64>,
}

impl EventCounter {
    pub(crate) fn count(&self) -> usize {
        self.events.load(Ordering::SeqCst)
    }

    /// Runs `f` with this counter as the thread's default subscriber and
    /// returns how many events it emitted on this thread.
    pub(crate) fn events_during<R>(f: impl FnOnce() -> R) -> (R, usize) {
        let counter = EventCounter::default();
        let result = tracing::subscriber::with_default(counter.clone(), f);
        (result, counter.count())
    }
}

impl Subscriber for EventCounter {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _span: &Attributes<'_>) -> Id {
        Id::from_u64(self.next_span.fetch_add(1, Ordering::SeqCst) + 1)
    }

    fn record(&self, _span: &Id, _values: &Record<'_>) {}

    fn record_follows_from(&self, _span: &Id, _follows: &Id) {}

    fn event(&self, _event: &Event<'_>) {
        self.events.fetch_add(1, Ordering::SeqCst);
    }

    fn enter(&self, _span: &Id) {}

    fn exit(&self, _span: &Id) {}
}
