//! Click analytics — an injectable list of sinks notified on every
//! tracked activation.
//!
//! Providers are not probed for at runtime: whatever sinks were handed to
//! the presenter at startup get every event, and an empty list simply means
//! nothing is recorded.

pub mod sinks;

/// One tracked click, as handed to every sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    pub link_id: u64,
    pub url: String,
    pub category: String,
}

/// A destination for click events.  Recording is fire-and-forget: sinks
/// must not block and have no way to fail the caller.
pub trait ClickSink: Send {
    fn record_click(&mut self, event: &ClickEvent);
}

/// The sink list owned by the presenter.
pub struct Sinks(Vec<Box<dyn ClickSink>>);

impl Sinks {
    pub fn new(sinks: Vec<Box<dyn ClickSink>>) -> Self {
        Self(sinks)
    }

    /// No sinks configured — every event is dropped.
    pub fn none() -> Self {
        Self(Vec::new())
    }

    /// Fan the event out to every configured sink.
    pub fn record_click(&mut self, event: &ClickEvent) {
        for sink in &mut self.0 {
            sink.record_click(event);
        }
    }
}

// ───────────────────────────────────────── tests ─────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Test sink that remembers everything it saw.
    struct RecordingSink(Arc<Mutex<Vec<ClickEvent>>>);

    impl ClickSink for RecordingSink {
        fn record_click(&mut self, event: &ClickEvent) {
            self.0.lock().unwrap().push(event.clone());
        }
    }

    fn event() -> ClickEvent {
        ClickEvent {
            link_id: 3,
            url: "https://example.com".into(),
            category: "social".into(),
        }
    }

    #[test]
    fn every_sink_sees_every_event() {
        let seen_a = Arc::new(Mutex::new(Vec::new()));
        let seen_b = Arc::new(Mutex::new(Vec::new()));
        let mut sinks = Sinks::new(vec![
            Box::new(RecordingSink(Arc::clone(&seen_a))),
            Box::new(RecordingSink(Arc::clone(&seen_b))),
        ]);

        sinks.record_click(&event());

        assert_eq!(seen_a.lock().unwrap().as_slice(), &[event()]);
        assert_eq!(seen_b.lock().unwrap().as_slice(), &[event()]);
    }

    #[test]
    fn empty_sink_list_is_fine() {
        let mut sinks = Sinks::none();
        sinks.record_click(&event()); // must not panic
    }
}
