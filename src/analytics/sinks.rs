//! Built-in click sinks.
//!
//! Each sink has its own event shape on the wire — the log sink emits a
//! structured tracing event, the JSONL sink appends one JSON object per
//! line.  Failures inside a sink degrade to a traced warning; they never
//! reach the caller.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use super::{ClickEvent, ClickSink};

// ───────────────────────────────────────── log sink ──────────

/// Emits every click as a structured `tracing` event.
pub struct LogSink;

impl ClickSink for LogSink {
    fn record_click(&mut self, event: &ClickEvent) {
        tracing::info!(
            link_id = event.link_id,
            url = %event.url,
            category = %event.category,
            "link clicked"
        );
    }
}

// ───────────────────────────────────────── jsonl sink ────────

/// Appends clicks as JSON lines to a file, one object per event.
pub struct JsonlSink {
    path: PathBuf,
}

impl JsonlSink {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ClickSink for JsonlSink {
    fn record_click(&mut self, event: &ClickEvent) {
        let line = serde_json::json!({
            "event": "link_click",
            "link_id": event.link_id,
            "url": event.url,
            "category": event.category,
            "at": chrono::Utc::now().to_rfc3339(),
        });
        let appended = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut f| writeln!(f, "{line}"));
        if let Err(err) = appended {
            tracing::warn!("click log {} not writable: {err}", self.path.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jsonl_sink_appends_one_line_per_event() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clicks.jsonl");
        let mut sink = JsonlSink::new(path.clone());

        for id in [1, 2] {
            sink.record_click(&ClickEvent {
                link_id: id,
                url: "https://example.com".into(),
                category: "social".into(),
            });
        }

        let text = std::fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["link_id"], 1);
        assert_eq!(first["event"], "link_click");
    }
}
