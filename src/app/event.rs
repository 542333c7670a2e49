//! Terminal event abstraction and one-shot effects.
//!
//! Terminal input is wrapped into a simpler enum and forwarded over a
//! channel by a background task so the main loop stays non-blocking.
//! Timed visual effects (loading, click pulse, scroll-into-view) and the
//! asynchronous import read report back over a second channel; each effect
//! is an independent fire-and-forget task with no cancellation.

use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent, MouseEvent};
use tokio::sync::mpsc;

use crate::core::transfer::TransferError;

/// High-level events consumed by the application.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,
}

/// Deferred completions delivered to the main loop.
#[derive(Debug)]
pub enum Effect {
    /// The ~300 ms startup loading effect is over.
    LoadingDone,
    /// A card's ~100 ms click pulse should reset.
    PulseExpired { link_id: u64 },
    /// Scroll the freshly added link into view (fires ~100 ms after the
    /// append so the card exists in the projected list).
    ScrollToCard { link_id: u64 },
    /// The import file read finished (content, or a read error).
    ImportLoaded {
        result: Result<String, TransferError>,
    },
}

pub type EffectSender = mpsc::UnboundedSender<Effect>;

/// Spawns a background task that polls the terminal for events and sends them
/// through the returned channel.
pub fn spawn_event_reader(tick_rate: Duration) -> mpsc::UnboundedReceiver<AppEvent> {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        loop {
            // Use crossterm's poll with the tick rate so we can send Tick
            // events even when nothing is happening.
            let has_event = event::poll(tick_rate).unwrap_or(false);
            if has_event {
                if let Ok(ev) = event::read() {
                    let app_event = match ev {
                        CtEvent::Key(k) => AppEvent::Key(k),
                        CtEvent::Mouse(m) => AppEvent::Mouse(m),
                        CtEvent::Resize(w, h) => AppEvent::Resize(w, h),
                        _ => continue,
                    };
                    if tx.send(app_event).is_err() {
                        break; // receiver dropped
                    }
                }
            } else {
                // No event within tick_rate — send a tick.
                if tx.send(AppEvent::Tick).is_err() {
                    break;
                }
            }
        }
    });

    rx
}

/// Deliver `effect` after `delay`.  The task owns nothing but its own
/// sender clone, so overlapping effects never interfere.
pub fn schedule(tx: &EffectSender, delay: Duration, effect: Effect) {
    let tx = tx.clone();
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let _ = tx.send(effect);
    });
}

/// Read an import file off the main task and report the text (or the
/// error) back as an effect.
pub fn spawn_import(tx: &EffectSender, path: PathBuf) {
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = tokio::fs::read_to_string(&path)
            .await
            .map_err(|err| TransferError::Read {
                path: path.display().to_string(),
                source: err,
            });
        let _ = tx.send(Effect::ImportLoaded { result });
    });
}
