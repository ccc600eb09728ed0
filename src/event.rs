//! Event bus for steamsum.
//!
//! Terminal input, timer ticks, and background fetch results are normalised
//! into a single `AppEvent` enum and sent over a tokio unbounded MPSC channel.
//! The main loop receives from this channel and is the only place that
//! mutates [`crate::app::App`].

use crossterm::event::{Event, EventStream, KeyEvent, KeyEventKind, MouseEvent};
use futures::{FutureExt, StreamExt};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

use crate::client::ApiError;
use crate::summary::{Candidate, SummaryResult};

/// Spinner/animation cadence
const TICK_RATE: Duration = Duration::from_millis(100);

/// Redraw cadence (about 30 FPS)
const RENDER_RATE: Duration = Duration::from_millis(33);

#[derive(Debug)]
pub enum AppEvent {
    /// A key press (`KeyEventKind::Press` only).
    Key(KeyEvent),
    Mouse(MouseEvent),
    /// Terminal was resized to (columns, rows).
    Resize(u16, u16),
    Tick,
    Render,
    /// Outcome of a debounced `/search` request.
    Suggestions {
        generation: u64,
        result: Result<Vec<Candidate>, ApiError>,
    },
    /// Outcome of a `/summarize` request.
    Summary {
        seq: u64,
        result: Box<Result<SummaryResult, ApiError>>,
    },
}

pub type EventSender = mpsc::UnboundedSender<AppEvent>;

/// Holds the sender and receiver ends of the unified event channel.
pub struct EventHandler {
    /// Clone this for each background task that produces events.
    pub tx: EventSender,
    pub rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl EventHandler {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { tx, rx }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Spawns the task that forwards terminal input and timer ticks.
///
/// The task exits once the receiving side is gone.
pub fn spawn_event_task(tx: EventSender) {
    tokio::spawn(async move {
        let mut tick_interval = interval(TICK_RATE);
        let mut render_interval = interval(RENDER_RATE);
        let mut reader = EventStream::new();

        loop {
            let tick_tick = tick_interval.tick();
            let render_tick = render_interval.tick();
            // fuse() so a terminated stream is not polled again
            let crossterm_event = reader.next().fuse();

            let sent = tokio::select! {
                _ = tick_tick => tx.send(AppEvent::Tick),
                _ = render_tick => tx.send(AppEvent::Render),
                maybe_event = crossterm_event => match maybe_event {
                    // Windows reports both press and release
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        tx.send(AppEvent::Key(key))
                    }
                    Some(Ok(Event::Mouse(mouse))) => tx.send(AppEvent::Mouse(mouse)),
                    Some(Ok(Event::Resize(w, h))) => tx.send(AppEvent::Resize(w, h)),
                    Some(Err(e)) => {
                        tracing::error!(error = %e, "terminal event stream failed");
                        break;
                    }
                    None => break,
                    _ => Ok(()),
                },
            };

            if sent.is_err() {
                break;
            }
        }
    });
}
