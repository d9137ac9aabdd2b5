//! Event Handling
//!
//! Terminal input runs on a dedicated blocking thread that feeds an
//! unbounded channel; the main loop just awaits the next [`Event`]. Ticks
//! are emitted whenever the input poll times out, and drive every
//! clock-based state transition in the app.

use std::time::Duration;

use crossterm::event::{self, KeyEvent, KeyEventKind};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Application events
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A key press
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Periodic tick (no input within the tick interval)
    Tick,
}

/// Event handler bridging crossterm input into the async main loop
pub struct EventHandler {
    receiver: mpsc::UnboundedReceiver<Event>,
    cancel: CancellationToken,
}

impl EventHandler {
    /// Spawn the input thread with the given tick interval
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        let thread_cancel = cancel.clone();

        std::thread::spawn(move || {
            loop {
                if thread_cancel.is_cancelled() {
                    break;
                }
                match event::poll(tick_rate) {
                    Ok(true) => {
                        let forwarded = match event::read() {
                            Ok(event::Event::Key(key)) if key.kind == KeyEventKind::Press => {
                                Some(Event::Key(key))
                            }
                            Ok(event::Event::Resize(w, h)) => Some(Event::Resize(w, h)),
                            Ok(_) => None,
                            Err(_) => break,
                        };
                        if let Some(event) = forwarded {
                            if sender.send(event).is_err() {
                                break;
                            }
                        }
                    }
                    Ok(false) => {
                        if sender.send(Event::Tick).is_err() {
                            break;
                        }
                    }
                    Err(_) => break,
                }
            }
        });

        Self { receiver, cancel }
    }

    /// Wait for the next event. Returns `None` once the input thread has
    /// shut down.
    pub async fn next(&mut self) -> Option<Event> {
        self.receiver.recv().await
    }

    /// Stop the input thread
    pub fn close(&self) {
        self.cancel.cancel();
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.close();
    }
}
