//! Terminal Events
//!
//! Reads crossterm events on a background task and forwards the ones the
//! wizard cares about over a channel.

use crossterm::event::{Event, EventStream, KeyEvent, KeyEventKind, MouseEventKind};
use futures::StreamExt;
use tokio::sync::mpsc;

/// Events consumed by the runner loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    Key(KeyEvent),
    Paste(String),
    /// -1 up, +1 down
    MouseScroll(i8),
    Resize,
}

/// Receiving end of the event channel. Senders are handed out by `new`;
/// once all of them are dropped `next` returns `None`.
pub struct EventHandler {
    receiver: mpsc::UnboundedReceiver<TuiEvent>,
}

impl EventHandler {
    pub fn new() -> (Self, mpsc::UnboundedSender<TuiEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { receiver }, sender)
    }

    /// Wait for the next event. `None` once every sender is gone.
    pub async fn next(&mut self) -> Option<TuiEvent> {
        self.receiver.recv().await
    }

    /// Spawn the task that turns terminal input into `TuiEvent`s
    pub fn start_terminal_listener(sender: mpsc::UnboundedSender<TuiEvent>) {
        tokio::spawn(async move {
            let mut reader = EventStream::new();
            while let Some(event) = reader.next().await {
                let event = match event {
                    Ok(event) => event,
                    Err(e) => {
                        tracing::warn!("Terminal event stream failed: {}", e);
                        break;
                    }
                };
                let Some(tui_event) = translate(event) else {
                    continue;
                };
                if sender.send(tui_event).is_err() {
                    // Runner is gone
                    break;
                }
            }
        });
    }
}

fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        // Windows reports releases too
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(TuiEvent::Key(key)),
        Event::Paste(text) => Some(TuiEvent::Paste(text)),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::ScrollUp => Some(TuiEvent::MouseScroll(-1)),
            MouseEventKind::ScrollDown => Some(TuiEvent::MouseScroll(1)),
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}
