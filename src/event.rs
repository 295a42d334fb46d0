use color_eyre::eyre::OptionExt;
use futures::{FutureExt, StreamExt};
use ratatui::crossterm::event::Event as CrosstermEvent;
use std::time::Duration;
use tokio::sync::mpsc;

/// Interval between tick events, used to keep the UI redrawing at a steady
/// rate even without input.
const TICK_RATE: Duration = Duration::from_millis(33);

/// Everything the application's run loop reacts to.
#[derive(Clone, Debug)]
pub enum Event {
    /// Emitted on a regular schedule.
    Tick,
    /// Raw terminal events.
    Crossterm(CrosstermEvent),
    /// Playback events, produced by key handling.
    App(AppEvent),
}

/// Playback events.
#[derive(Clone, Debug)]
pub enum AppEvent {
    /// Quit the application.
    Quit,
    /// Flip the current card between front and back.
    Flip,
    /// Move forward to the next card.
    NextCard,
    /// Move back to the previous retained card.
    PreviousCard,
    /// Toggle the help popup.
    ToggleHelp,
}

/// Terminal event handler.
///
/// Owns the channel the run loop drains; a background task multiplexes
/// crossterm input with the tick schedule.
#[derive(Debug)]
pub struct EventHandler {
    sender: mpsc::UnboundedSender<Event>,
    receiver: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    /// Creates the handler and spawns the terminal-reading task.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let task_sender = sender.clone();
        tokio::spawn(async move { poll_terminal(task_sender).await });
        Self { sender, receiver }
    }

    /// Waits for the next event.
    ///
    /// Fails only if the sending side disconnected, which means the terminal
    /// task died.
    pub async fn next(&mut self) -> color_eyre::Result<Event> {
        self.receiver
            .recv()
            .await
            .ok_or_eyre("event channel closed")
    }

    /// Queues an app event for the next iteration of the run loop.
    pub fn send(&mut self, app_event: AppEvent) {
        // The receiver lives as long as this struct, so the send cannot fail.
        let _ = self.sender.send(Event::App(app_event));
    }
}

/// Emits tick events at a fixed rate and forwards crossterm events as they
/// arrive, until the receiving side goes away.
async fn poll_terminal(sender: mpsc::UnboundedSender<Event>) {
    let mut reader = crossterm::event::EventStream::new();
    let mut tick = tokio::time::interval(TICK_RATE);
    loop {
        let tick_delay = tick.tick();
        let crossterm_event = reader.next().fuse();
        tokio::select! {
            _ = sender.closed() => {
                break;
            }
            _ = tick_delay => {
                // Shutting down drops the receiver mid-send; not an error.
                let _ = sender.send(Event::Tick);
            }
            Some(Ok(event)) = crossterm_event => {
                let _ = sender.send(Event::Crossterm(event));
            }
        };
    }
}
