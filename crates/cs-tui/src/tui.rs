//! Terminal wrapper with async event streaming.
//!
//! [`Tui`] owns the ratatui terminal and a background task that merges
//! crossterm's [`EventStream`] with a tick interval into a single event
//! channel. Raw mode and the alternate screen are restored on [`Tui::exit`]
//! and again from [`Drop`] if the interface unwinds early.

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEventKind};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use futures_util::StreamExt;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error};

use crate::error::TuiError;
use crate::event::Event;

/// Capacity of the event channel between the terminal task and the app.
const EVENT_CHANNEL_CAPACITY: usize = 100;

/// Wrapper around the terminal providing an async event stream.
pub struct Tui {
    /// The ratatui terminal.
    terminal: Terminal<CrosstermBackend<Stdout>>,

    /// Background task reading terminal events.
    task: Option<JoinHandle<()>>,

    /// Token used to cancel the background task.
    cancellation_token: CancellationToken,

    /// Receiving end of the event channel.
    event_rx: mpsc::Receiver<Event>,

    /// Sending end of the event channel (cloned into the task).
    event_tx: mpsc::Sender<Event>,

    /// Interval between tick events.
    tick_rate: Duration,
}

impl Tui {
    /// Creates a new terminal wrapper with the given tick interval.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal backend cannot be initialized.
    pub fn new(tick_rate: Duration) -> Result<Self, TuiError> {
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        let (event_tx, event_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);

        Ok(Self {
            terminal,
            task: None,
            cancellation_token: CancellationToken::new(),
            event_rx,
            event_tx,
            tick_rate,
        })
    }

    /// Enters the TUI: raw mode, alternate screen, event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be configured.
    pub fn enter(&mut self) -> Result<(), TuiError> {
        debug!("Entering terminal");
        enable_raw_mode()?;
        crossterm::execute!(io::stdout(), EnterAlternateScreen)?;
        self.terminal.clear()?;
        self.start_event_loop();
        Ok(())
    }

    /// Exits the TUI, restoring the terminal state.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be restored.
    pub fn exit(&mut self) -> Result<(), TuiError> {
        debug!("Exiting terminal");
        self.stop_event_loop();
        if crossterm::terminal::is_raw_mode_enabled()? {
            self.terminal.flush()?;
            crossterm::execute!(io::stdout(), LeaveAlternateScreen)?;
            disable_raw_mode()?;
        }
        Ok(())
    }

    /// Draws a frame using the given render closure.
    ///
    /// # Errors
    ///
    /// Returns an error if drawing fails.
    pub fn draw(&mut self, render: impl FnOnce(&mut ratatui::Frame)) -> Result<(), TuiError> {
        self.terminal.draw(render)?;
        Ok(())
    }

    /// Receives the next event from the event channel.
    ///
    /// Returns `None` if the channel has closed.
    pub async fn next_event(&mut self) -> Option<Event> {
        self.event_rx.recv().await
    }

    /// Spawns the background task that streams terminal events.
    fn start_event_loop(&mut self) {
        let event_tx = self.event_tx.clone();
        let cancellation_token = self.cancellation_token.clone();
        let tick_rate = self.tick_rate;

        self.task = Some(tokio::spawn(async move {
            let mut reader = EventStream::new();
            let mut tick_interval = tokio::time::interval(tick_rate);
            tick_interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    () = cancellation_token.cancelled() => {
                        debug!("Event loop cancelled");
                        break;
                    }

                    _ = tick_interval.tick() => {
                        if event_tx.send(Event::Tick).await.is_err() {
                            break;
                        }
                    }

                    maybe_event = reader.next() => {
                        match maybe_event {
                            Some(Ok(event)) => {
                                if let Some(event) = convert_crossterm_event(event) {
                                    if event_tx.send(event).await.is_err() {
                                        break;
                                    }
                                }
                            }
                            Some(Err(e)) => {
                                error!(error = %e, "Terminal event error");
                            }
                            None => break,
                        }
                    }
                }
            }
        }));
    }

    /// Cancels and detaches the background task.
    fn stop_event_loop(&mut self) {
        self.cancellation_token.cancel();
        if let Some(task) = self.task.take() {
            task.abort();
        }
        self.cancellation_token = CancellationToken::new();
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        if let Err(e) = self.exit() {
            error!(error = %e, "Failed to restore terminal");
        }
    }
}

/// Converts a crossterm event into an application [`Event`].
///
/// Key releases and repeats are filtered out; only presses reach the app.
fn convert_crossterm_event(event: CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
        CrosstermEvent::Resize(width, height) => Some(Event::Resize { width, height }),
        CrosstermEvent::FocusGained => Some(Event::FocusGained),
        CrosstermEvent::FocusLost => Some(Event::FocusLost),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_convert_key_press() {
        let key = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        let event = convert_crossterm_event(CrosstermEvent::Key(key));
        assert_eq!(event, Some(Event::Key(key)));
    }

    #[test]
    fn test_convert_key_release_filtered() {
        let mut key = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        let event = convert_crossterm_event(CrosstermEvent::Key(key));
        assert!(event.is_none());
    }

    #[test]
    fn test_convert_resize() {
        let event = convert_crossterm_event(CrosstermEvent::Resize(120, 40));
        assert_eq!(
            event,
            Some(Event::Resize {
                width: 120,
                height: 40
            })
        );
    }
}
