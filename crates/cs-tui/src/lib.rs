//! Terminal user interface for climascope using Ratatui.
//!
//! This crate renders the typhoon archive as a digit-driven menu tree:
//! seasons, months, records, advisories, the canned searches, and the
//! site pages (contact, settings, about).
//!
//! # Architecture
//!
//! ```text
//! crates/cs-tui/src/
//!   lib.rs           # Public API exports + run loop
//!   app.rs           # Application state and lifecycle
//!   screen.rs        # Screen identifiers for the menu tree
//!   event.rs         # Event types (Key, Resize, Tick)
//!   tui.rs           # Terminal wrapper with async event streaming
//!   action.rs        # User actions (commands from key bindings)
//!   ui.rs            # Main layout rendering orchestration
//!   theme.rs         # Color scheme and styling constants
//!   error.rs         # TUI-specific error types
//!   components/
//!     mod.rs         # Component exports
//!     menu_list.rs   # Numbered menu for the current screen
//!     detail_pane.rs # Record/advisory/report details
//!     stats_panel.rs # Archive totals strip
//!     header.rs      # HeaderBar component
//!     status_bar.rs  # StatusBar component
//!     help.rs        # HelpPanel modal overlay
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use cs_core::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), cs_tui::TuiError> {
//!     cs_tui::run(Config::default()).await
//! }
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod action;
pub mod app;
pub mod components;
pub mod error;
pub mod event;
pub mod screen;
pub mod theme;
pub mod tui;
pub mod ui;

use std::time::Duration;

use cs_core::Config;
use tracing::info;

// Public re-exports
pub use action::Action;
pub use app::{App, AppMode, MenuState, StatusMessage};
pub use error::TuiError;
pub use event::Event;
pub use screen::Screen;
pub use theme::Theme;
pub use tui::Tui;

/// Runs the TUI application with the given configuration.
///
/// This is the main entry point for the cs-tui crate. It:
///
/// 1. Initializes the terminal
/// 2. Runs the main event loop over the menu tree
/// 3. Restores the terminal on exit
///
/// # Errors
///
/// Returns an error if terminal initialization fails or the event channel
/// closes unexpectedly.
pub async fn run(config: Config) -> Result<(), TuiError> {
    let mut tui = Tui::new(Duration::from_millis(config.tui.tick_rate_ms))?;
    let mut app = App::new(config);

    tui.enter()?;

    info!("Entering main event loop");
    let result = run_event_loop(&mut tui, &mut app).await;

    tui.exit()?;

    result
}

/// Runs the main event loop.
async fn run_event_loop(tui: &mut Tui, app: &mut App) -> Result<(), TuiError> {
    loop {
        // Draw the UI
        tui.draw(|frame| ui::render(app, frame))?;

        // Wait for the next event
        let Some(event) = tui.next_event().await else {
            return Err(TuiError::ChannelClosed);
        };

        let action = match event {
            Event::Key(key) => app.handle_key(key),
            Event::Tick => {
                app.tick();
                Action::None
            }
            Event::Resize { .. } | Event::FocusGained | Event::FocusLost => Action::None,
        };

        app.update(action);

        if app.should_quit {
            info!("Quit requested");
            break;
        }
    }

    Ok(())
}
