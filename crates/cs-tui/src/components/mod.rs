//! UI components for the TUI.
//!
//! This module contains all the widget implementations for rendering
//! different parts of the interface.
//!
//! # Component Types
//!
//! - **Widgets** (`Widget` trait): `HeaderBar`, `StatsPanel`, `MenuList`,
//!   `DetailPane`, `StatusBar`
//! - **Overlays**: `HelpPanel`

mod detail_pane;
mod header;
mod help;
mod menu_list;
mod stats_panel;
mod status_bar;

pub use detail_pane::DetailPane;
pub use header::HeaderBar;
pub use help::HelpPanel;
pub use menu_list::MenuList;
pub use stats_panel::StatsPanel;
pub use status_bar::StatusBar;
