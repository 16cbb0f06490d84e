//! Canned searches over the climascope archive.
//!
//! This crate provides the five canned searches that span both archived
//! seasons combined:
//!
//! - [`SearchKind`] - the searches, with their menu and report text
//! - [`SearchEngine`] - typed query methods plus [`SearchEngine::run`]
//! - [`SearchReport`] - a rendered result shared by the CLI and the TUI

#![deny(clippy::all)]
#![warn(missing_docs)]

mod engine;
mod kind;
mod report;

pub use engine::SearchEngine;
pub use kind::SearchKind;
pub use report::SearchReport;
