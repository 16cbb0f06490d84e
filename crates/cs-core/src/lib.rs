//! Core types, errors, and configuration for climascope.
//!
//! This crate provides the foundational types used across the workspace:
//!
//! - Domain types (`TyphoonRecord`, `Month`, `Crossing`, `StormLevel`)
//! - Lenient parsing helpers for the free-text fields in the archive
//! - Configuration structures
//! - Error types for consistent error handling

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod types;

pub use config::{ColorScheme, Config, SearchConfig, TuiConfig};
pub use error::{ConfigError, DataError};
pub use types::{Crossing, Month, ParStatus, StormLevel, TyphoonRecord};
