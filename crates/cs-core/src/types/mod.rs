//! Domain types for climascope.
//!
//! This module contains the core domain types used throughout the
//! application for representing typhoon records and their fields.
//!
//! # Module Organization
//!
//! - [`month`] - Calendar months and lenient stamp parsing
//! - [`level`] - Storm intensity classification
//! - [`record`] - The typhoon record and its two-valued fields
//!
//! # Re-exports
//!
//! All public types are re-exported at this module level for convenience:
//!
//! ```
//! use cs_core::types::{Crossing, Month, StormLevel, TyphoonRecord};
//! ```
//!
//! They are also re-exported at the crate root:
//!
//! ```
//! use cs_core::{Crossing, Month, StormLevel, TyphoonRecord};
//! ```

mod level;
mod month;
mod record;

// Re-export all public types
pub use level::StormLevel;
pub use month::{Month, interval_days};
pub use record::{Crossing, ParStatus, TyphoonRecord};
