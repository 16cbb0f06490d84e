//! Compiled-in typhoon season archive for climascope.
//!
//! This crate ships the 2024 and 2025 Philippine typhoon season data as
//! static tables and provides:
//!
//! - [`Archive`] - owned records with season and month lookups
//! - [`ArchiveStats`] - a serializable aggregate snapshot
//! - [`advisories`] - per-season resolutions and recommendations
//!
//! All data is compiled in; there is no I/O and no external data source.

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod advisories;
mod archive;
mod seasons;
pub mod stats;

pub use advisories::AdvisorySection;
pub use archive::Archive;
pub use seasons::SEASONS;
pub use stats::ArchiveStats;
