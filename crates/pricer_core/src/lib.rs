//! # pricer_core: Foundation types for the SA-CCR workspace
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Time types: `Timestamp`, `year_fraction` (`types::time`)
//! - Error types: `DateError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other workspace crates, with minimal external dependencies:
//! - chrono: Date arithmetic
//! - serde: Serialisation of timestamps into reports
//! - thiserror: Error derivation
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::types::{year_fraction, Timestamp};
//!
//! let as_of = Timestamp::parse("2024-01-01T00:00:00Z").unwrap();
//! let end = Timestamp::parse("2026-07-01T00:00:00Z").unwrap();
//!
//! let years = year_fraction(as_of, end, 365.0);
//! assert!((years - 2.4986).abs() < 1e-3);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod types;
