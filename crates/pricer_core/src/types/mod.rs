//! Core time and error types.
//!
//! This module provides:
//! - `time`: `Timestamp` (FIRE wire format instants) and year fraction helpers
//! - `error`: `DateError` for timestamp construction and parsing
//!
//! # Re-exports
//!
//! - [`Timestamp`], [`year_fraction`], [`FIRE_TIMESTAMP_FORMAT`] from `time`
//! - [`DateError`] from `error`

pub mod error;
pub mod time;

pub use error::DateError;
pub use time::{year_fraction, Timestamp, FIRE_TIMESTAMP_FORMAT};
