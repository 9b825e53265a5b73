//! Error types for date construction and parsing.

use thiserror::Error;

/// Date-related errors.
///
/// # Variants
/// - `InvalidDate`: Invalid calendar components (e.g., February 30th)
/// - `ParseError`: String does not match the expected timestamp layout
///
/// # Examples
/// ```
/// use pricer_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse a timestamp string.
    #[error("Date parse error: '{input}' ({reason})")]
    ParseError {
        /// The rejected input
        input: String,
        /// Underlying parser message
        reason: String,
    },
}
