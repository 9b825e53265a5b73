//! # Adapter Loader
//!
//! Batch loading of FIRE trade files for the SA-CCR calculator.
//!
//! A trade file is a labelled JSON envelope:
//!
//! ```text
//! { "name": "Derivatives Data", "data": [ <trade record>, ... ] }
//! ```
//!
//! This crate reads the envelope, rejects empty files and converts each
//! record into a [`pricer_saccr::Instrument`].

#![deny(missing_docs)]

pub mod error;
pub mod trade_file;

pub use error::{LoaderError, Result};
pub use trade_file::{
    load_instruments, load_trade_file, parse_trade_file, resolve_trade_path, Book, TradeFile,
    TRADE_FILE_EXTENSION,
};
