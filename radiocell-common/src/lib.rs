//! Common types and utilities for radiocell
//!
//! This crate provides the shared vocabulary used across all radiocell
//! crates: the PLMN identity type, the "unavailable value" sentinel
//! convention, the library error type, and logging setup.

pub mod error;
pub mod logging;
pub mod plmn;
pub mod sentinel;

pub use error::Error;
pub use logging::{init_logging, init_logging_with_filter, LogLevel};
pub use plmn::Plmn;
pub use sentinel::{UNAVAILABLE, UNAVAILABLE_LONG};
