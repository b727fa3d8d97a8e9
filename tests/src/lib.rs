//! Integration test framework for radiocell
//!
//! This crate exercises cross-crate flows that the per-crate unit tests
//! cannot: full snapshots flowing through the binary codec, and scan
//! sessions carrying decoded snapshots to a callback.
//!
//! # Components
//!
//! - [`fixtures`] - populated and all-absent record constructors shared by
//!   the test modules
//!
//! # Test Categories
//!
//! 1. **Snapshot round-trip tests** - every record family through the
//!    codec, fully populated and all-sentinel
//! 2. **Scan lifecycle tests** - end-to-end result delivery, terminal
//!    exclusivity, and preference selection over decoded results

pub mod fixtures;

#[cfg(test)]
mod scan_lifecycle;
#[cfg(test)]
mod snapshot_round_trip;

pub use fixtures::{
    absent_cell_info, gsm_cell_info, lte_cell_info, nr_cell_info, nr_identity, nr_signal,
};
