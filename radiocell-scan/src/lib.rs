//! Network scan vocabulary for radiocell
//!
//! This crate defines the value objects a scan orchestrator exchanges with
//! applications, and the two pieces of behavior the contract pins down:
//!
//! - [`specifier`] - where to scan: access network + bands + channels
//! - [`request`] - how to scan: one-shot/periodic, periodicities, filters
//! - [`available`] - multi-subscription preference records and the
//!   priority/signal selection rule
//! - [`session`] - the scan handle, terminal error codes, the callback
//!   trait, and the session state machine enforcing the
//!   one-terminal-callback rule
//! - [`codec`] - binary serialization for the scan value types
//!
//! The orchestrator itself (scheduling, radio access, retries) lives
//! outside this crate; everything here is immutable data plus pure state
//! transitions.

pub mod available;
pub mod codec;
pub mod request;
pub mod session;
pub mod specifier;

pub use available::{select_preferred, AvailableNetworkInfo, NetworkPriority};
pub use request::{NetworkScanRequest, ScanType};
pub use session::{NetworkScan, ScanCallback, ScanError, ScanEvent, ScanSession, ScanSessionState};
pub use specifier::{AccessNetwork, RadioAccessSpecifier, INVALID_CHANNEL};
