//! Cell identity and signal-strength records for radiocell
//!
//! This crate defines the immutable, technology-tagged data model at the
//! heart of radiocell:
//!
//! - [`identity`] - per-technology cell identity records and the
//!   [`CellIdentity`] union
//! - [`signal`] - per-technology signal-strength records, the
//!   [`CellSignalStrength`] union, and signal-level classification
//! - [`thresholds`] - carrier-configurable level classification breakpoints
//! - [`info`] - the [`CellInfo`] snapshot pairing one identity with one
//!   signal-strength record
//! - [`capability`] - the device [`PhoneCapability`] record
//! - [`codec`] - the binary serialization for all of the above
//!
//! All records are value objects: constructed once by the platform layer,
//! never mutated, compared structurally, and safely shared across threads.

pub mod capability;
pub mod codec;
pub mod identity;
pub mod info;
pub mod rat;
pub mod signal;
pub mod thresholds;

pub use capability::{NrCapability, PhoneCapability};
pub use identity::{
    CellIdentity, CellIdentityCdma, CellIdentityGsm, CellIdentityLte, CellIdentityNr,
    CellIdentityTdscdma, CellIdentityWcdma,
};
pub use info::{CellConnectionStatus, CellInfo};
pub use rat::RadioAccessTechnology;
pub use signal::{
    CellSignalStrength, CellSignalStrengthCdma, CellSignalStrengthGsm, CellSignalStrengthLte,
    CellSignalStrengthNr, CellSignalStrengthTdscdma, CellSignalStrengthWcdma, SignalLevel,
    NUM_SIGNAL_STRENGTH_LEVELS,
};
pub use thresholds::SignalThresholds;
