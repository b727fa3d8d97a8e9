//! Cell snapshot: one identity paired with one signal-strength record.
//!
//! A [`CellInfo`] is an immutable point-in-time observation of a single
//! cell, produced by the platform layer from live modem state. A new
//! snapshot entirely replaces an old one; nothing is updated in place.

use std::fmt;

use serde::{Deserialize, Serialize};

use radiocell_common::{Error, UNAVAILABLE};

use crate::identity::CellIdentity;
use crate::rat::RadioAccessTechnology;
use crate::signal::{CellSignalStrength, SignalLevel};
use crate::thresholds::SignalThresholds;

/// Connection status of a cell within the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CellConnectionStatus {
    /// The cell is not serving this device
    #[default]
    None,
    /// The cell is the primary serving cell
    PrimaryServing,
    /// The cell is a secondary serving cell (e.g. carrier aggregation)
    SecondaryServing,
    /// Connection status was not reported
    Unknown,
}

impl CellConnectionStatus {
    /// Returns the platform wire value for this status.
    pub const fn to_wire(self) -> i32 {
        match self {
            Self::None => 0,
            Self::PrimaryServing => 1,
            Self::SecondaryServing => 2,
            Self::Unknown => UNAVAILABLE,
        }
    }

    /// Creates a status from its platform wire value.
    pub fn from_wire(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::None),
            1 => Some(Self::PrimaryServing),
            2 => Some(Self::SecondaryServing),
            UNAVAILABLE => Some(Self::Unknown),
            _ => None,
        }
    }
}

impl fmt::Display for CellConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::None => "none",
            Self::PrimaryServing => "primary-serving",
            Self::SecondaryServing => "secondary-serving",
            Self::Unknown => "unknown",
        };
        write!(f, "{s}")
    }
}

/// Point-in-time observation of one cell.
///
/// Pairs exactly one [`CellIdentity`] with exactly one
/// [`CellSignalStrength`] of the same technology; the pairing is enforced
/// at construction, so the accessors are total. Fields are private to keep
/// the invariant airtight.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellInfo {
    identity: CellIdentity,
    signal: CellSignalStrength,
    registered: bool,
    timestamp_nanos: u64,
    connection_status: CellConnectionStatus,
}

impl CellInfo {
    /// Creates a new cell snapshot.
    ///
    /// Returns [`Error::RatMismatch`] if the identity and signal-strength
    /// records describe different technologies.
    ///
    /// # Arguments
    /// * `identity` - The cell identity record
    /// * `signal` - The signal-strength record, same technology
    /// * `registered` - Whether the device is registered on this cell
    /// * `timestamp_nanos` - Monotonic nanoseconds since boot at observation
    /// * `connection_status` - Serving status of the cell
    pub fn new(
        identity: CellIdentity,
        signal: CellSignalStrength,
        registered: bool,
        timestamp_nanos: u64,
        connection_status: CellConnectionStatus,
    ) -> Result<Self, Error> {
        if identity.rat() != signal.rat() {
            return Err(Error::RatMismatch {
                identity: identity.rat().name(),
                signal: signal.rat().name(),
            });
        }
        Ok(Self {
            identity,
            signal,
            registered,
            timestamp_nanos,
            connection_status,
        })
    }

    /// Returns the radio access technology of this snapshot.
    pub fn rat(&self) -> RadioAccessTechnology {
        self.identity.rat()
    }

    /// Returns the cell identity. Always present.
    pub fn identity(&self) -> &CellIdentity {
        &self.identity
    }

    /// Returns the signal-strength record. Always present.
    pub fn signal(&self) -> &CellSignalStrength {
        &self.signal
    }

    /// Returns true if the device is registered on this cell.
    pub fn is_registered(&self) -> bool {
        self.registered
    }

    /// Returns the observation time in monotonic nanoseconds since boot.
    pub fn timestamp_nanos(&self) -> u64 {
        self.timestamp_nanos
    }

    /// Returns the serving status of the cell.
    pub fn connection_status(&self) -> CellConnectionStatus {
        self.connection_status
    }

    /// Convenience: the snapshot's signal level under default breakpoints.
    pub fn level(&self) -> SignalLevel {
        self.signal.level()
    }

    /// Convenience: the snapshot's signal level under the given breakpoints.
    pub fn level_with(&self, thresholds: &SignalThresholds) -> SignalLevel {
        self.signal.level_with(thresholds)
    }
}
