//! Radio access specifiers: where a scan should look.

use std::fmt;

use serde::{Deserialize, Serialize};

use radiocell_common::Error;

/// Channel number reserved to mean "no valid channel".
pub const INVALID_CHANNEL: i32 = -1;

/// Access network class a specifier targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum AccessNetwork {
    /// GSM EDGE Radio Access Network
    Geran = 1,
    /// Universal Terrestrial Radio Access Network (UMTS)
    Utran = 2,
    /// Evolved UTRAN (LTE)
    Eutran = 3,
    /// CDMA2000 network
    Cdma2000 = 4,
    /// Interworking WLAN
    Iwlan = 5,
    /// Next-Generation Radio Access Network (NR)
    Ngran = 6,
}

impl AccessNetwork {
    /// Creates an AccessNetwork from a u8 value
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::Geran),
            2 => Some(Self::Utran),
            3 => Some(Self::Eutran),
            4 => Some(Self::Cdma2000),
            5 => Some(Self::Iwlan),
            6 => Some(Self::Ngran),
            _ => None,
        }
    }
}

impl fmt::Display for AccessNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Geran => "GERAN",
            Self::Utran => "UTRAN",
            Self::Eutran => "EUTRAN",
            Self::Cdma2000 => "CDMA2000",
            Self::Iwlan => "IWLAN",
            Self::Ngran => "NGRAN",
        };
        write!(f, "{s}")
    }
}

/// One access network to scan, optionally narrowed to specific frequency
/// bands and channels.
///
/// Invariant: at least one of `bands`/`channels` is non-empty - a
/// specifier naming neither would scan nothing, so construction rejects it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RadioAccessSpecifier {
    /// The access network class to scan
    pub access_network: AccessNetwork,
    /// Frequency bands to scan
    pub bands: Vec<i32>,
    /// Specific channel numbers to scan within the bands
    pub channels: Vec<i32>,
}

impl RadioAccessSpecifier {
    /// Creates a new specifier.
    ///
    /// Returns [`Error::EmptySpecifier`] when both `bands` and `channels`
    /// are empty.
    pub fn new(
        access_network: AccessNetwork,
        bands: Vec<i32>,
        channels: Vec<i32>,
    ) -> Result<Self, Error> {
        if bands.is_empty() && channels.is_empty() {
            return Err(Error::EmptySpecifier);
        }
        Ok(Self {
            access_network,
            bands,
            channels,
        })
    }
}
