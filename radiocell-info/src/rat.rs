//! Radio access technology tags.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Radio access technology identifier.
///
/// This is the closed tag keying the [`CellIdentity`](crate::CellIdentity)
/// and [`CellSignalStrength`](crate::CellSignalStrength) unions; the wire
/// codec writes it as a single byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum RadioAccessTechnology {
    /// GSM (2G)
    Gsm = 1,
    /// CDMA2000 1x (2G/3G)
    Cdma = 2,
    /// WCDMA / UMTS (3G)
    Wcdma = 3,
    /// TD-SCDMA (3G)
    Tdscdma = 4,
    /// LTE (4G)
    Lte = 5,
    /// NR (5G)
    Nr = 6,
}

impl RadioAccessTechnology {
    /// Creates a RadioAccessTechnology from a u8 value
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::Gsm),
            2 => Some(Self::Cdma),
            3 => Some(Self::Wcdma),
            4 => Some(Self::Tdscdma),
            5 => Some(Self::Lte),
            6 => Some(Self::Nr),
            _ => None,
        }
    }

    /// Returns the technology name used in logs and error messages.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Gsm => "GSM",
            Self::Cdma => "CDMA",
            Self::Wcdma => "WCDMA",
            Self::Tdscdma => "TD-SCDMA",
            Self::Lte => "LTE",
            Self::Nr => "NR",
        }
    }
}

impl fmt::Display for RadioAccessTechnology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rat_from_u8() {
        assert_eq!(
            RadioAccessTechnology::from_u8(1),
            Some(RadioAccessTechnology::Gsm)
        );
        assert_eq!(
            RadioAccessTechnology::from_u8(6),
            Some(RadioAccessTechnology::Nr)
        );
        assert_eq!(RadioAccessTechnology::from_u8(0), None);
        assert_eq!(RadioAccessTechnology::from_u8(7), None);
    }

    #[test]
    fn test_rat_roundtrip() {
        for rat in [
            RadioAccessTechnology::Gsm,
            RadioAccessTechnology::Cdma,
            RadioAccessTechnology::Wcdma,
            RadioAccessTechnology::Tdscdma,
            RadioAccessTechnology::Lte,
            RadioAccessTechnology::Nr,
        ] {
            assert_eq!(RadioAccessTechnology::from_u8(rat as u8), Some(rat));
        }
    }

    #[test]
    fn test_rat_display() {
        assert_eq!(RadioAccessTechnology::Tdscdma.to_string(), "TD-SCDMA");
        assert_eq!(RadioAccessTechnology::Nr.to_string(), "NR");
    }
}
