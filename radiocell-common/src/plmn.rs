//! PLMN (Public Land Mobile Network) identity.
//!
//! A PLMN uniquely identifies a mobile network operator. The canonical
//! representation is a pair of decimal digit strings: a 3-digit MCC and a
//! 2- or 3-digit MNC, where the digit count of the MNC is significant
//! ("01" and "001" name different networks). The legacy integer views are
//! derived from the canonical value, never stored separately.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Public Land Mobile Network identifier.
///
/// Consists of:
/// - MCC (Mobile Country Code): 3 decimal digits (001-999)
/// - MNC (Mobile Network Code): 2 or 3 decimal digits
///
/// The `long_mnc` field records whether the MNC uses 3 digits (true) or
/// 2 digits (false), which keeps the canonical digit strings lossless.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Plmn {
    /// Mobile Country Code (3 digits, range 0-999)
    pub mcc: u16,
    /// Mobile Network Code (2-3 digits, range 0-999)
    pub mnc: u16,
    /// True if MNC is 3 digits, false if 2 digits
    pub long_mnc: bool,
}

impl Plmn {
    /// Creates a new PLMN with the given MCC and MNC.
    ///
    /// # Arguments
    /// * `mcc` - Mobile Country Code (3 digits)
    /// * `mnc` - Mobile Network Code (2-3 digits)
    /// * `long_mnc` - Whether MNC is 3 digits
    pub const fn new(mcc: u16, mnc: u16, long_mnc: bool) -> Self {
        Self { mcc, mnc, long_mnc }
    }

    /// Parses a PLMN from its canonical digit strings.
    ///
    /// The MCC must be exactly 3 decimal digits and the MNC 2 or 3 decimal
    /// digits; anything else is rejected.
    pub fn from_strings(mcc: &str, mnc: &str) -> Result<Self, Error> {
        if mcc.len() != 3 || !mcc.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidPlmn(format!("MCC must be 3 digits: {mcc:?}")));
        }
        if !(2..=3).contains(&mnc.len()) || !mnc.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidPlmn(format!(
                "MNC must be 2 or 3 digits: {mnc:?}"
            )));
        }
        let mcc_val: u16 = mcc
            .parse()
            .map_err(|_| Error::InvalidPlmn(format!("unparsable MCC: {mcc:?}")))?;
        let mnc_val: u16 = mnc
            .parse()
            .map_err(|_| Error::InvalidPlmn(format!("unparsable MNC: {mnc:?}")))?;
        Ok(Self::new(mcc_val, mnc_val, mnc.len() == 3))
    }

    /// Returns the canonical MCC digit string (authoritative view).
    pub fn mcc_string(&self) -> String {
        format!("{:03}", self.mcc)
    }

    /// Returns the canonical MNC digit string (authoritative view).
    ///
    /// Preserves the 2- vs 3-digit distinction.
    pub fn mnc_string(&self) -> String {
        if self.long_mnc {
            format!("{:03}", self.mnc)
        } else {
            format!("{:02}", self.mnc)
        }
    }

    /// Legacy integer view of the MCC.
    #[deprecated(note = "use `mcc_string`; the integer view loses leading zeros")]
    pub fn mcc_int(&self) -> u16 {
        self.mcc
    }

    /// Legacy integer view of the MNC.
    #[deprecated(note = "use `mnc_string`; the integer view cannot distinguish MNC 01 from 001")]
    pub fn mnc_int(&self) -> u16 {
        self.mnc
    }

    /// Returns true if this PLMN has valid values set.
    pub fn has_value(&self) -> bool {
        self.mcc > 0 || self.mnc > 0
    }

    /// Encodes the PLMN to 3GPP format (3 bytes).
    ///
    /// The encoding follows 3GPP TS 24.008 format:
    /// - Byte 0: MCC digit 2 (high nibble) | MCC digit 1 (low nibble)
    /// - Byte 1: MNC digit 3 or 0xF (high nibble) | MCC digit 3 (low nibble)
    /// - Byte 2: MNC digit 2 (high nibble) | MNC digit 1 (low nibble)
    pub fn encode(&self) -> [u8; 3] {
        let mcc = self.mcc;
        let mcc3 = (mcc % 10) as u8;
        let mcc2 = ((mcc % 100) / 10) as u8;
        let mcc1 = ((mcc % 1000) / 100) as u8;

        let mnc = self.mnc;
        let (mnc1, mnc2, mnc3) = if self.long_mnc {
            (
                ((mnc % 1000) / 100) as u8,
                ((mnc % 100) / 10) as u8,
                (mnc % 10) as u8,
            )
        } else {
            (((mnc % 100) / 10) as u8, (mnc % 10) as u8, 0x0F)
        };

        let octet1 = (mcc2 << 4) | mcc1;
        let octet2 = (mnc3 << 4) | mcc3;
        let octet3 = (mnc2 << 4) | mnc1;

        [octet1, octet2, octet3]
    }

    /// Decodes a PLMN from 3GPP format (3 bytes).
    pub fn decode(bytes: [u8; 3]) -> Self {
        let octet1 = bytes[0];
        let octet2 = bytes[1];
        let octet3 = bytes[2];

        // Decode MCC
        let mcc1 = (octet1 & 0x0F) as u16;
        let mcc2 = ((octet1 >> 4) & 0x0F) as u16;
        let mcc3 = (octet2 & 0x0F) as u16;
        let mcc = 100 * mcc1 + 10 * mcc2 + mcc3;

        // Decode MNC
        let mnc3 = (octet2 >> 4) & 0x0F;
        let mnc1 = (octet3 & 0x0F) as u16;
        let mnc2 = ((octet3 >> 4) & 0x0F) as u16;

        let (mnc, long_mnc) = if mnc3 != 0x0F {
            // 3-digit MNC
            (10 * (10 * mnc1 + mnc2) + mnc3 as u16, true)
        } else {
            // 2-digit MNC
            (10 * mnc1 + mnc2, false)
        };

        Self { mcc, mnc, long_mnc }
    }
}

impl fmt::Debug for Plmn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Plmn({}-{})", self.mcc_string(), self.mnc_string())
    }
}

impl fmt::Display for Plmn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.mcc_string(), self.mnc_string())
    }
}

impl Default for Plmn {
    fn default() -> Self {
        Self {
            mcc: 0,
            mnc: 0,
            long_mnc: false,
        }
    }
}
