//! Signal-strength records and level classification.
//!
//! Each technology reports its own raw measurements; all of them reduce to
//! the shared 0-4 [`SignalLevel`] scale through a pure, stateless
//! classification of the instance's own fields. An instance whose relevant
//! measurements were never reported always classifies as
//! [`SignalLevel::NoneOrUnknown`] - classification never fails.
//!
//! # Measurement types
//!
//! - **RSSI**: Received Signal Strength Indicator (GSM, LTE, WCDMA)
//! - **RSRP/RSRQ/RSSNR/CQI**: LTE reference-signal measurements
//! - **RSCP/Ec-No**: WCDMA/TD-SCDMA measurements
//! - **Ec/Io, SNR**: CDMA 1x / EVDO measurements
//! - **SS-RSRP/SS-RSRQ/SS-SINR, CSI-***: NR synchronization-signal and
//!   channel-state measurements
//!
//! # Reference
//! - 3GPP TS 27.007 (ASU encodings)
//! - 3GPP TS 38.215 (NR physical layer measurements)

use std::fmt;

use serde::{Deserialize, Serialize};

use radiocell_common::Error;

use crate::rat::RadioAccessTechnology;
use crate::thresholds::{level_from_breakpoints, SignalThresholds};

/// Number of discrete signal strength levels, shared by every technology.
pub const NUM_SIGNAL_STRENGTH_LEVELS: usize = 5;

/// ASU value reported when the underlying measurement is unavailable
/// (GSM, CDMA, LTE, NR).
pub const ASU_UNKNOWN: i32 = 99;

/// ASU value reported when the underlying measurement is unavailable
/// (WCDMA, TD-SCDMA).
pub const ASU_UNKNOWN_UMTS: i32 = 255;

/// Normalized signal strength level.
///
/// The co-domain of every technology's classification; consistent with
/// [`NUM_SIGNAL_STRENGTH_LEVELS`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum SignalLevel {
    /// No signal, or measurement not reported
    #[default]
    NoneOrUnknown = 0,
    /// Poor signal
    Poor = 1,
    /// Moderate signal
    Moderate = 2,
    /// Good signal
    Good = 3,
    /// Great signal
    Great = 4,
}

impl SignalLevel {
    /// Creates a SignalLevel from a u8 value
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::NoneOrUnknown),
            1 => Some(Self::Poor),
            2 => Some(Self::Moderate),
            3 => Some(Self::Good),
            4 => Some(Self::Great),
            _ => None,
        }
    }
}

impl fmt::Display for SignalLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::NoneOrUnknown => "none",
            Self::Poor => "poor",
            Self::Moderate => "moderate",
            Self::Good => "good",
            Self::Great => "great",
        };
        write!(f, "{s}")
    }
}

/// Range-checks an optional measurement against `[min, max]`.
fn check_range(field: &'static str, value: Option<i32>, min: i32, max: i32) -> Result<(), Error> {
    match value {
        Some(v) if v < min || v > max => Err(Error::FieldRange {
            field,
            value: v as i64,
        }),
        _ => Ok(()),
    }
}

/// RSSI breakpoints shared by the GSM classifier and the LTE RSSI
/// fallback (dBm).
const RSSI_BREAKPOINTS: [i32; 4] = [-107, -103, -97, -89];

/// TD-SCDMA RSCP breakpoints (dBm).
const TDSCDMA_RSCP_BREAKPOINTS: [i32; 4] = [-110, -97, -73, -49];

/// GSM signal strength.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellSignalStrengthGsm {
    /// RSSI in dBm (range -113..-51)
    pub rssi: Option<i32>,
    /// Bit error rate (range 0-7, per 3GPP TS 27.007)
    pub bit_error_rate: Option<i32>,
    /// Timing advance in symbol periods (range 0-219)
    pub timing_advance: Option<i32>,
}

impl CellSignalStrengthGsm {
    /// Creates a new GSM signal strength, rejecting out-of-range fields.
    pub fn new(
        rssi: Option<i32>,
        bit_error_rate: Option<i32>,
        timing_advance: Option<i32>,
    ) -> Result<Self, Error> {
        check_range("rssi", rssi, -113, -51)?;
        check_range("bit_error_rate", bit_error_rate, 0, 7)?;
        check_range("timing_advance", timing_advance, 0, 219)?;
        Ok(Self {
            rssi,
            bit_error_rate,
            timing_advance,
        })
    }

    /// Classifies the RSSI onto the shared 0-4 scale.
    pub fn level(&self) -> SignalLevel {
        match self.rssi {
            Some(rssi) => level_from_breakpoints(rssi, &RSSI_BREAKPOINTS),
            None => SignalLevel::NoneOrUnknown,
        }
    }

    /// Returns the ASU (`(dBm + 113) / 2`, range 0-31), or [`ASU_UNKNOWN`].
    pub fn asu_level(&self) -> i32 {
        match self.rssi {
            Some(rssi) => ((rssi + 113) / 2).clamp(0, 31),
            None => ASU_UNKNOWN,
        }
    }

    /// Returns the primary power measurement (RSSI) in dBm.
    pub fn dbm(&self) -> Option<i32> {
        self.rssi
    }
}

/// CDMA 1x / EVDO signal strength.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellSignalStrengthCdma {
    /// CDMA 1x RSSI in dBm (range -120..0)
    pub cdma_dbm: Option<i32>,
    /// CDMA 1x Ec/Io in dB*10 (range -160..0)
    pub cdma_ecio: Option<i32>,
    /// EVDO RSSI in dBm (range -120..0)
    pub evdo_dbm: Option<i32>,
    /// EVDO Ec/Io in dB*10 (range -160..0)
    pub evdo_ecio: Option<i32>,
    /// EVDO signal-to-noise ratio (range 0-8)
    pub evdo_snr: Option<i32>,
}

impl CellSignalStrengthCdma {
    /// Creates a new CDMA signal strength, rejecting out-of-range fields.
    pub fn new(
        cdma_dbm: Option<i32>,
        cdma_ecio: Option<i32>,
        evdo_dbm: Option<i32>,
        evdo_ecio: Option<i32>,
        evdo_snr: Option<i32>,
    ) -> Result<Self, Error> {
        check_range("cdma_dbm", cdma_dbm, -120, 0)?;
        check_range("cdma_ecio", cdma_ecio, -160, 0)?;
        check_range("evdo_dbm", evdo_dbm, -120, 0)?;
        check_range("evdo_ecio", evdo_ecio, -160, 0)?;
        check_range("evdo_snr", evdo_snr, 0, 8)?;
        Ok(Self {
            cdma_dbm,
            cdma_ecio,
            evdo_dbm,
            evdo_ecio,
            evdo_snr,
        })
    }

    /// 1x level: the worse of the dBm and Ec/Io classifications.
    pub fn cdma_level(&self) -> SignalLevel {
        let dbm_level = match self.cdma_dbm {
            Some(dbm) => level_from_breakpoints(dbm, &[-100, -95, -85, -75]),
            None => SignalLevel::NoneOrUnknown,
        };
        let ecio_level = match self.cdma_ecio {
            Some(ecio) => level_from_breakpoints(ecio, &[-150, -130, -110, -90]),
            None => SignalLevel::NoneOrUnknown,
        };
        dbm_level.min(ecio_level)
    }

    /// EVDO level: the worse of the dBm and SNR classifications.
    pub fn evdo_level(&self) -> SignalLevel {
        let dbm_level = match self.evdo_dbm {
            Some(dbm) => level_from_breakpoints(dbm, &[-105, -90, -75, -65]),
            None => SignalLevel::NoneOrUnknown,
        };
        let snr_level = match self.evdo_snr {
            Some(snr) => level_from_breakpoints(snr, &[1, 3, 5, 7]),
            None => SignalLevel::NoneOrUnknown,
        };
        dbm_level.min(snr_level)
    }

    /// Combined level: whichever of 1x/EVDO is reported; the worse of the
    /// two when both are.
    pub fn level(&self) -> SignalLevel {
        let cdma = self.cdma_level();
        let evdo = self.evdo_level();
        if evdo == SignalLevel::NoneOrUnknown {
            cdma
        } else if cdma == SignalLevel::NoneOrUnknown {
            evdo
        } else {
            cdma.min(evdo)
        }
    }

    /// Returns the banded CDMA ASU value, or [`ASU_UNKNOWN`].
    pub fn asu_level(&self) -> i32 {
        match self.cdma_dbm {
            Some(dbm) if dbm >= -75 => 16,
            Some(dbm) if dbm >= -82 => 8,
            Some(dbm) if dbm >= -90 => 4,
            Some(dbm) if dbm >= -95 => 2,
            Some(dbm) if dbm >= -100 => 1,
            _ => ASU_UNKNOWN,
        }
    }

    /// Returns the primary power measurement in dBm (1x when reported,
    /// otherwise EVDO).
    pub fn dbm(&self) -> Option<i32> {
        self.cdma_dbm.or(self.evdo_dbm)
    }
}

/// LTE signal strength.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellSignalStrengthLte {
    /// RSSI in dBm (range -113..-51)
    pub rssi: Option<i32>,
    /// Reference Signal Received Power in dBm (range -140..-43)
    pub rsrp: Option<i32>,
    /// Reference Signal Received Quality in dB (range -34..3)
    pub rsrq: Option<i32>,
    /// Reference Signal SNR in dB (range -20..30)
    pub rssnr: Option<i32>,
    /// Channel Quality Indicator (range 0-15)
    pub cqi: Option<i32>,
    /// Timing advance in microseconds (range 0-1282)
    pub timing_advance: Option<i32>,
}

impl CellSignalStrengthLte {
    /// Creates a new LTE signal strength, rejecting out-of-range fields.
    pub fn new(
        rssi: Option<i32>,
        rsrp: Option<i32>,
        rsrq: Option<i32>,
        rssnr: Option<i32>,
        cqi: Option<i32>,
        timing_advance: Option<i32>,
    ) -> Result<Self, Error> {
        check_range("rssi", rssi, -113, -51)?;
        check_range("rsrp", rsrp, -140, -43)?;
        check_range("rsrq", rsrq, -34, 3)?;
        check_range("rssnr", rssnr, -20, 30)?;
        check_range("cqi", cqi, 0, 15)?;
        check_range("timing_advance", timing_advance, 0, 1282)?;
        Ok(Self {
            rssi,
            rsrp,
            rsrq,
            rssnr,
            cqi,
            timing_advance,
        })
    }

    /// Classifies using the default RSRP breakpoints.
    pub fn level(&self) -> SignalLevel {
        self.level_with(&SignalThresholds::default())
    }

    /// Classifies RSRP against the configured breakpoints, falling back to
    /// RSSI when RSRP was not reported.
    pub fn level_with(&self, thresholds: &SignalThresholds) -> SignalLevel {
        match self.rsrp {
            Some(rsrp) => level_from_breakpoints(rsrp, &thresholds.lte_rsrp),
            None => match self.rssi {
                Some(rssi) => level_from_breakpoints(rssi, &RSSI_BREAKPOINTS),
                None => SignalLevel::NoneOrUnknown,
            },
        }
    }

    /// Returns the ASU (`RSRP + 140`, range 0-97), or [`ASU_UNKNOWN`].
    pub fn asu_level(&self) -> i32 {
        match self.rsrp {
            Some(rsrp) => (rsrp + 140).clamp(0, 97),
            None => ASU_UNKNOWN,
        }
    }

    /// Returns the primary power measurement (RSRP) in dBm.
    pub fn dbm(&self) -> Option<i32> {
        self.rsrp
    }
}

/// WCDMA (UMTS) signal strength.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellSignalStrengthWcdma {
    /// RSSI in dBm (range -113..-51)
    pub rssi: Option<i32>,
    /// Received Signal Code Power in dBm (range -120..-24)
    pub rscp: Option<i32>,
    /// Ec/No in dB (range -24..1)
    pub ecno: Option<i32>,
}

impl CellSignalStrengthWcdma {
    /// Creates a new WCDMA signal strength, rejecting out-of-range fields.
    pub fn new(rssi: Option<i32>, rscp: Option<i32>, ecno: Option<i32>) -> Result<Self, Error> {
        check_range("rssi", rssi, -113, -51)?;
        check_range("rscp", rscp, -120, -24)?;
        check_range("ecno", ecno, -24, 1)?;
        Ok(Self { rssi, rscp, ecno })
    }

    /// Classifies using the default RSCP breakpoints.
    pub fn level(&self) -> SignalLevel {
        self.level_with(&SignalThresholds::default())
    }

    /// Classifies RSCP against the configured breakpoints.
    pub fn level_with(&self, thresholds: &SignalThresholds) -> SignalLevel {
        match self.rscp {
            Some(rscp) => level_from_breakpoints(rscp, &thresholds.wcdma_rscp),
            None => SignalLevel::NoneOrUnknown,
        }
    }

    /// Returns the ASU (`RSCP + 120`, range 0-96), or [`ASU_UNKNOWN_UMTS`].
    pub fn asu_level(&self) -> i32 {
        match self.rscp {
            Some(rscp) => (rscp + 120).clamp(0, 96),
            None => ASU_UNKNOWN_UMTS,
        }
    }

    /// Returns the primary power measurement (RSCP) in dBm.
    pub fn dbm(&self) -> Option<i32> {
        self.rscp
    }
}

/// TD-SCDMA signal strength.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellSignalStrengthTdscdma {
    /// RSSI in dBm (range -113..-51)
    pub rssi: Option<i32>,
    /// Bit error rate (range 0-7)
    pub bit_error_rate: Option<i32>,
    /// Received Signal Code Power in dBm (range -120..-24)
    pub rscp: Option<i32>,
}

impl CellSignalStrengthTdscdma {
    /// Creates a new TD-SCDMA signal strength, rejecting out-of-range fields.
    pub fn new(
        rssi: Option<i32>,
        bit_error_rate: Option<i32>,
        rscp: Option<i32>,
    ) -> Result<Self, Error> {
        check_range("rssi", rssi, -113, -51)?;
        check_range("bit_error_rate", bit_error_rate, 0, 7)?;
        check_range("rscp", rscp, -120, -24)?;
        Ok(Self {
            rssi,
            bit_error_rate,
            rscp,
        })
    }

    /// Classifies the RSCP onto the shared 0-4 scale.
    pub fn level(&self) -> SignalLevel {
        match self.rscp {
            Some(rscp) => level_from_breakpoints(rscp, &TDSCDMA_RSCP_BREAKPOINTS),
            None => SignalLevel::NoneOrUnknown,
        }
    }

    /// Returns the ASU (`RSCP + 120`, range 0-96), or [`ASU_UNKNOWN_UMTS`].
    pub fn asu_level(&self) -> i32 {
        match self.rscp {
            Some(rscp) => (rscp + 120).clamp(0, 96),
            None => ASU_UNKNOWN_UMTS,
        }
    }

    /// Returns the primary power measurement (RSCP) in dBm.
    pub fn dbm(&self) -> Option<i32> {
        self.rscp
    }
}

/// NR (5G) signal strength.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellSignalStrengthNr {
    /// SS reference signal received power in dBm (range -140..-44)
    pub ss_rsrp: Option<i32>,
    /// SS reference signal received quality in dB (range -43..20)
    pub ss_rsrq: Option<i32>,
    /// SS signal-to-noise-and-interference ratio in dB (range -23..40)
    pub ss_sinr: Option<i32>,
    /// CSI reference signal received power in dBm (range -140..-44)
    pub csi_rsrp: Option<i32>,
    /// CSI reference signal received quality in dB (range -20..-3)
    pub csi_rsrq: Option<i32>,
    /// CSI signal-to-noise-and-interference ratio in dB (range -23..23)
    pub csi_sinr: Option<i32>,
}

impl CellSignalStrengthNr {
    /// Creates a new NR signal strength, rejecting out-of-range fields.
    pub fn new(
        ss_rsrp: Option<i32>,
        ss_rsrq: Option<i32>,
        ss_sinr: Option<i32>,
        csi_rsrp: Option<i32>,
        csi_rsrq: Option<i32>,
        csi_sinr: Option<i32>,
    ) -> Result<Self, Error> {
        check_range("ss_rsrp", ss_rsrp, -140, -44)?;
        check_range("ss_rsrq", ss_rsrq, -43, 20)?;
        check_range("ss_sinr", ss_sinr, -23, 40)?;
        check_range("csi_rsrp", csi_rsrp, -140, -44)?;
        check_range("csi_rsrq", csi_rsrq, -20, -3)?;
        check_range("csi_sinr", csi_sinr, -23, 23)?;
        Ok(Self {
            ss_rsrp,
            ss_rsrq,
            ss_sinr,
            csi_rsrp,
            csi_rsrq,
            csi_sinr,
        })
    }

    /// Classifies using the default SS-RSRP breakpoints.
    pub fn level(&self) -> SignalLevel {
        self.level_with(&SignalThresholds::default())
    }

    /// Classifies SS-RSRP against the configured breakpoints.
    pub fn level_with(&self, thresholds: &SignalThresholds) -> SignalLevel {
        match self.ss_rsrp {
            Some(rsrp) => level_from_breakpoints(rsrp, &thresholds.nr_ss_rsrp),
            None => SignalLevel::NoneOrUnknown,
        }
    }

    /// Returns the ASU (`SS-RSRP + 140`, range 0-97), or [`ASU_UNKNOWN`].
    pub fn asu_level(&self) -> i32 {
        match self.ss_rsrp {
            Some(rsrp) => (rsrp + 140).clamp(0, 97),
            None => ASU_UNKNOWN,
        }
    }

    /// Returns the primary power measurement (SS-RSRP) in dBm.
    pub fn dbm(&self) -> Option<i32> {
        self.ss_rsrp
    }
}

/// Signal strength, tagged by radio access technology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellSignalStrength {
    /// GSM signal strength
    Gsm(CellSignalStrengthGsm),
    /// CDMA signal strength
    Cdma(CellSignalStrengthCdma),
    /// WCDMA signal strength
    Wcdma(CellSignalStrengthWcdma),
    /// TD-SCDMA signal strength
    Tdscdma(CellSignalStrengthTdscdma),
    /// LTE signal strength
    Lte(CellSignalStrengthLte),
    /// NR signal strength
    Nr(CellSignalStrengthNr),
}

impl CellSignalStrength {
    /// Returns the radio access technology tag.
    pub fn rat(&self) -> RadioAccessTechnology {
        match self {
            Self::Gsm(_) => RadioAccessTechnology::Gsm,
            Self::Cdma(_) => RadioAccessTechnology::Cdma,
            Self::Wcdma(_) => RadioAccessTechnology::Wcdma,
            Self::Tdscdma(_) => RadioAccessTechnology::Tdscdma,
            Self::Lte(_) => RadioAccessTechnology::Lte,
            Self::Nr(_) => RadioAccessTechnology::Nr,
        }
    }

    /// Classifies onto the shared 0-4 scale using default breakpoints.
    pub fn level(&self) -> SignalLevel {
        self.level_with(&SignalThresholds::default())
    }

    /// Classifies onto the shared 0-4 scale using the given breakpoints.
    ///
    /// Technologies without configurable tables ignore the argument.
    pub fn level_with(&self, thresholds: &SignalThresholds) -> SignalLevel {
        match self {
            Self::Gsm(s) => s.level(),
            Self::Cdma(s) => s.level(),
            Self::Wcdma(s) => s.level_with(thresholds),
            Self::Tdscdma(s) => s.level(),
            Self::Lte(s) => s.level_with(thresholds),
            Self::Nr(s) => s.level_with(thresholds),
        }
    }

    /// Returns the technology-specific ASU encoding.
    pub fn asu_level(&self) -> i32 {
        match self {
            Self::Gsm(s) => s.asu_level(),
            Self::Cdma(s) => s.asu_level(),
            Self::Wcdma(s) => s.asu_level(),
            Self::Tdscdma(s) => s.asu_level(),
            Self::Lte(s) => s.asu_level(),
            Self::Nr(s) => s.asu_level(),
        }
    }

    /// Returns the technology's primary power measurement in dBm.
    pub fn dbm(&self) -> Option<i32> {
        match self {
            Self::Gsm(s) => s.dbm(),
            Self::Cdma(s) => s.dbm(),
            Self::Wcdma(s) => s.dbm(),
            Self::Tdscdma(s) => s.dbm(),
            Self::Lte(s) => s.dbm(),
            Self::Nr(s) => s.dbm(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_level_from_u8() {
        assert_eq!(SignalLevel::from_u8(0), Some(SignalLevel::NoneOrUnknown));
        assert_eq!(SignalLevel::from_u8(4), Some(SignalLevel::Great));
        assert_eq!(SignalLevel::from_u8(5), None);
    }

    #[test]
    fn test_level_codomain_matches_constant() {
        assert_eq!(SignalLevel::Great as usize + 1, NUM_SIGNAL_STRENGTH_LEVELS);
    }

    #[test]
    fn test_gsm_levels() {
        let at = |rssi| {
            CellSignalStrengthGsm::new(Some(rssi), None, None)
                .unwrap()
                .level()
        };
        assert_eq!(at(-51), SignalLevel::Great);
        assert_eq!(at(-89), SignalLevel::Great);
        assert_eq!(at(-90), SignalLevel::Good);
        assert_eq!(at(-103), SignalLevel::Moderate);
        assert_eq!(at(-107), SignalLevel::Poor);
        assert_eq!(at(-109), SignalLevel::NoneOrUnknown);
        assert_eq!(at(-113), SignalLevel::NoneOrUnknown);
    }

    #[test]
    fn test_gsm_all_absent_is_unknown() {
        let s = CellSignalStrengthGsm::default();
        assert_eq!(s.level(), SignalLevel::NoneOrUnknown);
        assert_eq!(s.asu_level(), ASU_UNKNOWN);
        assert_eq!(s.dbm(), None);
    }

    #[test]
    fn test_gsm_asu() {
        let s = CellSignalStrengthGsm::new(Some(-89), None, None).unwrap();
        assert_eq!(s.asu_level(), 12);
        let s = CellSignalStrengthGsm::new(Some(-113), None, None).unwrap();
        assert_eq!(s.asu_level(), 0);
    }

    #[test]
    fn test_gsm_range_rejection() {
        assert!(CellSignalStrengthGsm::new(Some(-114), None, None).is_err());
        assert!(CellSignalStrengthGsm::new(Some(-50), None, None).is_err());
        assert!(CellSignalStrengthGsm::new(None, Some(8), None).is_err());
        assert!(CellSignalStrengthGsm::new(None, None, Some(220)).is_err());
    }

    #[test]
    fn test_cdma_level_is_worse_of_dbm_and_ecio() {
        // Strong dBm, weak Ec/Io: Ec/Io limits the level
        let s = CellSignalStrengthCdma::new(Some(-70), Some(-140), None, None, None).unwrap();
        assert_eq!(s.level(), SignalLevel::Poor);
        // Both strong
        let s = CellSignalStrengthCdma::new(Some(-70), Some(-80), None, None, None).unwrap();
        assert_eq!(s.level(), SignalLevel::Great);
    }

    #[test]
    fn test_cdma_level_falls_back_to_evdo() {
        let s = CellSignalStrengthCdma::new(None, None, Some(-60), None, Some(8)).unwrap();
        assert_eq!(s.level(), SignalLevel::Great);
        assert_eq!(s.dbm(), Some(-60));
    }

    #[test]
    fn test_cdma_all_absent_is_unknown() {
        let s = CellSignalStrengthCdma::default();
        assert_eq!(s.level(), SignalLevel::NoneOrUnknown);
        assert_eq!(s.asu_level(), ASU_UNKNOWN);
        assert_eq!(s.dbm(), None);
    }

    #[test]
    fn test_cdma_asu_bands() {
        let asu = |dbm| {
            CellSignalStrengthCdma::new(Some(dbm), None, None, None, None)
                .unwrap()
                .asu_level()
        };
        assert_eq!(asu(-70), 16);
        assert_eq!(asu(-80), 8);
        assert_eq!(asu(-88), 4);
        assert_eq!(asu(-93), 2);
        assert_eq!(asu(-99), 1);
        assert_eq!(asu(-110), ASU_UNKNOWN);
    }

    #[test]
    fn test_lte_levels_default_thresholds() {
        let at = |rsrp| {
            CellSignalStrengthLte::new(None, Some(rsrp), None, None, None, None)
                .unwrap()
                .level()
        };
        assert_eq!(at(-43), SignalLevel::Great);
        assert_eq!(at(-98), SignalLevel::Great);
        assert_eq!(at(-99), SignalLevel::Good);
        assert_eq!(at(-112), SignalLevel::Moderate);
        assert_eq!(at(-125), SignalLevel::Poor);
        assert_eq!(at(-130), SignalLevel::NoneOrUnknown);
    }

    #[test]
    fn test_lte_rssi_fallback() {
        let s = CellSignalStrengthLte::new(Some(-60), None, None, None, None, None).unwrap();
        assert_eq!(s.level(), SignalLevel::Great);
        assert_eq!(s.dbm(), None);
    }

    #[test]
    fn test_lte_custom_thresholds() {
        let thresholds = SignalThresholds {
            lte_rsrp: [-120, -110, -100, -90],
            ..SignalThresholds::default()
        };
        let s = CellSignalStrengthLte::new(None, Some(-95), None, None, None, None).unwrap();
        assert_eq!(s.level(), SignalLevel::Great);
        assert_eq!(s.level_with(&thresholds), SignalLevel::Good);
    }

    #[test]
    fn test_lte_asu() {
        let s = CellSignalStrengthLte::new(None, Some(-140), None, None, None, None).unwrap();
        assert_eq!(s.asu_level(), 0);
        let s = CellSignalStrengthLte::new(None, Some(-43), None, None, None, None).unwrap();
        assert_eq!(s.asu_level(), 97);
        assert_eq!(CellSignalStrengthLte::default().asu_level(), ASU_UNKNOWN);
    }

    #[test]
    fn test_wcdma_levels_and_asu() {
        let s = CellSignalStrengthWcdma::new(None, Some(-85), None).unwrap();
        assert_eq!(s.level(), SignalLevel::Great);
        assert_eq!(s.asu_level(), 35);

        let s = CellSignalStrengthWcdma::new(None, None, Some(-10)).unwrap();
        assert_eq!(s.level(), SignalLevel::NoneOrUnknown);
        assert_eq!(s.asu_level(), ASU_UNKNOWN_UMTS);
    }

    #[test]
    fn test_tdscdma_levels() {
        let at = |rscp| {
            CellSignalStrengthTdscdma::new(None, None, Some(rscp))
                .unwrap()
                .level()
        };
        assert_eq!(at(-49), SignalLevel::Great);
        assert_eq!(at(-73), SignalLevel::Good);
        assert_eq!(at(-97), SignalLevel::Moderate);
        assert_eq!(at(-110), SignalLevel::Poor);
        assert_eq!(at(-115), SignalLevel::NoneOrUnknown);
    }

    #[test]
    fn test_nr_levels_default_thresholds() {
        let at = |rsrp| {
            CellSignalStrengthNr::new(Some(rsrp), None, None, None, None, None)
                .unwrap()
                .level()
        };
        assert_eq!(at(-65), SignalLevel::Great);
        assert_eq!(at(-75), SignalLevel::Good);
        assert_eq!(at(-85), SignalLevel::Moderate);
        assert_eq!(at(-100), SignalLevel::Poor);
        assert_eq!(at(-120), SignalLevel::NoneOrUnknown);
    }

    #[test]
    fn test_nr_range_rejection() {
        assert!(CellSignalStrengthNr::new(Some(-141), None, None, None, None, None).is_err());
        assert!(CellSignalStrengthNr::new(None, Some(21), None, None, None, None).is_err());
        assert!(CellSignalStrengthNr::new(None, None, None, None, Some(-2), None).is_err());
    }

    #[test]
    fn test_union_dispatch() {
        let s = CellSignalStrength::Nr(
            CellSignalStrengthNr::new(Some(-70), Some(-11), Some(15), None, None, None).unwrap(),
        );
        assert_eq!(s.rat(), RadioAccessTechnology::Nr);
        assert_eq!(s.level(), SignalLevel::Good);
        assert_eq!(s.asu_level(), 70);
        assert_eq!(s.dbm(), Some(-70));
    }

    #[test]
    fn test_every_variant_all_absent_is_unknown() {
        let variants = [
            CellSignalStrength::Gsm(CellSignalStrengthGsm::default()),
            CellSignalStrength::Cdma(CellSignalStrengthCdma::default()),
            CellSignalStrength::Wcdma(CellSignalStrengthWcdma::default()),
            CellSignalStrength::Tdscdma(CellSignalStrengthTdscdma::default()),
            CellSignalStrength::Lte(CellSignalStrengthLte::default()),
            CellSignalStrength::Nr(CellSignalStrengthNr::default()),
        ];
        for s in variants {
            assert_eq!(s.level(), SignalLevel::NoneOrUnknown);
            assert_eq!(s.dbm(), None);
            assert!((s.level() as usize) < NUM_SIGNAL_STRENGTH_LEVELS);
        }
    }
}
