//! Cell identity records.
//!
//! A cell identity uniquely describes one radio cell for a given access
//! technology. Every numeric field is optional: `None` means the modem did
//! not report the value. Reported values are range-checked at construction
//! and never mutated afterwards.
//!
//! The legacy flat-integer view of an absent field is available through
//! [`radiocell_common::sentinel::to_wire`]; the codec uses it to keep the
//! wire format sentinel-compatible.

use serde::{Deserialize, Serialize};

use radiocell_common::{Error, Plmn};

use crate::rat::RadioAccessTechnology;

/// Range-checks an optional field value against `[0, max]`.
fn check_range(field: &'static str, value: Option<i32>, min: i32, max: i32) -> Result<(), Error> {
    match value {
        Some(v) if v < min || v > max => Err(Error::FieldRange {
            field,
            value: v as i64,
        }),
        _ => Ok(()),
    }
}

/// GSM cell identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellIdentityGsm {
    /// Network PLMN, if reported
    pub plmn: Option<Plmn>,
    /// Location Area Code (16-bit, range 0-65535)
    pub lac: Option<i32>,
    /// Cell Identity (16-bit, range 0-65535)
    pub cid: Option<i32>,
    /// Absolute RF Channel Number (range 0-65535)
    pub arfcn: Option<i32>,
    /// Base Station Identity Code (range 0-63)
    pub bsic: Option<i32>,
    /// Long operator name, if reported
    pub operator_long: Option<String>,
    /// Short operator name, if reported
    pub operator_short: Option<String>,
}

impl CellIdentityGsm {
    /// Maximum Location Area Code value
    pub const MAX_LAC: i32 = 65535;
    /// Maximum Cell Identity value
    pub const MAX_CID: i32 = 65535;
    /// Maximum ARFCN value
    pub const MAX_ARFCN: i32 = 65535;
    /// Maximum BSIC value
    pub const MAX_BSIC: i32 = 63;

    /// Creates a new GSM cell identity, rejecting out-of-range fields.
    pub fn new(
        plmn: Option<Plmn>,
        lac: Option<i32>,
        cid: Option<i32>,
        arfcn: Option<i32>,
        bsic: Option<i32>,
    ) -> Result<Self, Error> {
        check_range("lac", lac, 0, Self::MAX_LAC)?;
        check_range("cid", cid, 0, Self::MAX_CID)?;
        check_range("arfcn", arfcn, 0, Self::MAX_ARFCN)?;
        check_range("bsic", bsic, 0, Self::MAX_BSIC)?;
        Ok(Self {
            plmn,
            lac,
            cid,
            arfcn,
            bsic,
            operator_long: None,
            operator_short: None,
        })
    }

    /// Attaches operator name strings.
    pub fn with_operator_names(
        mut self,
        long: impl Into<String>,
        short: impl Into<String>,
    ) -> Self {
        self.operator_long = Some(long.into());
        self.operator_short = Some(short.into());
        self
    }

    /// Returns true if any identity field was reported.
    pub fn has_value(&self) -> bool {
        self.plmn.is_some()
            || self.lac.is_some()
            || self.cid.is_some()
            || self.arfcn.is_some()
            || self.bsic.is_some()
    }
}

/// CDMA cell identity.
///
/// CDMA networks carry no PLMN; the base station is located by
/// system/network/base-station ids plus an optional coarse position in
/// quarter-second units of latitude/longitude.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellIdentityCdma {
    /// Network Id (range 0-65535)
    pub network_id: Option<i32>,
    /// System Id (range 0-32767)
    pub system_id: Option<i32>,
    /// Base Station Id (range 0-65535)
    pub basestation_id: Option<i32>,
    /// Longitude in quarter-second units (range -2592000..2592000)
    pub longitude: Option<i32>,
    /// Latitude in quarter-second units (range -2592000..2592000)
    pub latitude: Option<i32>,
    /// Long operator name, if reported
    pub operator_long: Option<String>,
    /// Short operator name, if reported
    pub operator_short: Option<String>,
}

impl CellIdentityCdma {
    /// Maximum Network Id value
    pub const MAX_NETWORK_ID: i32 = 65535;
    /// Maximum System Id value
    pub const MAX_SYSTEM_ID: i32 = 32767;
    /// Maximum Base Station Id value
    pub const MAX_BASESTATION_ID: i32 = 65535;
    /// Position bound in quarter-second units (+/- 180 degrees)
    pub const MAX_POSITION: i32 = 2_592_000;

    /// Creates a new CDMA cell identity, rejecting out-of-range fields.
    pub fn new(
        network_id: Option<i32>,
        system_id: Option<i32>,
        basestation_id: Option<i32>,
        longitude: Option<i32>,
        latitude: Option<i32>,
    ) -> Result<Self, Error> {
        check_range("network_id", network_id, 0, Self::MAX_NETWORK_ID)?;
        check_range("system_id", system_id, 0, Self::MAX_SYSTEM_ID)?;
        check_range("basestation_id", basestation_id, 0, Self::MAX_BASESTATION_ID)?;
        check_range("longitude", longitude, -Self::MAX_POSITION, Self::MAX_POSITION)?;
        check_range("latitude", latitude, -Self::MAX_POSITION, Self::MAX_POSITION)?;
        Ok(Self {
            network_id,
            system_id,
            basestation_id,
            longitude,
            latitude,
            operator_long: None,
            operator_short: None,
        })
    }

    /// Attaches operator name strings.
    pub fn with_operator_names(
        mut self,
        long: impl Into<String>,
        short: impl Into<String>,
    ) -> Self {
        self.operator_long = Some(long.into());
        self.operator_short = Some(short.into());
        self
    }

    /// Returns true if any identity field was reported.
    pub fn has_value(&self) -> bool {
        self.network_id.is_some()
            || self.system_id.is_some()
            || self.basestation_id.is_some()
            || self.longitude.is_some()
            || self.latitude.is_some()
    }
}

/// LTE cell identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellIdentityLte {
    /// Network PLMN, if reported
    pub plmn: Option<Plmn>,
    /// Cell Identity (28-bit, range 0-268435455)
    pub ci: Option<i32>,
    /// Physical Cell Id (range 0-503)
    pub pci: Option<i32>,
    /// Tracking Area Code (16-bit, range 0-65535)
    pub tac: Option<i32>,
    /// E-UTRA Absolute RF Channel Number (range 0-262143)
    pub earfcn: Option<i32>,
    /// Cell bandwidth in kHz (range 1400-20000)
    pub bandwidth_khz: Option<i32>,
    /// Long operator name, if reported
    pub operator_long: Option<String>,
    /// Short operator name, if reported
    pub operator_short: Option<String>,
}

impl CellIdentityLte {
    /// Maximum Cell Identity value (28-bit)
    pub const MAX_CI: i32 = 268_435_455;
    /// Maximum Physical Cell Id value
    pub const MAX_PCI: i32 = 503;
    /// Maximum Tracking Area Code value
    pub const MAX_TAC: i32 = 65535;
    /// Maximum EARFCN value (18-bit)
    pub const MAX_EARFCN: i32 = 262_143;
    /// Minimum cell bandwidth (kHz)
    pub const MIN_BANDWIDTH_KHZ: i32 = 1400;
    /// Maximum cell bandwidth (kHz)
    pub const MAX_BANDWIDTH_KHZ: i32 = 20000;

    /// Creates a new LTE cell identity, rejecting out-of-range fields.
    pub fn new(
        plmn: Option<Plmn>,
        ci: Option<i32>,
        pci: Option<i32>,
        tac: Option<i32>,
        earfcn: Option<i32>,
        bandwidth_khz: Option<i32>,
    ) -> Result<Self, Error> {
        check_range("ci", ci, 0, Self::MAX_CI)?;
        check_range("pci", pci, 0, Self::MAX_PCI)?;
        check_range("tac", tac, 0, Self::MAX_TAC)?;
        check_range("earfcn", earfcn, 0, Self::MAX_EARFCN)?;
        check_range(
            "bandwidth_khz",
            bandwidth_khz,
            Self::MIN_BANDWIDTH_KHZ,
            Self::MAX_BANDWIDTH_KHZ,
        )?;
        Ok(Self {
            plmn,
            ci,
            pci,
            tac,
            earfcn,
            bandwidth_khz,
            operator_long: None,
            operator_short: None,
        })
    }

    /// Attaches operator name strings.
    pub fn with_operator_names(
        mut self,
        long: impl Into<String>,
        short: impl Into<String>,
    ) -> Self {
        self.operator_long = Some(long.into());
        self.operator_short = Some(short.into());
        self
    }

    /// Returns true if any identity field was reported.
    pub fn has_value(&self) -> bool {
        self.plmn.is_some()
            || self.ci.is_some()
            || self.pci.is_some()
            || self.tac.is_some()
            || self.earfcn.is_some()
            || self.bandwidth_khz.is_some()
    }
}

/// WCDMA (UMTS) cell identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellIdentityWcdma {
    /// Network PLMN, if reported
    pub plmn: Option<Plmn>,
    /// Location Area Code (16-bit, range 0-65535)
    pub lac: Option<i32>,
    /// UMTS Cell Identity (28-bit, range 0-268435455)
    pub cid: Option<i32>,
    /// Primary Scrambling Code (9-bit, range 0-511)
    pub psc: Option<i32>,
    /// UTRA Absolute RF Channel Number (range 0-16383)
    pub uarfcn: Option<i32>,
    /// Long operator name, if reported
    pub operator_long: Option<String>,
    /// Short operator name, if reported
    pub operator_short: Option<String>,
}

impl CellIdentityWcdma {
    /// Maximum Location Area Code value
    pub const MAX_LAC: i32 = 65535;
    /// Maximum Cell Identity value (28-bit)
    pub const MAX_CID: i32 = 268_435_455;
    /// Maximum Primary Scrambling Code value
    pub const MAX_PSC: i32 = 511;
    /// Maximum UARFCN value (14-bit)
    pub const MAX_UARFCN: i32 = 16383;

    /// Creates a new WCDMA cell identity, rejecting out-of-range fields.
    pub fn new(
        plmn: Option<Plmn>,
        lac: Option<i32>,
        cid: Option<i32>,
        psc: Option<i32>,
        uarfcn: Option<i32>,
    ) -> Result<Self, Error> {
        check_range("lac", lac, 0, Self::MAX_LAC)?;
        check_range("cid", cid, 0, Self::MAX_CID)?;
        check_range("psc", psc, 0, Self::MAX_PSC)?;
        check_range("uarfcn", uarfcn, 0, Self::MAX_UARFCN)?;
        Ok(Self {
            plmn,
            lac,
            cid,
            psc,
            uarfcn,
            operator_long: None,
            operator_short: None,
        })
    }

    /// Attaches operator name strings.
    pub fn with_operator_names(
        mut self,
        long: impl Into<String>,
        short: impl Into<String>,
    ) -> Self {
        self.operator_long = Some(long.into());
        self.operator_short = Some(short.into());
        self
    }

    /// Returns true if any identity field was reported.
    pub fn has_value(&self) -> bool {
        self.plmn.is_some()
            || self.lac.is_some()
            || self.cid.is_some()
            || self.psc.is_some()
            || self.uarfcn.is_some()
    }
}

/// TD-SCDMA cell identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellIdentityTdscdma {
    /// Network PLMN, if reported
    pub plmn: Option<Plmn>,
    /// Location Area Code (16-bit, range 0-65535)
    pub lac: Option<i32>,
    /// Cell Identity (28-bit, range 0-268435455)
    pub cid: Option<i32>,
    /// Cell Parameters Id (range 0-127)
    pub cpid: Option<i32>,
    /// UTRA Absolute RF Channel Number (range 0-65535)
    pub uarfcn: Option<i32>,
    /// Long operator name, if reported
    pub operator_long: Option<String>,
    /// Short operator name, if reported
    pub operator_short: Option<String>,
}

impl CellIdentityTdscdma {
    /// Maximum Location Area Code value
    pub const MAX_LAC: i32 = 65535;
    /// Maximum Cell Identity value (28-bit)
    pub const MAX_CID: i32 = 268_435_455;
    /// Maximum Cell Parameters Id value
    pub const MAX_CPID: i32 = 127;
    /// Maximum UARFCN value
    pub const MAX_UARFCN: i32 = 65535;

    /// Creates a new TD-SCDMA cell identity, rejecting out-of-range fields.
    pub fn new(
        plmn: Option<Plmn>,
        lac: Option<i32>,
        cid: Option<i32>,
        cpid: Option<i32>,
        uarfcn: Option<i32>,
    ) -> Result<Self, Error> {
        check_range("lac", lac, 0, Self::MAX_LAC)?;
        check_range("cid", cid, 0, Self::MAX_CID)?;
        check_range("cpid", cpid, 0, Self::MAX_CPID)?;
        check_range("uarfcn", uarfcn, 0, Self::MAX_UARFCN)?;
        Ok(Self {
            plmn,
            lac,
            cid,
            cpid,
            uarfcn,
            operator_long: None,
            operator_short: None,
        })
    }

    /// Attaches operator name strings.
    pub fn with_operator_names(
        mut self,
        long: impl Into<String>,
        short: impl Into<String>,
    ) -> Self {
        self.operator_long = Some(long.into());
        self.operator_short = Some(short.into());
        self
    }

    /// Returns true if any identity field was reported.
    pub fn has_value(&self) -> bool {
        self.plmn.is_some()
            || self.lac.is_some()
            || self.cid.is_some()
            || self.cpid.is_some()
            || self.uarfcn.is_some()
    }
}

/// NR (5G) cell identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellIdentityNr {
    /// Network PLMN, if reported
    pub plmn: Option<Plmn>,
    /// NR Cell Identity (36-bit, range 0-68719476735)
    pub nci: Option<i64>,
    /// Physical Cell Id (range 0-1007)
    pub pci: Option<i32>,
    /// Tracking Area Code (24-bit, range 0-16777215)
    pub tac: Option<i32>,
    /// NR Absolute RF Channel Number (range 0-3279165)
    pub nrarfcn: Option<i32>,
    /// Frequency bands of the cell, if reported
    pub bands: Vec<i32>,
    /// Long operator name, if reported
    pub operator_long: Option<String>,
    /// Short operator name, if reported
    pub operator_short: Option<String>,
}

impl CellIdentityNr {
    /// Maximum NR Cell Identity value (36-bit)
    pub const MAX_NCI: i64 = 68_719_476_735;
    /// Maximum Physical Cell Id value
    pub const MAX_PCI: i32 = 1007;
    /// Maximum Tracking Area Code value (24-bit)
    pub const MAX_TAC: i32 = 16_777_215;
    /// Maximum NR-ARFCN value
    pub const MAX_NRARFCN: i32 = 3_279_165;

    /// Creates a new NR cell identity, rejecting out-of-range fields.
    pub fn new(
        plmn: Option<Plmn>,
        nci: Option<i64>,
        pci: Option<i32>,
        tac: Option<i32>,
        nrarfcn: Option<i32>,
        bands: Vec<i32>,
    ) -> Result<Self, Error> {
        if let Some(v) = nci {
            if !(0..=Self::MAX_NCI).contains(&v) {
                return Err(Error::FieldRange {
                    field: "nci",
                    value: v,
                });
            }
        }
        check_range("pci", pci, 0, Self::MAX_PCI)?;
        check_range("tac", tac, 0, Self::MAX_TAC)?;
        check_range("nrarfcn", nrarfcn, 0, Self::MAX_NRARFCN)?;
        Ok(Self {
            plmn,
            nci,
            pci,
            tac,
            nrarfcn,
            bands,
            operator_long: None,
            operator_short: None,
        })
    }

    /// Attaches operator name strings.
    pub fn with_operator_names(
        mut self,
        long: impl Into<String>,
        short: impl Into<String>,
    ) -> Self {
        self.operator_long = Some(long.into());
        self.operator_short = Some(short.into());
        self
    }

    /// Returns true if any identity field was reported.
    pub fn has_value(&self) -> bool {
        self.plmn.is_some()
            || self.nci.is_some()
            || self.pci.is_some()
            || self.tac.is_some()
            || self.nrarfcn.is_some()
            || !self.bands.is_empty()
    }
}

/// Cell identity, tagged by radio access technology.
///
/// A closed union: every cell an application can ever observe belongs to
/// exactly one of these six technologies, so matching is exhaustive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellIdentity {
    /// GSM cell identity
    Gsm(CellIdentityGsm),
    /// CDMA cell identity
    Cdma(CellIdentityCdma),
    /// WCDMA cell identity
    Wcdma(CellIdentityWcdma),
    /// TD-SCDMA cell identity
    Tdscdma(CellIdentityTdscdma),
    /// LTE cell identity
    Lte(CellIdentityLte),
    /// NR cell identity
    Nr(CellIdentityNr),
}

impl CellIdentity {
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

    /// Returns the network PLMN, if the technology carries one and the
    /// modem reported it. CDMA cells never carry a PLMN.
    pub fn plmn(&self) -> Option<Plmn> {
        match self {
            Self::Gsm(c) => c.plmn,
            Self::Cdma(_) => None,
            Self::Wcdma(c) => c.plmn,
            Self::Tdscdma(c) => c.plmn,
            Self::Lte(c) => c.plmn,
            Self::Nr(c) => c.plmn,
        }
    }

    /// Returns the long operator name, if reported.
    pub fn operator_long(&self) -> Option<&str> {
        match self {
            Self::Gsm(c) => c.operator_long.as_deref(),
            Self::Cdma(c) => c.operator_long.as_deref(),
            Self::Wcdma(c) => c.operator_long.as_deref(),
            Self::Tdscdma(c) => c.operator_long.as_deref(),
            Self::Lte(c) => c.operator_long.as_deref(),
            Self::Nr(c) => c.operator_long.as_deref(),
        }
    }

    /// Returns the short operator name, if reported.
    pub fn operator_short(&self) -> Option<&str> {
        match self {
            Self::Gsm(c) => c.operator_short.as_deref(),
            Self::Cdma(c) => c.operator_short.as_deref(),
            Self::Wcdma(c) => c.operator_short.as_deref(),
            Self::Tdscdma(c) => c.operator_short.as_deref(),
            Self::Lte(c) => c.operator_short.as_deref(),
            Self::Nr(c) => c.operator_short.as_deref(),
        }
    }

    /// Returns true if any identity field was reported.
    pub fn has_value(&self) -> bool {
        match self {
            Self::Gsm(c) => c.has_value(),
            Self::Cdma(c) => c.has_value(),
            Self::Wcdma(c) => c.has_value(),
            Self::Tdscdma(c) => c.has_value(),
            Self::Lte(c) => c.has_value(),
            Self::Nr(c) => c.has_value(),
        }
    }
}
