//! Binary encoding/decoding for cell records.
//!
//! Fields are written in declared order into a byte buffer, big-endian,
//! behind a compatibility marker and format version. Absent values are
//! written as the reserved sentinels ([`radiocell_common::sentinel`]) so
//! the wire stays compatible with flat-integer consumers, and are mapped
//! back to `None` on decode. Decoding validates marker, version, tags,
//! lengths, and field ranges; round-tripping any record yields a
//! structurally equal value.

use bytes::{Buf, BufMut, Bytes, BytesMut};
use thiserror::Error;

use radiocell_common::{sentinel, Plmn};

use crate::capability::{NrCapability, PhoneCapability};
use crate::identity::{
    CellIdentity, CellIdentityCdma, CellIdentityGsm, CellIdentityLte, CellIdentityNr,
    CellIdentityTdscdma, CellIdentityWcdma,
};
use crate::info::{CellConnectionStatus, CellInfo};
use crate::rat::RadioAccessTechnology;
use crate::signal::{
    CellSignalStrength, CellSignalStrengthCdma, CellSignalStrengthGsm, CellSignalStrengthLte,
    CellSignalStrengthNr, CellSignalStrengthTdscdma, CellSignalStrengthWcdma,
};

/// Cell record format version information
pub mod version {
    /// Major version number
    pub const MAJOR: u8 = 1;
    /// Minor version number
    pub const MINOR: u8 = 0;
    /// Patch version number
    pub const PATCH: u8 = 0;
}

/// Compatibility marker leading every encoded record
const COMPAT_MARKER: u8 = 0x43;

/// Record type tags
const TAG_IDENTITY: u8 = 0x01;
const TAG_SIGNAL: u8 = 0x02;
const TAG_CELL_INFO: u8 = 0x03;
const TAG_CAPABILITY: u8 = 0x04;

/// Length value marking an absent string
const STRING_ABSENT: u16 = 0xFFFF;

/// Maximum number of elements allowed in an encoded list
const MAX_LIST_LEN: usize = 1024;

/// Errors that can occur during cell record encoding/decoding
#[derive(Debug, Error)]
pub enum CodecError {
    /// Invalid compatibility marker
    #[error("invalid record marker: expected 0x{COMPAT_MARKER:02X}, got 0x{0:02X}")]
    InvalidMarker(u8),

    /// Version mismatch
    #[error("record format version mismatch: expected {}.{}.{}, got {}.{}.{}",
            version::MAJOR, version::MINOR, version::PATCH, .0, .1, .2)]
    VersionMismatch(u8, u8, u8),

    /// The buffer holds a different record type than requested
    #[error("wrong record type: expected tag 0x{expected:02X}, got 0x{actual:02X}")]
    WrongRecordType {
        /// Expected record tag
        expected: u8,
        /// Tag found in the buffer
        actual: u8,
    },

    /// Unknown radio access technology tag
    #[error("unknown radio access technology tag: {0}")]
    UnknownRat(u8),

    /// Unknown connection status wire value
    #[error("unknown connection status value: {0}")]
    UnknownConnectionStatus(i32),

    /// Unknown NR capability value
    #[error("unknown NR capability value: {0}")]
    UnknownNrCapability(u8),

    /// Buffer too short
    #[error("buffer too short: need {needed} bytes, have {available}")]
    BufferTooShort {
        /// Number of bytes needed
        needed: usize,
        /// Number of bytes available
        available: usize,
    },

    /// String too long to encode
    #[error("string length {0} exceeds the encodable maximum")]
    StringTooLong(usize),

    /// List too long to encode
    #[error("list length {0} exceeds maximum allowed {MAX_LIST_LEN}")]
    ListTooLong(usize),

    /// Decoded string is not valid UTF-8
    #[error("encoded string is not valid UTF-8")]
    InvalidUtf8,

    /// A decoded field failed range validation
    #[error("decoded field rejected: {0}")]
    InvalidField(#[from] radiocell_common::Error),
}

/// Result type for cell record codec operations
pub type Result<T> = std::result::Result<T, CodecError>;

// --- Primitive helpers ---

fn need(buf: &[u8], needed: usize) -> Result<()> {
    if buf.len() < needed {
        Err(CodecError::BufferTooShort {
            needed,
            available: buf.len(),
        })
    } else {
        Ok(())
    }
}

fn put_opt_i32(buf: &mut BytesMut, value: Option<i32>) {
    buf.put_i32(sentinel::to_wire(value));
}

fn get_opt_i32(buf: &mut &[u8]) -> Result<Option<i32>> {
    need(buf, 4)?;
    Ok(sentinel::from_wire(buf.get_i32()))
}

fn put_opt_i64(buf: &mut BytesMut, value: Option<i64>) {
    buf.put_i64(sentinel::to_wire_long(value));
}

fn get_opt_i64(buf: &mut &[u8]) -> Result<Option<i64>> {
    need(buf, 8)?;
    Ok(sentinel::from_wire_long(buf.get_i64()))
}

fn put_opt_str(buf: &mut BytesMut, value: Option<&str>) -> Result<()> {
    match value {
        Some(s) => {
            if s.len() >= STRING_ABSENT as usize {
                return Err(CodecError::StringTooLong(s.len()));
            }
            buf.put_u16(s.len() as u16);
            buf.extend_from_slice(s.as_bytes());
        }
        None => buf.put_u16(STRING_ABSENT),
    }
    Ok(())
}

fn get_opt_str(buf: &mut &[u8]) -> Result<Option<String>> {
    need(buf, 2)?;
    let len = buf.get_u16();
    if len == STRING_ABSENT {
        return Ok(None);
    }
    let len = len as usize;
    need(buf, len)?;
    let s = std::str::from_utf8(&buf[..len]).map_err(|_| CodecError::InvalidUtf8)?;
    let s = s.to_owned();
    buf.advance(len);
    Ok(Some(s))
}

fn put_opt_plmn(buf: &mut BytesMut, value: Option<Plmn>) {
    match value {
        Some(plmn) => {
            buf.put_u8(1);
            buf.extend_from_slice(&plmn.encode());
        }
        None => buf.put_u8(0),
    }
}

fn get_opt_plmn(buf: &mut &[u8]) -> Result<Option<Plmn>> {
    need(buf, 1)?;
    if buf.get_u8() == 0 {
        return Ok(None);
    }
    need(buf, 3)?;
    let plmn = Plmn::decode([buf[0], buf[1], buf[2]]);
    buf.advance(3);
    Ok(Some(plmn))
}

fn put_i32_list(buf: &mut BytesMut, values: &[i32]) -> Result<()> {
    if values.len() > MAX_LIST_LEN {
        return Err(CodecError::ListTooLong(values.len()));
    }
    buf.put_u16(values.len() as u16);
    for v in values {
        buf.put_i32(*v);
    }
    Ok(())
}

fn get_i32_list(buf: &mut &[u8]) -> Result<Vec<i32>> {
    need(buf, 2)?;
    let count = buf.get_u16() as usize;
    if count > MAX_LIST_LEN {
        return Err(CodecError::ListTooLong(count));
    }
    need(buf, count * 4)?;
    let mut values = Vec::with_capacity(count);
    for _ in 0..count {
        values.push(buf.get_i32());
    }
    Ok(values)
}

fn put_header(buf: &mut BytesMut, tag: u8) {
    buf.put_u8(COMPAT_MARKER);
    buf.put_u8(version::MAJOR);
    buf.put_u8(version::MINOR);
    buf.put_u8(version::PATCH);
    buf.put_u8(tag);
}

fn check_header(buf: &mut &[u8], expected_tag: u8) -> Result<()> {
    need(buf, 5)?;
    let marker = buf.get_u8();
    if marker != COMPAT_MARKER {
        return Err(CodecError::InvalidMarker(marker));
    }
    let major = buf.get_u8();
    let minor = buf.get_u8();
    let patch = buf.get_u8();
    if major != version::MAJOR || minor != version::MINOR || patch != version::PATCH {
        return Err(CodecError::VersionMismatch(major, minor, patch));
    }
    let tag = buf.get_u8();
    if tag != expected_tag {
        return Err(CodecError::WrongRecordType {
            expected: expected_tag,
            actual: tag,
        });
    }
    Ok(())
}

// --- Identity payloads (technology tag written by the caller) ---

fn put_identity_payload(buf: &mut BytesMut, identity: &CellIdentity) -> Result<()> {
    match identity {
        CellIdentity::Gsm(c) => {
            put_opt_plmn(buf, c.plmn);
            put_opt_i32(buf, c.lac);
            put_opt_i32(buf, c.cid);
            put_opt_i32(buf, c.arfcn);
            put_opt_i32(buf, c.bsic);
            put_opt_str(buf, c.operator_long.as_deref())?;
            put_opt_str(buf, c.operator_short.as_deref())?;
        }
        CellIdentity::Cdma(c) => {
            put_opt_i32(buf, c.network_id);
            put_opt_i32(buf, c.system_id);
            put_opt_i32(buf, c.basestation_id);
            put_opt_i32(buf, c.longitude);
            put_opt_i32(buf, c.latitude);
            put_opt_str(buf, c.operator_long.as_deref())?;
            put_opt_str(buf, c.operator_short.as_deref())?;
        }
        CellIdentity::Wcdma(c) => {
            put_opt_plmn(buf, c.plmn);
            put_opt_i32(buf, c.lac);
            put_opt_i32(buf, c.cid);
            put_opt_i32(buf, c.psc);
            put_opt_i32(buf, c.uarfcn);
            put_opt_str(buf, c.operator_long.as_deref())?;
            put_opt_str(buf, c.operator_short.as_deref())?;
        }
        CellIdentity::Tdscdma(c) => {
            put_opt_plmn(buf, c.plmn);
            put_opt_i32(buf, c.lac);
            put_opt_i32(buf, c.cid);
            put_opt_i32(buf, c.cpid);
            put_opt_i32(buf, c.uarfcn);
            put_opt_str(buf, c.operator_long.as_deref())?;
            put_opt_str(buf, c.operator_short.as_deref())?;
        }
        CellIdentity::Lte(c) => {
            put_opt_plmn(buf, c.plmn);
            put_opt_i32(buf, c.ci);
            put_opt_i32(buf, c.pci);
            put_opt_i32(buf, c.tac);
            put_opt_i32(buf, c.earfcn);
            put_opt_i32(buf, c.bandwidth_khz);
            put_opt_str(buf, c.operator_long.as_deref())?;
            put_opt_str(buf, c.operator_short.as_deref())?;
        }
        CellIdentity::Nr(c) => {
            put_opt_plmn(buf, c.plmn);
            put_opt_i64(buf, c.nci);
            put_opt_i32(buf, c.pci);
            put_opt_i32(buf, c.tac);
            put_opt_i32(buf, c.nrarfcn);
            put_i32_list(buf, &c.bands)?;
            put_opt_str(buf, c.operator_long.as_deref())?;
            put_opt_str(buf, c.operator_short.as_deref())?;
        }
    }
    Ok(())
}

fn get_identity_payload(rat: RadioAccessTechnology, buf: &mut &[u8]) -> Result<CellIdentity> {
    Ok(match rat {
        RadioAccessTechnology::Gsm => {
            let plmn = get_opt_plmn(buf)?;
            let lac = get_opt_i32(buf)?;
            let cid = get_opt_i32(buf)?;
            let arfcn = get_opt_i32(buf)?;
            let bsic = get_opt_i32(buf)?;
            let mut c = CellIdentityGsm::new(plmn, lac, cid, arfcn, bsic)?;
            c.operator_long = get_opt_str(buf)?;
            c.operator_short = get_opt_str(buf)?;
            CellIdentity::Gsm(c)
        }
        RadioAccessTechnology::Cdma => {
            let network_id = get_opt_i32(buf)?;
            let system_id = get_opt_i32(buf)?;
            let basestation_id = get_opt_i32(buf)?;
            let longitude = get_opt_i32(buf)?;
            let latitude = get_opt_i32(buf)?;
            let mut c =
                CellIdentityCdma::new(network_id, system_id, basestation_id, longitude, latitude)?;
            c.operator_long = get_opt_str(buf)?;
            c.operator_short = get_opt_str(buf)?;
            CellIdentity::Cdma(c)
        }
        RadioAccessTechnology::Wcdma => {
            let plmn = get_opt_plmn(buf)?;
            let lac = get_opt_i32(buf)?;
            let cid = get_opt_i32(buf)?;
            let psc = get_opt_i32(buf)?;
            let uarfcn = get_opt_i32(buf)?;
            let mut c = CellIdentityWcdma::new(plmn, lac, cid, psc, uarfcn)?;
            c.operator_long = get_opt_str(buf)?;
            c.operator_short = get_opt_str(buf)?;
            CellIdentity::Wcdma(c)
        }
        RadioAccessTechnology::Tdscdma => {
            let plmn = get_opt_plmn(buf)?;
            let lac = get_opt_i32(buf)?;
            let cid = get_opt_i32(buf)?;
            let cpid = get_opt_i32(buf)?;
            let uarfcn = get_opt_i32(buf)?;
            let mut c = CellIdentityTdscdma::new(plmn, lac, cid, cpid, uarfcn)?;
            c.operator_long = get_opt_str(buf)?;
            c.operator_short = get_opt_str(buf)?;
            CellIdentity::Tdscdma(c)
        }
        RadioAccessTechnology::Lte => {
            let plmn = get_opt_plmn(buf)?;
            let ci = get_opt_i32(buf)?;
            let pci = get_opt_i32(buf)?;
            let tac = get_opt_i32(buf)?;
            let earfcn = get_opt_i32(buf)?;
            let bandwidth_khz = get_opt_i32(buf)?;
            let mut c = CellIdentityLte::new(plmn, ci, pci, tac, earfcn, bandwidth_khz)?;
            c.operator_long = get_opt_str(buf)?;
            c.operator_short = get_opt_str(buf)?;
            CellIdentity::Lte(c)
        }
        RadioAccessTechnology::Nr => {
            let plmn = get_opt_plmn(buf)?;
            let nci = get_opt_i64(buf)?;
            let pci = get_opt_i32(buf)?;
            let tac = get_opt_i32(buf)?;
            let nrarfcn = get_opt_i32(buf)?;
            let bands = get_i32_list(buf)?;
            let mut c = CellIdentityNr::new(plmn, nci, pci, tac, nrarfcn, bands)?;
            c.operator_long = get_opt_str(buf)?;
            c.operator_short = get_opt_str(buf)?;
            CellIdentity::Nr(c)
        }
    })
}

// --- Signal payloads ---

fn put_signal_payload(buf: &mut BytesMut, signal: &CellSignalStrength) {
    match signal {
        CellSignalStrength::Gsm(s) => {
            put_opt_i32(buf, s.rssi);
            put_opt_i32(buf, s.bit_error_rate);
            put_opt_i32(buf, s.timing_advance);
        }
        CellSignalStrength::Cdma(s) => {
            put_opt_i32(buf, s.cdma_dbm);
            put_opt_i32(buf, s.cdma_ecio);
            put_opt_i32(buf, s.evdo_dbm);
            put_opt_i32(buf, s.evdo_ecio);
            put_opt_i32(buf, s.evdo_snr);
        }
        CellSignalStrength::Wcdma(s) => {
            put_opt_i32(buf, s.rssi);
            put_opt_i32(buf, s.rscp);
            put_opt_i32(buf, s.ecno);
        }
        CellSignalStrength::Tdscdma(s) => {
            put_opt_i32(buf, s.rssi);
            put_opt_i32(buf, s.bit_error_rate);
            put_opt_i32(buf, s.rscp);
        }
        CellSignalStrength::Lte(s) => {
            put_opt_i32(buf, s.rssi);
            put_opt_i32(buf, s.rsrp);
            put_opt_i32(buf, s.rsrq);
            put_opt_i32(buf, s.rssnr);
            put_opt_i32(buf, s.cqi);
            put_opt_i32(buf, s.timing_advance);
        }
        CellSignalStrength::Nr(s) => {
            put_opt_i32(buf, s.ss_rsrp);
            put_opt_i32(buf, s.ss_rsrq);
            put_opt_i32(buf, s.ss_sinr);
            put_opt_i32(buf, s.csi_rsrp);
            put_opt_i32(buf, s.csi_rsrq);
            put_opt_i32(buf, s.csi_sinr);
        }
    }
}

fn get_signal_payload(rat: RadioAccessTechnology, buf: &mut &[u8]) -> Result<CellSignalStrength> {
    Ok(match rat {
        RadioAccessTechnology::Gsm => {
            let rssi = get_opt_i32(buf)?;
            let ber = get_opt_i32(buf)?;
            let ta = get_opt_i32(buf)?;
            CellSignalStrength::Gsm(CellSignalStrengthGsm::new(rssi, ber, ta)?)
        }
        RadioAccessTechnology::Cdma => {
            let cdma_dbm = get_opt_i32(buf)?;
            let cdma_ecio = get_opt_i32(buf)?;
            let evdo_dbm = get_opt_i32(buf)?;
            let evdo_ecio = get_opt_i32(buf)?;
            let evdo_snr = get_opt_i32(buf)?;
            CellSignalStrength::Cdma(CellSignalStrengthCdma::new(
                cdma_dbm, cdma_ecio, evdo_dbm, evdo_ecio, evdo_snr,
            )?)
        }
        RadioAccessTechnology::Wcdma => {
            let rssi = get_opt_i32(buf)?;
            let rscp = get_opt_i32(buf)?;
            let ecno = get_opt_i32(buf)?;
            CellSignalStrength::Wcdma(CellSignalStrengthWcdma::new(rssi, rscp, ecno)?)
        }
        RadioAccessTechnology::Tdscdma => {
            let rssi = get_opt_i32(buf)?;
            let ber = get_opt_i32(buf)?;
            let rscp = get_opt_i32(buf)?;
            CellSignalStrength::Tdscdma(CellSignalStrengthTdscdma::new(rssi, ber, rscp)?)
        }
        RadioAccessTechnology::Lte => {
            let rssi = get_opt_i32(buf)?;
            let rsrp = get_opt_i32(buf)?;
            let rsrq = get_opt_i32(buf)?;
            let rssnr = get_opt_i32(buf)?;
            let cqi = get_opt_i32(buf)?;
            let ta = get_opt_i32(buf)?;
            CellSignalStrength::Lte(CellSignalStrengthLte::new(rssi, rsrp, rsrq, rssnr, cqi, ta)?)
        }
        RadioAccessTechnology::Nr => {
            let ss_rsrp = get_opt_i32(buf)?;
            let ss_rsrq = get_opt_i32(buf)?;
            let ss_sinr = get_opt_i32(buf)?;
            let csi_rsrp = get_opt_i32(buf)?;
            let csi_rsrq = get_opt_i32(buf)?;
            let csi_sinr = get_opt_i32(buf)?;
            CellSignalStrength::Nr(CellSignalStrengthNr::new(
                ss_rsrp, ss_rsrq, ss_sinr, csi_rsrp, csi_rsrq, csi_sinr,
            )?)
        }
    })
}

fn get_rat(buf: &mut &[u8]) -> Result<RadioAccessTechnology> {
    need(buf, 1)?;
    let tag = buf.get_u8();
    RadioAccessTechnology::from_u8(tag).ok_or(CodecError::UnknownRat(tag))
}

// --- Public encode/decode entry points ---

/// Encodes a cell identity record.
pub fn encode_cell_identity(identity: &CellIdentity) -> Result<Bytes> {
    let mut buf = BytesMut::with_capacity(64);
    put_header(&mut buf, TAG_IDENTITY);
    buf.put_u8(identity.rat() as u8);
    put_identity_payload(&mut buf, identity)?;
    Ok(buf.freeze())
}

/// Decodes a cell identity record.
pub fn decode_cell_identity(data: &[u8]) -> Result<CellIdentity> {
    let mut buf = data;
    check_header(&mut buf, TAG_IDENTITY)?;
    let rat = get_rat(&mut buf)?;
    get_identity_payload(rat, &mut buf)
}

/// Encodes a signal-strength record.
pub fn encode_signal_strength(signal: &CellSignalStrength) -> Bytes {
    let mut buf = BytesMut::with_capacity(48);
    put_header(&mut buf, TAG_SIGNAL);
    buf.put_u8(signal.rat() as u8);
    put_signal_payload(&mut buf, signal);
    buf.freeze()
}

/// Decodes a signal-strength record.
pub fn decode_signal_strength(data: &[u8]) -> Result<CellSignalStrength> {
    let mut buf = data;
    check_header(&mut buf, TAG_SIGNAL)?;
    let rat = get_rat(&mut buf)?;
    get_signal_payload(rat, &mut buf)
}

/// Encodes a cell snapshot.
///
/// The technology tag is written once; identity and signal payloads follow
/// in declared order, so a decoded snapshot re-establishes the same-
/// technology pairing by construction.
pub fn encode_cell_info(info: &CellInfo) -> Result<Bytes> {
    let mut buf = BytesMut::with_capacity(128);
    put_header(&mut buf, TAG_CELL_INFO);
    buf.put_u8(if info.is_registered() { 1 } else { 0 });
    buf.put_u64(info.timestamp_nanos());
    buf.put_i32(info.connection_status().to_wire());
    buf.put_u8(info.rat() as u8);
    put_identity_payload(&mut buf, info.identity())?;
    put_signal_payload(&mut buf, info.signal());
    Ok(buf.freeze())
}

/// Decodes a cell snapshot.
pub fn decode_cell_info(data: &[u8]) -> Result<CellInfo> {
    let mut buf = data;
    check_header(&mut buf, TAG_CELL_INFO)?;

    need(buf, 13)?;
    let registered = buf.get_u8() != 0;
    let timestamp_nanos = buf.get_u64();
    let status_wire = buf.get_i32();
    let connection_status = CellConnectionStatus::from_wire(status_wire)
        .ok_or(CodecError::UnknownConnectionStatus(status_wire))?;

    let rat = get_rat(&mut buf)?;
    let identity = get_identity_payload(rat, &mut buf)?;
    let signal = get_signal_payload(rat, &mut buf)?;

    Ok(CellInfo::new(
        identity,
        signal,
        registered,
        timestamp_nanos,
        connection_status,
    )?)
}

/// Encodes a phone capability record.
pub fn encode_phone_capability(capability: &PhoneCapability) -> Result<Bytes> {
    if capability.nr_capabilities.len() > MAX_LIST_LEN {
        return Err(CodecError::ListTooLong(capability.nr_capabilities.len()));
    }
    let mut buf = BytesMut::with_capacity(16);
    put_header(&mut buf, TAG_CAPABILITY);
    buf.put_u8(capability.max_active_voice_subscriptions);
    buf.put_u8(capability.max_active_data_subscriptions);
    buf.put_u8(capability.modem_count);
    buf.put_u16(capability.nr_capabilities.len() as u16);
    for cap in &capability.nr_capabilities {
        buf.put_u8(*cap as u8);
    }
    Ok(buf.freeze())
}

/// Decodes a phone capability record.
pub fn decode_phone_capability(data: &[u8]) -> Result<PhoneCapability> {
    let mut buf = data;
    check_header(&mut buf, TAG_CAPABILITY)?;

    need(buf, 5)?;
    let voice = buf.get_u8();
    let data_subs = buf.get_u8();
    let modems = buf.get_u8();
    let count = buf.get_u16() as usize;
    if count > MAX_LIST_LEN {
        return Err(CodecError::ListTooLong(count));
    }
    need(buf, count)?;
    let mut nr_capabilities = Vec::with_capacity(count);
    for _ in 0..count {
        let raw = buf.get_u8();
        nr_capabilities
            .push(NrCapability::from_u8(raw).ok_or(CodecError::UnknownNrCapability(raw))?);
    }

    Ok(PhoneCapability::new(voice, data_subs, modems, nr_capabilities))
}
