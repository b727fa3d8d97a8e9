//! Binary encoding/decoding for scan value types.
//!
//! Same conventions as the cell record codec: big-endian fields in
//! declared order behind a compatibility marker and format version,
//! length-prefixed lists, validation on decode.

use bytes::{Buf, BufMut, Bytes, BytesMut};
use thiserror::Error;

use radiocell_common::Plmn;

use crate::available::{AvailableNetworkInfo, NetworkPriority};
use crate::request::{NetworkScanRequest, ScanType};
use crate::specifier::{AccessNetwork, RadioAccessSpecifier};

/// Scan record format version information
pub mod version {
    /// Major version number
    pub const MAJOR: u8 = 1;
    /// Minor version number
    pub const MINOR: u8 = 0;
    /// Patch version number
    pub const PATCH: u8 = 0;
}

/// Compatibility marker leading every encoded scan record
const COMPAT_MARKER: u8 = 0x53;

/// Record type tags
const TAG_SPECIFIER: u8 = 0x01;
const TAG_REQUEST: u8 = 0x02;
const TAG_AVAILABLE_NETWORK: u8 = 0x03;

/// Maximum number of elements allowed in an encoded list
const MAX_LIST_LEN: usize = 1024;

/// Errors that can occur during scan record encoding/decoding
#[derive(Debug, Error)]
pub enum ScanCodecError {
    /// Invalid compatibility marker
    #[error("invalid scan record marker: expected 0x{COMPAT_MARKER:02X}, got 0x{0:02X}")]
    InvalidMarker(u8),

    /// Version mismatch
    #[error("scan record format version mismatch: expected {}.{}.{}, got {}.{}.{}",
            version::MAJOR, version::MINOR, version::PATCH, .0, .1, .2)]
    VersionMismatch(u8, u8, u8),

    /// The buffer holds a different record type than requested
    #[error("wrong scan record type: expected tag 0x{expected:02X}, got 0x{actual:02X}")]
    WrongRecordType {
        /// Expected record tag
        expected: u8,
        /// Tag found in the buffer
        actual: u8,
    },

    /// Unknown access network tag
    #[error("unknown access network tag: {0}")]
    UnknownAccessNetwork(u8),

    /// Unknown scan type value
    #[error("unknown scan type value: {0}")]
    UnknownScanType(u8),

    /// Unknown network priority value
    #[error("unknown network priority value: {0}")]
    UnknownPriority(u8),

    /// Buffer too short
    #[error("buffer too short: need {needed} bytes, have {available}")]
    BufferTooShort {
        /// Number of bytes needed
        needed: usize,
        /// Number of bytes available
        available: usize,
    },

    /// List too long to encode
    #[error("list length {0} exceeds maximum allowed {MAX_LIST_LEN}")]
    ListTooLong(usize),

    /// A decoded record failed its constructor invariant
    #[error("decoded scan record rejected: {0}")]
    InvalidRecord(#[from] radiocell_common::Error),
}

/// Result type for scan codec operations
pub type Result<T> = std::result::Result<T, ScanCodecError>;

fn need(buf: &[u8], needed: usize) -> Result<()> {
    if buf.len() < needed {
        Err(ScanCodecError::BufferTooShort {
            needed,
            available: buf.len(),
        })
    } else {
        Ok(())
    }
}

fn put_i32_list(buf: &mut BytesMut, values: &[i32]) -> Result<()> {
    if values.len() > MAX_LIST_LEN {
        return Err(ScanCodecError::ListTooLong(values.len()));
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
        return Err(ScanCodecError::ListTooLong(count));
    }
    need(buf, count * 4)?;
    let mut values = Vec::with_capacity(count);
    for _ in 0..count {
        values.push(buf.get_i32());
    }
    Ok(values)
}

fn put_plmn_list(buf: &mut BytesMut, plmns: &[Plmn]) -> Result<()> {
    if plmns.len() > MAX_LIST_LEN {
        return Err(ScanCodecError::ListTooLong(plmns.len()));
    }
    buf.put_u16(plmns.len() as u16);
    for plmn in plmns {
        buf.extend_from_slice(&plmn.encode());
    }
    Ok(())
}

fn get_plmn_list(buf: &mut &[u8]) -> Result<Vec<Plmn>> {
    need(buf, 2)?;
    let count = buf.get_u16() as usize;
    if count > MAX_LIST_LEN {
        return Err(ScanCodecError::ListTooLong(count));
    }
    need(buf, count * 3)?;
    let mut plmns = Vec::with_capacity(count);
    for _ in 0..count {
        plmns.push(Plmn::decode([buf[0], buf[1], buf[2]]));
        buf.advance(3);
    }
    Ok(plmns)
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
        return Err(ScanCodecError::InvalidMarker(marker));
    }
    let major = buf.get_u8();
    let minor = buf.get_u8();
    let patch = buf.get_u8();
    if major != version::MAJOR || minor != version::MINOR || patch != version::PATCH {
        return Err(ScanCodecError::VersionMismatch(major, minor, patch));
    }
    let tag = buf.get_u8();
    if tag != expected_tag {
        return Err(ScanCodecError::WrongRecordType {
            expected: expected_tag,
            actual: tag,
        });
    }
    Ok(())
}

fn put_specifier_payload(buf: &mut BytesMut, spec: &RadioAccessSpecifier) -> Result<()> {
    buf.put_u8(spec.access_network as u8);
    put_i32_list(buf, &spec.bands)?;
    put_i32_list(buf, &spec.channels)
}

fn get_specifier_payload(buf: &mut &[u8]) -> Result<RadioAccessSpecifier> {
    need(buf, 1)?;
    let raw = buf.get_u8();
    let access_network =
        AccessNetwork::from_u8(raw).ok_or(ScanCodecError::UnknownAccessNetwork(raw))?;
    let bands = get_i32_list(buf)?;
    let channels = get_i32_list(buf)?;
    Ok(RadioAccessSpecifier::new(access_network, bands, channels)?)
}

/// Encodes a radio access specifier.
pub fn encode_specifier(spec: &RadioAccessSpecifier) -> Result<Bytes> {
    let mut buf = BytesMut::with_capacity(32);
    put_header(&mut buf, TAG_SPECIFIER);
    put_specifier_payload(&mut buf, spec)?;
    Ok(buf.freeze())
}

/// Decodes a radio access specifier.
///
/// The non-empty invariant is re-checked: a buffer describing a specifier
/// with neither bands nor channels is rejected.
pub fn decode_specifier(data: &[u8]) -> Result<RadioAccessSpecifier> {
    let mut buf = data;
    check_header(&mut buf, TAG_SPECIFIER)?;
    get_specifier_payload(&mut buf)
}

/// Encodes a network scan request.
pub fn encode_scan_request(request: &NetworkScanRequest) -> Result<Bytes> {
    if request.specifiers.len() > MAX_LIST_LEN {
        return Err(ScanCodecError::ListTooLong(request.specifiers.len()));
    }
    let mut buf = BytesMut::with_capacity(64);
    put_header(&mut buf, TAG_REQUEST);
    buf.put_u8(request.scan_type as u8);
    buf.put_u16(request.specifiers.len() as u16);
    for spec in &request.specifiers {
        put_specifier_payload(&mut buf, spec)?;
    }
    buf.put_u32(request.search_periodicity_sec);
    buf.put_u32(request.max_search_time_sec);
    buf.put_u8(if request.incremental_results { 1 } else { 0 });
    buf.put_u32(request.incremental_results_periodicity_sec);
    put_plmn_list(&mut buf, &request.plmns)?;
    Ok(buf.freeze())
}

/// Decodes a network scan request, re-validating every bound.
pub fn decode_scan_request(data: &[u8]) -> Result<NetworkScanRequest> {
    let mut buf = data;
    check_header(&mut buf, TAG_REQUEST)?;

    need(buf, 3)?;
    let raw_type = buf.get_u8();
    let scan_type = ScanType::from_u8(raw_type).ok_or(ScanCodecError::UnknownScanType(raw_type))?;
    let count = buf.get_u16() as usize;
    if count > MAX_LIST_LEN {
        return Err(ScanCodecError::ListTooLong(count));
    }
    let mut specifiers = Vec::with_capacity(count);
    for _ in 0..count {
        specifiers.push(get_specifier_payload(&mut buf)?);
    }

    need(buf, 13)?;
    let search_periodicity_sec = buf.get_u32();
    let max_search_time_sec = buf.get_u32();
    let incremental_results = buf.get_u8() != 0;
    let incremental_results_periodicity_sec = buf.get_u32();
    let plmns = get_plmn_list(&mut buf)?;

    Ok(NetworkScanRequest::new(
        scan_type,
        specifiers,
        search_periodicity_sec,
        max_search_time_sec,
        incremental_results,
        incremental_results_periodicity_sec,
        plmns,
    )?)
}

/// Encodes an available network record.
pub fn encode_available_network(info: &AvailableNetworkInfo) -> Result<Bytes> {
    let mut buf = BytesMut::with_capacity(32);
    put_header(&mut buf, TAG_AVAILABLE_NETWORK);
    buf.put_i32(info.sub_id);
    buf.put_u8(info.priority as u8);
    put_plmn_list(&mut buf, &info.plmns)?;
    put_i32_list(&mut buf, &info.bands)?;
    Ok(buf.freeze())
}

/// Decodes an available network record.
pub fn decode_available_network(data: &[u8]) -> Result<AvailableNetworkInfo> {
    let mut buf = data;
    check_header(&mut buf, TAG_AVAILABLE_NETWORK)?;

    need(buf, 5)?;
    let sub_id = buf.get_i32();
    let raw_priority = buf.get_u8();
    let priority = NetworkPriority::from_u8(raw_priority)
        .ok_or(ScanCodecError::UnknownPriority(raw_priority))?;
    let plmns = get_plmn_list(&mut buf)?;
    let bands = get_i32_list(&mut buf)?;

    Ok(AvailableNetworkInfo::new(sub_id, priority, plmns, bands))
}
