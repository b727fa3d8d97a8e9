//! Network scan requests: how a scan should run.

use serde::{Deserialize, Serialize};

use radiocell_common::{Error, Plmn};

use crate::specifier::RadioAccessSpecifier;

/// Whether a scan runs once or repeats until stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum ScanType {
    /// Perform a single sweep and finish
    #[default]
    OneShot = 0,
    /// Repeat the sweep every search periodicity until stopped
    Periodic = 1,
}

impl ScanType {
    /// Creates a ScanType from a u8 value
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::OneShot),
            1 => Some(Self::Periodic),
            _ => None,
        }
    }
}

/// Parameters for one network scan.
///
/// The orchestrator owns execution; this record only carries the validated
/// parameters. All periodicities are in seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkScanRequest {
    /// One-shot or periodic
    pub scan_type: ScanType,
    /// Access networks/bands/channels to sweep (1 to 8 entries)
    pub specifiers: Vec<RadioAccessSpecifier>,
    /// Seconds between periodic sweeps (range 5-300)
    pub search_periodicity_sec: u32,
    /// Maximum seconds a sweep may take (range 60-3600)
    pub max_search_time_sec: u32,
    /// Whether partial results are reported while the sweep runs
    pub incremental_results: bool,
    /// Seconds between incremental result reports (range 1-10)
    pub incremental_results_periodicity_sec: u32,
    /// Restrict results to these PLMNs; empty means no filter (up to 20)
    pub plmns: Vec<Plmn>,
}

impl NetworkScanRequest {
    /// Maximum number of radio access specifiers per request
    pub const MAX_SPECIFIERS: usize = 8;
    /// Minimum search periodicity (seconds)
    pub const MIN_SEARCH_PERIODICITY_SEC: u32 = 5;
    /// Maximum search periodicity (seconds)
    pub const MAX_SEARCH_PERIODICITY_SEC: u32 = 300;
    /// Minimum sweep time bound (seconds)
    pub const MIN_SEARCH_TIME_SEC: u32 = 60;
    /// Maximum sweep time bound (seconds)
    pub const MAX_SEARCH_TIME_SEC: u32 = 3600;
    /// Minimum incremental results periodicity (seconds)
    pub const MIN_INCREMENTAL_PERIODICITY_SEC: u32 = 1;
    /// Maximum incremental results periodicity (seconds)
    pub const MAX_INCREMENTAL_PERIODICITY_SEC: u32 = 10;
    /// Maximum number of PLMN filter entries
    pub const MAX_PLMNS: usize = 20;

    /// Creates a validated scan request.
    pub fn new(
        scan_type: ScanType,
        specifiers: Vec<RadioAccessSpecifier>,
        search_periodicity_sec: u32,
        max_search_time_sec: u32,
        incremental_results: bool,
        incremental_results_periodicity_sec: u32,
        plmns: Vec<Plmn>,
    ) -> Result<Self, Error> {
        if specifiers.is_empty() || specifiers.len() > Self::MAX_SPECIFIERS {
            return Err(Error::InvalidScanRequest(format!(
                "specifier count must be 1-{}, got {}",
                Self::MAX_SPECIFIERS,
                specifiers.len()
            )));
        }
        if !(Self::MIN_SEARCH_PERIODICITY_SEC..=Self::MAX_SEARCH_PERIODICITY_SEC)
            .contains(&search_periodicity_sec)
        {
            return Err(Error::InvalidScanRequest(format!(
                "search periodicity must be {}-{} s, got {}",
                Self::MIN_SEARCH_PERIODICITY_SEC,
                Self::MAX_SEARCH_PERIODICITY_SEC,
                search_periodicity_sec
            )));
        }
        if !(Self::MIN_SEARCH_TIME_SEC..=Self::MAX_SEARCH_TIME_SEC).contains(&max_search_time_sec)
        {
            return Err(Error::InvalidScanRequest(format!(
                "max search time must be {}-{} s, got {}",
                Self::MIN_SEARCH_TIME_SEC,
                Self::MAX_SEARCH_TIME_SEC,
                max_search_time_sec
            )));
        }
        if !(Self::MIN_INCREMENTAL_PERIODICITY_SEC..=Self::MAX_INCREMENTAL_PERIODICITY_SEC)
            .contains(&incremental_results_periodicity_sec)
        {
            return Err(Error::InvalidScanRequest(format!(
                "incremental periodicity must be {}-{} s, got {}",
                Self::MIN_INCREMENTAL_PERIODICITY_SEC,
                Self::MAX_INCREMENTAL_PERIODICITY_SEC,
                incremental_results_periodicity_sec
            )));
        }
        if plmns.len() > Self::MAX_PLMNS {
            return Err(Error::InvalidScanRequest(format!(
                "PLMN filter list too long: {}",
                plmns.len()
            )));
        }
        Ok(Self {
            scan_type,
            specifiers,
            search_periodicity_sec,
            max_search_time_sec,
            incremental_results,
            incremental_results_periodicity_sec,
            plmns,
        })
    }
}
