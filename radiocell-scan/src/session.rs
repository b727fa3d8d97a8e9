//! Scan handles, terminal outcomes, and the session state machine.
//!
//! A scan session ends in exactly one of two terminal callbacks -
//! complete or error - and in neither once a stop has been acknowledged.
//! [`ScanSession`] pins that rule down as a pure state machine: the
//! external orchestrator feeds it events and it decides which callback,
//! if any, to invoke. There is no scheduler, thread, or timer here.
//!
//! # Session lifecycle
//!
//! ```text
//! Active --Complete--------> Complete      (on_complete fires)
//! Active --Error(code)-----> Failed        (on_error fires)
//! Active --request_stop()--> Stopping
//! Stopping --StopAcknowledged--> Stopped   (no further callbacks, ever)
//! ```
//!
//! Events arriving after a terminal state or after a stop are dropped with
//! a debug log.

use std::fmt;

use serde::{Deserialize, Serialize};

use radiocell_info::CellInfo;

/// Terminal error codes for a scan session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScanError {
    /// The modem rejected or aborted the scan
    ModemError,
    /// The scan parameters were rejected
    InvalidScan,
    /// The modem is not available to scan
    ModemUnavailable,
    /// Scanning is not supported on this device
    Unsupported,
    /// The radio interface layer failed
    RadioInterfaceError,
    /// The scan id is not recognized
    InvalidScanId,
    /// The scan was interrupted by a higher-priority operation
    Interrupted,
}

impl ScanError {
    /// Returns the platform wire code for this error.
    pub const fn code(self) -> i32 {
        match self {
            Self::ModemError => 1,
            Self::InvalidScan => 2,
            Self::ModemUnavailable => 3,
            Self::Unsupported => 4,
            Self::RadioInterfaceError => 10000,
            Self::InvalidScanId => 10001,
            Self::Interrupted => 10002,
        }
    }

    /// Creates a ScanError from its platform wire code.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::ModemError),
            2 => Some(Self::InvalidScan),
            3 => Some(Self::ModemUnavailable),
            4 => Some(Self::Unsupported),
            10000 => Some(Self::RadioInterfaceError),
            10001 => Some(Self::InvalidScanId),
            10002 => Some(Self::Interrupted),
            _ => None,
        }
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::ModemError => "modem error",
            Self::InvalidScan => "invalid scan",
            Self::ModemUnavailable => "modem unavailable",
            Self::Unsupported => "unsupported",
            Self::RadioInterfaceError => "radio interface error",
            Self::InvalidScanId => "invalid scan id",
            Self::Interrupted => "interrupted",
        };
        write!(f, "{s}")
    }
}

/// Callbacks a scan session delivers to the application.
///
/// The sequencing guarantee: any number of `on_results` calls, then at
/// most one of `on_complete`/`on_error`; nothing after a stop is
/// acknowledged.
pub trait ScanCallback {
    /// Incremental or final scan results
    fn on_results(&mut self, results: &[CellInfo]);
    /// The scan finished successfully; terminal
    fn on_complete(&mut self);
    /// The scan failed; terminal
    fn on_error(&mut self, error: ScanError);
}

/// Events the external orchestrator feeds into a session.
#[derive(Debug, Clone)]
pub enum ScanEvent {
    /// A batch of results arrived
    Results(Vec<CellInfo>),
    /// The modem reports the scan finished
    Complete,
    /// The modem reports the scan failed
    Error(ScanError),
    /// The modem acknowledged a previously requested stop
    StopAcknowledged,
}

/// State of a scan session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanSessionState {
    /// Scan is running; results and a terminal event are expected
    Active,
    /// Stop requested, waiting for the modem to acknowledge
    Stopping,
    /// Terminal: the scan completed and `on_complete` was delivered
    Complete,
    /// Terminal: the scan failed and `on_error` was delivered
    Failed(ScanError),
    /// Terminal: the stop was acknowledged; no callback was or will be
    /// delivered
    Stopped,
}

impl ScanSessionState {
    /// Returns true once the session can never deliver another callback.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Active | Self::Stopping)
    }
}

/// Per-scan state machine enforcing the callback sequencing rules.
#[derive(Debug)]
pub struct ScanSession {
    scan_id: i32,
    state: ScanSessionState,
}

impl ScanSession {
    /// Creates a new active session for the given scan id.
    pub fn new(scan_id: i32) -> Self {
        Self {
            scan_id,
            state: ScanSessionState::Active,
        }
    }

    /// Returns the scan id this session tracks.
    pub fn scan_id(&self) -> i32 {
        self.scan_id
    }

    /// Returns the current session state.
    pub fn state(&self) -> ScanSessionState {
        self.state
    }

    /// Records a stop request from the application.
    ///
    /// Returns false when the session is already stopping or terminal, in
    /// which case the request is ignored.
    pub fn request_stop(&mut self) -> bool {
        match self.state {
            ScanSessionState::Active => {
                tracing::debug!("Scan {}: stop requested", self.scan_id);
                self.state = ScanSessionState::Stopping;
                true
            }
            _ => {
                tracing::debug!(
                    "Scan {}: stop request ignored in state {:?}",
                    self.scan_id,
                    self.state
                );
                false
            }
        }
    }

    /// Applies one event, invoking the callback when the rules allow it.
    ///
    /// Returns true if a callback was delivered.
    pub fn handle_event(&mut self, event: ScanEvent, callback: &mut dyn ScanCallback) -> bool {
        match (self.state, event) {
            (ScanSessionState::Active, ScanEvent::Results(results)) => {
                callback.on_results(&results);
                true
            }
            (ScanSessionState::Active, ScanEvent::Complete) => {
                tracing::debug!("Scan {}: complete", self.scan_id);
                self.state = ScanSessionState::Complete;
                callback.on_complete();
                true
            }
            (ScanSessionState::Active, ScanEvent::Error(error)) => {
                tracing::warn!("Scan {}: failed: {}", self.scan_id, error);
                self.state = ScanSessionState::Failed(error);
                callback.on_error(error);
                true
            }
            (ScanSessionState::Active, ScanEvent::StopAcknowledged) => {
                // Modem-initiated stop without a request; treat as stopped
                tracing::debug!("Scan {}: unsolicited stop acknowledgment", self.scan_id);
                self.state = ScanSessionState::Stopped;
                false
            }
            (ScanSessionState::Stopping, ScanEvent::StopAcknowledged) => {
                tracing::debug!("Scan {}: stop acknowledged", self.scan_id);
                self.state = ScanSessionState::Stopped;
                false
            }
            (state, event) => {
                tracing::debug!(
                    "Scan {}: dropping event {:?} in state {:?}",
                    self.scan_id,
                    event,
                    state
                );
                false
            }
        }
    }
}

/// Opaque handle to a running scan, held by the application.
///
/// The only operation an application may perform on a running scan is to
/// stop it; the orchestrator translates the stop into a modem request and
/// later feeds [`ScanEvent::StopAcknowledged`] into the session.
#[derive(Debug)]
pub struct NetworkScan {
    scan_id: i32,
    sub_id: i32,
    stop_requested: bool,
}

impl NetworkScan {
    /// Creates a handle for the given scan and subscription ids.
    pub fn new(scan_id: i32, sub_id: i32) -> Self {
        Self {
            scan_id,
            sub_id,
            stop_requested: false,
        }
    }

    /// Returns the scan id.
    pub fn scan_id(&self) -> i32 {
        self.scan_id
    }

    /// Returns the subscription the scan runs on.
    pub fn sub_id(&self) -> i32 {
        self.sub_id
    }

    /// Requests the scan to stop.
    ///
    /// Idempotence is an error by contract: a second stop on the same
    /// handle reports [`ScanError::InvalidScanId`].
    pub fn stop(&mut self) -> Result<(), ScanError> {
        if self.stop_requested {
            return Err(ScanError::InvalidScanId);
        }
        self.stop_requested = true;
        Ok(())
    }
}
