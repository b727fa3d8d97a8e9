//! Error types for radiocell

use thiserror::Error;

/// Error types for the radiocell library.
///
/// These cover constructor-time invariant violations only. An absent
/// ("not reported") measurement is never an error: it is represented as
/// `None` in memory and as the sentinel value on the wire.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed PLMN component (non-digit characters, wrong digit count).
    #[error("Invalid PLMN: {0}")]
    InvalidPlmn(String),

    /// A numeric identity or measurement field outside its documented range.
    #[error("Field `{field}` out of range: {value}")]
    FieldRange {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: i64,
    },

    /// A cell snapshot paired an identity and a signal-strength record of
    /// different radio access technologies.
    #[error("Cell technology mismatch: identity is {identity}, signal strength is {signal}")]
    RatMismatch {
        /// Technology of the identity record
        identity: &'static str,
        /// Technology of the signal-strength record
        signal: &'static str,
    },

    /// A radio access specifier with neither bands nor channels.
    #[error("Radio access specifier requires at least one band or channel")]
    EmptySpecifier,

    /// A scan request parameter outside its allowed bounds.
    #[error("Invalid scan request: {0}")]
    InvalidScanRequest(String),
}
