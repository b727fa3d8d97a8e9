//! Visual voicemail SMS text format parser
//!
//! Visual voicemail servers notify clients through specially formatted
//! SMS messages:
//!
//! ```text
//! //VVM:SYNC:ev=NM;id=3446456;c=1;t=v;s=01234567898;dt=02/08/2008 12:53 +0200;l=30
//! //VVM:STATUS:st=N;rc=0;srv=1;dn=1;ipt=1;spt=0
//! ```
//!
//! A message is `<prefix>:<event>:<key>=<value>;...`. The prefix is
//! carrier-configurable (`//VVM` by default); the event type and the
//! key/value fields are passed through verbatim - their interpretation
//! belongs to the voicemail client, not this parser.

use thiserror::Error;

/// Default client prefix for visual voicemail SMS messages.
pub const DEFAULT_CLIENT_PREFIX: &str = "//VVM";

/// Errors that can occur while parsing a visual voicemail SMS.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VvmParseError {
    /// The text does not start with the expected client prefix
    #[error("missing client prefix {expected:?}")]
    MissingPrefix {
        /// The prefix that was expected
        expected: String,
    },

    /// No event type section after the prefix
    #[error("missing event type")]
    MissingEventType,

    /// A field is not of the form `key=value`
    #[error("malformed field: {0:?}")]
    MalformedField(String),
}

/// A parsed visual voicemail SMS message.
///
/// Fields keep their original order; duplicate keys are preserved and
/// [`VvmMessage::get`] returns the first occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VvmMessage {
    /// Event type, e.g. `SYNC` or `STATUS`
    pub event_type: String,
    /// Key/value fields in message order
    pub fields: Vec<(String, String)>,
}

impl VvmMessage {
    /// Returns the value of the first field with the given key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Parses a visual voicemail SMS using the default client prefix.
pub fn parse(text: &str) -> Result<VvmMessage, VvmParseError> {
    parse_with_prefix(DEFAULT_CLIENT_PREFIX, text)
}

/// Parses a visual voicemail SMS using a carrier-specific client prefix.
pub fn parse_with_prefix(prefix: &str, text: &str) -> Result<VvmMessage, VvmParseError> {
    let rest = text
        .strip_prefix(prefix)
        .and_then(|r| r.strip_prefix(':'))
        .ok_or_else(|| VvmParseError::MissingPrefix {
            expected: prefix.to_owned(),
        })?;

    let (event_type, body) = rest.split_once(':').ok_or(VvmParseError::MissingEventType)?;
    if event_type.is_empty() {
        return Err(VvmParseError::MissingEventType);
    }

    let mut fields = Vec::new();
    for segment in body.split(';') {
        // Trailing separators produce empty segments; skip them
        if segment.is_empty() {
            continue;
        }
        let (key, value) = segment
            .split_once('=')
            .ok_or_else(|| VvmParseError::MalformedField(segment.to_owned()))?;
        if key.is_empty() {
            return Err(VvmParseError::MalformedField(segment.to_owned()));
        }
        fields.push((key.to_owned(), value.to_owned()));
    }

    Ok(VvmMessage {
        event_type: event_type.to_owned(),
        fields,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sync_message() {
        let msg = parse(
            "//VVM:SYNC:ev=NM;id=3446456;c=1;t=v;s=01234567898;dt=02/08/2008 12:53 +0200;l=30",
        )
        .unwrap();
        assert_eq!(msg.event_type, "SYNC");
        assert_eq!(msg.get("ev"), Some("NM"));
        assert_eq!(msg.get("id"), Some("3446456"));
        assert_eq!(msg.get("dt"), Some("02/08/2008 12:53 +0200"));
        assert_eq!(msg.get("l"), Some("30"));
        assert_eq!(msg.fields.len(), 7);
    }

    #[test]
    fn test_parse_status_message() {
        let msg = parse("//VVM:STATUS:st=N;rc=0;srv=1;dn=1;ipt=1;spt=0").unwrap();
        assert_eq!(msg.event_type, "STATUS");
        assert_eq!(msg.get("st"), Some("N"));
        assert_eq!(msg.get("rc"), Some("0"));
        assert_eq!(msg.get("missing"), None);
    }

    #[test]
    fn test_parse_empty_value_allowed() {
        let msg = parse("//VVM:STATUS:u=;pw=1").unwrap();
        assert_eq!(msg.get("u"), Some(""));
        assert_eq!(msg.get("pw"), Some("1"));
    }

    #[test]
    fn test_parse_trailing_separator() {
        let msg = parse("//VVM:SYNC:ev=GU;c=2;").unwrap();
        assert_eq!(msg.fields.len(), 2);
    }

    #[test]
    fn test_missing_prefix_rejected() {
        assert!(matches!(
            parse("VVM:SYNC:ev=NM"),
            Err(VvmParseError::MissingPrefix { .. })
        ));
        assert!(matches!(
            parse("//VXM:SYNC:ev=NM"),
            Err(VvmParseError::MissingPrefix { .. })
        ));
    }

    #[test]
    fn test_missing_event_type_rejected() {
        assert_eq!(parse("//VVM:SYNConly"), Err(VvmParseError::MissingEventType));
        assert_eq!(parse("//VVM::ev=NM"), Err(VvmParseError::MissingEventType));
    }

    #[test]
    fn test_malformed_field_rejected() {
        assert_eq!(
            parse("//VVM:SYNC:ev=NM;bogus"),
            Err(VvmParseError::MalformedField("bogus".to_owned()))
        );
        assert_eq!(
            parse("//VVM:SYNC:=value"),
            Err(VvmParseError::MalformedField("=value".to_owned()))
        );
    }

    #[test]
    fn test_carrier_specific_prefix() {
        let msg = parse_with_prefix("//ANDROIDVVM", "//ANDROIDVVM:STATUS:st=R;rc=0").unwrap();
        assert_eq!(msg.event_type, "STATUS");
        assert_eq!(msg.get("st"), Some("R"));

        assert!(parse_with_prefix("//ANDROIDVVM", "//VVM:STATUS:st=R").is_err());
    }

    #[test]
    fn test_duplicate_keys_first_wins_in_get() {
        let msg = parse("//VVM:SYNC:ev=NM;ev=MBU").unwrap();
        assert_eq!(msg.get("ev"), Some("NM"));
        assert_eq!(msg.fields.len(), 2);
    }

    #[test]
    fn test_value_containing_equals() {
        let msg = parse("//VVM:STATUS:u=eg@example.com;pw=a=b").unwrap();
        assert_eq!(msg.get("u"), Some("eg@example.com"));
        assert_eq!(msg.get("pw"), Some("a=b"));
    }
}
