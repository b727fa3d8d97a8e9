//! Device phone capability record.

use serde::{Deserialize, Serialize};

/// NR deployment mode a device supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum NrCapability {
    /// Non-standalone NR (anchored to LTE)
    Nsa = 1,
    /// Standalone NR
    Sa = 2,
}

impl NrCapability {
    /// Creates an NrCapability from a u8 value
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::Nsa),
            2 => Some(Self::Sa),
            _ => None,
        }
    }
}

/// Static capability description of the device's telephony hardware.
///
/// Produced once by the platform layer; never changes at runtime.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneCapability {
    /// Maximum number of concurrently active voice subscriptions
    pub max_active_voice_subscriptions: u8,
    /// Maximum number of concurrently active data subscriptions
    pub max_active_data_subscriptions: u8,
    /// Number of modems in the device
    pub modem_count: u8,
    /// NR deployment modes the device supports
    pub nr_capabilities: Vec<NrCapability>,
}

impl PhoneCapability {
    /// Creates a new phone capability record.
    pub fn new(
        max_active_voice_subscriptions: u8,
        max_active_data_subscriptions: u8,
        modem_count: u8,
        nr_capabilities: Vec<NrCapability>,
    ) -> Self {
        Self {
            max_active_voice_subscriptions,
            max_active_data_subscriptions,
            modem_count,
            nr_capabilities,
        }
    }

    /// Returns true if the device supports any NR deployment.
    pub fn supports_nr(&self) -> bool {
        !self.nr_capabilities.is_empty()
    }
}
