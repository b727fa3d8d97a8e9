//! Multi-subscription network preference records and the selection rule.
//!
//! When several subscriptions can serve a device, each is described by an
//! [`AvailableNetworkInfo`] carrying its priority and the PLMNs it may
//! attach to. The selection rule is fixed by contract: the highest
//! priority wins, and among equal priorities the subscription with the
//! stronger measured signal is preferred. The scheduler that acts on the
//! choice is external; [`select_preferred`] implements the rule itself.

use std::fmt;

use serde::{Deserialize, Serialize};

use radiocell_common::Plmn;
use radiocell_info::SignalLevel;

/// Priority of one available network, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum NetworkPriority {
    /// Attach here whenever possible
    High = 1,
    /// Attach here when no high-priority network is available
    Medium = 2,
    /// Attach here as a last resort
    Low = 3,
}

impl NetworkPriority {
    /// Creates a NetworkPriority from a u8 value
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::High),
            2 => Some(Self::Medium),
            3 => Some(Self::Low),
            _ => None,
        }
    }

    /// Rank for comparisons: higher rank is preferred.
    fn rank(self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }
}

impl fmt::Display for NetworkPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        };
        write!(f, "{s}")
    }
}

/// One subscription's network availability record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableNetworkInfo {
    /// Subscription this record belongs to
    pub sub_id: i32,
    /// Selection priority
    pub priority: NetworkPriority,
    /// PLMNs the subscription may attach to, in preference order
    pub plmns: Vec<Plmn>,
    /// Frequency bands to restrict the attach to; empty means any
    pub bands: Vec<i32>,
}

impl AvailableNetworkInfo {
    /// Creates a new availability record.
    pub fn new(sub_id: i32, priority: NetworkPriority, plmns: Vec<Plmn>, bands: Vec<i32>) -> Self {
        Self {
            sub_id,
            priority,
            plmns,
            bands,
        }
    }
}

/// Picks the preferred record from `(record, measured level)` candidates.
///
/// Highest priority wins; equal priorities tie-break on the larger
/// measured signal level. Among fully equal candidates the earliest wins,
/// keeping the choice deterministic.
pub fn select_preferred(
    candidates: &[(AvailableNetworkInfo, SignalLevel)],
) -> Option<&(AvailableNetworkInfo, SignalLevel)> {
    let best = candidates.iter().reduce(|best, candidate| {
        let better = (candidate.0.priority.rank(), candidate.1)
            > (best.0.priority.rank(), best.1);
        if better {
            candidate
        } else {
            best
        }
    });

    if let Some((info, level)) = best {
        tracing::debug!(
            "Preferred network selected: sub_id={}, priority={}, level={}",
            info.sub_id,
            info.priority,
            level
        );
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(sub_id: i32, priority: NetworkPriority) -> AvailableNetworkInfo {
        AvailableNetworkInfo::new(sub_id, priority, vec![Plmn::new(310, 410, false)], vec![])
    }

    #[test]
    fn test_priority_from_u8() {
        assert_eq!(NetworkPriority::from_u8(1), Some(NetworkPriority::High));
        assert_eq!(NetworkPriority::from_u8(3), Some(NetworkPriority::Low));
        assert_eq!(NetworkPriority::from_u8(0), None);
        assert_eq!(NetworkPriority::from_u8(4), None);
    }

    #[test]
    fn test_high_priority_beats_low_regardless_of_signal() {
        let candidates = vec![
            (info(1, NetworkPriority::Low), SignalLevel::Great),
            (info(2, NetworkPriority::High), SignalLevel::Poor),
        ];
        let (selected, _) = select_preferred(&candidates).unwrap();
        assert_eq!(selected.sub_id, 2);
    }

    #[test]
    fn test_equal_priority_tie_breaks_on_signal() {
        let candidates = vec![
            (info(1, NetworkPriority::High), SignalLevel::Moderate),
            (info(2, NetworkPriority::High), SignalLevel::Great),
            (info(3, NetworkPriority::High), SignalLevel::Good),
        ];
        let (selected, _) = select_preferred(&candidates).unwrap();
        assert_eq!(selected.sub_id, 2);
    }

    #[test]
    fn test_fully_equal_candidates_pick_first() {
        let candidates = vec![
            (info(7, NetworkPriority::Medium), SignalLevel::Good),
            (info(8, NetworkPriority::Medium), SignalLevel::Good),
        ];
        let (selected, _) = select_preferred(&candidates).unwrap();
        assert_eq!(selected.sub_id, 7);
    }

    #[test]
    fn test_empty_candidates() {
        assert!(select_preferred(&[]).is_none());
    }
}
