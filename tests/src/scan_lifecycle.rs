//! End-to-end scan lifecycle tests: decoded snapshots flowing through a
//! scan session into a callback, and preference selection over the
//! collected results.

use radiocell_info::codec::{decode_cell_info, encode_cell_info};
use radiocell_info::{CellInfo, SignalLevel};
use radiocell_scan::{
    select_preferred, AvailableNetworkInfo, NetworkPriority, ScanCallback, ScanError, ScanEvent,
    ScanSession, ScanSessionState,
};

use crate::fixtures::{gsm_cell_info, lte_cell_info, nr_cell_info};

/// Collects everything the session delivers.
#[derive(Default)]
struct CollectingCallback {
    results: Vec<CellInfo>,
    completions: usize,
    errors: Vec<ScanError>,
}

impl ScanCallback for CollectingCallback {
    fn on_results(&mut self, results: &[CellInfo]) {
        self.results.extend_from_slice(results);
    }
    fn on_complete(&mut self) {
        self.completions += 1;
    }
    fn on_error(&mut self, error: ScanError) {
        self.errors.push(error);
    }
}

/// Simulates the orchestrator handing results to the application through
/// the wire codec, as the platform does across its process boundary.
fn through_wire(infos: &[CellInfo]) -> Vec<CellInfo> {
    infos
        .iter()
        .map(|info| decode_cell_info(&encode_cell_info(info).unwrap()).unwrap())
        .collect()
}

#[test]
fn scan_delivers_decoded_results_then_completes() {
    let mut session = ScanSession::new(1);
    let mut cb = CollectingCallback::default();

    let batch1 = through_wire(&[nr_cell_info(100), lte_cell_info(-95, 101)]);
    let batch2 = through_wire(&[gsm_cell_info(200)]);

    session.handle_event(ScanEvent::Results(batch1), &mut cb);
    session.handle_event(ScanEvent::Results(batch2), &mut cb);
    session.handle_event(ScanEvent::Complete, &mut cb);

    assert_eq!(cb.results.len(), 3);
    assert_eq!(cb.completions, 1);
    assert!(cb.errors.is_empty());
    assert_eq!(session.state(), ScanSessionState::Complete);

    // Round-tripped snapshots kept their identity/signal pairing
    for info in &cb.results {
        assert_eq!(info.identity().rat(), info.signal().rat());
    }
}

#[test]
fn scan_error_after_results_is_the_only_terminal() {
    let mut session = ScanSession::new(2);
    let mut cb = CollectingCallback::default();

    session.handle_event(
        ScanEvent::Results(through_wire(&[lte_cell_info(-110, 5)])),
        &mut cb,
    );
    session.handle_event(ScanEvent::Error(ScanError::ModemUnavailable), &mut cb);
    session.handle_event(ScanEvent::Complete, &mut cb);

    assert_eq!(cb.errors, vec![ScanError::ModemUnavailable]);
    assert_eq!(cb.completions, 0);
}

#[test]
fn stopped_scan_delivers_no_terminal() {
    let mut session = ScanSession::new(3);
    let mut cb = CollectingCallback::default();

    session.handle_event(
        ScanEvent::Results(through_wire(&[nr_cell_info(1)])),
        &mut cb,
    );
    assert!(session.request_stop());
    session.handle_event(ScanEvent::StopAcknowledged, &mut cb);
    session.handle_event(ScanEvent::Complete, &mut cb);
    session.handle_event(ScanEvent::Error(ScanError::Interrupted), &mut cb);

    assert_eq!(cb.results.len(), 1);
    assert_eq!(cb.completions + cb.errors.len(), 0);
    assert_eq!(session.state(), ScanSessionState::Stopped);
}

#[test]
fn selection_over_scan_results_prefers_priority_then_signal() {
    // Two subscriptions measured against scanned cells: the HIGH priority
    // one wins even though its signal is weaker...
    let strong_low = (
        AvailableNetworkInfo::new(1, NetworkPriority::Low, vec![], vec![]),
        nr_cell_info(10).level(),
    );
    let weak_high = (
        AvailableNetworkInfo::new(2, NetworkPriority::High, vec![], vec![]),
        lte_cell_info(-120, 11).level(),
    );
    assert_eq!(weak_high.1, SignalLevel::Poor);
    let strong_low_weak_high = [strong_low, weak_high];
    let (selected, _) = select_preferred(&strong_low_weak_high).unwrap();
    assert_eq!(selected.sub_id, 2);

    // ...and between two HIGH subscriptions the stronger signal wins.
    let high_poor = (
        AvailableNetworkInfo::new(3, NetworkPriority::High, vec![], vec![]),
        lte_cell_info(-125, 12).level(),
    );
    let high_moderate = (
        AvailableNetworkInfo::new(4, NetworkPriority::High, vec![], vec![]),
        nr_cell_info(13).level(),
    );
    let high_poor_high_moderate = [high_poor, high_moderate];
    let (selected, level) = select_preferred(&high_poor_high_moderate).unwrap();
    assert_eq!(selected.sub_id, 4);
    assert_eq!(*level, SignalLevel::Moderate);
}
