//! Cross-crate round-trip tests: full snapshots through the binary codec.

use radiocell_info::codec::{
    decode_cell_info, decode_cell_identity, decode_signal_strength, encode_cell_identity,
    encode_cell_info, encode_signal_strength,
};
use radiocell_info::{CellConnectionStatus, SignalLevel};
use radiocell_scan::codec::{decode_scan_request, encode_scan_request};
use radiocell_scan::{AccessNetwork, NetworkScanRequest, RadioAccessSpecifier, ScanType};

use crate::fixtures::{absent_cell_info, gsm_cell_info, lte_cell_info, nr_cell_info};

#[test]
fn full_snapshot_survives_codec() {
    for info in [
        nr_cell_info(9_876_543_210),
        lte_cell_info(-101, 42),
        gsm_cell_info(1),
    ] {
        let encoded = encode_cell_info(&info).unwrap();
        let decoded = decode_cell_info(&encoded).unwrap();
        assert_eq!(decoded, info);
        // Behavior is preserved, not just structure
        assert_eq!(decoded.level(), info.level());
        assert_eq!(decoded.signal().asu_level(), info.signal().asu_level());
    }
}

#[test]
fn all_sentinel_snapshot_survives_codec() {
    let info = absent_cell_info();
    let decoded = decode_cell_info(&encode_cell_info(&info).unwrap()).unwrap();
    assert_eq!(decoded, info);
    assert_eq!(decoded.level(), SignalLevel::NoneOrUnknown);
    assert_eq!(decoded.connection_status(), CellConnectionStatus::Unknown);
    assert_eq!(decoded.signal().dbm(), None);
}

#[test]
fn snapshot_halves_roundtrip_standalone() {
    let info = nr_cell_info(7);
    let identity = decode_cell_identity(&encode_cell_identity(info.identity()).unwrap()).unwrap();
    assert_eq!(&identity, info.identity());

    let signal = decode_signal_strength(&encode_signal_strength(info.signal())).unwrap();
    assert_eq!(&signal, info.signal());
}

#[test]
fn decoded_snapshot_keeps_pairing_invariant() {
    let info = nr_cell_info(3);
    let decoded = decode_cell_info(&encode_cell_info(&info).unwrap()).unwrap();
    assert_eq!(decoded.identity().rat(), decoded.signal().rat());
}

#[test]
fn scan_request_roundtrip_with_full_parameters() {
    let request = NetworkScanRequest::new(
        ScanType::Periodic,
        vec![
            RadioAccessSpecifier::new(AccessNetwork::Ngran, vec![78], vec![632_448]).unwrap(),
            RadioAccessSpecifier::new(AccessNetwork::Eutran, vec![3, 7, 20], vec![]).unwrap(),
        ],
        60,
        600,
        true,
        3,
        vec![
            radiocell_common::Plmn::new(310, 410, false),
            radiocell_common::Plmn::new(1, 1, true),
        ],
    )
    .unwrap();
    let decoded = decode_scan_request(&encode_scan_request(&request).unwrap()).unwrap();
    assert_eq!(decoded, request);
}
