//! Test fixtures shared by the integration test modules.

use radiocell_common::Plmn;
use radiocell_info::{
    CellConnectionStatus, CellIdentity, CellIdentityGsm, CellIdentityLte, CellIdentityNr,
    CellInfo, CellSignalStrength, CellSignalStrengthGsm, CellSignalStrengthLte,
    CellSignalStrengthNr,
};

/// Fully populated NR identity.
pub fn nr_identity() -> CellIdentity {
    CellIdentity::Nr(
        CellIdentityNr::new(
            Some(Plmn::new(310, 410, true)),
            Some(0x0A_BCDE_F012),
            Some(747),
            Some(1_193_046),
            Some(632_448),
            vec![78, 41],
        )
        .unwrap()
        .with_operator_names("Example Mobile", "ExMo"),
    )
}

/// Fully populated NR signal strength.
pub fn nr_signal() -> CellSignalStrength {
    CellSignalStrength::Nr(
        CellSignalStrengthNr::new(Some(-84), Some(-12), Some(18), Some(-92), Some(-11), Some(9))
            .unwrap(),
    )
}

/// Registered, primary-serving NR snapshot.
pub fn nr_cell_info(timestamp_nanos: u64) -> CellInfo {
    CellInfo::new(
        nr_identity(),
        nr_signal(),
        true,
        timestamp_nanos,
        CellConnectionStatus::PrimaryServing,
    )
    .unwrap()
}

/// Neighbor LTE snapshot with the given RSRP.
pub fn lte_cell_info(rsrp: i32, timestamp_nanos: u64) -> CellInfo {
    CellInfo::new(
        CellIdentity::Lte(
            CellIdentityLte::new(
                Some(Plmn::new(310, 410, false)),
                Some(84_213_772),
                Some(263),
                Some(21_405),
                Some(5780),
                Some(10_000),
            )
            .unwrap(),
        ),
        CellSignalStrength::Lte(
            CellSignalStrengthLte::new(None, Some(rsrp), Some(-10), Some(8), None, Some(2))
                .unwrap(),
        ),
        false,
        timestamp_nanos,
        CellConnectionStatus::None,
    )
    .unwrap()
}

/// GSM snapshot with every field reported.
pub fn gsm_cell_info(timestamp_nanos: u64) -> CellInfo {
    CellInfo::new(
        CellIdentity::Gsm(
            CellIdentityGsm::new(
                Some(Plmn::new(234, 15, false)),
                Some(4321),
                Some(60_601),
                Some(64),
                Some(51),
            )
            .unwrap()
            .with_operator_names("Example UK", "ExUK"),
        ),
        CellSignalStrength::Gsm(
            CellSignalStrengthGsm::new(Some(-71), Some(2), Some(4)).unwrap(),
        ),
        true,
        timestamp_nanos,
        CellConnectionStatus::PrimaryServing,
    )
    .unwrap()
}

/// Snapshot where the modem reported nothing at all.
pub fn absent_cell_info() -> CellInfo {
    CellInfo::new(
        CellIdentity::Nr(CellIdentityNr::default()),
        CellSignalStrength::Nr(Default::default()),
        false,
        0,
        CellConnectionStatus::Unknown,
    )
    .unwrap()
}
