//! False-positive mitigation: volume relief for flagged high-throughput
//! accounts, with a floor at zero.

mod common;

use common::{flagged, table};
use ringsight_core::analyze;

/// An account in a ring that also clears 200+ transactions of ordinary
/// traffic gets 20 points of relief: 40 → 20.
#[test]
fn high_volume_ring_member_is_relieved() {
    let mut rows: Vec<(String, String, i64)> = vec![
        ("HUB".into(), "B".into(), 0),
        ("B".into(), "C".into(), 1),
        ("C".into(), "HUB".into(), 2),
    ];
    // 203 ordinary transfers, one per hour, split across two partners so
    // the hub's degree stays modest and nothing reads as a burst.
    for i in 0..101 {
        rows.push(("HUB".into(), "P1".into(), 10 + i));
    }
    for i in 0..102 {
        rows.push(("P2".into(), "HUB".into(), 10 + i));
    }
    let borrowed: Vec<(&str, &str, i64)> =
        rows.iter().map(|(s, r, h)| (s.as_str(), r.as_str(), *h)).collect();
    let result = analyze(&table(&borrowed)).unwrap();

    let hub = flagged(&result, "HUB").unwrap();
    assert_eq!(hub.suspicion_score, 20.0);
    assert!(hub.detected_patterns.contains("cycle_length_3"));
    assert_ne!(hub.ring_id, "NONE");

    // The partners carried volume but matched no pattern: absent entirely.
    assert!(flagged(&result, "P1").is_none());
    assert!(flagged(&result, "P2").is_none());
}

/// Relief can zero an account out of the report, but never below zero.
#[test]
fn relief_floors_at_zero() {
    // 201 transfers inside three days: both ends read as high velocity
    // (15), then volume relief (-20) clamps them to 0 and out of view.
    let mut rows: Vec<(String, String, i64)> = Vec::new();
    for i in 0..201i64 {
        rows.push(("BUSY".into(), "P".into(), i / 3));
    }
    let borrowed: Vec<(&str, &str, i64)> =
        rows.iter().map(|(s, r, h)| (s.as_str(), r.as_str(), *h)).collect();
    let result = analyze(&table(&borrowed)).unwrap();

    assert!(result.suspicious_accounts.is_empty());
    assert_eq!(result.summary.suspicious_accounts_flagged, 0);
}

/// Exactly 200 transactions is not over the volume threshold.
#[test]
fn threshold_is_exclusive() {
    let mut rows: Vec<(String, String, i64)> = Vec::new();
    for i in 0..200i64 {
        rows.push(("BUSY".into(), "P".into(), i / 3));
    }
    let borrowed: Vec<(&str, &str, i64)> =
        rows.iter().map(|(s, r, h)| (s.as_str(), r.as_str(), *h)).collect();
    let result = analyze(&table(&borrowed)).unwrap();

    for account in ["BUSY", "P"] {
        let entry = flagged(&result, account).unwrap();
        assert_eq!(entry.suspicion_score, 15.0, "{account} keeps its velocity score");
    }
}
