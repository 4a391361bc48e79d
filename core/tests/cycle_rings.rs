//! Cycle detection: qualifying loops become rings and score their members.

mod common;

use common::{flagged, table};
use ringsight_core::analyze;

/// A → B → C → A: one ring, each member scores exactly 40.
#[test]
fn three_account_loop_forms_a_ring() {
    let t = table(&[("A", "B", 0), ("B", "C", 1), ("C", "A", 2)]);
    let result = analyze(&t).unwrap();

    assert_eq!(result.fraud_rings.len(), 1);
    let ring = &result.fraud_rings[0];
    assert_eq!(ring.pattern_type, "cycle");
    assert_eq!(ring.risk_score, 90.0);
    assert_eq!(ring.member_accounts.len(), 3);
    for m in ["A", "B", "C"] {
        assert!(ring.member_accounts.iter().any(|a| a == m), "missing {m}");
    }

    assert_eq!(result.suspicious_accounts.len(), 3);
    for m in ["A", "B", "C"] {
        let entry = flagged(&result, m).unwrap();
        assert_eq!(entry.suspicion_score, 40.0);
        assert!(entry.detected_patterns.contains("cycle_length_3"));
        assert_eq!(entry.ring_id, ring.ring_id);
    }

    assert_eq!(result.summary.total_accounts_analyzed, 3);
    assert_eq!(result.summary.suspicious_accounts_flagged, 3);
    assert_eq!(result.summary.fraud_rings_detected, 1);
}

/// Two-node back-and-forth is below the minimum ring length.
#[test]
fn two_node_loop_is_not_a_ring() {
    let t = table(&[("A", "B", 0), ("B", "A", 1)]);
    let result = analyze(&t).unwrap();

    assert!(result.fraud_rings.is_empty());
    assert!(result.suspicious_accounts.is_empty());
}

/// A six-node loop is over the maximum ring length: no ring, though its
/// low-degree members still pick up shell-chain credit from the long paths.
#[test]
fn six_node_loop_is_not_a_ring() {
    let t = table(&[
        ("A", "B", 0),
        ("B", "C", 1),
        ("C", "D", 2),
        ("D", "E", 3),
        ("E", "F", 4),
        ("F", "A", 5),
    ]);
    let result = analyze(&t).unwrap();

    assert!(result.fraud_rings.is_empty());
    assert_eq!(result.summary.fraud_rings_detected, 0);
    for entry in &result.suspicious_accounts {
        assert_eq!(entry.ring_id, "NONE");
        assert!(
            !entry.detected_patterns.iter().any(|p| p.starts_with("cycle_")),
            "unexpected cycle pattern on {}",
            entry.account_id
        );
    }
}

/// Overlapping cycles contribute independently; the shared node keeps the
/// ring id of the last-discovered ring.
#[test]
fn overlapping_cycles_stack_and_last_ring_wins() {
    // Two triangles through X: X→A→B→X and X→C→D→X.
    let t = table(&[
        ("X", "A", 0),
        ("A", "B", 1),
        ("B", "X", 2),
        ("X", "C", 3),
        ("C", "D", 4),
        ("D", "X", 5),
    ]);
    let result = analyze(&t).unwrap();

    assert_eq!(result.fraud_rings.len(), 2);
    let x = flagged(&result, "X").unwrap();
    assert_eq!(x.suspicion_score, 80.0, "40 per qualifying cycle");
    assert!(x.detected_patterns.contains("cycle_length_3"));

    // X belongs to both rings; its stored id is the last one assigned.
    let last_ring = result.fraud_rings.last().unwrap();
    assert!(last_ring.member_accounts.iter().any(|a| a == "X"));
    assert_eq!(x.ring_id, last_ring.ring_id);

    // Spokes score one cycle plus shell-chain relay credit (degree 2,
    // interior of the cross-triangle paths).
    for m in ["A", "B", "C", "D"] {
        let entry = flagged(&result, m).unwrap();
        assert_eq!(entry.suspicion_score, 60.0);
        assert_ne!(entry.ring_id, "NONE");
    }
}

/// Ring ids are sequential in discovery order.
#[test]
fn ring_ids_are_sequential() {
    // Two disjoint triangles.
    let t = table(&[
        ("A", "B", 0),
        ("B", "C", 1),
        ("C", "A", 2),
        ("P", "Q", 3),
        ("Q", "R", 4),
        ("R", "P", 5),
    ]);
    let result = analyze(&t).unwrap();

    assert_eq!(result.fraud_rings.len(), 2);
    assert_eq!(result.fraud_rings[0].ring_id, "RING_001");
    assert_eq!(result.fraud_rings[1].ring_id, "RING_002");
}
