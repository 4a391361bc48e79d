//! Fan-in / fan-out detection: accounts with abnormally many distinct
//! counterparties on one side. Degrees come from the graph, so duplicate
//! transfers between the same pair count once.

use crate::graph::TransactionGraph;
use crate::ledger::ScoreLedger;

// ── Constants ────────────────────────────────────────────────────────────────

const FAN_THRESHOLD: usize = 10;
const FAN_SCORE: i64 = 25;

// ── Detection ────────────────────────────────────────────────────────────────

/// Both patterns may land on the same account, independently.
pub fn detect(graph: &TransactionGraph, ledger: &mut ScoreLedger) {
    for idx in graph.node_indices() {
        let account = graph.account(idx).to_string();

        if graph.in_degree(idx) >= FAN_THRESHOLD {
            ledger.add_score(&account, FAN_SCORE);
            ledger.add_pattern(&account, "fan_in");
        }
        if graph.out_degree(idx) >= FAN_THRESHOLD {
            ledger.add_score(&account, FAN_SCORE);
            ledger.add_pattern(&account, "fan_out");
        }
    }
}
