//! Velocity detection: accounts moving money in rapid bursts.
//!
//! Timestamp coercion for the whole table happens here, up front. One
//! malformed value fails the entire analysis, including accounts the bad
//! row never touches.

use crate::error::EngineResult;
use crate::graph::TransactionGraph;
use crate::ledger::ScoreLedger;
use crate::table::TransactionTable;
use chrono::NaiveDateTime;

// ── Constants ────────────────────────────────────────────────────────────────

const MIN_BURST_TXNS: usize = 5;
const BURST_WINDOW_HOURS: f64 = 72.0;
const VELOCITY_SCORE: i64 = 15;

// ── Detection ────────────────────────────────────────────────────────────────

pub fn detect(
    graph: &TransactionGraph,
    table: &TransactionTable,
    ledger: &mut ScoreLedger,
) -> EngineResult<()> {
    let mut parsed: Vec<NaiveDateTime> = Vec::with_capacity(table.len());
    for row in table.rows() {
        parsed.push(row.parse_timestamp()?);
    }

    for idx in graph.node_indices() {
        let account = graph.account(idx);
        let mut times: Vec<NaiveDateTime> = table
            .rows()
            .iter()
            .zip(&parsed)
            .filter(|(row, _)| row.sender_id == account || row.receiver_id == account)
            .map(|(_, &ts)| ts)
            .collect();

        if times.len() < MIN_BURST_TXNS {
            continue;
        }
        times.sort();
        let span = times[times.len() - 1] - times[0];
        let hours = span.num_seconds() as f64 / 3600.0;

        if hours <= BURST_WINDOW_HOURS {
            let account = account.to_string();
            ledger.add_score(&account, VELOCITY_SCORE);
            ledger.add_pattern(&account, "high_velocity");
        }
    }
    Ok(())
}
