//! The analysis engine — one synchronous pass over one immutable batch.
//!
//! PASS ORDER (fixed, never reordered):
//!   1. Graph construction
//!   2. Cycle detection        (also assigns ring ids, in discovery order)
//!   3. Fan-in / fan-out detection
//!   4. Velocity detection     (coerces timestamps; hard failure on bad ones)
//!   5. Shell-chain detection  (skipped silently on large graphs)
//!   6. False-positive mitigation
//!   7. Aggregation into the ranked result
//!
//! Each call builds its own graph and ledger and discards them. Nothing is
//! shared across calls and nothing persists.

use crate::{
    cycle_detector, degree_detector,
    error::EngineResult,
    graph::TransactionGraph,
    ledger::ScoreLedger,
    mitigation, report,
    report::AnalysisResult,
    shell_chain_detector,
    table::TransactionTable,
    velocity_detector,
};

/// Run the full detection pipeline over one batch.
///
/// `processing_time_seconds` in the returned summary is always 0.0; the
/// caller wrapping this function owns the timer.
pub fn analyze(table: &TransactionTable) -> EngineResult<AnalysisResult> {
    let graph = TransactionGraph::from_table(table);
    log::debug!(
        "graph: {} accounts, {} transfer edges from {} rows",
        graph.node_count(),
        graph.edge_count(),
        table.len()
    );

    let mut ledger = ScoreLedger::new();

    let fraud_rings = cycle_detector::detect(&graph, &mut ledger);
    degree_detector::detect(&graph, &mut ledger);
    velocity_detector::detect(&graph, table, &mut ledger)?;
    shell_chain_detector::detect(&graph, &mut ledger);
    mitigation::apply(table, &mut ledger);

    let result = report::build(&ledger, fraud_rings, graph.node_count());
    log::info!(
        "analysis: {} accounts, {} flagged, {} rings",
        result.summary.total_accounts_analyzed,
        result.summary.suspicious_accounts_flagged,
        result.summary.fraud_rings_detected
    );
    Ok(result)
}
