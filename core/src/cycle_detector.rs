//! Cycle detection — closed loops of accounts passing funds back to their
//! origin. Every qualifying simple cycle becomes a fraud ring.
//!
//! Enumeration roots each cycle at its lowest node index and only extends
//! through higher-indexed nodes, so each simple cycle is found exactly
//! once. Rings are numbered in discovery order.

use crate::graph::TransactionGraph;
use crate::ledger::ScoreLedger;
use crate::report::FraudRing;
use petgraph::graph::NodeIndex;
use std::collections::HashSet;

// ── Constants ────────────────────────────────────────────────────────────────

const MIN_RING_LEN: usize = 3;
const MAX_RING_LEN: usize = 5;
const CYCLE_SCORE: i64 = 40;
const RING_RISK_SCORE: f64 = 90.0;

// ── Detection ────────────────────────────────────────────────────────────────

/// Enumerate qualifying cycles, score their members, and return the ring
/// records. A node in several qualifying cycles scores once per cycle and
/// keeps the last-assigned ring id.
pub fn detect(graph: &TransactionGraph, ledger: &mut ScoreLedger) -> Vec<FraudRing> {
    let mut cycles: Vec<Vec<NodeIndex>> = Vec::new();

    for start in graph.node_indices() {
        let mut path = vec![start];
        let mut on_path: HashSet<NodeIndex> = HashSet::from([start]);
        extend(graph, start, &mut path, &mut on_path, &mut cycles);
    }

    let mut rings = Vec::with_capacity(cycles.len());
    for (i, cycle) in cycles.iter().enumerate() {
        let ring_id = format!("RING_{:03}", i + 1);
        let members: Vec<String> = cycle
            .iter()
            .map(|&idx| graph.account(idx).to_string())
            .collect();
        let pattern = format!("cycle_length_{}", members.len());

        for member in &members {
            ledger.add_score(member, CYCLE_SCORE);
            ledger.add_pattern(member, &pattern);
            ledger.set_ring(member, &ring_id);
        }

        rings.push(FraudRing {
            ring_id,
            member_accounts: members,
            pattern_type: "cycle".to_string(),
            risk_score: RING_RISK_SCORE,
        });
    }

    log::debug!("cycle: {} qualifying rings", rings.len());
    rings
}

/// Depth-first extension of `path`. The walk is capped at the maximum ring
/// length; longer cycles can never qualify, so they are not traced out.
fn extend(
    graph: &TransactionGraph,
    current: NodeIndex,
    path: &mut Vec<NodeIndex>,
    on_path: &mut HashSet<NodeIndex>,
    cycles: &mut Vec<Vec<NodeIndex>>,
) {
    let start = path[0];
    for next in graph.neighbors_out(current) {
        if next == start {
            if path.len() >= MIN_RING_LEN {
                cycles.push(path.clone());
            }
        } else if next.index() > start.index()
            && !on_path.contains(&next)
            && path.len() < MAX_RING_LEN
        {
            on_path.insert(next);
            path.push(next);
            extend(graph, next, path, on_path, cycles);
            path.pop();
            on_path.remove(&next);
        }
    }
}
