//! Shell-chain detection: low-degree relay accounts sitting in the middle
//! of long transfer paths, the layering signature.
//!
//! All-pairs shortest paths over the graph, so the pass is guarded by a
//! node-count ceiling. Above the ceiling it is skipped silently: no score
//! contribution, no failure, no marker in the result.
//!
//! Among equal-length shortest paths the pass takes the first one a
//! breadth-first expansion reaches, in the graph's adjacency order. Any
//! choice would do: a relay is credited at most once no matter how many
//! paths run through it.

use crate::graph::TransactionGraph;
use crate::ledger::ScoreLedger;
use petgraph::graph::NodeIndex;
use std::collections::{HashMap, VecDeque};

// ── Constants ────────────────────────────────────────────────────────────────

/// Node-count guard for the all-pairs scan.
const NODE_GUARD: usize = 300;
/// A path must span this many nodes (source and target included) before
/// its interior is inspected.
const MIN_PATH_NODES: usize = 4;
/// Relays busier than this are not shells.
const MAX_RELAY_DEGREE: usize = 3;
const SHELL_SCORE: i64 = 20;
const SHELL_PATTERN: &str = "shell_chain";

// ── Detection ────────────────────────────────────────────────────────────────

pub fn detect(graph: &TransactionGraph, ledger: &mut ScoreLedger) {
    if graph.node_count() >= NODE_GUARD {
        log::debug!(
            "shell_chain: skipped, {} nodes over guard of {NODE_GUARD}",
            graph.node_count()
        );
        return;
    }

    let nodes: Vec<NodeIndex> = graph.node_indices().collect();
    for &source in &nodes {
        let parents = bfs_parents(graph, source);

        for &target in &nodes {
            if target == source {
                continue;
            }
            let Some(path) = reconstruct(source, target, &parents) else {
                continue; // no directed path, a normal skip
            };
            if path.len() < MIN_PATH_NODES {
                continue;
            }

            for &relay in &path[1..path.len() - 1] {
                if graph.total_degree(relay) > MAX_RELAY_DEGREE {
                    continue;
                }
                let account = graph.account(relay);
                if !ledger.has_pattern(account, SHELL_PATTERN) {
                    let account = account.to_string();
                    ledger.add_score(&account, SHELL_SCORE);
                    ledger.add_pattern(&account, SHELL_PATTERN);
                }
            }
        }
    }
}

/// Breadth-first expansion from `source`, recording each node's parent on
/// first visit. The resulting tree holds one shortest path per reachable
/// node.
fn bfs_parents(graph: &TransactionGraph, source: NodeIndex) -> HashMap<NodeIndex, NodeIndex> {
    let mut parents = HashMap::new();
    let mut queue = VecDeque::from([source]);
    parents.insert(source, source);

    while let Some(current) = queue.pop_front() {
        for next in graph.neighbors_out(current) {
            if !parents.contains_key(&next) {
                parents.insert(next, current);
                queue.push_back(next);
            }
        }
    }
    parents
}

/// Walk the parent tree back from `target`. `None` when `target` was never
/// reached from `source`.
fn reconstruct(
    source: NodeIndex,
    target: NodeIndex,
    parents: &HashMap<NodeIndex, NodeIndex>,
) -> Option<Vec<NodeIndex>> {
    if !parents.contains_key(&target) {
        return None;
    }
    let mut path = vec![target];
    let mut current = target;
    while current != source {
        current = parents[&current];
        path.push(current);
    }
    path.reverse();
    Some(path)
}
