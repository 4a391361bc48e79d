//! The transaction graph: a simple directed graph over account ids.
//!
//! One node per account appearing as sender or receiver; at most one edge
//! per ordered `(sender, receiver)` pair, regardless of how many transfers
//! share that pair. The graph records topology only, so degree means
//! distinct counterparties, not transaction count, and every amount
//! or time query goes to the [`TransactionTable`](crate::table::TransactionTable).

use crate::table::TransactionTable;
use crate::types::AccountId;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use std::collections::HashMap;

pub struct TransactionGraph {
    graph: DiGraph<AccountId, ()>,
    node_map: HashMap<AccountId, NodeIndex>,
}

impl TransactionGraph {
    /// Build the graph from the table, one `add_transfer` per row.
    pub fn from_table(table: &TransactionTable) -> Self {
        let mut g = Self {
            graph: DiGraph::new(),
            node_map: HashMap::new(),
        };
        for row in table.rows() {
            g.add_transfer(&row.sender_id, &row.receiver_id);
        }
        g
    }

    fn get_or_add_node(&mut self, account: &str) -> NodeIndex {
        if let Some(&idx) = self.node_map.get(account) {
            return idx;
        }
        let idx = self.graph.add_node(account.to_string());
        self.node_map.insert(account.to_string(), idx);
        idx
    }

    /// Record that a transfer occurred. Duplicate ordered pairs collapse
    /// onto the existing edge.
    pub fn add_transfer(&mut self, sender: &str, receiver: &str) {
        let s = self.get_or_add_node(sender);
        let r = self.get_or_add_node(receiver);
        self.graph.update_edge(s, r, ());
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Node indices in insertion order (first appearance in the table).
    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> {
        self.graph.node_indices()
    }

    pub fn account(&self, idx: NodeIndex) -> &str {
        &self.graph[idx]
    }

    pub fn index_of(&self, account: &str) -> Option<NodeIndex> {
        self.node_map.get(account).copied()
    }

    /// Outgoing neighbors of a node, in the graph's adjacency order.
    pub fn neighbors_out(&self, idx: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors_directed(idx, Direction::Outgoing)
    }

    /// Distinct inbound counterparties.
    pub fn in_degree(&self, idx: NodeIndex) -> usize {
        self.graph.edges_directed(idx, Direction::Incoming).count()
    }

    /// Distinct outbound counterparties.
    pub fn out_degree(&self, idx: NodeIndex) -> usize {
        self.graph.edges_directed(idx, Direction::Outgoing).count()
    }

    /// In-degree plus out-degree.
    pub fn total_degree(&self, idx: NodeIndex) -> usize {
        self.in_degree(idx) + self.out_degree(idx)
    }
}
