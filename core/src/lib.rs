//! ringsight-core: transaction-graph laundering detection.
//!
//! Ingests a batch of transfer records, builds a directed account graph,
//! and runs independent pattern passes (cycles, fan-in/out, velocity
//! bursts, shell-relay chains) into one per-account suspicion score, plus
//! ring summaries for the closed loops.
//!
//! Entry point: [`engine::analyze`] over a [`table::TransactionTable`].

pub mod cycle_detector;
pub mod degree_detector;
pub mod engine;
pub mod error;
pub mod graph;
pub mod ledger;
pub mod mitigation;
pub mod report;
pub mod shell_chain_detector;
pub mod table;
pub mod types;
pub mod velocity_detector;

pub use engine::analyze;
pub use error::{EngineError, EngineResult};
pub use report::{AnalysisResult, AnalysisSummary, FraudRing, SuspiciousAccount};
pub use table::{Transaction, TransactionTable};
