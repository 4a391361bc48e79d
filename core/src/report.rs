//! Response structures and the aggregation step that turns the ledger
//! into the ranked output.

use crate::ledger::ScoreLedger;
use crate::types::RingId;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeSet;

// ── Constants ────────────────────────────────────────────────────────────────

/// Ceiling applied to reported scores. Raw ledger scores may exceed this;
/// the clamp happens here and nowhere earlier.
const SCORE_CEILING: i64 = 100;

// ── Output shapes ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct SuspiciousAccount {
    pub account_id: String,
    pub suspicion_score: f64,
    /// A set by contract; iteration order carries no meaning.
    pub detected_patterns: BTreeSet<String>,
    /// `"NONE"` when the account was never placed in a ring.
    pub ring_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FraudRing {
    pub ring_id: RingId,
    /// Member ids in cycle order, starting from the discovery root.
    pub member_accounts: Vec<String>,
    pub pattern_type: String,
    pub risk_score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisSummary {
    pub total_accounts_analyzed: usize,
    pub suspicious_accounts_flagged: usize,
    pub fraud_rings_detected: usize,
    /// Owned by the caller: the engine always writes 0.0 and the boundary
    /// wrapping `analyze` overwrites it with its own timer.
    pub processing_time_seconds: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub suspicious_accounts: Vec<SuspiciousAccount>,
    pub fraud_rings: Vec<FraudRing>,
    pub summary: AnalysisSummary,
}

// ── Aggregation ──────────────────────────────────────────────────────────────

/// Clamp, filter, and rank the ledger into the final result. Accounts whose
/// clamped score is 0 are dropped. Ties keep ledger (creation) order; the
/// sort is stable.
pub(crate) fn build(
    ledger: &ScoreLedger,
    fraud_rings: Vec<FraudRing>,
    total_accounts: usize,
) -> AnalysisResult {
    let mut suspicious_accounts = Vec::new();

    for (account, entry) in ledger.iter() {
        let score = entry.score.min(SCORE_CEILING);
        if score > 0 {
            suspicious_accounts.push(SuspiciousAccount {
                account_id: account.clone(),
                suspicion_score: score as f64,
                detected_patterns: entry.patterns.clone(),
                ring_id: entry.ring_id.clone().unwrap_or_else(|| "NONE".to_string()),
            });
        }
    }

    suspicious_accounts.sort_by(|a, b| {
        b.suspicion_score
            .partial_cmp(&a.suspicion_score)
            .unwrap_or(Ordering::Equal)
    });

    let summary = AnalysisSummary {
        total_accounts_analyzed: total_accounts,
        suspicious_accounts_flagged: suspicious_accounts.len(),
        fraud_rings_detected: fraud_rings.len(),
        processing_time_seconds: 0.0,
    };

    AnalysisResult {
        suspicious_accounts,
        fraud_rings,
        summary,
    }
}
