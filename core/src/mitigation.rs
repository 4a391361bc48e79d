//! False-positive mitigation: accounts with very high legitimate volume
//! look suspicious by volume alone, so flagged accounts over the volume
//! threshold get a fixed score relief.
//!
//! Only accounts some detector already touched are considered; the pass
//! walks the ledger, not the graph. Scores never go below zero.

use crate::ledger::ScoreLedger;
use crate::table::TransactionTable;

// ── Constants ────────────────────────────────────────────────────────────────

const VOLUME_THRESHOLD: usize = 200;
const VOLUME_RELIEF: i64 = 20;

// ── Mitigation ───────────────────────────────────────────────────────────────

pub fn apply(table: &TransactionTable, ledger: &mut ScoreLedger) {
    for (account, entry) in ledger.iter_mut() {
        if table.transaction_count(account) > VOLUME_THRESHOLD {
            entry.score -= VOLUME_RELIEF;
        }
        if entry.score < 0 {
            entry.score = 0;
        }
    }
}
