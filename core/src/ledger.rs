//! The per-account score ledger shared by all detectors.
//!
//! Entries are created lazily, on the first contribution from any detector.
//! Accounts no detector touched have no entry and stay invisible to the
//! aggregator. Iteration order is entry-creation order, so one analysis of
//! one table always reports ties the same way.

use crate::types::{AccountId, RingId};
use std::collections::{BTreeSet, HashMap};

/// One account's accumulated state. Scores are raw here; the 100-point
/// ceiling is applied only when the report is built.
#[derive(Debug, Clone, Default)]
pub struct AccountScore {
    pub score: i64,
    pub patterns: BTreeSet<String>,
    pub ring_id: Option<RingId>,
}

#[derive(Default)]
pub struct ScoreLedger {
    index: HashMap<AccountId, usize>,
    entries: Vec<(AccountId, AccountScore)>,
}

impl ScoreLedger {
    pub fn new() -> Self {
        Self::default()
    }

    fn entry_mut(&mut self, account: &str) -> &mut AccountScore {
        let slot = match self.index.get(account) {
            Some(&i) => i,
            None => {
                let i = self.entries.len();
                self.entries
                    .push((account.to_string(), AccountScore::default()));
                self.index.insert(account.to_string(), i);
                i
            }
        };
        &mut self.entries[slot].1
    }

    pub fn add_score(&mut self, account: &str, points: i64) {
        self.entry_mut(account).score += points;
    }

    pub fn add_pattern(&mut self, account: &str, pattern: &str) {
        self.entry_mut(account).patterns.insert(pattern.to_string());
    }

    /// Overwrites any ring id set by an earlier cycle.
    pub fn set_ring(&mut self, account: &str, ring_id: &str) {
        self.entry_mut(account).ring_id = Some(ring_id.to_string());
    }

    /// Read-only pattern check; never creates an entry.
    pub fn has_pattern(&self, account: &str, pattern: &str) -> bool {
        self.get(account).is_some_and(|e| e.patterns.contains(pattern))
    }

    pub fn get(&self, account: &str) -> Option<&AccountScore> {
        self.index.get(account).map(|&i| &self.entries[i].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (&AccountId, &AccountScore)> {
        self.entries.iter().map(|(a, s)| (a, s))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&AccountId, &mut AccountScore)> {
        self.entries.iter_mut().map(|(a, s)| (&*a, s))
    }
}
