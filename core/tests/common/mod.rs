#![allow(dead_code)]

use chrono::{Duration, NaiveDate};
use ringsight_core::{Transaction, TransactionTable};

/// Route engine logs through the test harness when `RUST_LOG` is set.
pub fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Timestamp text at a fixed base instant plus `hours`.
pub fn ts(hours: i64) -> String {
    let base = NaiveDate::from_ymd_opt(2026, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    (base + Duration::hours(hours))
        .format("%Y-%m-%dT%H:%M:%S")
        .to_string()
}

pub fn txn(id: usize, sender: &str, receiver: &str, hours: i64) -> Transaction {
    Transaction {
        transaction_id: format!("t{id}"),
        sender_id: sender.to_string(),
        receiver_id: receiver.to_string(),
        amount: 100.0,
        timestamp: ts(hours),
    }
}

/// Build a table from `(sender, receiver, hours-from-base)` triples.
pub fn table(specs: &[(&str, &str, i64)]) -> TransactionTable {
    let rows = specs
        .iter()
        .enumerate()
        .map(|(i, (s, r, h))| txn(i, s, r, *h))
        .collect();
    TransactionTable::new(rows)
}

/// The flagged entry for one account, if present.
pub fn flagged<'a>(
    result: &'a ringsight_core::AnalysisResult,
    account: &str,
) -> Option<&'a ringsight_core::SuspiciousAccount> {
    result
        .suspicious_accounts
        .iter()
        .find(|a| a.account_id == account)
}
