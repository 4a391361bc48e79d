//! The transaction table — the validated in-memory set of transaction
//! records, and the source of truth for every time/amount query the
//! detectors make. The graph carries topology only; anything that needs
//! counts or timestamps comes back here.

use crate::error::{EngineError, EngineResult};
use crate::types::AccountId;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Columns the input must carry, checked in this order. The schema error
/// names the first one missing.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "transaction_id",
    "sender_id",
    "receiver_id",
    "amount",
    "timestamp",
];

/// One transfer record. Immutable once loaded.
#[derive(Debug, Clone)]
pub struct Transaction {
    pub transaction_id: String,
    pub sender_id: AccountId,
    pub receiver_id: AccountId,
    pub amount: f64,
    /// Raw timestamp text. Coercion to an instant happens during velocity
    /// detection, not at load time; a malformed value surfaces there.
    pub timestamp: String,
}

impl Transaction {
    /// Coerce the raw timestamp into an instant. Accepts RFC 3339,
    /// `YYYY-MM-DDTHH:MM:SS[.f]`, `YYYY-MM-DD HH:MM:SS[.f]`, and bare
    /// `YYYY-MM-DD`.
    pub fn parse_timestamp(&self) -> EngineResult<NaiveDateTime> {
        let raw = self.timestamp.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Ok(dt.naive_utc());
        }
        for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
                return Ok(dt);
            }
        }
        if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            if let Some(dt) = d.and_hms_opt(0, 0, 0) {
                return Ok(dt);
            }
        }

        Err(EngineError::TimestampParse {
            transaction_id: self.transaction_id.clone(),
            value: self.timestamp.clone(),
        })
    }
}

/// The full input batch. One instance per analysis run.
#[derive(Debug, Clone, Default)]
pub struct TransactionTable {
    rows: Vec<Transaction>,
}

impl TransactionTable {
    pub fn new(rows: Vec<Transaction>) -> Self {
        Self { rows }
    }

    /// Load a CSV batch with a header row. Verifies the header carries the
    /// required columns before reading any data rows. Amounts that fail to
    /// parse are carried as 0.0; scoring never reads them.
    pub fn from_csv_reader<R: Read>(reader: R) -> EngineResult<Self> {
        let mut rdr = csv::Reader::from_reader(reader);
        let headers = rdr.headers()?.clone();

        for col in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == col) {
                return Err(EngineError::MissingColumn(col.to_string()));
            }
        }
        let col = |name: &str| headers.iter().position(|h| h == name).unwrap_or(0);
        let (c_id, c_sender, c_receiver, c_amount, c_ts) = (
            col("transaction_id"),
            col("sender_id"),
            col("receiver_id"),
            col("amount"),
            col("timestamp"),
        );

        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record?;
            let field = |i: usize| record.get(i).unwrap_or("").to_string();
            rows.push(Transaction {
                transaction_id: field(c_id),
                sender_id: field(c_sender),
                receiver_id: field(c_receiver),
                amount: record
                    .get(c_amount)
                    .and_then(|v| v.trim().parse().ok())
                    .unwrap_or(0.0),
                timestamp: field(c_ts),
            });
        }
        Ok(Self { rows })
    }

    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        Self::from_csv_reader(File::open(path)?)
    }

    pub fn rows(&self) -> &[Transaction] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows where the account appears as sender or receiver. A row whose
    /// sender and receiver are the same account is yielded once.
    pub fn rows_touching<'a>(
        &'a self,
        account: &'a str,
    ) -> impl Iterator<Item = &'a Transaction> + 'a {
        self.rows
            .iter()
            .filter(move |t| t.sender_id == account || t.receiver_id == account)
    }

    /// Total transactions touching the account, as sender or receiver.
    pub fn transaction_count(&self, account: &str) -> usize {
        self.rows_touching(account).count()
    }
}
