use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    /// A required column is absent from the input table. Raised before any
    /// graph work; the message names the first missing column only.
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A transaction's timestamp could not be coerced to an instant.
    /// Fails the entire analysis; there are no partial results.
    #[error("Unparsable timestamp '{value}' on transaction {transaction_id}")]
    TimestampParse {
        transaction_id: String,
        value: String,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type EngineResult<T> = Result<T, EngineError>;
