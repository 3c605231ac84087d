//! Error types shared by every phase of the retrieval pipeline.

use thiserror::Error;

/// All fatal error kinds the core can raise.
///
/// Each binary propagates these through `anyhow::Result` via `#[from]` /
/// `?`; none of them are recovered from inside the library — a phase is
/// all-or-nothing, per the error handling design.
#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{path} already exists; refusing to overwrite")]
    OutputAlreadyExists { path: String },

    #[error("malformed record at offset {offset}: {reason}")]
    MalformedRecord { offset: u64, reason: String },

    #[error("malformed result line {line_no} ({raw:?}): {reason}")]
    MalformedResultLine {
        line_no: usize,
        raw: String,
        reason: String,
    },

    #[error("malformed qrels line {line_no} ({raw:?}): {reason}")]
    MalformedQrel {
        line_no: usize,
        raw: String,
        reason: String,
    },

    #[error("malformed queries file: {reason}")]
    MalformedQueriesFile { reason: String },

    #[error("failed to (de)serialize index file {path}: {source}")]
    Serialization {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, RetrievalError>;
