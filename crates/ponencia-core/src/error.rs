use std::path::PathBuf;

use thiserror::Error;

/// A problem with one source record. Never fatal to a batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("malformed {field} date: {value:?}")]
    MalformedDate { field: &'static str, value: String },

    #[error("missing required field: {0}")]
    Missing(&'static str),

    #[error("service interval inverted: start {start} is not before inactive {inactive}")]
    InvertedInterval {
        start: chrono::NaiveDate,
        inactive: chrono::NaiveDate,
    },

    #[error("duplicate identifier")]
    DuplicateId,

    #[error("invalid record: {0}")]
    Invalid(String),
}

/// A record that was skipped, kept so the run can be audited afterwards.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SkippedRecord {
    pub id: String,
    #[serde(serialize_with = "as_display")]
    pub reason: RecordError,
}

fn as_display<S: serde::Serializer>(err: &RecordError, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(err)
}

/// Systemic failures that abort a whole run.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("source file not found: {0}")]
    SourceNotFound(PathBuf),

    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("justice registry is empty ({skipped} records skipped)")]
    EmptyRegistry { skipped: usize },

    #[error("configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),
}

impl From<figment::Error> for CoreError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}
