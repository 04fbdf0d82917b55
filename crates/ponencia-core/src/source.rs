//! JSON array sources, decoded one record at a time.
//!
//! A source file is a JSON array of objects. Only a file that cannot be read,
//! or whose top level is not an array, fails the load. An element that does
//! not fit the record type is skipped and reported under its `id` (or its
//! array position when it has no usable id).

use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::error::{CoreError, RecordError, SkippedRecord};

/// Records decoded from one source, plus the elements that were rejected.
#[derive(Debug, Clone)]
pub struct SourceRecords<T> {
    pub records: Vec<T>,
    pub skipped: Vec<SkippedRecord>,
}

impl<T> Default for SourceRecords<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            skipped: Vec::new(),
        }
    }
}

impl<T> From<Vec<T>> for SourceRecords<T> {
    fn from(records: Vec<T>) -> Self {
        Self {
            records,
            skipped: Vec::new(),
        }
    }
}

impl<T> SourceRecords<T> {
    /// Elements seen in the source, decoded or not.
    pub fn total(&self) -> usize {
        self.records.len() + self.skipped.len()
    }
}

/// Decode a JSON array element by element.
pub fn parse_records<T: DeserializeOwned>(raw: &str) -> Result<SourceRecords<T>, CoreError> {
    let values: Vec<Value> = serde_json::from_str(raw)?;
    let mut source = SourceRecords {
        records: Vec::with_capacity(values.len()),
        skipped: Vec::new(),
    };
    for (index, value) in values.into_iter().enumerate() {
        let id = record_id(&value, index);
        match serde_json::from_value(value) {
            Ok(record) => source.records.push(record),
            Err(err) => {
                let reason = RecordError::Invalid(err.to_string());
                warn!(record = %id, %reason, "skipping undecodable record");
                source.skipped.push(SkippedRecord { id, reason });
            }
        }
    }
    Ok(source)
}

/// Read and decode a JSON array source file.
pub fn read_records<T: DeserializeOwned>(path: &Path) -> Result<SourceRecords<T>, CoreError> {
    if !path.exists() {
        return Err(CoreError::SourceNotFound(path.to_path_buf()));
    }
    let raw = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_records(&raw)
}

fn record_id(value: &Value, index: usize) -> String {
    match value.get("id") {
        Some(Value::String(id)) => id.clone(),
        Some(Value::Number(id)) => id.to_string(),
        _ => format!("#{index}"),
    }
}
