//! Storage layer: DuckDB tables for justices, decisions, segments and chief
//! tenures, plus the aggregate queries operators run against them.

mod error;
pub use error::StoreError;

#[cfg(feature = "duckdb")]
mod duck;
#[cfg(feature = "duckdb")]
pub use duck::{AmbiguousSignature, DecisionSegmentCount, DuckStore, UnresolvedSignature};
