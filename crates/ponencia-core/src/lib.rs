pub mod chief;
pub mod config;
pub mod date;
pub mod decision;
pub mod error;
pub mod ingest;
pub mod justice;
pub mod name;
pub mod ponente;
pub mod schema;
pub mod segment;
pub mod source;

pub use chief::{ChiefTenure, ChiefTenures, chief_tenures};
pub use config::{PonenciaConfig, SegmentConfig};
pub use decision::{Decision, DecisionRecord, Opinion, ResolvedDecision};
pub use error::{CoreError, RecordError, SkippedRecord};
pub use ingest::{
    DecisionRun, RunReport, SegmentRun, resolve_decisions, resolve_source, segment_opinions,
    segment_source,
};
pub use justice::{Justice, JusticeId, JusticeRecord, Registry, RegistryLoad};
pub use name::normalize;
pub use ponente::{Authorship, Designation, PonenteResolver, RawPonente, Resolution};
pub use schema::rows;
pub use segment::{Segment, SegmentSet, Segmenter, segment};
pub use source::{SourceRecords, parse_records, read_records};
