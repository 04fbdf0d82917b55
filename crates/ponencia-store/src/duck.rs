//! DuckDB storage for resolved decisions, opinion segments and chief tenures.

use std::path::Path;

use arrow::record_batch::RecordBatch;
use chrono::NaiveDate;
use duckdb::{Connection, params};
use serde::Serialize;
use tracing::{debug, info};

use ponencia_core::{ChiefTenure, Registry, ResolvedDecision, SegmentSet};

use crate::StoreError;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS justices (
    id            BIGINT NOT NULL,
    last_name     VARCHAR NOT NULL,
    alias         VARCHAR,
    start_term    DATE NOT NULL,
    inactive_date DATE,
    chief_date    DATE
);
CREATE TABLE IF NOT EXISTS decisions (
    id          VARCHAR NOT NULL,
    date        DATE NOT NULL,
    raw_ponente VARCHAR,
    per_curiam  BOOLEAN NOT NULL,
    justice_id  BIGINT,
    designation VARCHAR,
    resolution  VARCHAR NOT NULL,
    candidates  VARCHAR
);
CREATE TABLE IF NOT EXISTS segments (
    id          VARCHAR NOT NULL,
    decision_id VARCHAR NOT NULL,
    opinion_id  VARCHAR NOT NULL,
    ordinal     BIGINT NOT NULL,
    position    VARCHAR NOT NULL,
    text        VARCHAR NOT NULL,
    char_count  BIGINT NOT NULL
);
CREATE TABLE IF NOT EXISTS chief_tenures (
    justice_id     BIGINT NOT NULL,
    chief_start    DATE NOT NULL,
    chief_end      DATE,
    years_as_chief BIGINT
);
CREATE INDEX IF NOT EXISTS decisions_resolution_idx ON decisions (resolution);
CREATE INDEX IF NOT EXISTS segments_opinion_idx ON segments (opinion_id, decision_id);
CREATE INDEX IF NOT EXISTS segments_char_count_idx ON segments (char_count);
";

const TABLES: &[&str] = &["justices", "decisions", "segments", "chief_tenures"];

/// One raw signature that matched no sitting justice, with how often and
/// over which dates it appears.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnresolvedSignature {
    pub raw_ponente: String,
    pub count: u64,
    pub earliest: NaiveDate,
    pub latest: NaiveDate,
}

/// A raw signature that matched several sitting justices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AmbiguousSignature {
    pub raw_ponente: String,
    /// Candidate justice ids, ascending.
    pub candidates: Vec<u32>,
    pub count: u64,
    pub earliest: NaiveDate,
    pub latest: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecisionSegmentCount {
    pub decision_id: String,
    pub segments: u64,
    pub chars: u64,
}

/// DuckDB store for the resolution and segmentation outputs.
///
/// Supports both in-memory (ephemeral) and persistent (file-backed) modes.
/// Writers take `&mut self` because every load runs in a single transaction:
/// a reprocessed opinion or decision replaces its previous rows wholesale.
pub struct DuckStore {
    conn: Connection,
}

impl DuckStore {
    /// Open an in-memory DuckDB database with the schema in place.
    pub fn open() -> Result<Self, StoreError> {
        let store = Self {
            conn: Connection::open_in_memory()?,
        };
        store.init_schema()?;
        Ok(store)
    }

    /// Open or create a persistent database at `path`.
    pub fn open_persistent(path: &Path) -> Result<Self, StoreError> {
        let store = Self {
            conn: Connection::open(path)?,
        };
        store.init_schema()?;
        Ok(store)
    }

    /// Open a database that must already exist, for read-side commands.
    pub fn open_existing(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            return Err(StoreError::SourceNotFound(path.to_path_buf()));
        }
        Self::open_persistent(path)
    }

    /// Create all tables and indexes. Safe to run repeatedly.
    pub fn init_schema(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    /// Whether no table holds a single row yet.
    pub fn is_empty(&self) -> Result<bool, StoreError> {
        for table in TABLES {
            if self.count_table(table)? > 0 {
                return Ok(false);
            }
        }
        Ok(true)
    }

    // ── Loads ──

    /// Replace the `justices` table with the registry contents.
    pub fn load_justices(&mut self, registry: &Registry) -> Result<usize, StoreError> {
        let tx = self.conn.transaction()?;
        tx.execute_batch("DELETE FROM justices")?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO justices VALUES (?, ?, ?, ?::DATE, ?::DATE, ?::DATE)",
            )?;
            for j in registry.iter() {
                stmt.execute(params![
                    i64::from(j.id),
                    j.last_name,
                    j.alias,
                    iso(j.start_term),
                    j.inactive_date.map(iso),
                    j.chief_date.map(iso),
                ])?;
            }
        }
        tx.commit()?;
        let count = self.justices_count()?;
        info!(count, "loaded justices table");
        Ok(count)
    }

    /// Insert resolved decisions, replacing earlier rows with the same id.
    pub fn upsert_decisions(&mut self, rows: &[ResolvedDecision]) -> Result<usize, StoreError> {
        let tx = self.conn.transaction()?;
        {
            let mut delete = tx.prepare("DELETE FROM decisions WHERE id = ?")?;
            let mut insert = tx.prepare(
                "INSERT INTO decisions VALUES (?, ?::DATE, ?, ?, ?, ?, ?, ?)",
            )?;
            for row in rows {
                let d = &row.decision;
                let candidates = join_ids(row.candidates());
                delete.execute(params![d.id])?;
                insert.execute(params![
                    d.id,
                    iso(d.date),
                    d.raw_ponente,
                    d.per_curiam,
                    row.justice_id.map(i64::from),
                    row.designation.map(|x| x.as_str()),
                    row.resolution.as_str(),
                    candidates,
                ])?;
            }
        }
        tx.commit()?;
        info!(count = rows.len(), "upserted decisions");
        Ok(rows.len())
    }

    /// Replace the segments of each opinion in `sets`. An opinion's previous
    /// segments are removed even when its new set is empty.
    pub fn replace_segments(&mut self, sets: &[SegmentSet]) -> Result<usize, StoreError> {
        let tx = self.conn.transaction()?;
        {
            let mut delete = tx.prepare("DELETE FROM segments WHERE opinion_id = ?")?;
            for set in sets {
                delete.execute(params![set.opinion_id])?;
            }
        }
        let mut written = 0;
        {
            let mut appender = tx.appender("segments")?;
            for set in sets {
                for seg in &set.segments {
                    appender.append_row(params![
                        set.segment_id(seg),
                        set.decision_id,
                        set.opinion_id,
                        i64::from(seg.ordinal()),
                        seg.position(),
                        seg.text(),
                        to_i64(seg.char_count()),
                    ])?;
                    written += 1;
                }
                debug!(opinion_id = %set.opinion_id, segments = set.segments.len(), "replaced segment set");
            }
            appender.flush()?;
        }
        tx.commit()?;
        info!(opinions = sets.len(), segments = written, "stored segments");
        Ok(written)
    }

    /// Replace the `chief_tenures` table.
    pub fn replace_chief_tenures(&mut self, tenures: &[ChiefTenure]) -> Result<usize, StoreError> {
        let tx = self.conn.transaction()?;
        tx.execute_batch("DELETE FROM chief_tenures")?;
        {
            let mut stmt =
                tx.prepare("INSERT INTO chief_tenures VALUES (?, ?::DATE, ?::DATE, ?)")?;
            for t in tenures {
                stmt.execute(params![
                    i64::from(t.justice_id),
                    iso(t.chief_start),
                    t.chief_end.map(iso),
                    t.years_as_chief.map(i64::from),
                ])?;
            }
        }
        tx.commit()?;
        info!(count = tenures.len(), "loaded chief_tenures table");
        Ok(tenures.len())
    }

    // ── Counts ──

    pub fn justices_count(&self) -> Result<usize, StoreError> {
        self.count_table("justices")
    }

    pub fn decisions_count(&self) -> Result<usize, StoreError> {
        self.count_table("decisions")
    }

    pub fn segments_count(&self) -> Result<usize, StoreError> {
        self.count_table("segments")
    }

    pub fn chief_tenures_count(&self) -> Result<usize, StoreError> {
        self.count_table("chief_tenures")
    }

    fn count_table(&self, table: &str) -> Result<usize, StoreError> {
        let sql = format!("SELECT count(*)::BIGINT AS cnt FROM {table}");
        let mut stmt = self.conn.prepare(&sql)?;
        let batches: Vec<RecordBatch> = stmt.query_arrow([])?.collect();
        let batch = batches.first().ok_or(StoreError::NoResults)?;
        let col = batch
            .column(0)
            .as_any()
            .downcast_ref::<arrow::array::Int64Array>()
            .ok_or_else(|| StoreError::Other("count column not i64".into()))?;
        Ok(col.value(0) as usize)
    }

    // ── Query boundary ──

    /// Raw signatures of unresolved, non-per-curiam decisions, most frequent
    /// first. The top rows are the next normalisation rules worth adding.
    pub fn unresolved_signatures(
        &self,
        limit: Option<usize>,
    ) -> Result<Vec<UnresolvedSignature>, StoreError> {
        let limit = limit.map(|n| format!(" LIMIT {n}")).unwrap_or_default();
        let sql = format!(
            "SELECT raw_ponente, count(*)::BIGINT AS n, min(date)::VARCHAR, max(date)::VARCHAR
             FROM decisions
             WHERE resolution = 'unresolved' AND NOT per_curiam AND raw_ponente IS NOT NULL
             GROUP BY raw_ponente
             ORDER BY n DESC, raw_ponente{limit}"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let raw = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, i64>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        raw.into_iter()
            .map(|(raw_ponente, n, earliest, latest)| {
                Ok(UnresolvedSignature {
                    raw_ponente,
                    count: to_u64(n),
                    earliest: parse_iso(&earliest)?,
                    latest: parse_iso(&latest)?,
                })
            })
            .collect()
    }

    /// Raw signatures that matched more than one sitting justice, grouped by
    /// signature and candidate set.
    pub fn ambiguous_signatures(&self) -> Result<Vec<AmbiguousSignature>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT coalesce(raw_ponente, ''), coalesce(candidates, ''), count(*)::BIGINT AS n,
                    min(date)::VARCHAR, max(date)::VARCHAR
             FROM decisions
             WHERE resolution = 'ambiguous'
             GROUP BY ALL
             ORDER BY n DESC, 1",
        )?;
        let raw = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, i64>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, String>(4)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        raw.into_iter()
            .map(|(raw_ponente, candidates, n, earliest, latest)| {
                Ok(AmbiguousSignature {
                    raw_ponente,
                    candidates: split_ids(&candidates)?,
                    count: to_u64(n),
                    earliest: parse_iso(&earliest)?,
                    latest: parse_iso(&latest)?,
                })
            })
            .collect()
    }

    /// Segments whose character count lies in `[min, max]`.
    pub fn segments_by_char_count(
        &self,
        min: usize,
        max: usize,
    ) -> Result<Vec<RecordBatch>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, decision_id, opinion_id, ordinal, position, char_count, text
             FROM segments
             WHERE char_count BETWEEN ? AND ?
             ORDER BY decision_id, opinion_id, ordinal",
        )?;
        let batches: Vec<RecordBatch> = stmt.query_arrow(params![to_i64(min), to_i64(max)])?.collect();
        Ok(batches)
    }

    /// Segment totals per decision, ordered by decision id.
    pub fn segment_counts_by_decision(&self) -> Result<Vec<DecisionSegmentCount>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT decision_id, count(*)::BIGINT, sum(char_count)::BIGINT
             FROM segments
             GROUP BY decision_id
             ORDER BY decision_id",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(DecisionSegmentCount {
                    decision_id: row.get(0)?,
                    segments: to_u64(row.get::<_, i64>(1)?),
                    chars: to_u64(row.get::<_, i64>(2)?),
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    // ── Full text ──

    /// Build (or rebuild) a BM25 index over segment text with the `fts`
    /// extension. Installing the extension may need network access once.
    pub fn create_segment_fts_index(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(
            "INSTALL fts; LOAD fts;
             PRAGMA create_fts_index('segments', 'id', 'text', overwrite = 1);",
        )?;
        info!("built segment full-text index");
        Ok(())
    }

    /// Best-scoring segments for `query`. Requires the full-text index.
    pub fn search_segments(&self, query: &str, limit: usize) -> Result<Vec<RecordBatch>, StoreError> {
        let sql = format!(
            "SELECT id, decision_id, opinion_id, score, text
             FROM (
                 SELECT *, fts_main_segments.match_bm25(id, ?) AS score FROM segments
             )
             WHERE score IS NOT NULL
             ORDER BY score DESC
             LIMIT {limit}"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let batches: Vec<RecordBatch> = stmt.query_arrow([query])?.collect();
        Ok(batches)
    }

    // ── Escape hatch ──

    /// Execute arbitrary SQL and return Arrow RecordBatches.
    pub fn query_arrow(&self, sql: &str) -> Result<Vec<RecordBatch>, StoreError> {
        let mut stmt = self.conn.prepare(sql)?;
        let batches: Vec<RecordBatch> = stmt.query_arrow([])?.collect();
        Ok(batches)
    }
}

fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn parse_iso(raw: &str) -> Result<NaiveDate, StoreError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| StoreError::Corrupt(format!("date {raw:?}: {e}")))
}

fn join_ids(ids: &[u32]) -> Option<String> {
    if ids.is_empty() {
        return None;
    }
    Some(ids.iter().map(u32::to_string).collect::<Vec<_>>().join(","))
}

fn split_ids(raw: &str) -> Result<Vec<u32>, StoreError> {
    raw.split(',')
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse()
                .map_err(|_| StoreError::Corrupt(format!("candidate id {s:?}")))
        })
        .collect()
}

fn to_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

fn to_u64(n: i64) -> u64 {
    u64::try_from(n).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::{Array, Int64Array};
    use ponencia_core::{ChiefTenures, Decision, Justice, Opinion, Resolution, Segmenter};
    use pretty_assertions::assert_eq;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn registry() -> Registry {
        Registry::new(vec![
            Justice {
                id: 1,
                last_name: "Cruz".into(),
                alias: None,
                start_term: ymd(1990, 1, 1),
                inactive_date: None,
                chief_date: Some(ymd(1995, 1, 1)),
            },
            Justice {
                id: 2,
                last_name: "Reyes".into(),
                alias: Some("reyes, j.b.l.".into()),
                start_term: ymd(1954, 1, 1),
                inactive_date: Some(ymd(1972, 1, 1)),
                chief_date: None,
            },
        ])
    }

    fn decision(id: &str, date: NaiveDate, ponente: &str, resolution: Resolution) -> ResolvedDecision {
        ResolvedDecision {
            decision: Decision {
                id: id.into(),
                date,
                raw_ponente: Some(ponente.into()),
                per_curiam: false,
            },
            justice_id: resolution.justice_id(),
            designation: None,
            resolution,
        }
    }

    fn opinion(id: &str, decision_id: &str, paragraphs: &[usize]) -> SegmentSet {
        let text = paragraphs
            .iter()
            .map(|&n| "a".repeat(n))
            .collect::<Vec<_>>()
            .join("\n\n");
        Segmenter::new(1).segment_opinion(&Opinion {
            id: id.into(),
            decision_id: decision_id.into(),
            text,
        })
    }

    #[test]
    fn open_in_memory() {
        let store = DuckStore::open().unwrap();
        let batches = store.query_arrow("SELECT 1 AS x").unwrap();
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].num_rows(), 1);
    }

    #[test]
    fn init_schema_is_idempotent() {
        let store = DuckStore::open().unwrap();
        store.init_schema().unwrap();
        assert_eq!(store.decisions_count().unwrap(), 0);
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn any_loaded_table_makes_the_store_non_empty() {
        let mut store = DuckStore::open().unwrap();
        assert!(store.is_empty().unwrap());
        store
            .upsert_decisions(&[decision("a", ymd(2000, 1, 1), "Nobody", Resolution::Unresolved)])
            .unwrap();
        assert!(!store.is_empty().unwrap());
    }

    #[test]
    fn open_existing_requires_file() {
        let result = DuckStore::open_existing(Path::new("/nonexistent/ponencia.duckdb"));
        assert!(matches!(result, Err(StoreError::SourceNotFound(_))));
    }

    #[test]
    fn load_justices_replaces_table() {
        let mut store = DuckStore::open().unwrap();
        let reg = registry();
        assert_eq!(store.load_justices(&reg).unwrap(), 2);
        assert_eq!(store.load_justices(&reg).unwrap(), 2);
    }

    #[test]
    fn upsert_replaces_same_id() {
        let mut store = DuckStore::open().unwrap();
        let date = ymd(2000, 1, 1);
        store
            .upsert_decisions(&[decision("a", date, "Cruz", Resolution::Unresolved)])
            .unwrap();
        store
            .upsert_decisions(&[decision("a", date, "Cruz", Resolution::Resolved(1))])
            .unwrap();
        assert_eq!(store.decisions_count().unwrap(), 1);
        assert!(store.unresolved_signatures(None).unwrap().is_empty());
    }

    #[test]
    fn unresolved_signatures_group_and_count() {
        let mut store = DuckStore::open().unwrap();
        let mut per_curiam = decision("pc", ymd(2001, 1, 1), "Per Curiam", Resolution::Unresolved);
        per_curiam.decision.per_curiam = true;
        store
            .upsert_decisions(&[
                decision("a", ymd(2000, 1, 1), "CRUS, J.", Resolution::Unresolved),
                decision("b", ymd(2003, 5, 6), "CRUS, J.", Resolution::Unresolved),
                decision("c", ymd(2002, 1, 1), "Nobody", Resolution::Unresolved),
                decision("d", ymd(2002, 1, 1), "Cruz", Resolution::Resolved(1)),
                per_curiam,
            ])
            .unwrap();

        let rows = store.unresolved_signatures(None).unwrap();
        assert_eq!(
            rows,
            vec![
                UnresolvedSignature {
                    raw_ponente: "CRUS, J.".into(),
                    count: 2,
                    earliest: ymd(2000, 1, 1),
                    latest: ymd(2003, 5, 6),
                },
                UnresolvedSignature {
                    raw_ponente: "Nobody".into(),
                    count: 1,
                    earliest: ymd(2002, 1, 1),
                    latest: ymd(2002, 1, 1),
                },
            ]
        );
        assert_eq!(store.unresolved_signatures(Some(1)).unwrap().len(), 1);
    }

    #[test]
    fn ambiguous_signatures_keep_candidates() {
        let mut store = DuckStore::open().unwrap();
        store
            .upsert_decisions(&[decision(
                "x",
                ymd(1968, 2, 29),
                "CONCEPCION, J.",
                Resolution::Ambiguous(vec![31, 57]),
            )])
            .unwrap();
        let rows = store.ambiguous_signatures().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].candidates, vec![31, 57]);
        assert_eq!(rows[0].count, 1);
    }

    #[test]
    fn replace_segments_swaps_whole_set() {
        let mut store = DuckStore::open().unwrap();
        store
            .replace_segments(&[opinion("o1", "d1", &[10, 20, 30]), opinion("o2", "d2", &[5])])
            .unwrap();
        assert_eq!(store.segments_count().unwrap(), 4);

        store.replace_segments(&[opinion("o1", "d1", &[40])]).unwrap();
        assert_eq!(store.segments_count().unwrap(), 2);

        let counts = store.segment_counts_by_decision().unwrap();
        assert_eq!(
            counts,
            vec![
                DecisionSegmentCount {
                    decision_id: "d1".into(),
                    segments: 1,
                    chars: 40,
                },
                DecisionSegmentCount {
                    decision_id: "d2".into(),
                    segments: 1,
                    chars: 5,
                },
            ]
        );
    }

    #[test]
    fn char_count_range_is_inclusive() {
        let mut store = DuckStore::open().unwrap();
        store
            .replace_segments(&[opinion("o1", "d1", &[10, 20, 30])])
            .unwrap();
        let batches = store.segments_by_char_count(20, 30).unwrap();
        let rows: usize = batches.iter().map(|b| b.num_rows()).sum();
        assert_eq!(rows, 2);
    }

    #[test]
    fn chief_tenures_keep_open_end() {
        let mut store = DuckStore::open().unwrap();
        let tenures = ChiefTenures::compute(&registry());
        store.replace_chief_tenures(tenures.as_slice()).unwrap();
        let batches = store
            .query_arrow("SELECT justice_id, chief_end FROM chief_tenures")
            .unwrap();
        let ids = batches[0]
            .column(0)
            .as_any()
            .downcast_ref::<Int64Array>()
            .unwrap();
        assert_eq!(ids.value(0), 1);
        assert!(batches[0].column(1).is_null(0));
    }

    #[test]
    #[ignore = "downloads the fts extension"]
    fn full_text_search_finds_segment() {
        let mut store = DuckStore::open().unwrap();
        let set = Segmenter::new(1).segment_opinion(&Opinion {
            id: "o1".into(),
            decision_id: "d1".into(),
            text: "The writ of habeas corpus is granted.\n\nCosts against respondent.".into(),
        });
        store.replace_segments(&[set]).unwrap();
        store.create_segment_fts_index().unwrap();
        let batches = store.search_segments("habeas", 5).unwrap();
        let rows: usize = batches.iter().map(|b| b.num_rows()).sum();
        assert_eq!(rows, 1);
    }

    // ── Persistent storage tests ──

    #[test]
    fn open_persistent_creates_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let db_path = tmp.path().join("test.duckdb");
        assert!(!db_path.exists());

        let store = DuckStore::open_persistent(&db_path).unwrap();
        assert!(db_path.exists());
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn persistent_load_and_reopen() {
        let tmp = tempfile::TempDir::new().unwrap();
        let db_path = tmp.path().join("test.duckdb");

        let mut store = DuckStore::open_persistent(&db_path).unwrap();
        let reg = registry();
        store.load_justices(&reg).unwrap();
        store
            .upsert_decisions(&[decision("a", ymd(2000, 1, 1), "Cruz", Resolution::Resolved(1))])
            .unwrap();
        store.replace_segments(&[opinion("o1", "a", &[12])]).unwrap();
        store
            .replace_chief_tenures(ChiefTenures::compute(&reg).as_slice())
            .unwrap();
        drop(store);

        let store = DuckStore::open_existing(&db_path).unwrap();
        assert!(!store.is_empty().unwrap());
        assert_eq!(store.justices_count().unwrap(), 2);
        assert_eq!(store.decisions_count().unwrap(), 1);
    }
}
