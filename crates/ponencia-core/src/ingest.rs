//! Batch drivers: resolve decisions and segment opinions in parallel.
//!
//! Units are independent, so both drivers fan out with rayon and collect
//! in input order. Per-record failures are recorded in the run report and
//! never abort the batch.

use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};

use crate::chief::ChiefTenures;
use crate::config::SegmentConfig;
use crate::decision::{Decision, DecisionRecord, Opinion, ResolvedDecision};
use crate::error::SkippedRecord;
use crate::justice::{JusticeId, Registry};
use crate::ponente::{PonenteResolver, Resolution};
use crate::segment::SegmentSet;
use crate::source::SourceRecords;

/// A signature that matched more than one sitting justice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AmbiguousCase {
    pub decision_id: String,
    pub signature: String,
    pub candidates: Vec<JusticeId>,
}

/// Everything an operator needs to audit a resolution run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub total: usize,
    pub resolved: usize,
    pub unresolved: Vec<String>,
    pub ambiguous: Vec<AmbiguousCase>,
    pub per_curiam: Vec<String>,
    pub skipped: Vec<SkippedRecord>,
}

impl RunReport {
    fn record(&mut self, row: &ResolvedDecision) {
        let decision = &row.decision;
        match &row.resolution {
            Resolution::Resolved(_) => self.resolved += 1,
            Resolution::Ambiguous(ids) => self.ambiguous.push(AmbiguousCase {
                decision_id: decision.id.clone(),
                signature: decision.raw_ponente.clone().unwrap_or_default(),
                candidates: ids.clone(),
            }),
            Resolution::Unresolved if decision.per_curiam => self.per_curiam.push(decision.id.clone()),
            Resolution::Unresolved => self.unresolved.push(decision.id.clone()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DecisionRun {
    pub decisions: Vec<ResolvedDecision>,
    pub report: RunReport,
}

fn resolve_one(resolver: PonenteResolver<'_>, decision: Decision) -> ResolvedDecision {
    let signature = decision.raw_ponente.as_deref().unwrap_or_default();
    let authorship = resolver.authorship(signature, decision.date, decision.per_curiam);
    ResolvedDecision::new(decision, authorship)
}

/// Validate and resolve a batch of decision records.
pub fn resolve_decisions(
    registry: &Registry,
    tenures: &ChiefTenures,
    records: Vec<DecisionRecord>,
) -> DecisionRun {
    resolve_source(registry, tenures, SourceRecords::from(records))
}

/// Resolve a decoded source. Elements the decoder rejected are counted in
/// the total and reported as skipped ahead of validation failures.
pub fn resolve_source(
    registry: &Registry,
    tenures: &ChiefTenures,
    source: SourceRecords<DecisionRecord>,
) -> DecisionRun {
    let resolver = PonenteResolver::new(registry, tenures);
    let total = source.total();
    let SourceRecords { records, skipped } = source;

    let outcomes: Vec<Result<ResolvedDecision, SkippedRecord>> = records
        .into_par_iter()
        .map(|record| {
            let id = record.id.clone();
            record
                .into_decision()
                .map(|decision| resolve_one(resolver, decision))
                .map_err(|reason| SkippedRecord { id, reason })
        })
        .collect();

    let mut run = DecisionRun {
        decisions: Vec::with_capacity(total),
        report: RunReport {
            total,
            skipped,
            ..RunReport::default()
        },
    };
    for outcome in outcomes {
        match outcome {
            Ok(row) => {
                run.report.record(&row);
                run.decisions.push(row);
            }
            Err(skipped) => {
                warn!(decision_id = %skipped.id, reason = %skipped.reason, "skipping decision record");
                run.report.skipped.push(skipped);
            }
        }
    }

    let r = &run.report;
    info!(
        total = r.total,
        resolved = r.resolved,
        unresolved = r.unresolved.len(),
        ambiguous = r.ambiguous.len(),
        per_curiam = r.per_curiam.len(),
        skipped = r.skipped.len(),
        "resolved decisions"
    );
    run
}

#[derive(Debug, Clone, Default)]
pub struct SegmentRun {
    pub sets: Vec<SegmentSet>,
    pub retained: usize,
    pub discarded: usize,
    /// Opinions that produced no segment at all.
    pub empty: Vec<String>,
    /// Source elements that did not decode as an opinion.
    pub skipped: Vec<SkippedRecord>,
}

/// Segment a batch of opinions. Each opinion's set is produced whole.
pub fn segment_opinions(opinions: Vec<Opinion>, config: &SegmentConfig) -> SegmentRun {
    segment_source(SourceRecords::from(opinions), config)
}

/// Segment a decoded source, carrying its rejected elements into the run.
pub fn segment_source(source: SourceRecords<Opinion>, config: &SegmentConfig) -> SegmentRun {
    let SourceRecords {
        records: opinions,
        skipped,
    } = source;
    let segmenter = config.segmenter();
    let sets: Vec<SegmentSet> = opinions
        .par_iter()
        .map(|opinion| segmenter.segment_opinion(opinion))
        .collect();

    let retained = sets.iter().map(|s| s.segments.len()).sum();
    let discarded = sets.iter().map(|s| s.discarded).sum();
    let empty = sets
        .iter()
        .filter(|s| s.is_empty())
        .map(|s| s.opinion_id.clone())
        .collect();

    info!(
        opinions = sets.len(),
        retained,
        discarded,
        skipped = skipped.len(),
        min_length = segmenter.min_length(),
        "segmented opinions"
    );
    SegmentRun {
        sets,
        retained,
        discarded,
        empty,
        skipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecordError;
    use crate::justice::Justice;
    use crate::source::parse_records;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn justice(id: JusticeId, name: &str, start: NaiveDate, end: Option<NaiveDate>) -> Justice {
        Justice {
            id,
            last_name: name.into(),
            alias: None,
            start_term: start,
            inactive_date: end,
            chief_date: None,
        }
    }

    fn record(id: &str, date: &str, ponente: Option<&str>, per_curiam: bool) -> DecisionRecord {
        DecisionRecord {
            id: id.into(),
            date: Some(date.into()),
            raw_ponente: ponente.map(Into::into),
            per_curiam,
        }
    }

    #[test]
    fn report_enumerates_every_outcome() {
        let registry = Registry::new(vec![
            justice(1, "Cruz", ymd(1990, 1, 1), None),
            justice(2, "Concepcion", ymd(1954, 1, 1), Some(ymd(1973, 1, 1))),
            justice(3, "Concepcion", ymd(1960, 1, 1), Some(ymd(1975, 1, 1))),
        ]);
        let tenures = ChiefTenures::compute(&registry);
        let run = resolve_decisions(
            &registry,
            &tenures,
            vec![
                record("a", "2000-01-01", Some("CRUZ, J.:"), false),
                record("b", "1965-06-30", Some("CONCEPCION, J."), false),
                record("c", "2000-01-01", Some("Per Curiam"), false),
                record("d", "2000-01-01", Some("Nobody, J."), false),
                record("e", "not a date", Some("Cruz"), false),
                record("f", "2000-01-01", None, false),
            ],
        );

        assert_eq!(run.decisions.len(), 5);
        assert_eq!(run.decisions[0].justice_id, Some(1));
        let r = &run.report;
        assert_eq!(r.total, 6);
        assert_eq!(r.resolved, 1);
        assert_eq!(r.unresolved, vec!["d".to_string(), "f".to_string()]);
        assert_eq!(r.per_curiam, vec!["c".to_string()]);
        assert_eq!(
            r.ambiguous,
            vec![AmbiguousCase {
                decision_id: "b".into(),
                signature: "CONCEPCION, J.".into(),
                candidates: vec![2, 3],
            }]
        );
        assert_eq!(r.skipped.len(), 1);
        assert_eq!(r.skipped[0].id, "e");
        assert!(matches!(r.skipped[0].reason, RecordError::MalformedDate { field: "date", .. }));
    }

    #[test]
    fn output_preserves_input_order() {
        let registry = Registry::new(vec![justice(1, "Cruz", ymd(1990, 1, 1), None)]);
        let tenures = ChiefTenures::compute(&registry);
        let records: Vec<_> = (0..200)
            .map(|i| record(&format!("d{i}"), "2000-01-01", Some("Cruz"), false))
            .collect();
        let run = resolve_decisions(&registry, &tenures, records);
        let ids: Vec<_> = run.decisions.iter().map(|d| d.decision.id.clone()).collect();
        let expected: Vec<_> = (0..200).map(|i| format!("d{i}")).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn undecodable_decisions_are_reported_not_fatal() {
        let registry = Registry::new(vec![justice(1, "Cruz", ymd(1990, 1, 1), None)]);
        let tenures = ChiefTenures::compute(&registry);
        let source = parse_records(
            r#"[
                {"id": "a", "date": "2000-01-01", "raw_ponente": "CRUZ, J.", "per_curiam": false},
                {"id": "b", "date": "2000-01-01", "raw_ponente": "CRUZ, J.", "per_curiam": null},
                {"id": 7, "date": "2000-01-01", "raw_ponente": "CRUZ, J."},
                {"id": "c", "date": "2000-01-01", "raw_ponente": "Cruz"}
            ]"#,
        )
        .unwrap();

        let run = resolve_source(&registry, &tenures, source);
        let resolved: Vec<_> = run
            .decisions
            .iter()
            .map(|d| (d.decision.id.as_str(), d.justice_id))
            .collect();
        assert_eq!(resolved, vec![("a", Some(1)), ("c", Some(1))]);
        let r = &run.report;
        assert_eq!(r.total, 4);
        assert_eq!(r.resolved, 2);
        let skipped: Vec<_> = r.skipped.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(skipped, vec!["b", "7"]);
        assert!(matches!(r.skipped[0].reason, RecordError::Invalid(_)));
    }

    #[test]
    fn undecodable_opinions_are_carried_into_the_segment_run() {
        let long = "word ".repeat(40);
        let raw = format!(
            r#"[{{"id": "o1", "decision_id": "d1", "text": "{long}"}}, {{"id": "o2", "decision_id": 9, "text": "x"}}]"#
        );
        let source = parse_records(&raw).unwrap();
        let config = SegmentConfig {
            min_length: 100,
            strip_inline_footnotes: true,
        };
        let run = segment_source(source, &config);
        assert_eq!(run.sets.len(), 1);
        assert_eq!(run.retained, 1);
        assert_eq!(run.skipped.len(), 1);
        assert_eq!(run.skipped[0].id, "o2");
    }

    #[test]
    fn segment_run_counts() {
        let long = "word ".repeat(40);
        let opinions = vec![
            Opinion {
                id: "o1".into(),
                decision_id: "d1".into(),
                text: format!("{long}\n\nshort"),
            },
            Opinion {
                id: "o2".into(),
                decision_id: "d1".into(),
                text: "short".into(),
            },
        ];
        let config = SegmentConfig {
            min_length: 100,
            strip_inline_footnotes: true,
        };
        let run = segment_opinions(opinions, &config);
        assert_eq!(run.retained, 1);
        assert_eq!(run.discarded, 2);
        assert_eq!(run.empty, vec!["o2".to_string()]);
    }
}
