//! Plain-text rendering of registry listings, run reports and query results.

use arrow::record_batch::RecordBatch;
use arrow::util::pretty::pretty_format_batches;

use ponencia_core::{ChiefTenure, Registry, RunReport, SegmentRun, SkippedRecord};
use ponencia_store::{AmbiguousSignature, DecisionSegmentCount, UnresolvedSignature};

const MAX_LIST_ITEMS: usize = 20;

// ── Registry ──

pub fn print_registry(registry: &Registry, skipped: &[SkippedRecord]) {
    println!("=== Justices ({}) ===", registry.len());
    println!(
        "  {:>5}  {:<26} {:<12} {:<12} {:<12}",
        "id", "name", "start", "inactive", "chief"
    );
    for j in registry.iter() {
        let name = match &j.alias {
            Some(alias) => format!("{} ({alias})", j.last_name),
            None => j.last_name.clone(),
        };
        println!(
            "  {:>5}  {:<26} {:<12} {:<12} {:<12}",
            j.id,
            name,
            j.start_term,
            opt(j.inactive_date),
            opt(j.chief_date)
        );
    }
    print_skipped(skipped);
}

pub fn print_chief_tenures(tenures: &[ChiefTenure], registry: &Registry) {
    println!("=== Chief tenures ({}) ===", tenures.len());
    for t in tenures {
        let name = registry
            .get(t.justice_id)
            .map(|j| j.last_name.as_str())
            .unwrap_or("-");
        let years = t
            .years_as_chief
            .map(|y| format!("{y} yrs"))
            .unwrap_or_else(|| "open".into());
        println!(
            "  {:>5}  {:<20} {} .. {:<12} {}",
            t.justice_id,
            name,
            t.chief_start,
            opt(t.chief_end),
            years
        );
    }
}

// ── Run reports ──

pub fn print_run_report(report: &RunReport) {
    println!("=== Resolution ===");
    println!("  {:<26} {}", "decisions", report.total);
    println!("  {:<26} {}", "resolved", report.resolved);
    println!("  {:<26} {}", "unresolved", report.unresolved.len());
    println!("  {:<26} {}", "ambiguous", report.ambiguous.len());
    println!("  {:<26} {}", "per curiam", report.per_curiam.len());
    println!("  {:<26} {}", "skipped", report.skipped.len());

    if !report.ambiguous.is_empty() {
        println!();
        println!("Ambiguous");
        for case in report.ambiguous.iter().take(MAX_LIST_ITEMS) {
            let ids: Vec<String> = case.candidates.iter().map(u32::to_string).collect();
            println!("  {:<20} {:<30} [{}]", case.decision_id, case.signature, ids.join(", "));
        }
        more(report.ambiguous.len());
    }
    print_skipped(&report.skipped);
}

pub fn print_segment_run(run: &SegmentRun, min_length: usize) {
    println!("=== Segmentation (min length {min_length}) ===");
    println!("  {:<26} {}", "opinions", run.sets.len());
    println!("  {:<26} {}", "segments kept", run.retained);
    println!("  {:<26} {}", "units discarded", run.discarded);
    println!("  {:<26} {}", "opinions without segments", run.empty.len());
    println!("  {:<26} {}", "skipped", run.skipped.len());
    print_skipped(&run.skipped);
}

fn print_skipped(skipped: &[SkippedRecord]) {
    if skipped.is_empty() {
        return;
    }
    println!();
    println!("Skipped ({})", skipped.len());
    for s in skipped.iter().take(MAX_LIST_ITEMS) {
        println!("  {:<20} {}", s.id, s.reason);
    }
    more(skipped.len());
}

// ── Query results ──

pub fn print_unresolved(rows: &[UnresolvedSignature]) {
    println!("=== Unresolved signatures ({}) ===", rows.len());
    for r in rows {
        println!(
            "  {:>6}  {:<40} {} .. {}",
            r.count, r.raw_ponente, r.earliest, r.latest
        );
    }
}

pub fn print_ambiguous(rows: &[AmbiguousSignature]) {
    println!("=== Ambiguous signatures ({}) ===", rows.len());
    for r in rows {
        let ids: Vec<String> = r.candidates.iter().map(u32::to_string).collect();
        println!(
            "  {:>6}  {:<40} [{}]  {} .. {}",
            r.count,
            r.raw_ponente,
            ids.join(", "),
            r.earliest,
            r.latest
        );
    }
}

pub fn print_segment_counts(rows: &[DecisionSegmentCount]) {
    println!("=== Segments per decision ({}) ===", rows.len());
    for r in rows {
        println!("  {:<26} {:>6} segments {:>9} chars", r.decision_id, r.segments, r.chars);
    }
}

pub fn print_batches(batches: &[RecordBatch]) -> anyhow::Result<()> {
    let rows: usize = batches.iter().map(RecordBatch::num_rows).sum();
    if rows == 0 {
        println!("(no rows)");
        return Ok(());
    }
    println!("{}", pretty_format_batches(batches)?);
    println!("{rows} rows");
    Ok(())
}

// ── Helpers ──

fn opt<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".into())
}

fn more(len: usize) {
    if len > MAX_LIST_ITEMS {
        println!("  ... and {} more", len - MAX_LIST_ITEMS);
    }
}
