use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::Parser;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use ponencia_core::{
    ChiefTenures, DecisionRecord, Opinion, PonenciaConfig, Registry, RegistryLoad, SourceRecords,
    read_records, resolve_source, segment_source,
};
use ponencia_store::DuckStore;

mod cli;
mod display;

use cli::{Cli, Commands};

fn main() {
    if let Err(error) = run() {
        eprintln!("ponencia error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;
    tracing::debug!("ponencia v{}", env!("CARGO_PKG_VERSION"));

    let mut config = PonenciaConfig::load().context("failed to load configuration")?;
    if let Some(db) = cli.db {
        config.store.path = Some(db);
    }

    match cli.command {
        Commands::Justices { source } => {
            let load = load_registry(source.as_deref(), &config)?;
            display::print_registry(&load.registry, &load.skipped);
        }
        Commands::Chiefs { source } => {
            let load = load_registry(source.as_deref(), &config)?;
            let tenures = ChiefTenures::compute(&load.registry);
            display::print_chief_tenures(tenures.as_slice(), &load.registry);
        }
        Commands::Resolve {
            justices,
            decisions,
        } => {
            let load = load_registry(justices.as_deref(), &config)?;
            let tenures = ChiefTenures::compute(&load.registry);
            let records: SourceRecords<DecisionRecord> = read_source(&decisions)?;
            let run = resolve_source(&load.registry, &tenures, records);

            let mut store = open_store(&config)?;
            store.load_justices(&load.registry)?;
            store.replace_chief_tenures(tenures.as_slice())?;
            store.upsert_decisions(&run.decisions)?;

            display::print_run_report(&run.report);
        }
        Commands::Segment {
            opinions,
            min_length,
        } => {
            if let Some(n) = min_length {
                config.segment.min_length = n;
            }
            let opinions: SourceRecords<Opinion> = read_source(&opinions)?;
            let run = segment_source(opinions, &config.segment);

            let mut store = open_store(&config)?;
            store.replace_segments(&run.sets)?;
            if config.store.full_text {
                store.create_segment_fts_index()?;
            }

            display::print_segment_run(&run, config.segment.min_length);
        }
        command => query(command, &config)?,
    }
    Ok(())
}

fn query(command: Commands, config: &PonenciaConfig) -> anyhow::Result<()> {
    debug_assert!(command.is_read_only());
    let Some(path) = config.store.path.as_deref() else {
        bail!("no database given; pass --db or set store.path");
    };
    let store = DuckStore::open_existing(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    if store.is_empty()? {
        bail!(
            "{} holds no data; run `ponencia resolve` or `ponencia segment` first",
            path.display()
        );
    }

    match command {
        Commands::Unresolved { limit } => {
            display::print_unresolved(&store.unresolved_signatures(limit)?);
        }
        Commands::Ambiguous => display::print_ambiguous(&store.ambiguous_signatures()?),
        Commands::Segments {
            min_chars,
            max_chars,
        } => {
            display::print_batches(&store.segments_by_char_count(min_chars, max_chars)?)?;
        }
        Commands::SegmentCounts => {
            display::print_segment_counts(&store.segment_counts_by_decision()?);
        }
        Commands::Search { query, limit } => {
            let batches = store
                .search_segments(&query, limit)
                .context("full-text search failed; was the index built with store.full_text?")?;
            display::print_batches(&batches)?;
        }
        other => bail!("{other:?} writes to the store"),
    }
    Ok(())
}

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;
    Ok(())
}

fn load_registry(source: Option<&Path>, config: &PonenciaConfig) -> anyhow::Result<RegistryLoad> {
    let path: PathBuf = source
        .map(Path::to_path_buf)
        .or_else(|| config.registry.path.clone())
        .context("no justices source; pass --source/--justices or set registry.path")?;
    let load = Registry::from_json_file(&path)
        .with_context(|| format!("failed to load justices from {}", path.display()))?;
    if !load.skipped.is_empty() {
        warn!(skipped = load.skipped.len(), "some justice records were rejected");
    }
    Ok(load)
}

fn open_store(config: &PonenciaConfig) -> anyhow::Result<DuckStore> {
    match config.store.path.as_deref() {
        Some(path) => {
            info!(path = %path.display(), "opening database");
            DuckStore::open_persistent(path)
                .with_context(|| format!("failed to open {}", path.display()))
        }
        None => {
            warn!("no database configured; results are kept in memory only");
            Ok(DuckStore::open()?)
        }
    }
}

fn read_source<T: DeserializeOwned>(path: &Path) -> anyhow::Result<SourceRecords<T>> {
    let source =
        read_records(path).with_context(|| format!("failed to read {}", path.display()))?;
    if !source.skipped.is_empty() {
        warn!(
            path = %path.display(),
            skipped = source.skipped.len(),
            "some records could not be decoded"
        );
    }
    Ok(source)
}
