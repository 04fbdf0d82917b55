use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Resolve decision authorship and segment opinions for search.
#[derive(Debug, Parser)]
#[command(name = "ponencia", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// DuckDB database file (overrides `store.path`; in-memory when unset)
    #[arg(long, global = true, env = "PONENCIA_DB")]
    pub db: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Load the justice registry and list it with any rejected rows
    Justices {
        /// JSON array of justice records (defaults to `registry.path`)
        #[arg(long)]
        source: Option<PathBuf>,
    },
    /// Print the chief tenure table
    Chiefs {
        #[arg(long)]
        source: Option<PathBuf>,
    },
    /// Resolve the ponente of every decision and store the results
    Resolve {
        #[arg(long)]
        justices: Option<PathBuf>,
        /// JSON array of `{id, date, raw_ponente, per_curiam}`
        #[arg(long)]
        decisions: PathBuf,
    },
    /// Segment opinions and store the segment sets
    Segment {
        /// JSON array of `{id, decision_id, text}`
        #[arg(long)]
        opinions: PathBuf,
        /// Minimum segment length (overrides `segment.min_length`)
        #[arg(long)]
        min_length: Option<usize>,
    },
    /// Most frequent signatures that matched no sitting justice
    Unresolved {
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Signatures that matched more than one sitting justice
    Ambiguous,
    /// Segments within a character-count range
    Segments {
        #[arg(long, default_value_t = 0)]
        min_chars: usize,
        #[arg(long, default_value_t = usize::MAX)]
        max_chars: usize,
    },
    /// Segment totals per decision
    SegmentCounts,
    /// Full-text search over segments (needs `store.full_text`)
    Search {
        query: String,
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
}

impl Commands {
    /// Commands that only read an existing database.
    pub fn is_read_only(&self) -> bool {
        matches!(
            self,
            Self::Unresolved { .. }
                | Self::Ambiguous
                | Self::Segments { .. }
                | Self::SegmentCounts
                | Self::Search { .. }
        )
    }
}
