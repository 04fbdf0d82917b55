//! Justice registry: identity lookup by name key and point-in-time membership.
//!
//! Built once from the authoritative justices source and read-only afterwards,
//! so a single `Registry` is shared by reference across resolution workers.
//!
//! Two indexes back the two queries:
//!
//! - a name index mapping normalised surname/alias keys to justices
//!   (surnames repeat across eras, so each key maps to a list);
//! - an elementary-interval index: every service start and inactive date is a
//!   boundary, and for each span between consecutive boundaries the set of
//!   sitting justices is precomputed. A point query is one binary search.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::date::{parse_date, parse_optional};
use crate::error::{CoreError, RecordError, SkippedRecord};
use crate::name::normalize;
use crate::source::{SourceRecords, read_records};

pub type JusticeId = u32;

/// Mandatory retirement age, used to derive an inactive date from a birth date.
pub const MAX_JUSTICE_AGE: u32 = 70;

/// A member of the court, as held by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Justice {
    pub id: JusticeId,
    pub last_name: String,
    /// Disambiguation key for surnames shared across eras ("reyes, j.b.l.").
    pub alias: Option<String>,
    pub start_term: NaiveDate,
    /// First day the justice is no longer sitting; `None` means still active.
    pub inactive_date: Option<NaiveDate>,
    pub chief_date: Option<NaiveDate>,
}

impl Justice {
    /// Start inclusive, inactive date exclusive.
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.start_term <= date && self.inactive_date.is_none_or(|end| date < end)
    }

    /// Normalised lookup keys: surname, then alias when it differs.
    pub fn keys(&self) -> Vec<String> {
        let mut keys = vec![normalize(&self.last_name)];
        if let Some(alias) = &self.alias {
            let key = normalize(alias);
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
        keys.retain(|k| !k.is_empty());
        keys
    }
}

/// A justice row as found in the source file.
///
/// Beyond the registry fields, the source may carry `suffix`, `end_term` and
/// `birth_date`, from which a missing alias or inactive date is derived.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JusticeRecord {
    pub id: JusticeId,
    pub last_name: String,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub suffix: Option<String>,
    #[serde(default)]
    pub start_term: Option<String>,
    #[serde(default)]
    pub inactive_date: Option<String>,
    #[serde(default)]
    pub end_term: Option<String>,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub chief_date: Option<String>,
}

impl JusticeRecord {
    /// Validate the record and derive the registry fields.
    pub fn into_justice(self) -> Result<Justice, RecordError> {
        let start_raw = self
            .start_term
            .as_deref()
            .ok_or(RecordError::Missing("start_term"))?;
        let start_term = parse_date("start_term", start_raw)?;
        let chief_date = parse_optional("chief_date", self.chief_date.as_deref())?;

        let inactive_date = match parse_optional("inactive_date", self.inactive_date.as_deref())? {
            Some(d) => Some(d),
            None => match parse_optional("end_term", self.end_term.as_deref())? {
                Some(d) => Some(d),
                None => parse_optional("birth_date", self.birth_date.as_deref())?
                    .and_then(|born| born.checked_add_months(Months::new(12 * MAX_JUSTICE_AGE))),
            },
        };
        if let Some(inactive) = inactive_date
            && inactive <= start_term
        {
            return Err(RecordError::InvertedInterval {
                start: start_term,
                inactive,
            });
        }

        let suffix = self.suffix.filter(|s| !s.trim().is_empty());
        let alias = match self.alias.filter(|a| !a.trim().is_empty()) {
            Some(alias) => Some(alias),
            None => suffix.map(|sfx| format!("{} {}", self.last_name, sfx).to_lowercase()),
        };

        Ok(Justice {
            id: self.id,
            last_name: self.last_name,
            alias,
            start_term,
            inactive_date,
            chief_date,
        })
    }
}

/// Result of loading a registry: the registry plus every rejected row.
#[derive(Debug)]
pub struct RegistryLoad {
    pub registry: Registry,
    pub skipped: Vec<SkippedRecord>,
}

/// In-memory, read-only view of all justices.
#[derive(Debug, Clone)]
pub struct Registry {
    /// Sorted by id.
    justices: Vec<Justice>,
    by_key: HashMap<String, Vec<usize>>,
    boundaries: Vec<NaiveDate>,
    /// `active[i]` holds the justices sitting on `[boundaries[i], boundaries[i + 1])`.
    active: Vec<Vec<usize>>,
}

impl Registry {
    /// Build both indexes from validated justices.
    pub fn new(mut justices: Vec<Justice>) -> Self {
        justices.sort_by_key(|j| j.id);

        let mut by_key: HashMap<String, Vec<usize>> = HashMap::new();
        for (idx, justice) in justices.iter().enumerate() {
            for key in justice.keys() {
                by_key.entry(key).or_default().push(idx);
            }
        }

        let mut boundaries: Vec<NaiveDate> = justices
            .iter()
            .flat_map(|j| std::iter::once(j.start_term).chain(j.inactive_date))
            .collect();
        boundaries.sort_unstable();
        boundaries.dedup();

        let active = boundaries
            .iter()
            .map(|&b| {
                justices
                    .iter()
                    .enumerate()
                    .filter(|(_, j)| j.is_active_on(b))
                    .map(|(idx, _)| idx)
                    .collect()
            })
            .collect();

        Self {
            justices,
            by_key,
            boundaries,
            active,
        }
    }

    /// Validate source rows, skipping (and reporting) the ones that fail.
    pub fn from_records(records: Vec<JusticeRecord>) -> RegistryLoad {
        let mut seen = HashSet::new();
        let mut justices = Vec::with_capacity(records.len());
        let mut skipped = Vec::new();

        for record in records {
            let id = record.id;
            let result = if seen.insert(id) {
                record.into_justice()
            } else {
                Err(RecordError::DuplicateId)
            };
            match result {
                Ok(justice) => justices.push(justice),
                Err(reason) => {
                    warn!(justice_id = id, %reason, "skipping justice record");
                    skipped.push(SkippedRecord {
                        id: id.to_string(),
                        reason,
                    });
                }
            }
        }

        let registry = Self::new(justices);
        info!(
            loaded = registry.len(),
            skipped = skipped.len(),
            "built justice registry"
        );
        RegistryLoad { registry, skipped }
    }

    /// Load the registry from a JSON array of justice records.
    ///
    /// Fails only when the file cannot be read, its top level is not an
    /// array, or no record survives validation. Elements that do not decode
    /// as a justice record are skipped alongside the ones that fail
    /// validation.
    pub fn from_json_file(path: &Path) -> Result<RegistryLoad, CoreError> {
        let source: SourceRecords<JusticeRecord> = read_records(path)?;
        let mut skipped = source.skipped;
        let mut load = Self::from_records(source.records);
        skipped.append(&mut load.skipped);
        load.skipped = skipped;
        if load.registry.is_empty() {
            return Err(CoreError::EmptyRegistry {
                skipped: load.skipped.len(),
            });
        }
        Ok(load)
    }

    pub fn len(&self) -> usize {
        self.justices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.justices.is_empty()
    }

    /// All justices, ordered by id.
    pub fn iter(&self) -> impl Iterator<Item = &Justice> {
        self.justices.iter()
    }

    pub fn get(&self, id: JusticeId) -> Option<&Justice> {
        self.justices
            .binary_search_by_key(&id, |j| j.id)
            .ok()
            .map(|idx| &self.justices[idx])
    }

    /// Justices sitting on `date`, ordered by id.
    pub fn active_on(&self, date: NaiveDate) -> Vec<&Justice> {
        self.active_indices(date)
            .iter()
            .map(|&idx| &self.justices[idx])
            .collect()
    }

    /// Justices whose normalised surname or alias equals `key`, ordered by id.
    pub fn find_by_key(&self, key: &str) -> Vec<&Justice> {
        self.by_key
            .get(key)
            .map(|idxs| idxs.iter().map(|&idx| &self.justices[idx]).collect())
            .unwrap_or_default()
    }

    /// Name matches that were also sitting on `date`.
    pub fn candidates(&self, key: &str, date: NaiveDate) -> Vec<&Justice> {
        let Some(named) = self.by_key.get(key) else {
            return Vec::new();
        };
        let sitting = self.active_indices(date);
        named
            .iter()
            .filter(|&&idx| sitting.binary_search(&idx).is_ok())
            .map(|&idx| &self.justices[idx])
            .collect()
    }

    fn active_indices(&self, date: NaiveDate) -> &[usize] {
        match self.boundaries.partition_point(|b| *b <= date) {
            0 => &[],
            n => &self.active[n - 1],
        }
    }
}
