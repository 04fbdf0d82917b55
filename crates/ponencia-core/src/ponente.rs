//! Ponente resolution: which justice authored a decision.
//!
//! A signature is matched by exact normalised key, and only justices sitting
//! on the decision date are eligible. Name alone is unsafe (surnames repeat
//! across eras) and date alone is insufficient (a full court sits at once),
//! so the candidate set is the intersection of both. More than one candidate
//! is reported as ambiguous rather than guessed.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::chief::ChiefTenures;
use crate::justice::{JusticeId, Registry};
use crate::name::normalize;

static PER_CURIAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)per\s+curiam").expect("valid per curiam regex"));

/// Outcome of resolving one signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "justice_ids", rename_all = "snake_case")]
pub enum Resolution {
    Resolved(JusticeId),
    /// No candidate, or nothing to resolve (per curiam, empty signature).
    Unresolved,
    /// More than one candidate; ids in ascending order.
    Ambiguous(Vec<JusticeId>),
}

impl Resolution {
    pub fn justice_id(&self) -> Option<JusticeId> {
        match self {
            Self::Resolved(id) => Some(*id),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Resolved(_) => "resolved",
            Self::Unresolved => "unresolved",
            Self::Ambiguous(_) => "ambiguous",
        }
    }
}

/// Title attached to a resolved ponente on the decision date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Designation {
    #[serde(rename = "J.")]
    Associate,
    #[serde(rename = "C.J.")]
    Chief,
}

impl Designation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Associate => "J.",
            Self::Chief => "C.J.",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "J." => Some(Self::Associate),
            "C.J." => Some(Self::Chief),
            _ => None,
        }
    }
}

/// Resolution plus, when resolved, the designation on the decision date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authorship {
    pub resolution: Resolution,
    pub designation: Option<Designation>,
}

/// Author field of a decision as found in the source.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawPonente {
    pub writer: Option<String>,
    pub per_curiam: bool,
}

impl RawPonente {
    /// Classify a raw author field. Blank input yields `None`; "Per Curiam"
    /// in any spacing or case marks a per curiam decision with no writer.
    pub fn extract(text: Option<&str>) -> Option<Self> {
        let text = text.map(str::trim).filter(|t| !t.is_empty())?;
        if PER_CURIAM.is_match(text) {
            return Some(Self {
                writer: None,
                per_curiam: true,
            });
        }
        Some(Self {
            writer: Some(text.to_string()),
            per_curiam: false,
        })
    }
}

/// Resolves signatures against a shared registry and its chief tenures.
#[derive(Clone, Copy)]
pub struct PonenteResolver<'a> {
    registry: &'a Registry,
    tenures: &'a ChiefTenures,
}

impl<'a> PonenteResolver<'a> {
    pub fn new(registry: &'a Registry, tenures: &'a ChiefTenures) -> Self {
        Self { registry, tenures }
    }

    pub fn registry(&self) -> &'a Registry {
        self.registry
    }

    /// Resolve a signature on a decision date. Total: never fails.
    pub fn resolve(&self, raw_signature: &str, date: NaiveDate, per_curiam: bool) -> Resolution {
        if per_curiam {
            return Resolution::Unresolved;
        }
        let key = normalize(raw_signature);
        if key.is_empty() {
            return Resolution::Unresolved;
        }

        let candidates = self.registry.candidates(&key, date);
        match candidates.as_slice() {
            [] => {
                debug!(%key, %date, "no sitting justice matches signature");
                Resolution::Unresolved
            }
            [only] => Resolution::Resolved(only.id),
            many => {
                let ids: Vec<JusticeId> = many.iter().map(|j| j.id).collect();
                warn!(%key, %date, candidates = ?ids, "ambiguous signature");
                Resolution::Ambiguous(ids)
            }
        }
    }

    /// Chief if `date` falls within the justice's chief tenure, else associate.
    pub fn designation(&self, id: JusticeId, date: NaiveDate) -> Designation {
        if self.tenures.is_chief_on(id, date) {
            Designation::Chief
        } else {
            Designation::Associate
        }
    }

    /// Resolve, then attach the designation to a resolved identity.
    pub fn authorship(&self, raw_signature: &str, date: NaiveDate, per_curiam: bool) -> Authorship {
        let resolution = self.resolve(raw_signature, date, per_curiam);
        let designation = resolution.justice_id().map(|id| self.designation(id, date));
        Authorship {
            resolution,
            designation,
        }
    }
}
