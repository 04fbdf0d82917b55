//! Decision and opinion records as exchanged with upstream collectors.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date::parse_date;
use crate::error::RecordError;
use crate::justice::JusticeId;
use crate::ponente::{Authorship, Designation, RawPonente, Resolution};

/// A decision as it arrives from the source, before validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DecisionRecord {
    pub id: String,
    pub date: Option<String>,
    pub raw_ponente: Option<String>,
    #[serde(default)]
    pub per_curiam: bool,
}

impl DecisionRecord {
    /// Validate the record. A per curiam marker in the author field sets the
    /// flag even when the source left it false.
    pub fn into_decision(self) -> Result<Decision, RecordError> {
        let raw_date = self.date.as_deref().map(str::trim).filter(|d| !d.is_empty());
        let date = parse_date("date", raw_date.ok_or(RecordError::Missing("date"))?)?;
        let detected = RawPonente::extract(self.raw_ponente.as_deref());
        let per_curiam = self.per_curiam || detected.as_ref().is_some_and(|p| p.per_curiam);
        Ok(Decision {
            id: self.id,
            date,
            raw_ponente: self.raw_ponente.filter(|r| !r.trim().is_empty()),
            per_curiam,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    pub id: String,
    pub date: NaiveDate,
    pub raw_ponente: Option<String>,
    pub per_curiam: bool,
}

/// A decision with its authorship attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedDecision {
    #[serde(flatten)]
    pub decision: Decision,
    pub justice_id: Option<JusticeId>,
    pub designation: Option<Designation>,
    pub resolution: Resolution,
}

impl ResolvedDecision {
    pub fn new(decision: Decision, authorship: Authorship) -> Self {
        Self {
            justice_id: authorship.resolution.justice_id(),
            designation: authorship.designation,
            resolution: authorship.resolution,
            decision,
        }
    }

    /// Candidate ids when the signature matched more than one justice.
    pub fn candidates(&self) -> &[JusticeId] {
        match &self.resolution {
            Resolution::Ambiguous(ids) => ids,
            _ => &[],
        }
    }
}

/// Text of one opinion belonging to a decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opinion {
    pub id: String,
    pub decision_id: String,
    pub text: String,
}
