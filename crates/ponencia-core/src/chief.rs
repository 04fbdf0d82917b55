//! Chief tenures derived from successive chief-appointment dates.
//!
//! A chief's tenure runs from their appointment to the day before the next
//! later appointment, cut short by their own inactive date when that comes
//! first. The last chief in the sequence has an open tenure unless they have
//! left the court.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::warn;

use crate::date::whole_years;
use crate::justice::{JusticeId, Registry};

/// One row of the chief tenure table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChiefTenure {
    pub justice_id: JusticeId,
    pub chief_start: NaiveDate,
    /// Last day as chief, inclusive. `None` while the tenure is open.
    pub chief_end: Option<NaiveDate>,
    pub years_as_chief: Option<u32>,
}

impl ChiefTenure {
    /// Whether the chief designation was effective on `date`.
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.chief_start <= date && self.chief_end.is_none_or(|end| date <= end)
    }
}

/// Compute tenures for every justice with a chief-designation date, ordered
/// by appointment (ties broken by justice id).
pub fn chief_tenures(registry: &Registry) -> Vec<ChiefTenure> {
    let mut chiefs: Vec<(NaiveDate, JusticeId, Option<NaiveDate>)> = registry
        .iter()
        .filter_map(|j| j.chief_date.map(|d| (d, j.id, j.inactive_date)))
        .collect();
    chiefs.sort_unstable_by_key(|&(start, id, _)| (start, id));

    for pair in chiefs.windows(2) {
        if pair[0].0 == pair[1].0 {
            warn!(
                chief_start = %pair[0].0,
                first = pair[0].1,
                second = pair[1].1,
                "duplicate chief appointment date"
            );
        }
    }

    chiefs
        .iter()
        .enumerate()
        .map(|(i, &(chief_start, justice_id, inactive))| {
            let computed_end = chiefs[i + 1..]
                .iter()
                .find(|(next, _, _)| *next > chief_start)
                .and_then(|(next, _, _)| next.pred_opt());
            let chief_end = match (computed_end, inactive) {
                (Some(end), Some(inactive)) => Some(end.min(inactive)),
                (end, inactive) => end.or(inactive),
            };
            if let Some(end) = chief_end
                && end < chief_start
            {
                warn!(justice_id, %chief_start, chief_end = %end, "chief tenure ends before it starts");
            }
            ChiefTenure {
                justice_id,
                chief_start,
                chief_end,
                years_as_chief: chief_end.map(|end| whole_years(chief_start, end)),
            }
        })
        .collect()
}

/// Chief tenures indexed for designation lookups.
#[derive(Debug, Clone, Default)]
pub struct ChiefTenures {
    tenures: Vec<ChiefTenure>,
}

impl ChiefTenures {
    pub fn compute(registry: &Registry) -> Self {
        Self {
            tenures: chief_tenures(registry),
        }
    }

    pub fn as_slice(&self) -> &[ChiefTenure] {
        &self.tenures
    }

    pub fn len(&self) -> usize {
        self.tenures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tenures.is_empty()
    }

    pub fn for_justice(&self, id: JusticeId) -> Option<&ChiefTenure> {
        self.tenures.iter().find(|t| t.justice_id == id)
    }

    /// Whether `id` held the chief designation on `date`.
    pub fn is_chief_on(&self, id: JusticeId, date: NaiveDate) -> bool {
        self.for_justice(id).is_some_and(|t| t.covers(date))
    }
}
