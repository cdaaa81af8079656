use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::{Category, Record, Status, record::priority};

/// Summary counts over a collection of records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    /// Number of records.
    pub total: usize,
    /// Count per status. Every status is present, including those with no
    /// records.
    pub by_status: BTreeMap<Status, usize>,
    /// Count per category. Every category is present.
    pub by_category: BTreeMap<Category, usize>,
    /// Count per priority. Keys 1, 2 and 3 are always present; any other
    /// priority in use gets its own key.
    pub by_priority: BTreeMap<u8, usize>,
    /// Mean estimated effort, or 0 for an empty collection.
    pub average_effort: f64,
}

impl Statistics {
    /// Computes statistics over the given records.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_records(records: &[Record]) -> Self {
        let mut by_status: BTreeMap<Status, usize> =
            Status::ALL.into_iter().map(|status| (status, 0)).collect();
        let mut by_category: BTreeMap<Category, usize> = Category::ALL
            .into_iter()
            .map(|category| (category, 0))
            .collect();
        let mut by_priority: BTreeMap<u8, usize> = [priority::HIGH, priority::MEDIUM, priority::LOW]
            .into_iter()
            .map(|level| (level, 0))
            .collect();

        let mut effort: u64 = 0;
        for record in records {
            *by_status.entry(record.status()).or_default() += 1;
            *by_category.entry(record.category()).or_default() += 1;
            *by_priority.entry(record.priority()).or_default() += 1;
            effort += u64::from(record.estimated_effort());
        }

        let average_effort = if records.is_empty() {
            0.0
        } else {
            effort as f64 / records.len() as f64
        };

        Self {
            total: records.len(),
            by_status,
            by_category,
            by_priority,
            average_effort,
        }
    }
}
