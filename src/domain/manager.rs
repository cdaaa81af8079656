//! In-memory collection of requirements documents
//!
//! The [`Manager`] keeps records in insertion order and answers every query
//! with a linear scan.

use std::{collections::HashSet, path::Path};

use chrono::Utc;
use tracing::instrument;

use crate::{
    domain::{Category, NewRecord, Record, Statistics, Status, record::generate_id, samples},
    storage::{ExportError, ExportFormat, ImportError, export},
};

/// An ordered, in-memory collection of [`Record`]s.
///
/// There is no deletion. Records are appended by [`Manager::add`] and only
/// their status changes afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manager {
    records: Vec<Record>,
}

impl Manager {
    /// Creates an empty manager.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Creates a manager seeded with the five fixture records.
    #[must_use]
    pub fn with_sample_records() -> Self {
        let mut manager = Self::new();
        manager.seed_sample_records();
        manager
    }

    /// Appends the fixture records to the collection.
    pub fn seed_sample_records(&mut self) {
        for record in samples::sample_records() {
            self.add(record);
        }
    }

    /// Parses an export back into a manager.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid export, or if two records
    /// share an identifier.
    pub fn import(text: &str, format: ExportFormat) -> Result<Self, ImportError> {
        let records = export::from_text(text, format)?;

        let mut seen = HashSet::with_capacity(records.len());
        if let Some(duplicate) = records.iter().find(|record| !seen.insert(record.id())) {
            return Err(ImportError::DuplicateId(duplicate.id().to_string()));
        }

        tracing::debug!("Imported {} records", records.len());
        Ok(Self { records })
    }

    /// Adds a record and returns its identifier.
    ///
    /// The identifier is always generated, and never collides with a record
    /// already in the collection. Any identifier or status on the input is
    /// ignored: new records start as [`Status::Draft`].
    #[instrument(level = "debug", skip(self, record), fields(title = %record.title))]
    pub fn add(&mut self, mut record: NewRecord) -> String {
        let mut id = generate_id();
        while self.find_by_id(&id).is_some() {
            id = generate_id();
        }
        record.id = Some(id);
        record.status = Status::Draft;

        let record = Record::from(record);
        let id = record.id().to_string();
        tracing::info!("PRD '{}' added with ID {id}", record.title());
        self.records.push(record);
        id
    }

    /// Sets the status of the record with the given identifier.
    ///
    /// Returns `false`, and changes nothing, if there is no such record.
    #[instrument(level = "debug", skip(self))]
    pub fn update_status(&mut self, id: &str, status: Status) -> bool {
        let Some(record) = self.records.iter_mut().find(|record| record.id() == id) else {
            tracing::warn!("PRD with ID {id} not found");
            return false;
        };

        record.set_status(status, Utc::now());
        tracing::info!("PRD {id} status updated to {status}");
        true
    }

    /// The first record with the given identifier.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&Record> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Every record with the given status, in collection order.
    #[must_use]
    pub fn filter_by_status(&self, status: Status) -> Vec<&Record> {
        self.filter(|record| record.status() == status)
    }

    /// Every record in the given category, in collection order.
    #[must_use]
    pub fn filter_by_category(&self, category: Category) -> Vec<&Record> {
        self.filter(|record| record.category() == category)
    }

    /// Every record with the given priority, in collection order.
    #[must_use]
    pub fn filter_by_priority(&self, priority: u8) -> Vec<&Record> {
        self.filter(|record| record.priority() == priority)
    }

    /// Records whose title or description contains `term`, ignoring case.
    ///
    /// An empty term matches every record.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<&Record> {
        let term = term.to_lowercase();
        let matches = self.filter(|record| {
            record.title().to_lowercase().contains(&term)
                || record.description().to_lowercase().contains(&term)
        });
        tracing::debug!("Search for '{term}' matched {} records", matches.len());
        matches
    }

    /// Summary statistics over the whole collection.
    #[must_use]
    pub fn statistics(&self) -> Statistics {
        Statistics::from_records(&self.records)
    }

    /// Exports the collection as pretty-printed JSON.
    ///
    /// If a path is given the text is also written there.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn export(&self, path: Option<&Path>) -> Result<String, ExportError> {
        self.export_as(ExportFormat::Json, path)
    }

    /// Exports the collection in the given format.
    ///
    /// If a path is given the text is also written there.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    #[instrument(level = "debug", skip(self))]
    pub fn export_as(
        &self,
        format: ExportFormat,
        path: Option<&Path>,
    ) -> Result<String, ExportError> {
        let text = export::to_text(&self.records, format)?;
        if let Some(path) = path {
            export::write_text(path, &text)?;
        }
        Ok(text)
    }

    /// All records, in insertion order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// The number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn filter(&self, predicate: impl Fn(&Record) -> bool) -> Vec<&Record> {
        self.records
            .iter()
            .filter(|record| predicate(record))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, HashSet};

    use chrono::{TimeZone, Utc};

    use super::*;

    fn titles<'a>(records: &[&'a Record]) -> Vec<&'a str> {
        records.iter().map(|record| record.title()).collect()
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert!(manager.is_empty());
        assert_eq!(manager.statistics().total, 0);
    }

    #[test]
    fn add_returns_retrievable_record() {
        let mut manager = Manager::new();
        let id = manager.add(
            NewRecord::new("Search", "Full text search", "Dev Team", Category::Feature)
                .with_priority(2)
                .with_effort(13),
        );

        let record = manager.find_by_id(&id).expect("record should exist");
        assert_eq!(record.id(), id);
        assert_eq!(record.title(), "Search");
        assert_eq!(record.description(), "Full text search");
        assert_eq!(record.author(), "Dev Team");
        assert_eq!(record.category(), Category::Feature);
        assert_eq!(record.priority(), 2);
        assert_eq!(record.estimated_effort(), 13);
        assert_eq!(record.status(), Status::Draft);
        assert_eq!(record.created_date(), record.last_modified());
    }

    #[test]
    fn add_defaults_priority_and_effort() {
        let mut manager = Manager::new();
        let id = manager.add(NewRecord::new("t", "d", "a", Category::Maintenance));

        let record = manager.find_by_id(&id).unwrap();
        assert_eq!(record.priority(), 3);
        assert_eq!(record.estimated_effort(), 0);
    }

    #[test]
    fn generated_ids_are_unique() {
        let mut manager = Manager::new();
        let ids: HashSet<String> = (0..500)
            .map(|i| manager.add(NewRecord::new(format!("PRD {i}"), "", "", Category::Feature)))
            .collect();

        assert_eq!(ids.len(), 500);
        assert_eq!(manager.len(), 500);
    }

    #[test]
    fn update_status_on_known_id() {
        let mut manager = Manager::with_sample_records();
        let id = manager.records()[0].id().to_string();
        let before = manager.records()[0].last_modified();

        assert!(manager.update_status(&id, Status::InReview));

        let record = manager.find_by_id(&id).unwrap();
        assert_eq!(record.status(), Status::InReview);
        assert!(record.last_modified() >= before);
        assert!(record.last_modified() >= record.created_date());
    }

    #[test]
    fn update_status_on_unknown_id_changes_nothing() {
        let mut manager = Manager::with_sample_records();
        let before = manager.clone();

        assert!(!manager.update_status("PRD-missing", Status::Approved));
        assert_eq!(manager, before);
    }

    #[test]
    fn find_by_unknown_id_is_none() {
        let manager = Manager::with_sample_records();
        assert!(manager.find_by_id("PRD-missing").is_none());
    }

    #[test]
    fn status_filters_partition_the_collection() {
        let mut manager = Manager::with_sample_records();
        let ids: Vec<String> = manager
            .records()
            .iter()
            .map(|record| record.id().to_string())
            .collect();
        manager.update_status(&ids[1], Status::Approved);
        manager.update_status(&ids[3], Status::Archived);
        manager.update_status(&ids[4], Status::Approved);

        let mut seen = Vec::new();
        for status in Status::ALL {
            for record in manager.filter_by_status(status) {
                assert_eq!(record.status(), status);
                seen.push(record.id().to_string());
            }
        }

        seen.sort();
        let mut expected = ids;
        expected.sort();
        assert_eq!(seen, expected);
    }

    #[test]
    fn filter_by_category_keeps_collection_order() {
        let manager = Manager::with_sample_records();

        assert_eq!(
            titles(&manager.filter_by_category(Category::Feature)),
            ["User Authentication", "Payment Gateway"]
        );
        assert!(manager.filter_by_category(Category::Maintenance).is_empty());
    }

    #[test]
    fn filter_by_priority() {
        let manager = Manager::with_sample_records();

        assert_eq!(
            titles(&manager.filter_by_priority(2)),
            ["Dark Mode Theme", "Mobile App Redesign"]
        );
        assert!(manager.filter_by_priority(3).is_empty());
    }

    #[test]
    fn search_matches_title_or_description_ignoring_case() {
        let manager = Manager::with_sample_records();

        assert_eq!(
            titles(&manager.search("login")),
            ["User Authentication", "Bug Fix: Login Error"]
        );
        assert_eq!(titles(&manager.search("LOGIN")), titles(&manager.search("login")));
        assert_eq!(titles(&manager.search("Theme")), ["Dark Mode Theme"]);
        assert!(manager.search("blockchain").is_empty());
    }

    #[test]
    fn empty_search_matches_everything() {
        let manager = Manager::with_sample_records();
        assert_eq!(manager.search("").len(), manager.len());
    }

    #[test]
    fn sample_statistics() {
        let manager = Manager::with_sample_records();
        let stats = manager.statistics();

        assert_eq!(stats.total, 5);
        assert_eq!(stats.by_priority, BTreeMap::from([(1, 3), (2, 2), (3, 0)]));
        assert_eq!(
            stats.by_status,
            BTreeMap::from([
                (Status::Draft, 5),
                (Status::InReview, 0),
                (Status::Approved, 0),
                (Status::Implemented, 0),
                (Status::Archived, 0),
            ])
        );
        assert_eq!(
            stats.by_category,
            BTreeMap::from([
                (Category::Feature, 2),
                (Category::BugFix, 1),
                (Category::Enhancement, 1),
                (Category::NewProduct, 1),
                (Category::Maintenance, 0),
            ])
        );
        assert!((stats.average_effort - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn statistics_total_tracks_length() {
        let mut manager = Manager::with_sample_records();
        manager.add(NewRecord::new("t", "d", "a", Category::Maintenance));

        assert_eq!(manager.statistics().total, manager.len());
        assert_eq!(manager.statistics().total, 6);
    }

    #[test]
    fn export_round_trips_records() {
        let mut manager = Manager::with_sample_records();
        let id = manager.records()[2].id().to_string();
        manager.update_status(&id, Status::Implemented);

        let text = manager.export(None).unwrap();
        let imported = Manager::import(&text, ExportFormat::Json).unwrap();

        assert_eq!(imported, manager);
        assert!(text.contains("\"status\": \"Implemented\""));
        assert!(text.contains("\"category\": \"New Product\""));
    }

    #[test]
    fn export_writes_file_and_returns_text() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("prds.yaml");
        let manager = Manager::with_sample_records();

        let text = manager.export_as(ExportFormat::Yaml, Some(&path)).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), text);
        let imported = Manager::import(&text, ExportFormat::Yaml).unwrap();
        assert_eq!(imported, manager);
    }

    #[test]
    fn export_to_unwritable_path_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let manager = Manager::with_sample_records();

        let result = manager.export(Some(tmp.path()));
        assert!(matches!(result, Err(ExportError::Write { .. })));
    }

    #[test]
    fn import_rejects_duplicate_ids() {
        let created = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let records: Vec<Record> = (0..2)
            .map(|_| {
                Record::from(
                    NewRecord::new("t", "d", "a", Category::Feature)
                        .with_id("PRD-deadbeef")
                        .with_created_date(created),
                )
            })
            .collect();
        let text = export::to_text(&records, ExportFormat::Json).unwrap();

        let error = Manager::import(&text, ExportFormat::Json).unwrap_err();
        assert!(matches!(error, ImportError::DuplicateId(id) if id == "PRD-deadbeef"));
    }

    #[test]
    fn add_generates_id_even_when_one_is_supplied() {
        let mut manager = Manager::new();
        let first = manager.add(NewRecord::new("a", "", "", Category::Feature).with_id("PRD-dup"));
        let second = manager.add(NewRecord::new("b", "", "", Category::Feature).with_id("PRD-dup"));

        assert_ne!(first, second);
        assert_ne!(first, "PRD-dup");
        assert!(manager.find_by_id("PRD-dup").is_none());

        let text = manager.export(None).unwrap();
        let imported = Manager::import(&text, ExportFormat::Json).unwrap();
        assert_eq!(imported, manager);
    }

    #[test]
    fn add_always_starts_in_draft() {
        let mut manager = Manager::new();
        let id = manager.add(
            NewRecord::new("t", "d", "a", Category::Maintenance).with_status(Status::Archived),
        );

        assert_eq!(manager.find_by_id(&id).unwrap().status(), Status::Draft);
    }

    #[test]
    fn import_raises_last_modified_to_created_date() {
        let text = r#"[{
            "title": "t", "description": "d", "author": "a",
            "category": "Feature", "status": "Approved", "id": "PRD-00000001",
            "created_date": "2025-07-14T07:15:00Z",
            "last_modified": "2025-07-13T07:15:00Z",
            "version": "1.0.0", "priority": 1, "estimated_effort": 0
        }]"#;

        let manager = Manager::import(text, ExportFormat::Json).unwrap();
        let record = manager.find_by_id("PRD-00000001").unwrap();

        assert_eq!(record.status(), Status::Approved);
        assert_eq!(record.last_modified(), record.created_date());
    }
}
