use crate::models::LogEntry;
use crate::normalize;
use crate::stats;
use crate::storage::KvStorage;
use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::warn;

/// How entry lists map onto storage keys. The early revisions of the page kept
/// every entry under one fixed key; later ones keep one key per month.
#[derive(Debug, Clone)]
pub enum Partitioning {
    SingleKey(String),
    ByMonth { prefix: String },
}

impl Partitioning {
    fn key_for(&self, month: &str) -> String {
        match self {
            Partitioning::SingleKey(key) => key.clone(),
            Partitioning::ByMonth { prefix } => format!("{prefix}_{month}"),
        }
    }
}

/// Owns the in-memory entry list for the active month partition and keeps it
/// in sync with the injected key-value storage. All mutators validate input,
/// fail silently on anything invalid, and persist on success.
pub struct EntryStore {
    storage: Box<dyn KvStorage>,
    partitioning: Partitioning,
    entries: Vec<LogEntry>,
    active_month: String,
    loaded: bool,
    editing: Option<String>,
}

impl EntryStore {
    pub fn new(storage: Box<dyn KvStorage>, partitioning: Partitioning) -> Self {
        Self {
            storage,
            partitioning,
            entries: Vec::new(),
            active_month: String::new(),
            loaded: false,
            editing: None,
        }
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn active_month(&self) -> &str {
        &self.active_month
    }

    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    /// Replaces the in-memory list with the partition's persisted contents.
    /// Absent or malformed stored values become an empty list; individual
    /// malformed elements are skipped.
    pub fn load(&mut self, month: &str) {
        let key = self.partitioning.key_for(month);
        self.entries = decode(self.storage.get(&key));
        self.active_month = month.to_string();
        self.loaded = true;
        self.editing = None;
    }

    /// Makes `month` the active partition, loading it if needed. Every
    /// mutator persists before returning, so there is nothing to flush at the
    /// point of switching.
    pub fn switch_month(&mut self, month: &str) {
        if !self.loaded {
            self.load(month);
            return;
        }
        if self.active_month == month {
            return;
        }
        if matches!(self.partitioning, Partitioning::ByMonth { .. }) {
            self.load(month);
        } else {
            // One global list; the month only scopes aggregation.
            self.active_month = month.to_string();
        }
    }

    /// Adds an entry after normalizing both inputs. Invalid date text,
    /// unparseable hours, and hours <= 0 are silently rejected. The new entry
    /// is prepended and the list re-sorted by date descending; the sort is
    /// stable, so entries sharing a date stay in reverse-insertion order.
    pub fn add(&mut self, date_raw: &str, hours_raw: &str) -> bool {
        let Some(date) = normalize::normalize_date(date_raw) else {
            return false;
        };
        let Some(hours) = normalize::parse_hours(hours_raw) else {
            return false;
        };
        if hours <= 0.0 {
            return false;
        }

        let month = normalize::month_of(&date).to_string();
        self.switch_month(&month);

        self.entries.insert(
            0,
            LogEntry {
                id: next_id(),
                date,
                hours,
            },
        );
        self.entries.sort_by(|a, b| b.date.cmp(&a.date));
        self.persist();
        true
    }

    pub fn begin_edit(&mut self, id: &str) {
        if self.entries.iter().any(|entry| entry.id == id) {
            self.editing = Some(id.to_string());
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Replaces the target entry's hours in place; id and date are immutable.
    /// Silently rejects unparseable or non-positive hours and unknown ids.
    pub fn edit(&mut self, id: &str, hours_raw: &str) -> bool {
        let Some(hours) = normalize::parse_hours(hours_raw) else {
            return false;
        };
        if hours <= 0.0 {
            return false;
        }
        let Some(entry) = self.entries.iter_mut().find(|entry| entry.id == id) else {
            return false;
        };
        entry.hours = hours;
        self.editing = None;
        self.persist();
        true
    }

    /// Deletes the entry; cancels edit mode if it targeted the same entry.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        if self.entries.len() == before {
            return false;
        }
        if self.editing.as_deref() == Some(id) {
            self.editing = None;
        }
        self.persist();
        true
    }

    /// Empties the active partition and cancels any in-progress edit.
    pub fn clear_all(&mut self) {
        self.entries.clear();
        self.editing = None;
        self.persist();
    }

    /// The report table for a month: that month's entries, date ascending.
    pub fn month_entries(&mut self, month: &str) -> Vec<LogEntry> {
        self.switch_month(month);
        stats::month_slice(&self.entries, month)
    }

    /// Months with recorded data, most recent first.
    pub fn months_available(&self) -> Vec<String> {
        match &self.partitioning {
            Partitioning::ByMonth { prefix } => {
                stats::months_from_keys(&self.storage.keys(), prefix)
            }
            Partitioning::SingleKey(_) => {
                let mut months: Vec<String> = self
                    .entries
                    .iter()
                    .map(|entry| normalize::month_of(&entry.date).to_string())
                    .collect();
                months.sort_by(|a, b| b.cmp(a));
                months.dedup();
                months
            }
        }
    }

    /// Serializes the list to the active partition's key. Never runs before
    /// the first `load`, so a load in flight cannot be clobbered with default
    /// state. Failures are swallowed; persistence is best-effort.
    pub fn persist(&mut self) {
        if !self.loaded {
            return;
        }
        let key = self.partitioning.key_for(&self.active_month);
        match serde_json::to_string(&self.entries) {
            Ok(payload) => self.storage.set(&key, &payload),
            Err(err) => warn!("failed to serialize entries: {err}"),
        }
    }
}

fn decode(value: Option<String>) -> Vec<LogEntry> {
    let Some(raw) = value else {
        return Vec::new();
    };
    let Ok(serde_json::Value::Array(items)) = serde_json::from_str(&raw) else {
        return Vec::new();
    };
    items
        .into_iter()
        .filter_map(|item| serde_json::from_value::<LogEntry>(item).ok())
        .filter(|entry| {
            !entry.id.is_empty()
                && normalize::is_canonical_date(&entry.date)
                && entry.hours.is_finite()
                && entry.hours > 0.0
        })
        .collect()
}

/// Fresh opaque id: creation time plus a process-wide counter, so ids are
/// unique and never reused even within one millisecond.
fn next_id() -> String {
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let seq = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{:x}-{:x}", Utc::now().timestamp_millis(), seq)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats;
    use crate::storage::MemoryStorage;

    fn month_store() -> EntryStore {
        let mut store = EntryStore::new(
            Box::new(MemoryStorage::default()),
            Partitioning::ByMonth {
                prefix: "worklog".to_string(),
            },
        );
        store.load("2026-01");
        store
    }

    #[test]
    fn add_normalizes_date_and_full_width_hours() {
        let mut store = month_store();
        assert!(store.add("2026/01/05", "2.5"));
        assert!(store.add("2026-01-10", "１０"));

        let entries = store.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].date, "2026-01-10");
        assert_eq!(entries[0].hours, 10.0);
        assert_eq!(entries[1].date, "2026-01-05");
        assert_eq!(entries[1].hours, 2.5);
        assert_eq!(stats::total(entries), 12.5);
    }

    #[test]
    fn add_rejects_invalid_input_without_side_effects() {
        let mut store = month_store();
        store.add("2026/01/05", "3");
        let before_total = stats::total(store.entries());

        assert!(!store.add("2026/13/05", "3"));
        assert!(!store.add("not a date", "3"));
        assert!(!store.add("2026/01/06", "abc"));
        assert!(!store.add("2026/01/06", "0"));
        assert!(!store.add("2026/01/06", "-1"));

        assert_eq!(store.entries().len(), 1);
        assert_eq!(stats::total(store.entries()), before_total);
    }

    #[test]
    fn entries_sorted_date_descending_with_reverse_insertion_ties() {
        let mut store = month_store();
        store.add("2026/01/05", "1");
        store.add("2026/01/10", "2");
        store.add("2026/01/05", "3");
        store.add("2026/01/05", "4");

        let dates: Vec<&str> = store.entries().iter().map(|e| e.date.as_str()).collect();
        assert_eq!(
            dates,
            ["2026-01-10", "2026-01-05", "2026-01-05", "2026-01-05"]
        );
        // same-date entries: most recently added first
        let same_day_hours: Vec<f64> = store
            .entries()
            .iter()
            .filter(|e| e.date == "2026-01-05")
            .map(|e| e.hours)
            .collect();
        assert_eq!(same_day_hours, [4.0, 3.0, 1.0]);
    }

    #[test]
    fn add_then_remove_restores_previous_list() {
        let mut store = month_store();
        store.add("2026/01/05", "2");
        store.add("2026/01/10", "3");
        let before: Vec<(String, f64)> = store
            .entries()
            .iter()
            .map(|e| (e.id.clone(), e.hours))
            .collect();

        assert!(store.add("2026/01/07", "4"));
        let added_id = store
            .entries()
            .iter()
            .find(|e| e.date == "2026-01-07")
            .unwrap()
            .id
            .clone();
        assert!(store.remove(&added_id));

        let after: Vec<(String, f64)> = store
            .entries()
            .iter()
            .map(|e| (e.id.clone(), e.hours))
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn edit_replaces_hours_only_and_exits_edit_mode() {
        let mut store = month_store();
        store.add("2026/01/05", "2");
        let entry = store.entries()[0].clone();

        store.begin_edit(&entry.id);
        assert_eq!(store.editing(), Some(entry.id.as_str()));

        assert!(store.edit(&entry.id, "３．５"));
        assert_eq!(store.editing(), None);
        let updated = &store.entries()[0];
        assert_eq!(updated.id, entry.id);
        assert_eq!(updated.date, entry.date);
        assert_eq!(updated.hours, 3.5);
    }

    #[test]
    fn edit_rejects_invalid_hours_silently() {
        let mut store = month_store();
        store.add("2026/01/05", "2");
        let id = store.entries()[0].id.clone();

        assert!(!store.edit(&id, "zero"));
        assert!(!store.edit(&id, "0"));
        assert!(!store.edit("missing", "5"));
        assert_eq!(store.entries()[0].hours, 2.0);
    }

    #[test]
    fn remove_cancels_edit_of_the_removed_entry() {
        let mut store = month_store();
        store.add("2026/01/05", "2");
        store.add("2026/01/06", "3");
        let id = store.entries()[0].id.clone();

        store.begin_edit(&id);
        store.remove(&id);
        assert_eq!(store.editing(), None);
        assert_eq!(store.entries().len(), 1);
    }

    #[test]
    fn clear_all_empties_partition_and_persists_empty_array() {
        let mut storage = MemoryStorage::default();
        storage.set("worklog_2026-01", r#"[{"id":"a","date":"2026-01-05","hours":2.0}]"#);
        let mut store = EntryStore::new(
            Box::new(storage),
            Partitioning::ByMonth {
                prefix: "worklog".to_string(),
            },
        );
        store.load("2026-01");
        store.add("2026/01/06", "3");
        store.add("2026/01/07", "4");
        assert_eq!(store.entries().len(), 3);

        store.clear_all();
        assert!(store.entries().is_empty());
        store.load("2026-01");
        assert!(store.entries().is_empty());
        assert_eq!(stats::Severity::for_total(stats::total(store.entries())), stats::Severity::Normal);
    }

    #[test]
    fn partitions_are_isolated() {
        let mut store = month_store();
        store.add("2026/01/05", "2");
        let january: Vec<String> = store.entries().iter().map(|e| e.id.clone()).collect();

        store.switch_month("2026-02");
        assert!(store.entries().is_empty());
        store.add("2026/02/03", "8");
        store.clear_all();
        store.add("2026/02/04", "1");

        store.switch_month("2026-01");
        let back: Vec<String> = store.entries().iter().map(|e| e.id.clone()).collect();
        assert_eq!(january, back);
        assert_eq!(stats::total(store.entries()), 2.0);
    }

    #[test]
    fn add_with_other_month_date_switches_partition() {
        let mut store = month_store();
        store.add("2026/01/05", "2");
        assert!(store.add("2026/02/01", "4"));
        assert_eq!(store.active_month(), "2026-02");
        assert_eq!(store.entries().len(), 1);

        store.switch_month("2026-01");
        assert_eq!(store.entries().len(), 1);
        assert_eq!(store.entries()[0].hours, 2.0);
    }

    #[test]
    fn persist_is_a_no_op_before_first_load() {
        let mut store = EntryStore::new(
            Box::new(MemoryStorage::default()),
            Partitioning::ByMonth {
                prefix: "worklog".to_string(),
            },
        );
        store.persist();
        store.load("2026-01");
        assert!(store.entries().is_empty());
    }

    #[test]
    fn corrupt_or_absent_stored_values_load_as_empty() {
        let mut storage = MemoryStorage::default();
        storage.set("worklog_2026-01", "{not json");
        storage.set("worklog_2026-02", r#"{"shape":"wrong"}"#);
        storage.set(
            "worklog_2026-03",
            r#"[{"id":"a","date":"2026-03-01","hours":2.0},{"bad":true},{"id":"b","date":"2026-03-02","hours":-1.0}]"#,
        );
        let mut store = EntryStore::new(
            Box::new(storage),
            Partitioning::ByMonth {
                prefix: "worklog".to_string(),
            },
        );

        store.load("2026-01");
        assert!(store.entries().is_empty());
        store.load("2026-02");
        assert!(store.entries().is_empty());
        // valid elements survive, malformed and non-positive ones are dropped
        store.load("2026-03");
        assert_eq!(store.entries().len(), 1);
        assert_eq!(store.entries()[0].id, "a");
    }

    #[test]
    fn malformed_dates_are_dropped_on_load() {
        let mut storage = MemoryStorage::default();
        storage.set(
            "worklog_v1",
            r#"[{"id":"a","date":"あいうえお","hours":2.0},{"id":"b","date":"2026/01/05","hours":1.0},{"id":"c","date":"2026-01-05","hours":3.0}]"#,
        );
        let mut store = EntryStore::new(
            Box::new(storage),
            Partitioning::SingleKey("worklog_v1".to_string()),
        );
        store.load("2026-01");

        // only the canonical-date entry survives, and month enumeration
        // stays panic-free over whatever was stored
        assert_eq!(store.entries().len(), 1);
        assert_eq!(store.entries()[0].id, "c");
        assert_eq!(store.months_available(), vec!["2026-01".to_string()]);
    }

    #[test]
    fn months_available_lists_partitions_descending() {
        let mut store = month_store();
        store.add("2026/01/05", "2");
        store.add("2025/11/20", "3");
        store.add("2026/03/01", "1");
        assert_eq!(
            store.months_available(),
            vec!["2026-03".to_string(), "2026-01".to_string(), "2025-11".to_string()]
        );
    }

    #[test]
    fn single_key_mode_keeps_one_global_list() {
        let mut store = EntryStore::new(
            Box::new(MemoryStorage::default()),
            Partitioning::SingleKey("worklog_v1".to_string()),
        );
        store.load("2026-01");
        store.add("2026/01/05", "2");
        store.add("2026/02/10", "4");

        // both months live in the same list, month views are filtered slices
        assert_eq!(store.entries().len(), 2);
        assert_eq!(store.month_entries("2026-01").len(), 1);
        assert_eq!(store.month_entries("2026-02").len(), 1);
        assert_eq!(
            store.months_available(),
            vec!["2026-02".to_string(), "2026-01".to_string()]
        );

        // switching the month view does not drop the global list
        store.switch_month("2026-03");
        assert_eq!(store.entries().len(), 2);
    }

    #[test]
    fn ids_are_unique_across_entries() {
        let mut store = month_store();
        for _ in 0..20 {
            store.add("2026/01/05", "1");
        }
        let mut ids: Vec<&str> = store.entries().iter().map(|e| e.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 20);
    }
}
