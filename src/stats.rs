use crate::models::LogEntry;
use crate::normalize;

/// Sum of hours over the list, 0 for an empty list.
pub fn total(entries: &[LogEntry]) -> f64 {
    entries.iter().map(|entry| entry.hours).sum()
}

#[derive(Debug, Clone)]
pub struct DateGroup {
    pub date: String,
    pub entries: Vec<LogEntry>,
    pub subtotal: f64,
}

/// Groups entries by date, preserving both the order in which dates first
/// appear and the relative order of entries within a date. Used by the
/// print-friendly view.
pub fn group_by_date(entries: &[LogEntry]) -> Vec<DateGroup> {
    let mut groups: Vec<DateGroup> = Vec::new();
    for entry in entries {
        match groups.iter_mut().find(|group| group.date == entry.date) {
            Some(group) => {
                group.subtotal += entry.hours;
                group.entries.push(entry.clone());
            }
            None => groups.push(DateGroup {
                date: entry.date.clone(),
                entries: vec![entry.clone()],
                subtotal: entry.hours,
            }),
        }
    }
    groups
}

/// The report view's month filter: entries whose date falls in `month`
/// (`YYYY-MM`), sorted date ascending for the table.
pub fn month_slice(entries: &[LogEntry], month: &str) -> Vec<LogEntry> {
    let mut slice: Vec<LogEntry> = entries
        .iter()
        .filter(|entry| entry.date.starts_with(month))
        .cloned()
        .collect();
    slice.sort_by(|a, b| a.date.cmp(&b.date));
    slice
}

/// Extracts the `YYYY-MM` suffixes of partition keys matching
/// `<prefix>_<YYYY-MM>`, most recent month first.
pub fn months_from_keys(keys: &[String], prefix: &str) -> Vec<String> {
    let lead = format!("{prefix}_");
    let mut months: Vec<String> = keys
        .iter()
        .filter_map(|key| key.strip_prefix(&lead))
        .filter(|suffix| normalize::is_month_key(suffix))
        .map(str::to_string)
        .collect();
    months.sort_by(|a, b| b.cmp(a));
    months
}

/// Classification of a month's total hours, driving the mascot reaction on
/// the report page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Normal,
    Sweating,
    Pale,
    Exhausted,
}

impl Severity {
    pub fn for_total(total: f64) -> Self {
        if total <= 50.0 {
            Severity::Normal
        } else if total <= 100.0 {
            Severity::Sweating
        } else if total <= 150.0 {
            Severity::Pale
        } else {
            Severity::Exhausted
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Severity::Normal => "normal",
            Severity::Sweating => "sweating",
            Severity::Pale => "pale",
            Severity::Exhausted => "exhausted",
        }
    }

    /// The mascot's one-liner for the month.
    pub fn message(self) -> &'static str {
        match self {
            Severity::Normal => "Steady progress. Keep it up.",
            Severity::Sweating => "Good work this month.",
            Severity::Pale => "...isn't that a bit much?",
            Severity::Exhausted => "...please don't overdo it...",
        }
    }

    /// Shake animation intensity: 0 quiet, 1 trembling, 2 strong.
    pub fn shake_level(self) -> u8 {
        match self {
            Severity::Normal | Severity::Sweating => 0,
            Severity::Pale => 1,
            Severity::Exhausted => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, date: &str, hours: f64) -> LogEntry {
        LogEntry {
            id: id.to_string(),
            date: date.to_string(),
            hours,
        }
    }

    #[test]
    fn total_sums_hours() {
        assert_eq!(total(&[]), 0.0);
        let entries = [entry("a", "2026-01-05", 2.5), entry("b", "2026-01-10", 10.0)];
        assert_eq!(total(&entries), 12.5);
    }

    #[test]
    fn group_by_date_keeps_order_and_subtotals() {
        let entries = [
            entry("a", "2026-01-10", 3.0),
            entry("b", "2026-01-10", 1.5),
            entry("c", "2026-01-05", 2.0),
        ];
        let groups = group_by_date(&entries);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].date, "2026-01-10");
        assert_eq!(groups[0].subtotal, 4.5);
        assert_eq!(groups[0].entries[0].id, "a");
        assert_eq!(groups[0].entries[1].id, "b");
        assert_eq!(groups[1].date, "2026-01-05");
        assert_eq!(groups[1].subtotal, 2.0);
    }

    #[test]
    fn month_slice_filters_and_sorts_ascending() {
        let entries = [
            entry("a", "2026-02-01", 1.0),
            entry("b", "2026-01-20", 2.0),
            entry("c", "2026-01-05", 3.0),
        ];
        let slice = month_slice(&entries, "2026-01");
        assert_eq!(slice.len(), 2);
        assert_eq!(slice[0].date, "2026-01-05");
        assert_eq!(slice[1].date, "2026-01-20");
    }

    #[test]
    fn months_from_keys_extracts_suffixes_descending() {
        let keys = vec![
            "worklog_2025-11".to_string(),
            "worklog_2026-01".to_string(),
            "other_2026-02".to_string(),
            "worklog_meta".to_string(),
        ];
        assert_eq!(
            months_from_keys(&keys, "worklog"),
            vec!["2026-01".to_string(), "2025-11".to_string()]
        );
    }

    #[test]
    fn severity_band_boundaries() {
        assert_eq!(Severity::for_total(0.0), Severity::Normal);
        assert_eq!(Severity::for_total(50.0), Severity::Normal);
        assert_eq!(Severity::for_total(50.5), Severity::Sweating);
        assert_eq!(Severity::for_total(100.0), Severity::Sweating);
        assert_eq!(Severity::for_total(150.0), Severity::Pale);
        assert_eq!(Severity::for_total(150.1), Severity::Exhausted);
    }

    #[test]
    fn shake_level_tracks_band() {
        assert_eq!(Severity::for_total(80.0).shake_level(), 0);
        assert_eq!(Severity::for_total(120.0).shake_level(), 1);
        assert_eq!(Severity::for_total(200.0).shake_level(), 2);
    }
}
