use serde::{Deserialize, Serialize};

/// One recorded work observation. This is also the persisted shape: each
/// partition key holds a JSON array of these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: String,
    pub date: String,
    pub hours: f64,
}

#[derive(Debug, Deserialize)]
pub struct AddEntryRequest {
    pub date: String,
    pub hours: String,
}

#[derive(Debug, Deserialize)]
pub struct EditEntryRequest {
    pub hours: String,
}

#[derive(Debug, Serialize)]
pub struct EntryView {
    pub id: String,
    pub date: String,
    pub display_date: String,
    pub hours: f64,
}

#[derive(Debug, Serialize)]
pub struct EntryListResponse {
    pub month: String,
    pub entries: Vec<EntryView>,
    pub total: f64,
}

/// One table row on the report page: a worked day and its subtotal.
#[derive(Debug, Serialize)]
pub struct ReportRow {
    pub date: String,
    pub hours: f64,
}

#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub month: String,
    pub days: usize,
    pub total: f64,
    pub severity: String,
    pub message: String,
    pub shake_level: u8,
    pub rows: Vec<ReportRow>,
}

#[derive(Debug, Serialize)]
pub struct MonthsResponse {
    pub months: Vec<String>,
}
