use crate::errors::AppError;
use crate::models::{
    AddEntryRequest, EditEntryRequest, EntryListResponse, EntryView, MonthsResponse,
    ReportResponse, ReportRow,
};
use crate::normalize;
use crate::state::AppState;
use crate::stats::{self, Severity};
use crate::store::EntryStore;
use crate::ui::{render_index, render_report};
use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use chrono::Local;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct MonthQuery {
    pub month: Option<String>,
}

pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> Result<Html<String>, AppError> {
    let month = resolve_month(query.month)?;
    let mut store = state.store.lock().await;
    store.switch_month(&month);
    let total = stats::total(store.entries());
    Ok(Html(render_index(&month, &today_slash_date(), total)))
}

pub async fn report_page(Query(query): Query<MonthQuery>) -> Result<Html<String>, AppError> {
    let month = resolve_month(query.month)?;
    Ok(Html(render_report(&month)))
}

pub async fn list_entries(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<EntryListResponse>, AppError> {
    let month = resolve_month(query.month)?;
    let mut store = state.store.lock().await;
    store.switch_month(&month);
    Ok(Json(list_response(&store)))
}

/// Adds an entry. Invalid form input is rejected silently, per the page's
/// contract: the response is just the unchanged list.
pub async fn add_entry(
    State(state): State<AppState>,
    Json(payload): Json<AddEntryRequest>,
) -> Json<EntryListResponse> {
    let mut store = state.store.lock().await;
    ensure_loaded(&mut store);
    store.add(&payload.date, &payload.hours);
    Json(list_response(&store))
}

pub async fn edit_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<EditEntryRequest>,
) -> Json<EntryListResponse> {
    let mut store = state.store.lock().await;
    ensure_loaded(&mut store);
    store.edit(&id, &payload.hours);
    Json(list_response(&store))
}

pub async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<EntryListResponse> {
    let mut store = state.store.lock().await;
    ensure_loaded(&mut store);
    store.remove(&id);
    Json(list_response(&store))
}

pub async fn clear_entries(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<EntryListResponse>, AppError> {
    let month = resolve_month(query.month)?;
    let mut store = state.store.lock().await;
    store.switch_month(&month);
    store.clear_all();
    Ok(Json(list_response(&store)))
}

pub async fn get_months(State(state): State<AppState>) -> Json<MonthsResponse> {
    let store = state.store.lock().await;
    Json(MonthsResponse {
        months: store.months_available(),
    })
}

pub async fn get_report(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<ReportResponse>, AppError> {
    let month = resolve_month(query.month)?;
    let mut store = state.store.lock().await;
    let entries = store.month_entries(&month);
    let total = stats::total(&entries);
    let severity = Severity::for_total(total);
    let rows = stats::group_by_date(&entries)
        .into_iter()
        .map(|group| ReportRow {
            date: group.date,
            hours: group.subtotal,
        })
        .collect::<Vec<_>>();

    Ok(Json(ReportResponse {
        month,
        days: rows.len(),
        total,
        severity: severity.label().to_string(),
        message: severity.message().to_string(),
        shake_level: severity.shake_level(),
        rows,
    }))
}

fn list_response(store: &EntryStore) -> EntryListResponse {
    let entries = store
        .entries()
        .iter()
        .map(|entry| EntryView {
            id: entry.id.clone(),
            date: entry.date.clone(),
            display_date: normalize::to_slash_date(&entry.date)
                .unwrap_or_else(|| entry.date.clone()),
            hours: entry.hours,
        })
        .collect::<Vec<_>>();
    EntryListResponse {
        month: store.active_month().to_string(),
        total: stats::total(store.entries()),
        entries,
    }
}

fn resolve_month(query: Option<String>) -> Result<String, AppError> {
    match query {
        None => Ok(current_month()),
        Some(month) if normalize::is_month_key(&month) => Ok(month),
        Some(_) => Err(AppError::bad_request("month must be YYYY-MM")),
    }
}

/// Mutations that arrive before any page load still need an active partition.
fn ensure_loaded(store: &mut EntryStore) {
    if store.active_month().is_empty() {
        store.switch_month(&current_month());
    }
}

fn current_month() -> String {
    Local::now().date_naive().format("%Y-%m").to_string()
}

fn today_slash_date() -> String {
    Local::now().date_naive().format("%Y/%m/%d").to_string()
}
