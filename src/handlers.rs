use crate::activity::date_key;
use crate::errors::AppError;
use crate::models::{
    CalendarResponse, DayEntry, EntryInput, EntryResponse, Goals, GoalsInput, SummaryResponse,
    TodayResponse,
};
use crate::state::AppState;
use crate::stats;
use crate::storage;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    Json,
};
use chrono::{Local, NaiveDate};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let data = state.data.lock().await;
    Html(render_index(&stats::build_today(&data)))
}

pub async fn get_today(State(state): State<AppState>) -> Result<Json<TodayResponse>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(stats::build_today(&data)))
}

pub async fn add_today(
    State(state): State<AppState>,
    Json(input): Json<EntryInput>,
) -> Result<Json<TodayResponse>, AppError> {
    let incoming = input.sanitize();
    let date = today_string();

    let mut data = state.data.lock().await;
    let merged = data.log.merge_add(&date, &incoming);
    storage::save_log(&state.paths.activity, &data.log).await?;
    let today = stats::build_today(&data);
    state.sync.push(&date, &merged);

    Ok(Json(today))
}

pub async fn get_entry(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<EntryResponse>, AppError> {
    let date = parse_date_param(&date)?;
    let data = state.data.lock().await;
    let entry = data.log.get(&date);
    Ok(Json(EntryResponse { date, entry }))
}

pub async fn replace_entry(
    State(state): State<AppState>,
    Path(date): Path<String>,
    Json(input): Json<EntryInput>,
) -> Result<Json<EntryResponse>, AppError> {
    let date = parse_date_param(&date)?;
    let entry = input.sanitize();

    let mut data = state.data.lock().await;
    data.log.replace(&date, entry.clone());
    storage::save_log(&state.paths.activity, &data.log).await?;
    state.sync.push(&date, &entry);

    Ok(Json(EntryResponse { date, entry }))
}

pub async fn delete_entry(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<StatusCode, AppError> {
    let date = parse_date_param(&date)?;

    let mut data = state.data.lock().await;
    if data.log.delete(&date) {
        storage::save_log(&state.paths.activity, &data.log).await?;
        state.sync.push(&date, &DayEntry::default());
    }

    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_goals(State(state): State<AppState>) -> Result<Json<Goals>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(data.goals.clone()))
}

pub async fn save_goals(
    State(state): State<AppState>,
    Json(input): Json<GoalsInput>,
) -> Result<Json<Goals>, AppError> {
    let goals = input.sanitize();

    let mut data = state.data.lock().await;
    data.goals = goals.clone();
    storage::save_goals(&state.paths.goals, &goals).await?;

    Ok(Json(goals))
}

pub async fn get_summary(State(state): State<AppState>) -> Result<Json<SummaryResponse>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(stats::build_summary(&data)))
}

pub async fn get_calendar(
    State(state): State<AppState>,
    Path((year, month)): Path<(i32, u32)>,
) -> Result<Json<CalendarResponse>, AppError> {
    let data = state.data.lock().await;
    stats::month_grid(year, month, &data)
        .map(Json)
        .ok_or_else(|| AppError::bad_request("month must name a real calendar month"))
}

fn today_string() -> String {
    Local::now().date_naive().to_string()
}

fn parse_date_param(raw: &str) -> Result<String, AppError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(date_key)
        .map_err(|_| AppError::bad_request("date must be YYYY-MM-DD"))
}
