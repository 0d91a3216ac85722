//! Axum route handlers for win CRUD.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::win::WinRow;
use crate::state::AppState;
use crate::wins::store::{NewWin, WinEdit, WinFilter};
use crate::wins::validation::{
    normalize_category, validate_range, validate_text, validate_win_date,
};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateWinRequest {
    pub text_raw: String,
    #[serde(default)]
    pub category: Option<String>,
    /// Defaults to today (UTC).
    #[serde(default)]
    pub win_date: Option<NaiveDate>,
}

/// Absent fields are left unchanged. An empty `category` clears it.
#[derive(Debug, Deserialize)]
pub struct UpdateWinRequest {
    pub text_raw: Option<String>,
    pub category: Option<String>,
    pub win_date: Option<NaiveDate>,
}

/// GET /api/v1/wins
pub async fn handle_list_wins(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<WinRow>>, AppError> {
    validate_range(query.from, query.to)?;
    let filter = WinFilter {
        from: query.from,
        to: query.to,
        category: normalize_category(query.category),
    };
    Ok(Json(state.store.list(&filter).await?))
}

/// POST /api/v1/wins
pub async fn handle_create_win(
    State(state): State<AppState>,
    Json(request): Json<CreateWinRequest>,
) -> Result<(StatusCode, Json<WinRow>), AppError> {
    let today = Utc::now().date_naive();
    let win = NewWin {
        text_raw: validate_text(&request.text_raw)?,
        category: normalize_category(request.category),
        win_date: validate_win_date(request.win_date.unwrap_or(today), today)?,
    };

    let row = state.store.create(win).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/wins/:id
pub async fn handle_get_win(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<WinRow>, AppError> {
    state
        .store
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Win {id} not found")))
}

/// PATCH /api/v1/wins/:id
pub async fn handle_update_win(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateWinRequest>,
) -> Result<Json<WinRow>, AppError> {
    let today = Utc::now().date_naive();
    let edit = WinEdit {
        text_raw: request.text_raw.as_deref().map(validate_text).transpose()?,
        category: request.category.map(|c| normalize_category(Some(c))),
        win_date: request
            .win_date
            .map(|d| validate_win_date(d, today))
            .transpose()?,
    };

    state
        .store
        .update(id, edit)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Win {id} not found")))
}

/// DELETE /api/v1/wins/:id
pub async fn handle_delete_win(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !state.store.delete(id).await? {
        return Err(AppError::NotFound(format!("Win {id} not found")));
    }
    info!("Deleted win {id}");
    Ok(StatusCode::NO_CONTENT)
}
