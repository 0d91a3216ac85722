//! Axum route handlers for polishing and exporting wins.

use anyhow::anyhow;
use axum::{
    extract::{Path, State},
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::win::WinRow;
use crate::polish::export::{compile, ExportItem};
use crate::polish::rewriter::rewrite;
use crate::polish::style::{ExportFormat, Style};
use crate::state::AppState;
use crate::wins::store::WinFilter;
use crate::wins::validation::{normalize_category, validate_range};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct PolishStyleRequest {
    #[serde(default)]
    pub style: String,
}

#[derive(Debug, Deserialize)]
pub struct PolishRequest {
    pub win_id: Uuid,
    #[serde(default)]
    pub style: String,
}

#[derive(Debug, Serialize)]
pub struct PolishResponse {
    pub success: bool,
    pub polished_text: String,
    pub style: Style,
    pub win: WinRow,
}

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    #[serde(default)]
    pub wins: Vec<ExportItem>,
    #[serde(default)]
    pub format: String,
}

#[derive(Debug, Deserialize)]
pub struct ExportRangeRequest {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub category: Option<String>,
    #[serde(default)]
    pub format: String,
}

#[derive(Debug, Serialize)]
pub struct ExportResponse {
    pub text: String,
    pub format: ExportFormat,
    pub win_count: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/wins/:id/polish
pub async fn handle_polish_win(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<PolishStyleRequest>,
) -> Result<Json<PolishResponse>, AppError> {
    polish_win(&state, id, &request.style).await.map(Json)
}

/// POST /api/v1/polish
///
/// Same as the per-win route, with the id in the body.
pub async fn handle_polish(
    State(state): State<AppState>,
    Json(request): Json<PolishRequest>,
) -> Result<Json<PolishResponse>, AppError> {
    polish_win(&state, request.win_id, &request.style)
        .await
        .map(Json)
}

/// Rewrites one stored win and writes text and style back together.
/// Nothing is written unless the rewrite succeeded.
async fn polish_win(state: &AppState, id: Uuid, style: &str) -> Result<PolishResponse, AppError> {
    let style: Style = style.parse()?;

    let win = state
        .store
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Win {id} not found")))?;

    let polished_text = rewrite(&state.llm, &win.text_raw, style).await?;

    let win = state
        .store
        .set_polish(id, &polished_text, style)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Win {id} was deleted while polishing")))?;

    // Report what the store holds, not what was sent to it.
    let (stored_text, stored_style) = win.polish().ok_or_else(|| {
        AppError::Internal(anyhow!("win {id} has an incomplete polish after write-back"))
    })?;
    let polished_text = stored_text.to_string();

    info!("Stored {stored_style} polish for win {id}");
    Ok(PolishResponse {
        success: true,
        polished_text,
        style: stored_style,
        win,
    })
}

/// POST /api/v1/export
///
/// Compiles the wins supplied by the client, in the order given.
pub async fn handle_export(
    State(state): State<AppState>,
    Json(request): Json<ExportRequest>,
) -> Result<Json<ExportResponse>, AppError> {
    if request.wins.is_empty() {
        return Err(AppError::Validation("No wins provided".to_string()));
    }
    let format: ExportFormat = request.format.parse()?;

    let text = compile(&state.llm, &request.wins, format).await?;
    Ok(Json(ExportResponse {
        text,
        format,
        win_count: request.wins.len(),
    }))
}

/// POST /api/v1/wins/export
///
/// Loads wins in the date range from the store (newest first) and compiles them.
pub async fn handle_export_range(
    State(state): State<AppState>,
    Json(request): Json<ExportRangeRequest>,
) -> Result<Json<ExportResponse>, AppError> {
    let format: ExportFormat = request.format.parse()?;
    validate_range(request.from, request.to)?;

    let filter = WinFilter {
        from: request.from,
        to: request.to,
        category: normalize_category(request.category),
    };
    let items: Vec<ExportItem> = state
        .store
        .list(&filter)
        .await?
        .into_iter()
        .map(ExportItem::from)
        .collect();

    if items.is_empty() {
        return Err(AppError::Validation(
            "No wins found in the selected date range".to_string(),
        ));
    }

    let text = compile(&state.llm, &items, format).await?;
    Ok(Json(ExportResponse {
        text,
        format,
        win_count: items.len(),
    }))
}
