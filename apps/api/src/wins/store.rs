//! Store trait — the only way the rest of the service reads or writes wins.
//!
//! `AppState` holds an `Arc<dyn WinStore>`. Production uses `PgWinStore`;
//! handler tests use the in-memory store.

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::win::WinRow;
use crate::polish::style::Style;

/// A validated new win.
#[derive(Debug, Clone)]
pub struct NewWin {
    pub text_raw: String,
    pub category: Option<String>,
    pub win_date: NaiveDate,
}

/// Author edits. `None` leaves a field alone; `category: Some(None)` clears it.
/// Never touches the polish fields.
#[derive(Debug, Clone, Default)]
pub struct WinEdit {
    pub text_raw: Option<String>,
    pub category: Option<Option<String>>,
    pub win_date: Option<NaiveDate>,
}

/// Inclusive date range and optional exact category match.
#[derive(Debug, Clone, Default)]
pub struct WinFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub category: Option<String>,
}

#[async_trait]
pub trait WinStore: Send + Sync {
    async fn create(&self, win: NewWin) -> Result<WinRow, AppError>;

    async fn get(&self, id: Uuid) -> Result<Option<WinRow>, AppError>;

    /// Newest first: `win_date DESC, created_at DESC`.
    async fn list(&self, filter: &WinFilter) -> Result<Vec<WinRow>, AppError>;

    async fn update(&self, id: Uuid, edit: WinEdit) -> Result<Option<WinRow>, AppError>;

    async fn delete(&self, id: Uuid) -> Result<bool, AppError>;

    /// Writes polished text and style in one update.
    ///
    /// Concurrent polishes of the same win are not coordinated; the last write wins.
    async fn set_polish(
        &self,
        id: Uuid,
        text: &str,
        style: Style,
    ) -> Result<Option<WinRow>, AppError>;
}
