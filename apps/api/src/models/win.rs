use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::polish::style::Style;

/// One logged win. `text_polished` and `polish_style` are written together or not at all.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WinRow {
    pub id: Uuid,
    pub text_raw: String,
    pub text_polished: Option<String>,
    pub polish_style: Option<String>,
    pub category: Option<String>,
    pub win_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl WinRow {
    /// The polished text and the style that produced it, when both are present.
    pub fn polish(&self) -> Option<(&str, Style)> {
        let text = self.text_polished.as_deref()?;
        let style = self.polish_style.as_deref()?.parse().ok()?;
        Some((text, style))
    }
}
