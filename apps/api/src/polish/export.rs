//! Export compiler — folds a list of wins into one resume or review document.
//!
//! The caller decides which wins and in what order; this module never reorders.

use std::time::Duration;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::llm_client::{ChatRequest, LlmClient, LlmError};
use crate::models::win::WinRow;
use crate::polish::prompts::{EXPORT_SYSTEM, RESUME_EXPORT_TEMPLATE, REVIEW_EXPORT_TEMPLATE};
use crate::polish::style::ExportFormat;

/// Export runs inside a synchronous page request, so it gets a tighter budget
/// than a single rewrite.
pub const EXPORT_TIMEOUT: Duration = Duration::from_secs(30);
const EXPORT_MAX_TOKENS: u32 = 1000;

/// One win as seen by the export compiler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportItem {
    pub text_raw: String,
    #[serde(default)]
    pub text_polished: Option<String>,
    pub win_date: NaiveDate,
}

impl ExportItem {
    /// Polished text when present and non-blank, raw text otherwise.
    pub fn display_text(&self) -> &str {
        self.text_polished
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| self.text_raw.trim())
    }
}

impl From<WinRow> for ExportItem {
    fn from(row: WinRow) -> Self {
        Self {
            text_raw: row.text_raw,
            text_polished: row.text_polished,
            win_date: row.win_date,
        }
    }
}

/// Numbered list, one win per line: `"1. <text> (YYYY-MM-DD)"`.
pub fn render_win_list(items: &[ExportItem]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            format!(
                "{}. {} ({})",
                i + 1,
                item.display_text(),
                item.win_date.format("%Y-%m-%d")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn build_export_prompt(items: &[ExportItem], format: ExportFormat) -> String {
    let template = match format {
        ExportFormat::Resume => RESUME_EXPORT_TEMPLATE,
        ExportFormat::Review => REVIEW_EXPORT_TEMPLATE,
    };
    template.replace("{wins}", &render_win_list(items))
}

/// Compiles `items` into an export document using the default 30s budget.
pub async fn compile(
    llm: &LlmClient,
    items: &[ExportItem],
    format: ExportFormat,
) -> Result<String, LlmError> {
    compile_within(llm, items, format, EXPORT_TIMEOUT).await
}

pub async fn compile_within(
    llm: &LlmClient,
    items: &[ExportItem],
    format: ExportFormat,
    budget: Duration,
) -> Result<String, LlmError> {
    if items.is_empty() {
        return Err(LlmError::InvalidInput("no wins provided".to_string()));
    }

    info!("Compiling {} wins into a {format} export", items.len());
    let prompt = build_export_prompt(items, format);
    let request = ChatRequest::new(EXPORT_SYSTEM, &prompt, EXPORT_MAX_TOKENS);

    llm.execute(&request, budget).await?.text()
}
