//! Single-win rewriter — turns one raw note into a styled sentence or bullet.
//!
//! Stateless: the caller owns persisting the result (text and style together).

use std::time::Duration;

use tracing::info;

use crate::llm_client::{ChatRequest, LlmClient, LlmError};
use crate::polish::prompts::{
    LINKEDIN_REWRITE_TEMPLATE, RESUME_REWRITE_TEMPLATE, REVIEW_REWRITE_TEMPLATE, REWRITE_SYSTEM,
};
use crate::polish::style::Style;

/// Budget for a single rewrite. Longer than the export budget: the polish button
/// shows a progress indicator and users tolerate the wait.
pub const REWRITE_TIMEOUT: Duration = Duration::from_secs(45);
const REWRITE_MAX_TOKENS: u32 = 300;

pub fn build_rewrite_prompt(raw_text: &str, style: Style) -> String {
    let template = match style {
        Style::Resume => RESUME_REWRITE_TEMPLATE,
        Style::Review => REVIEW_REWRITE_TEMPLATE,
        Style::Linkedin => LINKEDIN_REWRITE_TEMPLATE,
    };
    template.replace("{raw_text}", raw_text)
}

/// Rewrites `raw_text` in the given style using the default 45s budget.
pub async fn rewrite(llm: &LlmClient, raw_text: &str, style: Style) -> Result<String, LlmError> {
    rewrite_within(llm, raw_text, style, REWRITE_TIMEOUT).await
}

pub async fn rewrite_within(
    llm: &LlmClient,
    raw_text: &str,
    style: Style,
    budget: Duration,
) -> Result<String, LlmError> {
    if raw_text.trim().is_empty() {
        return Err(LlmError::InvalidInput("win text cannot be empty".to_string()));
    }

    info!("Polishing win with style: {style}");
    let prompt = build_rewrite_prompt(raw_text, style);
    let request = ChatRequest::new(REWRITE_SYSTEM, &prompt, REWRITE_MAX_TOKENS);

    let polished = llm.execute(&request, budget).await?.text()?;
    info!("Polish completed, {} chars", polished.len());
    Ok(polished)
}
