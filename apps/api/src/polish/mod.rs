// Text transformation service: single-win rewrites and batch exports.
// All upstream calls go through llm_client; nothing here touches storage
// except the polish handler's write-back.

pub mod export;
pub mod handlers;
pub mod prompts;
pub mod rewriter;
pub mod style;
