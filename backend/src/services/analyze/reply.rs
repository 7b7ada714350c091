//! Normalization of the model's free-text reply.
//!
//! Models often wrap JSON in a Markdown code fence, with or without a `json`
//! tag. The fence is stripped before parsing. A reply that still does not
//! parse as an `AnalysisResult` (including one with an unknown severity) is
//! replaced by `AnalysisResult::fallback()`; this step never fails.

use common::model::analysis::AnalysisResult;
use log::error;
use once_cell::sync::Lazy;
use regex::Regex;

static JSON_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```json\s*([\s\S]*?)\s*```").expect("valid json fence pattern"));

static ANY_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```\s*([\s\S]*?)\s*```").expect("valid fence pattern"));

/// Returns the body of the first fenced block, preferring a `json`-tagged one,
/// or the whole reply when there is no fence.
pub fn strip_code_fence(reply: &str) -> &str {
    JSON_FENCE
        .captures(reply)
        .or_else(|| ANY_FENCE.captures(reply))
        .and_then(|captures| captures.get(1))
        .map(|body| body.as_str())
        .unwrap_or(reply)
}

pub fn parse_analysis(reply: &str) -> AnalysisResult {
    match serde_json::from_str::<AnalysisResult>(strip_code_fence(reply).trim()) {
        Ok(analysis) => analysis,
        Err(e) => {
            error!("Failed to parse model reply ({}): {}", e, reply);
            AnalysisResult::fallback()
        }
    }
}
