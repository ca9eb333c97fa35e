//! Translation layer: the external translator client and the per-language cache.

mod cache;
mod gemini;

pub use cache::*;
pub use gemini::*;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{CategoryConfig, Language, Spot, TranslatedSnapshot};

#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("No API key configured for the translator")]
    MissingApiKey,
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Translator returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Translator returned no text")]
    EmptyResponse,
    #[error("Invalid JSON from translator: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Translated payload does not match request: {0}")]
    Schema(String),
}

pub type TranslateResult<T> = Result<T, TranslateError>;

/// Hosted text-generation service used for content translation and the guide chat.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate spot and category text into `target`, keeping every other field
    /// and the positional order intact.
    async fn translate(
        &self,
        spots: &[Spot],
        categories: &[CategoryConfig],
        target: Language,
    ) -> TranslateResult<TranslatedSnapshot>;

    /// Free-form question to the local guide persona.
    async fn advise(&self, prompt: &str) -> TranslateResult<String>;
}

/// Reject payloads that are not positionally aligned with the request.
pub fn check_alignment(
    snapshot: &TranslatedSnapshot,
    spots: &[Spot],
    categories: &[CategoryConfig],
) -> TranslateResult<()> {
    if snapshot.spots.len() != spots.len() {
        return Err(TranslateError::Schema(format!(
            "expected {} spots, got {}",
            spots.len(),
            snapshot.spots.len()
        )));
    }
    if snapshot.categories.len() != categories.len() {
        return Err(TranslateError::Schema(format!(
            "expected {} categories, got {}",
            categories.len(),
            snapshot.categories.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
pub mod fake;
