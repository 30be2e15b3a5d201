// src/normalizer.rs
//! Turns raw model text into a [`Verdict`].
//!
//! Models like to wrap JSON in markdown fences, so those are removed first.
//! Whatever remains must be exactly the verdict object. Nothing is guessed:
//! prose around the JSON, unknown keys, an unexpected `evaluacion` value or
//! empty feedback all reject the response.

use crate::models::Verdict;
use thiserror::Error;

const JSON_FENCE: &str = "```json";
const FENCE: &str = "```";

#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("model output is not a verdict object: {0}")]
    Json(#[from] serde_json::Error),

    #[error("verdict has empty feedback")]
    EmptyFeedback,
}

/// Removes every markdown fence marker and surrounding whitespace.
pub fn strip_fences(raw: &str) -> String {
    raw.replace(JSON_FENCE, "").replace(FENCE, "").trim().to_string()
}

pub fn normalize(raw: &str) -> Result<Verdict, NormalizeError> {
    let cleaned = strip_fences(raw);
    let verdict: Verdict = serde_json::from_str(&cleaned)?;

    if verdict.feedback.trim().is_empty() {
        return Err(NormalizeError::EmptyFeedback);
    }

    Ok(verdict)
}
