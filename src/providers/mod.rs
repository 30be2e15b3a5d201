// src/providers/mod.rs

use crate::errors::Result;

pub mod gemini;

/// A common trait for Large Language Model (LLM) providers.
/// The evaluator only needs "prompt in, text out", so that is all this asks for.
///
/// Note: We're not using async_trait here, so implementers must handle async directly.
pub trait LlmProvider: Send + Sync {
    /// Generates a response from the LLM based on a given prompt.
    ///
    /// # Arguments
    /// * `model` - The specific model to use for generation (e.g., "gemini-pro").
    /// * `prompt` - The input prompt to send to the model.
    ///
    /// # Returns
    /// A `Result` containing a tuple of the generated `String` and the latency in milliseconds (`u64`).
    fn generate(&self, model: &str, prompt: &str) -> impl std::future::Future<Output = Result<(String, u64)>> + Send;
}
