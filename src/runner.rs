// src/runner.rs
use crate::errors::{PipelineError, QuizError};
use crate::models::{EvaluationRequest, Verdict};
use crate::normalizer;
use crate::prompt::build_prompt;
use crate::providers::LlmProvider;
use std::time::{Duration, Instant};

/// Grades answers with one model call each.
pub struct Evaluator<P> {
    provider: P,
    model: String,
    timeout: Duration,
}

impl<P: LlmProvider> Evaluator<P> {
    pub fn new(provider: P, model: impl Into<String>, timeout: Duration) -> Self {
        Self {
            provider,
            model: model.into(),
            timeout,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Runs prompt building, generation and normalization for one request.
    /// `eval_id` only tags log lines.
    pub async fn evaluate(
        &self,
        eval_id: &str,
        request: &EvaluationRequest,
    ) -> Result<Verdict, PipelineError> {
        let eval_start = Instant::now();
        let prompt = build_prompt(&request.question, &request.answer);

        let generation = tokio::time::timeout(
            self.timeout,
            self.provider.generate(&self.model, prompt.as_str()),
        )
        .await
        .unwrap_or_else(|_| {
            Err(QuizError::Timeout {
                model: self.model.clone(),
                timeout_secs: self.timeout.as_secs(),
            })
        });

        let (model_output, latency_ms) = generation.map_err(|e| {
            log::error!("❌ [{}] Model '{}' failed: {}", eval_id, self.model, e);
            PipelineError::UpstreamFailed(e)
        })?;

        log::debug!("✅ [{}] Model output ({}ms): {}", eval_id, latency_ms, model_output);

        let verdict = normalizer::normalize(&model_output).map_err(|e| {
            log::error!("❌ [{}] Could not parse model output ({}): {}", eval_id, e, model_output);
            PipelineError::MalformedVerdict(e.to_string())
        })?;

        log::info!(
            "⚖️  [{}] Verdict: {:?} in {}ms",
            eval_id,
            verdict.evaluacion,
            eval_start.elapsed().as_millis()
        );

        Ok(verdict)
    }
}
