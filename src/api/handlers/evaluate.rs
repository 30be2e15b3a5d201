// src/api/handlers/evaluate.rs
use actix_web::error::PayloadError;
use actix_web::web::{self, Bytes, BytesMut};
use actix_web::HttpResponse;
use futures::{FutureExt, Stream, StreamExt};
use std::any::Any;
use std::panic::AssertUnwindSafe;
use uuid::Uuid;
use crate::api::AppState;
use crate::errors::PipelineError;
use crate::models::{EvaluationRequest, Verdict};
use crate::providers::LlmProvider;
use crate::runner::Evaluator;

const MAX_BODY_BYTES: usize = 256 * 1024;

/// POST /api/evaluate
///
/// The body is streamed by hand so a missing API key is reported before
/// a single byte of it is read.
pub async fn evaluate(
    state: web::Data<AppState>,
    payload: web::Payload,
) -> Result<HttpResponse, PipelineError> {
    let eval_id = Uuid::new_v4().to_string();
    let verdict = evaluate_guarded(state.evaluator.as_deref(), &eval_id, payload).await?;
    Ok(HttpResponse::Ok().json(verdict))
}

/// Runs the whole pipeline; a panic anywhere below becomes `InternalError`.
async fn evaluate_guarded<P, S>(
    evaluator: Option<&Evaluator<P>>,
    eval_id: &str,
    body: S,
) -> Result<Verdict, PipelineError>
where
    P: LlmProvider,
    S: Stream<Item = Result<Bytes, PayloadError>>,
{
    let outcome = AssertUnwindSafe(run_evaluation(evaluator, eval_id, body))
        .catch_unwind()
        .await;

    match outcome {
        Ok(result) => result,
        Err(panic) => {
            let message = panic_message(panic.as_ref());
            log::error!("💥 [{}] Evaluation panicked: {}", eval_id, message);
            Err(PipelineError::InternalError(message))
        }
    }
}

async fn run_evaluation<P, S>(
    evaluator: Option<&Evaluator<P>>,
    eval_id: &str,
    body: S,
) -> Result<Verdict, PipelineError>
where
    P: LlmProvider,
    S: Stream<Item = Result<Bytes, PayloadError>>,
{
    let evaluator = evaluator.ok_or_else(|| {
        log::error!("❌ [{}] Rejected: Gemini API key is not configured", eval_id);
        PipelineError::ConfigMissing
    })?;

    let body = read_body(body).await.inspect_err(|e| {
        log::warn!("⚠️  [{}] Could not read body: {}", eval_id, e);
    })?;

    let request = EvaluationRequest::from_body(&body).inspect_err(|e| {
        log::warn!("⚠️  [{}] Invalid request: {}", eval_id, e);
    })?;

    log::info!("🎯 [{}] Evaluating answer with {}", eval_id, evaluator.model());
    evaluator.evaluate(eval_id, &request).await
}

async fn read_body<S>(body: S) -> Result<BytesMut, PipelineError>
where
    S: Stream<Item = Result<Bytes, PayloadError>>,
{
    let mut body = std::pin::pin!(body);
    let mut buf = BytesMut::new();

    while let Some(chunk) = body.next().await {
        let chunk = chunk.map_err(|e| {
            log::debug!("Request body stream failed: {}", e);
            PipelineError::ValidationFailed("No se pudo leer el cuerpo de la petición.".to_string())
        })?;
        if buf.len() + chunk.len() > MAX_BODY_BYTES {
            return Err(PipelineError::ValidationFailed(
                "El cuerpo de la petición es demasiado grande.".to_string(),
            ));
        }
        buf.extend_from_slice(&chunk);
    }

    Ok(buf)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
