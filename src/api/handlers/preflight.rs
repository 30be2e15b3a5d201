// src/api/handlers/preflight.rs
use actix_web::HttpResponse;
use crate::errors::PipelineError;

/// Answers CORS pre-flight requests. The headers come from the resource middleware.
pub async fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}

pub async fn method_not_allowed() -> Result<HttpResponse, PipelineError> {
    Err(PipelineError::MethodNotAllowed)
}
