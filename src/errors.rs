// src/errors.rs
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuizError {
    #[error("Failed to read file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API request failed with status {status}: {body}")]
    ApiError { status: u16, body: String },

    #[error("API returned an error: {0}")]
    ApiResponse(String),

    #[error("Unexpected response structure: {0}")]
    UnexpectedResponse(String),

    #[error("Model '{model}' did not respond within {timeout_secs}s")]
    Timeout { model: String, timeout_secs: u64 },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, QuizError>;

/// Every way an evaluation request can end without a verdict.
///
/// `Display` is the message shown to the client. Anything more specific is
/// carried alongside and only ever reaches the server log.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("La API Key de Google Gemini no está configurada en el servidor.")]
    ConfigMissing,

    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("{0}")]
    ValidationFailed(String),

    #[error("Ocurrió un error interno en el servidor.")]
    UpstreamFailed(#[source] QuizError),

    #[error("La respuesta de la IA no tuvo un formato JSON válido.")]
    MalformedVerdict(String),

    #[error("Ocurrió un error interno en el servidor.")]
    InternalError(String),
}

impl ResponseError for PipelineError {
    fn status_code(&self) -> StatusCode {
        match self {
            PipelineError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            PipelineError::ValidationFailed(_) => StatusCode::BAD_REQUEST,
            PipelineError::ConfigMissing
            | PipelineError::UpstreamFailed(_)
            | PipelineError::MalformedVerdict(_)
            | PipelineError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(PipelineError::ConfigMissing.status_code(), 500);
        assert_eq!(PipelineError::MethodNotAllowed.status_code(), 405);
        assert_eq!(
            PipelineError::ValidationFailed("Falta el parámetro 'pregunta'.".to_string()).status_code(),
            400
        );
        assert_eq!(PipelineError::UpstreamFailed(QuizError::UnexpectedResponse("{}".to_string())).status_code(), 500);
        assert_eq!(PipelineError::MalformedVerdict("prose".to_string()).status_code(), 500);
        assert_eq!(PipelineError::InternalError("panic".to_string()).status_code(), 500);
    }

    #[test]
    fn test_upstream_cause_stays_out_of_message() {
        let err = PipelineError::UpstreamFailed(QuizError::ApiError {
            status: 429,
            body: "quota exhausted for project 1234".to_string(),
        });
        assert_eq!(err.to_string(), "Ocurrió un error interno en el servidor.");
        assert!(!err.to_string().contains("quota"));
    }
}
