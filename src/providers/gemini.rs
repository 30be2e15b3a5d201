// src/providers/gemini.rs

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::config::GeminiConfig;
use crate::errors::{QuizError, Result};
use crate::providers::LlmProvider;

/// A provider for interacting with Google's Gemini models.
pub struct GeminiProvider {
    client: Client,
    config: GeminiConfig,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    error: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Text of the first part of the first candidate, if the model produced one.
    fn into_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
    }
}

impl GeminiProvider {
    /// Creates a new `GeminiProvider`.
    pub fn new(client: Client, config: GeminiConfig) -> Self {
        Self { client, config }
    }
}

impl LlmProvider for GeminiProvider {
    /// Calls the Gemini API with a given prompt and returns the model's response text and latency.
    async fn generate(&self, model: &str, prompt: &str) -> Result<(String, u64)> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.api_base.trim_end_matches('/'),
            model
        );

        log::debug!("📡 Calling Gemini: {} with model: {}", url, model);

        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let start = Instant::now();

        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        let latency_ms = start.elapsed().as_millis() as u64;

        log::debug!("📥 Gemini response status: {} ({}ms)", status, latency_ms);

        if !status.is_success() {
            let error_body = resp
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error body".to_string());
            return Err(QuizError::ApiError {
                status: status.as_u16(),
                body: error_body,
            });
        }

        let raw = resp.text().await?;
        let parsed: GenerateResponse = serde_json::from_str(&raw)?;

        if let Some(error) = parsed.error {
            return Err(QuizError::ApiResponse(error.to_string()));
        }

        // Empty text is passed on; the verdict parser rejects it.
        let output = parsed
            .into_text()
            .ok_or_else(|| QuizError::UnexpectedResponse(raw))?;

        Ok((output, latency_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn provider_for(server: &MockServer) -> GeminiProvider {
        GeminiProvider::new(
            Client::new(),
            GeminiConfig {
                api_base: format!("{}/", server.uri()),
                api_key: "test-key".to_string(),
                model: "gemini-pro".to_string(),
                timeout: Duration::from_secs(5),
            },
        )
    }

    #[tokio::test]
    async fn test_generate_success() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-pro:generateContent"))
            .and(header("x-goog-api-key", "test-key"))
            .and(body_json(json!({"contents": [{"parts": [{"text": "hola"}]}]})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{"content": {"parts": [{"text": "respuesta"}], "role": "model"}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let (text, _latency) = provider_for(&server).generate("gemini-pro", "hola").await.unwrap();
        assert_eq!(text, "respuesta");
    }

    #[tokio::test]
    async fn test_generate_http_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403).set_body_string("API key not valid"))
            .mount(&server)
            .await;

        let err = provider_for(&server).generate("gemini-pro", "hola").await.unwrap_err();
        match err {
            QuizError::ApiError { status, body } => {
                assert_eq!(status, 403);
                assert_eq!(body, "API key not valid");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_generate_missing_text() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{"finishReason": "SAFETY"}]
            })))
            .mount(&server)
            .await;

        let err = provider_for(&server).generate("gemini-pro", "hola").await.unwrap_err();
        assert!(matches!(err, QuizError::UnexpectedResponse(_)));
    }

    #[tokio::test]
    async fn test_generate_error_object() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "error": {"code": 400, "message": "Invalid argument", "status": "INVALID_ARGUMENT"}
            })))
            .mount(&server)
            .await;

        let err = provider_for(&server).generate("gemini-pro", "hola").await.unwrap_err();
        assert!(matches!(err, QuizError::ApiResponse(_)));
    }

    #[tokio::test]
    async fn test_generate_non_json_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
            .mount(&server)
            .await;

        let err = provider_for(&server).generate("gemini-pro", "hola").await.unwrap_err();
        assert!(matches!(err, QuizError::JsonParse(_)));
    }

    #[tokio::test]
    async fn test_generate_empty_text() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{"content": {"parts": [{"text": ""}]}}]
            })))
            .mount(&server)
            .await;

        let (text, _latency) = provider_for(&server).generate("gemini-pro", "hola").await.unwrap();
        assert_eq!(text, "");
    }
}
