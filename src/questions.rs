// src/questions.rs
use reqwest::Client;

use crate::config::QuestionsConfig;
use crate::errors::{QuizError, Result};

/// Downloads the published question sheet as CSV text.
pub async fn fetch_questions_csv(client: &Client, config: &QuestionsConfig) -> Result<String> {
    log::debug!("📡 Fetching questions from {}", config.csv_url);

    let resp = client
        .get(&config.csv_url)
        .timeout(config.timeout)
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        let body = resp
            .text()
            .await
            .unwrap_or_else(|_| "Could not read error body".to_string());
        return Err(QuizError::ApiError {
            status: status.as_u16(),
            body,
        });
    }

    Ok(resp.text().await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer) -> QuestionsConfig {
        QuestionsConfig {
            csv_url: format!("{}/pub?output=csv", server.uri()),
            timeout: Duration::from_secs(5),
        }
    }

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let server = MockServer::start().await;
        let csv = "pregunta,tema\n¿Qué es la fotosíntesis?,ciencias\n";

        Mock::given(method("GET"))
            .and(path("/pub"))
            .respond_with(ResponseTemplate::new(200).set_body_string(csv))
            .expect(1)
            .mount(&server)
            .await;

        let body = fetch_questions_csv(&Client::new(), &config_for(&server)).await.unwrap();
        assert_eq!(body, csv);
    }

    #[tokio::test]
    async fn test_fetch_upstream_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
            .mount(&server)
            .await;

        let err = fetch_questions_csv(&Client::new(), &config_for(&server)).await.unwrap_err();
        assert!(matches!(err, QuizError::ApiError { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_fetch_times_out() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
            .mount(&server)
            .await;

        let config = QuestionsConfig {
            timeout: Duration::from_millis(100),
            ..config_for(&server)
        };
        let err = fetch_questions_csv(&Client::new(), &config).await.unwrap_err();
        assert!(matches!(err, QuizError::Request(_)));
    }
}
