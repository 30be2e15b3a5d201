// src/config.rs
use serde::Deserialize;
use std::time::Duration;
use crate::errors::{QuizError, Result};

const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_GEMINI_MODEL: &str = "gemini-pro";
const DEFAULT_QUESTIONS_CSV_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vSaN_VzM1TVypabkDvbGNuF6TBdwdKy7PIKHR3g0VgT1TCMiQXm59brQhDQ3Vesemn7LdFmZEpWKzCP/pub?output=csv";

/// Where the HTTP listener binds.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Configuration for the Gemini provider. Only exists when an API key is set.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_base: String,
    pub api_key: String,
    pub model: String,
    pub timeout: Duration,
}

/// Configuration for the published question sheet.
#[derive(Debug, Clone)]
pub struct QuestionsConfig {
    pub csv_url: String,
    pub timeout: Duration,
}

/// High-level application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub gemini: Option<GeminiConfig>,
    pub questions: QuestionsConfig,
}

// Shape of the optional TOML file. Every key may be left out.
#[derive(Deserialize, Debug, Default)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    server: ServerSection,
    gemini: GeminiSection,
    questions: QuestionsSection,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default, deny_unknown_fields)]
struct ServerSection {
    host: Option<String>,
    port: Option<u16>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default, deny_unknown_fields)]
struct GeminiSection {
    api_base: Option<String>,
    model: Option<String>,
    timeout_secs: Option<u64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default, deny_unknown_fields)]
struct QuestionsSection {
    csv_url: Option<String>,
    timeout_secs: Option<u64>,
}

impl AppConfig {
    /// Load configuration from the process environment, reading the TOML file
    /// named by `QUIZGRADER_CONFIG` first when it is set.
    pub fn load() -> Result<Self> {
        let file_contents = match std::env::var("QUIZGRADER_CONFIG") {
            Ok(path) => {
                log::info!("📄 Reading configuration file {}", path);
                Some(std::fs::read_to_string(&path)?)
            }
            Err(_) => None,
        };

        Self::from_sources(file_contents.as_deref(), |key| std::env::var(key).ok())
    }

    /// Build a configuration from optional TOML text and an environment lookup.
    /// Environment values win over the file, the file wins over defaults.
    pub fn from_sources<F>(toml_text: Option<&str>, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file: FileConfig = match toml_text {
            Some(text) => toml::from_str(text)?,
            None => FileConfig::default(),
        };

        let server = ServerConfig {
            host: env("QUIZGRADER_HOST")
                .or(file.server.host)
                .unwrap_or_else(|| "0.0.0.0".to_string()),
            port: match env("QUIZGRADER_PORT") {
                Some(raw) => parse_number("QUIZGRADER_PORT", &raw)?,
                None => file.server.port.unwrap_or(8080),
            },
        };

        let gemini_timeout = match env("GEMINI_TIMEOUT_SECS") {
            Some(raw) => parse_number("GEMINI_TIMEOUT_SECS", &raw)?,
            None => file.gemini.timeout_secs.unwrap_or(20),
        };
        let questions_timeout = match env("QUESTIONS_TIMEOUT_SECS") {
            Some(raw) => parse_number("QUESTIONS_TIMEOUT_SECS", &raw)?,
            None => file.questions.timeout_secs.unwrap_or(15),
        };
        if gemini_timeout == 0 || questions_timeout == 0 {
            return Err(QuizError::Config("Timeouts must be at least one second".to_string()));
        }

        let gemini = match env("GEMINI_API_KEY").filter(|key| !key.trim().is_empty()) {
            Some(api_key) => Some(GeminiConfig {
                api_base: env("GEMINI_API_BASE")
                    .or(file.gemini.api_base)
                    .unwrap_or_else(|| DEFAULT_GEMINI_API_BASE.to_string()),
                api_key,
                model: env("GEMINI_MODEL")
                    .or(file.gemini.model)
                    .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
                timeout: Duration::from_secs(gemini_timeout),
            }),
            None => None,
        };

        let questions = QuestionsConfig {
            csv_url: env("QUESTIONS_CSV_URL")
                .or(file.questions.csv_url)
                .unwrap_or_else(|| DEFAULT_QUESTIONS_CSV_URL.to_string()),
            timeout: Duration::from_secs(questions_timeout),
        };

        Ok(AppConfig { server, gemini, questions })
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| QuizError::Config(format!("{} must be a number, got '{}'", key, raw)))
}
