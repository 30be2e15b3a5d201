// src/models.rs
use crate::errors::PipelineError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A question and the student's answer to it, as received by `/api/evaluate`.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationRequest {
    pub question: String,
    pub answer: String,
}

impl EvaluationRequest {
    /// Parses a raw request body. Absent, null, non-string and blank fields
    /// all count as missing; a body that is not a JSON object is missing both.
    pub fn from_body(body: &[u8]) -> Result<Self, PipelineError> {
        let (question, answer) = match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(mut fields)) => (
                present(fields.remove("pregunta")),
                present(fields.remove("respuesta")),
            ),
            _ => (None, None),
        };

        match (question, answer) {
            (Some(question), Some(answer)) => Ok(EvaluationRequest { question, answer }),
            (None, None) => Err(PipelineError::ValidationFailed(
                "Faltan los parámetros 'pregunta' y 'respuesta'.".to_string(),
            )),
            (None, Some(_)) => Err(PipelineError::ValidationFailed(
                "Falta el parámetro 'pregunta'.".to_string(),
            )),
            (Some(_), None) => Err(PipelineError::ValidationFailed(
                "Falta el parámetro 'respuesta'.".to_string(),
            )),
        }
    }
}

fn present(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s),
        _ => None,
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluacion {
    Correcto,
    Incorrecto,
}

/// The grading result returned to the client.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Verdict {
    pub evaluacion: Evaluacion,
    pub feedback: String,
}
