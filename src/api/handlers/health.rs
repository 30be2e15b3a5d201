// src/api/handlers/health.rs
use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use crate::api::AppState;

pub async fn health_check(state: web::Data<AppState>) -> Result<HttpResponse> {
    let evaluator = if state.evaluator.is_some() {
        "configured"
    } else {
        "missing_api_key"
    };

    Ok(HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "quizgrader",
        "version": env!("CARGO_PKG_VERSION"),
        "evaluator": evaluator
    })))
}
