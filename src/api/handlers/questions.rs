// src/api/handlers/questions.rs
use actix_web::{web, HttpResponse};
use serde_json::json;
use crate::api::AppState;
use crate::questions::fetch_questions_csv;

/// Relays the published question sheet so clients never talk to it directly.
pub async fn get_questions(state: web::Data<AppState>) -> HttpResponse {
    match fetch_questions_csv(&state.client, &state.config.questions).await {
        Ok(csv) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .body(csv),
        Err(e) => {
            log::error!("❌ Failed to fetch questions CSV: {}", e);
            HttpResponse::InternalServerError().json(json!({
                "error": "Ocurrió un error interno al obtener las preguntas."
            }))
        }
    }
}
