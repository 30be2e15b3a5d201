// src/api/routes.rs
use actix_web::{http::Method, middleware::DefaultHeaders, web};
use super::handlers;

/// CORS headers sent on every response of a resource, errors included.
fn cors_headers(methods: &'static str) -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", "*"))
        .add(("Access-Control-Allow-Methods", methods))
        .add(("Access-Control-Allow-Headers", "Content-Type"))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(handlers::health_check))
            .service(
                web::resource("/evaluate")
                    .route(web::post().to(handlers::evaluate))
                    .route(web::method(Method::OPTIONS).to(handlers::preflight))
                    .default_service(web::to(handlers::method_not_allowed))
                    .wrap(cors_headers("POST, OPTIONS")),
            )
            .service(
                web::resource("/get-questions")
                    .route(web::get().to(handlers::get_questions))
                    .route(web::method(Method::OPTIONS).to(handlers::preflight))
                    .default_service(web::to(handlers::method_not_allowed))
                    .wrap(cors_headers("GET, OPTIONS")),
            ),
    );
}
