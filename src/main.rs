use actix_web::{middleware, web, App, HttpServer};
use quizgrader::api::{configure_routes, AppState};
use quizgrader::{banner, config};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Print the startup banner
    banner::print_banner();

    // A missing .env is fine, real deployments set the environment directly
    let dotenv_result = dotenvy::dotenv();

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    if let Err(e) = dotenv_result {
        log::debug!("No .env file loaded: {}", e);
    }

    let app_config = config::AppConfig::load().map_err(|e| {
        log::error!("❌ Failed to load configuration: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    let bind_addr = (app_config.server.host.clone(), app_config.server.port);
    let state = AppState::new(app_config);

    log::info!("🚀 Starting server on http://{}:{}", bind_addr.0, bind_addr.1);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(middleware::Logger::default())
            .configure(configure_routes)
    })
    .bind(bind_addr)?
    .run()
    .await
}
