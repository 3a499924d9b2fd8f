use actix_cors::Cors;
use actix_web::{error, middleware, web, App, HttpServer};
use hirelink_algo::config::Settings;
use hirelink_algo::core::MatchEngine;
use hirelink_algo::routes::{self, error::ApiError, matches::AppState};
use tracing::info;

/// Handle JSON payload errors
pub fn handle_json_payload_error(
    err: error::JsonPayloadError,
    req: &actix_web::HttpRequest,
) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    ApiError::InvalidPayload(err.to_string()).into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(
    err: error::QueryPayloadError,
    _req: &actix_web::HttpRequest,
) -> actix_web::Error {
    ApiError::InvalidPayload(err.to_string()).into()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration before logging so the configured level applies
    let settings = Settings::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    // Initialize logging; LOG_LEVEL/LOG_FORMAT env vars override the config file
    let log_level = settings
        .logging
        .level_with_override(std::env::var("LOG_LEVEL").ok());
    let log_format = settings
        .logging
        .format_with_override(std::env::var("LOG_FORMAT").ok());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting HireLink match scoring service...");
    info!("Configuration loaded successfully");

    // Initialize the match engine. Weights are fixed constants, so there is
    // nothing to configure here.
    let engine = MatchEngine::new();

    info!(
        "Match engine initialized (threshold: {}, max postings per request: {})",
        settings.matching.default_threshold, settings.matching.max_postings
    );

    // Build application state
    let app_state = AppState {
        engine,
        default_threshold: settings.matching.default_threshold,
        max_postings: settings.matching.max_postings,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
