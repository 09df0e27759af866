//! Laudo Cautelar server - Main entry point.
//!
//! Starts the Actix-web server with configured routes and middleware.

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, http::header, web};
use tracing::{Level, error, info, warn};
use tracing_subscriber::FmtSubscriber;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use laudo_server_lib::config::Config;
use laudo_server_lib::db::DbPool;
use laudo_server_lib::services::{FotoService, LaudoService, Storage, bootstrap};
use laudo_server_lib::{api, middleware};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            error!("");
            error!("Please check your environment variables:");
            error!("  - RUST_ENV must be set to 'development' or 'production'");
            error!("  - In production, DATABASE_URL and LAUDO_JWT_SECRET must be set");
            error!("  - In production, values must not match development defaults");
            std::process::exit(1);
        }
    };

    info!("========================================");
    info!("  Laudo Cautelar Server");
    info!("  Environment: {}", config.environment);
    info!("========================================");

    if config.is_development() {
        warn!("Running in DEVELOPMENT mode - do not use in production!");
        info!("Using development defaults for DATABASE_URL and LAUDO_JWT_SECRET");
    }

    // Initialize database and run migrations
    let pool = DbPool::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");
    info!("Database connection established");

    pool.migrate().await.expect("Failed to run migrations");
    info!("Database migrations complete");

    // Seed the default admin inspector when explicitly enabled
    bootstrap::seed_admin(&pool, &config)
        .await
        .expect("Failed to seed admin inspector");

    // Initialize photo storage
    let storage = Storage::new(&config.uploads_dir)
        .await
        .expect("Failed to initialize uploads directory");
    info!("Photo storage ready at {:?}", config.uploads_dir);

    let laudo_service = LaudoService::new(pool.clone(), storage.clone());
    let foto_service = FotoService::new(pool.clone(), storage.clone());

    let bind_address = config.bind_address();
    let uploads_dir = config.uploads_dir.clone();
    let max_foto_size = config.max_foto_size;
    let is_development = config.is_development();

    info!("Starting server at http://{}", bind_address);
    info!("Swagger UI at http://{}/docs/", bind_address);

    HttpServer::new(move || {
        let cors = if is_development {
            // Permissive CORS for development
            Cors::default()
                .allowed_origin("http://localhost:3000")
                .allowed_origin("http://127.0.0.1:3000")
                .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
                .allowed_headers(vec![header::AUTHORIZATION, header::ACCEPT, header::CONTENT_TYPE])
                .max_age(3600)
        } else {
            // Same-origin only in production
            Cors::default()
                .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
                .allowed_headers(vec![header::AUTHORIZATION, header::ACCEPT, header::CONTENT_TYPE])
                .max_age(3600)
        };

        App::new()
            .wrap(cors)
            .wrap(middleware::RequestLogger)
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(laudo_service.clone()))
            .app_data(web::Data::new(foto_service.clone()))
            // Multipart uploads carry several photos per request
            .app_data(web::PayloadConfig::new(max_foto_size * 12))
            .service(
                web::scope("/api")
                    .configure(api::configure_health_routes)
                    .configure(api::configure_auth_routes)
                    .configure(api::configure_laudo_routes)
                    .configure(api::configure_foto_routes)
                    .configure(api::configure_inspetor_routes),
            )
            .service(
                SwaggerUi::new("/docs/{_:.*}")
                    .url("/api-docs/openapi.json", api::ApiDoc::openapi()),
            )
            // Serve stored photos directly
            .service(Files::new("/uploads", uploads_dir.clone()).prefer_utf8(true))
    })
    .bind(&bind_address)?
    .run()
    .await
}
