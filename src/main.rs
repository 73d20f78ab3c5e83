use file_binder::{
    adapters::{
        controllers::profile_controller::{AVATAR_DIR, THUMBNAIL_DIR},
        routes::router,
        state::AppState,
    },
    services, FileAttributeBinder, UploadConfig,
};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = UploadConfig::from_env();
    tracing::info!(
        "Starting file-binder with upload path {} under {}",
        config.base_upload_path,
        config.web_root.display()
    );

    let port = std::env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse::<u16>()
        .expect("PORT must be a valid u16");

    // Configure CORS
    let cors = if let Ok(allowed_origins) = std::env::var("CORS_ALLOWED_ORIGINS") {
        let origins: Vec<_> = allowed_origins
            .split(',')
            .map(|s| s.trim().parse().expect("Invalid CORS origin"))
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::permissive()
    };

    // Uploads require their target directories to exist beforehand.
    for sub_dir in [AVATAR_DIR, THUMBNAIL_DIR] {
        let dir = config.resolve(&config.upload_path(sub_dir));
        tokio::fs::create_dir_all(&dir)
            .await
            .unwrap_or_else(|e| panic!("ERROR: Cannot create {}: {}", dir.display(), e));
    }

    let file_ops = services::create_file_operations(&config);
    let app_state = AppState::new(FileAttributeBinder::new(config, file_ops));

    let app = router(app_state).layer(cors);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .expect("Failed to bind to port");

    tracing::info!("Server listening on 0.0.0.0:{}", port);

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
