use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use movie_catalog_core::{
    Config,
    config::Environment,
    db::{DbPool, create_pool, ping},
    services::{GenreService, MovieService},
};

pub mod envelope;
pub mod error;
pub mod routes;

pub use envelope::Envelope;
pub use error::{ApiError, ApiResult};

use routes::{genres, movies, status};

/// Shared, read-only state handed to every handler
pub struct AppState {
    pub movie_service: MovieService,
    pub genre_service: GenreService,
    pub app_env: Environment,
}

impl AppState {
    pub fn new(pool: DbPool, app_env: Environment) -> Self {
        Self {
            movie_service: MovieService::new(pool.clone()),
            genre_service: GenreService::new(pool),
            app_env,
        }
    }
}

/// Connects to the database and creates the application state
pub async fn create_app_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let pool = create_pool(&config.database_url).await?;
    ping(&pool).await?;
    tracing::info!("Database connected");

    Ok(Arc::new(AppState::new(pool, config.app_env)))
}

/// Creates the router with all routes configured
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/status", get(status::status))
        .route("/movies", get(movies::list))
        .route("/movies/{id}", get(movies::get))
        .route("/genres", get(genres::list))
        .fallback(routes::not_found)
        .method_not_allowed_fallback(routes::method_not_allowed)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Starts the server and blocks until shutdown
pub async fn start_server(config: Config) -> anyhow::Result<()> {
    tracing::info!(
        "Starting movie catalog server ({} mode)",
        config.app_env.as_str()
    );

    let state = create_app_state(&config).await?;
    let app = create_router(state);

    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
