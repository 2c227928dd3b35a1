//! Web Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use auth::{AuthConfig, SessionGate, SqliteAuthRepository, auth_router};
use axum::Router;
use base64::Engine;
use base64::engine::general_purpose;
use platform::credential::{CredentialScheme, PlaintextCredentials};
use platform::render::Renderer;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tasks::{SqliteTaskRepository, tasks_router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "web=info,auth=info,tasks=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection: a single file, created on first run
    let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:todo.db".to_string());

    let options = SqliteConnectOptions::from_str(&database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Startup cleanup: remove expired sessions
    // Errors here should not prevent server startup
    let auth_repo = SqliteAuthRepository::new(pool.clone());
    match auth_repo.sweep_expired_sessions().await {
        Ok(sessions) => {
            tracing::info!(sessions_deleted = sessions, "Session cleanup completed");
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                "Session cleanup failed, continuing anyway"
            );
        }
    }

    // Auth configuration
    let auth_config = if cfg!(debug_assertions) {
        AuthConfig::development()
    } else {
        // In production, load the signing secret from environment
        let secret_b64 =
            env::var("SESSION_SECRET").expect("SESSION_SECRET must be set in production");
        let secret_bytes = Engine::decode(&general_purpose::STANDARD, &secret_b64)?;
        anyhow::ensure!(
            secret_bytes.len() == 32,
            "SESSION_SECRET must decode to 32 bytes"
        );
        let mut secret = [0u8; 32];
        secret.copy_from_slice(&secret_bytes);
        AuthConfig {
            session_secret: secret,
            ..AuthConfig::default()
        }
    };
    let auth_config = Arc::new(auth_config);

    // Template renderer
    let templates_glob = env::var("TEMPLATES_GLOB")
        .unwrap_or_else(|_| "backend/apps/web/templates/**/*.html".to_string());
    let renderer = Arc::new(Renderer::from_glob(&templates_glob)?);

    tracing::info!(glob = %templates_glob, "Templates loaded");

    // Credential scheme: verbatim storage, preserved legacy behavior
    let credentials: Arc<dyn CredentialScheme> = Arc::new(PlaintextCredentials);

    let task_repo = SqliteTaskRepository::new(pool.clone());
    let gate = SessionGate {
        sessions: Arc::new(auth_repo.clone()),
        config: auth_config.clone(),
    };

    // Build router
    let app = Router::new()
        .merge(auth_router(
            auth_repo,
            auth_config.clone(),
            renderer.clone(),
            credentials,
        ))
        .merge(tasks_router(task_repo, gate, auth_config, renderer))
        .layer(TraceLayer::new_for_http());

    // Start server
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
