//! Verdict API server with graceful shutdown
//!
//! Startup order is fixed: resolve configuration, load both models
//! (fatal on failure), build the shared state, then serve. Models are
//! loaded exactly once and never reloaded per request.

use axum::{middleware, Router};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;

use crate::error::ApiError;
use crate::middleware::{
    body_limit_layer, cors_layer, request_id_middleware, timeout_layer, tracing_middleware,
};
use crate::routes::api_router;
use crate::state::AppState;
use verdict_core::{DebateJudge, UnknownTeamPolicy};
use verdict_model::{BertRegressionScorer, ModelSource, T5Generator};

/// Error types for configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing environment variable: set {0}")]
    MissingEnvVar(String),
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server address
    pub addr: SocketAddr,
    /// Request timeout
    pub timeout: Duration,
    /// Max request body size (bytes)
    pub max_body_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            timeout: Duration::from_secs(30),
            max_body_size: 1024 * 1024, // 1MB
        }
    }
}

impl ServerConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let port: u16 = std::env::var("VERDICT_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        let timeout_secs: u64 = std::env::var("VERDICT_TIMEOUT_SECS")
            .ok()
            .and_then(|t| t.parse().ok())
            .unwrap_or(30);

        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], port)),
            timeout: Duration::from_secs(timeout_secs),
            ..Default::default()
        }
    }
}

/// Model configuration, resolved once at startup
#[derive(Debug, Clone)]
pub struct ModelConfig {
    /// Where the argument scorer loads from
    pub scorer: ModelSource,
    /// Where the justification generator loads from
    pub generator: ModelSource,
    /// How unknown team values are treated
    pub policy: UnknownTeamPolicy,
}

impl ModelConfig {
    /// Create from environment variables.
    ///
    /// Each model needs either a local directory (`VERDICT_SCORER_DIR`,
    /// `VERDICT_GENERATOR_DIR`) or a hub repo (`VERDICT_SCORER_REPO`,
    /// `VERDICT_GENERATOR_REPO`); the local directory wins when both are
    /// set. `VERDICT_STRICT_TEAMS=1` rejects unknown team values instead
    /// of dropping them.
    pub fn from_env() -> Result<Self, ConfigError> {
        let scorer = source_from_env("VERDICT_SCORER_DIR", "VERDICT_SCORER_REPO")?;
        let generator = source_from_env("VERDICT_GENERATOR_DIR", "VERDICT_GENERATOR_REPO")?;

        let strict = std::env::var("VERDICT_STRICT_TEAMS")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        let policy = if strict {
            UnknownTeamPolicy::Reject
        } else {
            UnknownTeamPolicy::Drop
        };

        Ok(Self {
            scorer,
            generator,
            policy,
        })
    }
}

fn source_from_env(dir_var: &str, repo_var: &str) -> Result<ModelSource, ConfigError> {
    if let Ok(dir) = std::env::var(dir_var) {
        return Ok(ModelSource::LocalDir(PathBuf::from(dir)));
    }
    if let Ok(repo) = std::env::var(repo_var) {
        return Ok(ModelSource::HubRepo(repo));
    }
    Err(ConfigError::MissingEnvVar(format!(
        "{dir_var} or {repo_var}"
    )))
}

/// Verdict API server
pub struct VerdictServer {
    config: ServerConfig,
    app_state: AppState,
}

impl VerdictServer {
    /// Load both models and build the server.
    ///
    /// A model-load failure here is fatal: the process must exit instead
    /// of serving requests it cannot judge.
    pub fn new(config: ServerConfig, models: &ModelConfig) -> Result<Self, ApiError> {
        tracing::info!(source = ?models.scorer, "loading argument scorer");
        let scorer = BertRegressionScorer::load(&models.scorer)?;

        tracing::info!(source = ?models.generator, "loading justification generator");
        let generator = T5Generator::load(&models.generator)?;

        let judge = DebateJudge::new(Arc::new(scorer), Arc::new(generator), models.policy);
        Ok(Self {
            config,
            app_state: AppState::new(Arc::new(judge)),
        })
    }

    /// Build a server around preconstructed state. Used by tests to
    /// inject mock models.
    pub fn with_state(config: ServerConfig, app_state: AppState) -> Self {
        Self { config, app_state }
    }

    /// Get the configured router
    pub fn router(&self) -> Router {
        // Later layers wrap earlier ones: the request ID must be set
        // before the tracing span reads it, so it sits further out.
        api_router(self.app_state.clone())
            .layer(middleware::from_fn(tracing_middleware))
            .layer(middleware::from_fn(request_id_middleware))
            .layer(cors_layer())
            .layer(timeout_layer(self.config.timeout))
            .layer(body_limit_layer(self.config.max_body_size))
    }

    /// Run the server with graceful shutdown
    pub async fn run(self) -> Result<(), ApiError> {
        let addr = self.config.addr;
        let app = self.router();

        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Verdict API listening on http://{}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => tracing::error!("Failed to install SIGTERM handler: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}

/// Initialize tracing subscriber
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,verdict_api=debug,tower_http=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}
