//! # Verdict API
//!
//! HTTP surface for the Verdict debate-judging service.
//!
//! Features:
//! - Axum-based web server with graceful shutdown
//! - Tower middleware (request ID, tracing, CORS, timeout, body limit)
//! - Startup-time model loading with dependency-injected state
//! - OpenAPI documentation via Swagger UI

pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use server::{ConfigError, ModelConfig, ServerConfig, VerdictServer};
pub use state::AppState;
