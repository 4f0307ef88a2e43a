//! # Axum Helpers
//!
//! Shared HTTP plumbing for the scheduler services.
//!
//! ## Modules
//!
//! - **[`errors`]**: Structured error responses with error codes
//! - **[`extractors`]**: Path and query extractors that answer with the error envelope
//! - **[`server`]**: Router assembly, health endpoint, graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{ShutdownCoordinator, create_app, create_router};
//! use core_config::server::ServerConfig;
//!
//! let router = create_router::<ApiDoc>(Router::new());
//! create_app(router, &ServerConfig::default(), ShutdownCoordinator::new()).await?;
//! ```

pub mod errors;
pub mod extractors;
pub mod server;

pub use errors::{AppError, ErrorCode, ErrorResponse};
pub use extractors::{IdPath, QueryParams};
pub use server::{
    HealthResponse, ShutdownCoordinator, create_app, create_router, health_router, shutdown_signal,
};
