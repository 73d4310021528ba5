//! Observability for the phase change diagram service.
//!
//! - **Tracing**: structured logging through `tracing` with an env-driven filter
//!   and a plain or JSON output layer
//! - **Health**: the liveness payload served at `/healthz`

pub mod health;
pub mod tracing_setup;

pub use health::{health, HealthStatus};
pub use tracing_setup::{init_tracing, TracingConfig, TracingError};
