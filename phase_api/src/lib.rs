// Phase Change Diagram API Library
//
// HTTP server exposing interpolated liquid/vapor specific volumes for a
// requested pressure, plus a liveness probe.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

pub use config::{ConfigError, ServeArgs, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use routes::router;
pub use server::ApiServer;
pub use state::ApiState;
