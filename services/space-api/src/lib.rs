pub mod clients;
pub mod config;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod repo;
pub mod routes;
pub mod services;
pub mod state;

pub use config::Config;
pub use errors::{ApiError, UpstreamError};
pub use state::AppState;
