pub mod rate_limit;
pub mod request_logging;

pub use rate_limit::rate_limit_middleware;
pub use request_logging::request_logging_middleware;
