pub mod api_error;
pub mod upstream;

pub use api_error::ApiError;
pub use upstream::UpstreamError;
