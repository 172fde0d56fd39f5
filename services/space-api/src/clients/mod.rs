pub mod inference_client;
pub mod nasa_client;

pub use inference_client::InferenceClient;
pub use nasa_client::NasaClient;

pub const USER_AGENT: &str = "SpaceAware-API/1.0";
