use std::env;
use std::time::Duration;

/// Placeholder shipped in sample env files for the NASA key.
pub const NASA_PLACEHOLDER_KEY: &str = "DEMO_KEY";
/// Placeholder shipped in sample env files for the Hugging Face key.
pub const HF_PLACEHOLDER_KEY: &str = "hf_demo";

pub const DEFAULT_NASA_APOD_URL: &str = "https://api.nasa.gov/planetary/apod";
pub const DEFAULT_HF_INFERENCE_URL: &str = "https://api-inference.huggingface.co/models";
pub const DEFAULT_HF_MODEL: &str = "OpenAssistant/oasst-sft-4-pythia-12b-epoch-3.5";

#[derive(Clone, Debug)]
pub struct Config {
    pub nasa_api_key: String,
    pub hf_api_key: String,
    pub nasa_apod_url: String,
    pub hf_inference_url: String,
    pub hf_model: String,
    pub nasa_timeout_secs: u64,

    // Rate limiting
    pub rate_limit_max_requests: u32,
    pub rate_limit_window_secs: u64,

    pub server_host: String,
    pub server_port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            nasa_api_key: env::var("NASA_API_KEY")
                .unwrap_or_else(|_| NASA_PLACEHOLDER_KEY.to_string()),
            hf_api_key: env::var("HF_API_KEY")
                .unwrap_or_default(),
            nasa_apod_url: env::var("NASA_APOD_URL")
                .unwrap_or_else(|_| DEFAULT_NASA_APOD_URL.to_string()),
            hf_inference_url: env::var("HF_INFERENCE_URL")
                .unwrap_or_else(|_| DEFAULT_HF_INFERENCE_URL.to_string()),
            hf_model: env::var("HF_MODEL")
                .unwrap_or_else(|_| DEFAULT_HF_MODEL.to_string()),
            nasa_timeout_secs: Self::env_parse("NASA_TIMEOUT_SECS", 5),

            rate_limit_max_requests: Self::env_parse("RATE_LIMIT_MAX_REQUESTS", 100),
            rate_limit_window_secs: Self::env_parse("RATE_LIMIT_WINDOW_SECS", 60),

            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: Self::env_parse("SERVER_PORT", 8000),
        })
    }

    /// NASA key, or `None` when it is empty or still the placeholder.
    pub fn nasa_key(&self) -> Option<&str> {
        configured(&self.nasa_api_key, NASA_PLACEHOLDER_KEY)
    }

    /// Hugging Face key, or `None` when it is empty or still the placeholder.
    pub fn hf_key(&self) -> Option<&str> {
        configured(&self.hf_api_key, HF_PLACEHOLDER_KEY)
    }

    pub fn nasa_timeout(&self) -> Duration {
        Duration::from_secs(self.nasa_timeout_secs)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
        env::var(key)
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(default)
    }
}

impl Default for Config {
    /// Fully degraded configuration: no usable upstream keys.
    fn default() -> Self {
        Self {
            nasa_api_key: NASA_PLACEHOLDER_KEY.to_string(),
            hf_api_key: String::new(),
            nasa_apod_url: DEFAULT_NASA_APOD_URL.to_string(),
            hf_inference_url: DEFAULT_HF_INFERENCE_URL.to_string(),
            hf_model: DEFAULT_HF_MODEL.to_string(),
            nasa_timeout_secs: 5,
            rate_limit_max_requests: 100,
            rate_limit_window_secs: 60,
            server_host: "0.0.0.0".to_string(),
            server_port: 8000,
        }
    }
}

fn configured<'a>(key: &'a str, placeholder: &str) -> Option<&'a str> {
    let key = key.trim();
    if key.is_empty() || key == placeholder {
        None
    } else {
        Some(key)
    }
}
