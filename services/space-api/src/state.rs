use std::sync::Arc;

use crate::clients::{InferenceClient, NasaClient};
use crate::config::Config;
use crate::middleware::rate_limit::{new_rate_limiter, RateLimiter};
use crate::repo::{InMemoryUserStore, UserStore};

/// Shared request context; everything except the rate limiter is read-only.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub nasa: NasaClient,
    pub inference: InferenceClient,
    pub users: Arc<dyn UserStore>,
    pub limiter: RateLimiter,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        Ok(Self {
            nasa: NasaClient::new(&config)?,
            inference: InferenceClient::new(&config)?,
            users: Arc::new(InMemoryUserStore::new()),
            limiter: new_rate_limiter(),
            config,
        })
    }

    pub fn with_user_store(mut self, users: Arc<dyn UserStore>) -> Self {
        self.users = users;
        self
    }
}
