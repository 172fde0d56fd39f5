use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use async_trait::async_trait;
use rand::RngCore;
use std::collections::HashMap;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::info;

use crate::domain::UserId;

/// Token length in bytes before hex encoding
const TOKEN_BYTES: usize = 20;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("email already registered")]
    Duplicate,

    #[error("unknown user {0:?}")]
    UnknownUser(UserId),

    #[error("failed to hash password: {0}")]
    Hashing(String),
}

/// Credential store used by registration.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn exists(&self, email: &str) -> Result<bool, StoreError>;

    /// Create a user; fails with `StoreError::Duplicate` if the email is taken.
    async fn create_user(&self, email: &str, password: &str) -> Result<UserId, StoreError>;

    /// Issue the opaque auth token for a user. A user holds at most one token.
    async fn create_token(&self, user_id: UserId) -> Result<String, StoreError>;
}

#[derive(Debug)]
struct StoredUser {
    id: UserId,
    password_hash: String,
    token: Option<String>,
}

#[derive(Debug, Default)]
struct Users {
    next_id: u64,
    by_email: HashMap<String, StoredUser>,
}

impl Users {
    fn find_mut(&mut self, user_id: UserId) -> Option<&mut StoredUser> {
        self.by_email.values_mut().find(|u| u.id == user_id)
    }
}

/// Process-local user store. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<Users>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn exists(&self, email: &str) -> Result<bool, StoreError> {
        Ok(self.users.read().await.by_email.contains_key(email))
    }

    async fn create_user(&self, email: &str, password: &str) -> Result<UserId, StoreError> {
        let password_hash = hash_password(password)?;

        let mut users = self.users.write().await;
        if users.by_email.contains_key(email) {
            return Err(StoreError::Duplicate);
        }

        users.next_id += 1;
        let id = UserId(users.next_id);
        users.by_email.insert(
            email.to_string(),
            StoredUser {
                id,
                password_hash,
                token: None,
            },
        );

        info!("Created user {:?}", id);
        Ok(id)
    }

    async fn create_token(&self, user_id: UserId) -> Result<String, StoreError> {
        let mut users = self.users.write().await;
        let user = users
            .find_mut(user_id)
            .ok_or(StoreError::UnknownUser(user_id))?;

        Ok(user.token.get_or_insert_with(generate_token).clone())
    }
}

fn hash_password(password: &str) -> Result<String, StoreError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| StoreError::Hashing(e.to_string()))
}

fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}
