use tracing::{error, info};
use validator::Validate;

use crate::domain::{RegisterRequest, RegisterResponse};
use crate::errors::ApiError;
use crate::repo::{StoreError, UserStore};

pub struct RegistrationService;

impl RegistrationService {
    /// Create the user if the email is free and issue their token.
    pub async fn register(
        store: &dyn UserStore,
        request: RegisterRequest,
    ) -> Result<RegisterResponse, ApiError> {
        let (email, password) = match (request.email.as_deref(), request.password.as_deref()) {
            (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
                (email, password)
            }
            _ => return Err(ApiError::validation("Email and password are required")),
        };

        request
            .validate()
            .map_err(|_| ApiError::validation("Enter a valid email address"))?;

        if store.exists(email).await.map_err(store_failure)? {
            return Err(ApiError::validation("Email already exists"));
        }

        let user_id = store
            .create_user(email, password)
            .await
            .map_err(store_failure)?;
        let token = store.create_token(user_id).await.map_err(store_failure)?;

        info!("Registered user {:?}", user_id);
        Ok(RegisterResponse { token })
    }
}

fn store_failure(err: StoreError) -> ApiError {
    match err {
        // Lost a race with a concurrent registration for the same email
        StoreError::Duplicate => ApiError::validation("Email already exists"),
        other => {
            error!("Error during registration: {}", other);
            ApiError::internal("Registration failed")
        }
    }
}
