use axum::Json;

use crate::domain::{Alert, ALERTS};

pub async fn alerts() -> Json<[Alert; 3]> {
    Json(ALERTS)
}
