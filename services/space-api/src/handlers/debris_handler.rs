use axum::Json;

use crate::domain::OrbitalObject;
use crate::services::debris_feed;

/// Freshly generated mock orbital objects
pub async fn space_debris() -> Json<Vec<OrbitalObject>> {
    Json(debris_feed())
}
