use axum::extract::{Query, State};
use axum::Json;

use crate::domain::{ImageRecord, ImagesQuery};
use crate::services::ImageService;
use crate::state::AppState;

/// Astronomy picture of the day
pub async fn get_apod(State(state): State<AppState>) -> Json<ImageRecord> {
    Json(ImageService::apod(&state.nasa, &state.config).await)
}

/// Batch of random astronomy pictures, `?count=` clamped to [1, 20]
pub async fn get_space_images(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Json<Vec<ImageRecord>> {
    // Raw pairs so repeated or malformed parameters never reject the request
    let count = ImagesQuery::from_pairs(params).resolved_count();
    Json(ImageService::space_images(&state.nasa, &state.config, count).await)
}
