use std::sync::Arc;

use axum::extract::State;

use movie_catalog_core::models::Genre;

use crate::{ApiResult, AppState, Envelope};

pub async fn list(State(state): State<Arc<AppState>>) -> ApiResult<Envelope<Vec<Genre>>> {
    let genres = state.genre_service.list().await?;
    Ok(Envelope::new("genres", genres))
}
