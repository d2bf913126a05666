use std::sync::Arc;

use axum::extract::{Path, State, rejection::PathRejection};

use movie_catalog_core::{Error, models::Movie};

use crate::{ApiError, ApiResult, AppState, Envelope};

/// Accepts only positive integers; anything else never reaches the store.
fn parse_id(raw: &str) -> Result<i64, Error> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(Error::BadRequest(format!("invalid id parameter: {raw:?}"))),
    }
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Envelope<Movie>> {
    let Path(raw_id) = path.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
    let id = parse_id(&raw_id)?;

    let movie = state.movie_service.get_by_id(id).await?;
    Ok(Envelope::new("movie", movie))
}

pub async fn list(State(state): State<Arc<AppState>>) -> ApiResult<Envelope<Vec<Movie>>> {
    let movies = state.movie_service.list().await?;
    Ok(Envelope::new("movies", movies))
}
