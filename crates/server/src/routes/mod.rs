pub mod genres;
pub mod movies;
pub mod status;

use axum::http::{Method, Uri};

use crate::ApiError;

/// Answers unknown paths with the error envelope instead of an empty 404
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::not_found(format!("No route for {}", uri.path()))
}

pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::method_not_allowed(format!("{} is not allowed on {}", method, uri.path()))
}
