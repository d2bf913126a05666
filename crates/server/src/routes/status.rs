use std::sync::Arc;

use axum::{Json, extract::State};
use serde::Serialize;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct AppStatus {
    pub status: &'static str,
    pub environment: &'static str,
    pub version: &'static str,
}

pub async fn status(State(state): State<Arc<AppState>>) -> Json<AppStatus> {
    Json(AppStatus {
        status: "available",
        environment: state.app_env.as_str(),
        version: env!("CARGO_PKG_VERSION"),
    })
}
