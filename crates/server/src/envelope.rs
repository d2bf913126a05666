//! Success envelope: every payload goes out as a single-key JSON object,
//! e.g. `{"movie": {...}}` or `{"genres": [...]}`.

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Serialize, Serializer, ser::SerializeMap};

use movie_catalog_core::Error;

use crate::ApiError;

#[derive(Debug)]
pub struct Envelope<T> {
    key: &'static str,
    payload: T,
    status: StatusCode,
}

impl<T: Serialize> Envelope<T> {
    pub fn new(key: &'static str, payload: T) -> Self {
        Self {
            key,
            payload,
            status: StatusCode::OK,
        }
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }
}

impl<T: Serialize> Serialize for Envelope<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.key, &self.payload)?;
        map.end()
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self) {
            Ok(body) => (
                self.status,
                [(header::CONTENT_TYPE, "application/json")],
                body,
            )
                .into_response(),
            // An unencodable payload is a server fault, never the client's
            Err(err) => ApiError::from(Error::Serialization(err)).into_response(),
        }
    }
}
