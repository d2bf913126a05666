use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("Database error: {0}")]
    StoreUnavailable(#[from] sqlx::Error),

    #[error("Failed to encode response: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    pub fn status_code(&self) -> u16 {
        match self {
            Error::BadRequest(_) => 400,
            Error::NotFound { .. } => 404,
            Error::StoreUnavailable(_) | Error::Serialization(_) => 500,
        }
    }
}
