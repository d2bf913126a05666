use crate::db::DbPool;
use crate::error::Result;
use crate::models::Genre;

pub struct GenreService {
    pool: DbPool,
}

impl GenreService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Genre>> {
        let genres = sqlx::query_as::<_, Genre>("SELECT id, genre_name FROM genres")
            .fetch_all(&self.pool)
            .await?;

        Ok(genres)
    }
}
