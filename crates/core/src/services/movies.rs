use crate::db::DbPool;
use crate::error::{Error, Result};
use crate::models::Movie;

const MOVIE_COLUMNS: &str = "id, title, description, year, release_date, runtime, rating, \
    mpaa_rating, created_at, updated_at";

pub struct MovieService {
    pool: DbPool,
}

impl MovieService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Looks up a single movie. The caller is responsible for passing a positive id.
    pub async fn get_by_id(&self, id: i64) -> Result<Movie> {
        let query = format!("SELECT {MOVIE_COLUMNS} FROM movies WHERE id = ?");

        // fetch_optional keeps "no such row" (Ok(None)) apart from a failed query (Err)
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(Error::NotFound { entity: "movie", id })
    }

    pub async fn list(&self) -> Result<Vec<Movie>> {
        let query = format!("SELECT {MOVIE_COLUMNS} FROM movies");

        let movies = sqlx::query_as::<_, Movie>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(movies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{create_test_db, fixtures};
    use chrono::NaiveDate;

    async fn setup() -> (MovieService, DbPool) {
        let pool = create_test_db().await;
        (MovieService::new(pool.clone()), pool)
    }

    #[tokio::test]
    async fn test_get_movie_by_id() {
        let (service, pool) = setup().await;
        let id = fixtures::insert_movie(&pool, &fixtures::inception()).await;

        let movie = service.get_by_id(id).await.unwrap();
        assert_eq!(movie.id, id);
        assert_eq!(movie.title, "Inception");
        assert_eq!(movie.year, 2010);
        assert_eq!(movie.runtime, 148);
        assert_eq!(movie.rating, 8.8);
        assert_eq!(movie.mpaa_rating, "PG-13");
        assert_eq!(
            movie.release_date,
            NaiveDate::from_ymd_opt(2010, 7, 16).unwrap()
        );
    }

    #[tokio::test]
    async fn test_get_each_movie_by_its_own_id() {
        let (service, pool) = setup().await;
        let first = fixtures::insert_movie(&pool, &fixtures::inception()).await;
        let second = fixtures::insert_movie(&pool, &fixtures::the_matrix()).await;

        for id in [first, second] {
            assert_eq!(service.get_by_id(id).await.unwrap().id, id);
        }
        assert_eq!(service.get_by_id(second).await.unwrap().title, "The Matrix");
    }

    #[tokio::test]
    async fn test_get_nonexistent_movie_fails() {
        let (service, _pool) = setup().await;

        let result = service.get_by_id(9999).await;
        match result.unwrap_err() {
            Error::NotFound { entity, id } => {
                assert_eq!(entity, "movie");
                assert_eq!(id, 9999);
            }
            e => panic!("Expected NotFound error, got {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_get_movie_store_unavailable() {
        let (service, pool) = setup().await;
        pool.close().await;

        match service.get_by_id(1).await.unwrap_err() {
            Error::StoreUnavailable(_) => {}
            e => panic!("Expected StoreUnavailable error, got {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_list_movies() {
        let (service, pool) = setup().await;
        fixtures::insert_movie(&pool, &fixtures::inception()).await;
        fixtures::insert_movie(&pool, &fixtures::the_matrix()).await;

        let movies = service.list().await.unwrap();
        assert_eq!(movies.len(), 2);

        let mut titles: Vec<_> = movies.iter().map(|m| m.title.as_str()).collect();
        titles.sort();
        assert_eq!(titles, vec!["Inception", "The Matrix"]);
    }

    #[tokio::test]
    async fn test_list_movies_empty() {
        let (service, _pool) = setup().await;

        let movies = service.list().await.unwrap();
        assert!(movies.is_empty());
    }

    #[tokio::test]
    async fn test_list_movies_store_unavailable() {
        let (service, pool) = setup().await;
        pool.close().await;

        match service.list().await.unwrap_err() {
            Error::StoreUnavailable(_) => {}
            e => panic!("Expected StoreUnavailable error, got {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_movie_timestamps_are_store_assigned() {
        let (service, pool) = setup().await;
        let id = fixtures::insert_movie(&pool, &fixtures::inception()).await;

        let movie = service.get_by_id(id).await.unwrap();
        assert!(movie.created_at <= chrono::Utc::now());
        assert_eq!(movie.created_at, movie.updated_at);
    }
}
