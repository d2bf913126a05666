//! Test helpers for creating in-memory test databases and fixtures

use crate::db::DbPool;
use sqlx::sqlite::SqlitePoolOptions;

/// Creates an in-memory SQLite database with all migrations applied
pub async fn create_test_db() -> DbPool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    crate::db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Test fixtures for common test data
pub mod fixtures {
    use crate::db::DbPool;

    pub struct MovieFixture {
        pub title: &'static str,
        pub description: &'static str,
        pub year: i32,
        pub release_date: &'static str,
        pub runtime: i32,
        pub rating: f64,
        pub mpaa_rating: &'static str,
    }

    pub fn inception() -> MovieFixture {
        MovieFixture {
            title: "Inception",
            description: "A thief who steals corporate secrets through dream-sharing technology.",
            year: 2010,
            release_date: "2010-07-16",
            runtime: 148,
            rating: 8.8,
            mpaa_rating: "PG-13",
        }
    }

    pub fn the_matrix() -> MovieFixture {
        MovieFixture {
            title: "The Matrix",
            description: "A hacker learns the true nature of his reality.",
            year: 1999,
            release_date: "1999-03-31",
            runtime: 136,
            rating: 8.7,
            mpaa_rating: "R",
        }
    }

    /// Inserts a movie row and returns the id the store assigned to it
    pub async fn insert_movie(pool: &DbPool, movie: &MovieFixture) -> i64 {
        sqlx::query(
            r#"
            INSERT INTO movies (title, description, year, release_date, runtime, rating, mpaa_rating)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(movie.title)
        .bind(movie.description)
        .bind(movie.year)
        .bind(movie.release_date)
        .bind(movie.runtime)
        .bind(movie.rating)
        .bind(movie.mpaa_rating)
        .execute(pool)
        .await
        .expect("Failed to insert test movie")
        .last_insert_rowid()
    }

    pub async fn insert_genre(pool: &DbPool, name: &str) -> i64 {
        sqlx::query("INSERT INTO genres (genre_name) VALUES (?)")
            .bind(name)
            .execute(pool)
            .await
            .expect("Failed to insert test genre")
            .last_insert_rowid()
    }
}
