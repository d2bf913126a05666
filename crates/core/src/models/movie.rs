use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A catalog entry as stored in the `movies` table
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub description: String,

    // Release
    pub year: i32,
    pub release_date: NaiveDate,
    pub runtime: i32,

    // Ratings
    pub rating: f64,
    pub mpaa_rating: String, // MPAA/FSK

    // Timestamps
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
