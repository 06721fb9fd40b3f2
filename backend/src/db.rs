//! SQLite access for the climate dataset
//!
//! The database file is supplied externally and opened read-only. The schema
//! is declared here rather than discovered at runtime.

use std::{str::FromStr, time::Duration};

use chrono::NaiveDate;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::config::DatabaseConfig;
use crate::models::{Measurement, Station};

/// DDL matching the bundled dataset, one statement per entry
pub const SCHEMA: [&str; 2] = [
    r#"
    CREATE TABLE IF NOT EXISTS station (
        id INTEGER PRIMARY KEY,
        station TEXT NOT NULL,
        name TEXT NOT NULL,
        latitude FLOAT NOT NULL,
        longitude FLOAT NOT NULL,
        elevation FLOAT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS measurement (
        id INTEGER PRIMARY KEY,
        station TEXT NOT NULL,
        date TEXT NOT NULL,
        prcp FLOAT,
        tobs FLOAT NOT NULL
    )
    "#,
];

/// Open the read-only connection pool. A missing file is an error.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.url)?
        .read_only(true)
        .create_if_missing(false);

    SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect_with(options)
        .await
}

/// Check that both tables expose the declared columns
pub async fn verify_schema(db: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query_as::<_, Station>(
        "SELECT id, station, name, latitude, longitude, elevation FROM station LIMIT 1",
    )
    .fetch_optional(db)
    .await?;

    sqlx::query_as::<_, Measurement>(
        "SELECT id, station, date, prcp, tobs FROM measurement LIMIT 1",
    )
    .fetch_optional(db)
    .await?;

    Ok(())
}

/// Newest observation date in the dataset, `None` when the table is empty
pub async fn latest_measurement_date(db: &SqlitePool) -> Result<Option<NaiveDate>, sqlx::Error> {
    let latest = sqlx::query_scalar::<_, Option<NaiveDate>>("SELECT MAX(date) FROM measurement")
        .fetch_one(db)
        .await?;

    Ok(latest)
}
