//! Climate service: read-only aggregation queries over the measurement data

use chrono::NaiveDate;
use shared::{
    DateBounds, PrecipitationReading, ReportingWindow, StationSummary, TemperatureAggregate,
    TemperatureObservation,
};
use sqlx::{FromRow, SqlitePool};

use crate::error::AppResult;

/// Climate service for querying stations and measurements
#[derive(Clone)]
pub struct ClimateService {
    db: SqlitePool,
}

#[derive(Debug, FromRow)]
struct PrecipitationRow {
    date: NaiveDate,
    prcp: Option<f64>,
}

#[derive(Debug, FromRow)]
struct TemperatureRow {
    date: NaiveDate,
    tobs: f64,
}

#[derive(Debug, FromRow)]
struct AggregateRow {
    date: NaiveDate,
    min_tobs: f64,
    avg_tobs: f64,
    max_tobs: f64,
}

#[derive(Debug, FromRow)]
struct StationRow {
    station: String,
    name: String,
}

impl ClimateService {
    /// Create a new ClimateService instance
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Precipitation after the window cutoff, one row per date.
    ///
    /// `prcp` is not aggregated, so SQLite reports the value of an arbitrary
    /// row within each date group.
    pub async fn precipitation(
        &self,
        window: &ReportingWindow,
    ) -> AppResult<Vec<PrecipitationReading>> {
        let rows = sqlx::query_as::<_, PrecipitationRow>(
            r#"
            SELECT date, CAST(prcp AS REAL) AS prcp
            FROM measurement
            WHERE date > ?1
            GROUP BY date
            ORDER BY date ASC
            "#,
        )
        .bind(window.cutoff_date)
        .fetch_all(&self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| PrecipitationReading {
                date: row.date,
                prcp: row.prcp,
            })
            .collect())
    }

    /// Distinct stations ordered by code
    pub async fn stations(&self) -> AppResult<Vec<StationSummary>> {
        let rows = sqlx::query_as::<_, StationRow>(
            r#"
            SELECT station, MIN(name) AS name
            FROM station
            GROUP BY station
            ORDER BY station ASC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| StationSummary {
                station: row.station,
                name: row.name,
            })
            .collect())
    }

    /// Temperature observations after the window cutoff, one arbitrary row per date
    pub async fn temperature_observations(
        &self,
        window: &ReportingWindow,
    ) -> AppResult<Vec<TemperatureObservation>> {
        let rows = sqlx::query_as::<_, TemperatureRow>(
            r#"
            SELECT date, CAST(tobs AS REAL) AS tobs
            FROM measurement
            WHERE date > ?1
            GROUP BY date
            ORDER BY date ASC
            "#,
        )
        .bind(window.cutoff_date)
        .fetch_all(&self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| TemperatureObservation {
                date: row.date,
                tob: row.tobs,
            })
            .collect())
    }

    /// Min, average and max temperature per date within the inclusive bounds.
    /// Missing bounds are not applied.
    pub async fn temperature_summary(
        &self,
        bounds: &DateBounds,
    ) -> AppResult<Vec<TemperatureAggregate>> {
        if bounds.is_inverted() {
            tracing::debug!("Start date after end date, returning empty summary");
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, AggregateRow>(
            r#"
            SELECT
                date,
                CAST(MIN(tobs) AS REAL) AS min_tobs,
                CAST(AVG(tobs) AS REAL) AS avg_tobs,
                CAST(MAX(tobs) AS REAL) AS max_tobs
            FROM measurement
            WHERE (?1 IS NULL OR date >= ?1)
              AND (?2 IS NULL OR date <= ?2)
            GROUP BY date
            ORDER BY date ASC
            "#,
        )
        .bind(bounds.start)
        .bind(bounds.end)
        .fetch_all(&self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                TemperatureAggregate::new(row.date, row.min_tobs, row.avg_tobs, row.max_tobs)
            })
            .collect())
    }
}
