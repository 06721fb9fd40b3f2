//! Climate API integration tests
//!
//! Drives the full router against an in-memory SQLite dataset:
//! - Last-year precipitation and temperature observations
//! - Station listing
//! - Temperature summaries by date bounds
//! - Failure envelope for malformed dates

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use climate_backend::{create_app, db, AppState, Config};
use proptest::prelude::*;
use serde_json::Value;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use tower::ServiceExt;

const STATIONS: &[(i64, &str, &str)] = &[
    (1, "USC00519397", "WAIKIKI 717.2, HI US"),
    (2, "USC00513117", "KANEOHE 838.1, HI US"),
    // Same station listed twice
    (3, "USC00519397", "WAIKIKI 717.2, HI US"),
];

const MEASUREMENTS: &[(&str, &str, Option<f64>, f64)] = &[
    ("USC00519397", "2016-08-22", Some(0.1), 75.0),
    ("USC00519397", "2016-08-23", Some(0.2), 76.0),
    ("USC00519397", "2016-08-24", Some(0.08), 79.0),
    ("USC00513117", "2016-08-24", None, 77.0),
    ("USC00519397", "2017-01-01", Some(0.0), 60.0),
    ("USC00513117", "2017-01-01", Some(0.5), 70.0),
    ("USC00519397", "2017-01-02", Some(0.0), 65.0),
    ("USC00519397", "2017-02-01", Some(0.0), 70.0),
    ("USC00513117", "2017-02-01", Some(0.0), 71.0),
    ("USC00513117", "2017-02-01", Some(0.1), 71.0),
    ("USC00519397", "2017-08-23", Some(0.0), 81.0),
];

async fn seeded_pool() -> SqlitePool {
    // A single connection that never expires keeps the in-memory database alive
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    for statement in db::SCHEMA {
        sqlx::query(statement).execute(&pool).await.unwrap();
    }

    for (id, code, name) in STATIONS {
        sqlx::query(
            "INSERT INTO station (id, station, name, latitude, longitude, elevation) VALUES (?1, ?2, ?3, 21.2716, -157.8168, 3.0)",
        )
        .bind(id)
        .bind(code)
        .bind(name)
        .execute(&pool)
        .await
        .unwrap();
    }

    for (station, date, prcp, tobs) in MEASUREMENTS {
        sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES (?1, ?2, ?3, ?4)")
            .bind(station)
            .bind(date)
            .bind(prcp)
            .bind(tobs)
            .execute(&pool)
            .await
            .unwrap();
    }

    pool
}

async fn test_app() -> Router {
    let pool = seeded_pool().await;
    let latest = db::latest_measurement_date(&pool).await.unwrap();
    let config = Config {
        environment: "test".to_string(),
        ..Config::default()
    };
    create_app(AppState::new(pool, config, latest))
}

async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(app, uri).await;
    (status, serde_json::from_str(&body).unwrap())
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn record_dates(value: &Value) -> Vec<NaiveDate> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|record| date(record["date"].as_str().unwrap()))
        .collect()
}

fn assert_failure_envelope(status: StatusCode, body: &Value) {
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "failure");
    assert!(!body["error"].as_str().unwrap().is_empty());
}

// ============================================================================
// Endpoint Tests
// ============================================================================

#[cfg(test)]
mod endpoint_tests {
    use super::*;

    #[tokio::test]
    async fn test_home_lists_routes() {
        let app = test_app().await;
        let (status, body) = get(&app, "/").await;

        assert_eq!(status, StatusCode::OK);
        for route in ["/precipitation", "/stations", "/tobs", "/search_type"] {
            assert!(body.contains(route), "missing {route}");
        }
    }

    #[tokio::test]
    async fn test_precipitation_one_entry_per_date_after_cutoff() {
        let app = test_app().await;
        let (status, body) = get_json(&app, "/precipitation").await;

        assert_eq!(status, StatusCode::OK);
        let dates = record_dates(&body);
        assert_eq!(dates.len(), 5);
        assert!(dates.iter().all(|d| *d > date("2016-08-23")));

        let mut unique = dates.clone();
        unique.dedup();
        assert_eq!(unique, dates);

        for record in body.as_array().unwrap() {
            assert!(record.get("prcp").is_some());
        }
    }

    #[tokio::test]
    async fn test_stations_are_distinct() {
        let app = test_app().await;
        let (status, body) = get_json(&app, "/stations").await;

        assert_eq!(status, StatusCode::OK);
        let stations = body.as_array().unwrap();
        assert_eq!(stations.len(), 2);
        assert_eq!(stations[0]["station"], "USC00513117");
        assert_eq!(stations[0]["name"], "KANEOHE 838.1, HI US");
        assert_eq!(stations[1]["station"], "USC00519397");
    }

    #[tokio::test]
    async fn test_tobs_one_entry_per_date_after_cutoff() {
        let app = test_app().await;
        let (status, body) = get_json(&app, "/tobs").await;

        assert_eq!(status, StatusCode::OK);
        let dates = record_dates(&body);
        assert_eq!(dates.len(), 5);
        assert!(dates.iter().all(|d| *d > date("2016-08-23")));

        let last = body.as_array().unwrap().last().unwrap();
        assert_eq!(last["date"], "2017-08-23");
        assert_eq!(last["tob"], 81.0);
    }

    #[tokio::test]
    async fn test_summary_between_groups_per_date() {
        let app = test_app().await;
        let (status, body) = get_json(&app, "/2017-01-01/2017-01-02").await;

        assert_eq!(status, StatusCode::OK);
        let rows = body.as_array().unwrap();
        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0]["date"], "2017-01-01");
        assert_eq!(rows[0]["min (°F)"], 60.0);
        assert_eq!(rows[0]["avg (°F)"], 65.0);
        assert_eq!(rows[0]["max (°F)"], 70.0);

        assert_eq!(rows[1]["date"], "2017-01-02");
        assert_eq!(rows[1]["min (°F)"], 65.0);
        assert_eq!(rows[1]["avg (°F)"], 65.0);
        assert_eq!(rows[1]["max (°F)"], 65.0);
    }

    #[tokio::test]
    async fn test_summary_rounds_average() {
        let app = test_app().await;
        let (_, body) = get_json(&app, "/2017-02-01/2017-02-01").await;

        let row = &body.as_array().unwrap()[0];
        assert_eq!(row["min (°F)"], 70.0);
        assert_eq!(row["avg (°F)"], 70.67);
        assert_eq!(row["max (°F)"], 71.0);
    }

    #[tokio::test]
    async fn test_summary_from_start_is_inclusive() {
        let app = test_app().await;
        let (status, body) = get_json(&app, "/2017-01-01").await;

        assert_eq!(status, StatusCode::OK);
        let dates = record_dates(&body);
        assert_eq!(dates.len(), 4);
        assert_eq!(dates[0], date("2017-01-01"));
        assert!(dates.iter().all(|d| *d >= date("2017-01-01")));
    }

    #[tokio::test]
    async fn test_inverted_range_is_empty() {
        let app = test_app().await;
        let (status, body) = get_json(&app, "/2017-02-01/2017-01-01").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_malformed_dates_return_failure_envelope() {
        let app = test_app().await;

        for uri in [
            "/foo",
            "/2017%2F08%2F23",
            "/20170823",
            "/2017-01-01/foo",
            "/bar/2017-01-01",
            "/2017-02-30",
            "/search_type?start=foo",
            "/search_type?end=2017%2F08%2F23",
        ] {
            let (status, body) = get_json(&app, uri).await;
            assert_failure_envelope(status, &body);
        }
    }

    #[tokio::test]
    async fn test_search_without_params_returns_all_dates() {
        let app = test_app().await;
        let (status, body) = get_json(&app, "/search_type").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(record_dates(&body).len(), 7);
    }

    #[tokio::test]
    async fn test_search_with_start_matches_start_route() {
        let app = test_app().await;
        let (_, searched) = get_json(&app, "/search_type?start=2017-01-01").await;
        let (_, direct) = get_json(&app, "/2017-01-01").await;

        assert_eq!(searched, direct);
    }

    #[tokio::test]
    async fn test_search_with_end_only() {
        let app = test_app().await;
        let (_, body) = get_json(&app, "/search_type?end=2016-08-24").await;

        let dates = record_dates(&body);
        assert_eq!(dates.len(), 3);
        assert!(dates.iter().all(|d| *d <= date("2016-08-24")));
    }

    #[tokio::test]
    async fn test_search_with_both_bounds_matches_range_route() {
        let app = test_app().await;
        let (_, searched) =
            get_json(&app, "/search_type?start=2016-08-24&end=2017-01-02").await;
        let (_, direct) = get_json(&app, "/2016-08-24/2017-01-02").await;

        assert_eq!(searched, direct);
        assert_eq!(record_dates(&direct).len(), 3);
    }

    #[tokio::test]
    async fn test_versioned_prefix_serves_same_data() {
        let app = test_app().await;

        for route in ["/stations", "/tobs", "/precipitation", "/2017-01-01/2017-01-02"] {
            let (_, plain) = get_json(&app, route).await;
            let (status, versioned) = get_json(&app, &format!("/api/v1.0{route}")).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(plain, versioned);
        }
    }

    #[tokio::test]
    async fn test_health_reports_window() {
        let app = test_app().await;
        let (status, body) = get_json(&app, "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["environment"], "test");
        assert_eq!(body["database"], "connected");
        assert_eq!(body["reference_date"], "2017-08-23");
        assert_eq!(body["cutoff_date"], "2016-08-23");
        assert_eq!(body["latest_date"], "2017-08-23");
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    fn seeded_dates() -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = MEASUREMENTS.iter().map(|m| date(m.1)).collect();
        dates.dedup();
        dates
    }

    fn day_strategy() -> impl Strategy<Value = NaiveDate> {
        (0i64..420).prop_map(|offset| date("2016-08-01") + chrono::Duration::days(offset))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        /// Every summary row lies within the requested bounds, one row per matching date
        #[test]
        fn prop_summary_respects_bounds(start in day_strategy(), end in day_strategy()) {
            let runtime = tokio::runtime::Runtime::new().unwrap();
            let body = runtime.block_on(async {
                let app = test_app().await;
                get_json(&app, &format!("/{start}/{end}")).await.1
            });

            let dates = record_dates(&body);
            let expected: Vec<NaiveDate> = seeded_dates()
                .into_iter()
                .filter(|d| *d >= start && *d <= end)
                .collect();

            prop_assert!(dates.iter().all(|d| *d >= start && *d <= end));
            prop_assert_eq!(dates, expected);
        }
    }
}
