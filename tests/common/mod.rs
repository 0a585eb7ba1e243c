//! Shared test fixtures: in-memory SQLite datasets.

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// Three stations, ten measurement rows spanning 2015..2017.
///
/// The latest overall date is 2017-08-23, so the final-year cutoff is
/// 2016-08-23. USC1 carries six rows and is the most active station.
/// 2017-08-01 appears for both USC1 and USC2 to exercise duplicate-date
/// mapping semantics.
pub async fn seed_pool() -> SqlitePool {
    let pool = empty_pool().await;

    let stations = [
        ("USC1", "WAIKIKI 717.2, HI US"),
        ("USC2", "KANEOHE 838.1, HI US"),
        ("USC3", "HILO 87.9, HI US"),
    ];
    for (station, name) in stations {
        sqlx::query("INSERT INTO station (station, name) VALUES (?1, ?2)")
            .bind(station)
            .bind(name)
            .execute(&pool)
            .await
            .unwrap();
    }

    let measurements: [(&str, &str, Option<f64>, f64); 10] = [
        ("USC1", "2016-01-01", Some(0.05), 71.0),
        ("USC1", "2016-08-20", None, 76.0),
        ("USC1", "2017-08-01", Some(0.10), 77.0),
        ("USC2", "2016-06-01", Some(0.00), 73.0),
        ("USC2", "2017-08-01", Some(0.25), 75.0),
        ("USC2", "2017-08-10", None, 74.0),
        ("USC1", "2016-09-01", Some(0.30), 72.0),
        ("USC1", "2016-08-23", Some(0.15), 75.0),
        ("USC1", "2017-08-23", Some(0.45), 81.0),
        ("USC3", "2015-01-01", Some(1.00), 65.0),
    ];
    for (station, date, prcp, tobs) in measurements {
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

/// Schema only, zero rows.
pub async fn empty_pool() -> SqlitePool {
    // A single connection keeps every query on the same :memory: database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    sqlx::query("CREATE TABLE station (station TEXT NOT NULL UNIQUE, name TEXT NOT NULL)")
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query(
        "CREATE TABLE measurement (station TEXT NOT NULL, date TEXT NOT NULL, prcp REAL, tobs REAL NOT NULL)",
    )
    .execute(&pool)
    .await
    .unwrap();

    pool
}
