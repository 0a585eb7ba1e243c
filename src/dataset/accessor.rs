//! Filtered and aggregated reads over the measurement and station tables.

use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use super::models::{Measurement, Station, TempAggregate};
use crate::error::DatasetError;

/// Typed query operations over the read-only climate dataset.
///
/// Holds a connection pool; every operation checks a connection out for its
/// own scope and the pool takes it back on every exit path, errors included.
/// Concurrent requests therefore never share cursor state.
#[derive(Clone)]
pub struct DatasetAccessor {
    pool: SqlitePool,
}

impl DatasetAccessor {
    /// Open the SQLite dataset at `path` read-only.
    pub async fn open(path: &Path) -> Result<Self, DatasetError> {
        let options = SqliteConnectOptions::new().filename(path).read_only(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(8)
            .connect_with(options)
            .await?;
        Ok(Self { pool })
    }

    /// Wrap an existing pool (used by tests with in-memory fixtures).
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Latest measurement date across the whole dataset.
    pub async fn max_date(&self) -> Result<String, DatasetError> {
        let mut conn = self.pool.acquire().await?;
        let latest: Option<String> = sqlx::query_scalar("SELECT MAX(date) FROM measurement")
            .fetch_one(&mut *conn)
            .await?;
        latest.ok_or(DatasetError::EmptyDataset)
    }

    /// Latest measurement date recorded by one station.
    pub async fn max_date_for_station(&self, station: &str) -> Result<String, DatasetError> {
        let mut conn = self.pool.acquire().await?;
        let latest: Option<String> =
            sqlx::query_scalar("SELECT MAX(date) FROM measurement WHERE station = ?1")
                .bind(station)
                .fetch_one(&mut *conn)
                .await?;
        latest.ok_or(DatasetError::EmptyDataset)
    }

    /// Measurements with `date >= from` and, when given, `date <= to`.
    ///
    /// Rows come back date-ascending; rows sharing a date keep insertion
    /// order, so a caller folding them into a map sees later rows last.
    pub async fn range_by_date(
        &self,
        from: &str,
        to: Option<&str>,
    ) -> Result<Vec<Measurement>, DatasetError> {
        let mut conn = self.pool.acquire().await?;
        let rows = match to {
            Some(to) => {
                sqlx::query_as::<_, Measurement>(
                    "SELECT station, date, prcp, tobs FROM measurement \
                     WHERE date >= ?1 AND date <= ?2 ORDER BY date ASC, rowid ASC",
                )
                .bind(from)
                .bind(to)
                .fetch_all(&mut *conn)
                .await?
            }
            None => {
                sqlx::query_as::<_, Measurement>(
                    "SELECT station, date, prcp, tobs FROM measurement \
                     WHERE date >= ?1 ORDER BY date ASC, rowid ASC",
                )
                .bind(from)
                .fetch_all(&mut *conn)
                .await?
            }
        };
        Ok(rows)
    }

    /// Measurements for one station with `date >= from`, in scan order.
    pub async fn range_for_station(
        &self,
        station: &str,
        from: &str,
    ) -> Result<Vec<Measurement>, DatasetError> {
        let mut conn = self.pool.acquire().await?;
        let rows = sqlx::query_as::<_, Measurement>(
            "SELECT station, date, prcp, tobs FROM measurement \
             WHERE station = ?1 AND date >= ?2 ORDER BY rowid ASC",
        )
        .bind(station)
        .bind(from)
        .fetch_all(&mut *conn)
        .await?;
        Ok(rows)
    }

    /// All station rows in scan order.
    pub async fn all_stations(&self) -> Result<Vec<Station>, DatasetError> {
        let mut conn = self.pool.acquire().await?;
        let rows = sqlx::query_as::<_, Station>("SELECT station, name FROM station")
            .fetch_all(&mut *conn)
            .await?;
        Ok(rows)
    }

    /// Station id with the most measurement rows.
    ///
    /// Ties go to the lexicographically smallest station id, which keeps the
    /// result deterministic across scans.
    pub async fn most_active_station(&self) -> Result<String, DatasetError> {
        let mut conn = self.pool.acquire().await?;
        let station: Option<String> = sqlx::query_scalar(
            "SELECT station FROM measurement \
             GROUP BY station ORDER BY COUNT(*) DESC, station ASC LIMIT 1",
        )
        .fetch_optional(&mut *conn)
        .await?;
        station.ok_or(DatasetError::EmptyDataset)
    }

    /// MIN/AVG/MAX of `tobs` under optional station and inclusive date
    /// filters. Zero matching rows is not an error: the aggregate comes back
    /// with all fields `None`.
    pub async fn aggregate_temps(
        &self,
        station: Option<&str>,
        from: Option<&str>,
        to: Option<&str>,
    ) -> Result<TempAggregate, DatasetError> {
        let mut sql = String::from(
            "SELECT MIN(tobs) AS tmin, AVG(tobs) AS tavg, MAX(tobs) AS tmax FROM measurement",
        );
        let mut clauses: Vec<&str> = Vec::new();
        if station.is_some() {
            clauses.push("station = ?");
        }
        if from.is_some() {
            clauses.push("date >= ?");
        }
        if to.is_some() {
            clauses.push("date <= ?");
        }
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }

        let mut query = sqlx::query_as::<_, TempAggregate>(&sql);
        if let Some(station) = station {
            query = query.bind(station);
        }
        if let Some(from) = from {
            query = query.bind(from);
        }
        if let Some(to) = to {
            query = query.bind(to);
        }

        let mut conn = self.pool.acquire().await?;
        let aggregate = query.fetch_one(&mut *conn).await?;
        Ok(aggregate)
    }
}
