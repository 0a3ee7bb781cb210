use async_trait::async_trait;
use log::{debug, info};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions},
    QueryBuilder, Sqlite,
};
use std::{path::Path, str::FromStr, time::Duration};

use super::{
    Aggregate, Error, Field, ObservationFilter, ObservationStore, Reading, StationCount,
};

const MEASUREMENT_TABLE: &str = "measurement";

/// Layout of the dataset's `measurement` table. Only used to build test
/// databases; the real file is never written to.
pub const MEASUREMENT_SCHEMA: &str = "CREATE TABLE measurement (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    station TEXT,
    date TEXT,
    prcp FLOAT,
    tobs FLOAT
)";

pub const INSERT_MEASUREMENT: &str =
    "INSERT INTO measurement (station, date, prcp, tobs) VALUES (?, ?, ?, ?)";

/// Observation store backed by the `measurement` table of the Hawaii SQLite
/// dataset. The file is opened read-only and never migrated.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub async fn open(path: &Path) -> Result<Self, Error> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(false)
            .read_only(true)
            .pragma("busy_timeout", "5000")
            .pragma("cache_size", "-16000")
            .pragma("temp_store", "MEMORY");

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(30))
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.health_check().await?;
        info!("Observation store opened at: {}", path.display());

        Ok(store)
    }

    /// Private in-memory database on a single long-lived connection, so the
    /// contents survive for as long as the store does.
    pub async fn in_memory() -> Result<Self, Error> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Check connectivity and that the observation table is present.
    pub async fn health_check(&self) -> Result<(), Error> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;

        let tables: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?",
        )
        .bind(MEASUREMENT_TABLE)
        .fetch_one(&self.pool)
        .await?;
        if tables == 0 {
            return Err(Error::MissingTable(MEASUREMENT_TABLE));
        }

        Ok(())
    }
}

fn push_filter(builder: &mut QueryBuilder<'_, Sqlite>, filter: &ObservationFilter) {
    let mut separator = " WHERE ";
    if let Some(start) = &filter.start {
        builder.push(separator).push("date >= ").push_bind(start.clone());
        separator = " AND ";
    }
    if let Some(end) = &filter.end {
        builder.push(separator).push("date <= ").push_bind(end.clone());
        separator = " AND ";
    }
    if let Some(station) = &filter.station {
        builder.push(separator).push("station = ").push_bind(station.clone());
    }
}

#[async_trait]
impl ObservationStore for SqliteStore {
    async fn latest_date(&self) -> Result<Option<String>, Error> {
        let latest: Option<String> = sqlx::query_scalar("SELECT MAX(date) FROM measurement")
            .fetch_one(&self.pool)
            .await?;
        Ok(latest)
    }

    async fn oldest_date(&self) -> Result<Option<String>, Error> {
        let oldest: Option<String> = sqlx::query_scalar("SELECT MIN(date) FROM measurement")
            .fetch_one(&self.pool)
            .await?;
        Ok(oldest)
    }

    async fn station_counts(&self) -> Result<Vec<StationCount>, Error> {
        let counts = sqlx::query_as::<_, StationCount>(
            "SELECT station, COUNT(station) AS observations
             FROM measurement
             WHERE station IS NOT NULL
             GROUP BY station
             ORDER BY observations DESC, MIN(rowid)",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(counts)
    }

    async fn stations(&self) -> Result<Vec<String>, Error> {
        let stations: Vec<String> = sqlx::query_scalar(
            "SELECT DISTINCT station FROM measurement WHERE station IS NOT NULL",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(stations)
    }

    async fn series(
        &self,
        filter: &ObservationFilter,
        field: Field,
    ) -> Result<Vec<Reading>, Error> {
        let mut builder = QueryBuilder::<Sqlite>::new(format!(
            "SELECT station, date, CAST({} AS REAL) AS value FROM measurement",
            field.column()
        ));
        push_filter(&mut builder, filter);
        debug!("series query: {}", builder.sql());

        let readings = builder
            .build_query_as::<Reading>()
            .fetch_all(&self.pool)
            .await?;
        Ok(readings)
    }

    async fn aggregate(
        &self,
        filter: &ObservationFilter,
        field: Field,
    ) -> Result<Aggregate, Error> {
        let column = field.column();
        let mut builder = QueryBuilder::<Sqlite>::new(format!(
            "SELECT COUNT({column}) AS count,
                    CAST(MIN({column}) AS REAL) AS min,
                    CAST(MAX({column}) AS REAL) AS max,
                    CAST(AVG({column}) AS REAL) AS avg
             FROM measurement"
        ));
        push_filter(&mut builder, filter);
        debug!("aggregate query: {}", builder.sql());

        let aggregate = builder
            .build_query_as::<Aggregate>()
            .fetch_one(&self.pool)
            .await?;
        Ok(aggregate)
    }
}
