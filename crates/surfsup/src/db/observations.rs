use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to query observation store: {0}")]
    Query(#[from] sqlx::Error),
    #[error("Observation store is missing table: {0}")]
    MissingTable(&'static str),
    #[error("Stored observation date is not YYYY-MM-DD: {0}")]
    InvalidStoredDate(String),
}

/// Numeric measurement carried by every observation row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Precipitation,
    Temperature,
}

impl Field {
    pub fn column(self) -> &'static str {
        match self {
            Field::Precipitation => "prcp",
            Field::Temperature => "tobs",
        }
    }
}

/// Row predicate applied by the store. Date bounds are inclusive and compared
/// as ISO `YYYY-MM-DD` text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservationFilter {
    pub start: Option<String>,
    pub end: Option<String>,
    pub station: Option<String>,
}

impl ObservationFilter {
    pub fn between(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: Some(start.into()),
            end: Some(end.into()),
            station: None,
        }
    }

    pub fn with_station(mut self, station: Option<&str>) -> Self {
        self.station = station.map(str::to_owned);
        self
    }
}

/// A single `(station, date, value)` row of a series query
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Reading {
    pub station: String,
    pub date: String,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct StationCount {
    pub station: String,
    pub observations: i64,
}

/// Count, min, max and mean over the non-null values of one field
#[derive(Debug, Clone, Copy, Default, PartialEq, sqlx::FromRow)]
pub struct Aggregate {
    pub count: i64,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub avg: Option<f64>,
}

/// Read-only access to the daily observation table.
///
/// Every call is an independent read; implementations must not cache results
/// between calls since the backing dataset may be replaced underneath us.
#[async_trait]
pub trait ObservationStore: Send + Sync {
    /// Greatest observation date, `None` when the store is empty
    async fn latest_date(&self) -> Result<Option<String>, Error>;
    /// Smallest observation date, `None` when the store is empty
    async fn oldest_date(&self) -> Result<Option<String>, Error>;
    /// Observation count per station, highest count first. Stations sharing a
    /// count come back in whatever order the store yields them.
    async fn station_counts(&self) -> Result<Vec<StationCount>, Error>;
    /// Distinct station identifiers, in no particular order
    async fn stations(&self) -> Result<Vec<String>, Error>;
    /// Rows matching `filter`, in storage order
    async fn series(&self, filter: &ObservationFilter, field: Field)
        -> Result<Vec<Reading>, Error>;
    async fn aggregate(&self, filter: &ObservationFilter, field: Field)
        -> Result<Aggregate, Error>;
}
