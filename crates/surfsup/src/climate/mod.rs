//! Date-range query and aggregation over the observation store.
//!
//! Reference dates and station activity are derived from the store on every
//! call; nothing here caches between requests.

mod range;
mod reference_dates;
mod service;
mod station_activity;
mod summary;

pub use range::{
    parse_date, validate_range, validate_single_start, DateInput, DateRange, RangeViolation,
};
pub use reference_dates::{oldest_date, recent_date, year_ago, Coverage};
pub use service::{ClimateService, PrecipitationReading, TemperatureReading};
pub use station_activity::most_active_station;
pub use summary::{series_for, summarize, SummaryResult};

use crate::db;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Observation store holds no observations")]
    EmptyStore,
    #[error("Malformed date '{0}', expected zero-padded YYYY-MM-DD")]
    MalformedDate(String),
    #[error("{violation}: requested {start} to {end}, coverage is {oldest} to {recent}")]
    OutOfRange {
        violation: RangeViolation,
        start: String,
        end: String,
        oldest: String,
        recent: String,
    },
    #[error("No observations between {start} and {end}")]
    NoDataInRange { start: String, end: String },
    #[error("Observation store failure: {0}")]
    Store(#[from] db::Error),
}

impl Error {
    /// Stable identifier for the failure kind, used in API error payloads
    pub fn kind(&self) -> &'static str {
        match self {
            Error::EmptyStore => "empty_store",
            Error::MalformedDate(_) => "malformed_date",
            Error::OutOfRange { .. } => "out_of_range",
            Error::NoDataInRange { .. } => "no_data_in_range",
            Error::Store(_) => "store_failure",
        }
    }
}
