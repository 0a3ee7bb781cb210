use serde::{Deserialize, Serialize};
use time::Date;
use utoipa::ToSchema;

use super::{DateRange, Error};
use crate::db::{Field, ObservationFilter, ObservationStore, Reading};

/// Min/avg/max of a field over a validated range. `Start` and `End` echo the
/// labels the range was validated from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SummaryResult {
    #[serde(rename = "Start")]
    pub start: String,
    #[serde(rename = "End")]
    pub end: String,
    #[serde(rename = "TMIN")]
    pub tmin: f64,
    #[serde(rename = "TAVG")]
    pub tavg: f64,
    #[serde(rename = "TMAX")]
    pub tmax: f64,
}

pub async fn summarize(
    store: &dyn ObservationStore,
    range: &DateRange,
    field: Field,
    station: Option<&str>,
) -> Result<SummaryResult, Error> {
    let filter =
        ObservationFilter::between(range.start_label(), range.end_label()).with_station(station);
    let aggregate = store.aggregate(&filter, field).await?;

    match (aggregate.min, aggregate.avg, aggregate.max) {
        (Some(tmin), Some(tavg), Some(tmax)) if aggregate.count > 0 => Ok(SummaryResult {
            start: range.start_label().to_owned(),
            end: range.end_label().to_owned(),
            tmin,
            tavg,
            tmax,
        }),
        _ => Err(Error::NoDataInRange {
            start: range.start_label().to_owned(),
            end: range.end_label().to_owned(),
        }),
    }
}

/// Raw rows between `from` and `to` inclusive, in the store's row order.
/// Results are not re-sorted by date.
pub async fn series_for(
    store: &dyn ObservationStore,
    from: Date,
    to: Date,
    field: Field,
    station: Option<&str>,
) -> Result<Vec<Reading>, Error> {
    let filter = ObservationFilter::between(from.to_string(), to.to_string()).with_station(station);
    Ok(store.series(&filter, field).await?)
}
