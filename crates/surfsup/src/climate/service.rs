use log::{debug, info};
use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};
use std::sync::Arc;
use utoipa::ToSchema;

use super::{
    most_active_station, recent_date, series_for, summarize, validate_range,
    validate_single_start, year_ago, Error, SummaryResult,
};
use crate::db::{Field, ObservationStore};

/// One day's precipitation, serialized as a single-entry `{date: prcp}` map
#[derive(Debug, Clone, PartialEq)]
pub struct PrecipitationReading {
    pub date: String,
    pub precipitation: Option<f64>,
}

impl Serialize for PrecipitationReading {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.date, &self.precipitation)?;
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TemperatureReading {
    pub station: String,
    pub date: String,
    pub tobs: Option<f64>,
}

/// Entry point for the four read operations the API exposes. Each call
/// resolves reference dates afresh from the store.
#[derive(Clone)]
pub struct ClimateService {
    store: Arc<dyn ObservationStore>,
}

impl ClimateService {
    pub fn new(store: Arc<dyn ObservationStore>) -> Self {
        Self { store }
    }

    /// Precipitation for every station from one year before the latest
    /// observation onwards. An empty result is not an error.
    pub async fn precipitation_last_year(&self) -> Result<Vec<PrecipitationReading>, Error> {
        let recent = recent_date(self.store.as_ref()).await?;
        let since = year_ago(recent);
        debug!("precipitation from {} to {}", since, recent);

        let readings = series_for(
            self.store.as_ref(),
            since,
            recent,
            Field::Precipitation,
            None,
        )
        .await?;

        Ok(readings
            .into_iter()
            .map(|reading| PrecipitationReading {
                date: reading.date,
                precipitation: reading.value,
            })
            .collect())
    }

    pub async fn list_stations(&self) -> Result<Vec<String>, Error> {
        Ok(self.store.stations().await?)
    }

    /// Last year of temperature readings for the station with the most
    /// observations overall.
    pub async fn tobs_for_most_active_station(&self) -> Result<Vec<TemperatureReading>, Error> {
        let recent = recent_date(self.store.as_ref()).await?;
        let station = most_active_station(self.store.as_ref()).await?;
        let since = year_ago(recent);
        info!("temperature readings for {} since {}", station, since);

        let readings = series_for(
            self.store.as_ref(),
            since,
            recent,
            Field::Temperature,
            Some(&station),
        )
        .await?;

        Ok(readings
            .into_iter()
            .map(|reading| TemperatureReading {
                station: reading.station,
                date: reading.date,
                tobs: reading.value,
            })
            .collect())
    }

    pub async fn summary_for_start(&self, start: &str) -> Result<SummaryResult, Error> {
        let range = validate_single_start(self.store.as_ref(), start).await?;
        summarize(self.store.as_ref(), &range, Field::Temperature, None).await
    }

    pub async fn summary_for_range(&self, start: &str, end: &str) -> Result<SummaryResult, Error> {
        let range = validate_range(self.store.as_ref(), start, end).await?;
        summarize(self.store.as_ref(), &range, Field::Temperature, None).await
    }
}
