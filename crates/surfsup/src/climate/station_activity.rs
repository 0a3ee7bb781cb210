use log::debug;

use super::Error;
use crate::db::{ObservationStore, StationCount};

/// Station with the most observations.
///
/// Only a strictly higher count displaces the current leader, so when several
/// stations tie the one the store lists first wins. That order is the store's
/// and is not alphabetical.
pub async fn most_active_station(store: &dyn ObservationStore) -> Result<String, Error> {
    let counts = store.station_counts().await?;

    let leader = counts
        .into_iter()
        .fold(None, |leader: Option<StationCount>, candidate| match leader {
            Some(current) if candidate.observations <= current.observations => Some(current),
            _ => Some(candidate),
        });

    let leader = leader.ok_or(Error::EmptyStore)?;
    debug!(
        "most active station {} with {} observations",
        leader.station, leader.observations
    );
    Ok(leader.station)
}
