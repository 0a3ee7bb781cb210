use log::debug;
use time::{Date, Duration};

use super::{parse_date, Error};
use crate::db::{self, ObservationStore};

fn stored_date(label: Option<String>) -> Result<Date, Error> {
    let label = label.ok_or(Error::EmptyStore)?;
    parse_date(&label).map_err(|_| db::Error::InvalidStoredDate(label).into())
}

/// Most recent observation date in the store
pub async fn recent_date(store: &dyn ObservationStore) -> Result<Date, Error> {
    stored_date(store.latest_date().await?)
}

/// Earliest observation date in the store
pub async fn oldest_date(store: &dyn ObservationStore) -> Result<Date, Error> {
    stored_date(store.oldest_date().await?)
}

/// Fixed 365-day offset; leap days are not accounted for.
pub fn year_ago(date: Date) -> Date {
    date.saturating_sub(Duration::days(365))
}

/// Inclusive interval spanned by every observation in the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coverage {
    pub oldest: Date,
    pub recent: Date,
}

impl Coverage {
    pub async fn resolve(store: &dyn ObservationStore) -> Result<Self, Error> {
        let recent = recent_date(store).await?;
        let oldest = oldest_date(store).await?;
        debug!("observation coverage {} to {}", oldest, recent);
        Ok(Self { oldest, recent })
    }

    pub fn oldest_label(&self) -> String {
        self.oldest.to_string()
    }

    pub fn recent_label(&self) -> String {
        self.recent.to_string()
    }
}
