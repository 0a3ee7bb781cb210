use super::{SqliteStore, INSERT_MEASUREMENT, MEASUREMENT_SCHEMA};

pub struct FixtureRow {
    pub station: &'static str,
    pub date: String,
    pub prcp: Option<f64>,
    pub tobs: Option<f64>,
}

pub fn row(
    station: &'static str,
    date: impl Into<String>,
    prcp: Option<f64>,
    tobs: Option<f64>,
) -> FixtureRow {
    FixtureRow {
        station,
        date: date.into(),
        prcp,
        tobs,
    }
}

/// In-memory store with the dataset's `measurement` layout, rows inserted in
/// the given order.
pub async fn seeded_store(rows: &[FixtureRow]) -> SqliteStore {
    let store = SqliteStore::in_memory().await.unwrap();

    sqlx::query(MEASUREMENT_SCHEMA)
        .execute(store.pool())
        .await
        .unwrap();

    for fixture in rows {
        sqlx::query(INSERT_MEASUREMENT)
            .bind(fixture.station)
            .bind(&fixture.date)
            .bind(fixture.prcp)
            .bind(fixture.tobs)
            .execute(store.pool())
            .await
            .unwrap();
    }

    store
}
