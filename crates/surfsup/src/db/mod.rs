mod observations;
mod sqlite;

#[cfg(test)]
pub(crate) mod fixtures;

pub use observations::*;
pub use sqlite::{SqliteStore, INSERT_MEASUREMENT, MEASUREMENT_SCHEMA};
