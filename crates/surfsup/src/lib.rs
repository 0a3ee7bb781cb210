pub mod climate;
pub mod db;
pub mod routes;
mod startup;
pub mod templates;
mod utils;

pub use climate::{ClimateService, PrecipitationReading, SummaryResult, TemperatureReading};
pub use db::{ObservationStore, SqliteStore};
pub use routes::*;
pub use startup::*;
pub use utils::*;
