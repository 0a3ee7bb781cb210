mod error;
pub mod readings;
pub mod summary;

pub use error::{ApiError, ErrorBody, LEGACY_ERROR_MARKER};
pub use readings::*;
pub use summary::*;
