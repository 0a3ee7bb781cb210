pub mod home;

pub use home::{home_page, ApiRoute, API_ROUTES};
