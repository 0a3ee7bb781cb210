mod home;
mod readings;
mod summary;
