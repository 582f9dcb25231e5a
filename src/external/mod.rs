pub mod currency;
pub mod driver_directory;
