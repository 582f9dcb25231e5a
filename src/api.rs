use crate::entities::{Quote, RideCategory};
use crate::error::Error;

pub trait QuoteAPI {
    /// Resolves the ride type, assigns a driver and prices the ride.
    fn create_quote(
        &self,
        ride_type: &str,
        distance: f64,
        demand_level: Option<u8>,
    ) -> Result<Quote, Error>;

    fn quote_category(
        &self,
        category: RideCategory,
        distance: f64,
        demand_level: Option<u8>,
    ) -> Result<Quote, Error>;
}

/// Everything a booking front end needs from the engine.
pub trait API: QuoteAPI {}
