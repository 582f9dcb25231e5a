use super::Engine;

use crate::{
    api::QuoteAPI,
    entities::{Quote, Ride, RideCategory},
    error::Error,
    external::driver_directory,
};

impl QuoteAPI for Engine {
    #[tracing::instrument(skip(self))]
    fn create_quote(
        &self,
        ride_type: &str,
        distance: f64,
        demand_level: Option<u8>,
    ) -> Result<Quote, Error> {
        let category = RideCategory::resolve(ride_type)?;

        self.quote_category(category, distance, demand_level)
    }

    #[tracing::instrument(skip(self))]
    fn quote_category(
        &self,
        category: RideCategory,
        distance: f64,
        demand_level: Option<u8>,
    ) -> Result<Quote, Error> {
        let assignment = driver_directory::assign(category);

        let ride = Ride::new(
            category,
            assignment.driver_name,
            assignment.vehicle_number,
            distance,
            demand_level,
        )?;

        let quote = Quote::new(&ride);

        tracing::info!(
            token = %quote.token,
            total_fare = quote.fare.total_fare(),
            minimum_fare_applied = quote.fare.is_minimum_fare_applied(),
            "created quote"
        );

        Ok(quote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_a_bike_ride() {
        let engine = Engine::default();

        let quote = engine.create_quote("BIKE", 5.0, Some(1)).unwrap();

        assert_eq!(quote.category, RideCategory::TwoWheeler);
        assert_eq!(quote.driver_name, "Amit Sharma");
        assert_eq!(quote.vehicle_number, "BK1234");
        assert_eq!(quote.demand_level, 1);
        assert!((quote.fare.total_fare() - 45.0).abs() < 1e-9);
    }

    #[test]
    fn defaults_demand_level() {
        let engine = Engine::default();

        let quote = engine.quote_category(RideCategory::FourWheeler, 3.5, None).unwrap();

        assert_eq!(quote.demand_level, 3);
        assert!((quote.fare.total_fare() - 76.5).abs() < 1e-9);
    }

    #[test]
    fn unknown_ride_type_is_not_an_argument_error() {
        let err = Engine::default().create_quote("bus", 5.0, None).unwrap_err();

        assert!(err.is_invalid_ride_type());
    }

    #[test]
    fn invalid_demand_surfaces_from_the_ride() {
        let err = Engine::default().create_quote("car", 1.0, Some(7)).unwrap_err();

        assert!(err.is_invalid_argument());
        assert!(err.message.contains("Received: 7"));
    }
}
