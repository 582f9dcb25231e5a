use std::fmt::Display;
use std::sync::OnceLock;

use serde::Serialize;

use crate::entities::{FareDetails, RideCategory};
use crate::error::{invalid_argument_error, Error};

pub const DEFAULT_DEMAND_LEVEL: u8 = 3;
pub const MIN_DEMAND_LEVEL: u8 = 1;
pub const MAX_DEMAND_LEVEL: u8 = 5;

#[derive(Clone, Debug, Serialize)]
pub struct Ride {
    category: RideCategory,
    driver_name: String,
    vehicle_number: String,
    distance: f64,
    demand_level: u8,
    #[serde(skip)]
    fare: OnceLock<FareDetails>,
}

impl Ride {
    /// Validates the inputs and builds a ride. A missing demand level defaults to 3.
    pub fn new(
        category: RideCategory,
        driver_name: impl Into<String>,
        vehicle_number: impl Into<String>,
        distance: f64,
        demand_level: Option<u8>,
    ) -> Result<Self, Error> {
        let driver_name = driver_name.into();
        let vehicle_number = vehicle_number.into();
        let demand_level = demand_level.unwrap_or(DEFAULT_DEMAND_LEVEL);

        if driver_name.trim().is_empty() {
            return Err(invalid_argument_error("Driver name cannot be empty."));
        }
        if vehicle_number.trim().is_empty() {
            return Err(invalid_argument_error("Vehicle number cannot be empty."));
        }
        if !distance.is_finite() || distance <= 0.0 {
            return Err(invalid_argument_error("Distance must be greater than 0."));
        }
        if !(MIN_DEMAND_LEVEL..=MAX_DEMAND_LEVEL).contains(&demand_level) {
            return Err(demand_level_error(demand_level));
        }

        Ok(Self {
            category,
            driver_name,
            vehicle_number,
            distance,
            demand_level,
            fare: OnceLock::new(),
        })
    }

    pub fn category(&self) -> RideCategory {
        self.category
    }

    pub fn driver_name(&self) -> &str {
        &self.driver_name
    }

    pub fn vehicle_number(&self) -> &str {
        &self.vehicle_number
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn demand_level(&self) -> u8 {
        self.demand_level
    }

    pub fn surge_multiplier(&self) -> f64 {
        super::pricing::surge_multiplier(self.distance, self.demand_level)
    }

    /// Computes the breakdown on first use and returns the cached value afterwards.
    pub fn estimate_fare(&self) -> &FareDetails {
        self.fare.get_or_init(|| {
            let fare = self
                .category
                .pricing()
                .price(self.distance, self.demand_level);

            tracing::debug!(
                category = %self.category,
                distance = self.distance,
                demand_level = self.demand_level,
                total_fare = fare.total_fare(),
                "computed fare"
            );

            fare
        })
    }

    pub fn calculate_fare(&self) -> f64 {
        self.estimate_fare().total_fare()
    }
}

/// Rejection for an explicit demand level outside 1..=5.
pub fn demand_level_error(received: impl Display) -> Error {
    invalid_argument_error(format!(
        "Demand level must be between {} and {}. Received: {}",
        MIN_DEMAND_LEVEL, MAX_DEMAND_LEVEL, received
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    fn bike(distance: f64, demand_level: Option<u8>) -> Result<Ride, Error> {
        Ride::new(RideCategory::TwoWheeler, "TestDriver", "BK0001", distance, demand_level)
    }

    fn car(distance: f64, demand_level: Option<u8>) -> Result<Ride, Error> {
        Ride::new(RideCategory::FourWheeler, "TestDriver", "CR0001", distance, demand_level)
    }

    #[test]
    fn calm_bike_ride() {
        let ride = bike(5.0, Some(1)).unwrap();
        let fare = ride.estimate_fare();

        assert_close(fare.surge_multiplier(), 1.0);
        assert_close(fare.distance_fare(), 35.0);
        assert_close(fare.subtotal(), 45.0);
        assert_close(ride.calculate_fare(), 45.0);
    }

    #[test]
    fn car_ride_defaults_to_moderate_demand() {
        let ride = car(3.5, None).unwrap();

        assert_eq!(ride.demand_level(), DEFAULT_DEMAND_LEVEL);
        assert_close(ride.surge_multiplier(), 1.30);
        assert_close(ride.estimate_fare().distance_fare(), 45.5);
        assert_close(ride.calculate_fare(), 76.5);
    }

    #[test]
    fn short_bike_ride_hits_minimum_fare() {
        let ride = bike(0.5, Some(1)).unwrap();
        let fare = ride.estimate_fare();

        assert_close(fare.subtotal(), 13.5);
        assert_eq!(fare.total_fare(), 25.0);
        assert!(fare.is_minimum_fare_applied());
    }

    #[test]
    fn fare_is_computed_once() {
        let ride = car(20.0, Some(4)).unwrap();

        let first = ride.estimate_fare();
        let second = ride.estimate_fare();

        assert!(std::ptr::eq(first, second));
        assert_eq!(*first, *second);
    }

    #[test]
    fn rejects_blank_driver_name() {
        let err = Ride::new(RideCategory::TwoWheeler, "   ", "BK0001", 2.0, None).unwrap_err();

        assert!(err.is_invalid_argument());
        assert_eq!(err.message, "Driver name cannot be empty.");
    }

    #[test]
    fn rejects_blank_vehicle_number() {
        for vehicle_number in ["", "   ", "\t\n"] {
            let err = Ride::new(RideCategory::FourWheeler, "TestDriver", vehicle_number, 2.0, None)
                .unwrap_err();

            assert!(err.is_invalid_argument());
            assert_eq!(err.message, "Vehicle number cannot be empty.");
        }
    }

    #[test]
    fn rejects_non_positive_distance() {
        for distance in [0.0, -1.0, f64::NAN] {
            let err = bike(distance, None).unwrap_err();
            assert_eq!(err.message, "Distance must be greater than 0.");
        }
    }

    #[test]
    fn rejects_demand_out_of_range() {
        let err = car(1.0, Some(7)).unwrap_err();

        assert!(err.is_invalid_argument());
        assert!(err.message.contains("Received: 7"));

        let err = car(1.0, Some(0)).unwrap_err();
        assert!(err.message.contains("Received: 0"));
    }

    #[test]
    fn serializes_without_the_cache() {
        let ride = bike(5.0, Some(2)).unwrap();
        ride.estimate_fare();

        let value = serde_json::to_value(&ride).unwrap();

        assert_eq!(value["category"], "two_wheeler");
        assert_eq!(value["demand_level"], 2);
        assert!(value.get("fare").is_none());
    }
}
