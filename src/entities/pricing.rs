use serde::{Deserialize, Serialize};

use crate::entities::FareDetails;

const SURGE_PER_DEMAND_STEP: f64 = 0.15;
const LONG_TRIP_THRESHOLD_KM: f64 = 12.0;
const LONG_TRIP_SURGE: f64 = 0.05;

/// Per-category pricing constants.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PricingPolicy {
    pub base_fare: f64,
    pub rate_per_km: f64,
    pub booking_fee: f64,
    pub minimum_fare: f64,
}

impl PricingPolicy {
    pub const TWO_WHEELER: PricingPolicy = PricingPolicy {
        base_fare: 8.0,
        rate_per_km: 7.0,
        booking_fee: 2.0,
        minimum_fare: 25.0,
    };

    pub const FOUR_WHEELER: PricingPolicy = PricingPolicy {
        base_fare: 25.0,
        rate_per_km: 10.0,
        booking_fee: 6.0,
        minimum_fare: 50.0,
    };

    /// Prices a trip under this policy. Surge only scales the distance component.
    pub fn price(&self, distance: f64, demand_level: u8) -> FareDetails {
        let surge = surge_multiplier(distance, demand_level);
        let distance_fare = distance * self.rate_per_km * surge;

        FareDetails::new(
            self.base_fare,
            distance_fare,
            self.booking_fee,
            surge,
            self.minimum_fare,
        )
    }
}

/// Demand adds 0.15 per level above 1; trips longer than 12 km add a flat 0.05.
pub fn surge_multiplier(distance: f64, demand_level: u8) -> f64 {
    let mut surge = 1.0 + SURGE_PER_DEMAND_STEP * f64::from(demand_level.saturating_sub(1));

    if distance > LONG_TRIP_THRESHOLD_KM {
        surge += LONG_TRIP_SURGE;
    }

    surge
}
