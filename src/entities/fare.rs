use serde::{Deserialize, Serialize};

/// Breakdown of a single fare computation.
///
/// Built once by [`PricingPolicy::price`](super::PricingPolicy::price) and
/// never modified afterwards. `subtotal` is the pre-floor sum and
/// `total_fare` is never below `minimum_fare`. Deserializing recomputes the
/// derived fields from the components, so stored totals are not trusted.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "FareComponents")]
pub struct FareDetails {
    base_fare: f64,
    distance_fare: f64,
    booking_fee: f64,
    surge_multiplier: f64,
    minimum_fare: f64,
    subtotal: f64,
    total_fare: f64,
    minimum_fare_applied: bool,
}

#[derive(Deserialize)]
struct FareComponents {
    base_fare: f64,
    distance_fare: f64,
    booking_fee: f64,
    surge_multiplier: f64,
    minimum_fare: f64,
}

impl From<FareComponents> for FareDetails {
    fn from(c: FareComponents) -> Self {
        Self::new(
            c.base_fare,
            c.distance_fare,
            c.booking_fee,
            c.surge_multiplier,
            c.minimum_fare,
        )
    }
}

impl FareDetails {
    pub fn new(
        base_fare: f64,
        distance_fare: f64,
        booking_fee: f64,
        surge_multiplier: f64,
        minimum_fare: f64,
    ) -> Self {
        let subtotal = base_fare + distance_fare + booking_fee;

        Self {
            base_fare,
            distance_fare,
            booking_fee,
            surge_multiplier,
            minimum_fare,
            subtotal,
            total_fare: subtotal.max(minimum_fare),
            minimum_fare_applied: subtotal < minimum_fare,
        }
    }

    pub fn base_fare(&self) -> f64 {
        self.base_fare
    }

    /// Distance component, surge already applied.
    pub fn distance_fare(&self) -> f64 {
        self.distance_fare
    }

    pub fn booking_fee(&self) -> f64 {
        self.booking_fee
    }

    pub fn surge_multiplier(&self) -> f64 {
        self.surge_multiplier
    }

    pub fn minimum_fare(&self) -> f64 {
        self.minimum_fare
    }

    pub fn subtotal(&self) -> f64 {
        self.subtotal
    }

    pub fn total_fare(&self) -> f64 {
        self.total_fare
    }

    pub fn is_minimum_fare_applied(&self) -> bool {
        self.minimum_fare_applied
    }
}
