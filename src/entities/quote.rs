use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{FareDetails, Ride, RideCategory};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Quote {
    pub token: Uuid,
    pub created_at: DateTime<Utc>,
    pub category: RideCategory,
    pub driver_name: String,
    pub vehicle_number: String,
    pub distance: f64,
    pub demand_level: u8,
    pub fare: FareDetails,
}

impl Quote {
    pub fn new(ride: &Ride) -> Self {
        Self {
            token: Uuid::new_v4(),
            created_at: Utc::now(),
            category: ride.category(),
            driver_name: ride.driver_name().into(),
            vehicle_number: ride.vehicle_number().into(),
            distance: ride.distance(),
            demand_level: ride.demand_level(),
            fare: *ride.estimate_fare(),
        }
    }
}
