use serde::{Deserialize, Serialize};

use crate::entities::RideCategory;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub driver_name: String,
    pub vehicle_number: String,
}

/// Stand-in for a dispatch lookup: one fixed driver per category.
#[tracing::instrument]
pub fn assign(category: RideCategory) -> Assignment {
    let (driver_name, vehicle_number) = match category {
        RideCategory::TwoWheeler => ("Amit Sharma", "BK1234"),
        RideCategory::FourWheeler => ("Priya Singh", "CR5678"),
    };

    Assignment {
        driver_name: driver_name.into(),
        vehicle_number: vehicle_number.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_a_driver() {
        assert_eq!(assign(RideCategory::TwoWheeler).vehicle_number, "BK1234");
        assert_eq!(assign(RideCategory::FourWheeler).driver_name, "Priya Singh");
    }
}
