use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entities::PricingPolicy;
use crate::error::{invalid_ride_type_error, Error};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RideCategory {
    TwoWheeler,
    FourWheeler,
}

impl RideCategory {
    pub const ALL: [RideCategory; 2] = [RideCategory::TwoWheeler, RideCategory::FourWheeler];

    /// Case-insensitive lookup of a user supplied ride type.
    pub fn resolve(token: &str) -> Result<Self, Error> {
        match token.trim().to_ascii_lowercase().as_str() {
            "bike" | "two-wheeler" | "two_wheeler" => Ok(Self::TwoWheeler),
            "car" | "four-wheeler" | "four_wheeler" => Ok(Self::FourWheeler),
            _ => Err(invalid_ride_type_error(token.trim())),
        }
    }

    pub fn pricing(&self) -> PricingPolicy {
        match self {
            Self::TwoWheeler => PricingPolicy::TWO_WHEELER,
            Self::FourWheeler => PricingPolicy::FOUR_WHEELER,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::TwoWheeler => "bike",
            Self::FourWheeler => "car",
        }
    }
}

impl fmt::Display for RideCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RideCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_tokens_case_insensitively() {
        assert_eq!(RideCategory::resolve("bike").unwrap(), RideCategory::TwoWheeler);
        assert_eq!(RideCategory::resolve("BIKE").unwrap(), RideCategory::TwoWheeler);
        assert_eq!(RideCategory::resolve(" Car ").unwrap(), RideCategory::FourWheeler);
        assert_eq!(
            "Four-Wheeler".parse::<RideCategory>().unwrap(),
            RideCategory::FourWheeler
        );
    }

    #[test]
    fn rejects_unknown_tokens() {
        for token in ["bus", "", "bikes", "truck"] {
            let err = RideCategory::resolve(token).unwrap_err();
            assert!(err.is_invalid_ride_type(), "{:?} should be rejected", token);
        }
    }

    #[test]
    fn display_round_trips_through_resolve() {
        for category in RideCategory::ALL {
            assert_eq!(RideCategory::resolve(&category.to_string()).unwrap(), category);
        }
    }
}
