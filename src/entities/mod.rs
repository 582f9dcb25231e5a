mod category;
mod fare;
mod pricing;
mod quote;
mod ride;

pub use category::RideCategory;
pub use fare::FareDetails;
pub use pricing::{surge_multiplier, PricingPolicy};
pub use quote::Quote;
pub use ride::{demand_level_error, Ride, DEFAULT_DEMAND_LEVEL, MAX_DEMAND_LEVEL, MIN_DEMAND_LEVEL};
