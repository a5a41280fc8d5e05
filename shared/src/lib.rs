pub mod config;
pub mod error;
pub mod logger;
pub mod rounding;
pub mod types;

#[cfg(test)]
mod tests;

pub use config::{PricingConfig, WeightAggregation};
pub use error::{PricingError, PricingResult};
pub use rounding::ceil3;
