//! Pricing run configuration
//!
//! Layered as defaults, then an optional `pricing.toml` (or any format the
//! `config` crate recognizes by extension), then `PRICING_*` environment
//! variables.

use anyhow::{anyhow, Context, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILE: &str = "pricing";
pub const ENV_PREFIX: &str = "PRICING";

/// How per-item freight weights combine into the quote's freight weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightAggregation {
    /// Only the last cargo item counts. Matches the quotes issued so far.
    #[default]
    LastWins,
    Sum,
    Max,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Fuel surcharge coefficient applied to the clamped base cost.
    #[serde(default = "default_fuel_surcharge")]
    pub fuel_surcharge: Decimal,
    #[serde(default)]
    pub weight_aggregation: WeightAggregation,
}

fn default_fuel_surcharge() -> Decimal {
    dec!(0.35)
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            fuel_surcharge: default_fuel_surcharge(),
            weight_aggregation: WeightAggregation::default(),
        }
    }
}

impl PricingConfig {
    /// Load from `pricing.*` in the working directory and the environment.
    pub fn load() -> Result<Self> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    pub fn load_from(file_stem: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(file_stem).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()
            .context("failed to read pricing configuration")?;

        let loaded: PricingConfig = settings
            .try_deserialize()
            .context("invalid pricing configuration")?;
        loaded.validate()?;
        Ok(loaded)
    }

    pub fn validate(&self) -> Result<()> {
        if self.fuel_surcharge < Decimal::ZERO {
            return Err(anyhow!("fuel surcharge must not be negative, got {}", self.fuel_surcharge));
        }
        Ok(())
    }

    pub fn with_fuel_surcharge(mut self, fuel_surcharge: Decimal) -> Self {
        self.fuel_surcharge = fuel_surcharge;
        self
    }

    pub fn with_weight_aggregation(mut self, weight_aggregation: WeightAggregation) -> Self {
        self.weight_aggregation = weight_aggregation;
        self
    }
}
