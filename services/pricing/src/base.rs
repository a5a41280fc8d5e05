//! Base freight cost
//!
//! The base cost is the load-clamped transport cost with the fuel surcharge
//! applied. How the pre-surcharge cost is reached depends on the transport
//! mode, so each mode prices through its own [`ModeCostStrategy`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::error::{PricingError, PricingResult};
use shared::rounding::ceil3;
use shared::types::RateZone;

use rates_service::reference::TierTable;
use rates_service::tiers::{zone_rate, ZoneRate};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseCost {
    pub cost: Decimal,
    pub freight_weight: Decimal,
    /// Set when the weight-based cost ran past the zone's max load.
    pub is_max_load: bool,
}

/// Clamp a cost into `[min_load, max_load]`, reporting whether the ceiling
/// was hit.
pub fn clamp_to_load(raw_cost: Decimal, min_load: Decimal, max_load: Decimal) -> (Decimal, bool) {
    if raw_cost > max_load {
        (max_load, true)
    } else if raw_cost < min_load {
        (min_load, false)
    } else {
        (raw_cost, false)
    }
}

pub fn apply_fuel_surcharge(cost: Decimal, fuel_surcharge: Decimal) -> Decimal {
    ceil3(cost * (Decimal::ONE + fuel_surcharge))
}

/// Tiered less-than-truckload pricing once the zone rate is known.
///
/// Only reachable past the weight ceiling when the zone has none, so the
/// product is checked.
pub fn tiered_base_cost(rate: &ZoneRate, freight_weight: Decimal, fuel_surcharge: Decimal) -> PricingResult<BaseCost> {
    let raw_cost = freight_weight
        .checked_mul(rate.price_per_weight)
        .ok_or_else(|| PricingError::InvalidCargo {
            reason: format!("freight weight {} is too large to price", freight_weight),
        })?;
    let (cost, is_max_load) = clamp_to_load(raw_cost, rate.min_load, rate.max_load);

    Ok(BaseCost {
        cost: apply_fuel_surcharge(cost, fuel_surcharge),
        freight_weight,
        is_max_load,
    })
}

/// Prices the base cost for one transport mode.
pub trait ModeCostStrategy: Send + Sync {
    fn base_cost(
        &self,
        zone: &RateZone,
        tiers: &dyn TierTable,
        freight_weight: Decimal,
        fuel_surcharge: Decimal,
    ) -> PricingResult<BaseCost>;
}

/// Weight-tiered pricing for shared loads.
#[derive(Debug, Clone, Copy, Default)]
pub struct LessThanTruckload;

impl ModeCostStrategy for LessThanTruckload {
    fn base_cost(
        &self,
        zone: &RateZone,
        tiers: &dyn TierTable,
        freight_weight: Decimal,
        fuel_surcharge: Decimal,
    ) -> PricingResult<BaseCost> {
        let zone_tiers = tiers.tiers_for_zone(zone.id);
        let rate = zone_rate(zone, &zone_tiers, freight_weight)?;
        tiered_base_cost(&rate, freight_weight, fuel_surcharge)
    }
}

/// Dedicated truck priced at the zone's max load, without tier lookup.
///
/// Provisional: the flat rate is `max_load` with the fuel surcharge on top,
/// and the zone's weight ceiling is not applied since the whole truck is
/// booked. Replace it through [`PricingEngine::with_strategy`] once a
/// truckload rate card exists.
///
/// [`PricingEngine::with_strategy`]: crate::engine::PricingEngine::with_strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct FullTruckload;

impl ModeCostStrategy for FullTruckload {
    fn base_cost(
        &self,
        zone: &RateZone,
        _tiers: &dyn TierTable,
        freight_weight: Decimal,
        fuel_surcharge: Decimal,
    ) -> PricingResult<BaseCost> {
        Ok(BaseCost {
            cost: apply_fuel_surcharge(zone.max_load, fuel_surcharge),
            freight_weight,
            is_max_load: false,
        })
    }
}
