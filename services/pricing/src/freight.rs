//! Freight (billable) weight of a shipment
//!
//! Each cargo item bills at the larger of its actual weight and its
//! volumetric weight; how items combine is a [`WeightAggregation`] policy.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use shared::config::WeightAggregation;
use shared::error::{PricingError, PricingResult};
use shared::rounding::ceil3;
use shared::types::CargoItem;

/// Cubic size units per weight unit.
pub const VOLUMETRIC_DIVISOR: Decimal = dec!(166);

fn invalid_cargo(reason: &str) -> PricingError {
    PricingError::InvalidCargo {
        reason: reason.to_string(),
    }
}

pub fn package_weight(weight: Decimal, quantity: u32) -> PricingResult<Decimal> {
    weight
        .checked_mul(Decimal::from(quantity))
        .map(ceil3)
        .ok_or_else(|| invalid_cargo("package weight is too large"))
}

pub fn volumetric_weight(width: Decimal, length: Decimal, height: Decimal) -> PricingResult<Decimal> {
    width
        .checked_mul(length)
        .and_then(|area| area.checked_mul(height))
        .and_then(|volume| volume.checked_div(VOLUMETRIC_DIVISOR))
        .map(ceil3)
        .ok_or_else(|| invalid_cargo("cargo dimensions are too large"))
}

/// Reject items no shipment can physically have.
pub fn validate_item(item: &CargoItem) -> PricingResult<()> {
    if item.quantity == 0 {
        return Err(invalid_cargo("quantity must be at least 1"));
    }
    if item.weight < Decimal::ZERO {
        return Err(invalid_cargo("weight must not be negative"));
    }
    if [item.width, item.length, item.height].iter().any(|side| *side < Decimal::ZERO) {
        return Err(invalid_cargo("dimensions must not be negative"));
    }
    Ok(())
}

pub fn item_freight_weight(item: &CargoItem) -> PricingResult<Decimal> {
    validate_item(item)?;
    let package = package_weight(item.weight, item.quantity)?;
    let volumetric = volumetric_weight(item.width, item.length, item.height)?;
    Ok(package.max(volumetric))
}

/// Combine per-item freight weights under `policy`.
pub fn aggregate(policy: WeightAggregation, weights: &[Decimal]) -> PricingResult<Decimal> {
    let (first, rest) = weights.split_first().ok_or(PricingError::NoCargoItems)?;
    match policy {
        WeightAggregation::LastWins => Ok(rest.last().copied().unwrap_or(*first)),
        WeightAggregation::Sum => rest
            .iter()
            .try_fold(*first, |total, weight| total.checked_add(*weight))
            .ok_or_else(|| invalid_cargo("combined freight weight is too large")),
        WeightAggregation::Max => Ok(rest.iter().copied().fold(*first, Decimal::max)),
    }
}

/// Freight weight of the whole quote. Every item is validated, including
/// those the policy ends up ignoring.
pub fn freight_weight(items: &[CargoItem], policy: WeightAggregation) -> PricingResult<Decimal> {
    let weights = items
        .iter()
        .map(item_freight_weight)
        .collect::<PricingResult<Vec<_>>>()?;
    aggregate(policy, &weights)
}
