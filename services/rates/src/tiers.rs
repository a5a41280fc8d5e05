//! Weight-tiered rate lookup

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::error::{PricingError, PricingResult};
use shared::types::{RateTier, RateZone, ZoneId};

/// Price and load clamps that apply to one quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneRate {
    pub zone_id: ZoneId,
    pub price_per_weight: Decimal,
    pub min_load: Decimal,
    pub max_load: Decimal,
}

/// Fails when the weight is above the zone's ceiling. A zone without a
/// ceiling accepts any weight.
pub fn check_max_weight(max_weight: Option<Decimal>, freight_weight: Decimal) -> PricingResult<()> {
    match max_weight {
        Some(ceiling) if freight_weight > ceiling => Err(PricingError::MaxWeightExceeded {
            freight_weight,
            ceiling,
        }),
        _ => Ok(()),
    }
}

/// Price of the first tier, in the given order, whose band holds the weight.
pub fn find_price_per_weight(tiers: &[RateTier], freight_weight: Decimal) -> Option<Decimal> {
    tiers
        .iter()
        .find(|tier| tier.contains(freight_weight))
        .map(|tier| tier.price_per_weight)
}

/// Look up the rate for `freight_weight` in `zone`.
///
/// A weight under the ceiling that no band covers is a gap in the rate
/// table and is reported as [`PricingError::UnresolvedRateTier`].
pub fn zone_rate(zone: &RateZone, tiers: &[RateTier], freight_weight: Decimal) -> PricingResult<ZoneRate> {
    check_max_weight(zone.max_weight, freight_weight)?;

    let price_per_weight =
        find_price_per_weight(tiers, freight_weight).ok_or(PricingError::UnresolvedRateTier {
            zone_id: zone.id,
            freight_weight,
        })?;

    Ok(ZoneRate {
        zone_id: zone.id,
        price_per_weight,
        min_load: zone.min_load,
        max_load: zone.max_load,
    })
}
