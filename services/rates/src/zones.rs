//! Billing zone selection

use shared::error::{PricingError, PricingResult};
use shared::logger::mask_postal_code;
use shared::types::RateZone;
use tracing::debug;

use crate::reference::ZoneDirectory;

pub fn resolve_zone<D: ZoneDirectory + ?Sized>(directory: &D, postal_code: &str) -> PricingResult<RateZone> {
    directory.zone_for_postal_code(postal_code).ok_or_else(|| {
        debug!(postal_code = %mask_postal_code(postal_code), "No zone for postal code");
        PricingError::ZoneNotFound {
            postal_code: postal_code.to_string(),
        }
    })
}

/// The farther of two zones by `distance_rank`. Ties go to the pickup zone.
pub fn farther_zone(pickup: RateZone, delivery: RateZone) -> RateZone {
    if pickup.distance_rank >= delivery.distance_rank {
        pickup
    } else {
        delivery
    }
}

/// Resolve both ends and pick the zone the quote is billed against.
///
/// Fails if either postal code is outside every zone; the pickup code is
/// checked first.
pub fn billing_zone<D: ZoneDirectory + ?Sized>(
    directory: &D,
    pickup_postal_code: &str,
    delivery_postal_code: &str,
) -> PricingResult<RateZone> {
    let pickup = resolve_zone(directory, pickup_postal_code)?;
    let delivery = resolve_zone(directory, delivery_postal_code)?;

    let zone = farther_zone(pickup, delivery);
    debug!(zone_id = zone.id, zone = %zone.name, "Selected billing zone");
    Ok(zone)
}
