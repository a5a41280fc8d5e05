//! Read-only reference data consumed by the pricing engine.
//!
//! The persistence layer implements these against its own storage;
//! [`ReferenceSnapshot`](crate::snapshot::ReferenceSnapshot) is the in-memory
//! implementation.

use shared::types::{AccessorialCatalogEntry, AccessorialId, ClientId, ClientTier, RateTier, RateZone, ZoneId};
use std::sync::Arc;

pub trait ZoneDirectory {
    fn zone_for_postal_code(&self, postal_code: &str) -> Option<RateZone>;
}

pub trait TierTable {
    /// Tiers of a zone in the order they should be scanned.
    fn tiers_for_zone(&self, zone_id: ZoneId) -> Vec<RateTier>;
}

pub trait ClientTierDirectory {
    fn client_tier(&self, client_id: ClientId) -> Option<ClientTier>;
}

pub trait AccessorialCatalog {
    fn accessorial(&self, accessorial_id: AccessorialId) -> Option<AccessorialCatalogEntry>;
}

/// Every lookup a pricing run needs.
pub trait RateReference: ZoneDirectory + TierTable + ClientTierDirectory + AccessorialCatalog {}

impl<T> RateReference for T where T: ZoneDirectory + TierTable + ClientTierDirectory + AccessorialCatalog {}

impl<T: ZoneDirectory + ?Sized> ZoneDirectory for Arc<T> {
    fn zone_for_postal_code(&self, postal_code: &str) -> Option<RateZone> {
        (**self).zone_for_postal_code(postal_code)
    }
}

impl<T: TierTable + ?Sized> TierTable for Arc<T> {
    fn tiers_for_zone(&self, zone_id: ZoneId) -> Vec<RateTier> {
        (**self).tiers_for_zone(zone_id)
    }
}

impl<T: ClientTierDirectory + ?Sized> ClientTierDirectory for Arc<T> {
    fn client_tier(&self, client_id: ClientId) -> Option<ClientTier> {
        (**self).client_tier(client_id)
    }
}

impl<T: AccessorialCatalog + ?Sized> AccessorialCatalog for Arc<T> {
    fn accessorial(&self, accessorial_id: AccessorialId) -> Option<AccessorialCatalogEntry> {
        (**self).accessorial(accessorial_id)
    }
}
