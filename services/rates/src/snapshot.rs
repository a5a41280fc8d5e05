//! In-memory reference data snapshot
//!
//! Loaded once per deployment (JSON, or the built-in seed) and shared
//! read-only across pricing runs.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use shared::types::{
    AccessorialCatalogEntry, AccessorialCode, AccessorialId, ClientId, ClientLevel, ClientTier, RateTier, RateZone,
    RegionId, ZoneId,
};
use std::collections::{HashMap, HashSet};
use thiserror::Error;
use tracing::debug;

use crate::reference::{AccessorialCatalog, ClientTierDirectory, TierTable, ZoneDirectory};

pub const TEXAS_REGION_ID: RegionId = 1;

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("invalid snapshot document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("zone {0} is defined more than once")]
    DuplicateZone(ZoneId),
    #[error("zone name {name} is used twice in region {region_id}")]
    DuplicateZoneName { region_id: RegionId, name: String },
    #[error("zone {0} has a min load above its max load")]
    InvertedLoadBounds(ZoneId),
    #[error("tier references unknown zone {0}")]
    TierWithoutZone(ZoneId),
    #[error("tier of zone {0} has min weight above max weight")]
    InvertedTierBand(ZoneId),
    #[error("postal code {postal_code} maps to unknown zone {zone_id}")]
    PostalCodeWithoutZone { postal_code: String, zone_id: ZoneId },
    #[error("client {client_id} is assigned level {level} which has no tier")]
    ClientLevelWithoutTier { client_id: ClientId, level: ClientLevel },
    #[error("discount rate {rate} of level {level} is outside [0, 1)")]
    DiscountOutOfRange { level: ClientLevel, rate: Decimal },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferenceSnapshot {
    #[serde(default)]
    zones: Vec<RateZone>,
    #[serde(default)]
    tiers: Vec<RateTier>,
    #[serde(default)]
    postal_codes: HashMap<String, ZoneId>,
    #[serde(default)]
    accessorials: Vec<AccessorialCatalogEntry>,
    #[serde(default)]
    client_tiers: Vec<ClientTier>,
    #[serde(default)]
    clients: HashMap<ClientId, ClientLevel>,
}

impl ReferenceSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(raw: &str) -> Result<Self, SnapshotError> {
        let snapshot: ReferenceSnapshot = serde_json::from_str(raw)?;
        snapshot.validate()?;
        debug!(
            zones = snapshot.zones.len(),
            tiers = snapshot.tiers.len(),
            postal_codes = snapshot.postal_codes.len(),
            "Loaded reference snapshot"
        );
        Ok(snapshot)
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Dallas-Fort Worth region with its three zones, weight tiers,
    /// accessorial catalog and the standard client tier ladder.
    ///
    /// Postal codes and client assignments are not part of the seed.
    ///
    /// Weight bands have whole-number bounds (`1..=1000`, `1001..=2000`, ...),
    /// so fractional weights between bands such as 1000.5, or below 1, match
    /// no tier and fail with `UnresolvedRateTier`.
    pub fn texas_seed() -> Self {
        let zones = vec![
            texas_zone(1, "A", dec!(25), dec!(225)),
            texas_zone(2, "B", dec!(30), dec!(250)),
            texas_zone(3, "C", dec!(35), dec!(275)),
        ];

        let prices = [
            (1, [dec!(0.0525), dec!(0.05), dec!(0.0475), dec!(0.045)]),
            (2, [dec!(0.0625), dec!(0.06), dec!(0.0575), dec!(0.055)]),
            (3, [dec!(0.0725), dec!(0.07), dec!(0.0675), dec!(0.065)]),
        ];
        let bands = [
            (dec!(1), dec!(1000)),
            (dec!(1001), dec!(2000)),
            (dec!(2001), dec!(3000)),
            (dec!(3001), dec!(5000)),
        ];
        let tiers = prices
            .iter()
            .flat_map(|(zone_id, zone_prices)| {
                bands.iter().zip(zone_prices.iter()).map(move |((min, max), price)| RateTier {
                    zone_id: *zone_id,
                    min_weight: *min,
                    max_weight: *max,
                    price_per_weight: *price,
                })
            })
            .collect();

        Self {
            zones,
            tiers,
            ..Self::standard_catalog()
        }
    }

    /// Accessorial catalog and client tier ladder, without any zones.
    pub fn standard_catalog() -> Self {
        Self {
            accessorials: vec![
                seed_accessorial(1, "Inside Delivery"),
                seed_accessorial(2, "Two Person"),
                seed_accessorial(3, "Lift Gate"),
            ],
            client_tiers: ClientTier::standard_ladder(),
            ..Self::default()
        }
    }

    pub fn with_zone(mut self, zone: RateZone) -> Self {
        self.zones.push(zone);
        self
    }

    pub fn with_tier(mut self, tier: RateTier) -> Self {
        self.tiers.push(tier);
        self
    }

    pub fn with_postal_code(mut self, postal_code: impl Into<String>, zone_id: ZoneId) -> Self {
        self.postal_codes.insert(normalize_postal_code(&postal_code.into()), zone_id);
        self
    }

    pub fn with_accessorial(mut self, entry: AccessorialCatalogEntry) -> Self {
        self.accessorials.push(entry);
        self
    }

    pub fn with_client_tier(mut self, tier: ClientTier) -> Self {
        self.client_tiers.retain(|existing| existing.level != tier.level);
        self.client_tiers.push(tier);
        self
    }

    pub fn with_client(mut self, client_id: ClientId, level: ClientLevel) -> Self {
        self.clients.insert(client_id, level);
        self
    }

    pub fn zone(&self, zone_id: ZoneId) -> Option<&RateZone> {
        self.zones.iter().find(|zone| zone.id == zone_id)
    }

    pub fn zones(&self) -> &[RateZone] {
        &self.zones
    }

    /// Check the internal consistency of the snapshot.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        let mut zone_ids = HashSet::new();
        let mut zone_names = HashSet::new();
        for zone in &self.zones {
            if !zone_ids.insert(zone.id) {
                return Err(SnapshotError::DuplicateZone(zone.id));
            }
            if !zone_names.insert((zone.region_id, zone.name.as_str())) {
                return Err(SnapshotError::DuplicateZoneName {
                    region_id: zone.region_id,
                    name: zone.name.clone(),
                });
            }
            if zone.min_load > zone.max_load {
                return Err(SnapshotError::InvertedLoadBounds(zone.id));
            }
        }

        for tier in &self.tiers {
            if !zone_ids.contains(&tier.zone_id) {
                return Err(SnapshotError::TierWithoutZone(tier.zone_id));
            }
            if tier.min_weight > tier.max_weight {
                return Err(SnapshotError::InvertedTierBand(tier.zone_id));
            }
        }

        for (postal_code, zone_id) in &self.postal_codes {
            if !zone_ids.contains(zone_id) {
                return Err(SnapshotError::PostalCodeWithoutZone {
                    postal_code: postal_code.clone(),
                    zone_id: *zone_id,
                });
            }
        }

        for tier in &self.client_tiers {
            if tier.discount_rate < Decimal::ZERO || tier.discount_rate >= Decimal::ONE {
                return Err(SnapshotError::DiscountOutOfRange {
                    level: tier.level,
                    rate: tier.discount_rate,
                });
            }
        }

        for (client_id, level) in &self.clients {
            if !self.client_tiers.iter().any(|tier| tier.level == *level) {
                return Err(SnapshotError::ClientLevelWithoutTier {
                    client_id: *client_id,
                    level: *level,
                });
            }
        }

        Ok(())
    }
}

impl ZoneDirectory for ReferenceSnapshot {
    fn zone_for_postal_code(&self, postal_code: &str) -> Option<RateZone> {
        let zone_id = self.postal_codes.get(&normalize_postal_code(postal_code))?;
        self.zone(*zone_id).cloned()
    }
}

impl TierTable for ReferenceSnapshot {
    fn tiers_for_zone(&self, zone_id: ZoneId) -> Vec<RateTier> {
        self.tiers.iter().filter(|tier| tier.zone_id == zone_id).cloned().collect()
    }
}

impl ClientTierDirectory for ReferenceSnapshot {
    fn client_tier(&self, client_id: ClientId) -> Option<ClientTier> {
        let level = self.clients.get(&client_id)?;
        self.client_tiers.iter().find(|tier| tier.level == *level).cloned()
    }
}

impl AccessorialCatalog for ReferenceSnapshot {
    fn accessorial(&self, accessorial_id: AccessorialId) -> Option<AccessorialCatalogEntry> {
        self.accessorials.iter().find(|entry| entry.id == accessorial_id).cloned()
    }
}

fn normalize_postal_code(postal_code: &str) -> String {
    postal_code.trim().to_string()
}

fn texas_zone(id: ZoneId, name: &str, min_load: Decimal, max_load: Decimal) -> RateZone {
    RateZone {
        id,
        region_id: TEXAS_REGION_ID,
        name: name.to_string(),
        distance_rank: id,
        min_load,
        max_load,
        max_weight: Some(dec!(5000)),
    }
}

fn seed_accessorial(id: AccessorialId, name: &str) -> AccessorialCatalogEntry {
    AccessorialCatalogEntry {
        id,
        code: AccessorialCode::from_display_name(name),
        name: name.to_string(),
        description: "-".to_string(),
    }
}
