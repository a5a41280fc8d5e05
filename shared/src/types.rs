use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

// Identifier aliases for the reference tables
pub type ZoneId = u32;
pub type RegionId = u32;
pub type AccessorialId = u32;
pub type ClientId = u64;

/// One line of cargo on a quote. Dimensions share a single length unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CargoItem {
    pub width: Decimal,
    pub length: Decimal,
    pub height: Decimal,
    pub weight: Decimal,
    pub quantity: u32,
    #[serde(default)]
    pub stackable: bool,
    #[serde(default)]
    pub temperature: Option<String>,
    #[serde(default)]
    pub hazardous: bool,
    #[serde(default)]
    pub hazardous_detail: Option<String>,
}

impl CargoItem {
    pub fn new(width: Decimal, length: Decimal, height: Decimal, weight: Decimal, quantity: u32) -> Self {
        Self {
            width,
            length,
            height,
            weight,
            quantity,
            stackable: false,
            temperature: None,
            hazardous: false,
            hazardous_detail: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShipmentRole {
    Pickup,
    Delivery,
}

impl fmt::Display for ShipmentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShipmentRole::Pickup => write!(f, "PICKUP"),
            ShipmentRole::Delivery => write!(f, "DELIVERY"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LocationType {
    Commercial,
    Residential,
    Airport,
}

/// Reference from a shipment end to an entry in the accessorial catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccessorialSelection {
    pub accessorial_id: AccessorialId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentLocation {
    pub role: ShipmentRole,
    pub postal_code: String,
    pub location_type: LocationType,
    pub requested_at: NaiveDateTime,
    #[serde(default)]
    pub accessorials: Vec<AccessorialSelection>,
}

impl ShipmentLocation {
    pub fn new(
        role: ShipmentRole,
        postal_code: impl Into<String>,
        location_type: LocationType,
        requested_at: NaiveDateTime,
    ) -> Self {
        Self {
            role,
            postal_code: postal_code.into(),
            location_type,
            requested_at,
            accessorials: Vec::new(),
        }
    }

    pub fn with_accessorial(mut self, accessorial_id: AccessorialId) -> Self {
        self.accessorials.push(AccessorialSelection { accessorial_id });
        self
    }
}

/// A billing zone ("area") inside a region.
///
/// `distance_rank` orders zones by remoteness; the larger rank is the
/// farther zone when pickup and delivery fall in different zones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateZone {
    pub id: ZoneId,
    pub region_id: RegionId,
    pub name: String,
    pub distance_rank: u32,
    pub min_load: Decimal,
    pub max_load: Decimal,
    #[serde(default)]
    pub max_weight: Option<Decimal>,
}

/// Weight band within a zone. Both bounds are inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTier {
    pub zone_id: ZoneId,
    pub min_weight: Decimal,
    pub max_weight: Decimal,
    pub price_per_weight: Decimal,
}

impl RateTier {
    pub fn contains(&self, weight: Decimal) -> bool {
        weight >= self.min_weight && weight <= self.max_weight
    }
}

/// Stable code an accessorial surcharge is dispatched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessorialCode {
    InsideDelivery,
    TwoPerson,
    LiftGate,
    Unrecognized,
}

impl AccessorialCode {
    /// Maps a legacy catalog display name onto its code.
    pub fn from_display_name(name: &str) -> Self {
        match name.trim() {
            "Inside Delivery" => AccessorialCode::InsideDelivery,
            "Two Person" => AccessorialCode::TwoPerson,
            "Lift Gate" => AccessorialCode::LiftGate,
            _ => AccessorialCode::Unrecognized,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessorialCatalogEntry {
    pub id: AccessorialId,
    pub code: AccessorialCode,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClientLevel {
    Default,
    Silver,
    Gold,
    Vip,
}

impl fmt::Display for ClientLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ClientLevel::Default => "DEFAULT",
            ClientLevel::Silver => "SILVER",
            ClientLevel::Gold => "GOLD",
            ClientLevel::Vip => "VIP",
        };
        f.write_str(label)
    }
}

/// Loyalty tier of a client. `discount_rate` lies in `[0, 1)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientTier {
    pub level: ClientLevel,
    pub discount_rate: Decimal,
    pub min_spend: Decimal,
}

impl ClientTier {
    pub fn new(level: ClientLevel, discount_rate: Decimal, min_spend: Decimal) -> Self {
        Self { level, discount_rate, min_spend }
    }

    /// The standard tier ladder offered to clients.
    pub fn standard_ladder() -> Vec<ClientTier> {
        vec![
            ClientTier::new(ClientLevel::Default, dec!(0), dec!(0)),
            ClientTier::new(ClientLevel::Silver, dec!(0.10), dec!(1000000)),
            ClientTier::new(ClientLevel::Gold, dec!(0.15), dec!(5000000)),
            ClientTier::new(ClientLevel::Vip, dec!(0.20), dec!(10000000)),
        ]
    }

    /// Highest tier whose spend threshold has been reached.
    pub fn qualifying<'a>(ladder: &'a [ClientTier], lifetime_spend: Decimal) -> Option<&'a ClientTier> {
        ladder
            .iter()
            .filter(|tier| tier.min_spend <= lifetime_spend)
            .max_by(|a, b| a.min_spend.cmp(&b.min_spend))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransportMode {
    Ltl,
    Truckload,
    Flatbed,
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportMode::Ltl => write!(f, "LTL"),
            TransportMode::Truckload => write!(f, "TRUCKLOAD"),
            TransportMode::Flatbed => write!(f, "FLATBED"),
        }
    }
}

/// Everything the engine needs to price one quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub cargo: Vec<CargoItem>,
    pub pickup: ShipmentLocation,
    pub delivery: ShipmentLocation,
    #[serde(default)]
    pub is_priority: bool,
    pub transport_mode: TransportMode,
    pub client_id: ClientId,
}
