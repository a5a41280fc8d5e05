//! Shared fixtures for the cross-crate pricing tests

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use shared::types::{
    CargoItem, ClientId, ClientLevel, LocationType, QuoteRequest, ShipmentLocation, ShipmentRole, TransportMode,
};

use rates_service::ReferenceSnapshot;

pub const DALLAS: &str = "75201";
pub const GRAND_PRAIRIE: &str = "75050";
pub const FORT_WORTH: &str = "76101";

pub const DEFAULT_CLIENT: ClientId = 1;
pub const SILVER_CLIENT: ClientId = 2;
pub const GOLD_CLIENT: ClientId = 3;
pub const VIP_CLIENT: ClientId = 4;

/// Texas seed with one postal code per zone and a client on every level.
pub fn texas_reference() -> ReferenceSnapshot {
    ReferenceSnapshot::texas_seed()
        .with_postal_code(DALLAS, 1)
        .with_postal_code(GRAND_PRAIRIE, 2)
        .with_postal_code(FORT_WORTH, 3)
        .with_client(DEFAULT_CLIENT, ClientLevel::Default)
        .with_client(SILVER_CLIENT, ClientLevel::Silver)
        .with_client(GOLD_CLIENT, ClientLevel::Gold)
        .with_client(VIP_CLIENT, ClientLevel::Vip)
}

/// Calendar timestamp on the hour. Panics on an invalid date.
pub fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, 0, 0))
        .unwrap_or_else(|| panic!("invalid fixture timestamp {year}-{month}-{day} {hour}:00"))
}

/// Wednesday 2025-04-09 10:00, inside business hours.
pub fn weekday_morning() -> NaiveDateTime {
    at(2025, 4, 9, 10)
}

/// 48x40x50 pallet.
pub fn pallet(weight: Decimal, quantity: u32) -> CargoItem {
    CargoItem::new(dec!(48), dec!(40), dec!(50), weight, quantity)
}

/// Small carton whose volumetric weight never dominates.
pub fn carton(weight: Decimal, quantity: u32) -> CargoItem {
    CargoItem::new(dec!(10), dec!(10), dec!(10), weight, quantity)
}

pub struct QuoteBuilder {
    request: QuoteRequest,
}

impl QuoteBuilder {
    /// Commercial-to-commercial LTL quote on a weekday morning.
    pub fn new(pickup_code: &str, delivery_code: &str) -> Self {
        Self {
            request: QuoteRequest {
                cargo: Vec::new(),
                pickup: ShipmentLocation::new(
                    ShipmentRole::Pickup,
                    pickup_code,
                    LocationType::Commercial,
                    weekday_morning(),
                ),
                delivery: ShipmentLocation::new(
                    ShipmentRole::Delivery,
                    delivery_code,
                    LocationType::Commercial,
                    weekday_morning(),
                ),
                is_priority: false,
                transport_mode: TransportMode::Ltl,
                client_id: DEFAULT_CLIENT,
            },
        }
    }

    pub fn cargo(mut self, item: CargoItem) -> Self {
        self.request.cargo.push(item);
        self
    }

    pub fn client(mut self, client_id: ClientId) -> Self {
        self.request.client_id = client_id;
        self
    }

    pub fn priority(mut self) -> Self {
        self.request.is_priority = true;
        self
    }

    pub fn mode(mut self, mode: TransportMode) -> Self {
        self.request.transport_mode = mode;
        self
    }

    pub fn pickup_type(mut self, location_type: LocationType) -> Self {
        self.request.pickup.location_type = location_type;
        self
    }

    pub fn delivery_type(mut self, location_type: LocationType) -> Self {
        self.request.delivery.location_type = location_type;
        self
    }

    pub fn pickup_at(mut self, requested_at: NaiveDateTime) -> Self {
        self.request.pickup.requested_at = requested_at;
        self
    }

    pub fn delivery_at(mut self, requested_at: NaiveDateTime) -> Self {
        self.request.delivery.requested_at = requested_at;
        self
    }

    pub fn pickup_accessorial(mut self, accessorial_id: u32) -> Self {
        self.request.pickup = self.request.pickup.with_accessorial(accessorial_id);
        self
    }

    pub fn delivery_accessorial(mut self, accessorial_id: u32) -> Self {
        self.request.delivery = self.request.delivery.with_accessorial(accessorial_id);
        self
    }

    pub fn build(self) -> QuoteRequest {
        self.request
    }
}
