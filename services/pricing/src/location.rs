//! Location-type surcharges for the pickup and delivery ends

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use shared::rounding::ceil3;
use shared::types::{LocationType, ShipmentLocation, ShipmentRole};

pub const RESIDENTIAL_SURCHARGE: Decimal = dec!(25);

/// Weight-proportional airport handling fee clamped to `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirportRate {
    pub price_per_weight: Decimal,
    pub min_cost: Decimal,
    pub max_cost: Decimal,
}

pub const AIRPORT_PICKUP: AirportRate = AirportRate {
    price_per_weight: dec!(0.035),
    min_cost: dec!(30),
    max_cost: dec!(200),
};

pub const AIRPORT_DELIVERY: AirportRate = AirportRate {
    price_per_weight: dec!(0.03),
    min_cost: dec!(25),
    max_cost: dec!(200),
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationCost {
    pub cost: Decimal,
}

impl AirportRate {
    pub fn for_role(role: ShipmentRole) -> AirportRate {
        match role {
            ShipmentRole::Pickup => AIRPORT_PICKUP,
            ShipmentRole::Delivery => AIRPORT_DELIVERY,
        }
    }

    pub fn cost(&self, freight_weight: Decimal) -> Decimal {
        let cost = self.price_per_weight * freight_weight;
        ceil3(cost.clamp(self.min_cost, self.max_cost))
    }
}

/// Surcharge for one end of the shipment.
pub fn location_surcharge(location_type: LocationType, role: ShipmentRole, freight_weight: Decimal) -> Decimal {
    match location_type {
        LocationType::Commercial => Decimal::ZERO,
        LocationType::Residential => RESIDENTIAL_SURCHARGE,
        LocationType::Airport => AirportRate::for_role(role).cost(freight_weight),
    }
}

/// Pickup and delivery surcharges summed.
pub fn location_cost(freight_weight: Decimal, pickup: &ShipmentLocation, delivery: &ShipmentLocation) -> LocationCost {
    let cost = location_surcharge(pickup.location_type, ShipmentRole::Pickup, freight_weight)
        + location_surcharge(delivery.location_type, ShipmentRole::Delivery, freight_weight);
    LocationCost { cost }
}
