//! Tests for the shared pricing types, errors and configuration

use rust_decimal_macros::dec;
use std::sync::Mutex;

use crate::config::{PricingConfig, WeightAggregation};
use crate::error::PricingError;
use crate::types::{
    AccessorialCode, ClientLevel, ClientTier, LocationType, QuoteRequest, RateTier, ShipmentRole, TransportMode,
};

// Environment variables are process-wide
static ENV_LOCK: Mutex<()> = Mutex::new(());

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_default_config() {
    let config = PricingConfig::default();
    assert_eq!(config.fuel_surcharge, dec!(0.35));
    assert_eq!(config.weight_aggregation, WeightAggregation::LastWins);
    assert!(config.validate().is_ok());
}

#[test]
fn test_negative_fuel_surcharge_rejected() {
    let config = PricingConfig::default().with_fuel_surcharge(dec!(-0.1));
    assert!(config.validate().is_err());
}

#[test]
fn test_load_without_file_uses_defaults() {
    let _guard = ENV_LOCK.lock().unwrap();
    std::env::remove_var("PRICING_FUEL_SURCHARGE");
    std::env::remove_var("PRICING_WEIGHT_AGGREGATION");

    let config = PricingConfig::load_from("no-such-pricing-file").unwrap();
    assert_eq!(config, PricingConfig::default());
}

#[test]
fn test_load_from_environment() {
    let _guard = ENV_LOCK.lock().unwrap();
    std::env::set_var("PRICING_FUEL_SURCHARGE", "0.2");
    std::env::set_var("PRICING_WEIGHT_AGGREGATION", "sum");

    let config = PricingConfig::load_from("no-such-pricing-file");

    std::env::remove_var("PRICING_FUEL_SURCHARGE");
    std::env::remove_var("PRICING_WEIGHT_AGGREGATION");

    let config = config.unwrap();
    assert_eq!(config.fuel_surcharge, dec!(0.2));
    assert_eq!(config.weight_aggregation, WeightAggregation::Sum);
}

#[test]
fn test_load_rejects_negative_surcharge_from_environment() {
    let _guard = ENV_LOCK.lock().unwrap();
    std::env::set_var("PRICING_FUEL_SURCHARGE", "-1");

    let config = PricingConfig::load_from("no-such-pricing-file");

    std::env::remove_var("PRICING_FUEL_SURCHARGE");
    assert!(config.is_err());
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_error_classification() {
    let zone = PricingError::ZoneNotFound { postal_code: "00000".to_string() };
    assert!(zone.is_client_facing());
    assert!(!zone.requires_manual_quote());

    let weight = PricingError::MaxWeightExceeded { freight_weight: dec!(6000), ceiling: dec!(5000) };
    assert!(weight.is_client_facing());
    assert!(weight.requires_manual_quote());

    let load = PricingError::MaxLoadExceeded { freight_weight: dec!(200) };
    assert!(load.requires_manual_quote());

    let tier = PricingError::UnresolvedRateTier { zone_id: 1, freight_weight: dec!(0.5) };
    assert!(!tier.is_client_facing());

    let client = PricingError::ClientTierNotFound { client_id: 9 };
    assert!(!client.is_client_facing());

    let cargo = PricingError::InvalidCargo { reason: "quantity must be at least 1".to_string() };
    assert!(cargo.is_client_facing());
    assert!(!cargo.requires_manual_quote());
    assert_eq!(cargo.to_string(), "invalid cargo: quantity must be at least 1");
}

#[test]
fn test_manual_quote_message() {
    let err = PricingError::MaxLoadExceeded { freight_weight: dec!(200) };
    assert!(err.to_string().contains("contact us directly"));

    let err = PricingError::ZoneNotFound { postal_code: "99999".to_string() };
    assert_eq!(err.to_string(), "no rate zone covers postal code 99999");
}

// ============================================================================
// Types
// ============================================================================

#[test]
fn test_tier_band_is_inclusive() {
    let tier = RateTier {
        zone_id: 1,
        min_weight: dec!(51),
        max_weight: dec!(150),
        price_per_weight: dec!(4),
    };
    assert!(tier.contains(dec!(51)));
    assert!(tier.contains(dec!(150)));
    assert!(!tier.contains(dec!(150.001)));
    assert!(!tier.contains(dec!(50.999)));
}

#[test]
fn test_accessorial_code_from_display_name() {
    assert_eq!(AccessorialCode::from_display_name("Inside Delivery"), AccessorialCode::InsideDelivery);
    assert_eq!(AccessorialCode::from_display_name("Two Person"), AccessorialCode::TwoPerson);
    assert_eq!(AccessorialCode::from_display_name(" Lift Gate "), AccessorialCode::LiftGate);
    assert_eq!(AccessorialCode::from_display_name("Liftgate"), AccessorialCode::Unrecognized);
}

#[test]
fn test_qualifying_client_tier() {
    let ladder = ClientTier::standard_ladder();

    let tier = ClientTier::qualifying(&ladder, dec!(0)).unwrap();
    assert_eq!(tier.level, ClientLevel::Default);

    let tier = ClientTier::qualifying(&ladder, dec!(1000000)).unwrap();
    assert_eq!(tier.level, ClientLevel::Silver);
    assert_eq!(tier.discount_rate, dec!(0.10));

    let tier = ClientTier::qualifying(&ladder, dec!(9999999.99)).unwrap();
    assert_eq!(tier.level, ClientLevel::Gold);

    let tier = ClientTier::qualifying(&ladder, dec!(25000000)).unwrap();
    assert_eq!(tier.level, ClientLevel::Vip);

    assert!(ClientTier::qualifying(&ladder, dec!(-1)).is_none());
}

#[test]
fn test_quote_request_from_json() {
    let raw = r#"{
        "cargo": [
            {"width": "48", "length": "40", "height": "50", "weight": "300", "quantity": 2}
        ],
        "pickup": {
            "role": "PICKUP",
            "postal_code": "75201",
            "location_type": "AIRPORT",
            "requested_at": "2025-04-12T12:00:00"
        },
        "delivery": {
            "role": "DELIVERY",
            "postal_code": "76101",
            "location_type": "RESIDENTIAL",
            "requested_at": "2025-04-14T18:30:00",
            "accessorials": [{"accessorial_id": 3}]
        },
        "is_priority": true,
        "transport_mode": "LTL",
        "client_id": 42
    }"#;

    let request: QuoteRequest = serde_json::from_str(raw).unwrap();
    assert_eq!(request.cargo.len(), 1);
    assert_eq!(request.cargo[0].weight, dec!(300));
    assert!(!request.cargo[0].hazardous);
    assert_eq!(request.pickup.role, ShipmentRole::Pickup);
    assert_eq!(request.pickup.location_type, LocationType::Airport);
    assert!(request.pickup.accessorials.is_empty());
    assert_eq!(request.delivery.accessorials[0].accessorial_id, 3);
    assert_eq!(request.transport_mode, TransportMode::Ltl);
    assert!(request.is_priority);
}
