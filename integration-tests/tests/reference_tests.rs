//! Reference snapshots loaded from JSON documents

use integration_tests::{carton, pallet, texas_reference, QuoteBuilder};
use pricing_service::PricingEngine;
use rates_service::{ClientTierDirectory, ReferenceSnapshot, SnapshotError, ZoneDirectory};
use rust_decimal_macros::dec;
use serde_json::json;
use shared::config::PricingConfig;
use shared::error::PricingError;
use shared::types::{ClientLevel, ClientTier};

const GULF_COAST: &str = include_str!("../fixtures/gulf_coast.json");
const CORE: &str = "77001";
const OUTER: &str = "77550";

fn gulf_engine() -> PricingEngine<ReferenceSnapshot> {
    let reference = ReferenceSnapshot::from_json(GULF_COAST).unwrap();
    PricingEngine::new(reference, PricingConfig::default())
}

#[test]
fn test_document_loads() {
    let reference = ReferenceSnapshot::from_json(GULF_COAST).unwrap();
    assert_eq!(reference.zones().len(), 2);
    assert_eq!(reference.zone_for_postal_code(CORE).map(|zone| zone.id), Some(11));
    assert_eq!(reference.client_tier(200).map(|tier| tier.level), Some(ClientLevel::Vip));
}

#[test]
fn test_rank_decides_farther_zone_not_id() {
    let engine = gulf_engine();
    let request = QuoteBuilder::new(CORE, OUTER)
        .cargo(pallet(dec!(300), 2))
        .client(100)
        .build();

    let quote = engine.price_quote(&request).unwrap();
    // Zone 10 has the lower id but the higher rank
    assert_eq!(quote.breakdown.zone_id, 10);
    // 600 * 0.08 = 48, with 35% fuel
    assert_eq!(quote.base_price, dec!(64.8));
}

#[test]
fn test_catalog_entry_without_known_code_is_free() {
    let engine = gulf_engine();
    let request = QuoteBuilder::new(CORE, OUTER)
        .cargo(pallet(dec!(300), 2))
        .client(100)
        .delivery_accessorial(9)
        .build();

    let quote = engine.price_quote(&request).unwrap();
    assert_eq!(quote.extra_price, dec!(0));
}

#[test]
fn test_vip_discount_from_document() {
    let engine = gulf_engine();
    let request = QuoteBuilder::new(CORE, OUTER)
        .cargo(pallet(dec!(300), 2))
        .client(200)
        .build();

    let quote = engine.price_quote(&request).unwrap();
    assert_eq!(quote.total_price_with_discount, dec!(51.84));
}

#[test]
fn test_levels_missing_from_document_are_not_found() {
    let engine = gulf_engine();
    let request = QuoteBuilder::new(CORE, OUTER)
        .cargo(pallet(dec!(300), 2))
        .client(300)
        .build();

    assert_eq!(
        engine.price_quote(&request).unwrap_err(),
        PricingError::ClientTierNotFound { client_id: 300 }
    );
}

#[test]
fn test_max_load_reported_then_rejected() {
    let engine = gulf_engine();
    let request = QuoteBuilder::new(CORE, OUTER)
        .cargo(carton(dec!(3000), 2))
        .client(100)
        .build();

    let base = engine.base_quote(&request).unwrap();
    // 6000 * 0.07 = 420, capped at 300
    assert!(base.base.is_max_load);
    assert_eq!(base.base.cost, dec!(405));

    let err = engine.price_quote(&request).unwrap_err();
    assert_eq!(
        err,
        PricingError::MaxLoadExceeded {
            freight_weight: dec!(6000)
        }
    );
    assert!(err.requires_manual_quote());
}

#[test]
fn test_snapshot_survives_json() {
    let reference = texas_reference();
    let raw = reference.to_json().unwrap();
    assert_eq!(ReferenceSnapshot::from_json(&raw).unwrap(), reference);
}

#[test]
fn test_qualifying_level_assigned_to_client() {
    let ladder = ClientTier::standard_ladder();
    let level = ClientTier::qualifying(&ladder, dec!(6500000)).map(|tier| tier.level).unwrap();
    let reference = texas_reference().with_client(42, level);

    assert_eq!(reference.client_tier(42).map(|tier| tier.discount_rate), Some(dec!(0.15)));
}

#[test]
fn test_tier_for_unknown_zone_rejected() {
    let raw = json!({
        "zones": [],
        "tiers": [
            { "zone_id": 42, "min_weight": "0", "max_weight": "100", "price_per_weight": "1" }
        ]
    })
    .to_string();

    assert!(matches!(
        ReferenceSnapshot::from_json(&raw),
        Err(SnapshotError::TierWithoutZone(42))
    ));
}

#[test]
fn test_malformed_document_rejected() {
    assert!(matches!(
        ReferenceSnapshot::from_json("{ \"zones\": 3 }"),
        Err(SnapshotError::Parse(_))
    ));
}
