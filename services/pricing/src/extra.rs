//! Accessorial and timing surcharges

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use shared::rounding::ceil3;
use shared::types::{AccessorialCode, ShipmentLocation};
use tracing::warn;

use rates_service::reference::AccessorialCatalog;

pub const INSIDE_DELIVERY_RATE: Decimal = dec!(0.02);
pub const INSIDE_DELIVERY_MIN: Decimal = dec!(25);
pub const TWO_PERSON_SURCHARGE: Decimal = dec!(80);
pub const LIFT_GATE_SURCHARGE: Decimal = dec!(25);

pub const TIME_SURCHARGE: Decimal = dec!(100);
pub const BUSINESS_HOURS_START: u32 = 9;
pub const BUSINESS_HOURS_END: u32 = 17;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraCost {
    pub cost: Decimal,
}

/// One end of the shipment with its accessorials resolved to codes.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedEnd {
    pub requested_at: NaiveDateTime,
    pub accessorials: Vec<AccessorialCode>,
}

/// Look up the codes of the accessorials attached to `location`.
///
/// Selections missing from the catalog resolve to
/// [`AccessorialCode::Unrecognized`] and price at zero.
pub fn resolve_end<C: AccessorialCatalog + ?Sized>(catalog: &C, location: &ShipmentLocation) -> ResolvedEnd {
    let accessorials = location
        .accessorials
        .iter()
        .map(|selection| match catalog.accessorial(selection.accessorial_id) {
            Some(entry) => entry.code,
            None => {
                warn!(
                    accessorial_id = selection.accessorial_id,
                    role = %location.role,
                    "Accessorial not in catalog"
                );
                AccessorialCode::Unrecognized
            }
        })
        .collect();

    ResolvedEnd {
        requested_at: location.requested_at,
        accessorials,
    }
}

pub fn accessorial_surcharge(code: AccessorialCode, freight_weight: Decimal) -> Decimal {
    match code {
        AccessorialCode::InsideDelivery => INSIDE_DELIVERY_MIN.max(ceil3(freight_weight * INSIDE_DELIVERY_RATE)),
        AccessorialCode::TwoPerson => TWO_PERSON_SURCHARGE,
        AccessorialCode::LiftGate => LIFT_GATE_SURCHARGE,
        AccessorialCode::Unrecognized => Decimal::ZERO,
    }
}

pub fn is_weekend(requested_at: NaiveDateTime) -> bool {
    matches!(requested_at.weekday(), Weekday::Sat | Weekday::Sun)
}

pub fn is_after_hours(requested_at: NaiveDateTime) -> bool {
    requested_at.hour() >= BUSINESS_HOURS_END
}

pub fn is_business_hours(requested_at: NaiveDateTime) -> bool {
    (BUSINESS_HOURS_START..BUSINESS_HOURS_END).contains(&requested_at.hour())
}

/// Weekend, after-hours and in-hours priority surcharges. Each applies
/// independently.
pub fn time_surcharge(requested_at: NaiveDateTime, is_priority: bool) -> Decimal {
    let mut cost = Decimal::ZERO;
    if is_weekend(requested_at) {
        cost += TIME_SURCHARGE;
    }
    if is_after_hours(requested_at) {
        cost += TIME_SURCHARGE;
    }
    if is_priority && is_business_hours(requested_at) {
        cost += TIME_SURCHARGE;
    }
    cost
}

pub fn end_extra_cost(end: &ResolvedEnd, freight_weight: Decimal, is_priority: bool) -> Decimal {
    let accessorials: Decimal = end
        .accessorials
        .iter()
        .map(|code| accessorial_surcharge(*code, freight_weight))
        .sum();
    accessorials + time_surcharge(end.requested_at, is_priority)
}

/// Extra cost of every end, summed.
pub fn extra_cost(ends: &[ResolvedEnd], freight_weight: Decimal, is_priority: bool) -> ExtraCost {
    let cost = ends
        .iter()
        .map(|end| end_extra_cost(end, freight_weight, is_priority))
        .sum();
    ExtraCost { cost }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    // 2025-04-12 is a Saturday
    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 4, day)
            .and_then(|d| d.and_hms_opt(hour, 0, 0))
            .unwrap()
    }

    fn end(day: u32, hour: u32, accessorials: Vec<AccessorialCode>) -> ResolvedEnd {
        ResolvedEnd {
            requested_at: at(day, hour),
            accessorials,
        }
    }

    #[test]
    fn test_accessorial_surcharges() {
        assert_eq!(accessorial_surcharge(AccessorialCode::InsideDelivery, dec!(100)), dec!(25));
        assert_eq!(accessorial_surcharge(AccessorialCode::InsideDelivery, dec!(4000)), dec!(80));
        assert_eq!(accessorial_surcharge(AccessorialCode::InsideDelivery, dec!(1300.01)), dec!(26.001));
        assert_eq!(accessorial_surcharge(AccessorialCode::TwoPerson, dec!(100)), dec!(80));
        assert_eq!(accessorial_surcharge(AccessorialCode::LiftGate, dec!(100)), dec!(25));
        assert_eq!(accessorial_surcharge(AccessorialCode::Unrecognized, dec!(100)), dec!(0));
    }

    #[test]
    fn test_all_accessorials_on_one_end() {
        // Wednesday 10:00, no timing surcharge
        let ends = [end(
            9,
            10,
            vec![AccessorialCode::InsideDelivery, AccessorialCode::TwoPerson, AccessorialCode::LiftGate],
        )];
        assert_eq!(extra_cost(&ends, dec!(100), false).cost, dec!(130));
    }

    #[test]
    fn test_weekend_only() {
        assert_eq!(time_surcharge(at(12, 12), false), dec!(100));
        assert_eq!(time_surcharge(at(13, 12), false), dec!(100));
    }

    #[test]
    fn test_weekend_priority_inside_business_hours() {
        // Priority applies from 9 to 17 regardless of the weekday
        assert_eq!(time_surcharge(at(12, 12), true), dec!(200));
    }

    #[test]
    fn test_priority_outside_business_hours() {
        assert_eq!(time_surcharge(at(9, 8), true), dec!(0));
        assert_eq!(time_surcharge(at(9, 17), true), dec!(100));
    }

    #[test]
    fn test_business_hours_boundaries() {
        assert!(is_business_hours(at(9, 9)));
        assert!(is_business_hours(at(9, 16)));
        assert!(!is_business_hours(at(9, 17)));
        assert!(is_after_hours(at(9, 17)));
        assert!(!is_after_hours(at(9, 16)));
    }

    #[test]
    fn test_weekday_plain() {
        assert_eq!(time_surcharge(at(9, 12), false), dec!(0));
        assert!(!is_weekend(at(11, 23)));
    }

    #[test]
    fn test_both_ends_stack() {
        // Saturday 18:00 at both ends: weekend + after hours, twice
        let ends = [end(12, 18, vec![]), end(12, 18, vec![AccessorialCode::LiftGate])];
        assert_eq!(extra_cost(&ends, dec!(100), true).cost, dec!(425));
    }
}
