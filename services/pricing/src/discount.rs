use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::rounding::ceil3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountCost {
    pub cost: Decimal,
}

/// Apply a client's tier discount to the summed quote total.
pub fn apply_discount(total: Decimal, discount_rate: Decimal) -> DiscountCost {
    let mut cost = total;
    if discount_rate > Decimal::ZERO {
        cost -= total * discount_rate;
    }
    DiscountCost { cost: ceil3(cost) }
}
