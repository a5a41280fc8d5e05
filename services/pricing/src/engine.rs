//! Quote pricing pipeline
//!
//! Stages run in a fixed order: base cost, the max-load rejection rule,
//! location and extra surcharges, then the client's tier discount. Each
//! stage is a pure function of the request, the reference data and the
//! outputs of earlier stages.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::config::PricingConfig;
use shared::error::{PricingError, PricingResult};
use shared::logger::{log_quote_priced, log_quote_rejected};
use shared::types::{ClientLevel, QuoteRequest, RateZone, TransportMode, ZoneId};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use rates_service::reference::{ClientTierDirectory, RateReference};
use rates_service::zones::billing_zone;

use crate::base::{BaseCost, FullTruckload, LessThanTruckload, ModeCostStrategy};
use crate::discount::apply_discount;
use crate::extra::{extra_cost, resolve_end};
use crate::freight::freight_weight;
use crate::location::location_cost;

/// Base stage of a quote, before the max-load rule is enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseQuote {
    pub zone: RateZone,
    pub base: BaseCost,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteBreakdown {
    pub zone_id: ZoneId,
    pub transport_mode: TransportMode,
    pub location_cost: Decimal,
    pub extra_cost: Decimal,
    /// Base plus extra price before the discount.
    pub subtotal: Decimal,
    pub client_level: ClientLevel,
    pub discount_rate: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedQuote {
    pub base_price: Decimal,
    pub extra_price: Decimal,
    pub total_price_with_discount: Decimal,
    pub freight_weight: Decimal,
    pub is_max_load: bool,
    pub breakdown: QuoteBreakdown,
}

pub struct PricingEngine<R> {
    reference: R,
    config: PricingConfig,
    strategies: HashMap<TransportMode, Arc<dyn ModeCostStrategy>>,
}

impl<R: RateReference> PricingEngine<R> {
    /// Engine with the LTL and truckload strategies installed.
    pub fn new(reference: R, config: PricingConfig) -> Self {
        let mut strategies: HashMap<TransportMode, Arc<dyn ModeCostStrategy>> = HashMap::new();
        strategies.insert(TransportMode::Ltl, Arc::new(LessThanTruckload));
        strategies.insert(TransportMode::Truckload, Arc::new(FullTruckload));

        Self {
            reference,
            config,
            strategies,
        }
    }

    /// Install or replace the strategy for a transport mode.
    pub fn with_strategy(mut self, mode: TransportMode, strategy: impl ModeCostStrategy + 'static) -> Self {
        self.strategies.insert(mode, Arc::new(strategy));
        self
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    pub fn reference(&self) -> &R {
        &self.reference
    }

    /// Run the base stage only. `is_max_load` is reported, not enforced.
    pub fn base_quote(&self, request: &QuoteRequest) -> PricingResult<BaseQuote> {
        let strategy = self
            .strategies
            .get(&request.transport_mode)
            .ok_or(PricingError::UnsupportedTransportMode(request.transport_mode))?;

        let weight = freight_weight(&request.cargo, self.config.weight_aggregation)?;
        let zone = billing_zone(
            &self.reference,
            &request.pickup.postal_code,
            &request.delivery.postal_code,
        )?;

        let base = strategy.base_cost(&zone, &self.reference, weight, self.config.fuel_surcharge)?;
        debug!(
            zone_id = zone.id,
            freight_weight = %base.freight_weight,
            cost = %base.cost,
            is_max_load = base.is_max_load,
            "Base cost"
        );

        Ok(BaseQuote { zone, base })
    }

    /// Price a quote end to end.
    pub fn price_quote(&self, request: &QuoteRequest) -> PricingResult<PricedQuote> {
        match self.run(request) {
            Ok(quote) => {
                log_quote_priced(request.client_id, quote.freight_weight, quote.total_price_with_discount);
                Ok(quote)
            }
            Err(err) => {
                log_quote_rejected(request.client_id, &err.to_string(), err.is_client_facing());
                Err(err)
            }
        }
    }

    fn run(&self, request: &QuoteRequest) -> PricingResult<PricedQuote> {
        let BaseQuote { zone, base } = self.base_quote(request)?;
        if base.is_max_load {
            return Err(PricingError::MaxLoadExceeded {
                freight_weight: base.freight_weight,
            });
        }

        let location = location_cost(base.freight_weight, &request.pickup, &request.delivery);

        let ends = [
            resolve_end(&self.reference, &request.pickup),
            resolve_end(&self.reference, &request.delivery),
        ];
        let extra = extra_cost(&ends, base.freight_weight, request.is_priority);
        debug!(location = %location.cost, extra = %extra.cost, "Surcharges");

        let base_price = base.cost;
        let extra_price = location.cost + extra.cost;
        let subtotal = base_price + extra_price;

        let tier = self
            .reference
            .client_tier(request.client_id)
            .ok_or(PricingError::ClientTierNotFound {
                client_id: request.client_id,
            })?;
        let discounted = apply_discount(subtotal, tier.discount_rate);

        Ok(PricedQuote {
            base_price,
            extra_price,
            total_price_with_discount: discounted.cost,
            freight_weight: base.freight_weight,
            is_max_load: base.is_max_load,
            breakdown: QuoteBreakdown {
                zone_id: zone.id,
                transport_mode: request.transport_mode,
                location_cost: location.cost,
                extra_cost: extra.cost,
                subtotal,
                client_level: tier.level,
                discount_rate: tier.discount_rate,
            },
        })
    }
}
