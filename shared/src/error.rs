use crate::types::{ClientId, TransportMode, ZoneId};
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while pricing a single quote.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    #[error("no rate zone covers postal code {postal_code}")]
    ZoneNotFound { postal_code: String },

    #[error("freight weight {freight_weight} exceeds the maximum of {ceiling}; please contact us directly for a quote")]
    MaxWeightExceeded { freight_weight: Decimal, ceiling: Decimal },

    #[error("shipment of freight weight {freight_weight} exceeds the maximum load; please contact us directly for a quote")]
    MaxLoadExceeded { freight_weight: Decimal },

    #[error("no rate tier of zone {zone_id} covers freight weight {freight_weight}")]
    UnresolvedRateTier { zone_id: ZoneId, freight_weight: Decimal },

    #[error("client {client_id} has no tier assigned")]
    ClientTierNotFound { client_id: ClientId },

    #[error("quote has no cargo items")]
    NoCargoItems,

    #[error("invalid cargo: {reason}")]
    InvalidCargo { reason: String },

    #[error("transport mode {0} cannot be priced automatically")]
    UnsupportedTransportMode(TransportMode),
}

impl PricingError {
    /// Whether the message is meant for the client rather than operators.
    ///
    /// Tier gaps and missing client tiers are reference-data defects and
    /// surface as internal errors.
    pub fn is_client_facing(&self) -> bool {
        !matches!(
            self,
            PricingError::UnresolvedRateTier { .. } | PricingError::ClientTierNotFound { .. }
        )
    }

    pub fn requires_manual_quote(&self) -> bool {
        matches!(
            self,
            PricingError::MaxWeightExceeded { .. } | PricingError::MaxLoadExceeded { .. }
        )
    }
}

pub type PricingResult<T> = std::result::Result<T, PricingError>;
