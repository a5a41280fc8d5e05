//! Logging utilities

use crate::types::ClientId;
use rust_decimal::Decimal;
use tracing::{info, warn};

/// Initialize the JSON logger. `RUST_LOG` overrides the `info` default.
pub fn init_logger() -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install logger: {}", e))
}

/// Log a priced quote
pub fn log_quote_priced(client_id: ClientId, freight_weight: Decimal, total: Decimal) {
    info!(
        client_id = client_id,
        freight_weight = %freight_weight,
        total = %total,
        "Quote priced"
    );
}

/// Log a quote the engine refused to price
pub fn log_quote_rejected(client_id: ClientId, reason: &str, client_facing: bool) {
    warn!(
        client_id = client_id,
        reason = %reason,
        client_facing = client_facing,
        "Quote rejected"
    );
}

/// Mask a postal code down to its leading three characters.
pub fn mask_postal_code(postal_code: &str) -> String {
    let prefix: String = postal_code.chars().take(3).collect();
    if prefix.chars().count() < 3 {
        return "***".to_string();
    }
    format!("{}**", prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_postal_code() {
        assert_eq!(mask_postal_code("75201"), "752**");
        assert_eq!(mask_postal_code("75"), "***");
    }

    #[test]
    fn test_second_init_does_not_panic() {
        let _ = init_logger();
        assert!(init_logger().is_err());
    }
}
