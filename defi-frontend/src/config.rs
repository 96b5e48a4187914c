use serde::{Deserialize, Serialize};
use yew::prelude::*;

use crate::risk::RiskThresholds;

/// Constants the dashboard pages are rendered against. Provided once at the
/// root through a context; every field has a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub app_name: String,
    pub claim_delay_ms: u32,
    pub borrow_limit: f64,
    pub wallet_balance: f64,
    pub default_slippage: String,
    pub placeholder_health_factor: f64,
    pub placeholder_liquidation_price: f64,
    pub max_loops: u32,
    pub leverage_options: Vec<u32>,
    pub risk: RiskThresholds,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "Meridian Finance".to_string(),
            claim_delay_ms: 2000,
            borrow_limit: 5000.0,
            wallet_balance: 10_000.0,
            default_slippage: "0.5".to_string(),
            placeholder_health_factor: 1.85,
            placeholder_liquidation_price: 98.42,
            max_loops: 5,
            leverage_options: vec![1, 2, 5, 10, 20, 50],
            risk: RiskThresholds::default(),
        }
    }
}

#[hook]
pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_document_keeps_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{ "claim_delay_ms": 500, "borrow_limit": 1000.0 }"#).unwrap();

        assert_eq!(config.claim_delay_ms, 500);
        assert_eq!(config.borrow_limit, 1000.0);
        assert_eq!(config.default_slippage, "0.5");
        assert_eq!(config.risk, RiskThresholds::default());
    }
}
