use crate::error::AppError;
use crate::types::*;
use anyhow::Result;
use serde::de::DeserializeOwned;

const ASSETS_JSON: &str = include_str!("../data/assets.json");
const STAKES_JSON: &str = include_str!("../data/stakes.json");
const PORTFOLIO_JSON: &str = include_str!("../data/portfolio.json");
const POOLS_JSON: &str = include_str!("../data/pools.json");
const PERP_MARKETS_JSON: &str = include_str!("../data/perp_markets.json");

/// Source of the records every dashboard page renders. Today these are
/// bundled mock documents; pages only see `Result<Vec<_>>`.
pub struct MockDataService;

impl MockDataService {
    pub fn assets() -> Result<Vec<Asset>> {
        decode("assets", ASSETS_JSON)
    }

    pub fn stakes() -> Result<Vec<Stake>> {
        decode("stakes", STAKES_JSON)
    }

    pub fn portfolio() -> Result<Vec<PortfolioAsset>> {
        decode("portfolio", PORTFOLIO_JSON)
    }

    pub fn pools() -> Result<Vec<Pool>> {
        decode("pools", POOLS_JSON)
    }

    pub fn perp_markets() -> Result<Vec<PerpMarket>> {
        decode("perp markets", PERP_MARKETS_JSON)
    }
}

fn decode<T: DeserializeOwned>(name: &'static str, raw: &str) -> Result<Vec<T>> {
    match serde_json::from_str::<Vec<T>>(raw) {
        Ok(records) => {
            log::debug!("Loaded {} {} records", records.len(), name);
            Ok(records)
        }
        Err(source) => {
            log::error!("Failed to decode {} mock data: {}", name, source);
            Err(AppError::MockData { name, source }.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_documents_decode() {
        assert!(!MockDataService::assets().unwrap().is_empty());
        assert!(!MockDataService::stakes().unwrap().is_empty());
        assert!(!MockDataService::pools().unwrap().is_empty());
        assert!(!MockDataService::perp_markets().unwrap().is_empty());
    }

    #[test]
    fn portfolio_allocation_is_complete() {
        let summary = PortfolioSummary::from_assets(&MockDataService::portfolio().unwrap());
        assert_eq!(format_percent(summary.total_allocation), "100.0%");
    }

    #[test]
    fn stake_ids_are_unique() {
        let stakes = MockDataService::stakes().unwrap();
        let mut ids: Vec<u32> = stakes.iter().map(|s| s.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), stakes.len());
    }

    #[test]
    fn malformed_document_reports_source() {
        let err = decode::<Stake>("stakes", "[{\"id\": \"x\"}]").unwrap_err();
        let app_error = err.downcast_ref::<AppError>().unwrap();

        assert!(matches!(app_error, AppError::MockData { name: "stakes", .. }));
        assert_eq!(err.to_string(), "failed to decode stakes mock data");
    }
}
