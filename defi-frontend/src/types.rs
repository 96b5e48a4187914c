use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub symbol: String,
    pub name: String,
    pub icon: String,
    pub price: f64,
    pub supply_apy: f64,
    pub borrow_apy: f64,
    pub collateral_factor: f64,
    pub liquidation_penalty: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stake {
    pub id: u32,
    pub pool: String,
    pub validator: String,
    pub amount: f64,
    pub rewards: f64,
    pub apy: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Token,
    Lp,
    Staked,
    Lending,
}

impl AssetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetKind::Token => "Token",
            AssetKind::Lp => "LP",
            AssetKind::Staked => "Staked",
            AssetKind::Lending => "Lending",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioAsset {
    pub id: u32,
    pub symbol: String,
    pub name: String,
    pub icon: String,
    #[serde(rename = "type")]
    pub kind: AssetKind,
    pub value: f64,
    pub allocation: f64,
    pub amount: f64,
    pub price: f64,
    pub pnl: f64,
    pub pnl_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pool {
    pub id: u32,
    pub pair: String,
    pub tvl: f64,
    pub volume_24h: f64,
    pub apy: f64,
    pub fee_tier: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerpMarket {
    pub symbol: String,
    pub mark_price: f64,
    pub change_24h: f64,
    pub funding_rate: f64,
    pub open_interest: f64,
    pub max_leverage: u32,
}

/// Aggregates shown above the stake list.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StakeSummary {
    pub total_staked: f64,
    pub total_rewards: f64,
    pub average_apy: f64,
    pub count: usize,
}

impl StakeSummary {
    pub fn from_stakes(stakes: &[Stake]) -> Self {
        let (total_staked, total_rewards, apy_sum) = stakes
            .iter()
            .fold((0.0, 0.0, 0.0), |(staked, rewards, apy), stake| {
                (staked + stake.amount, rewards + stake.rewards, apy + stake.apy)
            });
        let count = stakes.len();
        let average_apy = if count == 0 {
            0.0
        } else {
            apy_sum / count as f64
        };

        Self {
            total_staked,
            total_rewards,
            average_apy,
            count,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PortfolioSummary {
    pub total_value: f64,
    pub total_allocation: f64,
    pub total_pnl: f64,
    pub gainers: usize,
    pub count: usize,
}

impl PortfolioSummary {
    pub fn from_assets(assets: &[PortfolioAsset]) -> Self {
        assets.iter().fold(Self::default(), |mut summary, asset| {
            summary.total_value += asset.value;
            summary.total_allocation += asset.allocation;
            summary.total_pnl += asset.pnl;
            if asset.pnl > 0.0 {
                summary.gainers += 1;
            }
            summary.count += 1;
            summary
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PoolSummary {
    pub total_tvl: f64,
    pub total_volume_24h: f64,
    pub average_apy: f64,
    pub count: usize,
}

impl PoolSummary {
    pub fn from_pools(pools: &[Pool]) -> Self {
        let (total_tvl, total_volume_24h, apy_sum) = pools
            .iter()
            .fold((0.0, 0.0, 0.0), |(tvl, volume, apy), pool| {
                (tvl + pool.tvl, volume + pool.volume_24h, apy + pool.apy)
            });
        let count = pools.len();
        let average_apy = if count == 0 {
            0.0
        } else {
            apy_sum / count as f64
        };

        Self {
            total_tvl,
            total_volume_24h,
            average_apy,
            count,
        }
    }
}

pub fn format_usd(value: f64) -> String {
    format!("${:.2}", value)
}

/// `+$12.00`, `-$3.50`, `$0.00`.
pub fn format_signed_usd(value: f64) -> String {
    if value > 0.0 {
        format!("+${:.2}", value)
    } else if value < 0.0 {
        format!("-${:.2}", -value)
    } else {
        format_usd(0.0)
    }
}

pub fn format_usd_precise(value: f64) -> String {
    format!("${:.4}", value)
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

pub fn format_apy(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Plain decimal rendering used to write a number back into an amount field.
pub fn format_amount(value: f64) -> String {
    value.to_string()
}

pub fn format_compact_usd(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000_000.0 {
        format!("${:.2}B", value / 1_000_000_000.0)
    } else if abs >= 1_000_000.0 {
        format!("${:.2}M", value / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("${:.2}K", value / 1_000.0)
    } else {
        format_usd(value)
    }
}

pub fn format_local_time(timestamp: DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn portfolio_asset(id: u32, allocation: f64, pnl: f64) -> PortfolioAsset {
        PortfolioAsset {
            id,
            symbol: format!("T{id}"),
            name: format!("Token {id}"),
            icon: String::new(),
            kind: AssetKind::Token,
            value: allocation * 10.0,
            allocation,
            amount: 1.0,
            price: allocation * 10.0,
            pnl,
            pnl_percent: 0.0,
        }
    }

    fn stake(id: u32, amount: f64, rewards: f64, apy: f64) -> Stake {
        Stake {
            id,
            pool: "SOL".to_string(),
            validator: "validator".to_string(),
            amount,
            rewards,
            apy,
        }
    }

    #[test]
    fn total_allocation_renders_one_decimal() {
        let assets = vec![
            portfolio_asset(1, 30.0, 10.0),
            portfolio_asset(2, 30.0, -5.0),
            portfolio_asset(3, 40.0, 0.0),
        ];
        let summary = PortfolioSummary::from_assets(&assets);

        assert_eq!(format_percent(summary.total_allocation), "100.0%");
        assert_eq!(summary.total_value, 1000.0);
        assert_eq!(summary.total_pnl, 5.0);
        assert_eq!(summary.gainers, 1);
        assert_eq!(summary.count, 3);
    }

    #[test]
    fn stake_summary_averages_apy() {
        let stakes = vec![stake(1, 100.0, 1.5, 6.0), stake(2, 300.0, 2.5, 8.0)];
        let summary = StakeSummary::from_stakes(&stakes);

        assert_eq!(summary.total_staked, 400.0);
        assert_eq!(summary.total_rewards, 4.0);
        assert_eq!(summary.average_apy, 7.0);
        assert_eq!(summary.count, 2);
    }

    #[test]
    fn empty_lists_summarize_to_zero() {
        assert_eq!(StakeSummary::from_stakes(&[]), StakeSummary::default());
        assert_eq!(PortfolioSummary::from_assets(&[]), PortfolioSummary::default());
        assert_eq!(PoolSummary::from_pools(&[]).average_apy, 0.0);
    }

    #[test]
    fn amounts_format_without_trailing_zeros() {
        assert_eq!(format_amount(2500.0), "2500");
        assert_eq!(format_amount(1250.5), "1250.5");
    }

    #[test]
    fn signed_usd_puts_sign_before_symbol() {
        assert_eq!(format_signed_usd(12.0), "+$12.00");
        assert_eq!(format_signed_usd(-418.2), "-$418.20");
        assert_eq!(format_signed_usd(0.0), "$0.00");
    }

    #[test]
    fn compact_usd_picks_suffix() {
        assert_eq!(format_compact_usd(1_250_000.0), "$1.25M");
        assert_eq!(format_compact_usd(3_400.0), "$3.40K");
        assert_eq!(format_compact_usd(12.5), "$12.50");
        assert_eq!(format_compact_usd(2_000_000_000.0), "$2.00B");
    }

    #[test]
    fn portfolio_asset_reads_type_field() {
        let json = r#"{
            "id": 7, "symbol": "mSOL", "name": "Marinade SOL", "icon": "/icons/msol.svg",
            "type": "staked", "value": 1200.0, "allocation": 12.0, "amount": 8.0,
            "price": 150.0, "pnl": 40.0, "pnlPercent": 3.4
        }"#;
        let asset: PortfolioAsset = serde_json::from_str(json).unwrap();

        assert_eq!(asset.kind, AssetKind::Staked);
        assert_eq!(asset.pnl_percent, 3.4);
    }
}
