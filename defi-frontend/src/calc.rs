//! Display-only arithmetic behind the trading and lending forms.
//!
//! Nothing here models real protocol accounting: interest is simple
//! non-compounding APY and quotes ignore price impact and fees.

use crate::error::AppError;

/// Parses a user-entered amount. An empty field is zero.
pub fn parse_amount(input: &str) -> Result<f64, AppError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| AppError::InvalidAmount(trimmed.to_string()))?;
    if !value.is_finite() {
        return Err(AppError::InvalidAmount(trimmed.to_string()));
    }
    if value < 0.0 {
        return Err(AppError::NegativeAmount(value));
    }
    Ok(value)
}

pub fn parse_amount_or_zero(input: &str) -> f64 {
    parse_amount(input).unwrap_or(0.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterestEstimate {
    pub annual: f64,
    pub daily: f64,
}

pub fn estimate_interest(amount: f64, apy: f64) -> InterestEstimate {
    let annual = amount * apy / 100.0;
    InterestEstimate {
        annual,
        daily: annual / 365.0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAmount {
    Quarter,
    Half,
    ThreeQuarters,
    Max,
}

impl QuickAmount {
    pub const ALL: [QuickAmount; 4] = [
        QuickAmount::Quarter,
        QuickAmount::Half,
        QuickAmount::ThreeQuarters,
        QuickAmount::Max,
    ];

    pub fn fraction(&self) -> f64 {
        match self {
            QuickAmount::Quarter => 0.25,
            QuickAmount::Half => 0.5,
            QuickAmount::ThreeQuarters => 0.75,
            QuickAmount::Max => 1.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QuickAmount::Quarter => "25%",
            QuickAmount::Half => "50%",
            QuickAmount::ThreeQuarters => "75%",
            QuickAmount::Max => "MAX",
        }
    }
}

pub fn quick_amount(limit: f64, choice: QuickAmount) -> f64 {
    limit * choice.fraction()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwapQuote {
    pub output: f64,
    pub minimum_received: f64,
    pub rate: f64,
}

/// Returns `None` when the output token has no usable price.
pub fn swap_quote(amount: f64, price_in: f64, price_out: f64, slippage: f64) -> Option<SwapQuote> {
    if price_out <= 0.0 {
        return None;
    }

    let rate = price_in / price_out;
    let output = amount * rate;
    Some(SwapQuote {
        output,
        minimum_received: output * (1.0 - slippage / 100.0),
        rate,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PositionSide {
    #[default]
    Long,
    Short,
}

impl PositionSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            PositionSide::Long => "Long",
            PositionSide::Short => "Short",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            PositionSide::Long => PositionSide::Short,
            PositionSide::Short => PositionSide::Long,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionPreview {
    pub side: PositionSide,
    pub margin: f64,
    pub notional: f64,
    pub leverage: u32,
}

pub fn position_preview(side: PositionSide, margin: f64, leverage: u32) -> PositionPreview {
    PositionPreview {
        side,
        margin,
        notional: margin * f64::from(leverage),
        leverage,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopProjection {
    pub leverage: f64,
    pub total_supplied: f64,
    pub total_borrowed: f64,
    pub net_apy: f64,
}

/// Projects a supply/borrow loop where each round re-supplies the amount
/// borrowed against the previous round at `collateral_factor`.
pub fn loop_projection(
    deposit: f64,
    collateral_factor: f64,
    loops: u32,
    supply_apy: f64,
    borrow_apy: f64,
) -> LoopProjection {
    let leverage: f64 = (0..=loops)
        .map(|round| collateral_factor.powi(round as i32))
        .sum();

    LoopProjection {
        leverage,
        total_supplied: deposit * leverage,
        total_borrowed: deposit * (leverage - 1.0),
        net_apy: supply_apy * leverage - borrow_apy * (leverage - 1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{format_amount, format_usd, format_usd_precise};

    #[test]
    fn lend_estimate_matches_display() {
        let estimate = estimate_interest(parse_amount_or_zero("1000"), 5.0);

        assert_eq!(format_usd(estimate.annual), "$50.00");
        assert_eq!(format_usd_precise(estimate.daily), "$0.1370");
    }

    #[test]
    fn half_of_borrow_limit() {
        assert_eq!(format_amount(quick_amount(5000.0, QuickAmount::Half)), "2500");
        assert_eq!(format_amount(quick_amount(5000.0, QuickAmount::Max)), "5000");
        assert_eq!(format_amount(quick_amount(5000.0, QuickAmount::Quarter)), "1250");
    }

    #[test]
    fn empty_and_malformed_amounts_are_zero() {
        assert_eq!(parse_amount("").unwrap(), 0.0);
        assert_eq!(parse_amount("  ").unwrap(), 0.0);
        assert_eq!(parse_amount_or_zero("abc"), 0.0);
        assert!(matches!(parse_amount("abc"), Err(AppError::InvalidAmount(_))));
        assert!(matches!(parse_amount("inf"), Err(AppError::InvalidAmount(_))));
        assert!(matches!(parse_amount("-3"), Err(AppError::NegativeAmount(_))));
        assert_eq!(parse_amount(" 12.5 ").unwrap(), 12.5);
    }

    #[test]
    fn swap_quote_applies_slippage() {
        let quote = swap_quote(2.0, 150.0, 1.0, 0.5).unwrap();

        assert_eq!(quote.rate, 150.0);
        assert_eq!(quote.output, 300.0);
        assert!((quote.minimum_received - 298.5).abs() < 1e-9);
        assert!(swap_quote(1.0, 150.0, 0.0, 0.5).is_none());
    }

    #[test]
    fn position_notional_scales_with_leverage() {
        let preview = position_preview(PositionSide::Short, 100.0, 5);

        assert_eq!(preview.notional, 500.0);
        assert_eq!(preview.side.as_str(), "Short");
        assert_eq!(PositionSide::Long.toggled(), PositionSide::Short);
    }

    #[test]
    fn loop_projection_sums_geometric_rounds() {
        let projection = loop_projection(1000.0, 0.5, 2, 10.0, 4.0);

        assert!((projection.leverage - 1.75).abs() < 1e-9);
        assert!((projection.total_supplied - 1750.0).abs() < 1e-9);
        assert!((projection.total_borrowed - 750.0).abs() < 1e-9);
        assert!((projection.net_apy - 14.5).abs() < 1e-9);
    }

    #[test]
    fn zero_loops_is_plain_supply() {
        let projection = loop_projection(1000.0, 0.8, 0, 6.0, 9.0);

        assert_eq!(projection.leverage, 1.0);
        assert_eq!(projection.total_borrowed, 0.0);
        assert_eq!(projection.net_apy, 6.0);
    }
}
