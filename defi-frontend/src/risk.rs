use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskThresholds {
    pub safe: f64,
    pub caution: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            safe: 2.0,
            caution: 1.5,
        }
    }
}

/// Severity of a position's health factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Safe,
    Caution,
    Danger,
}

impl RiskLevel {
    pub fn from_health_factor(health_factor: f64, thresholds: &RiskThresholds) -> Self {
        if health_factor >= thresholds.safe {
            RiskLevel::Safe
        } else if health_factor >= thresholds.caution {
            RiskLevel::Caution
        } else {
            RiskLevel::Danger
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "Safe",
            RiskLevel::Caution => "Caution",
            RiskLevel::Danger => "At Risk",
        }
    }

    pub fn text_class(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "text-green-600",
            RiskLevel::Caution => "text-yellow-600",
            RiskLevel::Danger => "text-red-600",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "bg-green-100 text-green-800",
            RiskLevel::Caution => "bg-yellow-100 text-yellow-800",
            RiskLevel::Danger => "bg-red-100 text-red-800",
        }
    }
}

/// Direction of a signed P&L or price change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Gain,
    Loss,
    Flat,
}

impl Trend {
    pub fn from_value(value: f64) -> Self {
        if value > 0.0 {
            Trend::Gain
        } else if value < 0.0 {
            Trend::Loss
        } else {
            Trend::Flat
        }
    }

    pub fn text_class(&self) -> &'static str {
        match self {
            Trend::Gain => "text-green-600",
            Trend::Loss => "text-red-600",
            Trend::Flat => "text-gray-600",
        }
    }

    pub fn sign(&self) -> &'static str {
        match self {
            Trend::Gain => "+",
            Trend::Loss | Trend::Flat => "",
        }
    }

    /// `+12.30%`, `-4.00%`, `0.00%`.
    pub fn format_percent(value: f64) -> String {
        format!("{}{:.2}%", Trend::from_value(value).sign(), value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_factor_boundaries() {
        let thresholds = RiskThresholds::default();

        assert_eq!(RiskLevel::from_health_factor(2.0, &thresholds), RiskLevel::Safe);
        assert_eq!(RiskLevel::from_health_factor(3.4, &thresholds), RiskLevel::Safe);
        assert_eq!(RiskLevel::from_health_factor(1.99, &thresholds), RiskLevel::Caution);
        assert_eq!(RiskLevel::from_health_factor(1.5, &thresholds), RiskLevel::Caution);
        assert_eq!(RiskLevel::from_health_factor(1.2, &thresholds), RiskLevel::Danger);
    }

    #[test]
    fn each_level_has_its_own_style() {
        let classes = [
            RiskLevel::Safe.text_class(),
            RiskLevel::Caution.text_class(),
            RiskLevel::Danger.text_class(),
        ];

        assert_ne!(classes[0], classes[1]);
        assert_ne!(classes[1], classes[2]);
        assert_ne!(classes[0], classes[2]);
    }

    #[test]
    fn trend_follows_sign() {
        assert_eq!(Trend::from_value(12.0), Trend::Gain);
        assert_eq!(Trend::from_value(-0.01), Trend::Loss);
        assert_eq!(Trend::from_value(0.0), Trend::Flat);
        assert_eq!(Trend::format_percent(12.3), "+12.30%");
        assert_eq!(Trend::format_percent(-4.0), "-4.00%");
        assert_eq!(Trend::format_percent(0.0), "0.00%");
    }
}
