//! Built-in strategy profiles: named weight sets over the four factor scores.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AnalyzeError;

/// Which effort curve a strategy rewards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffortCurve {
    /// Mid-sized tasks are the ROI sweet spot.
    Standard,
    /// Minimal effort wins.
    Fastest,
}

/// Factor weights for one strategy. Each built-in profile sums to 1.0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Weights {
    pub urgency: f64,
    pub importance: f64,
    pub effort: f64,
    pub dependency: f64,
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.urgency + self.importance + self.effort + self.dependency
    }
}

/// A named weight profile. Closed enumeration: unrecognized names fail with
/// [`AnalyzeError::UnknownStrategy`] rather than falling back to a default.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Strategy {
    #[default]
    #[serde(rename = "smart_balance")]
    SmartBalance,
    #[serde(rename = "fastest_wins")]
    FastestWins,
    #[serde(rename = "high_impact")]
    HighImpact,
    #[serde(rename = "deadline_driven")]
    DeadlineDriven,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::SmartBalance,
        Strategy::FastestWins,
        Strategy::HighImpact,
        Strategy::DeadlineDriven,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::SmartBalance => "smart_balance",
            Strategy::FastestWins => "fastest_wins",
            Strategy::HighImpact => "high_impact",
            Strategy::DeadlineDriven => "deadline_driven",
        }
    }

    pub fn weights(&self) -> Weights {
        match self {
            Strategy::SmartBalance => Weights {
                urgency: 0.35,
                importance: 0.30,
                effort: 0.20,
                dependency: 0.15,
            },
            Strategy::FastestWins => Weights {
                urgency: 0.20,
                importance: 0.20,
                effort: 0.50,
                dependency: 0.10,
            },
            Strategy::HighImpact => Weights {
                urgency: 0.15,
                importance: 0.60,
                effort: 0.10,
                dependency: 0.15,
            },
            Strategy::DeadlineDriven => Weights {
                urgency: 0.70,
                importance: 0.15,
                effort: 0.05,
                dependency: 0.10,
            },
        }
    }

    pub fn effort_curve(&self) -> EffortCurve {
        match self {
            Strategy::FastestWins => EffortCurve::Fastest,
            _ => EffortCurve::Standard,
        }
    }
}

impl FromStr for Strategy {
    type Err = AnalyzeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "smart_balance" => Ok(Strategy::SmartBalance),
            "fastest_wins" => Ok(Strategy::FastestWins),
            "high_impact" => Ok(Strategy::HighImpact),
            "deadline_driven" => Ok(Strategy::DeadlineDriven),
            other => Err(AnalyzeError::UnknownStrategy(other.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_one() {
        for strategy in Strategy::ALL {
            let sum = strategy.weights().sum();
            assert!(
                (sum - 1.0).abs() < 1e-12,
                "weights of {strategy} sum to {sum}, expected 1.0"
            );
        }
    }

    #[test]
    fn test_parse_known_names() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.name().parse::<Strategy>().unwrap(), strategy);
        }
    }

    #[test]
    fn test_parse_unknown_name_fails() {
        let err = "bogus".parse::<Strategy>().unwrap_err();
        assert_eq!(err, AnalyzeError::UnknownStrategy("bogus".to_string()));
    }

    #[test]
    fn test_only_fastest_wins_uses_fastest_curve() {
        assert_eq!(Strategy::FastestWins.effort_curve(), EffortCurve::Fastest);
        assert_eq!(Strategy::SmartBalance.effort_curve(), EffortCurve::Standard);
        assert_eq!(Strategy::HighImpact.effort_curve(), EffortCurve::Standard);
        assert_eq!(Strategy::DeadlineDriven.effort_curve(), EffortCurve::Standard);
    }

    #[test]
    fn test_default_is_smart_balance() {
        assert_eq!(Strategy::default(), Strategy::SmartBalance);
    }

    #[test]
    fn test_serde_names_match() {
        let json = serde_json::to_string(&Strategy::DeadlineDriven).unwrap();
        assert_eq!(json, "\"deadline_driven\"");
    }
}
