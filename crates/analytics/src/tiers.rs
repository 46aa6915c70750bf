//! Threshold classifications. Every boundary is strict: a value exactly on a threshold
//! falls into the lower tier.

use serde::Serialize;

/// Risk bucket derived from annualised volatility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskClass {
    Low,
    Medium,
    High,
}

impl RiskClass {
    pub fn from_volatility(volatility: f64) -> Self {
        if volatility > 30.0 {
            RiskClass::High
        } else if volatility > 20.0 {
            RiskClass::Medium
        } else {
            RiskClass::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskClass::Low => "Low",
            RiskClass::Medium => "Medium",
            RiskClass::High => "High",
        }
    }
}

/// Strength of a positive yearly return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GainTier {
    Modest,
    Moderate,
    Strong,
}

impl GainTier {
    pub fn from_return(yearly_return: f64) -> Self {
        if yearly_return > 50.0 {
            GainTier::Strong
        } else if yearly_return > 25.0 {
            GainTier::Moderate
        } else {
            GainTier::Modest
        }
    }
}

/// Severity of a negative yearly return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DeclineTier {
    Mild,
    Elevated,
    Severe,
}

impl DeclineTier {
    pub fn from_return(yearly_return: f64) -> Self {
        if yearly_return < -30.0 {
            DeclineTier::Severe
        } else if yearly_return < -15.0 {
            DeclineTier::Elevated
        } else {
            DeclineTier::Mild
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_class_thresholds_are_strict() {
        assert_eq!(RiskClass::from_volatility(35.0), RiskClass::High);
        assert_eq!(RiskClass::from_volatility(30.0), RiskClass::Medium);
        assert_eq!(RiskClass::from_volatility(20.5), RiskClass::Medium);
        assert_eq!(RiskClass::from_volatility(20.0), RiskClass::Low);
        assert_eq!(RiskClass::from_volatility(0.0), RiskClass::Low);
    }

    #[test]
    fn gain_tier_thresholds_are_strict() {
        assert_eq!(GainTier::from_return(80.0), GainTier::Strong);
        assert_eq!(GainTier::from_return(50.0), GainTier::Moderate);
        assert_eq!(GainTier::from_return(25.0), GainTier::Modest);
        assert_eq!(GainTier::from_return(-5.0), GainTier::Modest);
    }

    #[test]
    fn decline_tier_thresholds_are_strict() {
        assert_eq!(DeclineTier::from_return(-45.0), DeclineTier::Severe);
        assert_eq!(DeclineTier::from_return(-30.0), DeclineTier::Elevated);
        assert_eq!(DeclineTier::from_return(-15.0), DeclineTier::Mild);
        assert_eq!(DeclineTier::from_return(3.0), DeclineTier::Mild);
    }
}
