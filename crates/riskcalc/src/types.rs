use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Coefficient of variation below which a ledger is rated low risk
pub const MEDIUM_CV_THRESHOLD: f64 = 0.25;

/// Coefficient of variation at or above which a ledger is rated high risk
pub const HIGH_CV_THRESHOLD: f64 = 0.75;

/// A named risk with a potential loss and the probability of incurring it.
///
/// The stored probability is raw and may fall outside [0, 1]; every
/// computation goes through [`RiskEvent::validated_probability`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskEvent {
    id: Uuid,
    pub description: String,
    pub possible_loss: f64,
    pub probability: f64,
}

impl RiskEvent {
    pub fn new(description: impl Into<String>, possible_loss: f64, probability: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            possible_loss,
            probability,
        }
    }

    /// Build an event from a probability entered as a percentage in [0, 100].
    pub fn from_percent(description: impl Into<String>, possible_loss: f64, percent: f64) -> Self {
        Self::new(description, possible_loss, percent / 100.0)
    }

    /// Replacement for this event that keeps its id, as an edit form produces.
    pub fn edited(&self, description: impl Into<String>, possible_loss: f64, probability: f64) -> Self {
        Self {
            id: self.id,
            description: description.into(),
            possible_loss,
            probability,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Stored probability clamped to [0, 1]. NaN counts as zero.
    pub fn validated_probability(&self) -> f64 {
        if self.probability.is_nan() {
            0.0
        } else {
            self.probability.clamp(0.0, 1.0)
        }
    }
}

/// Coarse risk rating derived from the coefficient of variation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn classify(coefficient_of_variation: f64) -> Self {
        if coefficient_of_variation < MEDIUM_CV_THRESHOLD {
            RiskLevel::Low
        } else if coefficient_of_variation < HIGH_CV_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "low"),
            RiskLevel::Medium => write!(f, "medium"),
            RiskLevel::High => write!(f, "high"),
        }
    }
}

/// Read-only report over the ledger at one point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedAnalysis {
    pub event_count: usize,
    pub total_probability: f64,
    /// Expected loss
    pub average_loss: f64,
    pub variance: f64,
    pub standard_deviation: f64,
    pub rms_loss: f64,
    /// Expected loss plus RMS loss
    pub integral_risk: f64,
    pub coefficient_of_variation: f64,
    pub risk_level: RiskLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validated_probability_clamps() {
        assert_eq!(RiskEvent::new("a", 1.0, 1.7).validated_probability(), 1.0);
        assert_eq!(RiskEvent::new("a", 1.0, -0.3).validated_probability(), 0.0);
        assert_eq!(RiskEvent::new("a", 1.0, 0.4).validated_probability(), 0.4);
        assert_eq!(RiskEvent::new("a", 1.0, f64::NAN).validated_probability(), 0.0);
    }

    #[test]
    fn test_raw_probability_is_kept() {
        let event = RiskEvent::new("a", 1.0, 2.5);
        assert_eq!(event.probability, 2.5);
    }

    #[test]
    fn test_from_percent() {
        let event = RiskEvent::from_percent("flood", 1000.0, 25.0);
        assert!((event.probability - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_edited_keeps_id() {
        let original = RiskEvent::new("a", 10.0, 0.1);
        let edited = original.edited("b", 20.0, 0.2);
        assert_eq!(edited.id(), original.id());
        assert_eq!(edited.description, "b");
        assert_ne!(RiskEvent::new("a", 10.0, 0.1).id(), original.id());
    }

    // ======================================================================
    // Risk level boundaries
    // ======================================================================

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(RiskLevel::classify(0.0), RiskLevel::Low);
        assert_eq!(RiskLevel::classify(0.24999), RiskLevel::Low);
        assert_eq!(RiskLevel::classify(0.25), RiskLevel::Medium);
        assert_eq!(RiskLevel::classify(0.74999), RiskLevel::Medium);
        assert_eq!(RiskLevel::classify(0.75), RiskLevel::High);
        assert_eq!(RiskLevel::classify(3.0), RiskLevel::High);
    }

    #[test]
    fn test_risk_level_display() {
        assert_eq!(RiskLevel::Low.to_string(), "low");
        assert_eq!(RiskLevel::Medium.to_string(), "medium");
        assert_eq!(RiskLevel::High.to_string(), "high");
    }
}
