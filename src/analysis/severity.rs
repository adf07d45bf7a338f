// Severity thresholds — fixed mapping from a similarity score to a risk label.
//
// Presentation-only: severity never changes the report's content or order.

use serde::{Deserialize, Serialize};

/// Risk classification for a pairwise similarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Classify a similarity score (0.0 to 1.0).
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s > 0.7 => Severity::High,
            s if s > 0.4 => Severity::Medium,
            _ => Severity::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "High Risk",
            Severity::Medium => "Medium Risk",
            Severity::Low => "Low Risk",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        assert_eq!(Severity::from_score(1.0), Severity::High);
        assert_eq!(Severity::from_score(0.71), Severity::High);
        assert_eq!(Severity::from_score(0.7), Severity::Medium);
        assert_eq!(Severity::from_score(0.41), Severity::Medium);
        assert_eq!(Severity::from_score(0.4), Severity::Low);
        assert_eq!(Severity::from_score(0.0), Severity::Low);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Severity::High.as_str(), "High Risk");
        assert_eq!(Severity::Medium.as_str(), "Medium Risk");
        assert_eq!(Severity::Low.as_str(), "Low Risk");
    }
}
