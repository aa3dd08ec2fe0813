//! Three-tier classification of model confidence values.

/// Display tier for a confidence value in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
}

impl ConfidenceTier {
    /// High above 0.70, medium above 0.55, low otherwise. Boundaries are
    /// exclusive: exactly 0.70 is medium, exactly 0.55 is low.
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence > 0.70 {
            ConfidenceTier::High
        } else if confidence > 0.55 {
            ConfidenceTier::Medium
        } else {
            ConfidenceTier::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConfidenceTier::High => "high",
            ConfidenceTier::Medium => "medium",
            ConfidenceTier::Low => "low",
        }
    }
}

/// Confidence rendered as a whole percentage, matching the card display.
pub fn confidence_percent(confidence: f64) -> u32 {
    (confidence * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries_are_exclusive() {
        assert_eq!(ConfidenceTier::from_confidence(0.71), ConfidenceTier::High);
        assert_eq!(
            ConfidenceTier::from_confidence(0.70),
            ConfidenceTier::Medium
        );
        assert_eq!(
            ConfidenceTier::from_confidence(0.56),
            ConfidenceTier::Medium
        );
        assert_eq!(ConfidenceTier::from_confidence(0.55), ConfidenceTier::Low);
        assert_eq!(ConfidenceTier::from_confidence(0.0), ConfidenceTier::Low);
        assert_eq!(ConfidenceTier::from_confidence(1.0), ConfidenceTier::High);
    }

    #[test]
    fn percent_rounds_to_nearest_whole() {
        assert_eq!(confidence_percent(0.646), 65);
        assert_eq!(confidence_percent(0.644), 64);
        assert_eq!(confidence_percent(1.0), 100);
    }
}
