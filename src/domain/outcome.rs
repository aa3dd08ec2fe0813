//! Correctness status of a stored prediction.

/// Whether a prediction turned out right. `Pending` while the actual
/// movement for that day is not yet known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionStatus {
    Correct,
    Incorrect,
    Pending,
}

impl PredictionStatus {
    pub fn of(predicted: bool, actual: Option<bool>) -> Self {
        match actual {
            None => PredictionStatus::Pending,
            Some(actual) if actual == predicted => PredictionStatus::Correct,
            Some(_) => PredictionStatus::Incorrect,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PredictionStatus::Correct => "Correct",
            PredictionStatus::Incorrect => "Incorrect",
            PredictionStatus::Pending => "Pending",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_matches_prediction_against_outcome() {
        assert_eq!(
            PredictionStatus::of(true, Some(true)),
            PredictionStatus::Correct
        );
        assert_eq!(
            PredictionStatus::of(false, Some(false)),
            PredictionStatus::Correct
        );
        assert_eq!(
            PredictionStatus::of(true, Some(false)),
            PredictionStatus::Incorrect
        );
        assert_eq!(PredictionStatus::of(true, None), PredictionStatus::Pending);
        assert_eq!(PredictionStatus::of(false, None), PredictionStatus::Pending);
    }
}
