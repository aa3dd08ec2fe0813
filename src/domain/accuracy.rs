//! Weekly accuracy aggregation for the predictions page.

use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate};

use crate::api::Prediction;

/// Accuracy for one calendar week, keyed by the week's starting day.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyAccuracy {
    pub week_start: NaiveDate,
    pub accuracy_pct: f64,
}

/// Start of the week containing `date`, with weeks beginning on Sunday.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_sunday() as u64;
    date.checked_sub_days(Days::new(offset)).unwrap_or(date)
}

/// Group predictions with a known outcome by calendar week and compute
/// `correct / total * 100` per week, ascending by week start. Pending
/// predictions are excluded; if none have completed, the result is empty and
/// the accuracy chart must not be built at all.
pub fn weekly_accuracy(predictions: &[Prediction]) -> Vec<WeeklyAccuracy> {
    let mut weeks: BTreeMap<NaiveDate, (u32, u32)> = BTreeMap::new();

    for prediction in predictions {
        let Some(actual) = prediction.actual_movement else {
            continue;
        };

        let entry = weeks.entry(week_start(prediction.date)).or_insert((0, 0));
        entry.1 += 1;
        if prediction.predicted_movement == actual {
            entry.0 += 1;
        }
    }

    weeks
        .into_iter()
        .map(|(week_start, (correct, total))| WeeklyAccuracy {
            week_start,
            accuracy_pct: f64::from(correct) / f64::from(total) * 100.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prediction(date: (i32, u32, u32), predicted: bool, actual: Option<bool>) -> Prediction {
        Prediction {
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            symbol: "AAPL".to_string(),
            predicted_movement: predicted,
            confidence: 0.6,
            actual_movement: actual,
        }
    }

    #[test]
    fn weeks_start_on_sunday() {
        // 2024-01-01 is a Monday; its week starts Sunday 2023-12-31
        let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(
            week_start(monday),
            NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()
        );
        // A Sunday maps to itself
        let sunday = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        assert_eq!(week_start(sunday), sunday);
    }

    #[test]
    fn same_week_predictions_aggregate() {
        // Monday correct + Wednesday incorrect in the same week -> 50%
        let preds = vec![
            prediction((2024, 1, 1), true, Some(true)),
            prediction((2024, 1, 3), true, Some(false)),
        ];
        let weekly = weekly_accuracy(&preds);
        assert_eq!(weekly.len(), 1);
        assert_eq!(
            weekly[0].week_start,
            NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()
        );
        assert_eq!(weekly[0].accuracy_pct, 50.0);
    }

    #[test]
    fn pending_predictions_are_excluded() {
        let preds = vec![
            prediction((2024, 1, 1), true, Some(true)),
            prediction((2024, 1, 2), true, None),
        ];
        let weekly = weekly_accuracy(&preds);
        assert_eq!(weekly.len(), 1);
        assert_eq!(weekly[0].accuracy_pct, 100.0);
    }

    #[test]
    fn all_pending_yields_no_weeks() {
        let preds = vec![
            prediction((2024, 1, 1), true, None),
            prediction((2024, 1, 2), false, None),
        ];
        assert!(weekly_accuracy(&preds).is_empty());
    }

    #[test]
    fn weeks_come_out_in_chronological_order() {
        // Arrival order is newest-first, as the backend returns it
        let preds = vec![
            prediction((2024, 1, 10), true, Some(true)),
            prediction((2024, 1, 1), false, Some(true)),
        ];
        let weekly = weekly_accuracy(&preds);
        assert_eq!(weekly.len(), 2);
        assert!(weekly[0].week_start < weekly[1].week_start);
        assert_eq!(weekly[0].accuracy_pct, 0.0);
        assert_eq!(weekly[1].accuracy_pct, 100.0);
    }
}
