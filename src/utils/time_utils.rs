//! Date <-> plot-axis conversions.
//!
//! Charts plot calendar dates on the x-axis as whole day numbers
//! (days from the common era), so consecutive trading days sit one unit
//! apart and axis labels can be recovered from the coordinate.

use chrono::NaiveDate;

/// Plot x-coordinate for a calendar date.
pub fn day_number(date: NaiveDate) -> f64 {
    use chrono::Datelike;
    f64::from(date.num_days_from_ce())
}

/// Inverse of `day_number`, for axis/tooltip labels.
pub fn from_day_number(x: f64) -> Option<NaiveDate> {
    NaiveDate::from_num_days_from_ce_opt(x.round() as i32)
}

/// Axis label for a plot x-coordinate, e.g. "Mar 08".
pub fn format_day_number(x: f64) -> String {
    from_day_number(x)
        .map(|d| d.format("%b %d").to_string())
        .unwrap_or_default()
}

/// Full date for tooltips, e.g. "2024-03-08".
pub fn format_day_number_long(x: f64) -> String {
    from_day_number(x)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_number_round_trips() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 8).unwrap();
        assert_eq!(from_day_number(day_number(date)), Some(date));
    }

    #[test]
    fn consecutive_days_are_one_unit_apart() {
        let a = day_number(NaiveDate::from_ymd_opt(2024, 2, 28).unwrap());
        let b = day_number(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(b - a, 1.0);
    }

    #[test]
    fn labels_render_from_coordinates() {
        let x = day_number(NaiveDate::from_ymd_opt(2024, 3, 8).unwrap());
        assert_eq!(format_day_number(x), "Mar 08");
        assert_eq!(format_day_number_long(x), "2024-03-08");
    }
}
