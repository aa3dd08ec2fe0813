//! Derived values for the portfolio simulation view.

use crate::api::DailyBalance;

/// Label shown as "Best Strategy" in the results summary. The comparison is
/// strictly greater-than, so an exact ROI tie goes to "Buy & Hold".
pub fn best_strategy(roi_pct: f64, buy_hold_roi_pct: f64) -> &'static str {
    if roi_pct > buy_hold_roi_pct {
        "AI-driven"
    } else {
        "Buy & Hold"
    }
}

/// Synthetic buy-and-hold baseline over the simulation window: buy
/// `initial_balance / price[0]` shares on day zero and hold. Returns one
/// balance per input day; empty input (or a zero day-zero price) yields an
/// empty series.
pub fn buy_and_hold_series(initial_balance: f64, daily: &[DailyBalance]) -> Vec<f64> {
    let Some(first) = daily.first() else {
        return Vec::new();
    };
    if first.price == 0.0 {
        return Vec::new();
    }

    let initial_shares = initial_balance / first.price;
    daily.iter().map(|day| initial_shares * day.price).collect()
}
