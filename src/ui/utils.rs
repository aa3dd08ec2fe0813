use eframe::egui::{Color32, Context, RichText, Ui, Visuals};

use crate::ui::config::UI_CONFIG;

/// Creates a colored heading with uppercase text and monospace font
pub fn colored_heading(text: impl Into<String>) -> RichText {
    let uppercase_text = text.into().to_uppercase();
    RichText::new(uppercase_text)
        .color(UI_CONFIG.colors.heading)
        .monospace()
}

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;

    visuals.widgets.noninteractive.fg_stroke.color = Color32::from_gray(200);
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;

    ctx.set_visuals(visuals);
}

/// Creates a section heading with standard spacing
pub fn section_heading(ui: &mut Ui, text: impl Into<String>) {
    ui.add_space(10.0);
    ui.heading(colored_heading(text));
    ui.add_space(5.0);
}

/// Creates a separator with standard spacing
pub fn spaced_separator(ui: &mut Ui) {
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(10.0);
}

/// Small gray helper text
pub fn label_subdued(ui: &mut Ui, text: impl Into<String>) {
    ui.label(RichText::new(text).small().color(Color32::GRAY));
}

/// Renders an error message (red)
pub fn label_error(ui: &mut Ui, text: impl Into<String>) {
    ui.label(RichText::new(text).color(UI_CONFIG.colors.error));
}

/// Renders a warning message (gold)
pub fn label_warning(ui: &mut Ui, text: impl Into<String>) {
    ui.label(RichText::new(text).color(UI_CONFIG.colors.warning));
}

/// Spinner plus explanation for an in-flight section
pub fn loading_indicator(ui: &mut Ui, text: &str) {
    ui.horizontal(|ui| {
        ui.spinner();
        label_subdued(ui, text);
    });
}

/// Rows for a table section, or `None` when the section must render its
/// empty-state placeholder instead of a bare container.
pub fn rows_or_placeholder<T>(rows: &[T]) -> Option<&[T]> {
    if rows.is_empty() { None } else { Some(rows) }
}

/// Dollar amount with two decimals and thousands separators: $10,500.25
pub fn format_money(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;
    let grouped = group_thousands(whole);
    if negative {
        format!("-${}.{:02}", grouped, frac)
    } else {
        format!("${}.{:02}", grouped, frac)
    }
}

/// Plain integer with thousands separators, for share volumes
pub fn format_count(count: u64) -> String {
    group_thousands(count)
}

fn group_thousands(mut value: u64) -> String {
    let mut groups: Vec<String> = Vec::new();
    loop {
        let chunk = value % 1000;
        value /= 1000;
        if value == 0 {
            groups.push(chunk.to_string());
            break;
        }
        groups.push(format!("{:03}", chunk));
    }
    groups.reverse();
    groups.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_formats_with_grouping_and_cents() {
        assert_eq!(format_money(10_500.0), "$10,500.00");
        assert_eq!(format_money(5.0), "$5.00");
        assert_eq!(format_money(1_234_567.891), "$1,234,567.89");
        assert_eq!(format_money(-42.5), "-$42.50");
        assert_eq!(format_money(0.0), "$0.00");
    }

    #[test]
    fn counts_group_thousands() {
        assert_eq!(format_count(51_234_000), "51,234,000");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(0), "0");
    }
}
