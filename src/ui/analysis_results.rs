//! Analysis results view
//!
//! Per-day summaries for the chosen range plus the full chart for its first
//! day. Problems with the range are shown here; nothing is sent back except
//! the back request.

use eframe::egui;
use egui::{RichText, ScrollArea};
use dewscope::{ChartProps, Chronology, ResultsMessage, ResultsProps, ThemeColors, DATE_FORMAT};

use crate::domain::RiskSeries;
use crate::presentation::color_mapping::risk_level_color;
use crate::ui::vulnerability_chart::render_vulnerability_chart;

/// Longest range summarised, in days.
pub const MAX_RESULT_DAYS: usize = 31;

/// One row of the per-day summary table.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySummary {
    pub date: String,
    pub series: RiskSeries,
}

/// Builds the per-day summaries for `props`.
///
/// Empty unless the range is ordered; capped at [`MAX_RESULT_DAYS`].
pub fn day_summaries(props: &ResultsProps) -> Vec<DaySummary> {
    props
        .date_range
        .days(MAX_RESULT_DAYS)
        .into_iter()
        .map(|day| {
            let date = day.format(DATE_FORMAT).to_string();
            DaySummary {
                series: RiskSeries::generate(&props.location, &date),
                date,
            }
        })
        .collect()
}

/// Renders the results view
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `props` - Location and date range under analysis
/// * `colors` - Color palette for the current theme
///
/// # Returns
/// * `Option<ResultsMessage>` - Back request, if clicked
pub fn render_analysis_results(
    ui: &mut egui::Ui,
    props: &ResultsProps,
    colors: &ThemeColors,
) -> Option<ResultsMessage> {
    let mut message = None;

    ui.horizontal(|ui| {
        if ui.button("⬅ Back").clicked() {
            message = Some(ResultsMessage::Back);
        }
        ui.heading(format!("Analysis for {}", props.location));
    });
    ui.label(
        RichText::new(format!("{} → {}", props.date_range.start, props.date_range.end))
            .color(colors.text_dim),
    );
    ui.add_space(8.0);

    match props.date_range.chronology() {
        Chronology::Reversed => {
            ui.colored_label(colors.risk_high, "The start date is after the end date. Go back and adjust the range.");
            return message;
        }
        Chronology::Unparsable => {
            ui.colored_label(colors.risk_high, "The date range could not be read. Dates use the YYYY-MM-DD format.");
            return message;
        }
        Chronology::Ordered { days } if days as usize > MAX_RESULT_DAYS => {
            ui.colored_label(
                colors.risk_moderate,
                format!("Showing the first {} of {} days.", MAX_RESULT_DAYS, days),
            );
        }
        Chronology::Ordered { .. } => {}
    }

    render_vulnerability_chart(
        ui,
        &ChartProps {
            location: props.location.clone(),
            date: props.date_range.start.clone(),
            preview: false,
        },
        colors,
    );
    ui.add_space(8.0);

    ui.label(RichText::new("Daily summary").strong());
    ScrollArea::vertical()
        .id_salt("results_scroll_area")
        .auto_shrink([false, true])
        .show(ui, |ui| {
            egui::Grid::new("results_grid")
                .num_columns(4)
                .striped(true)
                .spacing([24.0, 4.0])
                .show(ui, |ui| {
                    ui.label(RichText::new("Date").strong());
                    ui.label(RichText::new("Peak").strong());
                    ui.label(RichText::new("Mean").strong());
                    ui.label(RichText::new("Risk").strong());
                    ui.end_row();

                    for summary in day_summaries(props) {
                        let (peak_hour, peak) = summary.series.peak();
                        let level = summary.series.level();
                        ui.label(summary.date.as_str());
                        ui.label(format!("{:.0}% at {:02}:00", peak * 100.0, peak_hour));
                        ui.label(format!("{:.0}%", summary.series.mean() * 100.0));
                        ui.colored_label(risk_level_color(level, colors), level.label());
                        ui.end_row();
                    }
                });
        });

    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use dewscope::DateRange;

    fn props(start: &str, end: &str) -> ResultsProps {
        ResultsProps {
            location: "Boston".to_string(),
            date_range: DateRange::new(start, end),
        }
    }

    #[test]
    fn test_summaries_cover_range() {
        let summaries = day_summaries(&props("2024-06-01", "2024-06-03"));
        let dates: Vec<_> = summaries.iter().map(|s| s.date.as_str()).collect();
        assert_eq!(dates, ["2024-06-01", "2024-06-02", "2024-06-03"]);
        assert_eq!(summaries[0].series, RiskSeries::generate("Boston", "2024-06-01"));
    }

    #[test]
    fn test_summaries_capped() {
        assert_eq!(day_summaries(&props("2024-01-01", "2024-12-31")).len(), MAX_RESULT_DAYS);
    }

    #[test]
    fn test_bad_ranges_have_no_summaries() {
        assert!(day_summaries(&props("2024-06-03", "2024-06-01")).is_empty());
        assert!(day_summaries(&props("soon", "2024-06-01")).is_empty());
    }
}
