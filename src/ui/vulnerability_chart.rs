//! Vulnerability chart rendering
//!
//! Hourly condensation-risk bars for one location and day. Preview mode is the
//! compact "today" card on the input screen.

use eframe::egui;
use egui::{Pos2, Rect, RichText, Sense, Stroke, Vec2};
use dewscope::{ChartProps, ThemeColors};

use crate::domain::{RiskSeries, HOURS};
use crate::presentation::color_mapping::{risk_level_color, risk_value_color};

const PREVIEW_HEIGHT: f32 = 110.0;
const FULL_HEIGHT: f32 = 220.0;

/// Renders the chart for `props`
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `props` - Location, date and preview flag
/// * `colors` - Color palette for the current theme
pub fn render_vulnerability_chart(ui: &mut egui::Ui, props: &ChartProps, colors: &ThemeColors) {
    let series = RiskSeries::generate(&props.location, &props.date);
    let (peak_hour, peak) = series.peak();
    let level = series.level();

    egui::Frame::group(ui.style())
        .fill(ui.visuals().panel_fill)
        .corner_radius(8.0)
        .inner_margin(12.0)
        .show(ui, |ui| {
            let title = if props.preview {
                format!("Today's preview · {}", props.location)
            } else {
                format!("Hourly risk · {} · {}", props.location, props.date)
            };
            ui.horizontal(|ui| {
                ui.label(RichText::new(title).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(format!("{} risk", level.label()))
                            .strong()
                            .color(risk_level_color(level, colors)),
                    );
                });
            });

            let height = if props.preview { PREVIEW_HEIGHT } else { FULL_HEIGHT };
            draw_bars(ui, &series, height, !props.preview, colors);

            ui.label(
                RichText::new(format!(
                    "Peak {:.0}% at {:02}:00 · mean {:.0}%",
                    peak * 100.0,
                    peak_hour,
                    series.mean() * 100.0
                ))
                .color(colors.text_dim),
            );
        });
}

fn draw_bars(ui: &mut egui::Ui, series: &RiskSeries, height: f32, hour_labels: bool, colors: &ThemeColors) {
    let width = ui.available_width();
    let label_space = if hour_labels { 16.0 } else { 0.0 };
    let (rect, response) = ui.allocate_exact_size(Vec2::new(width, height + label_space), Sense::hover());
    let plot = Rect::from_min_size(rect.min, Vec2::new(width, height));
    let painter = ui.painter_at(rect);

    painter.line_segment(
        [plot.left_bottom(), plot.right_bottom()],
        Stroke::new(1.0, colors.border),
    );

    let slot = plot.width() / HOURS as f32;
    let mut hovered = None;
    for (hour, &value) in series.values().iter().enumerate() {
        let left = plot.left() + hour as f32 * slot + slot * 0.15;
        let bar = Rect::from_min_max(
            Pos2::new(left, plot.bottom() - value * plot.height()),
            Pos2::new(left + slot * 0.7, plot.bottom()),
        );
        painter.rect_filled(bar, 2.0, risk_value_color(value, colors));

        if hour_labels && hour % 3 == 0 {
            painter.text(
                Pos2::new(left + slot * 0.35, plot.bottom() + 2.0),
                egui::Align2::CENTER_TOP,
                format!("{:02}", hour),
                egui::FontId::proportional(10.0),
                colors.text_dim,
            );
        }

        if let Some(pos) = response.hover_pos() {
            if pos.x >= plot.left() + hour as f32 * slot && pos.x < plot.left() + (hour + 1) as f32 * slot {
                hovered = Some((hour, value));
            }
        }
    }

    if let Some((hour, value)) = hovered {
        response.on_hover_text(format!("{:02}:00 · {:.0}%", hour, value * 100.0));
    }
}
