//! Location and date range picker
//!
//! Edits are reported as whole-value replacements; the picker keeps no state of
//! its own between frames.

use eframe::egui;
use egui::RichText;
use dewscope::{
    Chronology, DateRange, LocationInputMessage, LocationInputProps, ThemeColors, DEFAULT_LOCATION,
};

/// Renders the location/date picker
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `props` - Current location and date range
/// * `colors` - Color palette for the current theme
///
/// # Returns
/// * `Option<LocationInputMessage>` - The edit or analyze request made this frame
pub fn render_location_input(
    ui: &mut egui::Ui,
    props: &LocationInputProps,
    colors: &ThemeColors,
) -> Option<LocationInputMessage> {
    let mut message = None;

    egui::Frame::group(ui.style())
        .fill(ui.visuals().panel_fill)
        .corner_radius(8.0)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.label(RichText::new("Where and when?").strong());
            ui.add_space(6.0);

            egui::Grid::new("location_input_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Location:");
                    ui.horizontal(|ui| {
                        let mut location = props.location.clone();
                        let response = egui::TextEdit::singleline(&mut location)
                            .hint_text("City or place")
                            .desired_width(260.0)
                            .show(ui)
                            .response;
                        if response.changed() {
                            message = Some(LocationInputMessage::SetLocation(location));
                        }

                        if ui
                            .button("📍")
                            .on_hover_text("Use current location")
                            .clicked()
                        {
                            message = Some(LocationInputMessage::SetLocation(DEFAULT_LOCATION.to_string()));
                        }
                    });
                    ui.end_row();

                    ui.label("From:");
                    let mut start = props.date_range.start.clone();
                    if date_field(ui, &mut start) {
                        message = Some(LocationInputMessage::SetDateRange(DateRange::new(
                            start,
                            props.date_range.end.clone(),
                        )));
                    }
                    ui.end_row();

                    ui.label("To:");
                    let mut end = props.date_range.end.clone();
                    if date_field(ui, &mut end) {
                        message = Some(LocationInputMessage::SetDateRange(DateRange::new(
                            props.date_range.start.clone(),
                            end,
                        )));
                    }
                    ui.end_row();
                });

            match props.date_range.chronology() {
                Chronology::Ordered { .. } => {}
                Chronology::Reversed => {
                    ui.colored_label(colors.risk_moderate, "Start date is after end date");
                }
                Chronology::Unparsable => {
                    ui.colored_label(colors.risk_moderate, "Dates use the YYYY-MM-DD format");
                }
            }

            ui.add_space(8.0);
            let analyze = egui::Button::new(RichText::new("Analyze").strong()).fill(colors.selection);
            if ui.add(analyze).clicked() {
                message = Some(LocationInputMessage::Analyze);
            }
        });

    message
}

/// Single-line `YYYY-MM-DD` field. Returns true if edited this frame.
fn date_field(ui: &mut egui::Ui, value: &mut String) -> bool {
    egui::TextEdit::singleline(value)
        .hint_text("YYYY-MM-DD")
        .desired_width(110.0)
        .char_limit(10)
        .show(ui)
        .response
        .changed()
}
