//! Header panel UI rendering
//!
//! Title bar with the dark-mode toggle.

use eframe::egui;
use egui::RichText;
use dewscope::{HeaderMessage, HeaderProps, ThemeColors};

/// Renders the application header
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `props` - Current dark-mode flag
/// * `colors` - Color palette for the current theme
///
/// # Returns
/// * `Option<HeaderMessage>` - Theme toggle request, if clicked
pub fn render_header(ui: &mut egui::Ui, props: &HeaderProps, colors: &ThemeColors) -> Option<HeaderMessage> {
    let mut message = None;

    ui.horizontal(|ui| {
        ui.label(RichText::new("💧 DewScope").heading().strong().color(colors.accent));
        ui.label(RichText::new("Condensation vulnerability outlook").color(colors.text_dim));

        // Push theme toggle to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let (icon, hint) = if props.dark_mode {
                ("☀", "Switch to light mode")
            } else {
                ("🌙", "Switch to dark mode")
            };

            let response = ui.button(icon).on_hover_text(hint);
            if response.clicked() {
                message = Some(HeaderMessage::SetTheme(!props.dark_mode));
            }
        });
    });

    message
}
