//! Panel orchestration and layout management.
//!
//! Turns a [`RenderPlan`] into egui panels and collects the messages the
//! collaborators emit, converted to coordinator [`Intent`]s.

use dewscope::{Branch, Intent, RenderPlan, ThemeColors};

use crate::ui::condensation::CondensationAnimation;
use crate::ui::{analysis_results, background, header, location_input, vulnerability_chart};

/// Widest the central content column grows.
const CONTENT_MAX_WIDTH: f32 = 960.0;

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders one frame described by `plan`.
    ///
    /// Background, overlay and header are drawn regardless of the branch.
    /// Returns the intents emitted this frame, in emission order.
    pub fn render_all_panels(
        ctx: &egui::Context,
        plan: &RenderPlan,
        animation: &CondensationAnimation,
        colors: &ThemeColors,
    ) -> Vec<Intent> {
        let mut intents = Vec::new();

        background::render_background(ctx, &plan.background, plan.overlay.dark_mode);
        background::render_overlay(ctx, &plan.overlay, colors);

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(4.0);
            if let Some(message) = header::render_header(ui, &plan.header, colors) {
                intents.push(message.into());
            }
            ui.add_space(4.0);
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.inner_margin(egui::Margin::same(16)))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("main_scroll_area")
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        let margin = ((ui.available_width() - CONTENT_MAX_WIDTH) / 2.0).max(0.0);
                        ui.horizontal(|ui| {
                            ui.add_space(margin);
                            ui.vertical(|ui| {
                                ui.set_max_width(CONTENT_MAX_WIDTH);
                                Self::render_branch(ui, &plan.branch, animation, colors, &mut intents);
                            });
                        });
                    });
            });

        intents
    }

    fn render_branch(
        ui: &mut egui::Ui,
        branch: &Branch,
        animation: &CondensationAnimation,
        colors: &ThemeColors,
        intents: &mut Vec<Intent>,
    ) {
        match branch {
            Branch::Input { location_input, preview_chart } => {
                animation.render(ui, colors);
                ui.add_space(12.0);

                if let Some(message) = location_input::render_location_input(ui, location_input, colors) {
                    intents.push(message.into());
                }
                ui.add_space(12.0);

                vulnerability_chart::render_vulnerability_chart(ui, preview_chart, colors);
            }
            Branch::Results(results) => {
                if let Some(message) = analysis_results::render_analysis_results(ui, results, colors) {
                    intents.push(message.into());
                }
            }
        }
    }
}
