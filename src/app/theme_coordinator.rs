//! Applies the dark-mode flag to the egui context.
//!
//! The egui context plays the role of the document root: its active theme and
//! visuals are the theme marker.

use dewscope::{ThemeApplier, ThemeManager};

/// Theme applier backed by an egui context.
pub struct EguiThemeApplier {
    ctx: egui::Context,
    theme_manager: ThemeManager,
}

impl EguiThemeApplier {
    pub fn new(ctx: egui::Context) -> Self {
        Self {
            ctx,
            theme_manager: ThemeManager::new(),
        }
    }

    /// Returns the palettes used for rendering.
    pub fn theme_manager(&self) -> &ThemeManager {
        &self.theme_manager
    }
}

impl ThemeApplier for EguiThemeApplier {
    fn apply(&mut self, dark_mode: bool) {
        let theme = if dark_mode {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        };

        // Pin the theme so the OS preference cannot override the flag
        self.ctx.set_theme(theme);
        self.ctx
            .set_visuals_of(theme, self.theme_manager.visuals_for(dark_mode));
        self.ctx.request_repaint();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_follows_flag() {
        let ctx = egui::Context::default();
        let mut applier = EguiThemeApplier::new(ctx.clone());

        applier.apply(false);
        assert_eq!(ctx.theme(), egui::Theme::Light);
        assert!(!ctx.style().visuals.dark_mode);

        applier.apply(true);
        assert_eq!(ctx.theme(), egui::Theme::Dark);
        assert!(ctx.style().visuals.dark_mode);
    }
}
