//! Theme support module for the dewscope shell
//!
//! The shell has exactly two looks, selected by the dark-mode flag held in the
//! [`ViewCoordinator`](crate::ViewCoordinator). This module owns both palettes
//! and knows how to write a palette into `egui::Visuals`.
//!
//! # Examples
//!
//! ```
//! use dewscope::theme::ThemeManager;
//!
//! let manager = ThemeManager::new();
//! let dark = manager.palette_for(true);
//! assert_eq!(dark.name, "Dark");
//! ```

use egui::Color32;

/// Complete color palette for a theme, covering all UI elements
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Background colors
    pub panel_background: Color32,
    pub extreme_background: Color32,

    /// Glass tint painted over the background slideshow
    pub overlay: Color32,

    // Foreground colors
    pub text: Color32,
    pub text_dim: Color32,
    pub text_strong: Color32,

    // Interactive colors
    pub selection: Color32,
    pub hover: Color32,
    pub border: Color32,
    pub accent: Color32,

    // Risk scale (chart bars and result badges)
    pub risk_low: Color32,
    pub risk_moderate: Color32,
    pub risk_high: Color32,
    pub droplet: Color32,
}

/// A complete theme definition with metadata and color palette
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Holds the light and dark themes and maps the dark-mode flag onto them
pub struct ThemeManager {
    light: Theme,
    dark: Theme,
}

impl ThemeManager {
    /// Creates a new ThemeManager initialized with both built-in themes
    pub fn new() -> Self {
        Self {
            light: light_theme(),
            dark: dark_theme(),
        }
    }

    /// Returns the theme matching the dark-mode flag
    pub fn palette_for(&self, dark_mode: bool) -> &Theme {
        if dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }

    /// Returns egui base visuals for the flag with the palette already applied
    pub fn visuals_for(&self, dark_mode: bool) -> egui::Visuals {
        let mut visuals = if dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        self.apply_theme(self.palette_for(dark_mode), &mut visuals);
        visuals
    }

    /// Applies a theme's colors to egui visuals
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        visuals.panel_fill = colors.panel_background;
        visuals.window_fill = colors.panel_background;
        visuals.extreme_bg_color = colors.extreme_background;
        visuals.faint_bg_color = colors.hover;

        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = colors.selection;
        visuals.selection.stroke.color = colors.accent;

        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.inactive.bg_fill = colors.hover;
        visuals.widgets.hovered.bg_fill = colors.hover;
        visuals.widgets.active.bg_fill = colors.selection;

        visuals.hyperlink_color = colors.accent;

        visuals.error_fg_color = colors.risk_high;
        visuals.warn_fg_color = colors.risk_moderate;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates the Light theme (sky blues on near-white)
fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        colors: ThemeColors {
            panel_background: hex_to_color32("#f8fafc"),
            extreme_background: Color32::from_rgb(255, 255, 255),

            // white/30
            overlay: with_alpha(Color32::WHITE, 77),

            text: hex_to_color32("#0f172a"),
            text_dim: hex_to_color32("#64748b"),
            text_strong: hex_to_color32("#020617"),

            selection: hex_to_color32("#bae6fd"),
            hover: hex_to_color32("#e2e8f0"),
            border: hex_to_color32("#cbd5e1"),
            accent: hex_to_color32("#0284c7"),

            risk_low: hex_to_color32("#16a34a"),
            risk_moderate: hex_to_color32("#d97706"),
            risk_high: hex_to_color32("#dc2626"),
            droplet: hex_to_color32("#0ea5e9"),
        },
    }
}

/// Creates the Dark theme (slate night palette)
fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        colors: ThemeColors {
            panel_background: hex_to_color32("#1e293b"),
            extreme_background: hex_to_color32("#020617"),

            // slate-950/50
            overlay: with_alpha(hex_to_color32("#020617"), 128),

            text: hex_to_color32("#e2e8f0"),
            text_dim: hex_to_color32("#94a3b8"),
            text_strong: hex_to_color32("#f8fafc"),

            selection: hex_to_color32("#075985"),
            hover: hex_to_color32("#334155"),
            border: hex_to_color32("#475569"),
            accent: hex_to_color32("#38bdf8"),

            risk_low: hex_to_color32("#4ade80"),
            risk_moderate: hex_to_color32("#fbbf24"),
            risk_high: hex_to_color32("#f87171"),
            droplet: hex_to_color32("#7dd3fc"),
        },
    }
}

/// Converts a hex color string (like "#282a36") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0) // Fallback to black
    }
}

/// Adjusts the brightness of a color by a factor (1.0 = no change, >1.0 = brighter, <1.0 = darker)
pub fn adjust_brightness(color: Color32, factor: f32) -> Color32 {
    let r = (color.r() as f32 * factor).min(255.0) as u8;
    let g = (color.g() as f32 * factor).min(255.0) as u8;
    let b = (color.b() as f32 * factor).min(255.0) as u8;
    Color32::from_rgb(r, g, b)
}

/// Sets the alpha channel of a color (unmultiplied)
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_color32() {
        assert_eq!(hex_to_color32("#ff0080"), Color32::from_rgb(255, 0, 128));
        assert_eq!(hex_to_color32("00ff00"), Color32::from_rgb(0, 255, 0));
        assert_eq!(hex_to_color32("#abc"), Color32::from_rgb(0, 0, 0));
    }

    #[test]
    fn test_palette_for_flag() {
        let manager = ThemeManager::new();
        assert_eq!(manager.palette_for(true).name, "Dark");
        assert_eq!(manager.palette_for(false).name, "Light");
    }

    #[test]
    fn test_visuals_follow_flag() {
        let manager = ThemeManager::new();
        assert!(manager.visuals_for(true).dark_mode);
        assert!(!manager.visuals_for(false).dark_mode);
        assert_eq!(
            manager.visuals_for(false).panel_fill,
            manager.palette_for(false).colors.panel_background
        );
    }

    #[test]
    fn test_adjust_brightness_saturates() {
        let c = adjust_brightness(Color32::from_rgb(200, 100, 10), 2.0);
        assert_eq!(c, Color32::from_rgb(255, 200, 20));
    }
}
