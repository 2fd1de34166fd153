//! Color mapping for risk values and background slides.
//!
//! This module provides functions for:
//! - Assigning colors to risk values and levels
//! - Picking the gradient stops of background slides
//!
//! Color assignment is deterministic.

use egui::Color32;
use dewscope::{adjust_brightness, ThemeColors};

use crate::domain::RiskLevel;

/// Returns the color for a risk level in the current palette.
pub fn risk_level_color(level: RiskLevel, colors: &ThemeColors) -> Color32 {
    match level {
        RiskLevel::Low => colors.risk_low,
        RiskLevel::Moderate => colors.risk_moderate,
        RiskLevel::High => colors.risk_high,
    }
}

/// Returns the bar color for a raw risk value.
pub fn risk_value_color(value: f32, colors: &ThemeColors) -> Color32 {
    risk_level_color(RiskLevel::from_value(value), colors)
}

/// Sky gradients the background slideshow cycles through, as (top, bottom).
const SLIDES: [(Color32, Color32); 5] = [
    (Color32::from_rgb(56, 189, 248), Color32::from_rgb(14, 116, 144)),  // clear morning
    (Color32::from_rgb(148, 163, 184), Color32::from_rgb(71, 85, 105)),  // overcast
    (Color32::from_rgb(251, 191, 36), Color32::from_rgb(194, 65, 12)),   // dusk
    (Color32::from_rgb(165, 180, 252), Color32::from_rgb(67, 56, 202)),  // night haze
    (Color32::from_rgb(134, 239, 172), Color32::from_rgb(21, 128, 61)),  // humid valley
];

/// Number of available background slides.
pub fn slide_count() -> usize {
    SLIDES.len()
}

/// Returns the gradient for `slide`, dimmed in dark mode.
pub fn slide_gradient(slide: usize, dark_mode: bool) -> (Color32, Color32) {
    let (top, bottom) = SLIDES[slide % SLIDES.len()];
    if dark_mode {
        (adjust_brightness(top, 0.45), adjust_brightness(bottom, 0.35))
    } else {
        (top, bottom)
    }
}
