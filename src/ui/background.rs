//! Background slideshow and glass overlay
//!
//! Paints full-window sky gradients on the background layer. The slide order is
//! shuffled per location so each place gets its own sequence.

use eframe::egui;
use egui::{Color32, Mesh, Pos2, Rect};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::time::Duration;
use dewscope::{BackgroundProps, OverlayProps, ThemeColors};

use crate::domain::{normalize_location, stable_seed};
use crate::presentation::color_mapping::{slide_count, slide_gradient};

/// Seconds each slide stays on screen.
const SLIDE_SECONDS: f64 = 8.0;
/// Seconds spent cross-fading into the next slide.
const FADE_SECONDS: f64 = 1.5;

/// Returns the slide order for a location.
pub fn slide_order(location: &str) -> Vec<usize> {
    let seed = stable_seed(&["slides", &normalize_location(location)]);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut order: Vec<usize> = (0..slide_count()).collect();
    order.shuffle(&mut rng);
    order
}

/// Returns (current slide position, next slide position, fade progress 0..1) at `time`.
pub fn slide_phase(time: f64, slides: usize) -> (usize, usize, f32) {
    let slides = slides.max(1);
    let cycle = (time / SLIDE_SECONDS).floor();
    let current = (cycle as usize) % slides;
    let next = (current + 1) % slides;

    let into_slide = time - cycle * SLIDE_SECONDS;
    let fade_start = SLIDE_SECONDS - FADE_SECONDS;
    let fade = if into_slide > fade_start {
        ((into_slide - fade_start) / FADE_SECONDS) as f32
    } else {
        0.0
    };
    (current, next, fade.clamp(0.0, 1.0))
}

/// Renders the slideshow behind all panels
///
/// # Arguments
/// * `ctx` - egui context (paints on the background layer)
/// * `props` - Location driving the slide order
/// * `dark_mode` - Dims slides for the dark theme
pub fn render_background(ctx: &egui::Context, props: &BackgroundProps, dark_mode: bool) {
    let rect = ctx.content_rect();
    let time = ctx.input(|i| i.time);

    let order = slide_order(&props.location);
    let (current, next, fade) = slide_phase(time, order.len());

    let (top_a, bottom_a) = slide_gradient(order[current], dark_mode);
    let (top_b, bottom_b) = slide_gradient(order[next], dark_mode);
    let top = top_a.lerp_to_gamma(top_b, fade);
    let bottom = bottom_a.lerp_to_gamma(bottom_b, fade);

    let painter = ctx.layer_painter(egui::LayerId::background());
    painter.add(vertical_gradient(rect, top, bottom));

    ctx.request_repaint_after(Duration::from_millis(if fade > 0.0 { 16 } else { 250 }));
}

/// Renders the translucent tint between the slideshow and the content
pub fn render_overlay(ctx: &egui::Context, _props: &OverlayProps, colors: &ThemeColors) {
    let painter = ctx.layer_painter(egui::LayerId::background());
    painter.rect_filled(ctx.content_rect(), 0.0, colors.overlay);
}

fn vertical_gradient(rect: Rect, top: Color32, bottom: Color32) -> Mesh {
    let mut mesh = Mesh::default();
    mesh.colored_vertex(rect.left_top(), top);
    mesh.colored_vertex(rect.right_top(), top);
    mesh.colored_vertex(Pos2::new(rect.left(), rect.bottom()), bottom);
    mesh.colored_vertex(rect.right_bottom(), bottom);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(1, 3, 2);
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_order_is_permutation() {
        let mut order = slide_order("Boston");
        assert_eq!(order, slide_order("boston"));
        order.sort_unstable();
        assert_eq!(order, (0..slide_count()).collect::<Vec<_>>());
    }

    #[test]
    fn test_slide_phase() {
        assert_eq!(slide_phase(0.0, 5), (0, 1, 0.0));
        assert_eq!(slide_phase(SLIDE_SECONDS * 4.5, 5), (4, 0, 0.0));

        let (current, next, fade) = slide_phase(SLIDE_SECONDS - FADE_SECONDS / 2.0, 5);
        assert_eq!((current, next), (0, 1));
        assert!((fade - 0.5).abs() < 1e-4);

        // Degenerate slide count still yields a valid index
        assert_eq!(slide_phase(100.0, 0).0, 0);
    }
}
