//! Condensation animation
//!
//! Droplets bead up on a pane, grow, and run down once heavy enough.
//! Positions are seeded once; everything else is a function of time.

use eframe::egui;
use egui::{Pos2, Rect, Sense, Stroke, Vec2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use dewscope::{with_alpha, ThemeColors};

const DROPLET_COUNT: usize = 48;
const PANE_HEIGHT: f32 = 140.0;
const SEED: u64 = 42;

/// One droplet's fixed parameters, in pane-relative units (0..1).
#[derive(Debug, Clone, PartialEq)]
struct Droplet {
    x: f32,
    y: f32,
    max_radius: f32,
    /// Seconds to grow to full size
    period: f32,
    /// Offset into the cycle so droplets do not pulse together
    phase: f32,
}

/// Decorative condensation pane. Holds only the seeded droplet layout.
pub struct CondensationAnimation {
    droplets: Vec<Droplet>,
}

impl Default for CondensationAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl CondensationAnimation {
    pub fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(SEED);
        let droplets = (0..DROPLET_COUNT)
            .map(|_| Droplet {
                x: rng.gen_range(0.02..0.98),
                y: rng.gen_range(0.05..0.6),
                max_radius: rng.gen_range(2.5..7.0),
                period: rng.gen_range(3.0..9.0),
                phase: rng.gen_range(0.0..1.0),
            })
            .collect();
        Self { droplets }
    }

    /// Renders the pane at the current frame time
    pub fn render(&self, ui: &mut egui::Ui, colors: &ThemeColors) {
        let width = ui.available_width();
        let (rect, _) = ui.allocate_exact_size(Vec2::new(width, PANE_HEIGHT), Sense::hover());
        let time = ui.input(|i| i.time) as f32;

        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 8.0, with_alpha(colors.extreme_background, 90));

        for droplet in &self.droplets {
            let (center, radius) = droplet_at(droplet, rect, time);
            painter.circle(
                center,
                radius,
                with_alpha(colors.droplet, 150),
                Stroke::new(1.0, with_alpha(colors.text_strong, 60)),
            );
        }

        painter.text(
            rect.left_bottom() + Vec2::new(10.0, -10.0),
            egui::Align2::LEFT_BOTTOM,
            "Surface condensation",
            egui::FontId::proportional(12.0),
            colors.text_dim,
        );

        ui.ctx().request_repaint();
    }
}

/// Position and radius of a droplet at `time`.
///
/// For the first 70% of its cycle a droplet grows in place; afterwards it runs
/// down the pane at full size.
fn droplet_at(droplet: &Droplet, rect: Rect, time: f32) -> (Pos2, f32) {
    let progress = ((time / droplet.period) + droplet.phase).fract();

    let (fall, radius) = if progress < 0.7 {
        (0.0, droplet.max_radius * (progress / 0.7).sqrt())
    } else {
        let run = (progress - 0.7) / 0.3;
        (run * run * (1.0 - droplet.y), droplet.max_radius)
    };

    let center = Pos2::new(
        rect.left() + droplet.x * rect.width(),
        rect.top() + (droplet.y + fall) * rect.height(),
    );
    (center, radius.max(0.5))
}
