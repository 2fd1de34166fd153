//! DewScope GUI Application
//!
//! A single-window shell for the condensation vulnerability viewer, built on
//! the egui framework. The window shows either the input screen (animation,
//! location/date picker, today's preview chart) or the analysis results.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
//!
//! The application is built with a modular architecture:
//! - `app/` - Command-line configuration and the egui theme applier
//! - `domain/` - Demo risk series behind the charts
//! - `presentation/` - Color mapping (separated from domain logic)
//! - `ui/` - Collaborator views and panel orchestration
//!
//! All top-level state lives in [`dewscope::ViewCoordinator`].

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod app;
mod domain;
mod presentation;
mod ui;

use app::{AppConfig, Cli, EguiThemeApplier};
use dewscope::{InitialState, RootClassList, ViewCoordinator};
use ui::condensation::CondensationAnimation;
use ui::panel_manager::PanelManager;

/// Main application entry point that parses the command line and launches the GUI.
fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "dewscope=info,dewscope_gui=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_cli(Cli::parse()).context("invalid command line")?;
    tracing::info!("DewScope v{}", env!("CARGO_PKG_VERSION"));

    if config.dump_plan {
        let coordinator = ViewCoordinator::with_initial(config.initial, RootClassList::new());
        println!("{}", serde_json::to_string_pretty(&coordinator.render())?);
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_title("DewScope"),
        ..Default::default()
    };

    let initial = config.initial;
    eframe::run_native(
        "DewScope",
        options,
        Box::new(move |cc| Ok(Box::new(DewScopeApp::new(cc, initial)))),
    )
    .map_err(|e| anyhow!("failed to run the viewer: {}", e))
}

/// The main DewScope application.
///
/// Holds the view coordinator and the one stateful collaborator (the
/// animation's droplet layout); everything else is derived per frame.
struct DewScopeApp {
    coordinator: ViewCoordinator<EguiThemeApplier>,
    animation: CondensationAnimation,
}

impl DewScopeApp {
    /// Mounts the coordinator against the window's egui context.
    fn new(cc: &eframe::CreationContext, initial: InitialState) -> Self {
        let applier = EguiThemeApplier::new(cc.egui_ctx.clone());
        Self {
            coordinator: ViewCoordinator::with_initial(initial, applier),
            animation: CondensationAnimation::new(),
        }
    }
}

impl eframe::App for DewScopeApp {
    /// Renders the current plan, then applies the intents it produced.
    ///
    /// The theme effect for a toggled flag runs inside `dispatch`, before the
    /// next frame is painted.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let plan = self.coordinator.render();
        let colors = self
            .coordinator
            .applier()
            .theme_manager()
            .palette_for(plan.header.dark_mode)
            .colors
            .clone();

        let intents = PanelManager::render_all_panels(ctx, &plan, &self.animation, &colors);

        for intent in intents {
            tracing::debug!(?intent, "applying intent");
            self.coordinator.dispatch(intent);
        }

        // Re-render promptly when the branch or props changed
        if self.coordinator.render() != plan {
            ctx.request_repaint();
        }
    }
}
