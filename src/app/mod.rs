//! Application-level modules for the dewscope shell.
//!
//! Command-line configuration and the egui-backed theme applier.

mod config;
mod theme_coordinator;

pub use config::{AppConfig, Cli};
pub use theme_coordinator::EguiThemeApplier;
