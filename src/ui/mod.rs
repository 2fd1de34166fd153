//! UI panel rendering subsystem
//!
//! Collaborator views composed by the shell:
//! - Header (title, theme toggle)
//! - Background slideshow and glass overlay
//! - Condensation animation
//! - Location/date picker
//! - Vulnerability chart (preview and full)
//! - Analysis results
//! - Panel manager (turns a render plan into panels)

pub mod header;
pub mod background;
pub mod condensation;
pub mod location_input;
pub mod vulnerability_chart;
pub mod analysis_results;
pub mod panel_manager;
