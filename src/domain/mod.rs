//! Domain logic behind the collaborator views.
//!
//! - Demo risk series for the charts and result summaries

pub mod risk_series;

pub use risk_series::{normalize_location, stable_seed, RiskLevel, RiskSeries, HOURS};
