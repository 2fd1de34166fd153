//! Presentation layer for visual styling and color mapping.
//!
//! This module contains presentation logic separated from business logic:
//! - Color mapping for risk values and background slides

pub mod color_mapping;
