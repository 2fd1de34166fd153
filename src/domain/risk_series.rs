//! Demo condensation-risk series.
//!
//! No data source is wired into the shell, so charts are fed a synthetic
//! hourly series. The series is seeded from the location and date, so the same
//! inputs always draw the same chart.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use xxhash_rust::xxh64::Xxh64;

/// Hours per day in a series.
pub const HOURS: usize = 24;

/// Threshold above which a value counts as moderate risk.
pub const MODERATE_THRESHOLD: f32 = 0.4;
/// Threshold above which a value counts as high risk.
pub const HIGH_THRESHOLD: f32 = 0.7;

/// Coarse classification of a risk value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn from_value(value: f32) -> Self {
        if value >= HIGH_THRESHOLD {
            RiskLevel::High
        } else if value >= MODERATE_THRESHOLD {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
        }
    }
}

/// Hourly risk values in `[0, 1]` for one location and day.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskSeries {
    values: [f32; HOURS],
}

impl RiskSeries {
    /// Generates the series for `(location, date)`.
    ///
    /// Risk peaks in the early morning when surfaces are coldest, with
    /// per-location amplitude and per-hour noise.
    pub fn generate(location: &str, date: &str) -> Self {
        let mut rng = StdRng::seed_from_u64(seed_for(location, date));

        let amplitude: f32 = rng.gen_range(0.35..0.65);
        let baseline: f32 = rng.gen_range(0.05..0.3);
        let peak_hour: f32 = rng.gen_range(3.0..7.0);

        let mut values = [0.0; HOURS];
        for (hour, value) in values.iter_mut().enumerate() {
            // Wrap-around distance to the peak hour, 0..=12
            let offset = (hour as f32 - peak_hour).abs();
            let distance = offset.min(HOURS as f32 - offset);
            let shape = (1.0 - distance / 12.0).powi(2);
            let noise: f32 = rng.gen_range(-0.05..0.05);
            *value = (baseline + amplitude * shape + noise).clamp(0.0, 1.0);
        }

        Self { values }
    }

    pub fn values(&self) -> &[f32; HOURS] {
        &self.values
    }

    /// Returns (hour, value) of the highest reading.
    pub fn peak(&self) -> (usize, f32) {
        self.values
            .iter()
            .copied()
            .enumerate()
            .fold((0, f32::MIN), |best, (hour, value)| {
                if value > best.1 {
                    (hour, value)
                } else {
                    best
                }
            })
    }

    pub fn mean(&self) -> f32 {
        self.values.iter().sum::<f32>() / HOURS as f32
    }

    /// Classification of the peak value.
    pub fn level(&self) -> RiskLevel {
        RiskLevel::from_value(self.peak().1)
    }
}

fn seed_for(location: &str, date: &str) -> u64 {
    stable_seed(&[&normalize_location(location), date.trim()])
}

/// Lowercased, trimmed location used for seeding.
pub fn normalize_location(location: &str) -> String {
    location.trim().to_lowercase()
}

/// Hashes `parts` into an RNG seed that is identical across builds and platforms.
///
/// Parts are length-prefixed so `["ab", "c"]` and `["a", "bc"]` differ.
pub fn stable_seed(parts: &[&str]) -> u64 {
    let mut hasher = Xxh64::new(0);
    for part in parts {
        hasher.update(&(part.len() as u64).to_le_bytes());
        hasher.update(part.as_bytes());
    }
    hasher.digest()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_is_deterministic() {
        let a = RiskSeries::generate("Boston", "2024-06-01");
        let b = RiskSeries::generate("Boston", "2024-06-01");
        assert_eq!(a, b);

        // Location matching ignores case and surrounding spaces
        let c = RiskSeries::generate("  boston ", "2024-06-01");
        assert_eq!(a, c);
    }

    #[test]
    fn test_series_varies_with_inputs() {
        let a = RiskSeries::generate("Boston", "2024-06-01");
        assert_ne!(a, RiskSeries::generate("Boston", "2024-06-02"));
        assert_ne!(a, RiskSeries::generate("Seattle", "2024-06-01"));
    }

    #[test]
    fn test_values_in_unit_range() {
        for location in ["", "Current Location", "Quito"] {
            let series = RiskSeries::generate(location, "not-a-date");
            assert!(series.values().iter().all(|v| (0.0..=1.0).contains(v)));
            let (hour, peak) = series.peak();
            assert!(hour < HOURS);
            assert!(peak >= series.mean());
        }
    }

    #[test]
    fn test_stable_seed_is_fixed() {
        // xxh64 with seed 0 over no input
        assert_eq!(stable_seed(&[]), 0xef46_db37_51d8_e999);
        assert_eq!(stable_seed(&["Boston", "2024-06-01"]), stable_seed(&["Boston", "2024-06-01"]));
        assert_ne!(stable_seed(&["ab", "c"]), stable_seed(&["a", "bc"]));
    }

    #[test]
    fn test_risk_levels() {
        assert_eq!(RiskLevel::from_value(0.1), RiskLevel::Low);
        assert_eq!(RiskLevel::from_value(0.4), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_value(0.95), RiskLevel::High);
        assert_eq!(RiskLevel::High.label(), "High");
    }
}
