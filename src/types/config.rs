//! Generation configuration

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Destination;

/// How destinations obtain their random draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RandomStreams {
    /// Each destination owns a generator seeded from hash(name, seed).
    /// Adding, removing or reordering destinations leaves the others untouched.
    #[default]
    Independent,
    /// One generator seeded once and advanced across destinations in order
    Shared,
}

/// Everything `SeriesGenerator::generate` needs. Missing fields in a config
/// file fall back to `GeneratorConfig::default()`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneratorConfig {
    pub destinations: Vec<Destination>,
    /// First date of the axis (inclusive)
    pub start: NaiveDate,
    /// Last allowed date (inclusive)
    pub end: NaiveDate,
    pub step_days: i64,
    /// Base currency → local currency multiplier
    pub conversion_rate: f64,
    pub seed: u64,
    pub streams: RandomStreams,
    /// Display label for the local currency
    pub currency: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            destinations: vec![
                Destination::new("Tokyo", 300.0, 50.0).with_aliases(["도쿄"]),
                Destination::new("Osaka", 280.0, 45.0).with_aliases(["오사카"]),
                Destination::new("New York", 900.0, 100.0).with_aliases(["뉴욕"]),
                Destination::new("London", 850.0, 90.0).with_aliases(["런던"]),
            ],
            start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
            end: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap_or_default(),
            step_days: 7,
            // 1 USD = 1300 KRW
            conversion_rate: 1300.0,
            seed: 42,
            streams: RandomStreams::default(),
            currency: "KRW".to_string(),
        }
    }
}

impl GeneratorConfig {
    pub fn destination_names(&self) -> Vec<&str> {
        self.destinations.iter().map(|d| d.name.as_str()).collect()
    }
}
