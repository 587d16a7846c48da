//! Series generator: deterministic synthetic fare series
//!
//! Draws one normally distributed base-currency price per date for each
//! destination and converts it with a fixed rate. All randomness comes from
//! `ChaCha8Rng` instances owned by the `generate` call, so identical configs
//! produce bit-identical datasets on every platform.

use chrono::{Days, NaiveDate};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use std::collections::HashSet;
use tracing::{debug, warn};
use xxhash_rust::xxh3::xxh3_64_with_seed;

use crate::types::{
    Dataset, Destination, FareError, GeneratorConfig, PricePoint, RandomStreams, Result, Series,
};

/// Generator for the synthetic fare dataset
pub struct SeriesGenerator;

impl SeriesGenerator {
    /// Validate `config` and build the full dataset
    pub fn generate(config: &GeneratorConfig) -> Result<Dataset> {
        Self::validate(config)?;

        let dates = Self::date_axis(config.start, config.end, config.step_days)?;
        debug!(
            points = dates.len(),
            start = %config.start,
            end = %config.end,
            streams = ?config.streams,
            "built date axis"
        );

        // Only consumed in shared mode; seeded once per generate call.
        let mut shared = ChaCha8Rng::seed_from_u64(config.seed);
        let mut series = Vec::with_capacity(config.destinations.len());

        for destination in &config.destinations {
            let points = match config.streams {
                RandomStreams::Shared => {
                    Self::draw(destination, &dates, config.conversion_rate, &mut shared)?
                }
                RandomStreams::Independent => {
                    let mut rng = ChaCha8Rng::seed_from_u64(Self::stream_seed(
                        config.seed,
                        &destination.name,
                    ));
                    Self::draw(destination, &dates, config.conversion_rate, &mut rng)?
                }
            };

            let negatives = points.iter().filter(|p| p.price < 0.0).count();
            if negatives > 0 {
                warn!(
                    destination = %destination.name,
                    negatives,
                    "generated negative prices; values are kept unclamped"
                );
            }
            debug!(destination = %destination.name, points = points.len(), "generated series");

            series.push(Series {
                destination: destination.name.clone(),
                points,
            });
        }

        Ok(Dataset::from_parts(
            config.destinations.clone(),
            dates,
            series,
        ))
    }

    /// Ascending dates `start, start + step, ...` not exceeding `end`
    pub fn date_axis(start: NaiveDate, end: NaiveDate, step_days: i64) -> Result<Vec<NaiveDate>> {
        if step_days <= 0 {
            return Err(FareError::Config(format!(
                "step_days must be positive, got {}",
                step_days
            )));
        }
        if start > end {
            return Err(FareError::Config(format!(
                "start {} is after end {}",
                start, end
            )));
        }

        let step = Days::new(step_days as u64);
        let mut dates = Vec::new();
        let mut current = Some(start);
        while let Some(date) = current.filter(|d| *d <= end) {
            dates.push(date);
            current = date.checked_add_days(step);
        }
        Ok(dates)
    }

    /// Seed for a destination's independent stream
    pub fn stream_seed(seed: u64, name: &str) -> u64 {
        xxh3_64_with_seed(name.as_bytes(), seed)
    }

    fn draw<R: Rng + ?Sized>(
        destination: &Destination,
        dates: &[NaiveDate],
        conversion_rate: f64,
        rng: &mut R,
    ) -> Result<Vec<PricePoint>> {
        let normal = Normal::new(destination.mean, destination.std_dev)
            .map_err(|e| FareError::Config(format!("{}: {}", destination.name, e)))?;

        let mut points = Vec::with_capacity(dates.len());
        for &date in dates {
            let base = normal.sample(&mut *rng);
            points.push(PricePoint::new(date, base * conversion_rate));
        }
        Ok(points)
    }

    fn validate(config: &GeneratorConfig) -> Result<()> {
        if config.destinations.is_empty() {
            return Err(FareError::Config("no destinations configured".into()));
        }
        if !(config.conversion_rate.is_finite() && config.conversion_rate > 0.0) {
            return Err(FareError::Config(format!(
                "conversion_rate must be positive, got {}",
                config.conversion_rate
            )));
        }

        let mut keys: HashSet<&str> = HashSet::new();
        for d in &config.destinations {
            if d.name.trim().is_empty() {
                return Err(FareError::Config("destination name is empty".into()));
            }
            if !(d.mean.is_finite() && d.mean > 0.0) {
                return Err(FareError::Config(format!(
                    "{}: mean must be positive, got {}",
                    d.name, d.mean
                )));
            }
            // Zero is allowed: the distribution collapses to the mean.
            if !(d.std_dev.is_finite() && d.std_dev >= 0.0) {
                return Err(FareError::Config(format!(
                    "{}: std_dev must be non-negative, got {}",
                    d.name, d.std_dev
                )));
            }
            for key in std::iter::once(&d.name).chain(d.aliases.iter()) {
                if !keys.insert(key.as_str()) {
                    return Err(FareError::Config(format!(
                        "duplicate destination name or alias: {}",
                        key
                    )));
                }
            }
        }

        Ok(())
    }
}
