//! Price series types: destinations, points, series and the generated dataset

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{FareError, Result};

/// A target city with its synthetic price parameters (base currency units)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Destination {
    pub name: String,
    /// Alternative selection keys, e.g. localized display names ("도쿄")
    #[serde(default)]
    pub aliases: Vec<String>,
    pub mean: f64,
    pub std_dev: f64,
}

impl Destination {
    pub fn new(name: impl Into<String>, mean: f64, std_dev: f64) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            mean,
            std_dev,
        }
    }

    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    /// True if `key` is the name or one of the aliases
    pub fn matches(&self, key: &str) -> bool {
        self.name == key || self.aliases.iter().any(|a| a == key)
    }
}

/// One dated price in local currency units (after conversion)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: f64,
}

impl PricePoint {
    pub fn new(date: NaiveDate, price: f64) -> Self {
        Self { date, price }
    }
}

/// Ordered (ascending date) prices for one destination
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Series {
    pub destination: String,
    pub points: Vec<PricePoint>,
}

impl Series {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.points.iter().map(|p| p.date)
    }
}

/// Generated series for every configured destination on a shared date axis.
///
/// Built once by `SeriesGenerator::generate` and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    destinations: Vec<Destination>,
    dates: Vec<NaiveDate>,
    series: Vec<Series>,
}

impl Dataset {
    /// `series[i]` must belong to `destinations[i]` and use `dates` as its axis
    pub(crate) fn from_parts(
        destinations: Vec<Destination>,
        dates: Vec<NaiveDate>,
        series: Vec<Series>,
    ) -> Self {
        debug_assert_eq!(destinations.len(), series.len());
        Self {
            destinations,
            dates,
            series,
        }
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    /// The date axis shared by every series
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Series in configured destination order
    pub fn iter(&self) -> impl Iterator<Item = &Series> {
        self.series.iter()
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Look up a series by destination name or alias
    pub fn select(&self, key: &str) -> Result<&Series> {
        self.destinations
            .iter()
            .position(|d| d.matches(key))
            .map(|idx| &self.series[idx])
            .ok_or_else(|| FareError::UnknownDestination(key.to_string()))
    }
}

/// Mean price per calendar month (1-12); months without points are absent
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct MonthlyAverage(BTreeMap<u32, f64>);

impl MonthlyAverage {
    pub fn get(&self, month: u32) -> Option<f64> {
        self.0.get(&month).copied()
    }

    /// Months present, ascending
    pub fn months(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.keys().copied()
    }

    /// (month, mean) pairs, ascending by month
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.0.iter().map(|(m, avg)| (*m, *avg))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<BTreeMap<u32, f64>> for MonthlyAverage {
    fn from(map: BTreeMap<u32, f64>) -> Self {
        Self(map)
    }
}

/// Everything the output layer needs for one destination selection
#[derive(Debug, Clone, Serialize)]
pub struct SelectionSummary<'a> {
    pub destination: &'a str,
    pub series: &'a Series,
    pub cheapest: PricePoint,
    pub monthly_average: MonthlyAverage,
}
