//! Synthetic weekly air-fare series for a fixed set of destinations, with
//! cheapest-date lookup and per-month averages over a selected series.

pub mod services;
pub mod types;
