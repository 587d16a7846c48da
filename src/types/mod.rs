//! Type definitions for fareseries

mod config;
mod error;
mod series;

pub use config::*;
pub use error::*;
pub use series::*;
