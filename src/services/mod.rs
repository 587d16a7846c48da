//! Services for series generation, aggregation and configuration

pub mod aggregator;
pub mod config;
pub mod generator;

pub use aggregator::Aggregator;
pub use config::ConfigService;
pub use generator::SeriesGenerator;
