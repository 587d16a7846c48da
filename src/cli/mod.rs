mod report;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use fareseries::services::{Aggregator, ConfigService, SeriesGenerator};
use fareseries::types::{GeneratorConfig, RandomStreams};

/// Synthetic air-fare trends: cheapest dates and monthly averages
#[derive(Parser)]
#[command(name = "fareseries")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    overrides: ConfigOverrides,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Command-line overrides applied on top of the loaded config
#[derive(Args, Debug, Default)]
struct ConfigOverrides {
    /// Config file (default: ~/.fareseries/config.json if present)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// First date of the series (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    start: Option<NaiveDate>,

    /// Last allowed date of the series (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    end: Option<NaiveDate>,

    /// Days between points
    #[arg(long, allow_negative_numbers = true)]
    step_days: Option<i64>,

    /// Base currency → local currency conversion rate
    #[arg(long)]
    rate: Option<f64>,

    /// Random stream mode
    #[arg(long, value_enum)]
    streams: Option<RandomStreams>,
}

impl ConfigOverrides {
    fn apply(&self, config: &mut GeneratorConfig) {
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(start) = self.start {
            config.start = start;
        }
        if let Some(end) = self.end {
            config.end = end;
        }
        if let Some(step_days) = self.step_days {
            config.step_days = step_days;
        }
        if let Some(rate) = self.rate {
            config.conversion_rate = rate;
        }
        if let Some(streams) = self.streams {
            config.streams = streams;
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List configured destinations
    Destinations {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the price series for a destination
    Series {
        /// Destination name or alias
        destination: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the cheapest date for a destination
    Cheapest {
        /// Destination name or alias
        destination: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show monthly average prices for a destination
    Monthly {
        /// Destination name or alias
        destination: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show series, cheapest date and monthly averages (default)
    Report {
        /// Destination name or alias (default: first configured)
        destination: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration as JSON
    Config,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        let mut config = ConfigService::load(self.overrides.config.as_deref())?;
        self.overrides.apply(&mut config);

        let command = self.command.unwrap_or(Commands::Report {
            destination: None,
            json: false,
        });

        match command {
            Commands::Config => {
                println!("{}", serde_json::to_string_pretty(&config)?);
                Ok(())
            }
            Commands::Destinations { json } => {
                if json {
                    println!("{}", serde_json::to_string_pretty(&config.destinations)?);
                } else {
                    print!("{}", report::render_destinations(&config.destinations));
                }
                Ok(())
            }
            Commands::Series { destination, json } => {
                let dataset = SeriesGenerator::generate(&config)?;
                let series = dataset.select(&destination)?;
                if json {
                    println!("{}", serde_json::to_string_pretty(series)?);
                } else {
                    print!("{}", report::render_series(series, &config.currency));
                }
                Ok(())
            }
            Commands::Cheapest { destination, json } => {
                let dataset = SeriesGenerator::generate(&config)?;
                let series = dataset.select(&destination)?;
                let cheapest = Aggregator::minimum(&series.points)?;
                if json {
                    let output = serde_json::json!({
                        "destination": series.destination,
                        "date": cheapest.date,
                        "price": cheapest.price,
                    });
                    println!("{}", serde_json::to_string_pretty(&output)?);
                } else {
                    print!(
                        "{}",
                        report::render_cheapest(&series.destination, &cheapest, &config.currency)
                    );
                }
                Ok(())
            }
            Commands::Monthly { destination, json } => {
                let dataset = SeriesGenerator::generate(&config)?;
                let series = dataset.select(&destination)?;
                let monthly = Aggregator::monthly_average(&series.points)?;
                if json {
                    println!("{}", serde_json::to_string_pretty(&monthly)?);
                } else {
                    print!(
                        "{}",
                        report::render_monthly(&series.destination, &monthly, &config.currency)
                    );
                }
                Ok(())
            }
            Commands::Report { destination, json } => {
                let dataset = SeriesGenerator::generate(&config)?;
                let selection = match destination {
                    Some(d) => d,
                    None => dataset
                        .destinations()
                        .first()
                        .map(|d| d.name.clone())
                        .unwrap_or_default(),
                };
                let summary = Aggregator::summarize(&dataset, &selection)?;
                if json {
                    println!("{}", serde_json::to_string_pretty(&summary)?);
                } else {
                    print!("{}", report::render_report(&summary, &config.currency));
                }
                Ok(())
            }
        }
    }
}
