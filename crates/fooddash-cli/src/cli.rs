//! CLI argument definitions using clap.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use fooddash::{DeliveryFilter, Dimension, ExportFormat};

/// fooddash: prepare and summarize food-delivery datasets
#[derive(Parser)]
#[command(name = "fooddash")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Prepare a delivery export and report what was kept and dropped
    Inspect {
        /// Path to the delivery export (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Prepare a delivery export and write the cleaned table
    Prepare {
        /// Path to the delivery export (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output path (default: <file>_prepared.<format>)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "csv")]
        format: OutputFormat,
    },

    /// Order volume by day, week, traffic and city
    Company {
        /// Path to the delivery export (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        filters: FilterArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Courier ages, ratings and delivery speeds
    Couriers {
        /// Path to the delivery export (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        filters: FilterArgs,

        /// Couriers listed per city in the fastest/slowest tables
        #[arg(long, default_value_t = fooddash::views::DEFAULT_TOP_N)]
        top: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Distances and delivery times by city, traffic and festival
    Restaurants {
        /// Path to the delivery export (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        filters: FilterArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Row filters shared by the view commands. Unset options do not constrain.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Keep orders placed on or before this date (DD-MM-YYYY)
    #[arg(long, value_name = "DATE", value_parser = parse_date)]
    pub until: Option<NaiveDate>,

    /// Traffic densities to keep (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub traffic: Option<Vec<String>>,

    /// Vehicle types to keep (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub vehicle: Option<Vec<String>>,

    /// Order types to keep (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub order_type: Option<Vec<String>>,

    /// Cities to keep (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub city: Option<Vec<String>>,

    /// Weather conditions to keep, e.g. "conditions Sunny" (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub weather: Option<Vec<String>>,
}

impl FilterArgs {
    pub fn to_filter(&self) -> DeliveryFilter {
        let mut filter = DeliveryFilter::new();
        if let Some(date) = self.until {
            filter = filter.until(date);
        }

        let selections = [
            (Dimension::Traffic, &self.traffic),
            (Dimension::VehicleType, &self.vehicle),
            (Dimension::OrderType, &self.order_type),
            (Dimension::City, &self.city),
            (Dimension::Weather, &self.weather),
        ];
        for (dimension, values) in selections {
            if let Some(values) = values {
                filter = filter.select(dimension, values.iter().map(|v| v.trim().to_string()));
            }
        }
        filter
    }

    /// Whether any option was given.
    pub fn is_active(&self) -> bool {
        self.to_filter() != DeliveryFilter::new()
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%d-%m-%Y")
        .map_err(|e| format!("expected DD-MM-YYYY, got '{}': {}", s, e))
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Csv,
    Tsv,
    Json,
}

impl From<OutputFormat> for ExportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Csv => ExportFormat::Csv,
            OutputFormat::Tsv => ExportFormat::Tsv,
            OutputFormat::Json => ExportFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_args_parse() {
        let cli = Cli::try_parse_from([
            "fooddash",
            "company",
            "train.csv",
            "--until",
            "19-03-2022",
            "--city",
            "Urban,Metropolitian",
            "--traffic",
            "Jam",
        ])
        .unwrap();

        let Commands::Company { filters, .. } = cli.command else {
            panic!("expected company command");
        };
        let filter = filters.to_filter();
        assert_eq!(filter.until, NaiveDate::from_ymd_opt(2022, 3, 19));
        assert_eq!(filter.selections[&Dimension::City].len(), 2);
        assert_eq!(filter.selections.len(), 2);
    }

    #[test]
    fn test_no_filters_is_unconstrained() {
        let args = FilterArgs::default();
        assert!(!args.is_active());
        assert_eq!(args.to_filter(), DeliveryFilter::new());
    }

    #[test]
    fn test_bad_date_is_rejected() {
        let result = Cli::try_parse_from(["fooddash", "company", "train.csv", "--until", "2022-03-19"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_couriers_default_top() {
        let cli = Cli::try_parse_from(["fooddash", "couriers", "train.csv"]).unwrap();
        let Commands::Couriers { top, .. } = cli.command else {
            panic!("expected couriers command");
        };
        assert_eq!(top, fooddash::views::DEFAULT_TOP_N);
    }
}
