//! Writing a prepared dataset back out.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::dataset::DeliveryDataset;
use crate::error::{FooddashError, Result};
use crate::schema::columns;

/// Output format for an exported dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "tsv" => Ok(ExportFormat::Tsv),
            "json" => Ok(ExportFormat::Json),
            _ => Err(format!("Unknown format: {}. Use csv, tsv, or json.", s)),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Write every row of `dataset` to `writer`.
///
/// Columns keep their source names, followed by `week_of_year` and
/// `distance_km`. Dates are written as `DD-MM-YYYY`, the festival flag as
/// `Yes`/`No`, and delivery time as bare minutes (without the `(min) `
/// prefix of the raw export).
pub fn write_dataset(
    dataset: &DeliveryDataset,
    writer: impl Write,
    format: ExportFormat,
) -> Result<()> {
    match format {
        ExportFormat::Csv => write_delimited(dataset, writer, b','),
        ExportFormat::Tsv => write_delimited(dataset, writer, b'\t'),
        ExportFormat::Json => {
            serde_json::to_writer_pretty(writer, dataset.records())?;
            Ok(())
        }
    }
}

/// Source columns followed by the derived ones.
fn header() -> impl Iterator<Item = &'static str> {
    columns::REQUIRED
        .into_iter()
        .chain([columns::WEEK_OF_YEAR, columns::DISTANCE_KM])
}

/// The header is written up front so an empty dataset still yields a
/// loadable file.
fn write_delimited(dataset: &DeliveryDataset, writer: impl Write, delimiter: u8) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(header())?;
    for record in dataset {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush().map_err(|source| FooddashError::Io {
        path: "<writer>".into(),
        source,
    })?;
    Ok(())
}
