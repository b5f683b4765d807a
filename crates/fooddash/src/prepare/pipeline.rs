//! The dataset preparation pipeline.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::calendar::week_of_year;
use super::geo::{haversine_km, in_bounds};
use super::operations::{PrepareReport, PrepareStep};
use crate::dataset::DeliveryDataset;
use crate::error::{FooddashError, Result};
use crate::input::DataTable;
use crate::schema::columns::{self, ColumnIndex, REQUIRED};
use crate::schema::{DeliveryRecord, GeoPoint};

/// A column whose cells read as absent when they equal `marker`
/// (after trimming).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentinelRule {
    pub column: String,
    pub marker: String,
}

impl SentinelRule {
    pub fn new(column: impl Into<String>, marker: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            marker: marker.into(),
        }
    }
}

/// Configuration for the preparation pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepareConfig {
    /// Guarded columns and their missing-data markers.
    pub sentinels: Vec<SentinelRule>,
    /// Text that precedes the minutes in the delivery time column.
    pub time_marker: String,
    /// `chrono` format of the order date.
    pub date_format: String,
}

impl Default for PrepareConfig {
    fn default() -> Self {
        Self {
            sentinels: vec![
                SentinelRule::new(columns::COURIER_AGE, "NaN"),
                SentinelRule::new(columns::MULTIPLE_DELIVERIES, "NaN"),
                SentinelRule::new(columns::TRAFFIC, "NaN"),
                SentinelRule::new(columns::CITY, "NaN"),
                SentinelRule::new(columns::WEATHER, "conditions NaN"),
                SentinelRule::new(columns::FESTIVAL, "NaN"),
            ],
            time_marker: "(min) ".to_string(),
            date_format: "%d-%m-%Y".to_string(),
        }
    }
}

/// Output of a successful preparation run.
#[derive(Debug, Clone)]
pub struct Prepared {
    pub dataset: DeliveryDataset,
    pub report: PrepareReport,
}

/// A raw row tagged with its 1-based position in the source table.
#[derive(Debug, Clone)]
struct SourceRow {
    line: usize,
    cells: Vec<String>,
}

impl SourceRow {
    fn cell(&self, index: usize) -> &str {
        self.cells.get(index).map(String::as_str).unwrap_or("")
    }
}

/// A guarded column resolved to its position.
struct Guard<'a> {
    column: &'a str,
    position: usize,
    marker: &'a str,
}

impl Guard<'_> {
    /// The cell as an optional value: `None` when it carries the sentinel.
    fn read<'r>(&self, row: &'r SourceRow) -> Option<&'r str> {
        let value = row.cell(self.position);
        (value.trim() != self.marker).then_some(value)
    }
}

/// Turns a raw delivery table into a cleaned, enriched dataset.
pub struct Preparer {
    config: PrepareConfig,
}

impl Preparer {
    /// Create a preparer with the default configuration.
    pub fn new() -> Self {
        Self::with_config(PrepareConfig::default())
    }

    /// Create a preparer with custom configuration.
    pub fn with_config(config: PrepareConfig) -> Self {
        Self { config }
    }

    /// Access the active configuration.
    pub fn config(&self) -> &PrepareConfig {
        &self.config
    }

    /// Run every step over `raw` and return the prepared dataset.
    ///
    /// The input table is never modified. Any coercion failure aborts the
    /// whole run; there is no partial result.
    pub fn prepare(&self, raw: &DataTable) -> Result<Prepared> {
        let columns = ColumnIndex::resolve(raw)?;
        let guards = self.resolve_guards(raw)?;
        let mut report = PrepareReport::new(raw.row_count());

        let normalized = normalize_text(raw, &columns);
        report.record_step(PrepareStep::NormalizeText, normalized.len());
        debug!(rows = normalized.len(), "normalized categorical text");

        let complete = drop_incomplete(normalized, &guards, &mut report);
        report.record_step(PrepareStep::DropIncomplete, complete.len());
        debug!(
            kept = complete.len(),
            dropped = report.rows_dropped,
            "dropped incomplete rows"
        );

        let coerced = self.coerce_types(&complete, &columns)?;
        report.record_step(PrepareStep::CoerceTypes, coerced.len());

        let timed = self.extract_delivery_time(coerced, &complete, &columns)?;
        report.record_step(PrepareStep::ExtractDeliveryTime, timed.len());

        let weeked = derive_week_of_year(timed);
        report.record_step(PrepareStep::DeriveWeekOfYear, weeked.len());

        let located = derive_distance(weeked);
        report.record_step(PrepareStep::DeriveDistance, located.len());

        let dataset = DeliveryDataset::from_records(located);
        report.rows_out = dataset.len();
        report.record_step(PrepareStep::Finalize, dataset.len());

        if dataset.is_empty() && report.rows_in > 0 {
            warn!(rows_in = report.rows_in, "every row was dropped as incomplete");
        }
        info!(
            rows_in = report.rows_in,
            rows_dropped = report.rows_dropped,
            rows_out = report.rows_out,
            "prepared delivery dataset"
        );

        Ok(Prepared { dataset, report })
    }

    fn resolve_guards<'a>(&'a self, raw: &DataTable) -> Result<Vec<Guard<'a>>> {
        self.config
            .sentinels
            .iter()
            .map(|rule| {
                if !REQUIRED.iter().any(|c| *c == rule.column) {
                    return Err(FooddashError::Config(format!(
                        "sentinel rule names unknown column '{}'",
                        rule.column
                    )));
                }
                let position = raw
                    .column_index(&rule.column)
                    .ok_or_else(|| FooddashError::Schema {
                        column: rule.column.clone(),
                    })?;
                Ok(Guard {
                    column: &rule.column,
                    position,
                    marker: rule.marker.trim(),
                })
            })
            .collect()
    }

    /// Step 3: typed values for every column except the derived ones.
    ///
    /// Delivery time, week and distance are placeholders until their own
    /// steps fill them in.
    fn coerce_types(&self, rows: &[SourceRow], c: &ColumnIndex) -> Result<Vec<DeliveryRecord>> {
        rows.iter()
            .map(|row| {
                let restaurant = parse_point(
                    row,
                    (c.restaurant_latitude, columns::RESTAURANT_LATITUDE),
                    (c.restaurant_longitude, columns::RESTAURANT_LONGITUDE),
                )?;
                let destination = parse_point(
                    row,
                    (c.destination_latitude, columns::DESTINATION_LATITUDE),
                    (c.destination_longitude, columns::DESTINATION_LONGITUDE),
                )?;

                Ok(DeliveryRecord {
                    id: row.cell(c.id).to_string(),
                    courier_id: row.cell(c.courier_id).to_string(),
                    courier_age: parse_number(row, c.courier_age, columns::COURIER_AGE)?,
                    courier_rating: parse_rating(row, c.courier_rating)?,
                    restaurant_latitude: restaurant.latitude,
                    restaurant_longitude: restaurant.longitude,
                    destination_latitude: destination.latitude,
                    destination_longitude: destination.longitude,
                    order_date: self.parse_date(row, c.order_date)?,
                    weather: row.cell(c.weather).to_string(),
                    traffic: row.cell(c.traffic).to_string(),
                    vehicle_condition: parse_number(
                        row,
                        c.vehicle_condition,
                        columns::VEHICLE_CONDITION,
                    )?,
                    order_type: row.cell(c.order_type).to_string(),
                    vehicle_type: row.cell(c.vehicle_type).to_string(),
                    multiple_deliveries: parse_number(
                        row,
                        c.multiple_deliveries,
                        columns::MULTIPLE_DELIVERIES,
                    )?,
                    festival: parse_festival(row, c.festival)?,
                    city: row.cell(c.city).to_string(),
                    time_taken_min: 0,
                    week_of_year: 0,
                    distance_km: 0.0,
                })
            })
            .collect()
    }

    /// Step 4: minutes are whatever follows the time marker.
    fn extract_delivery_time(
        &self,
        records: Vec<DeliveryRecord>,
        rows: &[SourceRow],
        c: &ColumnIndex,
    ) -> Result<Vec<DeliveryRecord>> {
        let marker = self.config.time_marker.as_str();
        records
            .into_iter()
            .zip(rows)
            .map(|(record, row)| {
                let raw = row.cell(c.time_taken);
                let (_, minutes) = raw.split_once(marker).ok_or_else(|| {
                    FooddashError::malformed(
                        row.line,
                        columns::TIME_TAKEN,
                        raw,
                        format!("missing '{marker}' marker"),
                    )
                })?;
                let minutes = minutes.trim().parse::<u32>().map_err(|e| {
                    FooddashError::malformed(row.line, columns::TIME_TAKEN, raw, e.to_string())
                })?;
                Ok(DeliveryRecord {
                    time_taken_min: minutes,
                    ..record
                })
            })
            .collect()
    }

    fn parse_date(&self, row: &SourceRow, index: usize) -> Result<NaiveDate> {
        let raw = row.cell(index);
        NaiveDate::parse_from_str(raw.trim(), &self.config.date_format).map_err(|e| {
            FooddashError::malformed(row.line, columns::ORDER_DATE, raw, e.to_string())
        })
    }
}

impl Default for Preparer {
    fn default() -> Self {
        Self::new()
    }
}

/// Step 1: a copy of the table with the categorical columns trimmed.
fn normalize_text(raw: &DataTable, columns: &ColumnIndex) -> Vec<SourceRow> {
    let trimmed = columns.trimmed();
    raw.rows
        .iter()
        .enumerate()
        .map(|(i, cells)| {
            let cells = cells
                .iter()
                .enumerate()
                .map(|(col, value)| {
                    if trimmed.contains(&col) {
                        value.trim().to_string()
                    } else {
                        value.clone()
                    }
                })
                .collect();
            SourceRow { line: i + 1, cells }
        })
        .collect()
}

/// Step 2: keep only rows where every guarded field is present.
fn drop_incomplete(
    rows: Vec<SourceRow>,
    guards: &[Guard<'_>],
    report: &mut PrepareReport,
) -> Vec<SourceRow> {
    for guard in guards {
        report.dropped_by_column.entry(guard.column.to_string()).or_insert(0);
    }

    let before = rows.len();
    let kept: Vec<SourceRow> = rows
        .into_iter()
        .filter(|row| {
            let mut complete = true;
            for guard in guards {
                if guard.read(row).is_none() {
                    complete = false;
                    *report
                        .dropped_by_column
                        .entry(guard.column.to_string())
                        .or_insert(0) += 1;
                }
            }
            complete
        })
        .collect();

    report.rows_dropped = before - kept.len();
    kept
}

/// Step 5.
fn derive_week_of_year(records: Vec<DeliveryRecord>) -> Vec<DeliveryRecord> {
    records
        .into_iter()
        .map(|record| DeliveryRecord {
            week_of_year: week_of_year(record.order_date),
            ..record
        })
        .collect()
}

/// Step 6.
fn derive_distance(records: Vec<DeliveryRecord>) -> Vec<DeliveryRecord> {
    records
        .into_iter()
        .map(|record| DeliveryRecord {
            distance_km: haversine_km(record.restaurant(), record.destination()),
            ..record
        })
        .collect()
}

fn parse_number<T>(row: &SourceRow, index: usize, column: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = row.cell(index);
    raw.trim()
        .parse::<T>()
        .map_err(|e| FooddashError::malformed(row.line, column, raw, e.to_string()))
}

fn parse_float(row: &SourceRow, index: usize, column: &str) -> Result<f64> {
    let value: f64 = parse_number(row, index, column)?;
    if !value.is_finite() {
        return Err(FooddashError::malformed(
            row.line,
            column,
            row.cell(index),
            "not a finite number",
        ));
    }
    Ok(value)
}

fn parse_rating(row: &SourceRow, index: usize) -> Result<f64> {
    let rating = parse_float(row, index, columns::COURIER_RATING)?;
    if rating < 0.0 {
        return Err(FooddashError::malformed(
            row.line,
            columns::COURIER_RATING,
            row.cell(index),
            "rating cannot be negative",
        ));
    }
    Ok(rating)
}

fn parse_point(
    row: &SourceRow,
    (lat_index, lat_column): (usize, &str),
    (lon_index, lon_column): (usize, &str),
) -> Result<GeoPoint> {
    let point = GeoPoint::new(
        parse_float(row, lat_index, lat_column)?,
        parse_float(row, lon_index, lon_column)?,
    );
    if !in_bounds(point) {
        let (index, column) = if (-90.0..=90.0).contains(&point.latitude) {
            (lon_index, lon_column)
        } else {
            (lat_index, lat_column)
        };
        return Err(FooddashError::malformed(
            row.line,
            column,
            row.cell(index),
            "coordinate out of range",
        ));
    }
    Ok(point)
}

fn parse_festival(row: &SourceRow, index: usize) -> Result<bool> {
    match row.cell(index) {
        "Yes" => Ok(true),
        "No" => Ok(false),
        other => Err(FooddashError::malformed(
            row.line,
            columns::FESTIVAL,
            other,
            "expected 'Yes' or 'No'",
        )),
    }
}
