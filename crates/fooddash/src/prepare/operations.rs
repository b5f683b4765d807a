//! Pipeline steps and the report they leave behind.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One stage of the preparation pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrepareStep {
    NormalizeText,
    DropIncomplete,
    CoerceTypes,
    ExtractDeliveryTime,
    DeriveWeekOfYear,
    DeriveDistance,
    Finalize,
}

impl PrepareStep {
    /// Get a human-readable description of the step.
    pub fn description(&self) -> &'static str {
        match self {
            PrepareStep::NormalizeText => "Trim whitespace on identifier and categorical columns",
            PrepareStep::DropIncomplete => "Drop rows with a missing guarded field",
            PrepareStep::CoerceTypes => "Coerce numeric, date and flag columns",
            PrepareStep::ExtractDeliveryTime => "Extract delivery minutes from the time text",
            PrepareStep::DeriveWeekOfYear => "Derive Sunday-anchored week of year",
            PrepareStep::DeriveDistance => "Derive haversine distance in km",
            PrepareStep::Finalize => "Renumber rows contiguously from 0",
        }
    }
}

/// Row count observed after a step ran.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepSummary {
    pub step: PrepareStep,
    /// Rows in the table once the step finished.
    pub rows: usize,
    pub description: String,
}

/// Result of a preparation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepareReport {
    /// Rows in the raw table.
    pub rows_in: usize,

    /// Rows removed for carrying a missing-data sentinel.
    pub rows_dropped: usize,

    /// Rows missing each guarded column. A row missing two fields counts
    /// under both, so the sum can exceed `rows_dropped`.
    pub dropped_by_column: IndexMap<String, usize>,

    /// Rows in the prepared dataset.
    pub rows_out: usize,

    /// Steps in the order they ran.
    pub steps: Vec<StepSummary>,
}

impl PrepareReport {
    /// Create an empty report for a table of `rows_in` rows.
    pub fn new(rows_in: usize) -> Self {
        Self {
            rows_in,
            rows_dropped: 0,
            dropped_by_column: IndexMap::new(),
            rows_out: 0,
            steps: Vec::new(),
        }
    }

    /// Record that a step finished with `rows` rows.
    pub fn record_step(&mut self, step: PrepareStep, rows: usize) {
        self.steps.push(StepSummary {
            step,
            rows,
            description: step.description().to_string(),
        });
    }

    /// Share of input rows that survived, in `0.0..=1.0`.
    pub fn retention(&self) -> f64 {
        if self.rows_in == 0 {
            0.0
        } else {
            self.rows_out as f64 / self.rows_in as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_step_keeps_order() {
        let mut report = PrepareReport::new(10);
        report.record_step(PrepareStep::NormalizeText, 10);
        report.record_step(PrepareStep::DropIncomplete, 7);

        let steps: Vec<PrepareStep> = report.steps.iter().map(|s| s.step).collect();
        assert_eq!(steps, vec![PrepareStep::NormalizeText, PrepareStep::DropIncomplete]);
        assert_eq!(report.steps[1].rows, 7);
    }

    #[test]
    fn test_retention() {
        let mut report = PrepareReport::new(4);
        report.rows_out = 3;
        assert!((report.retention() - 0.75).abs() < f64::EPSILON);
        assert_eq!(PrepareReport::new(0).retention(), 0.0);
    }

    #[test]
    fn test_step_serializes_snake_case() {
        let json = serde_json::to_string(&PrepareStep::ExtractDeliveryTime).unwrap();
        assert_eq!(json, "\"extract_delivery_time\"");
    }
}
