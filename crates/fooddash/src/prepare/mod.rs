//! Dataset preparation: cleaning and feature derivation.
//!
//! ```text
//!   raw DataTable
//!        │  normalize text ─ drop incomplete ─ coerce types
//!        │  extract delivery time ─ week of year ─ distance
//!        ▼
//!   DeliveryDataset + PrepareReport
//! ```

pub mod calendar;
pub mod geo;
mod operations;
mod pipeline;

pub use operations::{PrepareReport, PrepareStep, StepSummary};
pub use pipeline::{PrepareConfig, Prepared, Preparer, SentinelRule};
