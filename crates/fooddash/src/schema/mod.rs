//! Schema of a delivery export: required columns and the typed record.

pub mod columns;
mod record;

pub use columns::ColumnIndex;
pub use record::{DeliveryRecord, GeoPoint};
