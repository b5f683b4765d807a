//! fooddash: preparation, filtering and reporting for food-delivery datasets.
//!
//! A raw delivery export is parsed into a string table, cleaned and enriched
//! by the [`Preparer`], filtered with the same predicates a dashboard sidebar
//! offers, and summarized into the numbers behind the company, courier and
//! restaurant views.
//!
//! # Core Principles
//!
//! - **Explicit input**: the preparer works on a table, never on a fixed path
//! - **Drop, don't impute**: rows with missing guarded fields are excluded
//! - **Immutable steps**: every stage yields a new value
//!
//! # Example
//!
//! ```no_run
//! use fooddash::{CompanyView, DeliveryFilter, Dimension, Fooddash};
//!
//! let loaded = Fooddash::new().load("train.csv").unwrap();
//! println!("Dropped {} incomplete rows", loaded.report.rows_dropped);
//!
//! let filter = DeliveryFilter::new()
//!     .select(Dimension::City, ["Urban"])
//!     .select(Dimension::Traffic, ["Jam"]);
//! let view = CompanyView::compute(&loaded.dataset.filter(&filter));
//! println!("Weeks covered: {}", view.orders_per_week.len());
//! ```

pub mod dataset;
pub mod error;
pub mod export;
pub mod input;
pub mod prepare;
pub mod schema;
pub mod views;

mod fooddash;

pub use crate::fooddash::{Fooddash, FooddashConfig, LoadResult};
pub use dataset::{DeliveryDataset, DeliveryFilter, Dimension, FilterOptions};
pub use error::{FooddashError, Result};
pub use export::{ExportFormat, write_dataset};
pub use input::{DataTable, Parser, ParserConfig, SourceMetadata};
pub use prepare::{PrepareConfig, PrepareReport, Prepared, Preparer, SentinelRule};
pub use schema::DeliveryRecord;
pub use views::{CompanyView, CourierView, RestaurantView};
