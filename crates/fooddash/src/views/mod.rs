//! Aggregated views over a (usually filtered) delivery dataset.
//!
//! Each view is plain data: the numbers one dashboard page shows. Group keys
//! come back sorted, and an empty dataset yields empty tables and `None`
//! scalars.

pub mod company;
pub mod courier;
pub mod restaurant;
pub mod stats;

pub use company::CompanyView;
pub use courier::{CourierView, DEFAULT_TOP_N};
pub use restaurant::RestaurantView;
pub use stats::Spread;
