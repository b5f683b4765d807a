use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::table::DeliveryDataset;
use crate::schema::DeliveryRecord;

// ---------------------------------------------------------------------------
// Dimension – a categorical column a filter can select on
// ---------------------------------------------------------------------------

/// Categorical dimensions offered as set-membership filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Traffic,
    VehicleType,
    OrderType,
    City,
    Weather,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::Traffic,
        Dimension::VehicleType,
        Dimension::OrderType,
        Dimension::City,
        Dimension::Weather,
    ];

    /// The record's value along this dimension.
    pub fn value<'r>(&self, record: &'r DeliveryRecord) -> &'r str {
        match self {
            Dimension::Traffic => &record.traffic,
            Dimension::VehicleType => &record.vehicle_type,
            Dimension::OrderType => &record.order_type,
            Dimension::City => &record.city,
            Dimension::Weather => &record.weather,
        }
    }

    /// Source column backing this dimension.
    pub fn column(&self) -> &'static str {
        use crate::schema::columns;
        match self {
            Dimension::Traffic => columns::TRAFFIC,
            Dimension::VehicleType => columns::VEHICLE_TYPE,
            Dimension::OrderType => columns::ORDER_TYPE,
            Dimension::City => columns::CITY,
            Dimension::Weather => columns::WEATHER,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Dimension::Traffic => "traffic",
            Dimension::VehicleType => "vehicle type",
            Dimension::OrderType => "order type",
            Dimension::City => "city",
            Dimension::Weather => "weather",
        };
        f.write_str(label)
    }
}

// ---------------------------------------------------------------------------
// DeliveryFilter – conjunctive predicate over the prepared table
// ---------------------------------------------------------------------------

/// Row predicate combining an inclusive date upper bound with per-dimension
/// selections.
///
/// A row passes when it passes every constraint (AND across dimensions) and
/// its value is one of the selected values of each constrained dimension
/// (OR within a dimension). A dimension without a selection does not
/// constrain; a dimension whose selection is empty rejects every row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryFilter {
    /// Keep orders placed on or before this date.
    pub until: Option<NaiveDate>,
    /// Selected values per constrained dimension.
    pub selections: BTreeMap<Dimension, BTreeSet<String>>,
}

impl DeliveryFilter {
    /// A filter that keeps every row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the inclusive date upper bound.
    pub fn until(mut self, date: NaiveDate) -> Self {
        self.until = Some(date);
        self
    }

    /// Restrict `dimension` to `values`, replacing any earlier selection.
    pub fn select<I, S>(mut self, dimension: Dimension, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selections
            .insert(dimension, values.into_iter().map(Into::into).collect());
        self
    }

    /// Whether a single record passes.
    pub fn matches(&self, record: &DeliveryRecord) -> bool {
        if let Some(until) = self.until {
            if record.order_date > until {
                return false;
            }
        }
        self.selections
            .iter()
            .all(|(dimension, selected)| selected.contains(dimension.value(record)))
    }
}

// ---------------------------------------------------------------------------
// FilterOptions – what a sidebar would offer for a dataset
// ---------------------------------------------------------------------------

/// The values each filter can take on a given dataset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Earliest order date.
    pub first_date: Option<NaiveDate>,
    /// Latest order date; the default upper bound.
    pub last_date: Option<NaiveDate>,
    /// Sorted unique values per dimension.
    pub values: BTreeMap<Dimension, BTreeSet<String>>,
}

impl FilterOptions {
    /// Collect the unique values and date range of a dataset.
    pub fn from_dataset(dataset: &DeliveryDataset) -> Self {
        let mut values: BTreeMap<Dimension, BTreeSet<String>> = Dimension::ALL
            .iter()
            .map(|d| (*d, BTreeSet::new()))
            .collect();

        for record in dataset {
            for (dimension, seen) in values.iter_mut() {
                let value = dimension.value(record);
                if !seen.contains(value) {
                    seen.insert(value.to_string());
                }
            }
        }

        let range = dataset.date_range();
        Self {
            first_date: range.map(|(first, _)| first),
            last_date: range.map(|(_, last)| last),
            values,
        }
    }

    /// Unique values for one dimension.
    pub fn values_for(&self, dimension: Dimension) -> impl Iterator<Item = &str> {
        self.values
            .get(&dimension)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }

    /// The default filter: everything selected, bounded by the last date.
    pub fn select_all(&self) -> DeliveryFilter {
        DeliveryFilter {
            until: self.last_date,
            selections: self.values.clone(),
        }
    }
}
