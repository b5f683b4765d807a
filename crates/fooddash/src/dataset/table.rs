use chrono::NaiveDate;

use super::filter::DeliveryFilter;
use crate::schema::DeliveryRecord;

/// A prepared delivery table.
///
/// Row positions are the 0-based index: they are contiguous and follow the
/// source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeliveryDataset {
    records: Vec<DeliveryRecord>,
}

impl DeliveryDataset {
    /// Wrap prepared records, keeping their order.
    pub fn from_records(records: Vec<DeliveryRecord>) -> Self {
        Self { records }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[DeliveryRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &DeliveryRecord> {
        self.records.iter()
    }

    /// Row at a 0-based position.
    pub fn get(&self, index: usize) -> Option<&DeliveryRecord> {
        self.records.get(index)
    }

    /// Earliest and latest order date, if any rows exist.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.records.iter().map(|r| r.order_date).min()?;
        let max = self.records.iter().map(|r| r.order_date).max()?;
        Some((min, max))
    }

    /// A new dataset holding the rows that pass `filter`, renumbered from 0.
    pub fn filter(&self, filter: &DeliveryFilter) -> DeliveryDataset {
        let records = self
            .records
            .iter()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect();
        DeliveryDataset { records }
    }

    pub fn into_records(self) -> Vec<DeliveryRecord> {
        self.records
    }
}

impl<'a> IntoIterator for &'a DeliveryDataset {
    type Item = &'a DeliveryRecord;
    type IntoIter = std::slice::Iter<'a, DeliveryRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
