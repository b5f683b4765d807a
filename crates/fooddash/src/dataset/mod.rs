//! The prepared table and the predicates views are computed over.
//!
//! ```text
//!   DeliveryDataset ──filter(&DeliveryFilter)──▶ DeliveryDataset
//!         │
//!         └──▶ FilterOptions (unique values + date range)
//! ```

mod filter;
mod table;

pub use filter::{DeliveryFilter, Dimension, FilterOptions};
pub use table::DeliveryDataset;


#[cfg(test)]
mod tests {
    use super::testing::record;
    use super::*;
    use chrono::NaiveDate;

    fn dataset() -> DeliveryDataset {
        DeliveryDataset::from_records(vec![
            record("a", "c1", (2022, 2, 11), "Urban", "Jam", 20),
            record("b", "c1", (2022, 2, 12), "Urban", "Low", 25),
            record("c", "c2", (2022, 2, 13), "Metropolitian", "Jam", 30),
            record("d", "c3", (2022, 3, 1), "Semi-Urban", "High", 35),
        ])
    }

    fn ids(data: &DeliveryDataset) -> Vec<&str> {
        data.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let data = dataset();
        assert_eq!(data.filter(&DeliveryFilter::new()), data);
    }

    #[test]
    fn test_conjunction_across_dimensions() {
        let filter = DeliveryFilter::new()
            .select(Dimension::City, ["Urban"])
            .select(Dimension::Traffic, ["Jam"]);
        assert_eq!(ids(&dataset().filter(&filter)), vec!["a"]);
    }

    #[test]
    fn test_disjunction_within_dimension() {
        let filter = DeliveryFilter::new().select(Dimension::City, ["Urban", "Semi-Urban"]);
        assert_eq!(ids(&dataset().filter(&filter)), vec!["a", "b", "d"]);
    }

    #[test]
    fn test_empty_selection_rejects_all() {
        let filter = DeliveryFilter::new().select(Dimension::Weather, Vec::<String>::new());
        assert!(dataset().filter(&filter).is_empty());
    }

    #[test]
    fn test_until_is_inclusive() {
        let filter = DeliveryFilter::new().until(NaiveDate::from_ymd_opt(2022, 2, 12).unwrap());
        assert_eq!(ids(&dataset().filter(&filter)), vec!["a", "b"]);
    }

    #[test]
    fn test_filtered_rows_are_renumbered() {
        let filter = DeliveryFilter::new().select(Dimension::Traffic, ["Jam"]);
        let filtered = dataset().filter(&filter);
        assert_eq!(filtered.get(1).map(|r| r.id.as_str()), Some("c"));
        assert!(filtered.get(2).is_none());
    }

    #[test]
    fn test_options_and_select_all() {
        let data = dataset();
        let options = FilterOptions::from_dataset(&data);

        assert_eq!(
            options.values_for(Dimension::City).collect::<Vec<_>>(),
            vec!["Metropolitian", "Semi-Urban", "Urban"]
        );
        assert_eq!(options.first_date, NaiveDate::from_ymd_opt(2022, 2, 11));
        assert_eq!(options.last_date, NaiveDate::from_ymd_opt(2022, 3, 1));
        assert_eq!(data.filter(&options.select_all()), data);
    }

    #[test]
    fn test_options_on_empty_dataset() {
        let options = FilterOptions::from_dataset(&DeliveryDataset::default());
        assert!(options.first_date.is_none());
        assert_eq!(options.values_for(Dimension::Traffic).count(), 0);
        // No date bound and empty selections: nothing can pass
        assert!(options.select_all().until.is_none());
    }
}
