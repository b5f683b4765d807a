//! Source column names and their resolution against a parsed table.

use crate::error::{FooddashError, Result};
use crate::input::DataTable;

pub const ID: &str = "ID";
pub const COURIER_ID: &str = "Delivery_person_ID";
pub const COURIER_AGE: &str = "Delivery_person_Age";
pub const COURIER_RATING: &str = "Delivery_person_Ratings";
pub const RESTAURANT_LATITUDE: &str = "Restaurant_latitude";
pub const RESTAURANT_LONGITUDE: &str = "Restaurant_longitude";
pub const DESTINATION_LATITUDE: &str = "Delivery_location_latitude";
pub const DESTINATION_LONGITUDE: &str = "Delivery_location_longitude";
pub const ORDER_DATE: &str = "Order_Date";
pub const WEATHER: &str = "Weatherconditions";
pub const TRAFFIC: &str = "Road_traffic_density";
pub const VEHICLE_CONDITION: &str = "Vehicle_condition";
pub const ORDER_TYPE: &str = "Type_of_order";
pub const VEHICLE_TYPE: &str = "Type_of_vehicle";
pub const MULTIPLE_DELIVERIES: &str = "multiple_deliveries";
pub const FESTIVAL: &str = "Festival";
pub const CITY: &str = "City";
pub const TIME_TAKEN: &str = "Time_taken(min)";

/// Derived column names, as written by the exporter.
pub const WEEK_OF_YEAR: &str = "week_of_year";
pub const DISTANCE_KM: &str = "distance_km";

/// Every column a delivery export must carry, in source order.
pub const REQUIRED: [&str; 18] = [
    ID,
    COURIER_ID,
    COURIER_AGE,
    COURIER_RATING,
    RESTAURANT_LATITUDE,
    RESTAURANT_LONGITUDE,
    DESTINATION_LATITUDE,
    DESTINATION_LONGITUDE,
    ORDER_DATE,
    WEATHER,
    TRAFFIC,
    VEHICLE_CONDITION,
    ORDER_TYPE,
    VEHICLE_TYPE,
    MULTIPLE_DELIVERIES,
    FESTIVAL,
    CITY,
    TIME_TAKEN,
];

/// Categorical columns whose surrounding whitespace is trimmed.
pub const TRIMMED: [&str; 7] = [
    ID,
    COURIER_ID,
    TRAFFIC,
    ORDER_TYPE,
    VEHICLE_TYPE,
    FESTIVAL,
    CITY,
];

/// Positions of the required columns within one particular table.
///
/// Resolution happens once per table so the per-row code never searches
/// headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndex {
    pub id: usize,
    pub courier_id: usize,
    pub courier_age: usize,
    pub courier_rating: usize,
    pub restaurant_latitude: usize,
    pub restaurant_longitude: usize,
    pub destination_latitude: usize,
    pub destination_longitude: usize,
    pub order_date: usize,
    pub weather: usize,
    pub traffic: usize,
    pub vehicle_condition: usize,
    pub order_type: usize,
    pub vehicle_type: usize,
    pub multiple_deliveries: usize,
    pub festival: usize,
    pub city: usize,
    pub time_taken: usize,
}

impl ColumnIndex {
    /// Resolve all required columns, failing on the first missing one
    /// (in source column order).
    pub fn resolve(table: &DataTable) -> Result<Self> {
        if let Some(missing) = REQUIRED.iter().find(|c| table.column_index(c).is_none()) {
            return Err(FooddashError::Schema {
                column: missing.to_string(),
            });
        }
        let at = |name: &str| table.column_index(name).unwrap_or_default();

        Ok(Self {
            id: at(ID),
            courier_id: at(COURIER_ID),
            courier_age: at(COURIER_AGE),
            courier_rating: at(COURIER_RATING),
            restaurant_latitude: at(RESTAURANT_LATITUDE),
            restaurant_longitude: at(RESTAURANT_LONGITUDE),
            destination_latitude: at(DESTINATION_LATITUDE),
            destination_longitude: at(DESTINATION_LONGITUDE),
            order_date: at(ORDER_DATE),
            weather: at(WEATHER),
            traffic: at(TRAFFIC),
            vehicle_condition: at(VEHICLE_CONDITION),
            order_type: at(ORDER_TYPE),
            vehicle_type: at(VEHICLE_TYPE),
            multiple_deliveries: at(MULTIPLE_DELIVERIES),
            festival: at(FESTIVAL),
            city: at(CITY),
            time_taken: at(TIME_TAKEN),
        })
    }

    /// Positions of the columns that get trimmed during normalization.
    pub fn trimmed(&self) -> [usize; TRIMMED.len()] {
        [
            self.id,
            self.courier_id,
            self.traffic,
            self.order_type,
            self.vehicle_type,
            self.festival,
            self.city,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_with(headers: &[&str]) -> DataTable {
        DataTable::new(
            headers.iter().map(|h| h.to_string()).collect(),
            vec![vec![String::new(); headers.len()]],
            b',',
        )
    }

    #[test]
    fn test_resolve_finds_columns_in_any_order() {
        let mut headers: Vec<&str> = REQUIRED.to_vec();
        headers.reverse();
        headers.insert(3, "extra");
        let index = ColumnIndex::resolve(&table_with(&headers)).unwrap();

        assert_eq!(index.time_taken, 0);
        assert_eq!(index.id, headers.len() - 1);
        assert_eq!(index.trimmed()[0], index.id);
    }

    #[test]
    fn test_resolve_reports_missing_column() {
        let headers: Vec<&str> = REQUIRED.iter().copied().filter(|c| *c != CITY).collect();
        let err = ColumnIndex::resolve(&table_with(&headers)).unwrap_err();

        match err {
            FooddashError::Schema { column } => assert_eq!(column, CITY),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        let headers: Vec<&str> = REQUIRED
            .iter()
            .map(|c| if *c == ID { "id" } else { c })
            .collect();
        assert!(ColumnIndex::resolve(&table_with(&headers)).is_err());
    }
}
