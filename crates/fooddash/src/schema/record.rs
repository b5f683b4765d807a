//! The typed, cleaned delivery record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// One prepared row of a delivery export.
///
/// Field names serialize to the source column names so an exported table
/// lines up with the file it came from; the two derived columns follow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryRecord {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Delivery_person_ID")]
    pub courier_id: String,
    #[serde(rename = "Delivery_person_Age")]
    pub courier_age: u32,
    #[serde(rename = "Delivery_person_Ratings")]
    pub courier_rating: f64,
    #[serde(rename = "Restaurant_latitude")]
    pub restaurant_latitude: f64,
    #[serde(rename = "Restaurant_longitude")]
    pub restaurant_longitude: f64,
    #[serde(rename = "Delivery_location_latitude")]
    pub destination_latitude: f64,
    #[serde(rename = "Delivery_location_longitude")]
    pub destination_longitude: f64,
    #[serde(rename = "Order_Date", with = "day_month_year")]
    pub order_date: NaiveDate,
    /// Kept verbatim (e.g. `conditions Sunny`); filters match these labels.
    #[serde(rename = "Weatherconditions")]
    pub weather: String,
    #[serde(rename = "Road_traffic_density")]
    pub traffic: String,
    #[serde(rename = "Vehicle_condition")]
    pub vehicle_condition: u32,
    #[serde(rename = "Type_of_order")]
    pub order_type: String,
    #[serde(rename = "Type_of_vehicle")]
    pub vehicle_type: String,
    #[serde(rename = "multiple_deliveries")]
    pub multiple_deliveries: u32,
    #[serde(rename = "Festival", with = "yes_no")]
    pub festival: bool,
    #[serde(rename = "City")]
    pub city: String,
    /// Delivery time in whole minutes.
    #[serde(rename = "Time_taken(min)")]
    pub time_taken_min: u32,
    /// Sunday-anchored week of the order date, 0..=53.
    pub week_of_year: u32,
    /// Great-circle distance from restaurant to destination.
    pub distance_km: f64,
}

impl DeliveryRecord {
    pub fn restaurant(&self) -> GeoPoint {
        GeoPoint::new(self.restaurant_latitude, self.restaurant_longitude)
    }

    pub fn destination(&self) -> GeoPoint {
        GeoPoint::new(self.destination_latitude, self.destination_longitude)
    }
}

mod day_month_year {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%d-%m-%Y";

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}

mod yes_no {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(flag: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(if *flag { "Yes" } else { "No" })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        match String::deserialize(deserializer)?.as_str() {
            "Yes" => Ok(true),
            "No" => Ok(false),
            other => Err(serde::de::Error::custom(format!(
                "expected 'Yes' or 'No', got '{other}'"
            ))),
        }
    }
}
