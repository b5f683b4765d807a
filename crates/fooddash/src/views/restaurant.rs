//! Restaurant view: distances and delivery times by context.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::stats::{Spread, mean};
use crate::dataset::DeliveryDataset;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeByCategory {
    pub category: String,
    pub minutes: Spread,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeByCityTraffic {
    pub city: String,
    pub traffic: String,
    pub minutes: Spread,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceByCity {
    pub city: String,
    pub mean_km: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderTypeShare {
    pub order_type: String,
    pub orders: usize,
    /// Fraction of all orders, 0..=1.
    pub share: f64,
}

/// Numbers behind the restaurant view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RestaurantView {
    pub distinct_couriers: usize,
    pub mean_distance_km: Option<f64>,
    pub festival_time: Option<Spread>,
    pub non_festival_time: Option<Spread>,
    pub time_by_city: Vec<TimeByCategory>,
    pub time_by_city_traffic: Vec<TimeByCityTraffic>,
    pub distance_by_city: Vec<DistanceByCity>,
    pub time_by_order_type: Vec<TimeByCategory>,
    pub order_type_share: Vec<OrderTypeShare>,
}

impl RestaurantView {
    pub fn compute(dataset: &DeliveryDataset) -> Self {
        let mut couriers: BTreeSet<&str> = BTreeSet::new();
        let mut distances: Vec<f64> = Vec::with_capacity(dataset.len());
        let mut festival: Vec<f64> = Vec::new();
        let mut non_festival: Vec<f64> = Vec::new();
        let mut by_city: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
        let mut by_city_traffic: BTreeMap<(&str, &str), Vec<f64>> = BTreeMap::new();
        let mut distance_by_city: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
        let mut by_order_type: BTreeMap<&str, Vec<f64>> = BTreeMap::new();

        for r in dataset {
            let minutes = r.time_taken_min as f64;
            couriers.insert(r.courier_id.as_str());
            distances.push(r.distance_km);
            if r.festival {
                festival.push(minutes);
            } else {
                non_festival.push(minutes);
            }
            by_city.entry(r.city.as_str()).or_default().push(minutes);
            by_city_traffic
                .entry((r.city.as_str(), r.traffic.as_str()))
                .or_default()
                .push(minutes);
            distance_by_city
                .entry(r.city.as_str())
                .or_default()
                .push(r.distance_km);
            by_order_type
                .entry(r.order_type.as_str())
                .or_default()
                .push(minutes);
        }

        let total = dataset.len();
        let order_type_share = by_order_type
            .iter()
            .map(|(order_type, values)| OrderTypeShare {
                order_type: order_type.to_string(),
                orders: values.len(),
                share: values.len() as f64 / total as f64,
            })
            .collect();

        Self {
            distinct_couriers: couriers.len(),
            mean_distance_km: mean(&distances),
            festival_time: Spread::of(&festival),
            non_festival_time: Spread::of(&non_festival),
            time_by_city: category_spreads(&by_city),
            time_by_city_traffic: by_city_traffic
                .into_iter()
                .filter_map(|((city, traffic), values)| {
                    Some(TimeByCityTraffic {
                        city: city.to_string(),
                        traffic: traffic.to_string(),
                        minutes: Spread::of(&values)?,
                    })
                })
                .collect(),
            distance_by_city: distance_by_city
                .into_iter()
                .filter_map(|(city, values)| {
                    Some(DistanceByCity {
                        city: city.to_string(),
                        mean_km: mean(&values)?,
                    })
                })
                .collect(),
            time_by_order_type: category_spreads(&by_order_type),
            order_type_share,
        }
    }
}

fn category_spreads(groups: &BTreeMap<&str, Vec<f64>>) -> Vec<TimeByCategory> {
    groups
        .iter()
        .filter_map(|(category, values)| {
            Some(TimeByCategory {
                category: category.to_string(),
                minutes: Spread::of(values)?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::testing::record;
    use crate::schema::DeliveryRecord;

    fn shaped(mut r: DeliveryRecord, festival: bool, order_type: &str, km: f64) -> DeliveryRecord {
        r.festival = festival;
        r.order_type = order_type.to_string();
        r.distance_km = km;
        r
    }

    fn dataset() -> DeliveryDataset {
        DeliveryDataset::from_records(vec![
            shaped(record("a", "c1", (2022, 2, 11), "Urban", "Jam", 20), false, "Meal", 2.0),
            shaped(record("b", "c1", (2022, 2, 12), "Urban", "Low", 30), false, "Snack", 4.0),
            shaped(record("c", "c2", (2022, 2, 13), "Metropolitian", "Jam", 40), true, "Meal", 6.0),
            shaped(record("d", "c3", (2022, 2, 13), "Metropolitian", "Jam", 50), true, "Meal", 8.0),
        ])
    }

    #[test]
    fn test_headline_metrics() {
        let view = RestaurantView::compute(&dataset());
        assert_eq!(view.distinct_couriers, 3);
        assert_eq!(view.mean_distance_km, Some(5.0));

        let fest = view.festival_time.unwrap();
        assert_eq!(fest.count, 2);
        assert_eq!(fest.mean, 45.0);
        assert!((fest.std.unwrap() - 7.0710678).abs() < 1e-6);
        assert_eq!(view.non_festival_time.unwrap().mean, 25.0);
    }

    #[test]
    fn test_time_by_city_and_traffic() {
        let view = RestaurantView::compute(&dataset());
        let cities: Vec<(&str, f64)> = view
            .time_by_city
            .iter()
            .map(|t| (t.category.as_str(), t.minutes.mean))
            .collect();
        assert_eq!(cities, vec![("Metropolitian", 45.0), ("Urban", 25.0)]);

        assert_eq!(view.time_by_city_traffic.len(), 3);
        let urban_low = &view.time_by_city_traffic[2];
        assert_eq!((urban_low.city.as_str(), urban_low.traffic.as_str()), ("Urban", "Low"));
        assert!(urban_low.minutes.std.is_none());
    }

    #[test]
    fn test_distance_by_city() {
        let view = RestaurantView::compute(&dataset());
        assert_eq!(
            view.distance_by_city,
            vec![
                DistanceByCity { city: "Metropolitian".into(), mean_km: 7.0 },
                DistanceByCity { city: "Urban".into(), mean_km: 3.0 },
            ]
        );
    }

    #[test]
    fn test_order_types() {
        let view = RestaurantView::compute(&dataset());
        assert_eq!(view.time_by_order_type[0].category, "Meal");
        assert!((view.time_by_order_type[0].minutes.mean - 36.6666666).abs() < 1e-6);
        assert_eq!(view.order_type_share[0].orders, 3);
        assert!((view.order_type_share[1].share - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_empty_dataset() {
        let view = RestaurantView::compute(&DeliveryDataset::default());
        assert_eq!(view, RestaurantView::default());
    }
}
