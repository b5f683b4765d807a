//! Courier view: age and vehicle extremes, ratings, fastest and slowest.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::stats::{Spread, mean};
use crate::dataset::DeliveryDataset;

/// Couriers listed per city in the fastest/slowest tables by default.
pub const DEFAULT_TOP_N: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourierRating {
    pub courier_id: String,
    pub mean_rating: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingByCategory {
    pub category: String,
    pub rating: Spread,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourierSpeed {
    pub city: String,
    pub courier_id: String,
    pub mean_minutes: f64,
}

/// Numbers behind the courier view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourierView {
    pub oldest_age: Option<u32>,
    pub youngest_age: Option<u32>,
    pub best_vehicle_condition: Option<u32>,
    pub worst_vehicle_condition: Option<u32>,
    /// Sorted by mean rating, highest first.
    pub rating_by_courier: Vec<CourierRating>,
    /// Sorted by mean rating, highest first.
    pub rating_by_traffic: Vec<RatingByCategory>,
    /// Sorted by mean rating, highest first.
    pub rating_by_weather: Vec<RatingByCategory>,
    /// Per city (alphabetical), the `top_n` lowest mean delivery times.
    pub fastest: Vec<CourierSpeed>,
    /// Per city (alphabetical), the `top_n` highest mean delivery times.
    pub slowest: Vec<CourierSpeed>,
}

impl CourierView {
    pub fn compute(dataset: &DeliveryDataset, top_n: usize) -> Self {
        let mut ratings_by_courier: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
        let mut ratings_by_traffic: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
        let mut ratings_by_weather: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
        let mut minutes: BTreeMap<(&str, &str), Vec<f64>> = BTreeMap::new();

        for r in dataset {
            ratings_by_courier
                .entry(r.courier_id.as_str())
                .or_default()
                .push(r.courier_rating);
            ratings_by_traffic
                .entry(r.traffic.as_str())
                .or_default()
                .push(r.courier_rating);
            ratings_by_weather
                .entry(r.weather.as_str())
                .or_default()
                .push(r.courier_rating);
            minutes
                .entry((r.city.as_str(), r.courier_id.as_str()))
                .or_default()
                .push(r.time_taken_min as f64);
        }

        let mut rating_by_courier: Vec<CourierRating> = ratings_by_courier
            .into_iter()
            .filter_map(|(courier, values)| {
                Some(CourierRating {
                    courier_id: courier.to_string(),
                    mean_rating: mean(&values)?,
                })
            })
            .collect();
        rating_by_courier.sort_by(|a, b| b.mean_rating.total_cmp(&a.mean_rating));

        let speeds: Vec<CourierSpeed> = minutes
            .into_iter()
            .filter_map(|((city, courier), values)| {
                Some(CourierSpeed {
                    city: city.to_string(),
                    courier_id: courier.to_string(),
                    mean_minutes: mean(&values)?,
                })
            })
            .collect();

        Self {
            oldest_age: dataset.iter().map(|r| r.courier_age).max(),
            youngest_age: dataset.iter().map(|r| r.courier_age).min(),
            best_vehicle_condition: dataset.iter().map(|r| r.vehicle_condition).max(),
            worst_vehicle_condition: dataset.iter().map(|r| r.vehicle_condition).min(),
            rating_by_courier,
            rating_by_traffic: ranked_spreads(ratings_by_traffic),
            rating_by_weather: ranked_spreads(ratings_by_weather),
            fastest: top_per_city(&speeds, top_n, |a, b| a.total_cmp(&b)),
            slowest: top_per_city(&speeds, top_n, |a, b| b.total_cmp(&a)),
        }
    }
}

fn ranked_spreads(groups: BTreeMap<&str, Vec<f64>>) -> Vec<RatingByCategory> {
    let mut ranked: Vec<RatingByCategory> = groups
        .into_iter()
        .filter_map(|(category, values)| {
            Some(RatingByCategory {
                category: category.to_string(),
                rating: Spread::of(&values)?,
            })
        })
        .collect();
    ranked.sort_by(|a, b| b.rating.mean.total_cmp(&a.rating.mean));
    ranked
}

/// `speeds` arrive sorted by (city, courier); ties on time keep courier order.
fn top_per_city(
    speeds: &[CourierSpeed],
    top_n: usize,
    order: impl Fn(f64, f64) -> Ordering,
) -> Vec<CourierSpeed> {
    let mut by_city: BTreeMap<&str, Vec<&CourierSpeed>> = BTreeMap::new();
    for speed in speeds {
        by_city.entry(speed.city.as_str()).or_default().push(speed);
    }

    by_city
        .into_values()
        .flat_map(|mut couriers| {
            couriers.sort_by(|a, b| order(a.mean_minutes, b.mean_minutes));
            couriers.into_iter().take(top_n).cloned()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::testing::record;
    use crate::schema::DeliveryRecord;

    fn rated(mut r: DeliveryRecord, rating: f64, age: u32, vehicle: u32) -> DeliveryRecord {
        r.courier_rating = rating;
        r.courier_age = age;
        r.vehicle_condition = vehicle;
        r
    }

    fn dataset() -> DeliveryDataset {
        DeliveryDataset::from_records(vec![
            rated(record("a", "c1", (2022, 2, 11), "Urban", "Jam", 40), 4.0, 22, 0),
            rated(record("b", "c1", (2022, 2, 12), "Urban", "Low", 20), 5.0, 22, 1),
            rated(record("c", "c2", (2022, 2, 13), "Urban", "Jam", 15), 4.8, 35, 2),
            rated(record("d", "c3", (2022, 2, 13), "Urban", "Low", 25), 3.0, 39, 1),
            rated(record("e", "c4", (2022, 2, 14), "Metropolitian", "Jam", 50), 4.6, 28, 2),
        ])
    }

    #[test]
    fn test_extremes() {
        let view = CourierView::compute(&dataset(), DEFAULT_TOP_N);
        assert_eq!(view.oldest_age, Some(39));
        assert_eq!(view.youngest_age, Some(22));
        assert_eq!(view.best_vehicle_condition, Some(2));
        assert_eq!(view.worst_vehicle_condition, Some(0));
    }

    #[test]
    fn test_rating_by_courier_sorted_desc() {
        let view = CourierView::compute(&dataset(), DEFAULT_TOP_N);
        let order: Vec<&str> = view
            .rating_by_courier
            .iter()
            .map(|r| r.courier_id.as_str())
            .collect();
        assert_eq!(order, vec!["c2", "c4", "c1", "c3"]);
        assert!((view.rating_by_courier[2].mean_rating - 4.5).abs() < 1e-9);
    }

    #[test]
    fn test_rating_by_traffic_has_spread() {
        let view = CourierView::compute(&dataset(), DEFAULT_TOP_N);
        let jam = &view.rating_by_traffic[0];
        assert_eq!(jam.category, "Jam");
        assert_eq!(jam.rating.count, 3);
        assert!((jam.rating.mean - 4.4666666).abs() < 1e-6);
        assert!(jam.rating.std.is_some());
        assert_eq!(view.rating_by_weather.len(), 1);
    }

    #[test]
    fn test_fastest_and_slowest_per_city() {
        let view = CourierView::compute(&dataset(), 2);
        let fastest: Vec<(&str, &str)> = view
            .fastest
            .iter()
            .map(|s| (s.city.as_str(), s.courier_id.as_str()))
            .collect();
        assert_eq!(
            fastest,
            vec![("Metropolitian", "c4"), ("Urban", "c2"), ("Urban", "c3")]
        );

        let slowest: Vec<(&str, &str)> = view
            .slowest
            .iter()
            .map(|s| (s.city.as_str(), s.courier_id.as_str()))
            .collect();
        // c1 averages 30 minutes in Urban
        assert_eq!(
            slowest,
            vec![("Metropolitian", "c4"), ("Urban", "c1"), ("Urban", "c3")]
        );
    }

    #[test]
    fn test_empty_dataset() {
        let view = CourierView::compute(&DeliveryDataset::default(), DEFAULT_TOP_N);
        assert_eq!(view, CourierView::default());
    }
}
