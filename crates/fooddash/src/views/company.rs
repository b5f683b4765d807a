//! Company-level view: order volume over time, traffic mix, hotspots.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::stats::median;
use crate::dataset::DeliveryDataset;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyOrders {
    pub date: NaiveDate,
    pub orders: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficShare {
    pub traffic: String,
    pub orders: usize,
    /// Percentage of all orders, 0..=100.
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityTrafficOrders {
    pub city: String,
    pub traffic: String,
    pub orders: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyOrders {
    pub week: u32,
    pub orders: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyCourierLoad {
    pub week: u32,
    pub orders: usize,
    pub couriers: usize,
    pub orders_per_courier: f64,
}

/// Median delivery destination of one (city, traffic) group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotspot {
    pub city: String,
    pub traffic: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Numbers behind the company view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyView {
    pub orders_per_day: Vec<DailyOrders>,
    pub traffic_share: Vec<TrafficShare>,
    pub orders_by_city_traffic: Vec<CityTrafficOrders>,
    pub orders_per_week: Vec<WeeklyOrders>,
    pub orders_per_courier_per_week: Vec<WeeklyCourierLoad>,
    pub hotspots: Vec<Hotspot>,
}

impl CompanyView {
    pub fn compute(dataset: &DeliveryDataset) -> Self {
        let mut per_day: BTreeMap<NaiveDate, usize> = BTreeMap::new();
        let mut per_traffic: BTreeMap<&str, usize> = BTreeMap::new();
        let mut per_city_traffic: BTreeMap<(&str, &str), usize> = BTreeMap::new();
        let mut per_week: BTreeMap<u32, (usize, BTreeSet<&str>)> = BTreeMap::new();
        let mut destinations: BTreeMap<(&str, &str), (Vec<f64>, Vec<f64>)> = BTreeMap::new();

        for r in dataset {
            *per_day.entry(r.order_date).or_default() += 1;
            *per_traffic.entry(r.traffic.as_str()).or_default() += 1;
            *per_city_traffic
                .entry((r.city.as_str(), r.traffic.as_str()))
                .or_default() += 1;

            let week = per_week.entry(r.week_of_year).or_default();
            week.0 += 1;
            week.1.insert(r.courier_id.as_str());

            let (lats, lons) = destinations
                .entry((r.city.as_str(), r.traffic.as_str()))
                .or_default();
            lats.push(r.destination_latitude);
            lons.push(r.destination_longitude);
        }

        let total = dataset.len();
        let traffic_share = per_traffic
            .into_iter()
            .map(|(traffic, orders)| TrafficShare {
                traffic: traffic.to_string(),
                orders,
                percent: 100.0 * orders as f64 / total as f64,
            })
            .collect();

        let hotspots = destinations
            .into_iter()
            .filter_map(|((city, traffic), (lats, lons))| {
                Some(Hotspot {
                    city: city.to_string(),
                    traffic: traffic.to_string(),
                    latitude: median(&lats)?,
                    longitude: median(&lons)?,
                })
            })
            .collect();

        Self {
            orders_per_day: per_day
                .into_iter()
                .map(|(date, orders)| DailyOrders { date, orders })
                .collect(),
            traffic_share,
            orders_by_city_traffic: per_city_traffic
                .into_iter()
                .map(|((city, traffic), orders)| CityTrafficOrders {
                    city: city.to_string(),
                    traffic: traffic.to_string(),
                    orders,
                })
                .collect(),
            orders_per_week: per_week
                .iter()
                .map(|(week, (orders, _))| WeeklyOrders {
                    week: *week,
                    orders: *orders,
                })
                .collect(),
            orders_per_courier_per_week: per_week
                .iter()
                .map(|(week, (orders, couriers))| WeeklyCourierLoad {
                    week: *week,
                    orders: *orders,
                    couriers: couriers.len(),
                    orders_per_courier: *orders as f64 / couriers.len() as f64,
                })
                .collect(),
            hotspots,
        }
    }
}
