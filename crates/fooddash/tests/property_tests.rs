//! Property-based tests for fooddash.
//!
//! These tests use proptest to generate random inputs and verify that the
//! preparation helpers and filters keep their invariants.
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p fooddash --test property_tests
//!
//! # Run with more cases (slower but more thorough)
//! PROPTEST_CASES=10000 cargo test -p fooddash --test property_tests
//! ```

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;

use fooddash::prepare::calendar::week_of_year;
use fooddash::prepare::geo::{EARTH_RADIUS_KM, haversine_km};
use fooddash::schema::GeoPoint;
use fooddash::{DeliveryDataset, DeliveryFilter, Dimension, FilterOptions, Fooddash};

const HEADER: &str = "ID,Delivery_person_ID,Delivery_person_Age,Delivery_person_Ratings,\
Restaurant_latitude,Restaurant_longitude,Delivery_location_latitude,Delivery_location_longitude,\
Order_Date,Weatherconditions,Road_traffic_density,Vehicle_condition,Type_of_order,Type_of_vehicle,\
multiple_deliveries,Festival,City,Time_taken(min)";

// =============================================================================
// Test Strategies
// =============================================================================

fn geo_point() -> impl Strategy<Value = GeoPoint> {
    (-90.0f64..=90.0, -180.0f64..=180.0).prop_map(|(lat, lon)| GeoPoint::new(lat, lon))
}

fn order_date() -> impl Strategy<Value = NaiveDate> {
    (1990i32..2040, 1u32..=366).prop_filter_map("valid ordinal", |(year, ordinal)| {
        NaiveDate::from_yo_opt(year, ordinal)
    })
}

fn category(choices: &'static [&'static str]) -> impl Strategy<Value = String> {
    prop::sample::select(choices).prop_map(str::to_string)
}

/// One raw export row: mostly well formed, padded like the real data, with
/// sentinels mixed in.
fn raw_row() -> impl Strategy<Value = String> {
    (
        (
            "[0-9a-f]{4}",
            category(&["BANGRES18DEL02", "INDORES13DEL02", "MYSRES15DEL02"]),
            prop_oneof![(18u32..50).prop_map(|a| a.to_string()), Just("NaN ".to_string())],
            1.0f64..=5.0,
            geo_point(),
            geo_point(),
            order_date(),
        ),
        (
            category(&["conditions Sunny", "conditions Fog", "conditions NaN"]),
            category(&["Low ", "Medium ", "High ", "Jam ", "NaN "]),
            0u32..3,
            category(&["Snack ", "Meal ", "Drinks ", "Buffet "]),
            category(&["motorcycle ", "scooter ", "electric_scooter "]),
            prop_oneof![(0u32..4).prop_map(|m| m.to_string()), Just("NaN ".to_string())],
            category(&["Yes ", "No ", "NaN "]),
            category(&["Urban ", "Metropolitian ", "Semi-Urban ", "NaN "]),
            10u32..60,
        ),
    )
        .prop_map(
            |(
                (id, courier, age, rating, restaurant, destination, date),
                (weather, traffic, condition, order, vehicle, multiple, festival, city, minutes),
            )| {
                format!(
                    "0x{id} ,{courier} ,{age},{rating:.1},{},{},{},{},{},{weather},{traffic},\
{condition},{order},{vehicle},{multiple},{festival},{city},(min) {minutes}",
                    restaurant.latitude,
                    restaurant.longitude,
                    destination.latitude,
                    destination.longitude,
                    date.format("%d-%m-%Y"),
                )
            },
        )
}

fn raw_export() -> impl Strategy<Value = String> {
    prop::collection::vec(raw_row(), 1..30).prop_map(|rows| {
        let mut content = String::from(HEADER);
        for row in rows {
            content.push('\n');
            content.push_str(&row);
        }
        content
    })
}

fn prepared() -> impl Strategy<Value = DeliveryDataset> {
    raw_export().prop_map(|content| {
        Fooddash::new()
            .load_reader(content.as_bytes())
            .map(|prepared| prepared.dataset)
            .unwrap_or_default()
    })
}

// =============================================================================
// Distance Properties
// =============================================================================

proptest! {
    #[test]
    fn distance_to_self_is_zero(p in geo_point()) {
        prop_assert_eq!(haversine_km(p, p), 0.0);
    }

    #[test]
    fn distance_is_symmetric(a in geo_point(), b in geo_point()) {
        let ab = haversine_km(a, b);
        let ba = haversine_km(b, a);
        prop_assert!((ab - ba).abs() < 1e-6, "{} != {}", ab, ba);
    }

    #[test]
    fn distance_is_bounded(a in geo_point(), b in geo_point()) {
        let d = haversine_km(a, b);
        prop_assert!(d >= 0.0);
        prop_assert!(d <= std::f64::consts::PI * EARTH_RADIUS_KM + 1e-6);
    }
}

// =============================================================================
// Week Properties
// =============================================================================

proptest! {
    #[test]
    fn week_is_in_range(date in order_date()) {
        prop_assert!(week_of_year(date) <= 53);
    }

    #[test]
    fn week_matches_strftime(date in order_date()) {
        let expected: u32 = date.format("%U").to_string().parse().unwrap();
        prop_assert_eq!(week_of_year(date), expected);
    }

    #[test]
    fn week_never_decreases_within_a_year(date in order_date()) {
        if let Some(next) = date.succ_opt() {
            if next.year() == date.year() {
                prop_assert!(week_of_year(next) >= week_of_year(date));
            }
        }
    }
}

// =============================================================================
// Preparation Properties
// =============================================================================

proptest! {
    #[test]
    fn prepare_accounts_for_every_row(content in raw_export()) {
        let prepared = Fooddash::new().load_reader(content.as_bytes()).unwrap();
        let report = &prepared.report;
        prop_assert_eq!(report.rows_in, report.rows_dropped + report.rows_out);
        prop_assert_eq!(prepared.dataset.len(), report.rows_out);
    }

    #[test]
    fn prepared_rows_carry_no_sentinels(dataset in prepared()) {
        for r in dataset.iter() {
            prop_assert_ne!(r.city.as_str(), "NaN");
            prop_assert_ne!(r.traffic.as_str(), "NaN");
            prop_assert_ne!(r.weather.as_str(), "conditions NaN");
            prop_assert_eq!(r.city.trim(), r.city.as_str());
            prop_assert_eq!(r.week_of_year, week_of_year(r.order_date));
        }
    }

    #[test]
    fn prepare_never_panics_on_garbage(cells in prop::collection::vec("[ -~]{0,12}", 18..=18)) {
        let content = format!("{}\n{}", HEADER, cells.join(","));
        let _ = Fooddash::new().load_reader(content.as_bytes());
    }
}

// =============================================================================
// Filter Properties
// =============================================================================

proptest! {
    #[test]
    fn filtered_rows_all_match(
        dataset in prepared(),
        cities in prop::collection::btree_set(category(&["Urban", "Metropolitian", "Semi-Urban"]), 0..3),
    ) {
        let filter = DeliveryFilter::new().select(Dimension::City, cities.clone());
        let filtered = dataset.filter(&filter);

        prop_assert!(filtered.len() <= dataset.len());
        for r in filtered.iter() {
            prop_assert!(cities.contains(&r.city));
        }
        let expected = dataset.iter().filter(|r| cities.contains(&r.city)).count();
        prop_assert_eq!(filtered.len(), expected);
    }

    #[test]
    fn default_selection_keeps_everything(dataset in prepared()) {
        let options = FilterOptions::from_dataset(&dataset);
        prop_assert_eq!(dataset.filter(&options.select_all()), dataset);
    }

    #[test]
    fn filtering_is_idempotent(dataset in prepared(), traffic in category(&["Low", "Medium", "High", "Jam"])) {
        let filter = DeliveryFilter::new().select(Dimension::Traffic, [traffic]);
        let once = dataset.filter(&filter);
        prop_assert_eq!(once.filter(&filter), once);
    }
}
