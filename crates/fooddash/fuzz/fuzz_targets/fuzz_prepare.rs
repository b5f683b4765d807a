//! Fuzz target for the preparation pipeline.
//!
//! The input is appended to a valid header, so every row reaches the
//! sentinel checks and coercions. Malformed values must surface as errors.

#![no_main]

use fooddash::Fooddash;
use libfuzzer_sys::fuzz_target;

const HEADER: &[u8] = b"ID,Delivery_person_ID,Delivery_person_Age,Delivery_person_Ratings,\
Restaurant_latitude,Restaurant_longitude,Delivery_location_latitude,Delivery_location_longitude,\
Order_Date,Weatherconditions,Road_traffic_density,Vehicle_condition,Type_of_order,Type_of_vehicle,\
multiple_deliveries,Festival,City,Time_taken(min)\n";

fuzz_target!(|data: &[u8]| {
    if data.len() > 100_000 {
        return;
    }

    let mut input = HEADER.to_vec();
    input.extend_from_slice(data);

    if let Ok(prepared) = Fooddash::new().load_reader(input.as_slice()) {
        let report = &prepared.report;
        assert_eq!(report.rows_in, report.rows_dropped + report.rows_out);
        assert_eq!(prepared.dataset.len(), report.rows_out);
    }
});
