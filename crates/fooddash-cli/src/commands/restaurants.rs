//! Restaurants command - distances and delivery times by context.

use std::path::PathBuf;

use colored::Colorize;
use fooddash::RestaurantView;

use crate::cli::FilterArgs;

pub fn run(
    file: PathBuf,
    filters: FilterArgs,
    json_output: bool,
    _verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let dataset = super::load_filtered(&file, &filters, json_output)?;
    let view = RestaurantView::compute(&dataset);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    let Some(mean_distance) = view.mean_distance_km else {
        println!("{}", "No orders match the filters.".yellow());
        return Ok(());
    };

    super::print_heading("Overview:");
    println!(
        "  Distinct couriers:   {}",
        view.distinct_couriers.to_string().white().bold()
    );
    println!("  Mean distance:       {:.2} km", mean_distance);
    let festival = view
        .festival_time
        .as_ref()
        .map(super::format_spread)
        .unwrap_or_else(|| "-".to_string());
    let regular = view
        .non_festival_time
        .as_ref()
        .map(super::format_spread)
        .unwrap_or_else(|| "-".to_string());
    println!("  Time during festivals: {} min", festival);
    println!("  Time otherwise:        {} min", regular);
    println!();

    super::print_heading("Delivery time by city:");
    for group in &view.time_by_city {
        println!("  {:15} {}", group.category, super::format_spread(&group.minutes));
    }
    println!();

    super::print_heading("Delivery time by city and traffic:");
    for group in &view.time_by_city_traffic {
        println!(
            "  {:15} {:12} {}",
            group.city,
            group.traffic,
            super::format_spread(&group.minutes)
        );
    }
    println!();

    super::print_heading("Mean distance by city:");
    for group in &view.distance_by_city {
        println!("  {:15} {:.2} km", group.city, group.mean_km);
    }
    println!();

    super::print_heading("Order types:");
    for (time, share) in view.time_by_order_type.iter().zip(&view.order_type_share) {
        println!(
            "  {:10} {:>6} orders ({:>5.1}%)  {}",
            time.category,
            share.orders,
            share.share * 100.0,
            super::format_spread(&time.minutes)
        );
    }

    Ok(())
}
