//! Company command - order volume over time, traffic and city.

use std::path::PathBuf;

use colored::Colorize;
use fooddash::CompanyView;

use crate::cli::FilterArgs;

pub fn run(
    file: PathBuf,
    filters: FilterArgs,
    json_output: bool,
    _verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let dataset = super::load_filtered(&file, &filters, json_output)?;
    let view = CompanyView::compute(&dataset);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    if dataset.is_empty() {
        println!("{}", "No orders match the filters.".yellow());
        return Ok(());
    }

    super::print_heading("Orders per day:");
    for day in &view.orders_per_day {
        println!(
            "  {}  {:>6}",
            day.date.format("%d-%m-%Y"),
            day.orders.to_string().white()
        );
    }
    println!();

    super::print_heading("Share by traffic density:");
    for share in &view.traffic_share {
        println!(
            "  {:12} {:>6}  {:>5.1}%",
            share.traffic, share.orders, share.percent
        );
    }
    println!();

    super::print_heading("Orders by city and traffic:");
    for group in &view.orders_by_city_traffic {
        println!("  {:15} {:12} {:>6}", group.city, group.traffic, group.orders);
    }
    println!();

    super::print_heading("Orders per week:");
    for (week, load) in view
        .orders_per_week
        .iter()
        .zip(&view.orders_per_courier_per_week)
    {
        println!(
            "  week {:>2}  {:>6} orders  {:>5} couriers  {:.2} per courier",
            week.week,
            week.orders.to_string().white(),
            load.couriers,
            load.orders_per_courier
        );
    }
    println!();

    super::print_heading("Central delivery locations (median):");
    for spot in &view.hotspots {
        println!(
            "  {:15} {:12} {:>10.6}, {:>10.6}",
            spot.city, spot.traffic, spot.latitude, spot.longitude
        );
    }

    Ok(())
}
