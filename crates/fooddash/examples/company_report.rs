//! Example: prepare a delivery export and print the company view.
//!
//! Usage:
//!   cargo run --example company_report -- <file_path> [city]
//!
//! Example:
//!   cargo run --example company_report -- train.csv Urban

use std::env;
use std::path::Path;

use fooddash::{CompanyView, DeliveryFilter, Dimension, Fooddash};

fn main() -> fooddash::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example company_report -- <file_path> [city]");
        std::process::exit(1);
    }

    let path = Path::new(&args[1]);
    if !path.exists() {
        eprintln!("Error: File not found: {}", path.display());
        std::process::exit(1);
    }

    let separator = "=".repeat(60);
    println!("{}", separator);
    println!("Company report: {}", path.display());
    println!("{}", separator);
    println!();

    let loaded = Fooddash::new().load(path)?;

    println!("## Preparation");
    println!("  Rows in:      {}", loaded.report.rows_in);
    println!("  Rows dropped: {}", loaded.report.rows_dropped);
    for (column, count) in &loaded.report.dropped_by_column {
        if *count > 0 {
            println!("    {:28} {}", column, count);
        }
    }
    println!("  Rows kept:    {}", loaded.report.rows_out);
    println!();

    let mut filter = DeliveryFilter::new();
    if let Some(city) = args.get(2) {
        filter = filter.select(Dimension::City, [city.as_str()]);
        println!("## Filter: city = {}", city);
        println!();
    }
    let dataset = loaded.dataset.filter(&filter);
    let view = CompanyView::compute(&dataset);

    println!("## Orders per week ({} rows)", dataset.len());
    for (week, load) in view
        .orders_per_week
        .iter()
        .zip(&view.orders_per_courier_per_week)
    {
        println!(
            "  week {:>2}: {:>6} orders, {:.2} per courier",
            week.week, week.orders, load.orders_per_courier
        );
    }
    println!();

    println!("## Traffic share");
    for share in &view.traffic_share {
        println!("  {:10} {:>5.1}%", share.traffic, share.percent);
    }

    Ok(())
}
