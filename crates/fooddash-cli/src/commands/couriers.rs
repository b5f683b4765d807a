//! Couriers command - ages, vehicles, ratings and delivery speed.

use std::path::PathBuf;

use colored::Colorize;
use fooddash::CourierView;
use fooddash::views::courier::CourierSpeed;

use crate::cli::FilterArgs;

pub fn run(
    file: PathBuf,
    filters: FilterArgs,
    top: usize,
    json_output: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let dataset = super::load_filtered(&file, &filters, json_output)?;
    let view = CourierView::compute(&dataset, top);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    let (Some(oldest), Some(youngest)) = (view.oldest_age, view.youngest_age) else {
        println!("{}", "No orders match the filters.".yellow());
        return Ok(());
    };

    super::print_heading("Couriers:");
    println!("  Oldest:   {}", oldest.to_string().white().bold());
    println!("  Youngest: {}", youngest.to_string().white().bold());
    if let (Some(best), Some(worst)) = (view.best_vehicle_condition, view.worst_vehicle_condition) {
        println!("  Best vehicle condition:  {}", best.to_string().green());
        println!("  Worst vehicle condition: {}", worst.to_string().red());
    }
    println!();

    super::print_heading("Mean rating by courier:");
    let shown = if verbose {
        view.rating_by_courier.len()
    } else {
        top
    };
    for rating in view.rating_by_courier.iter().take(shown) {
        println!("  {:20} {:.2}", rating.courier_id, rating.mean_rating);
    }
    if view.rating_by_courier.len() > shown {
        println!(
            "  {}",
            format!(
                "... {} more (use --verbose to list all)",
                view.rating_by_courier.len() - shown
            )
            .dimmed()
        );
    }
    println!();

    super::print_heading("Rating by traffic density:");
    for group in &view.rating_by_traffic {
        println!("  {:20} {}", group.category, super::format_spread(&group.rating));
    }
    println!();

    super::print_heading("Rating by weather:");
    for group in &view.rating_by_weather {
        println!("  {:20} {}", group.category, super::format_spread(&group.rating));
    }
    println!();

    super::print_heading("Fastest couriers per city:");
    print_speeds(&view.fastest);
    println!();

    super::print_heading("Slowest couriers per city:");
    print_speeds(&view.slowest);

    Ok(())
}

fn print_speeds(speeds: &[CourierSpeed]) {
    for speed in speeds {
        println!(
            "  {:15} {:20} {:>6.1} min",
            speed.city, speed.courier_id, speed.mean_minutes
        );
    }
}
