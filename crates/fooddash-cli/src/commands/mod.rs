//! CLI command implementations.

pub mod company;
pub mod couriers;
pub mod inspect;
pub mod prepare;
pub mod restaurants;

use std::path::Path;

use colored::Colorize;
use fooddash::views::Spread;
use fooddash::{DeliveryDataset, Fooddash, LoadResult};

use crate::cli::FilterArgs;

/// Load and prepare `file`, failing early with a readable message when it
/// does not exist.
pub(crate) fn load(file: &Path) -> Result<LoadResult, Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }
    Ok(Fooddash::new().load(file)?)
}

/// Load, prepare and filter `file` for one of the view commands.
pub(crate) fn load_filtered(
    file: &Path,
    filters: &FilterArgs,
    json_output: bool,
) -> Result<DeliveryDataset, Box<dyn std::error::Error>> {
    let loaded = load(file)?;
    let filtered = loaded.dataset.filter(&filters.to_filter());

    if !json_output {
        println!(
            "{} {}",
            "Loaded".cyan().bold(),
            loaded.source.file.white()
        );
        if filters.is_active() {
            println!(
                "Kept {} of {} prepared rows after filtering",
                filtered.len().to_string().white().bold(),
                loaded.dataset.len()
            );
        } else {
            println!(
                "{} prepared rows",
                filtered.len().to_string().white().bold()
            );
        }
        println!();
    }

    Ok(filtered)
}

/// `mean ± std (n)`; the std part is omitted for single observations.
pub(crate) fn format_spread(spread: &Spread) -> String {
    match spread.std {
        Some(std) => format!("{:.2} ± {:.2} (n={})", spread.mean, std, spread.count),
        None => format!("{:.2} (n={})", spread.mean, spread.count),
    }
}

pub(crate) fn print_heading(title: &str) {
    println!("{}", title.yellow().bold());
}
