//! Inspect command - prepare a file and report what survived.

use std::path::PathBuf;

use colored::Colorize;
use fooddash::{Dimension, FilterOptions};

pub fn run(file: PathBuf, json_output: bool, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let loaded = super::load(&file)?;
    let options = FilterOptions::from_dataset(&loaded.dataset);

    if json_output {
        let status = serde_json::json!({
            "source": loaded.source,
            "report": loaded.report,
            "filters": options,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    let source = &loaded.source;
    let report = &loaded.report;

    println!(
        "{} {}",
        "Inspecting".cyan().bold(),
        source.file.white()
    );
    println!(
        "  Format: {}  Size: {} bytes  Columns: {}",
        source.format, source.size_bytes, source.column_count
    );
    println!("  Hash:   {}", source.hash.dimmed());
    println!();

    super::print_heading("Preparation:");
    println!("  Rows in:      {}", report.rows_in.to_string().white());
    println!("  Rows dropped: {}", report.rows_dropped.to_string().red());
    println!("  Rows kept:    {}", report.rows_out.to_string().green());

    let retention = report.retention() * 100.0;
    let retention_color = if retention >= 90.0 {
        format!("{:.1}%", retention).green()
    } else if retention >= 50.0 {
        format!("{:.1}%", retention).yellow()
    } else {
        format!("{:.1}%", retention).red()
    };
    println!("  Retention:    {}", retention_color);
    println!();

    super::print_heading("Missing values by column:");
    for (column, count) in &report.dropped_by_column {
        let count_str = if *count > 0 {
            count.to_string().red()
        } else {
            count.to_string().normal()
        };
        println!("  {:28} {}", column, count_str);
    }
    println!();

    if verbose {
        super::print_heading("Steps:");
        for (i, step) in report.steps.iter().enumerate() {
            println!(
                "  {}. {:45} {} rows",
                i + 1,
                step.description,
                step.rows
            );
        }
        println!();
    }

    super::print_heading("Filter values:");
    match (options.first_date, options.last_date) {
        (Some(first), Some(last)) => println!(
            "  {:14} {} .. {}",
            "order date",
            first.format("%d-%m-%Y"),
            last.format("%d-%m-%Y")
        ),
        _ => println!("  {}", "No rows left to filter.".yellow()),
    }
    for dimension in Dimension::ALL {
        let values: Vec<&str> = options.values_for(dimension).collect();
        if !values.is_empty() {
            println!("  {:14} {}", dimension.to_string(), values.join(", "));
        }
    }

    Ok(())
}
