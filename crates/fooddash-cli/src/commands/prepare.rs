//! Prepare command - write the cleaned, enriched table.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use colored::Colorize;
use fooddash::{ExportFormat, write_dataset};

use crate::cli::OutputFormat;

pub fn run(
    file: PathBuf,
    output: Option<PathBuf>,
    format: OutputFormat,
    _verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    println!(
        "{} {}",
        "Preparing".cyan().bold(),
        file.display().to_string().white()
    );

    let loaded = super::load(&file)?;
    let format = ExportFormat::from(format);

    println!(
        "Kept {} of {} rows ({} dropped as incomplete)",
        loaded.report.rows_out.to_string().white().bold(),
        loaded.report.rows_in,
        loaded.report.rows_dropped.to_string().red()
    );

    let output_path = output.unwrap_or_else(|| {
        let stem = file.file_stem().unwrap_or_default().to_string_lossy();
        file.with_file_name(format!("{}_prepared.{}", stem, format.extension()))
    });

    let mut writer = BufWriter::new(File::create(&output_path)?);
    write_dataset(&loaded.dataset, &mut writer, format)?;
    writer.flush()?;

    println!();
    println!(
        "{} {}",
        "Saved to".green().bold(),
        output_path.display().to_string().white()
    );

    Ok(())
}
