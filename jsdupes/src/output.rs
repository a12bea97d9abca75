//! Console rendering of scan results.

use anyhow::Result;
use colored::Colorize;
use comfy_table::{Cell, Color, Table};
use std::io::Write;

use crate::dupes::{DuplicatePair, ScanResult};
use crate::utils::normalize_display_path;

/// Maximum number of pairs rendered in the console table.
const DISPLAY_LIMIT: usize = 100;

/// Prints the scan summary lines.
pub fn print_summary<W: Write>(
    writer: &mut W,
    files_scanned: usize,
    result: &ScanResult,
    threshold: u8,
) -> Result<()> {
    writeln!(writer, "\n{}", "Duplicate Function Scan".bold().cyan())?;
    writeln!(writer, "{}", "=".repeat(40))?;
    writeln!(writer, "Files scanned:    {files_scanned}")?;
    writeln!(writer, "Functions found:  {}", result.total_units)?;
    writeln!(writer, "Duplicate pairs:  {}", result.pairs.len())?;
    writeln!(writer, "Threshold:        {threshold}%")?;
    Ok(())
}

/// Prints the green all-clear message.
pub fn print_no_duplicates<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, "\n{}", "No duplicate functions found.".green())?;
    Ok(())
}

/// Renders the duplicate pairs as a table, capped at [`DISPLAY_LIMIT`] rows.
pub fn print_pairs_table<W: Write>(writer: &mut W, pairs: &[DuplicatePair]) -> Result<()> {
    let mut table = Table::new();
    table
        .load_preset(comfy_table::presets::UTF8_FULL)
        .set_header(vec![
            "#",
            "Similarity",
            "Kind",
            "Function",
            "Location",
            "Duplicate Of",
            "Location",
        ]);

    for (index, pair) in pairs.iter().take(DISPLAY_LIMIT).enumerate() {
        let location_a = format!(
            "{}:{}",
            normalize_display_path(&pair.unit_a.file),
            pair.unit_a.start_line
        );
        let location_b = format!(
            "{}:{}",
            normalize_display_path(&pair.unit_b.file),
            pair.unit_b.start_line
        );

        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(format!("{:.2}%", pair.similarity)).fg(Color::Yellow),
            Cell::new(pair.unit_a.kind.display_name()),
            Cell::new(format!("{}()", pair.unit_a.name)),
            Cell::new(location_a),
            Cell::new(format!("{}()", pair.unit_b.name)),
            Cell::new(location_b),
        ]);
    }

    writeln!(writer, "{table}")?;

    if pairs.len() > DISPLAY_LIMIT {
        writeln!(
            writer,
            "\n{} Showing first {} results. Use --json to see all {} pairs.",
            "Note:".yellow().bold(),
            DISPLAY_LIMIT,
            pairs.len()
        )?;
    }

    Ok(())
}
