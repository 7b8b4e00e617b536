use anyhow::Result;
use colored::Colorize;

use crate::model::CsvRow;
use crate::reconcile::prepare;

/// Print what would be imported without contacting the tracker.
pub fn handle_dry_run(rows: &[CsvRow], verbose: bool) -> Result<u8> {
    if rows.is_empty() {
        println!("No rows with a title found.");
        return Ok(0);
    }

    println!("Found {} rows to import:", rows.len());
    for row in rows {
        let issue = prepare(row);
        println!("  [{}] {}", issue.labels_arg().magenta(), issue.title);
        if verbose {
            for line in issue.body.lines() {
                println!("      {}", line);
            }
        }
    }

    println!("\nDry run - no changes made.");
    Ok(0)
}
