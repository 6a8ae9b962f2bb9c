//! Offline analysis command

use std::path::Path;

use anyhow::{Context, Result};
use tally_core::{analyze_expenses, expenses_from_document, Analysis};

pub fn cmd_analyze(file: &Path, json: bool) -> Result<()> {
    let analysis = load_analysis(file)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print!("{}", render_analysis(&analysis));
    }

    Ok(())
}

/// Read an expense file and run the analysis on it
pub fn load_analysis(file: &Path) -> Result<Analysis> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let records = expenses_from_document(&text)
        .with_context(|| format!("Failed to load expenses from {}", file.display()))?;

    analyze_expenses(&records).context("Failed to analyze expenses")
}

/// Format an analysis as a month/amount table followed by the insight
pub fn render_analysis(analysis: &Analysis) -> String {
    let mut out = String::new();

    if !analysis.data.is_empty() {
        out.push_str("📅 Monthly spending\n\n");
        out.push_str(&format!("   {:<10} {:>12}\n", "Month", "Amount"));
        out.push_str(&format!("   {}\n", "-".repeat(23)));
        for total in &analysis.data {
            out.push_str(&format!(
                "   {:<10} {:>12}\n",
                total.month,
                total.amount.to_string()
            ));
        }
        out.push('\n');
    }

    out.push_str(&format!("💡 {}\n", analysis.insight));
    out
}
