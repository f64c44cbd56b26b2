use crate::menu::LoadReport;
use crate::models::ComboBatch;

/// Format combos as a plain-text table.
pub fn render_batch(batch: &ComboBatch) -> String {
    if batch.is_empty() {
        return "No combos generated.\n".to_string();
    }

    let mut out = String::from("=== Combos of the Day ===\n");
    for (i, combo) in batch.combos_for_the_day.iter().enumerate() {
        out.push_str(&format!("\nCombo {}\n", i + 1));
        for (category, name) in combo.combo.iter() {
            out.push_str(&format!("  {:<9} {}\n", category.key(), name));
            out.push_str(&format!("            {}\n", combo.reason.get(category)));
        }
    }
    out
}

/// Print combos to stdout.
pub fn display_batch(batch: &ComboBatch) {
    print!("{}", render_batch(batch));
}

/// Print a summary of loaded and skipped rows.
pub fn display_load_report(report: &LoadReport) {
    println!(
        "Loaded {} items ({} rows skipped)",
        report.loaded,
        report.skipped_count()
    );
    for row in &report.skipped {
        println!("  line {}: {}", row.line, row.reason);
    }
}
