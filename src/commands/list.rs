//! List command: show the current lamp options.

use anyhow::Result;
use console::style;

use crate::commands::output::{fmt_value, section, Table};
use crate::project::Project;

/// Execute the list command
pub fn execute_list(project: &Project) -> Result<()> {
    if project.lamps.is_empty() {
        println!(
            "{} No lamp options yet. Run {} to add one.",
            style("•").dim(),
            style("lumencost add").cyan()
        );
        return Ok(());
    }

    section("Current Lamp Options");
    let mut table = Table::new(vec![
        "Lamp Name".to_string(),
        "Make".to_string(),
        "Model".to_string(),
        "Wattage (W)".to_string(),
        "Efficacy (lm/W)".to_string(),
        format!("Capital Cost ({})", project.site.currency),
    ]);
    for lamp in &project.lamps {
        table.row(vec![
            lamp.name.clone(),
            lamp.make.clone(),
            lamp.model.clone(),
            fmt_value(lamp.wattage),
            fmt_value(lamp.efficacy),
            fmt_value(lamp.capital_cost),
        ]);
    }
    table.print();

    let invalid = project.lamps.iter().filter(|l| !l.is_valid()).count();
    if invalid > 0 {
        println!(
            "\n{} {} lamp(s) have non-positive wattage or efficacy and will be excluded from comparison",
            style("⚠").yellow(),
            invalid
        );
    }

    Ok(())
}
