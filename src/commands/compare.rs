//! Compare command: run the comparison and render result tables.

use std::path::PathBuf;

use anyhow::Result;
use console::style;

use crate::commands::output::{fmt_value, savings_cell, section, suitability_cell, Table};
use crate::compare::compare_and_rank;
use crate::model::Comparison;
use crate::project::{validate_site, Project, Report};

/// Options for the compare command
#[derive(Debug, Clone, Default)]
pub struct CompareOptions {
    /// Emit the raw comparison as JSON instead of tables
    pub json: bool,
    /// Also write a JSON report to this path
    pub output: Option<PathBuf>,
}

/// Execute the compare command
pub fn execute_compare(options: CompareOptions, project: &Project) -> Result<()> {
    validate_site(&project.site)?;

    let comparison = compare_and_rank(
        &project.lamps,
        &project.site,
        project.baseline.as_deref(),
    );

    if options.json {
        println!("{}", serde_json::to_string_pretty(&comparison)?);
    } else if comparison.metrics.is_empty() {
        println!(
            "{} No valid lamp options to compare (lamps need wattage > 0 and efficacy > 0)",
            style("•").dim()
        );
    } else {
        render_tables(&comparison, project);
    }

    if let Some(path) = &options.output {
        let report = Report::new(project, comparison);
        report.write_json(path)?;
        println!("\n{} Wrote report to {}", style("✓").green(), path.display());
    }

    Ok(())
}

fn render_tables(comparison: &Comparison, project: &Project) {
    let currency = project.site.currency.as_str();

    // Suitability check
    section("Suitability Check");
    let mut table = Table::new(vec![
        "Lamp Name".to_string(),
        "Make".to_string(),
        "Model".to_string(),
        "Light Output per Lamp (lm)".to_string(),
        "Total Light Output (lm)".to_string(),
        "Suitability".to_string(),
    ]);
    for m in &comparison.metrics {
        table.row(vec![
            m.name.clone(),
            m.make.clone(),
            m.model.clone(),
            fmt_value(m.light_output_per_lamp),
            fmt_value(m.total_light_output),
            suitability_cell(m.suitability),
        ]);
    }
    table.print();

    // Cost efficiency
    section("Cost Efficiency");
    let mut table = Table::new(vec![
        "Lamp Name".to_string(),
        format!("Cost per 1000 lm/hour ({})", currency),
        format!("Cost per Required Lumens ({})", currency),
    ]);
    for m in &comparison.metrics {
        table.row(vec![
            m.name.clone(),
            fmt_value(m.cost_per_1000lm_hour),
            fmt_value(m.cost_per_required_lumens),
        ]);
    }
    table.print();

    // Energy costs
    section("Energy Costs");
    let mut table = Table::new(vec![
        "Lamp Name".to_string(),
        format!("Per Day ({})", currency),
        format!("Per Year ({})", currency),
        format!("Over 5 Years ({})", currency),
    ]);
    for m in &comparison.metrics {
        table.row(vec![
            m.name.clone(),
            fmt_value(m.energy_cost_per_day),
            fmt_value(m.energy_cost_per_year),
            fmt_value(m.energy_cost_5_years),
        ]);
    }
    table.print();

    // Full overview
    section("Full Comparison Overview");
    let mut table = Table::new(vec![
        "Lamp Name".to_string(),
        "Wattage (W)".to_string(),
        "Efficacy (lm/W)".to_string(),
        format!("Capital Cost ({})", currency),
        format!("Total Capital ({})", currency),
        format!("5-Year Energy ({})", currency),
        format!("5-Year Total ({})", currency),
        "Suitability".to_string(),
    ]);
    for m in &comparison.metrics {
        table.row(vec![
            m.name.clone(),
            fmt_value(m.wattage),
            fmt_value(m.efficacy),
            fmt_value(m.capital_cost),
            fmt_value(m.total_capital_cost),
            fmt_value(m.energy_cost_5_years),
            fmt_value(m.total_5_year_cost),
            suitability_cell(m.suitability),
        ]);
    }
    table.print();

    // Savings against the baseline, when both partitions are populated
    if let Some(savings) = &comparison.savings {
        let baseline_name = &savings[0].baseline_name;
        section(&format!("Savings vs {}", baseline_name));
        let mut table = Table::new(vec![
            "Lamp Name".to_string(),
            format!("Annual Savings ({})", currency),
            format!("5-Year Savings ({})", currency),
        ]);
        for s in savings {
            table.row(vec![
                s.name.clone(),
                savings_cell(s.annual_savings),
                savings_cell(s.five_year_savings),
            ]);
        }
        table.print();
        println!(
            "\n  {} Positive savings mean {} is the cheaper choice over 5 years.",
            style("•").dim(),
            style(baseline_name).cyan()
        );
    } else if project.baseline.is_some() {
        println!(
            "\n{} Savings need at least one baseline and one comparison lamp",
            style("•").dim()
        );
    }
}
