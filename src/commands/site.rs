//! Site command: show or update the site requirements.

use std::path::Path;

use anyhow::Result;
use console::style;

use crate::commands::output::fmt_money;
use crate::project::{validate_site, Project};

/// Options for the site command; no fields set means "show".
#[derive(Debug, Clone, Default)]
pub struct SiteOptions {
    /// Number of lamps to install
    pub lamps: Option<u32>,
    /// Operating hours per day
    pub hours: Option<f64>,
    /// Required lumens per lamp
    pub lumens: Option<f64>,
    /// Energy cost per kWh
    pub energy_cost: Option<f64>,
    /// Currency symbol
    pub currency: Option<String>,
    /// Baseline vendor label
    pub baseline: Option<String>,
    /// Remove the baseline vendor label
    pub clear_baseline: bool,
}

impl SiteOptions {
    fn is_show(&self) -> bool {
        self.lamps.is_none()
            && self.hours.is_none()
            && self.lumens.is_none()
            && self.energy_cost.is_none()
            && self.currency.is_none()
            && self.baseline.is_none()
            && !self.clear_baseline
    }
}

/// Execute the site command
pub fn execute_site(options: SiteOptions, project: &mut Project, project_path: &Path) -> Result<()> {
    if options.is_show() {
        show_site(project);
        return Ok(());
    }

    let site = &mut project.site;
    if let Some(lamps) = options.lamps {
        site.number_of_lamps = lamps;
    }
    if let Some(hours) = options.hours {
        site.hours_per_day = hours;
    }
    if let Some(lumens) = options.lumens {
        site.required_lumens = lumens;
    }
    if let Some(cost) = options.energy_cost {
        site.energy_cost_per_kwh = cost;
    }
    if let Some(currency) = options.currency {
        site.currency = currency;
    }
    if options.clear_baseline {
        project.baseline = None;
    } else if let Some(baseline) = options.baseline {
        project.baseline = Some(baseline);
    }

    validate_site(&project.site)?;
    project.save(project_path)?;
    println!("{} Updated site requirements", style("✓").green());
    show_site(project);

    Ok(())
}

fn show_site(project: &Project) {
    let site = &project.site;
    println!("\n{}", style("Site Requirements").bold());
    println!("  Number of lamps:    {}", site.number_of_lamps);
    println!("  Hours per day:      {}", site.hours_per_day);
    println!("  Required lumens:    {} (per lamp)", site.required_lumens);
    println!(
        "  Energy cost:        {} per kWh",
        fmt_money(site.energy_cost_per_kwh, &site.currency)
    );
    println!("  Currency:           {}", site.currency);
    match &project.baseline {
        Some(baseline) => println!("  Baseline vendor:    {}", style(baseline).cyan()),
        None => println!("  Baseline vendor:    {}", style("(none)").dim()),
    }
}
