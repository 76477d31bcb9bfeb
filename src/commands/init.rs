//! Init command: create a new lamp comparison project file.

use std::path::Path;

use anyhow::Result;
use console::style;
use dialoguer::{theme::ColorfulTheme, Input};

use crate::project::{validate_site, Project};

/// Options for the init command
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Force overwrite an existing project file
    pub force: bool,
    /// Skip interactive prompts (use defaults + CLI args)
    pub yes: bool,
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
}

/// Execute the init command
pub fn execute_init(options: InitOptions, project_path: &Path) -> Result<()> {
    if project_path.exists() && !options.force {
        eprintln!(
            "{} Project file already exists. Use --force to overwrite.",
            style("✗").red()
        );
        std::process::exit(1);
    }

    let mut project = Project::default();

    // Interactive mode if no site flags given and not using --yes
    let interactive = !options.yes
        && options.lamps.is_none()
        && options.hours.is_none()
        && options.lumens.is_none()
        && options.energy_cost.is_none()
        && options.currency.is_none()
        && options.baseline.is_none();

    if interactive {
        run_interactive_init(&mut project)?;
    } else {
        apply_cli_options(&mut project, &options);
    }

    validate_site(&project.site)?;
    project.save(project_path)?;
    println!("{} Created {}", style("✓").green(), project_path.display());

    println!("\n{}", style("Next steps:").bold());
    println!(
        "  1. Run {} to add lamp options",
        style("lumencost add").cyan()
    );
    println!(
        "  2. Run {} to rank them against the site requirements",
        style("lumencost compare").cyan()
    );

    Ok(())
}

fn run_interactive_init(project: &mut Project) -> Result<()> {
    println!("{} Lamp Comparison Project Setup\n", style("→").cyan());

    let theme = ColorfulTheme::default();
    let site = &mut project.site;

    site.number_of_lamps = Input::with_theme(&theme)
        .with_prompt("Number of lamps")
        .default(site.number_of_lamps)
        .interact_text()?;

    site.hours_per_day = Input::with_theme(&theme)
        .with_prompt("Operating hours per day")
        .default(site.hours_per_day)
        .interact_text()?;

    site.required_lumens = Input::with_theme(&theme)
        .with_prompt("Required lumens per lamp")
        .default(site.required_lumens)
        .interact_text()?;

    site.energy_cost_per_kwh = Input::with_theme(&theme)
        .with_prompt("Energy cost per kWh")
        .default(site.energy_cost_per_kwh)
        .interact_text()?;

    site.currency = Input::with_theme(&theme)
        .with_prompt("Currency symbol")
        .default(site.currency.clone())
        .interact_text()?;

    let baseline: String = Input::with_theme(&theme)
        .with_prompt("Baseline vendor label (empty for none)")
        .allow_empty(true)
        .interact_text()?;
    if !baseline.trim().is_empty() {
        project.baseline = Some(baseline.trim().to_string());
    }

    Ok(())
}

fn apply_cli_options(project: &mut Project, options: &InitOptions) {
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
    if let Some(currency) = &options.currency {
        site.currency = currency.clone();
    }
    if let Some(baseline) = &options.baseline {
        project.baseline = Some(baseline.clone());
    }
}
