//! Add command: append a lamp option to the project.

use std::path::Path;

use anyhow::Result;
use console::style;
use dialoguer::{theme::ColorfulTheme, Input};

use crate::model::LampSpec;
use crate::project::Project;

/// Options for the add command; fields left unset are prompted for.
#[derive(Debug, Clone, Default)]
pub struct AddOptions {
    /// Lamp name
    pub name: Option<String>,
    /// Manufacturer
    pub make: Option<String>,
    /// Model designation
    pub model: Option<String>,
    /// Rated wattage
    pub wattage: Option<f64>,
    /// Efficacy in lm/W
    pub efficacy: Option<f64>,
    /// Capital cost per lamp
    pub capital_cost: Option<f64>,
}

/// Execute the add command
pub fn execute_add(options: AddOptions, project: &mut Project, project_path: &Path) -> Result<()> {
    let theme = ColorfulTheme::default();

    let name = match options.name {
        Some(name) => name,
        None => Input::with_theme(&theme)
            .with_prompt("Lamp name")
            .interact_text()?,
    };
    let make = match options.make {
        Some(make) => make,
        None => Input::with_theme(&theme)
            .with_prompt("Make")
            .allow_empty(true)
            .interact_text()?,
    };
    let model = match options.model {
        Some(model) => model,
        None => Input::with_theme(&theme)
            .with_prompt("Model")
            .allow_empty(true)
            .interact_text()?,
    };
    let wattage = match options.wattage {
        Some(wattage) => wattage,
        None => Input::with_theme(&theme)
            .with_prompt("Wattage (W)")
            .interact_text()?,
    };
    let efficacy = match options.efficacy {
        Some(efficacy) => efficacy,
        None => Input::with_theme(&theme)
            .with_prompt("Efficacy (lm/W)")
            .interact_text()?,
    };
    let capital_cost = match options.capital_cost {
        Some(cost) => cost,
        None => Input::with_theme(&theme)
            .with_prompt("Capital cost per lamp")
            .interact_text()?,
    };

    let lamp = LampSpec {
        name,
        make,
        model,
        wattage,
        efficacy,
        capital_cost,
    };

    if !lamp.is_valid() {
        println!(
            "{} Wattage and efficacy must be positive for a lamp to be compared; '{}' will be excluded from results",
            style("⚠").yellow(),
            lamp.name
        );
    }

    let name = lamp.name.clone();
    project.add_lamp(lamp)?;
    project.save(project_path)?;

    println!(
        "{} Added lamp '{}' ({} options total)",
        style("✓").green(),
        name,
        project.lamps.len()
    );

    Ok(())
}
