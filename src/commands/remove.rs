//! Remove command: drop a lamp option from the project.

use std::path::Path;

use anyhow::Result;
use console::style;

use crate::project::Project;

/// Execute the remove command
pub fn execute_remove(name: &str, project: &mut Project, project_path: &Path) -> Result<()> {
    let removed = project.remove_lamp(name)?;
    project.save(project_path)?;

    println!(
        "{} Removed lamp '{}' ({} options remaining)",
        style("✓").green(),
        removed.name,
        project.lamps.len()
    );

    Ok(())
}
