//! Project file: the caller-owned collection of lamp options and site
//! requirements a comparison runs over.
//!
//! The core never owns this state; the CLI loads it, mutates it, and
//! saves it back. Serializes to `lumencost.json` in the working
//! directory by default.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{LumencostError, Result};
use crate::model::{Comparison, LampSpec, SiteRequirements};

/// Default project file name in the working directory.
pub const DEFAULT_PROJECT_FILE: &str = "lumencost.json";

/// A lamp comparison project: site requirements, the running list of
/// lamp options, and the baseline vendor the comparison is framed
/// around.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Project {
    /// Site the lamps are being compared for
    #[serde(default)]
    pub site: SiteRequirements,

    /// Lamp options under consideration, in entry order
    #[serde(default)]
    pub lamps: Vec<LampSpec>,

    /// Baseline vendor label; lamps whose name or make matches are the
    /// baseline set savings are measured against
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline: Option<String>,
}

impl Project {
    /// Load a project from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save the project to a JSON file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Add a lamp option. Names must be unique within a project so
    /// `remove` and savings output stay unambiguous.
    pub fn add_lamp(&mut self, lamp: LampSpec) -> Result<()> {
        if self.lamps.iter().any(|l| l.name == lamp.name) {
            return Err(LumencostError::DuplicateLamp(lamp.name));
        }
        self.lamps.push(lamp);
        Ok(())
    }

    /// Remove a lamp option by name.
    pub fn remove_lamp(&mut self, name: &str) -> Result<LampSpec> {
        match self.lamps.iter().position(|l| l.name == name) {
            Some(idx) => Ok(self.lamps.remove(idx)),
            None => Err(LumencostError::LampNotFound(name.to_string())),
        }
    }
}

/// Validate site requirements at the CLI boundary.
///
/// The engine assumes well-formed positive inputs and has no defined
/// behavior otherwise, so everything user-entered passes through here
/// first.
pub fn validate_site(site: &SiteRequirements) -> Result<()> {
    if site.number_of_lamps == 0 {
        return Err(LumencostError::InvalidSite(
            "number of lamps must be at least 1".to_string(),
        ));
    }
    if !(site.hours_per_day > 0.0 && site.hours_per_day <= 24.0) {
        return Err(LumencostError::InvalidSite(format!(
            "hours per day must be in (0, 24], got {}",
            site.hours_per_day
        )));
    }
    if site.required_lumens <= 0.0 {
        return Err(LumencostError::InvalidSite(format!(
            "required lumens must be positive, got {}",
            site.required_lumens
        )));
    }
    if site.energy_cost_per_kwh < 0.0 {
        return Err(LumencostError::InvalidSite(format!(
            "energy cost must be non-negative, got {}",
            site.energy_cost_per_kwh
        )));
    }
    Ok(())
}

/// JSON report written by `lumencost compare --output`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Generation timestamp
    pub generated_at: DateTime<Utc>,
    /// Site the comparison ran against
    pub site: SiteRequirements,
    /// Baseline vendor label in effect, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline: Option<String>,
    /// The comparison result
    #[serde(flatten)]
    pub comparison: Comparison,
}

impl Report {
    /// Build a report for a finished comparison.
    pub fn new(project: &Project, comparison: Comparison) -> Self {
        Self {
            generated_at: Utc::now(),
            site: project.site.clone(),
            baseline: project.baseline.clone(),
            comparison,
        }
    }

    /// Write the report as pretty-printed JSON.
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
