//! Data model for lamp comparison.
//!
//! These types serialize directly to/from the project file and the JSON
//! report: lamp specifications and site requirements on the input side,
//! derived metrics and savings on the output side.

use serde::{Deserialize, Serialize};

/// Specification of a single lamp product under consideration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LampSpec {
    /// Display name of the lamp option
    pub name: String,
    /// Manufacturer
    pub make: String,
    /// Model designation
    pub model: String,
    /// Rated power draw in watts
    pub wattage: f64,
    /// Luminous efficacy in lumens per watt
    pub efficacy: f64,
    /// Purchase cost per unit, in the site currency
    pub capital_cost: f64,
}

impl LampSpec {
    /// Whether this lamp can participate in a comparison.
    ///
    /// Lamps with non-positive wattage or efficacy are excluded from
    /// results rather than rejected as errors; the engine divides by
    /// light output, so zero values would poison the arithmetic.
    pub fn is_valid(&self) -> bool {
        self.wattage > 0.0 && self.efficacy > 0.0
    }
}

/// Requirements of the site the lamps are being compared for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteRequirements {
    /// Number of lamps to install
    pub number_of_lamps: u32,
    /// Operating hours per day (0 < h <= 24)
    pub hours_per_day: f64,
    /// Required light output per lamp, in lumens
    pub required_lumens: f64,
    /// Electricity price per kWh, in the site currency
    pub energy_cost_per_kwh: f64,
    /// Currency symbol, display-only
    pub currency: String,
}

impl Default for SiteRequirements {
    fn default() -> Self {
        Self {
            number_of_lamps: 10,
            hours_per_day: 8.0,
            required_lumens: 10_000.0,
            energy_cost_per_kwh: 0.15,
            currency: "$".to_string(),
        }
    }
}

/// Whether a lamp's output meets the per-lamp lumen requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Suitability {
    Okay,
    NotSuitable,
}

impl std::fmt::Display for Suitability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Suitability::Okay => write!(f, "OKAY"),
            Suitability::NotSuitable => write!(f, "NOT SUITABLE"),
        }
    }
}

/// Derived metrics for one lamp against one set of site requirements.
///
/// Produced fresh on every comparison and never mutated. All monetary
/// values are full precision; rounding for display is the caller's
/// concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LampMetrics {
    /// Display name of the lamp option
    pub name: String,
    /// Manufacturer
    pub make: String,
    /// Model designation
    pub model: String,
    /// Rated power draw in watts
    pub wattage: f64,
    /// Luminous efficacy in lumens per watt
    pub efficacy: f64,
    /// Purchase cost per unit
    pub capital_cost: f64,
    /// Lumens produced by a single lamp
    pub light_output_per_lamp: f64,
    /// Lumens produced by the full installation
    pub total_light_output: f64,
    /// Whether per-lamp output meets the requirement
    pub suitability: Suitability,
    /// Energy cost of producing 1000 lumens for one hour
    pub cost_per_1000lm_hour: f64,
    /// Energy cost of producing the required lumens for one hour
    pub cost_per_required_lumens: f64,
    /// Daily energy cost of the full installation
    pub energy_cost_per_day: f64,
    /// Yearly energy cost (365 days)
    pub energy_cost_per_year: f64,
    /// Energy cost over a 5-year horizon
    pub energy_cost_5_years: f64,
    /// Purchase cost of the full installation
    pub total_capital_cost: f64,
    /// Capital plus 5-year energy cost, the primary ranking metric
    pub total_5_year_cost: f64,
}

/// Savings of the cheapest baseline option relative to one comparison lamp.
///
/// Positive means the comparison lamp costs more than the baseline over
/// 5 years; negative means it is cheaper. Values are kept unclamped so
/// the presentation layer can choose sign styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsEntry {
    /// Name of the comparison lamp
    pub name: String,
    /// Name of the baseline lamp it is measured against
    pub baseline_name: String,
    /// 5-year cost difference divided by 5
    pub annual_savings: f64,
    /// Comparison 5-year total minus best baseline 5-year total
    pub five_year_savings: f64,
}

/// Full result of one comparison run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// Metrics for every valid lamp, in input order
    pub metrics: Vec<LampMetrics>,
    /// Savings per comparison lamp; absent when no baseline label is
    /// configured or either partition is empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings: Option<Vec<SavingsEntry>>,
}
