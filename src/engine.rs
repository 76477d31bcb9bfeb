//! Metrics engine: the pure transformation from a lamp specification
//! and site requirements to a derived-metrics record.
//!
//! No state, no I/O, no rounding. Callers must filter out lamps with
//! non-positive wattage or efficacy first ([`LampSpec::is_valid`]);
//! the light output appears in a divisor here, so zero values yield
//! division by zero rather than an error.

use crate::model::{LampMetrics, LampSpec, SiteRequirements, Suitability};

/// Days per year used for the yearly projection.
const DAYS_PER_YEAR: f64 = 365.0;

/// Projection horizon in years for the total-cost ranking metric.
const HORIZON_YEARS: f64 = 5.0;

/// Compute all derived metrics for one lamp against one site.
///
/// Deterministic and referentially transparent: identical inputs yield
/// bit-identical output.
pub fn compute_metrics(lamp: &LampSpec, site: &SiteRequirements) -> LampMetrics {
    let number_of_lamps = f64::from(site.number_of_lamps);

    let light_output_per_lamp = lamp.wattage * lamp.efficacy;
    let total_light_output = light_output_per_lamp * number_of_lamps;

    // Inclusive boundary: output exactly at the requirement is suitable.
    let suitability = if light_output_per_lamp >= site.required_lumens {
        Suitability::Okay
    } else {
        Suitability::NotSuitable
    };

    let cost_per_1000lm_hour =
        (site.energy_cost_per_kwh * lamp.wattage / 1000.0) / (light_output_per_lamp / 1000.0);
    let cost_per_required_lumens = cost_per_1000lm_hour * (site.required_lumens / 1000.0);

    let energy_cost_per_day = site.hours_per_day * number_of_lamps * cost_per_required_lumens;
    let energy_cost_per_year = energy_cost_per_day * DAYS_PER_YEAR;
    let energy_cost_5_years = energy_cost_per_year * HORIZON_YEARS;

    let total_capital_cost = number_of_lamps * lamp.capital_cost;
    let total_5_year_cost = total_capital_cost + energy_cost_5_years;

    LampMetrics {
        name: lamp.name.clone(),
        make: lamp.make.clone(),
        model: lamp.model.clone(),
        wattage: lamp.wattage,
        efficacy: lamp.efficacy,
        capital_cost: lamp.capital_cost,
        light_output_per_lamp,
        total_light_output,
        suitability,
        cost_per_1000lm_hour,
        cost_per_required_lumens,
        energy_cost_per_day,
        energy_cost_per_year,
        energy_cost_5_years,
        total_capital_cost,
        total_5_year_cost,
    }
}
