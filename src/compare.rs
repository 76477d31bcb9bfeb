//! Comparison driver: runs the metrics engine over a lamp list and
//! ranks alternatives against a baseline product line.

use tracing::debug;

use crate::engine::compute_metrics;
use crate::model::{Comparison, LampMetrics, LampSpec, SavingsEntry, SiteRequirements};

/// Whether a lamp belongs to the baseline product line.
///
/// Matching is case-insensitive containment against name or make, so a
/// label of "Philips" catches make "Philips Lighting" as entered by the
/// user.
fn is_baseline(metrics: &LampMetrics, label: &str) -> bool {
    let label = label.to_lowercase();
    metrics.name.to_lowercase().contains(&label) || metrics.make.to_lowercase().contains(&label)
}

/// Compare a list of lamp options against one set of site requirements.
///
/// Lamps with non-positive wattage or efficacy are silently excluded;
/// the survivors appear in `metrics` in input order. When a baseline
/// label is given and both the baseline and comparison partitions are
/// non-empty, each comparison lamp gets a [`SavingsEntry`] measured
/// against the cheapest baseline entry by 5-year total cost (ties broken
/// by input order). Otherwise `savings` is `None`.
pub fn compare_and_rank(
    lamps: &[LampSpec],
    site: &SiteRequirements,
    baseline_label: Option<&str>,
) -> Comparison {
    let metrics: Vec<LampMetrics> = lamps
        .iter()
        .filter(|lamp| lamp.is_valid())
        .map(|lamp| compute_metrics(lamp, site))
        .collect();

    debug!(
        total = lamps.len(),
        valid = metrics.len(),
        "computed lamp metrics"
    );

    let savings = baseline_label.and_then(|label| compute_savings(&metrics, label));

    Comparison { metrics, savings }
}

/// Savings of every comparison lamp relative to the cheapest baseline
/// entry. `None` when either partition is empty.
fn compute_savings(metrics: &[LampMetrics], label: &str) -> Option<Vec<SavingsEntry>> {
    // Strict less-than so the first occurrence wins on ties
    // (Iterator::min_by would keep the last).
    let best_baseline = metrics
        .iter()
        .filter(|m| is_baseline(m, label))
        .fold(None::<&LampMetrics>, |best, m| match best {
            Some(b) if m.total_5_year_cost < b.total_5_year_cost => Some(m),
            Some(b) => Some(b),
            None => Some(m),
        })?;

    let entries: Vec<SavingsEntry> = metrics
        .iter()
        .filter(|m| !is_baseline(m, label))
        .map(|m| {
            let five_year_savings = m.total_5_year_cost - best_baseline.total_5_year_cost;
            SavingsEntry {
                name: m.name.clone(),
                baseline_name: best_baseline.name.clone(),
                annual_savings: five_year_savings / 5.0,
                five_year_savings,
            }
        })
        .collect();

    if entries.is_empty() {
        debug!(label, "no comparison lamps outside the baseline set");
        return None;
    }

    debug!(
        label,
        baseline = %best_baseline.name,
        entries = entries.len(),
        "computed savings against best baseline"
    );
    Some(entries)
}
