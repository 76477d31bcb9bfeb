//! Integration tests for the metrics engine and comparison driver.

use lumencost::{
    compare_and_rank, compute_metrics, LampSpec, SiteRequirements, Suitability,
};

const TOLERANCE: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < TOLERANCE
}

fn lamp(name: &str, make: &str, wattage: f64, efficacy: f64, capital_cost: f64) -> LampSpec {
    LampSpec {
        name: name.to_string(),
        make: make.to_string(),
        model: "M-1".to_string(),
        wattage,
        efficacy,
        capital_cost,
    }
}

fn site(lamps: u32, hours: f64, lumens: f64, energy_cost: f64) -> SiteRequirements {
    SiteRequirements {
        number_of_lamps: lamps,
        hours_per_day: hours,
        required_lumens: lumens,
        energy_cost_per_kwh: energy_cost,
        currency: "$".to_string(),
    }
}

// =============================================================================
// Metrics engine properties
// =============================================================================

mod engine_tests {
    use super::*;

    #[test]
    fn test_high_bay_scenario() {
        // 240W at 204 lm/W for a 500-lamp site running 20h/day.
        let m = compute_metrics(
            &lamp("HighBay", "Acme", 240.0, 204.0, 140.0),
            &site(500, 20.0, 30_000.0, 0.30),
        );

        assert!(approx_eq(m.light_output_per_lamp, 48_960.0));
        assert_eq!(m.suitability, Suitability::Okay);
        assert!(approx_eq(m.total_capital_cost, 70_000.0));
    }

    #[test]
    fn test_underpowered_lamp_not_suitable() {
        let m = compute_metrics(
            &lamp("Weak", "Acme", 100.0, 50.0, 10.0),
            &site(10, 8.0, 10_000.0, 0.15),
        );

        assert!(approx_eq(m.light_output_per_lamp, 5_000.0));
        assert_eq!(m.suitability, Suitability::NotSuitable);
    }

    #[test]
    fn test_output_exactly_at_requirement_is_suitable() {
        let m = compute_metrics(
            &lamp("Exact", "Acme", 100.0, 50.0, 10.0),
            &site(10, 8.0, 5_000.0, 0.15),
        );
        assert_eq!(m.suitability, Suitability::Okay);
    }

    #[test]
    fn test_projection_horizons_chain() {
        let m = compute_metrics(
            &lamp("Any", "Acme", 150.0, 120.0, 35.0),
            &site(25, 12.0, 15_000.0, 0.22),
        );

        assert!(approx_eq(m.total_light_output, m.light_output_per_lamp * 25.0));
        assert!(approx_eq(m.energy_cost_per_year, m.energy_cost_per_day * 365.0));
        assert!(approx_eq(m.energy_cost_5_years, m.energy_cost_per_year * 5.0));
        assert!(approx_eq(
            m.total_5_year_cost,
            m.total_capital_cost + m.energy_cost_5_years
        ));
    }

    #[test]
    fn test_engine_is_pure() {
        let l = lamp("Any", "Acme", 87.3, 141.9, 23.45);
        let s = site(73, 13.25, 11_111.0, 0.19);
        assert_eq!(compute_metrics(&l, &s), compute_metrics(&l, &s));
    }
}

// =============================================================================
// Comparison driver: filtering and ordering
// =============================================================================

mod driver_tests {
    use super::*;

    #[test]
    fn test_empty_lamp_list() {
        let result = compare_and_rank(&[], &site(10, 8.0, 10_000.0, 0.15), Some("Acme"));
        assert!(result.metrics.is_empty());
        assert!(result.savings.is_none());
    }

    #[test]
    fn test_all_lamps_zero_wattage_filtered() {
        let lamps = vec![
            lamp("Dead A", "Acme", 0.0, 100.0, 10.0),
            lamp("Dead B", "Other", 0.0, 120.0, 12.0),
        ];
        let result = compare_and_rank(&lamps, &site(10, 8.0, 10_000.0, 0.15), Some("Acme"));
        assert!(result.metrics.is_empty());
        assert!(result.savings.is_none());
    }

    #[test]
    fn test_invalid_lamps_dropped_in_place() {
        let lamps = vec![
            lamp("One", "A", 100.0, 60.0, 10.0),
            lamp("Zero Efficacy", "B", 100.0, 0.0, 10.0),
            lamp("Two", "C", 120.0, 70.0, 15.0),
            lamp("Negative Wattage", "D", -5.0, 70.0, 15.0),
            lamp("Three", "E", 90.0, 80.0, 12.0),
        ];
        let result = compare_and_rank(&lamps, &site(10, 8.0, 5_000.0, 0.15), None);

        let names: Vec<&str> = result.metrics.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["One", "Two", "Three"]);
    }
}

// =============================================================================
// Savings against the baseline vendor
// =============================================================================

mod savings_tests {
    use super::*;

    #[test]
    fn test_savings_relative_to_cheapest_baseline() {
        let s = site(10, 8.0, 5_000.0, 0.15);
        let lamps = vec![
            lamp("Acme Prime", "Acme", 100.0, 60.0, 50.0),
            lamp("Acme Value", "Acme", 100.0, 60.0, 20.0),
            lamp("Rival One", "Other", 100.0, 60.0, 45.0),
        ];
        let result = compare_and_rank(&lamps, &s, Some("Acme"));
        let savings = result.savings.expect("savings section");

        assert_eq!(savings.len(), 1);
        assert_eq!(savings[0].name, "Rival One");
        assert_eq!(savings[0].baseline_name, "Acme Value");

        // Identical energy profiles, so the gap is pure capital:
        // 10 lamps * (45 - 20) per lamp = 250 over 5 years.
        assert!(approx_eq(savings[0].five_year_savings, 250.0));
        assert!(approx_eq(savings[0].annual_savings, 50.0));
    }

    #[test]
    fn test_cheaper_rival_yields_negative_savings() {
        let s = site(10, 8.0, 5_000.0, 0.15);
        let lamps = vec![
            lamp("Acme Prime", "Acme", 100.0, 60.0, 50.0),
            lamp("Discounter", "Other", 100.0, 60.0, 10.0),
        ];
        let result = compare_and_rank(&lamps, &s, Some("Acme"));
        let savings = result.savings.expect("savings section");

        // 10 * (10 - 50) = -400: the rival is cheaper, value unclamped.
        assert!(savings[0].five_year_savings < 0.0);
        assert!(approx_eq(savings[0].five_year_savings, -400.0));
        assert!(approx_eq(savings[0].annual_savings, -80.0));
    }

    #[test]
    fn test_savings_consistent_with_metrics() {
        let s = site(500, 20.0, 30_000.0, 0.30);
        let lamps = vec![
            lamp("Acme HighBay", "Acme", 240.0, 204.0, 140.0),
            lamp("Rival HighBay", "Other", 200.0, 180.0, 110.0),
        ];
        let result = compare_and_rank(&lamps, &s, Some("Acme"));
        let savings = result.savings.expect("savings section");

        let baseline_total = result.metrics[0].total_5_year_cost;
        let rival_total = result.metrics[1].total_5_year_cost;
        assert!(approx_eq(
            savings[0].five_year_savings,
            rival_total - baseline_total
        ));
        assert!(approx_eq(
            savings[0].annual_savings,
            savings[0].five_year_savings / 5.0
        ));
    }

    #[test]
    fn test_no_savings_without_baseline_label() {
        let lamps = vec![
            lamp("A", "MakerOne", 100.0, 60.0, 10.0),
            lamp("B", "MakerTwo", 120.0, 70.0, 15.0),
        ];
        let result = compare_and_rank(&lamps, &site(10, 8.0, 5_000.0, 0.15), None);
        assert_eq!(result.metrics.len(), 2);
        assert!(result.savings.is_none());
    }

    #[test]
    fn test_no_savings_when_baseline_set_empty() {
        let lamps = vec![lamp("A", "MakerOne", 100.0, 60.0, 10.0)];
        let result = compare_and_rank(&lamps, &site(10, 8.0, 5_000.0, 0.15), Some("Philips"));
        assert!(result.savings.is_none());
    }

    #[test]
    fn test_no_savings_when_comparison_set_empty() {
        let lamps = vec![
            lamp("Acme A", "Acme", 100.0, 60.0, 10.0),
            lamp("Acme B", "Acme", 120.0, 70.0, 15.0),
        ];
        let result = compare_and_rank(&lamps, &site(10, 8.0, 5_000.0, 0.15), Some("Acme"));
        assert!(result.savings.is_none());
    }

    #[test]
    fn test_baseline_matches_make_case_insensitively() {
        let lamps = vec![
            lamp("Flagship", "Philips Lighting", 100.0, 60.0, 10.0),
            lamp("Rival", "Other", 100.0, 60.0, 12.0),
        ];
        let result = compare_and_rank(&lamps, &site(10, 8.0, 5_000.0, 0.15), Some("philips"));
        let savings = result.savings.expect("savings section");
        assert_eq!(savings[0].baseline_name, "Flagship");
    }
}

// =============================================================================
// Serialization of results
// =============================================================================

mod serialization_tests {
    use super::*;

    #[test]
    fn test_comparison_json_shape() {
        let lamps = vec![lamp("A", "Acme", 100.0, 50.0, 10.0)];
        let result = compare_and_rank(&lamps, &site(10, 8.0, 10_000.0, 0.15), None);

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["metrics"][0]["suitability"], "NOT_SUITABLE");
        assert_eq!(json["metrics"][0]["light_output_per_lamp"], 5_000.0);
        // Savings section is omitted entirely, not null.
        assert!(json.get("savings").is_none());
    }
}
