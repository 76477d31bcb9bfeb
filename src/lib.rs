#![forbid(unsafe_code)]

//! # lumencost
//!
//! Lamp cost and suitability comparison calculator.
//!
//! Given site requirements (lamp count, operating hours, required
//! lumens, energy price) and a set of lamp specifications, computes
//! per-lamp light output, suitability against a lumen threshold, and
//! multi-horizon energy/capital cost projections, then ranks
//! alternatives against a baseline product line.
//!
//! ## Example
//!
//! ```rust
//! use lumencost::{compare_and_rank, LampSpec, SiteRequirements};
//!
//! let site = SiteRequirements {
//!     number_of_lamps: 500,
//!     hours_per_day: 20.0,
//!     required_lumens: 30_000.0,
//!     energy_cost_per_kwh: 0.30,
//!     currency: "$".to_string(),
//! };
//!
//! let lamps = vec![LampSpec {
//!     name: "HighBay 240".to_string(),
//!     make: "Acme".to_string(),
//!     model: "HB-240".to_string(),
//!     wattage: 240.0,
//!     efficacy: 204.0,
//!     capital_cost: 140.0,
//! }];
//!
//! let result = compare_and_rank(&lamps, &site, Some("Acme"));
//! assert_eq!(result.metrics[0].light_output_per_lamp, 48_960.0);
//! ```

pub mod commands;
pub mod compare;
pub mod engine;
pub mod error;
pub mod model;
pub mod project;

// Re-exports
pub use compare::compare_and_rank;
pub use engine::compute_metrics;
pub use error::{LumencostError, Result};
pub use model::{Comparison, LampMetrics, LampSpec, SavingsEntry, SiteRequirements, Suitability};
pub use project::{validate_site, Project, Report, DEFAULT_PROJECT_FILE};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
