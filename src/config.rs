// ⚙️ Roster Configuration - Defaults as Data
// Starting values and the plan-rate table, optionally loaded from a JSON file

use crate::entities::insurance::{standard_plans, Plan, PlanTable};
use crate::entities::StartingValues;
use crate::error::RosterError;
use anyhow::{Context as AnyhowContext, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Roster configuration (JSON).
///
/// Every field is optional; missing fields fall back to the standard values.
///
/// ```json
/// {
///   "starting_pay_rate": 12.5,
///   "plans": [{ "name": "vision", "rate": 2.43 }],
///   "color": false
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    /// Pounds
    pub starting_weight: f64,

    pub starting_savings: f64,

    /// Currency per hour
    pub starting_pay_rate: f64,

    /// Plan-rate table, in prompt order
    pub plans: Vec<Plan>,

    /// Colored confirmation messages
    pub color: bool,
}

impl Default for RosterConfig {
    fn default() -> Self {
        let start = StartingValues::default();
        RosterConfig {
            starting_weight: start.weight,
            starting_savings: start.savings,
            starting_pay_rate: start.pay_rate,
            plans: standard_plans(),
            color: true,
        }
    }
}

impl RosterConfig {
    /// Load config from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        let config: RosterConfig =
            serde_json::from_str(&content).context("Failed to parse config JSON")?;

        config
            .validate()
            .with_context(|| format!("Rejected config file: {:?}", path.as_ref()))?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), RosterError> {
        let starting = [
            ("starting_weight", self.starting_weight),
            ("starting_savings", self.starting_savings),
            ("starting_pay_rate", self.starting_pay_rate),
        ];
        for (field, value) in starting {
            if !value.is_finite() {
                return Err(RosterError::InvalidConfig(format!(
                    "{} must be a finite number",
                    field
                )));
            }
        }

        self.plan_table().map(|_| ())
    }

    pub fn plan_table(&self) -> Result<PlanTable, RosterError> {
        PlanTable::new(self.plans.clone())
    }

    /// Whether to color output; `--no-color` overrides the file
    pub fn color_enabled(&self, no_color_flag: bool) -> bool {
        self.color && !no_color_flag
    }

    pub fn starting_values(&self) -> StartingValues {
        StartingValues {
            weight: self.starting_weight,
            savings: self.starting_savings,
            pay_rate: self.starting_pay_rate,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
