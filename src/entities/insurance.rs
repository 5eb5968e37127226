// 🩺 Insurance Plans - Plan-rate table and per-person enrollment
//
// The plan-rate table is fixed for a run. Every insured person shares it
// through an Arc and keeps one enrollment flag per plan, in table order,
// so the enrollment keys can never drift from the table keys.

use crate::error::RosterError;
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

// ============================================================================
// PLAN
// ============================================================================

/// One insurance plan and what it costs per pay period
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Plan {
    /// Plan name (e.g., "vision", "dental")
    pub name: String,

    /// Deduction per pay period
    pub rate: f64,
}

impl Plan {
    pub fn new(name: impl Into<String>, rate: f64) -> Self {
        Plan {
            name: name.into(),
            rate,
        }
    }
}

// ============================================================================
// PLAN TABLE
// ============================================================================

/// Ordered, validated plan-rate table
#[derive(Debug, Clone, PartialEq)]
pub struct PlanTable {
    plans: Vec<Plan>,
}

impl PlanTable {
    /// Build a table, rejecting blank or duplicate names and non-finite or negative rates
    pub fn new(mut plans: Vec<Plan>) -> Result<Self, RosterError> {
        let mut seen = HashSet::new();

        for plan in &mut plans {
            plan.name = plan.name.trim().to_string();
            let name = plan.name.as_str();
            if name.is_empty() {
                return Err(RosterError::InvalidConfig(
                    "plan names must not be empty".to_string(),
                ));
            }
            if !seen.insert(name.to_string()) {
                return Err(RosterError::InvalidConfig(format!(
                    "plan '{}' is listed more than once",
                    name
                )));
            }
            if !plan.rate.is_finite() || plan.rate < 0.0 {
                return Err(RosterError::InvalidConfig(format!(
                    "plan '{}' has an invalid rate {}",
                    name, plan.rate
                )));
            }
        }

        Ok(PlanTable { plans })
    }

    /// vision 2.43, dental 3.50, medical 43.00
    pub fn standard() -> Self {
        PlanTable {
            plans: standard_plans(),
        }
    }

    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.plans.iter().map(|p| p.name.as_str())
    }

    /// Position of a plan in table order
    pub fn position(&self, name: &str) -> Option<usize> {
        self.plans.iter().position(|p| p.name == name)
    }

    pub fn rate(&self, name: &str) -> Option<f64> {
        self.position(name).map(|i| self.plans[i].rate)
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}

impl Default for PlanTable {
    fn default() -> Self {
        Self::standard()
    }
}

pub fn standard_plans() -> Vec<Plan> {
    vec![
        Plan::new("vision", 2.43),
        Plan::new("dental", 3.50),
        Plan::new("medical", 43.00),
    ]
}

// ============================================================================
// ENROLLMENT
// ============================================================================

/// Enrollment flags keyed by the plan table
#[derive(Debug, Clone)]
pub struct Enrollment {
    table: Arc<PlanTable>,
    enrolled: Vec<bool>,
}

impl Enrollment {
    /// Everything starts out not enrolled
    pub fn new(table: Arc<PlanTable>) -> Self {
        let enrolled = vec![false; table.len()];
        Enrollment { table, enrolled }
    }

    pub fn set(&mut self, plan: &str, enrolled: bool) -> Result<(), RosterError> {
        let index = self
            .table
            .position(plan)
            .ok_or_else(|| RosterError::UnknownPlan(plan.to_string()))?;
        self.enrolled[index] = enrolled;
        Ok(())
    }

    pub fn is_enrolled(&self, plan: &str) -> Option<bool> {
        self.table.position(plan).map(|i| self.enrolled[i])
    }

    /// `(plan, enrolled)` pairs in table order
    pub fn entries(&self) -> impl Iterator<Item = (&str, bool)> {
        self.table.names().zip(self.enrolled.iter().copied())
    }

    /// Sum of rates for every enrolled plan
    pub fn total_cost(&self) -> f64 {
        self.table
            .plans()
            .iter()
            .zip(&self.enrolled)
            .filter(|(_, enrolled)| **enrolled)
            .map(|(plan, _)| plan.rate)
            .sum()
    }
}

impl fmt::Display for Enrollment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (plan, enrolled)) in self.entries().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", plan, enrolled)?;
        }
        f.write_str("}")
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table() {
        let table = PlanTable::standard();

        assert_eq!(table.len(), 3);
        assert_eq!(table.names().collect::<Vec<_>>(), vec!["vision", "dental", "medical"]);
        assert_eq!(table.rate("vision"), Some(2.43));
        assert_eq!(table.rate("dental"), Some(3.50));
        assert_eq!(table.rate("medical"), Some(43.00));
        assert_eq!(table.rate("pet"), None);
    }

    #[test]
    fn test_table_rejects_bad_plans() {
        assert!(PlanTable::new(vec![Plan::new("  ", 1.0)]).is_err());
        assert!(PlanTable::new(vec![Plan::new("vision", 1.0), Plan::new("vision", 2.0)]).is_err());
        assert!(PlanTable::new(vec![Plan::new("vision", -1.0)]).is_err());
        assert!(PlanTable::new(vec![Plan::new("vision", f64::NAN)]).is_err());
        assert!(PlanTable::new(Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn test_enrollment_starts_empty_and_keeps_table_keys() {
        let enrollment = Enrollment::new(Arc::new(PlanTable::standard()));

        let entries: Vec<_> = enrollment.entries().collect();
        assert_eq!(
            entries,
            vec![("vision", false), ("dental", false), ("medical", false)]
        );
        assert_eq!(enrollment.total_cost(), 0.0);
    }

    #[test]
    fn test_unknown_plan_is_rejected_without_changes() {
        let mut enrollment = Enrollment::new(Arc::new(PlanTable::standard()));

        let err = enrollment.set("pet", true).unwrap_err();
        assert_eq!(err, RosterError::UnknownPlan("pet".to_string()));
        assert_eq!(enrollment.entries().count(), 3);
        assert_eq!(enrollment.is_enrolled("pet"), None);
    }

    #[test]
    fn test_total_cost_sums_enrolled_plans() {
        let mut enrollment = Enrollment::new(Arc::new(PlanTable::standard()));
        enrollment.set("vision", true).unwrap();
        enrollment.set("medical", true).unwrap();

        assert!((enrollment.total_cost() - 45.43).abs() < 1e-9);

        enrollment.set("medical", false).unwrap();
        assert!((enrollment.total_cost() - 2.43).abs() < 1e-9);
    }

    #[test]
    fn test_display_lists_plans_in_order() {
        let mut enrollment = Enrollment::new(Arc::new(PlanTable::standard()));
        enrollment.set("dental", true).unwrap();

        assert_eq!(
            enrollment.to_string(),
            "{vision: false, dental: true, medical: false}"
        );
    }
}
