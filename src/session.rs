// 📋 Session State - In-memory registry plus the current selection
//
// Lives for one interactive run. Insertion order is display order, and the
// index into `records` is how a record gets selected.

use crate::config::RosterConfig;
use crate::entities::{InsuredPerson, Person, PlanTable, Record, StartingValues};
use crate::error::RosterError;
use std::sync::Arc;
use tracing::{debug, info};

/// Which interaction state the session is in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// No selection
    Root,
    /// A record is selected and the per-record menu is active
    Editing,
}

impl Mode {
    pub fn title(&self) -> &'static str {
        match self {
            Mode::Root => "Root",
            Mode::Editing => "Editing",
        }
    }
}

pub struct Session {
    records: Vec<Record>,
    selected: Option<usize>,

    /// Cached display name of the selection, used in confirmation messages
    selected_name: String,

    plans: Arc<PlanTable>,
    starting: StartingValues,
}

impl Session {
    /// Empty session on the standard plan table and starting values
    pub fn new() -> Self {
        Session {
            records: Vec::new(),
            selected: None,
            selected_name: String::new(),
            plans: Arc::new(PlanTable::standard()),
            starting: StartingValues::default(),
        }
    }

    pub fn with_config(config: &RosterConfig) -> Result<Self, RosterError> {
        config.validate()?;

        Ok(Session {
            plans: Arc::new(config.plan_table()?),
            starting: config.starting_values(),
            ..Session::new()
        })
    }

    // ========================================================================
    // REGISTRY
    // ========================================================================

    pub fn add(&mut self, record: Record) {
        info!(
            id = record.id(),
            name = record.name(),
            insured = record.is_insured(),
            "added person"
        );
        self.records.push(record);
    }

    /// Build a new record of the right variant using this session's defaults
    pub fn new_record(&self, name: &str, insured: bool) -> Record {
        if insured {
            InsuredPerson::with_starting(name, &self.starting, Arc::clone(&self.plans)).into()
        } else {
            Person::with_starting(name, &self.starting).into()
        }
    }

    /// Remove the selected record.
    ///
    /// The selection index is stale afterwards; callers must `deselect`
    /// before addressing another record.
    pub fn remove_current(&mut self) -> Result<Record, RosterError> {
        let index = self.selected.ok_or(RosterError::NothingSelected)?;
        if index >= self.records.len() {
            return Err(RosterError::OutOfRange {
                index,
                len: self.records.len(),
            });
        }

        let removed = self.records.remove(index);
        info!(id = removed.id(), name = removed.name(), "removed person");
        Ok(removed)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Short display names in registry order
    pub fn names(&self) -> Vec<String> {
        self.records.iter().map(|r| r.to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn plans(&self) -> &PlanTable {
        &self.plans
    }

    // ========================================================================
    // SELECTION
    // ========================================================================

    /// Select a record by index. Out-of-range leaves the selection untouched.
    pub fn select(&mut self, index: usize) -> Result<(), RosterError> {
        let record = self.records.get(index).ok_or(RosterError::OutOfRange {
            index,
            len: self.records.len(),
        })?;

        self.selected_name = record.to_string();
        self.selected = Some(index);
        debug!(index, name = %self.selected_name, "selected person");
        Ok(())
    }

    pub fn deselect(&mut self) {
        if self.selected.take().is_some() {
            debug!(name = %self.selected_name, "cleared selection");
        }
        self.selected_name.clear();
    }

    pub fn current(&self) -> Result<&Record, RosterError> {
        let index = self.selected.ok_or(RosterError::NothingSelected)?;
        self.records.get(index).ok_or(RosterError::OutOfRange {
            index,
            len: self.records.len(),
        })
    }

    pub fn current_mut(&mut self) -> Result<&mut Record, RosterError> {
        let index = self.selected.ok_or(RosterError::NothingSelected)?;
        let len = self.records.len();
        self.records
            .get_mut(index)
            .ok_or(RosterError::OutOfRange { index, len })
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_name(&self) -> Option<&str> {
        self.selected.map(|_| self.selected_name.as_str())
    }

    pub fn mode(&self) -> Mode {
        if self.selected.is_some() {
            Mode::Editing
        } else {
            Mode::Root
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Plan;

    fn session_with(names: &[&str]) -> Session {
        let mut session = Session::new();
        for name in names {
            let record = session.new_record(name, false);
            session.add(record);
        }
        session
    }

    #[test]
    fn test_new_session_is_empty_root() {
        let session = Session::new();

        assert!(session.is_empty());
        assert_eq!(session.selected_index(), None);
        assert_eq!(session.selected_name(), None);
        assert_eq!(session.mode(), Mode::Root);
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let session = session_with(&["Ada", "Bo", "Cy"]);
        assert_eq!(session.names(), vec!["Ada", "Bo", "Cy"]);
    }

    #[test]
    fn test_select_and_current() {
        let mut session = session_with(&["Ada", "Bo"]);

        session.select(1).unwrap();
        assert_eq!(session.mode(), Mode::Editing);
        assert_eq!(session.selected_name(), Some("Bo"));
        assert_eq!(session.current().unwrap().name(), "Bo");

        session.current_mut().unwrap().eat(2.0).unwrap();
        assert_eq!(session.records()[1].weight(), 10.0);
    }

    #[test]
    fn test_select_out_of_range_keeps_selection() {
        let mut session = session_with(&["Ada"]);
        session.select(0).unwrap();

        let err = session.select(5).unwrap_err();
        assert_eq!(err, RosterError::OutOfRange { index: 5, len: 1 });
        assert_eq!(session.selected_index(), Some(0));

        session.deselect();
        assert!(session.select(1).is_err());
        assert_eq!(session.selected_index(), None);
    }

    #[test]
    fn test_nothing_selected() {
        let mut session = session_with(&["Ada"]);

        assert_eq!(session.current().unwrap_err(), RosterError::NothingSelected);
        assert_eq!(session.current_mut().unwrap_err(), RosterError::NothingSelected);
        assert_eq!(session.remove_current().unwrap_err(), RosterError::NothingSelected);
        assert_eq!(session.len(), 1);
    }

    #[test]
    fn test_delete_only_record() {
        let mut session = session_with(&["Ada"]);
        session.select(0).unwrap();

        let removed = session.remove_current().unwrap();
        session.deselect();

        assert_eq!(removed.name(), "Ada");
        assert!(session.is_empty());
        assert_eq!(session.selected_index(), None);
        assert_eq!(session.mode(), Mode::Root);
    }

    #[test]
    fn test_stale_selection_is_not_silently_reused() {
        let mut session = session_with(&["Ada"]);
        session.select(0).unwrap();
        session.remove_current().unwrap();

        assert_eq!(
            session.current().unwrap_err(),
            RosterError::OutOfRange { index: 0, len: 0 }
        );
    }

    #[test]
    fn test_new_record_uses_session_defaults() {
        let config = RosterConfig {
            starting_pay_rate: 15.0,
            plans: vec![Plan::new("pet", 1.0)],
            ..RosterConfig::default()
        };
        let session = Session::with_config(&config).unwrap();

        let record = session.new_record("Ada", true);
        assert_eq!(record.pay_rate(), 15.0);
        let insured = record.as_insured().unwrap();
        assert_eq!(insured.insurance_status().collect::<Vec<_>>(), vec![("pet", false)]);

        assert!(!session.new_record("Bo", false).is_insured());
    }

    #[test]
    fn test_added_person_round_trips_defaults() {
        let session = session_with(&["Ada"]);
        let record = &session.records()[0];

        let long = record.describe();
        assert!(long.contains("Name=Ada"));
        assert!(long.contains("Weight=8"));
        assert!(long.contains("Savings=100"));
        assert!(long.contains("PayRate=9.25"));
    }
}
