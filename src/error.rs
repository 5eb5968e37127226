// Roster error taxonomy
// Conditions raised by the record model, the session registry and config validation.
// Prompt-level validation never reaches this type: the prompts re-ask instead.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RosterError {
    /// Selection index outside `[0, len)`
    #[error("index {index} is out of range for {len} people")]
    OutOfRange { index: usize, len: usize },

    /// A per-record operation was attempted with no record selected
    #[error("no person is selected")]
    NothingSelected,

    /// Plan name that is not part of the plan-rate table
    #[error("unrecognized insurance plan '{0}'")]
    UnknownPlan(String),

    /// An update would leave a numeric field infinite or NaN
    #[error("{field} would no longer be a finite number")]
    NonFinite { field: &'static str },

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
