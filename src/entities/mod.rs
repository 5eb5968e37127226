// Entity Models
//
// Each record has:
// - Stable identity (UUID) that NEVER changes
// - Values that only change through the record's own operations
// - An optional insurance attachment backed by the shared plan table

pub mod insurance;
pub mod person;

pub use insurance::{Enrollment, Plan, PlanTable};
pub use person::{InsuredPerson, Person, Record, StartingValues};
