// Payroll Roster - Core Library
// Person records, the session registry, and the interactive menu loop

pub mod actions;
pub mod app;
pub mod config;
pub mod console;
pub mod entities;
pub mod error;
pub mod logging;
pub mod session;

// Re-export commonly used types
pub use config::RosterConfig;
pub use console::{Flow, InputStatus, MenuEntry, Prompt, TerminalPrompt};
pub use entities::{Enrollment, InsuredPerson, Person, Plan, PlanTable, Record, StartingValues};
pub use error::RosterError;
pub use session::{Mode, Session};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
