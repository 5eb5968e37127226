// 🔁 Interaction Loop
//
// Root:    Add Person | View People
// Editing: Eat | Exercise | Promote | Calculate Paycheck | Delete
//
// View People is a selection sub-loop: pick someone, run the per-record
// menu, clear the selection, pick again, until the operator backs out.

use crate::actions;
use crate::console::menu::{self, Flow, MenuEntry};
use crate::console::{InputStatus, Prompt};
use crate::session::Session;
use anyhow::Result;
use tracing::{debug, info};

pub const ROOT_QUESTION: &str = "What would you like to do?";
pub const EDIT_QUESTION: &str = "What would you like to do?";
pub const SELECT_QUESTION: &str = "Who do you want to edit?";

pub const ROOT_ACTIONS: [MenuEntry; 2] = [
    MenuEntry::new("Add Person", actions::add_person),
    MenuEntry::new("View People", view_people),
];

pub const EDIT_ACTIONS: [MenuEntry; 5] = [
    MenuEntry::new("Eat", actions::eat),
    MenuEntry::new("Exercise", actions::exercise),
    MenuEntry::new("Promote", actions::promote),
    MenuEntry::new("Calculate Paycheck", actions::pay),
    MenuEntry::new("Delete", actions::delete),
];

/// Run the root menu until it ends with anything but `Success`
pub fn run(session: &mut Session, prompt: &mut dyn Prompt) -> Result<()> {
    info!("session started");

    loop {
        let status = menu::run(ROOT_QUESTION, &ROOT_ACTIONS, session, prompt)?;
        if status != InputStatus::Success {
            break;
        }
    }

    info!(people = session.len(), "session ended");
    Ok(())
}

/// Selection sub-loop behind "View People"
pub fn view_people(session: &mut Session, prompt: &mut dyn Prompt) -> Result<Flow> {
    loop {
        let names = session.names();
        let (status, index) = prompt.select(SELECT_QUESTION, &names)?;
        if status == InputStatus::Cancelled {
            break;
        }

        session.select(index)?;
        let long = session.current()?.describe();
        prompt.say(&long)?;
        debug!(mode = session.mode().title(), "entered per-record menu");

        let result = menu::run(EDIT_QUESTION, &EDIT_ACTIONS, session, prompt);
        session.deselect();
        result?;
    }

    Ok(Flow::Continue)
}

// ============================================================================
// TESTS
// ============================================================================
