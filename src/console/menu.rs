// 🧭 Menu runner
// Presents labels, dispatches the chosen handler, repeats until the operator backs out.

use crate::console::prompt::{InputStatus, Prompt};
use crate::session::Session;
use anyhow::{bail, Result};
use tracing::debug;

/// What a handler asks the menu to do next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Show the menu again
    Continue,
    /// Leave this menu
    Exit,
}

pub type Handler = fn(&mut Session, &mut dyn Prompt) -> Result<Flow>;

#[derive(Clone, Copy)]
pub struct MenuEntry {
    pub label: &'static str,
    pub handler: Handler,
}

impl MenuEntry {
    pub const fn new(label: &'static str, handler: Handler) -> Self {
        MenuEntry { label, handler }
    }
}

/// Run a menu until it ends.
///
/// Returns `Cancelled` when the operator backs out and `Success` when a
/// handler asked to leave. Handler errors abort the menu.
pub fn run(
    question: &str,
    entries: &[MenuEntry],
    session: &mut Session,
    prompt: &mut dyn Prompt,
) -> Result<InputStatus> {
    let labels: Vec<String> = entries.iter().map(|e| e.label.to_string()).collect();

    loop {
        let (status, index) = prompt.select(question, &labels)?;
        if status == InputStatus::Cancelled {
            return Ok(InputStatus::Cancelled);
        }

        let Some(entry) = entries.get(index) else {
            bail!("menu choice {} is out of range for {} entries", index, entries.len());
        };

        debug!(label = entry.label, mode = session.mode().title(), "menu dispatch");
        if (entry.handler)(session, prompt)? == Flow::Exit {
            return Ok(InputStatus::Success);
        }
    }
}
