// Console collaborators
// Prompts that re-ask on invalid input, the menu runner, and terminal styling

pub mod menu;
pub mod prompt;
pub mod style;

#[cfg(test)]
pub(crate) mod scripted;

pub use menu::{Flow, Handler, MenuEntry};
pub use prompt::{InputStatus, Prompt, TerminalPrompt};
