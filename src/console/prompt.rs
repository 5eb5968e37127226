// ⌨️ Prompts - recurring console input
//
// Every prompt keeps asking until it gets a usable answer. The only way out
// without one is end of input, which reports `Cancelled`.

use crate::console::style::{paint, Tone};
use anyhow::{Context as AnyhowContext, Result};
use std::io::{BufRead, Write};

/// How a prompt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputStatus {
    Success,
    Cancelled,
}

/// Operator input and output, as the handlers and menus see it
pub trait Prompt {
    /// Non-empty free-form text
    fn text(&mut self, question: &str) -> Result<(InputStatus, String)>;

    /// A finite number no smaller than `minimum`
    fn number(&mut self, question: &str, minimum: f64) -> Result<(InputStatus, f64)>;

    fn confirm(&mut self, question: &str) -> Result<(InputStatus, bool)>;

    /// Index into `items`; `Cancelled` when the operator backs out
    fn select(&mut self, question: &str, items: &[String]) -> Result<(InputStatus, usize)>;

    fn say(&mut self, line: &str) -> Result<()>;

    /// Confirmation message
    fn success(&mut self, line: &str) -> Result<()> {
        self.say(line)
    }
}

// ============================================================================
// TERMINAL PROMPT
// ============================================================================

/// Line-based prompt over any reader/writer pair (stdin/stdout in the binary)
pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(input: R, output: W, color: bool) -> Self {
        TerminalPrompt {
            input,
            output,
            color,
        }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Write `label`, read one line. `None` on end of input.
    fn ask(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read operator input")?;

        if read == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }

    fn reject(&mut self, message: &str) -> Result<()> {
        let line = paint(message, Tone::Warning, self.color);
        writeln!(self.output, "{}", line)?;
        Ok(())
    }
}

fn label(question: &str) -> String {
    if question.ends_with('?') {
        format!("{} ", question)
    } else {
        format!("{}: ", question)
    }
}

impl<R: BufRead, W: Write> Prompt for TerminalPrompt<R, W> {
    fn text(&mut self, question: &str) -> Result<(InputStatus, String)> {
        let label = label(question);
        loop {
            match self.ask(&label)? {
                None => return Ok((InputStatus::Cancelled, String::new())),
                Some(answer) if answer.is_empty() => self.reject("Please enter a value.")?,
                Some(answer) => return Ok((InputStatus::Success, answer)),
            }
        }
    }

    fn number(&mut self, question: &str, minimum: f64) -> Result<(InputStatus, f64)> {
        let label = label(question);
        loop {
            let Some(answer) = self.ask(&label)? else {
                return Ok((InputStatus::Cancelled, minimum));
            };

            match answer.parse::<f64>() {
                Ok(value) if value.is_finite() && value >= minimum => {
                    return Ok((InputStatus::Success, value))
                }
                Ok(value) if value.is_finite() => {
                    self.reject(&format!("Please enter a number of at least {}.", minimum))?
                }
                _ => self.reject("Please enter a number.")?,
            }
        }
    }

    fn confirm(&mut self, question: &str) -> Result<(InputStatus, bool)> {
        let label = format!("{} (y/n): ", question.trim_end_matches('?'));
        loop {
            let Some(answer) = self.ask(&label)? else {
                return Ok((InputStatus::Cancelled, false));
            };

            match answer.to_lowercase().as_str() {
                "y" | "yes" => return Ok((InputStatus::Success, true)),
                "n" | "no" => return Ok((InputStatus::Success, false)),
                _ => self.reject("Please answer y or n.")?,
            }
        }
    }

    fn select(&mut self, question: &str, items: &[String]) -> Result<(InputStatus, usize)> {
        if items.is_empty() {
            writeln!(self.output, "(nothing to choose from)")?;
            return Ok((InputStatus::Cancelled, 0));
        }

        let heading = paint(question, Tone::Heading, self.color);
        writeln!(self.output, "{}", heading)?;
        for (i, item) in items.iter().enumerate() {
            writeln!(self.output, "  {}) {}", i + 1, item)?;
        }
        writeln!(self.output, "  0) Back")?;

        loop {
            let Some(answer) = self.ask("> ")? else {
                return Ok((InputStatus::Cancelled, 0));
            };

            if answer.is_empty() || answer == "0" {
                return Ok((InputStatus::Cancelled, 0));
            }

            match answer.parse::<usize>() {
                Ok(choice) if (1..=items.len()).contains(&choice) => {
                    return Ok((InputStatus::Success, choice - 1))
                }
                _ => self.reject(&format!("Please pick 1-{} or 0 to go back.", items.len()))?,
            }
        }
    }

    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    fn success(&mut self, line: &str) -> Result<()> {
        let line = paint(line, Tone::Success, self.color);
        self.say(&line)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompt(input: &str) -> TerminalPrompt<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalPrompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), false)
    }

    fn output(prompt: TerminalPrompt<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(prompt.into_inner().1).unwrap()
    }

    #[test]
    fn test_text_reasks_on_blank() {
        let mut p = prompt("\n   \nAda Lovelace\n");

        let answer = p.text("What is the person's name?").unwrap();
        assert_eq!(answer, (InputStatus::Success, "Ada Lovelace".to_string()));

        let out = output(p);
        assert_eq!(out.matches("Please enter a value.").count(), 2);
        assert!(out.starts_with("What is the person's name? "));
    }

    #[test]
    fn test_number_enforces_minimum_and_format() {
        let mut p = prompt("abc\n-1\ninf\n2.5\n");

        let answer = p.number("How much did they eat", 0.0).unwrap();
        assert_eq!(answer, (InputStatus::Success, 2.5));

        let out = output(p);
        assert!(out.starts_with("How much did they eat: "));
        assert_eq!(out.matches("Please enter a number.").count(), 2);
        assert_eq!(out.matches("Please enter a number of at least 0.").count(), 1);
    }

    #[test]
    fn test_number_accepts_minimum_itself() {
        let mut p = prompt("0\n");
        assert_eq!(p.number("Hours", 0.0).unwrap(), (InputStatus::Success, 0.0));
    }

    #[test]
    fn test_confirm() {
        let mut p = prompt("maybe\nYES\nn\n");

        assert_eq!(p.confirm("Delete?").unwrap(), (InputStatus::Success, true));
        assert_eq!(p.confirm("Delete?").unwrap(), (InputStatus::Success, false));
        assert!(output(p).contains("Please answer y or n."));
    }

    #[test]
    fn test_select_returns_zero_based_index() {
        let mut p = prompt("7\n2\n");
        let items = vec!["Ada".to_string(), "Bo".to_string()];

        assert_eq!(p.select("Who?", &items).unwrap(), (InputStatus::Success, 1));

        let out = output(p);
        assert!(out.contains("  1) Ada\n  2) Bo\n  0) Back\n"));
        assert!(out.contains("Please pick 1-2 or 0 to go back."));
    }

    #[test]
    fn test_select_back_and_blank_cancel() {
        let items = vec!["Ada".to_string()];

        let mut p = prompt("0\n");
        assert_eq!(p.select("Who?", &items).unwrap().0, InputStatus::Cancelled);

        let mut p = prompt("\n");
        assert_eq!(p.select("Who?", &items).unwrap().0, InputStatus::Cancelled);
    }

    #[test]
    fn test_select_with_no_items_cancels_without_reading() {
        let mut p = prompt("1\n");
        assert_eq!(p.select("Who?", &[]).unwrap().0, InputStatus::Cancelled);
        assert_eq!(p.text("Name").unwrap(), (InputStatus::Success, "1".to_string()));
    }

    #[test]
    fn test_end_of_input_cancels_every_prompt() {
        let mut p = prompt("");

        assert_eq!(p.text("Name").unwrap().0, InputStatus::Cancelled);
        assert_eq!(p.number("Hours", 0.0).unwrap().0, InputStatus::Cancelled);
        assert_eq!(p.confirm("Sure").unwrap().0, InputStatus::Cancelled);
        assert_eq!(
            p.select("Who?", &["Ada".to_string()]).unwrap().0,
            InputStatus::Cancelled
        );
    }

    #[test]
    fn test_success_without_color_is_plain() {
        let mut p = prompt("");
        p.success("Deleted").unwrap();
        assert_eq!(output(p), "Deleted\n");
    }
}
