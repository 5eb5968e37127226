// Scripted prompt for tests: replays queued answers and records everything said.
// An empty queue behaves like end of input and cancels.

use crate::console::prompt::{InputStatus, Prompt};
use anyhow::{bail, Result};
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Answer {
    Text(&'static str),
    Number(f64),
    Confirm(bool),
    Select(usize),
    Cancel,
}

#[derive(Debug, Default)]
pub(crate) struct ScriptedPrompt {
    answers: VecDeque<Answer>,
    pub questions: Vec<String>,
    pub output: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        ScriptedPrompt {
            answers: answers.into_iter().collect(),
            ..Default::default()
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self, question: &str) -> Option<Answer> {
        self.questions.push(question.to_string());
        match self.answers.pop_front() {
            None | Some(Answer::Cancel) => None,
            Some(answer) => Some(answer),
        }
    }
}

impl Prompt for ScriptedPrompt {
    fn text(&mut self, question: &str) -> Result<(InputStatus, String)> {
        match self.next(question) {
            None => Ok((InputStatus::Cancelled, String::new())),
            Some(Answer::Text(text)) => Ok((InputStatus::Success, text.to_string())),
            Some(other) => bail!("expected text for {:?}, scripted {:?}", question, other),
        }
    }

    fn number(&mut self, question: &str, minimum: f64) -> Result<(InputStatus, f64)> {
        match self.next(question) {
            None => Ok((InputStatus::Cancelled, minimum)),
            Some(Answer::Number(value)) if value >= minimum => Ok((InputStatus::Success, value)),
            Some(other) => bail!(
                "expected number >= {} for {:?}, scripted {:?}",
                minimum,
                question,
                other
            ),
        }
    }

    fn confirm(&mut self, question: &str) -> Result<(InputStatus, bool)> {
        match self.next(question) {
            None => Ok((InputStatus::Cancelled, false)),
            Some(Answer::Confirm(yes)) => Ok((InputStatus::Success, yes)),
            Some(other) => bail!("expected y/n for {:?}, scripted {:?}", question, other),
        }
    }

    fn select(&mut self, question: &str, items: &[String]) -> Result<(InputStatus, usize)> {
        if items.is_empty() {
            return Ok((InputStatus::Cancelled, 0));
        }
        match self.next(question) {
            None => Ok((InputStatus::Cancelled, 0)),
            Some(Answer::Select(index)) => Ok((InputStatus::Success, index)),
            Some(other) => bail!("expected selection for {:?}, scripted {:?}", question, other),
        }
    }

    fn say(&mut self, line: &str) -> Result<()> {
        self.output.push(line.to_string());
        Ok(())
    }
}
