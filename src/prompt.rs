// ============================================================================
// Prompt Module - Line-Based Console Interaction
//
// Every question the merger asks goes through the `Prompter` trait. The
// console implementation renders prompt text exactly as given through
// dialoguer when attached to a terminal, and falls back to plain
// stdout/stdin lines when input is piped.
// ============================================================================

use crate::errors::{MergerError, MergerResult};
use dialoguer::{theme::Theme, Input};
use std::collections::VecDeque;
use std::fmt;
use std::io::{self, BufRead, IsTerminal, Write};

pub const ENCODING_PROMPT: &str =
    "Write encoding (default: 'utf-8'. use '1252' for windows files) ";

pub const OUTPUT_PROMPT: &str = "output dictionary name: ";

/// Confirmation question for one dictionary file
pub fn merge_prompt(file_name: &str) -> String {
    format!("Do you wish to merge {}? (y/N)", file_name)
}

/// Only a case-insensitive "y" counts as yes
pub fn is_affirmative(answer: &str) -> bool {
    answer.to_lowercase() == "y"
}

/// Asks one question and returns the raw answer line without its terminator
pub trait Prompter {
    fn ask(&mut self, prompt: &str) -> MergerResult<String>;
}

/// Theme that prints prompts verbatim, without dialoguer's ": " decoration
pub struct PlainTheme;

impl Theme for PlainTheme {
    fn format_input_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        _default: Option<&str>,
    ) -> fmt::Result {
        write!(f, "{}", prompt)
    }

    fn format_input_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        sel: &str,
    ) -> fmt::Result {
        write!(f, "{}{}", prompt, sel)
    }
}

/// Prompter bound to the process console
pub struct ConsolePrompter {
    theme: PlainTheme,
    interactive: bool,
}

impl ConsolePrompter {
    pub fn new() -> Self {
        Self {
            theme: PlainTheme,
            interactive: io::stdin().is_terminal() && io::stderr().is_terminal(),
        }
    }

    fn ask_terminal(&self, prompt: &str) -> MergerResult<String> {
        let answer = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(answer)
    }

    fn ask_piped(&self, prompt: &str) -> MergerResult<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", prompt)?;
        stdout.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(MergerError::Prompt(format!(
                "end of input while waiting for an answer to {:?}",
                prompt
            )));
        }
        Ok(strip_terminator(line))
    }
}

impl Default for ConsolePrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for ConsolePrompter {
    fn ask(&mut self, prompt: &str) -> MergerResult<String> {
        if self.interactive {
            self.ask_terminal(prompt)
        } else {
            self.ask_piped(prompt)
        }
    }
}

fn strip_terminator(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

/// Prompter that replays prepared answers and records the questions asked
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Prompts seen so far, in order
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, prompt: &str) -> MergerResult<String> {
        self.asked.push(prompt.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| MergerError::Prompt(format!("no answer scripted for {:?}", prompt)))
    }
}
