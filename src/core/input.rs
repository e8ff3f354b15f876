//! Prompt capability used by the command handlers.
//!
//! Handlers only see [`InputProvider`], so tests can feed fixed answers
//! through [`ScriptedInput`] instead of driving a terminal.

use crate::error::CliError;
use rpassword::read_password;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

pub trait InputProvider {
    /// Ask for one line of free text. The answer is trimmed.
    fn prompt(&mut self, message: &str) -> Result<String, CliError>;

    /// Like [`InputProvider::prompt`], but the answer should not be echoed.
    fn prompt_secret(&mut self, message: &str) -> Result<String, CliError> {
        self.prompt(message)
    }
}

/// Reads answers from stdin.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }

    fn show_prompt(message: &str) -> Result<(), CliError> {
        print!("{} ", message);
        io::stdout()
            .flush()
            .map_err(|e| CliError::InputRead(format!("Failed to flush stdout: {}", e)))
    }
}

impl InputProvider for TerminalInput {
    fn prompt(&mut self, message: &str) -> Result<String, CliError> {
        Self::show_prompt(message)?;

        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| CliError::InputRead(e.to_string()))?;
        if read == 0 {
            return Err(CliError::InputRead(format!(
                "unexpected end of input at '{}'",
                message
            )));
        }

        Ok(line.trim().to_string())
    }

    fn prompt_secret(&mut self, message: &str) -> Result<String, CliError> {
        // rpassword needs a tty; piped input falls back to a plain read.
        if !atty::is(atty::Stream::Stdin) {
            return self.prompt(message);
        }

        Self::show_prompt(message)?;
        let secret = read_password().map_err(|e| CliError::InputRead(e.to_string()))?;
        Ok(secret.trim().to_string())
    }
}

/// Answers prompts from a fixed queue, recording each question asked.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    answers: VecDeque<String>,
    pub asked: Vec<String>,
}

impl ScriptedInput {
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

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl InputProvider for ScriptedInput {
    fn prompt(&mut self, message: &str) -> Result<String, CliError> {
        self.asked.push(message.to_string());
        self.answers
            .pop_front()
            .map(|answer| answer.trim().to_string())
            .ok_or_else(|| CliError::InputRead(format!("no scripted answer for '{}'", message)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_input_answers_in_order() {
        let mut input = ScriptedInput::new(["10", " usd "]);
        assert_eq!(input.prompt("Enter amount:").expect("answer"), "10");
        assert_eq!(input.prompt_secret("Key:").expect("answer"), "usd");
        assert_eq!(input.asked, vec!["Enter amount:", "Key:"]);
        assert_eq!(input.remaining(), 0);
    }

    #[test]
    fn test_scripted_input_exhausted() {
        let mut input = ScriptedInput::new(Vec::<String>::new());
        let result = input.prompt("Base currency (e.g., USD):");
        assert!(matches!(result, Err(CliError::InputRead(msg)) if msg.contains("Base currency")));
    }
}
