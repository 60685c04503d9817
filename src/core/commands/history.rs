use super::{Command, CommandError};
use crate::core::state::ShellState;
use std::fmt::Write;

#[derive(Clone)]
pub struct HistoryCommand;

impl Default for HistoryCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for HistoryCommand {
    fn execute(&self, _args: &[String], state: &mut ShellState) -> Result<String, CommandError> {
        if state.history().is_empty() {
            return Ok("no commands yet".to_string());
        }

        let mut listing = String::from("Command history:");
        for (index, record) in state.history().iter().enumerate() {
            // Writing to a String cannot fail; ignore the fmt result.
            let _ = write!(listing, "\n  {}: {}", index + 1, record);
        }
        Ok(listing)
    }
}
