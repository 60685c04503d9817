use super::{Command, CommandError};
use crate::core::state::ShellState;

#[derive(Clone)]
pub struct GreetCommand;

impl Default for GreetCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl GreetCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for GreetCommand {
    fn execute(&self, _args: &[String], state: &mut ShellState) -> Result<String, CommandError> {
        Ok(format!(
            "Hello, {}! Welcome to your shell.",
            state.username
        ))
    }
}
