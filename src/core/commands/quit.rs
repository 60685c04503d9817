use super::{Command, CommandError};
use crate::core::state::ShellState;

/// Handles both `exit` and `quit`; the only in-band way to stop the
/// loop besides end-of-input.
#[derive(Clone)]
pub struct QuitCommand;

impl Default for QuitCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl QuitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for QuitCommand {
    fn execute(&self, _args: &[String], state: &mut ShellState) -> Result<String, CommandError> {
        state.running = false;
        Ok(format!("Goodbye, {}!", state.username))
    }
}
