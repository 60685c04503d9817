use super::{Command, CommandError};
use crate::core::state::ShellState;
use crate::core::store::STORE_FILE;

#[derive(Clone)]
pub struct HelpCommand;

impl Default for HelpCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for HelpCommand {
    fn execute(&self, _args: &[String], _state: &mut ShellState) -> Result<String, CommandError> {
        Ok(format!(
            "Available commands:
  help                                show this message
  exit | quit                         leave the shell
  greet                               print a greeting
  history                             list the commands entered this session
  add <server> <user> <email> <pass>  append a login record to {}
File and directory management:
  mkdir <path>                        create a directory, parents included
  touch <path>                        create a file or refresh its timestamp
  rm <path>                           remove a file or an empty directory
Simulation tools:
  connect <host>                      simulate connecting to a host
  cli <name>                          generate a command-line tool scaffold",
            STORE_FILE
        ))
    }
}
