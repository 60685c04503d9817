use std::collections::BTreeMap;

mod add;
mod cli;
mod connect;
mod fs_ops;
mod greet;
mod help;
mod history;
mod quit;

pub use add::AddCommand;
pub use cli::CliCommand;
pub use connect::ConnectCommand;
pub use fs_ops::{MkdirCommand, RmCommand, TouchCommand};
pub use greet::GreetCommand;
pub use help::HelpCommand;
pub use history::HistoryCommand;
pub use quit::QuitCommand;

use crate::core::state::ShellState;
use crate::core::store::RecordStore;

#[derive(Debug)]
pub enum CommandError {
    Usage(String),
    NotFound(String),
    InvalidArgument(String),
    Io(std::io::Error),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::Usage(msg) => write!(f, "usage: {}", msg),
            CommandError::NotFound(path) => write!(f, "path not found: {}", path),
            CommandError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            CommandError::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::Io(err)
    }
}

/// One unit of behavior bound to a command name. Handlers return their
/// user-facing message; the loop prints it and keeps running whether
/// the result is Ok or Err.
pub trait Command {
    fn execute(&self, args: &[String], state: &mut ShellState) -> Result<String, CommandError>;
}

#[derive(Clone)]
pub enum CommandType {
    Help(HelpCommand),
    Quit(QuitCommand),
    Greet(GreetCommand),
    History(HistoryCommand),
    Add(AddCommand),
    Mkdir(MkdirCommand),
    Touch(TouchCommand),
    Rm(RmCommand),
    Connect(ConnectCommand),
    Cli(CliCommand),
}

impl Command for CommandType {
    fn execute(&self, args: &[String], state: &mut ShellState) -> Result<String, CommandError> {
        match self {
            CommandType::Help(cmd) => cmd.execute(args, state),
            CommandType::Quit(cmd) => cmd.execute(args, state),
            CommandType::Greet(cmd) => cmd.execute(args, state),
            CommandType::History(cmd) => cmd.execute(args, state),
            CommandType::Add(cmd) => cmd.execute(args, state),
            CommandType::Mkdir(cmd) => cmd.execute(args, state),
            CommandType::Touch(cmd) => cmd.execute(args, state),
            CommandType::Rm(cmd) => cmd.execute(args, state),
            CommandType::Connect(cmd) => cmd.execute(args, state),
            CommandType::Cli(cmd) => cmd.execute(args, state),
        }
    }
}

/// Name to handler mapping, fixed at construction. `register` stays
/// available so the set is not frozen into the type, but nothing
/// re-registers at runtime.
pub struct CommandRegistry {
    commands: BTreeMap<String, CommandType>,
}

impl CommandRegistry {
    pub fn new(store: RecordStore) -> Self {
        let mut registry = Self {
            commands: BTreeMap::new(),
        };

        registry.register("help", CommandType::Help(HelpCommand::new()));
        registry.register("exit", CommandType::Quit(QuitCommand::new()));
        registry.register("quit", CommandType::Quit(QuitCommand::new()));
        registry.register("greet", CommandType::Greet(GreetCommand::new()));
        registry.register("history", CommandType::History(HistoryCommand::new()));
        registry.register("add", CommandType::Add(AddCommand::new(store)));
        registry.register("mkdir", CommandType::Mkdir(MkdirCommand::new()));
        registry.register("touch", CommandType::Touch(TouchCommand::new()));
        registry.register("rm", CommandType::Rm(RmCommand::new()));
        registry.register("connect", CommandType::Connect(ConnectCommand::new()));
        registry.register("cli", CommandType::Cli(CliCommand::new()));

        registry
    }

    pub fn register(&mut self, name: &str, command: CommandType) {
        self.commands.insert(name.to_lowercase(), command);
    }

    pub fn lookup(&self, name: &str) -> Option<&CommandType> {
        self.commands.get(&name.to_lowercase())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(&name.to_lowercase())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }
}
