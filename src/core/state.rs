use std::fmt;

/// One accepted input line: the lowercased command name plus its
/// arguments in original case. Immutable once appended to the session
/// history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRecord {
    pub command: String,
    pub args: Vec<String>,
}

impl CommandRecord {
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
        }
    }
}

impl fmt::Display for CommandRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Mutable session state threaded through every command handler. The
/// history is append-only; records are added before dispatch and never
/// reordered or dropped during a session.
pub struct ShellState {
    pub username: String,
    pub running: bool,
    history: Vec<CommandRecord>,
}

impl ShellState {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            running: true,
            history: Vec::new(),
        }
    }

    pub fn record(&mut self, record: CommandRecord) {
        self.history.push(record);
    }

    pub fn history(&self) -> &[CommandRecord] {
        &self.history
    }
}
