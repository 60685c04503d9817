use super::{Command, CommandError};
use crate::core::state::ShellState;
use std::fs;

/// Minimal runnable stub written by the `cli` command. The generated
/// file is never read back by the shell.
const SCAFFOLD: &str = "fn main() {\n    let args: Vec<String> = std::env::args().skip(1).collect();\n    if args.is_empty() {\n        eprintln!(\"usage: <tool> <argument>...\");\n        return;\n    }\n    println!(\"arguments: {}\", args.join(\" \"));\n}\n";

#[derive(Clone)]
pub struct CliCommand;

impl Default for CliCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CliCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for CliCommand {
    fn execute(&self, args: &[String], _state: &mut ShellState) -> Result<String, CommandError> {
        let name = args
            .first()
            .ok_or_else(|| CommandError::Usage("cli <name>".to_string()))?;

        let path = format!("{}.rs", name);
        fs::write(&path, SCAFFOLD)?;

        Ok(format!("Generated tool scaffold {}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_cli_writes_a_scaffold() {
        let base = env::temp_dir().join("eunoia_cli_tool");
        let name = base.to_string_lossy().into_owned();
        let path = format!("{}.rs", name);
        let _ = fs::remove_file(&path);

        let cmd = CliCommand::new();
        let mut state = ShellState::new("tester");
        let message = cmd.execute(&[name], &mut state).unwrap();

        assert!(message.contains(".rs"));
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("fn main()"));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_cli_without_argument() {
        let cmd = CliCommand::new();
        let mut state = ShellState::new("tester");
        assert!(matches!(
            cmd.execute(&[], &mut state),
            Err(CommandError::Usage(_))
        ));
    }
}
