use super::{Command, CommandError};
use crate::core::state::ShellState;
use crate::core::store::{LoginRecord, RecordStore};

#[derive(Clone)]
pub struct AddCommand {
    store: RecordStore,
}

impl AddCommand {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }
}

impl Command for AddCommand {
    fn execute(&self, args: &[String], _state: &mut ShellState) -> Result<String, CommandError> {
        // Arguments past the fourth are accepted and ignored.
        let [server, username, email, password] = match args {
            [server, username, email, password, ..] => [server, username, email, password],
            _ => {
                return Err(CommandError::Usage(
                    "add <server> <username> <email> <password>".to_string(),
                ))
            }
        };

        let record = LoginRecord {
            server: server.clone(),
            username: username.clone(),
            email: email.clone(),
            password: password.clone(),
        };
        self.store.append(&record)?;

        Ok(format!(
            "Added login for {} on {} to {}\nnote: records are stored in plain text",
            username,
            server,
            self.store.file_name()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{env, fs, path::PathBuf};

    fn setup(name: &str) -> (AddCommand, PathBuf) {
        let path = env::temp_dir().join(name);
        let _ = fs::remove_file(&path);
        (AddCommand::new(RecordStore::at(&path)), path)
    }

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_add_appends_one_line() {
        let (cmd, path) = setup("eunoia_add_ok.txt");
        let mut state = ShellState::new("tester");

        let message = cmd
            .execute(&args(&["ubuntu", "user1", "user1@server.com", "pw"]), &mut state)
            .unwrap();
        assert!(message.contains("user1"));
        assert!(message.contains("ubuntu"));

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "SERVER: ubuntu | USERNAME: user1 | EMAIL: user1@server.com | PASSWORD: pw\n"
        );
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_add_with_three_args_is_a_usage_error() {
        let (cmd, path) = setup("eunoia_add_usage.txt");
        let mut state = ShellState::new("tester");

        let result = cmd.execute(&args(&["a", "b", "c"]), &mut state);
        assert!(matches!(result, Err(CommandError::Usage(_))));
        assert!(!path.exists(), "usage error must not create the store");
    }

    #[test]
    fn test_add_ignores_extra_arguments() {
        let (cmd, path) = setup("eunoia_add_extra.txt");
        let mut state = ShellState::new("tester");

        cmd.execute(&args(&["a", "b", "c", "d", "ignored", "also"]), &mut state)
            .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1);
        assert!(!content.contains("ignored"));
        fs::remove_file(path).unwrap();
    }
}
