use std::collections::BTreeSet;

use rustyline::completion::Pair;

/// Completes the first word of a line against the registered command
/// names and any configured aliases. The command set is closed, so no
/// PATH scanning is involved.
#[derive(Clone)]
pub struct CommandCompleter {
    commands: BTreeSet<String>,
    aliases: BTreeSet<String>,
}

impl CommandCompleter {
    pub fn new(command_names: Vec<String>) -> Self {
        Self {
            commands: command_names.into_iter().collect(),
            aliases: BTreeSet::new(),
        }
    }

    pub fn set_aliases(&mut self, aliases: impl IntoIterator<Item = String>) {
        self.aliases = aliases.into_iter().collect();
    }

    pub fn is_command(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        self.commands.contains(&word) || self.aliases.contains(&word)
    }

    pub fn complete_command(&self, input: &str) -> Vec<Pair> {
        let input = input.trim().to_lowercase();
        let mut matches = Vec::new();

        for name in self.commands.iter().filter(|name| name.starts_with(&input)) {
            matches.push(Pair {
                display: name.clone(),
                replacement: name.clone(),
            });
        }

        for alias in self.aliases.iter().filter(|alias| alias.starts_with(&input)) {
            matches.push(Pair {
                display: format!("{} (alias)", alias),
                replacement: alias.clone(),
            });
        }

        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completer() -> CommandCompleter {
        CommandCompleter::new(vec![
            "help".to_string(),
            "history".to_string(),
            "greet".to_string(),
        ])
    }

    #[test]
    fn test_prefix_completion() {
        let matches = completer().complete_command("he");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].replacement, "help");
    }

    #[test]
    fn test_shared_prefix_yields_both() {
        let matches = completer().complete_command("h");
        let names: Vec<&str> = matches.iter().map(|p| p.replacement.as_str()).collect();
        assert_eq!(names, vec!["help", "history"]);
    }

    #[test]
    fn test_alias_completion_is_marked() {
        let mut completer = completer();
        completer.set_aliases(vec!["hi".to_string()]);

        let matches = completer.complete_command("hi");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].display, "hi (alias)");
        assert_eq!(matches[0].replacement, "hi");
    }

    #[test]
    fn test_is_command_ignores_case() {
        let completer = completer();
        assert!(completer.is_command("HELP"));
        assert!(!completer.is_command("rm"));
    }
}
