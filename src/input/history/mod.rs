mod file_ops;

use std::{collections::BTreeSet, path::PathBuf};

use crate::error::ShellError;
use file_ops::FileOps;

/// Raw input lines carried across sessions, backing the inline hints.
/// Distinct from the in-session command log held by `ShellState`.
pub struct History {
    entries: BTreeSet<String>,
    file_ops: FileOps,
    max_entries: usize,
}

impl History {
    pub fn new(history_file: PathBuf, max_entries: usize) -> Result<Self, ShellError> {
        let file_ops = FileOps::new(history_file);
        let entries = file_ops.load_entries()?;

        Ok(History {
            entries,
            file_ops,
            max_entries,
        })
    }

    pub fn add(&mut self, entry: &str) -> Result<(), ShellError> {
        let entry = entry.trim();
        if entry.is_empty() {
            return Ok(());
        }

        if self.entries.insert(entry.to_string()) {
            self.trim_entries();
            self.file_ops.append_entry(entry)?;
        }
        Ok(())
    }

    pub fn search_prefix(&self, prefix: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|entry| entry.starts_with(prefix))
            .map(String::as_str)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn trim_entries(&mut self) {
        while self.entries.len() > self.max_entries {
            if let Some(first) = self.entries.iter().next().cloned() {
                self.entries.remove(&first);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{env, fs};

    fn temp_history(name: &str, max_entries: usize) -> (History, PathBuf) {
        let path = env::temp_dir().join(name);
        let _ = fs::remove_file(&path);
        (History::new(path.clone(), max_entries).unwrap(), path)
    }

    #[test]
    fn test_add_and_search_prefix() {
        let (mut history, path) = temp_history("eunoia_hist_prefix", 100);
        history.add("mkdir demo").unwrap();
        history.add("mkdir other").unwrap();
        history.add("greet").unwrap();

        let matches = history.search_prefix("mkdir");
        assert_eq!(matches.len(), 2);
        assert!(history.search_prefix("rm").is_empty());
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_blank_entries_are_skipped() {
        let (mut history, path) = temp_history("eunoia_hist_blank", 100);
        history.add("   ").unwrap();
        history.add("").unwrap();

        assert!(history.is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn test_entries_survive_reload() {
        let path = env::temp_dir().join("eunoia_hist_reload");
        let _ = fs::remove_file(&path);

        {
            let mut history = History::new(path.clone(), 100).unwrap();
            history.add("connect localhost").unwrap();
        }

        let reloaded = History::new(path.clone(), 100).unwrap();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.search_prefix("connect"), vec!["connect localhost"]);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_trim_keeps_at_most_max_entries() {
        let (mut history, path) = temp_history("eunoia_hist_trim", 2);
        history.add("a").unwrap();
        history.add("b").unwrap();
        history.add("c").unwrap();

        assert_eq!(history.len(), 2);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_duplicates_are_stored_once() {
        let (mut history, path) = temp_history("eunoia_hist_dup", 100);
        history.add("greet").unwrap();
        history.add("greet").unwrap();

        assert_eq!(history.len(), 1);
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1);
        fs::remove_file(path).unwrap();
    }
}
