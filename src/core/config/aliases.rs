use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

pub struct AliasManager {
    aliases: HashMap<String, String>,
}

impl AliasManager {
    pub fn new() -> Self {
        Self {
            aliases: HashMap::new(),
        }
    }

    pub fn add(&mut self, name: &str, expansion: &str) {
        self.aliases.insert(name.to_string(), expansion.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.aliases.get(name).map(String::as_str)
    }

    /// Replaces the first word of the line when it names an alias; the
    /// rest of the line is kept verbatim so quoting survives expansion.
    pub fn expand_line<'a>(&'a self, line: &'a str) -> Cow<'a, str> {
        let trimmed = line.trim_start();
        let Some(first) = trimmed.split_whitespace().next() else {
            return Cow::Borrowed(line);
        };

        match self.get(first) {
            Some(expansion) => {
                let rest = &trimmed[first.len()..];
                Cow::Owned(format!("{}{}", expansion, rest))
            }
            None => Cow::Borrowed(line),
        }
    }

    pub fn all(&self) -> BTreeMap<&str, &str> {
        self.aliases
            .iter()
            .map(|(name, expansion)| (name.as_str(), expansion.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_get() {
        let mut manager = AliasManager::new();
        manager.add("h", "history");
        assert_eq!(manager.get("h"), Some("history"));
        assert_eq!(manager.get("x"), None);
    }

    #[test]
    fn test_expand_line_replaces_first_word_only() {
        let mut manager = AliasManager::new();
        manager.add("md", "mkdir");

        let expanded = manager.expand_line("md \"my project\"");
        assert_eq!(expanded, "mkdir \"my project\"");
    }

    #[test]
    fn test_expand_line_without_alias_borrows() {
        let manager = AliasManager::new();
        let line = "mkdir demo";
        let expanded = manager.expand_line(line);
        assert!(matches!(expanded, Cow::Borrowed(_)));
        assert_eq!(expanded, line);
    }

    #[test]
    fn test_expand_line_on_blank_input() {
        let manager = AliasManager::new();
        assert_eq!(manager.expand_line("   "), "   ");
    }

    #[test]
    fn test_all_is_sorted_by_name() {
        let mut manager = AliasManager::new();
        manager.add("z", "history");
        manager.add("a", "greet");

        let names: Vec<&str> = manager.all().keys().copied().collect();
        assert_eq!(names, vec!["a", "z"]);
    }
}
