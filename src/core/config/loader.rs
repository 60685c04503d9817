use std::{fs, path::Path};

use super::{Config, ConfigError};

pub struct ConfigLoader<'a> {
    path: &'a Path,
}

impl<'a> ConfigLoader<'a> {
    pub fn new(path: &'a Path) -> Self {
        Self { path }
    }

    pub fn load_into(&self, config: &mut Config) -> Result<(), ConfigError> {
        if !self.path.exists() {
            return Ok(());
        }

        let content = fs::read_to_string(self.path)?;
        for line in content.lines() {
            self.apply_line(line, config);
        }
        Ok(())
    }

    fn apply_line(&self, line: &str, config: &mut Config) {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return;
        }

        if let Some(alias_def) = line.strip_prefix("alias ") {
            self.apply_alias(alias_def, config);
        } else if let Some((key, value)) = line.split_once('=') {
            self.apply_setting(key.trim(), strip_quotes(value.trim()), config);
        }
    }

    fn apply_setting(&self, key: &str, value: &str, config: &mut Config) {
        // Unknown keys are ignored.
        if key == "username" && !value.is_empty() {
            config.username = Some(value.to_string());
        }
    }

    fn apply_alias(&self, alias_def: &str, config: &mut Config) {
        if let Some((name, expansion)) = alias_def.split_once('=') {
            let name = name.trim();
            let expansion = strip_quotes(expansion.trim());
            if !name.is_empty() && !expansion.is_empty() {
                config.aliases.add(name, expansion);
            }
        }
    }
}

fn strip_quotes(value: &str) -> &str {
    let quoted = (value.starts_with('\'') && value.ends_with('\''))
        || (value.starts_with('"') && value.ends_with('"'));
    if quoted && value.len() >= 2 {
        &value[1..value.len() - 1]
    } else {
        value
    }
}
