use std::{borrow::Cow, collections::BTreeMap, fmt, path::PathBuf};

mod aliases;
mod loader;
mod paths;

use aliases::AliasManager;
use loader::ConfigLoader;
use paths::ConfigPaths;

/// Settings sourced from the rc file: the prompt/greeting username and
/// first-word aliases applied before tokenization.
pub struct Config {
    rc_path: PathBuf,
    aliases: AliasManager,
    username: Option<String>,
}

impl Config {
    pub fn new() -> Result<Self, ConfigError> {
        let paths = ConfigPaths::new()?;
        Ok(Self::with_path(paths.rc_path))
    }

    pub fn with_path(rc_path: PathBuf) -> Self {
        Config {
            rc_path,
            aliases: AliasManager::new(),
            username: None,
        }
    }

    /// A missing rc file is not an error; the shell runs with defaults.
    pub fn load(&mut self) -> Result<(), ConfigError> {
        let path = self.rc_path.clone();
        ConfigLoader::new(&path).load_into(self)
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn expand_aliases<'a>(&'a self, line: &'a str) -> Cow<'a, str> {
        self.aliases.expand_line(line)
    }

    pub fn aliases(&self) -> BTreeMap<&str, &str> {
        self.aliases.all()
    }
}

#[derive(Debug)]
pub enum ConfigError {
    HomeDirNotFound,
    Io(std::io::Error),
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::HomeDirNotFound => write!(f, "Home directory not found"),
            ConfigError::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {}
