use super::ConfigError;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub rc_path: PathBuf,
}

impl ConfigPaths {
    pub fn new() -> Result<Self, ConfigError> {
        let home = env::var("HOME").map_err(|_| ConfigError::HomeDirNotFound)?;

        Ok(ConfigPaths {
            rc_path: PathBuf::from(home).join(".eunoiarc"),
        })
    }
}
