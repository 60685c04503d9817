use std::{
    fmt,
    fs::OpenOptions,
    io::Write,
    path::PathBuf,
};

/// Relative filename of the login record store. Records are plaintext;
/// the `add` handler warns the user about that.
pub const STORE_FILE: &str = "user_data.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRecord {
    pub server: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

impl fmt::Display for LoginRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SERVER: {} | USERNAME: {} | EMAIL: {} | PASSWORD: {}",
            self.server, self.username, self.email, self.password
        )
    }
}

/// Append-only store backing the `add` command. The file is created on
/// first append and never truncated or rewritten.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore {
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(STORE_FILE),
        }
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn file_name(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }

    pub fn append(&self, record: &LoginRecord) -> Result<(), std::io::Error> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;

        writeln!(file, "{}", record)?;
        Ok(())
    }
}
