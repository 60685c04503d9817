use super::{Command, CommandError};
use crate::core::state::ShellState;
use std::ffi::CString;
use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::Path;

fn single_path<'a>(args: &'a [String], usage: &str) -> Result<&'a String, CommandError> {
    args.first()
        .ok_or_else(|| CommandError::Usage(usage.to_string()))
}

#[derive(Clone)]
pub struct MkdirCommand;

impl Default for MkdirCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl MkdirCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for MkdirCommand {
    fn execute(&self, args: &[String], _state: &mut ShellState) -> Result<String, CommandError> {
        let path = single_path(args, "mkdir <path>")?;

        // create_dir_all creates missing parents and succeeds when the
        // directory already exists.
        fs::create_dir_all(path)?;
        Ok(format!("Created directory {}", path))
    }
}

#[derive(Clone)]
pub struct TouchCommand;

impl Default for TouchCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl TouchCommand {
    pub fn new() -> Self {
        Self
    }

    fn refresh_times(path: &str) -> Result<(), CommandError> {
        let c_path = CString::new(path).map_err(|_| {
            CommandError::InvalidArgument(format!("path contains a nul byte: {}", path))
        })?;

        // A null timeval pair sets both timestamps to the current time.
        let rc = unsafe { libc::utimes(c_path.as_ptr(), std::ptr::null()) };
        if rc != 0 {
            return Err(CommandError::Io(std::io::Error::last_os_error()));
        }
        Ok(())
    }
}

impl Command for TouchCommand {
    fn execute(&self, args: &[String], _state: &mut ShellState) -> Result<String, CommandError> {
        let path = single_path(args, "touch <path>")?;

        // Append mode creates the file without truncating an existing one.
        OpenOptions::new().append(true).create(true).open(path)?;
        Self::refresh_times(path)?;

        Ok(format!("Touched {}", path))
    }
}

#[derive(Clone)]
pub struct RmCommand;

impl Default for RmCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl RmCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for RmCommand {
    fn execute(&self, args: &[String], _state: &mut ShellState) -> Result<String, CommandError> {
        let path_str = single_path(args, "rm <path>")?;
        let path = Path::new(path_str);

        let metadata = match fs::symlink_metadata(path) {
            Ok(metadata) => metadata,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(CommandError::NotFound(path_str.clone()))
            }
            Err(err) => return Err(err.into()),
        };

        let file_type = metadata.file_type();
        if file_type.is_file() || file_type.is_symlink() {
            fs::remove_file(path)?;
            Ok(format!("Removed file {}", path_str))
        } else if file_type.is_dir() {
            // Only empty directories are removed; never recursive.
            fs::remove_dir(path).map_err(|err| {
                CommandError::Io(std::io::Error::new(
                    err.kind(),
                    format!(
                        "cannot remove '{}': directory not empty or permission denied",
                        path_str
                    ),
                ))
            })?;
            Ok(format!("Removed empty directory {}", path_str))
        } else {
            Err(CommandError::InvalidArgument(format!(
                "{} is not a regular file or directory",
                path_str
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn args(value: &std::path::Path) -> Vec<String> {
        vec![value.to_string_lossy().into_owned()]
    }

    #[test]
    fn test_mkdir_creates_nested_directories() {
        let base = env::temp_dir().join("eunoia_mkdir_nested");
        let _ = fs::remove_dir_all(&base);
        let target = base.join("a/b/c");

        let cmd = MkdirCommand::new();
        let mut state = ShellState::new("tester");
        cmd.execute(&args(&target), &mut state).unwrap();
        assert!(target.is_dir());
        fs::remove_dir_all(base).unwrap();
    }

    #[test]
    fn test_mkdir_is_idempotent() {
        let target = env::temp_dir().join("eunoia_mkdir_twice");
        let _ = fs::remove_dir_all(&target);

        let cmd = MkdirCommand::new();
        let mut state = ShellState::new("tester");
        cmd.execute(&args(&target), &mut state).unwrap();
        cmd.execute(&args(&target), &mut state).unwrap();
        assert!(target.is_dir());
        fs::remove_dir_all(target).unwrap();
    }

    #[test]
    fn test_mkdir_over_existing_file_fails() {
        let target = env::temp_dir().join("eunoia_mkdir_collision");
        fs::write(&target, "occupied").unwrap();

        let cmd = MkdirCommand::new();
        let mut state = ShellState::new("tester");
        let result = cmd.execute(&args(&target), &mut state);
        assert!(matches!(result, Err(CommandError::Io(_))));
        fs::remove_file(target).unwrap();
    }

    #[test]
    fn test_mkdir_without_argument() {
        let cmd = MkdirCommand::new();
        let mut state = ShellState::new("tester");
        assert!(matches!(
            cmd.execute(&[], &mut state),
            Err(CommandError::Usage(_))
        ));
    }

    #[test]
    fn test_touch_creates_an_empty_file() {
        let target = env::temp_dir().join("eunoia_touch_new");
        let _ = fs::remove_file(&target);

        let cmd = TouchCommand::new();
        let mut state = ShellState::new("tester");
        cmd.execute(&args(&target), &mut state).unwrap();

        assert!(target.is_file());
        assert_eq!(fs::metadata(&target).unwrap().len(), 0);
        fs::remove_file(target).unwrap();
    }

    #[test]
    fn test_touch_preserves_existing_contents() {
        let target = env::temp_dir().join("eunoia_touch_existing");
        fs::write(&target, "keep me").unwrap();

        let cmd = TouchCommand::new();
        let mut state = ShellState::new("tester");
        cmd.execute(&args(&target), &mut state).unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "keep me");
        fs::remove_file(target).unwrap();
    }

    #[test]
    fn test_rm_missing_path_reports_not_found() {
        let target = env::temp_dir().join("eunoia_rm_missing");
        let _ = fs::remove_file(&target);

        let cmd = RmCommand::new();
        let mut state = ShellState::new("tester");
        let result = cmd.execute(&args(&target), &mut state);
        assert!(matches!(result, Err(CommandError::NotFound(_))));
    }

    #[test]
    fn test_rm_deletes_a_file() {
        let target = env::temp_dir().join("eunoia_rm_file");
        fs::write(&target, "bye").unwrap();

        let cmd = RmCommand::new();
        let mut state = ShellState::new("tester");
        cmd.execute(&args(&target), &mut state).unwrap();
        assert!(!target.exists());
    }

    #[test]
    fn test_rm_deletes_an_empty_directory() {
        let target = env::temp_dir().join("eunoia_rm_empty_dir");
        let _ = fs::remove_dir_all(&target);
        fs::create_dir_all(&target).unwrap();

        let cmd = RmCommand::new();
        let mut state = ShellState::new("tester");
        cmd.execute(&args(&target), &mut state).unwrap();
        assert!(!target.exists());
    }

    #[test]
    fn test_rm_refuses_a_non_empty_directory() {
        let target = env::temp_dir().join("eunoia_rm_full_dir");
        let _ = fs::remove_dir_all(&target);
        fs::create_dir_all(&target).unwrap();
        let inner = target.join("keep.txt");
        fs::write(&inner, "still here").unwrap();

        let cmd = RmCommand::new();
        let mut state = ShellState::new("tester");
        let result = cmd.execute(&args(&target), &mut state);

        assert!(matches!(result, Err(CommandError::Io(_))));
        assert!(target.is_dir());
        assert!(inner.is_file());
        fs::remove_dir_all(target).unwrap();
    }
}
