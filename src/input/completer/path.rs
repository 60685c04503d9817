use std::{
    fs,
    path::{Path, PathBuf},
};

use rustyline::completion::Pair;

/// Completes argument words against the filesystem, relative to the
/// process working directory. Directories complete with a trailing
/// slash so completion can continue into them.
#[derive(Clone)]
pub struct PathCompleter;

impl PathCompleter {
    pub fn new() -> Self {
        Self
    }

    pub fn complete_path(&self, incomplete: &str) -> Vec<Pair> {
        let (search_dir, prefix) = split_input(incomplete);

        let Ok(entries) = fs::read_dir(&search_dir) else {
            return Vec::new();
        };

        let mut matches: Vec<Pair> = entries
            .filter_map(Result::ok)
            .filter_map(|entry| {
                let name = entry.file_name().to_str()?.to_string();
                if !name.starts_with(&prefix) {
                    return None;
                }
                Some(make_pair(incomplete, &prefix, &name, entry.path().is_dir()))
            })
            .collect();

        matches.sort_by(|a, b| a.display.cmp(&b.display));
        matches
    }
}

fn split_input(incomplete: &str) -> (PathBuf, String) {
    if incomplete.is_empty() {
        return (PathBuf::from("."), String::new());
    }
    if incomplete.ends_with('/') {
        return (PathBuf::from(incomplete), String::new());
    }

    let path = Path::new(incomplete);
    let prefix = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("")
        .to_string();
    let search_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    (search_dir, prefix)
}

fn make_pair(incomplete: &str, prefix: &str, name: &str, is_dir: bool) -> Pair {
    // Keep whatever directory part the user already typed and swap in
    // the completed file name.
    let stem = &incomplete[..incomplete.len() - prefix.len()];
    let completed = format!("{}{}", stem, name);

    if is_dir {
        Pair {
            display: format!("{}/", name),
            replacement: format!("{}/", completed),
        }
    } else {
        Pair {
            display: name.to_string(),
            replacement: completed,
        }
    }
}
