use std::{
    borrow::Cow,
    sync::{Arc, Mutex},
};

use super::{command::CommandCompleter, path::PathCompleter};
use crate::highlight::SyntaxHighlighter;
use crate::input::history::History;

use rustyline::{
    completion::{Completer, Pair},
    highlight::{CmdKind, Highlighter},
    hint::Hinter,
    validate::Validator,
    Context, Helper,
};

/// The rustyline helper: completes the command word against the
/// registry, argument words against the filesystem, hints from the
/// persistent line history, and colors the line as it is typed.
#[derive(Clone)]
pub struct ShellCompleter {
    command_completer: CommandCompleter,
    path_completer: PathCompleter,
    highlighter: SyntaxHighlighter,
    history: Arc<Mutex<History>>,
}

impl ShellCompleter {
    pub fn new(command_names: Vec<String>, history: Arc<Mutex<History>>) -> Self {
        ShellCompleter {
            command_completer: CommandCompleter::new(command_names),
            path_completer: PathCompleter::new(),
            highlighter: SyntaxHighlighter::new(),
            history,
        }
    }

    pub fn update_aliases(&mut self, aliases: impl IntoIterator<Item = String>) {
        self.command_completer.set_aliases(aliases);
    }
}

impl Helper for ShellCompleter {}

impl Highlighter for ShellCompleter {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let known = line
            .split_whitespace()
            .next()
            .is_some_and(|word| self.command_completer.is_command(word));
        Cow::Owned(self.highlighter.highlight_line(line, known))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(self.highlighter.highlight_hint(hint))
    }
}

impl Hinter for ShellCompleter {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if line.is_empty() || pos < line.len() {
            return None;
        }

        let history = self.history.lock().ok()?;
        history
            .search_prefix(line)
            .first()
            .map(|entry| entry[line.len()..].to_string())
            .filter(|suffix| !suffix.is_empty())
    }
}

impl Validator for ShellCompleter {}

impl Completer for ShellCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line_up_to_cursor = &line[..pos];
        let mut words: Vec<&str> = line_up_to_cursor.split_whitespace().collect();

        if line_up_to_cursor.ends_with(' ') || words.is_empty() {
            words.push("");
        }

        let (start, matches) = if words.len() == 1 {
            let word = words[0];
            let start = line_up_to_cursor.rfind(word).unwrap_or(0);
            (start, self.command_completer.complete_command(word))
        } else {
            let last_word = words.last().copied().unwrap_or("");
            let start = if last_word.is_empty() {
                pos
            } else {
                line_up_to_cursor.rfind(last_word).unwrap_or(pos)
            };
            (start, self.path_completer.complete_path(last_word))
        };

        Ok((start, matches))
    }
}
