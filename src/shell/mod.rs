use std::{
    env,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use rustyline::{config::Configurer, history::FileHistory, Editor};

mod dispatcher;

use crate::{
    core::{commands::CommandRegistry, config::Config, state::ShellState, store::RecordStore},
    error::ShellError,
    flags::Flags,
    highlight::SyntaxHighlighter,
    input::{History, ShellCompleter},
};

const HISTORY_FILE: &str = ".eunoia_history";
const HISTORY_CAPACITY: usize = 1000;
const FALLBACK_USERNAME: &str = "eunoia";

pub struct Shell {
    editor: Editor<ShellCompleter, FileHistory>,
    state: ShellState,
    registry: CommandRegistry,
    config: Config,
    highlighter: SyntaxHighlighter,
    line_history: Arc<Mutex<History>>,
    flags: Flags,
}

impl Shell {
    pub fn new(flags: Flags) -> Result<Self, ShellError> {
        let mut config = match flags.get_value("config") {
            Some(path) => Config::with_path(PathBuf::from(path)),
            None => Config::new()?,
        };
        config.load()?;

        let registry = CommandRegistry::new(RecordStore::new());

        let history_file = dirs::home_dir()
            .ok_or(ShellError::HomeDirNotFound)?
            .join(HISTORY_FILE);
        let line_history = Arc::new(Mutex::new(History::new(history_file, HISTORY_CAPACITY)?));

        let command_names: Vec<String> = registry.names().map(String::from).collect();
        let mut completer = ShellCompleter::new(command_names, line_history.clone());
        completer.update_aliases(config.aliases().keys().map(|name| name.to_string()));

        let mut editor = Editor::<ShellCompleter, FileHistory>::new()?;
        editor.set_helper(Some(completer));
        editor.set_auto_add_history(true);

        let username = resolve_username(&flags, &config);
        let state = ShellState::new(username);

        ctrlc::set_handler(|| {
            println!("\nType 'exit' to leave the shell");
        })?;

        Ok(Shell {
            editor,
            state,
            registry,
            config,
            highlighter: SyntaxHighlighter::new(),
            line_history,
            flags,
        })
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        if !self.flags.is_set("quiet") {
            println!(
                "Welcome, {}. Type 'help' for available commands.",
                self.state.username
            );
        }

        loop {
            if !self.state.running {
                break;
            }

            let prompt = format!("[{}] {}> ", current_dir_display(), self.state.username);
            match self.editor.readline(&prompt) {
                Ok(line) => self.handle_line(&line),
                Err(rustyline::error::ReadlineError::Interrupted) => {
                    println!("^C (type 'exit' to leave the shell)");
                    continue;
                }
                Err(rustyline::error::ReadlineError::Eof) => {
                    println!(
                        "{}",
                        self.highlighter
                            .highlight_success("Received end of input, goodbye.")
                    );
                    break;
                }
                Err(e) => {
                    if !self.flags.is_set("quiet") {
                        eprintln!("Error: {}", e);
                    }
                    continue;
                }
            }
        }
        Ok(())
    }

    fn handle_line(&mut self, line: &str) {
        if line.trim().is_empty() {
            return;
        }

        self.remember_line(line);

        let expanded = self.config.expand_aliases(line).into_owned();
        match dispatcher::dispatch_line(&self.registry, &mut self.state, &expanded) {
            Ok(Some(message)) => println!("{}", message),
            Ok(None) => {}
            Err(e) => {
                eprintln!("{}", self.highlighter.highlight_error(&e.to_string()));
            }
        }
    }

    fn remember_line(&mut self, line: &str) {
        let result = match self.line_history.lock() {
            Ok(mut history) => history.add(line),
            Err(_) => return,
        };

        if let Err(e) = result {
            if !self.flags.is_set("quiet") {
                eprintln!("Warning: couldn't save history: {}", e);
            }
        }
    }
}

fn resolve_username(flags: &Flags, config: &Config) -> String {
    flags
        .get_value("user")
        .map(String::clone)
        .or_else(|| config.username().map(String::from))
        .or_else(|| env::var("USER").ok())
        .unwrap_or_else(|| FALLBACK_USERNAME.to_string())
}

fn current_dir_display() -> String {
    env::current_dir()
        .map(|path| path.to_string_lossy().into_owned())
        .unwrap_or_else(|_| String::from("?"))
}
