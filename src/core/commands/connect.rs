use super::{Command, CommandError};
use crate::core::state::ShellState;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reachability {
    Localhost,
    PrivateNetwork,
    Unreachable,
}

/// Classifies a host purely by its textual form; no sockets are opened.
fn classify(host: &str) -> Reachability {
    if host.eq_ignore_ascii_case("localhost") || host.eq_ignore_ascii_case("127.0.0.1") {
        Reachability::Localhost
    } else if host.starts_with("192.") || host.starts_with("10.") {
        Reachability::PrivateNetwork
    } else {
        Reachability::Unreachable
    }
}

/// Simulated connection attempt: an artificial delay followed by a
/// narrative outcome. Every outcome is a success at the handler level;
/// a refused host is a result, not an error.
#[derive(Clone)]
pub struct ConnectCommand {
    delay: Duration,
}

impl Default for ConnectCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ConnectCommand {
    pub fn new() -> Self {
        Self {
            delay: Duration::from_secs(1),
        }
    }
}

impl Command for ConnectCommand {
    fn execute(&self, args: &[String], _state: &mut ShellState) -> Result<String, CommandError> {
        let host = args
            .first()
            .ok_or_else(|| CommandError::Usage("connect <host>".to_string()))?;

        println!("Attempting to establish a connection with {} ...", host);
        thread::sleep(self.delay);

        Ok(match classify(host) {
            Reachability::Localhost => "Connected to localhost".to_string(),
            Reachability::PrivateNetwork => {
                format!("Connected to private network host {}", host)
            }
            Reachability::Unreachable => {
                format!("Connection to {} timed out or was refused", host)
            }
        })
    }
}
