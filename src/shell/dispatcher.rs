use crate::core::commands::{Command, CommandRegistry};
use crate::core::lexer;
use crate::core::state::{CommandRecord, ShellState};
use crate::error::ShellError;

/// Runs one input line through tokenize, record, lookup, invoke.
///
/// The history record is appended before lookup, so unknown commands
/// and failing handlers still leave exactly one record. Lines that
/// tokenize to nothing return `Ok(None)` and leave no record.
pub(crate) fn dispatch_line(
    registry: &CommandRegistry,
    state: &mut ShellState,
    line: &str,
) -> Result<Option<String>, ShellError> {
    let mut tokens = lexer::tokenize(line)?.into_iter();

    let Some(first) = tokens.next() else {
        return Ok(None);
    };
    let command = first.to_lowercase();
    let args: Vec<String> = tokens.collect();

    state.record(CommandRecord::new(command.clone(), args.clone()));

    let handler = registry
        .lookup(&command)
        .ok_or(ShellError::CommandNotFound(command))?;

    let message = handler.execute(&args, state)?;
    Ok(Some(message))
}
