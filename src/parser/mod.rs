//! Directive Recognizer
//!
//! Detects `// @bundle-helper <command>` lines and runs the matching
//! command against the parse state.

pub mod syntax;

pub use syntax::{COMMENT_MARKER, DIRECTIVE_PREFIX, ParsedLine, parse_line};

use bstr::ByteSlice;
use log::debug;

use crate::command::CommandType;
use crate::error::ConvertError;
use crate::line::Line;
use crate::state::ParseState;

/// Resolve the directive encoded by `line`, if any.
///
/// Code lines and ordinary comments yield `Ok(None)`. A line carrying the
/// directive prefix must name a known command.
pub fn recognize(line: &Line) -> Result<Option<CommandType>, ConvertError> {
    let (command, arguments) = match parse_line(line.content()) {
        ParsedLine::Code | ParsedLine::Comment => return Ok(None),
        ParsedLine::Directive { command, arguments } => (command, arguments),
    };

    let Some(name) = command else {
        return Err(ConvertError::MissingCommand { line: line.clone() });
    };

    let command = name
        .to_str()
        .ok()
        .and_then(CommandType::lookup)
        .ok_or_else(|| ConvertError::UnknownCommand {
            command: name.to_str_lossy().into_owned(),
            line: line.clone(),
        })?;

    if arguments > 0 {
        debug!("ignoring {} trailing token(s) after `{}` on {}", arguments, command, line);
    }

    Ok(Some(command))
}

/// Recognize a directive on `line` and apply it to `state`.
///
/// Returns the command that was applied. Handler failures are reported
/// against the line that carried the directive.
pub fn read_directive(
    line: &Line,
    state: &mut ParseState,
) -> Result<Option<CommandType>, ConvertError> {
    let Some(command) = recognize(line)? else {
        return Ok(None);
    };

    debug!("{} -> {}", line, command);
    command
        .apply(state)
        .map_err(|source| ConvertError::Transition {
            line: line.clone(),
            source,
        })?;

    Ok(Some(command))
}
