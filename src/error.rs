//! Error types for directive handling and conversion.

use std::fmt;

use crate::line::Line;

/// Which kind of block a directive refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Commenting,
    Uncommenting,
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockKind::Commenting => f.write_str("comment"),
            BlockKind::Uncommenting => f.write_str("uncomment"),
        }
    }
}

/// Failure raised by a command handler while mutating the parse state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    /// A block begin while the same block is already open.
    #[error("nested block {0}ing is not supported")]
    NestedBlock(BlockKind),

    /// A block end with no matching open block.
    #[error("unpaired {0} block end")]
    UnpairedBlockEnd(BlockKind),
}

/// Error aborting a whole-file conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// Directive prefix with no command token.
    #[error("missing command argument in {line}")]
    MissingCommand { line: Line },

    /// Directive command that is not part of the vocabulary.
    #[error("unknown command `{command}` in {line}")]
    UnknownCommand { command: String, line: Line },

    /// Handler rejected the directive.
    #[error("{source} in {line}")]
    Transition {
        line: Line,
        #[source]
        source: TransitionError,
    },

    /// The state machine handed `Undefined` to the transformer.
    #[error("undefined parse state reached at {line}")]
    UndefinedState { line: Line },
}

impl ConvertError {
    /// The line the error was raised on
    pub fn line(&self) -> &Line {
        match self {
            ConvertError::MissingCommand { line }
            | ConvertError::UnknownCommand { line, .. }
            | ConvertError::Transition { line, .. }
            | ConvertError::UndefinedState { line } => line,
        }
    }
}
