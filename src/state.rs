//! Parse State Machine
//!
//! Tracks the transformation applied to the line being processed and the
//! one scheduled for the line after it.

use std::fmt;

/// Transformation mode for a single line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Sentinel; never active during a well-formed conversion
    Undefined,
    /// Content passes through unchanged
    #[default]
    Identity,
    SingleLineCommenting,
    SingleLineUncommenting,
    BlockCommenting,
    BlockUncommenting,
}

impl Mode {
    /// Block modes persist across lines until an explicit end directive.
    pub fn is_block(self) -> bool {
        matches!(self, Mode::BlockCommenting | Mode::BlockUncommenting)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Undefined => "undefined",
            Mode::Identity => "identity",
            Mode::SingleLineCommenting => "single-line commenting",
            Mode::SingleLineUncommenting => "single-line uncommenting",
            Mode::BlockCommenting => "block commenting",
            Mode::BlockUncommenting => "block uncommenting",
        };
        f.write_str(name)
    }
}

/// The pair of (active mode, mode scheduled for the next line).
///
/// One instance lives for exactly one conversion run and is lent to the
/// directive handlers as `&mut`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseState {
    pub current: Mode,
    pub next: Mode,
}

impl Default for ParseState {
    fn default() -> Self {
        Self::new()
    }
}

impl ParseState {
    pub fn new() -> Self {
        Self {
            current: Mode::Identity,
            next: Mode::Identity,
        }
    }

    /// Roll the scheduled mode into the active one.
    ///
    /// A block mode keeps itself scheduled; anything else falls back to
    /// `Identity` after one line.
    pub fn advance(&mut self) {
        self.current = self.next;
        self.next = if self.current.is_block() {
            self.current
        } else {
            Mode::Identity
        };
    }
}
