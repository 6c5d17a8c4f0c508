//! Command Registry
//!
//! The fixed directive vocabulary and the state transition each command
//! performs. The vocabulary is closed, so lookup and dispatch are plain
//! `match`es instead of a runtime map.

use std::fmt;

use crate::error::{BlockKind, TransitionError};
use crate::state::{Mode, ParseState};

/// A recognised directive command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandType {
    CommentSingleLine,
    UncommentSingleLine,
    CommentBlockBegin,
    CommentBlockEnd,
    UncommentBlockBegin,
    UncommentBlockEnd,
}

impl CommandType {
    /// Name as written after the directive prefix
    pub fn name(self) -> &'static str {
        match self {
            CommandType::CommentSingleLine => "comment_single_line",
            CommandType::UncommentSingleLine => "uncomment_single_line",
            CommandType::CommentBlockBegin => "comment_block_begin",
            CommandType::CommentBlockEnd => "comment_block_end",
            CommandType::UncommentBlockBegin => "uncomment_block_begin",
            CommandType::UncommentBlockEnd => "uncomment_block_end",
        }
    }

    /// Case-sensitive lookup by name
    pub fn lookup(name: &str) -> Option<Self> {
        match name {
            "comment_single_line" => Some(CommandType::CommentSingleLine),
            "uncomment_single_line" => Some(CommandType::UncommentSingleLine),
            "comment_block_begin" => Some(CommandType::CommentBlockBegin),
            "comment_block_end" => Some(CommandType::CommentBlockEnd),
            "uncomment_block_begin" => Some(CommandType::UncommentBlockBegin),
            "uncomment_block_end" => Some(CommandType::UncommentBlockEnd),
            _ => None,
        }
    }

    /// Apply this command's transition to the live state.
    ///
    /// Every successful transition makes the directive line itself pass
    /// through unchanged (`current = Identity`) and schedules the mode for
    /// the following line.
    pub fn apply(self, state: &mut ParseState) -> Result<(), TransitionError> {
        match self {
            CommandType::CommentSingleLine => schedule(state, Mode::SingleLineCommenting),
            CommandType::UncommentSingleLine => schedule(state, Mode::SingleLineUncommenting),
            CommandType::CommentBlockBegin => {
                if state.current == Mode::BlockCommenting {
                    return Err(TransitionError::NestedBlock(BlockKind::Commenting));
                }
                schedule(state, Mode::BlockCommenting);
            }
            CommandType::UncommentBlockBegin => {
                if state.current == Mode::BlockUncommenting {
                    return Err(TransitionError::NestedBlock(BlockKind::Uncommenting));
                }
                schedule(state, Mode::BlockUncommenting);
            }
            CommandType::CommentBlockEnd => {
                if state.current != Mode::BlockCommenting {
                    return Err(TransitionError::UnpairedBlockEnd(BlockKind::Commenting));
                }
                schedule(state, Mode::Identity);
            }
            CommandType::UncommentBlockEnd => {
                if state.current != Mode::BlockUncommenting {
                    return Err(TransitionError::UnpairedBlockEnd(BlockKind::Uncommenting));
                }
                schedule(state, Mode::Identity);
            }
        }
        Ok(())
    }
}

fn schedule(state: &mut ParseState, next: Mode) {
    state.current = Mode::Identity;
    state.next = next;
}

impl fmt::Display for CommandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(current: Mode, next: Mode) -> ParseState {
        ParseState { current, next }
    }

    #[test]
    fn test_lookup_round_trips_names() {
        let commands = [
            CommandType::CommentSingleLine,
            CommandType::UncommentSingleLine,
            CommandType::CommentBlockBegin,
            CommandType::CommentBlockEnd,
            CommandType::UncommentBlockBegin,
            CommandType::UncommentBlockEnd,
        ];
        for command in commands {
            assert_eq!(CommandType::lookup(command.name()), Some(command));
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(CommandType::lookup("COMMENT_SINGLE_LINE"), None);
        assert_eq!(CommandType::lookup("comment_single_line "), None);
        assert_eq!(CommandType::lookup("frobnicate"), None);
    }

    #[test]
    fn test_single_line_commands() {
        let mut s = ParseState::new();
        CommandType::CommentSingleLine.apply(&mut s).unwrap();
        assert_eq!(s, state(Mode::Identity, Mode::SingleLineCommenting));

        let mut s = ParseState::new();
        CommandType::UncommentSingleLine.apply(&mut s).unwrap();
        assert_eq!(s, state(Mode::Identity, Mode::SingleLineUncommenting));
    }

    #[test]
    fn test_block_begin_and_end() {
        let mut s = ParseState::new();
        CommandType::CommentBlockBegin.apply(&mut s).unwrap();
        assert_eq!(s, state(Mode::Identity, Mode::BlockCommenting));

        s.advance();
        CommandType::CommentBlockEnd.apply(&mut s).unwrap();
        assert_eq!(s, state(Mode::Identity, Mode::Identity));
    }

    #[test]
    fn test_nested_block_begin_fails() {
        let mut s = state(Mode::BlockCommenting, Mode::BlockCommenting);
        assert_eq!(
            CommandType::CommentBlockBegin.apply(&mut s),
            Err(TransitionError::NestedBlock(BlockKind::Commenting))
        );

        let mut s = state(Mode::BlockUncommenting, Mode::BlockUncommenting);
        assert_eq!(
            CommandType::UncommentBlockBegin.apply(&mut s),
            Err(TransitionError::NestedBlock(BlockKind::Uncommenting))
        );
    }

    #[test]
    fn test_other_block_kind_is_not_nesting() {
        let mut s = state(Mode::BlockCommenting, Mode::BlockCommenting);
        CommandType::UncommentBlockBegin.apply(&mut s).unwrap();
        assert_eq!(s, state(Mode::Identity, Mode::BlockUncommenting));
    }

    #[test]
    fn test_unpaired_block_end_fails() {
        let mut s = ParseState::new();
        assert_eq!(
            CommandType::CommentBlockEnd.apply(&mut s),
            Err(TransitionError::UnpairedBlockEnd(BlockKind::Commenting))
        );

        let mut s = state(Mode::BlockCommenting, Mode::BlockCommenting);
        assert_eq!(
            CommandType::UncommentBlockEnd.apply(&mut s),
            Err(TransitionError::UnpairedBlockEnd(BlockKind::Uncommenting))
        );
    }
}
