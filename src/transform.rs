//! Line Transformer

use bstr::BString;

use crate::error::ConvertError;
use crate::line::Line;
use crate::parser::COMMENT_MARKER;
use crate::state::{Mode, ParseState};

/// Produce the output line for `line` under `state.current`.
pub fn transform_line(line: Line, state: &ParseState) -> Result<Line, ConvertError> {
    match state.current {
        Mode::Undefined => Err(ConvertError::UndefinedState { line }),
        Mode::Identity => Ok(line),
        Mode::SingleLineCommenting | Mode::BlockCommenting => {
            let mut content = BString::from(COMMENT_MARKER);
            content.extend_from_slice(line.content());
            Ok(line.with_content(content))
        }
        Mode::SingleLineUncommenting | Mode::BlockUncommenting => {
            let stripped = line
                .content()
                .strip_prefix(COMMENT_MARKER.as_bytes())
                .map(BString::from);
            Ok(match stripped {
                Some(content) => line.with_content(content),
                None => line,
            })
        }
    }
}
