//! Conversion Driver
//!
//! Folds the parse state machine over a sequence of lines:
//! directive recognition, transformation, then state advance.

use std::path::Path;

use anyhow::Result;
use log::{debug, warn};

use crate::error::ConvertError;
use crate::files;
use crate::line::Line;
use crate::parser::read_directive;
use crate::state::{Mode, ParseState};
use crate::transform::transform_line;

/// Outcome of a successful conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Transformed lines, in input order
    pub lines: Vec<Line>,
    /// Number of directive lines processed
    pub directives: usize,
    /// Block mode still active when the input ran out
    pub open_block: Option<Mode>,
}

/// Stateless driver; each call owns a fresh [`ParseState`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Converter;

impl Converter {
    pub fn new() -> Self {
        Self
    }

    /// Convert already-numbered lines
    pub fn convert_lines<I>(&self, lines: I) -> Result<Conversion, ConvertError>
    where
        I: IntoIterator<Item = Line>,
    {
        let mut state = ParseState::new();
        let mut output = Vec::new();
        let mut directives = 0;

        for line in lines {
            debug!("{} (state {:?})", line, state);
            if read_directive(&line, &mut state)?.is_some() {
                directives += 1;
                debug!("state after directive: {:?}", state);
            }

            output.push(transform_line(line, &state)?);
            state.advance();
        }

        let open_block = state.current.is_block().then_some(state.current);
        if let Some(mode) = open_block {
            warn!("input ended inside an open {} directive", mode);
        }

        Ok(Conversion {
            lines: output,
            directives,
            open_block,
        })
    }

    /// Convert in-memory text, splitting on newline boundaries
    pub fn convert_str(&self, text: &str) -> Result<Conversion, ConvertError> {
        self.convert_lines(files::split_lines(text.as_bytes()))
    }

    /// Read `path` fully and convert it
    pub fn convert_file(&self, path: &Path) -> Result<Conversion> {
        let lines = files::read_lines(path)?;
        let conversion = self.convert_lines(lines)?;
        Ok(conversion)
    }
}

#[cfg(test)]
mod tests {
    use bstr::{BStr, ByteSlice};

    use super::*;
    use crate::error::{BlockKind, TransitionError};

    fn contents(conversion: &Conversion) -> Vec<&BStr> {
        conversion.lines.iter().map(Line::content).collect()
    }

    #[test]
    fn test_plain_text_passes_through() {
        let conversion = Converter::new().convert_str("a;\n// note\nb;\n").unwrap();
        assert_eq!(contents(&conversion), vec!["a;", "// note", "b;"]);
        assert_eq!(conversion.directives, 0);
        assert_eq!(conversion.open_block, None);
    }

    #[test]
    fn test_single_line_comment_applies_once() {
        let text = "// @bundle-helper comment_single_line\nfoo();\nbar();\n";
        let conversion = Converter::new().convert_str(text).unwrap();
        assert_eq!(
            contents(&conversion),
            vec!["// @bundle-helper comment_single_line", "//foo();", "bar();"]
        );
        assert_eq!(conversion.directives, 1);
    }

    #[test]
    fn test_single_line_uncomment() {
        let text = "// @bundle-helper uncomment_single_line\n//foo();\n//bar();\n";
        let conversion = Converter::new().convert_str(text).unwrap();
        assert_eq!(
            contents(&conversion),
            vec!["// @bundle-helper uncomment_single_line", "foo();", "//bar();"]
        );
    }

    #[test]
    fn test_line_numbers_are_preserved() {
        let text = "// @bundle-helper comment_block_begin\na;\nb;\n";
        let conversion = Converter::new().convert_str(text).unwrap();
        let numbers: Vec<usize> = conversion.lines.iter().map(Line::number).collect();
        assert_eq!(numbers, vec![0, 1, 2]);
    }

    #[test]
    fn test_block_end_inside_other_block_fails() {
        let text = "// @bundle-helper comment_block_begin\na;\n// @bundle-helper uncomment_block_end\n";
        let err = Converter::new().convert_str(text).unwrap_err();
        assert_eq!(
            err,
            ConvertError::Transition {
                line: Line::new("// @bundle-helper uncomment_block_end", 2),
                source: TransitionError::UnpairedBlockEnd(BlockKind::Uncommenting),
            }
        );
    }

    #[test]
    fn test_single_line_directive_interrupts_block() {
        let text = "// @bundle-helper comment_block_begin\n\
                    a;\n\
                    // @bundle-helper uncomment_single_line\n\
                    //b;\n\
                    c;\n";
        let conversion = Converter::new().convert_str(text).unwrap();
        assert_eq!(
            contents(&conversion),
            vec![
                "// @bundle-helper comment_block_begin",
                "//a;",
                "// @bundle-helper uncomment_single_line",
                "b;",
                "c;",
            ]
        );
        assert_eq!(conversion.open_block, None);
    }

    #[test]
    fn test_non_utf8_lines_are_converted() {
        let text = b"// @bundle-helper comment_single_line\ns = \"caf\xe9\";\n";
        let lines = files::split_lines(text);
        let conversion = Converter::new().convert_lines(lines).unwrap();
        assert_eq!(conversion.lines[1].content().as_bytes(), b"//s = \"caf\xe9\";");
    }

    #[test]
    fn test_empty_input() {
        let conversion = Converter::new().convert_str("").unwrap();
        assert!(conversion.lines.is_empty());
        assert_eq!(conversion.directives, 0);
    }
}
