//! Directive syntax
//!
//! Classifies a raw line as code, ordinary comment, or directive.
//! No state, no command lookup - pure shape recognition.

use bstr::{BStr, ByteSlice};

/// Line-comment marker of the processed source language
pub const COMMENT_MARKER: &str = "//";

/// First token of every directive comment
pub const DIRECTIVE_PREFIX: &str = "@bundle-helper";

/// Shape of a single line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedLine<'a> {
    /// Anything that is not a line comment after trimming
    Code,
    /// A line comment not starting with the directive prefix
    Comment,
    /// A directive comment; `command` is the token after the prefix, if any
    Directive {
        command: Option<&'a BStr>,
        arguments: usize,
    },
}

/// Classify one line of source
pub fn parse_line<B: AsRef<[u8]> + ?Sized>(content: &B) -> ParsedLine<'_> {
    let Some(body) = content
        .as_ref()
        .trim()
        .strip_prefix(COMMENT_MARKER.as_bytes())
    else {
        return ParsedLine::Code;
    };

    let mut tokens = body.fields();
    if tokens.next() != Some(DIRECTIVE_PREFIX.as_bytes()) {
        return ParsedLine::Comment;
    }

    let command = tokens.next().map(|token| token.as_bstr());
    ParsedLine::Directive {
        command,
        arguments: tokens.count(),
    }
}
