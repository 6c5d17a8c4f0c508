//! Line Model
//!
//! One physical line of input together with its 0-based position.
//! Content is kept as raw bytes so sources in any ASCII-compatible
//! encoding pass through untouched.

use std::fmt;

use bstr::{BStr, BString, ByteSlice};

/// A single input line.
///
/// The position is assigned when the line is read and never changes;
/// transformations produce a new `Line` through [`Line::with_content`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    content: BString,
    number: usize,
}

impl Line {
    pub fn new(content: impl Into<BString>, number: usize) -> Self {
        Self {
            content: content.into(),
            number,
        }
    }

    pub fn content(&self) -> &BStr {
        self.content.as_bstr()
    }

    /// 0-based position in the input
    pub fn number(&self) -> usize {
        self.number
    }

    /// Replace the content, keeping the position
    pub fn with_content(self, content: impl Into<BString>) -> Self {
        Self {
            content: content.into(),
            number: self.number,
        }
    }

    pub fn into_content(self) -> BString {
        self.content
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Editors count from 1; invalid UTF-8 is shown lossily.
        write!(f, "line {}: `{}`", self.number + 1, self.content)
    }
}
