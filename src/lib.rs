//! Bundle Helper
//!
//! A line-oriented preprocessor that comments out or restores blocks of
//! source code, driven by `// @bundle-helper <command>` directives.
//!
//! This library provides:
//! - Directive recognition and the fixed command vocabulary
//! - The two-slot parse state machine and per-line transformation
//! - Whole-file conversion and line I/O
//! - Configuration management for the command-line tool

pub mod cli;
pub mod command;
pub mod config;
pub mod converter;
pub mod error;
pub mod files;
pub mod line;
pub mod parser;
pub mod state;
pub mod transform;

// Re-exports for clean public API
pub use command::CommandType;
pub use config::Config;
pub use converter::{Conversion, Converter};
pub use error::{BlockKind, ConvertError, TransitionError};
pub use line::Line;
pub use parser::{ParsedLine, parse_line};
pub use state::{Mode, ParseState};
pub use transform::transform_line;
