//! Process entry point: configuration, logging, conversion, output.

use std::io;

use anyhow::{Context, Result};
use log::{debug, info};

use crate::config::{Config, OutputTarget};
use crate::converter::{Conversion, Converter};
use crate::files;

/// Run the command line tool
pub fn run() -> Result<()> {
    let config = Config::from_args_and_env()?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    if let Some(path) = &config.config_file {
        debug!("using config file {}", path.display());
    }

    execute(&config).map(|_| ())
}

/// Convert `config.input` and deliver the result to `config.output`.
///
/// Nothing is written unless the whole input converted.
pub fn execute(config: &Config) -> Result<Conversion> {
    let conversion = Converter::new()
        .convert_file(&config.input)
        .with_context(|| format!("cannot convert {}", config.input.display()))?;

    match &config.output {
        OutputTarget::File(path) => {
            files::write_lines(path, &conversion.lines)?;
            info!(
                "converted {} -> {} ({} lines, {} directives)",
                config.input.display(),
                path.display(),
                conversion.lines.len(),
                conversion.directives
            );
            eprintln!("successfully converted and wrote to {}", path.display());
        }
        OutputTarget::Stdout => {
            files::write_lines_to(io::stdout().lock(), &conversion.lines)
                .context("cannot write to stdout")?;
        }
        OutputTarget::None => {
            info!(
                "{}: {} lines, {} directives, no errors",
                config.input.display(),
                conversion.lines.len(),
                conversion.directives
            );
        }
    }

    Ok(conversion)
}
