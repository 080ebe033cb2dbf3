use std::fs::File;
use std::path::Path;

use anyhow::Context;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode, WriteLogger};

/// Installs the global logger: into `log_file` when given, stderr otherwise.
pub fn init_logging(level: LevelFilter, log_file: Option<&Path>) -> anyhow::Result<()> {
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            WriteLogger::init(level, Config::default(), file)?;
        }
        None => {
            TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)?;
        }
    }

    Ok(())
}
