//! Log output for the CLI.
//!
//! User-facing output goes through `log::info!`, so the logger prints info
//! records bare on stdout. Warnings and errors get a coloured prefix. With
//! `--logfile`, every line is also appended to a file with ANSI codes stripped.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use env_logger::{Builder, Target};
use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

/// Writes to stdout and to a log file, stripping colour from the file copy.
struct Tee {
    file: strip_ansi_escapes::Writer<File>,
}

impl Write for Tee {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stdout().write_all(buf)?;
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()?;
        self.file.flush()
    }
}

/// Install the global logger. `RUST_LOG` overrides the level chosen by the flags.
pub(crate) fn init_logging(
    quiet: bool,
    verbose: bool,
    logfile: Option<&Path>,
) -> Result<(), CliError> {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    let mut builder = Builder::new();
    builder.filter_level(level).parse_default_env();

    builder.format(move |buf, record| {
        let prefix = match record.level() {
            Level::Error => format!("{} ", "error:".if_supports_color(Stdout, |t| t.red())),
            Level::Warn => format!("{} ", "warning:".if_supports_color(Stdout, |t| t.yellow())),
            Level::Info => String::new(),
            Level::Debug | Level::Trace => format!(
                "{} ",
                record
                    .level()
                    .as_str()
                    .to_lowercase()
                    .if_supports_color(Stdout, |t| t.dimmed())
            ),
        };
        if verbose {
            let stamp = chrono::Local::now().format("%H:%M:%S%.3f");
            writeln!(buf, "[{}] {}{}", stamp, prefix, record.args())
        } else {
            writeln!(buf, "{}{}", prefix, record.args())
        }
    });

    match logfile {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    CliError::other(format!("Cannot open log file {}: {}", path.display(), e))
                })?;
            builder.target(Target::Pipe(Box::new(Tee {
                file: strip_ansi_escapes::Writer::new(file),
            })));
        }
        None => {
            builder.target(Target::Stdout);
        }
    }

    builder
        .try_init()
        .map_err(|e| CliError::other(format!("Logger already initialised: {}", e)))
}

/// Print an empty line through the logger.
pub(crate) fn log_blank() {
    log::info!("");
}
