use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use lib4maria_import::EXPORT_FILE_NAME;

use crate::CliError;

use super::open_library;

/// Write the backup document.
pub(crate) fn run_export(data_dir: Option<PathBuf>, output: Option<PathBuf>) -> Result<(), CliError> {
    let library = open_library(data_dir)?;
    let path = output.unwrap_or_else(|| PathBuf::from(EXPORT_FILE_NAME));

    library.export_to(&path)?;
    log::info!(
        "{} Exported {} entries to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        library.entries().len(),
        path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}
