use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use lib4maria_catalog::EntryId;

use crate::CliError;

use super::open_library;

/// Delete one entry.
pub(crate) fn run_remove(data_dir: Option<PathBuf>, id: EntryId) -> Result<(), CliError> {
    let mut library = open_library(data_dir)?;
    let title = library
        .get(id)
        .map(|e| e.title.clone())
        .ok_or(CliError::NotFound(id))?;

    library.remove(id);
    log::info!(
        "{} Removed {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        title.if_supports_color(Stdout, |t| t.bold()),
    );
    Ok(())
}
