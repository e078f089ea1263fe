use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use lib4maria_catalog::EntryId;

use crate::CliError;

use super::open_library;

/// Toggle one entry's favorite flag.
pub(crate) fn run_favorite(data_dir: Option<PathBuf>, id: EntryId) -> Result<(), CliError> {
    let mut library = open_library(data_dir)?;
    let now_favorite = library
        .toggle_favorite(id)
        .ok_or(CliError::NotFound(id))?;
    let title = library.get(id).map(|e| e.title.as_str()).unwrap_or_default();

    if now_favorite {
        log::info!(
            "{} {} is now a favorite",
            "\u{2605}".if_supports_color(Stdout, |t| t.yellow()),
            title.if_supports_color(Stdout, |t| t.bold()),
        );
    } else {
        log::info!(
            "{} is no longer a favorite",
            title.if_supports_color(Stdout, |t| t.bold()),
        );
    }
    Ok(())
}
