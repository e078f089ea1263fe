use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

use super::open_library;

/// Delete every entry and reset the saved filters.
pub(crate) fn run_clear(data_dir: Option<PathBuf>, confirm: bool) -> Result<(), CliError> {
    let mut library = open_library(data_dir)?;
    let dir = library.store().inner().dir().to_path_buf();

    if !confirm {
        log::warn!(
            "This will permanently delete all {} entries stored in:\n  {}",
            library.entries().len(),
            dir.display(),
        );
        log::info!("Export a backup first if you might want them back:");
        log::info!("  lib4maria export");
        log::info!("Re-run with --confirm to proceed:");
        log::info!("  lib4maria clear --confirm");
        return Ok(());
    }

    library.clear()?;
    log::info!(
        "{}",
        "All data has been cleared.".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Path: {}", dir.display());
    crate::log_blank();
    log::info!("Run 'lib4maria add' or 'lib4maria import <FILE>' to start again.");
    Ok(())
}
