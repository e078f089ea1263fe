use std::path::PathBuf;

use lib4maria_catalog::KindFilter;

use crate::CliError;
use crate::cli_types::FavoritesMode;

use super::list::print_header;
use super::open_library;

/// Set and persist the kind filter.
pub(crate) fn run_filter(data_dir: Option<PathBuf>, kind: KindFilter) -> Result<(), CliError> {
    let mut library = open_library(data_dir)?;
    library.set_kind_filter(kind);
    print_header(&library);
    Ok(())
}

/// Set and persist the favorites-only flag.
pub(crate) fn run_favorites(
    data_dir: Option<PathBuf>,
    mode: FavoritesMode,
) -> Result<(), CliError> {
    let mut library = open_library(data_dir)?;
    match mode {
        FavoritesMode::On => library.set_favorites_only(true),
        FavoritesMode::Off => library.set_favorites_only(false),
        FavoritesMode::Toggle => {
            library.toggle_favorites_only();
        }
    }
    print_header(&library);
    Ok(())
}
