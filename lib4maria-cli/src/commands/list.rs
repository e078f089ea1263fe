use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use lib4maria_catalog::{KindFilter, MediaKind};
use lib4maria_lib::Library;
use lib4maria_store::{CatalogOrigin, KeyValueStore};

use crate::CliError;

use super::{open_library, print_entry};

/// Show the filtered view and its counts.
pub(crate) fn run_list(data_dir: Option<PathBuf>, search: Option<String>) -> Result<(), CliError> {
    let mut library = open_library(data_dir)?;
    if let Some(term) = search {
        library.set_search(term);
    }

    print_header(&library);
    crate::log_blank();

    let visible = library.visible();
    if visible.is_empty() {
        log::info!(
            "{}",
            "No movies or series match the current filters.".if_supports_color(Stdout, |t| t.dimmed()),
        );
        return Ok(());
    }
    for entry in visible {
        print_entry(entry);
    }
    Ok(())
}

/// Title line with the active filters and counts.
pub(crate) fn print_header<S: KeyValueStore>(library: &Library<S>) {
    let state = library.filter_state();
    let counts = library.counts();

    let mut filters = vec![match state.kind {
        KindFilter::All => "All".to_string(),
        KindFilter::Only(MediaKind::Movie) => "Movies".to_string(),
        KindFilter::Only(MediaKind::Series) => "Series".to_string(),
    }];
    if state.favorites_only {
        filters.push("favorites only".to_string());
    }
    if !state.search.is_empty() {
        filters.push(format!("matching \"{}\"", state.search));
    }

    log::info!(
        "{} {}",
        "Library".if_supports_color(Stdout, |t| t.bold()),
        format!("({})", filters.join(", ")).if_supports_color(Stdout, |t| t.dimmed()),
    );
    log::info!(
        "  {} shown: {} movies, {} series \u{00B7} {} favorites",
        counts.visible,
        counts.movies,
        counts.series,
        counts.favorites,
    );
    if let CatalogOrigin::Seeded(_) = library.origin() {
        log::info!(
            "  {}",
            "Showing sample entries; add your own to get started.".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
}
