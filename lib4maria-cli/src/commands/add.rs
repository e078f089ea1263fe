use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use lib4maria_catalog::{MediaDraft, MediaKind, Theme};

use crate::CliError;

use super::{open_library, print_entry};

/// Submit a new entry.
pub(crate) fn run_add(
    data_dir: Option<PathBuf>,
    title: String,
    kind: MediaKind,
    themes: Vec<Theme>,
    year: String,
    rating: String,
    description: String,
) -> Result<(), CliError> {
    let draft = themes.into_iter().fold(
        MediaDraft::new(title.trim(), kind)
            .with_release_year(year.trim())
            .with_rating(rating.trim())
            .with_description(description.trim()),
        MediaDraft::with_theme,
    );

    let mut library = open_library(data_dir)?;
    let id = library.add(draft)?;

    log::info!(
        "{} Added {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        kind.label().to_lowercase(),
    );
    if let Some(entry) = library.get(id) {
        print_entry(entry);
    }
    Ok(())
}
