pub(crate) mod add;
pub(crate) mod clear;
pub(crate) mod config;
pub(crate) mod export;
pub(crate) mod favorite;
pub(crate) mod filter;
pub(crate) mod import;
pub(crate) mod list;
pub(crate) mod random;
pub(crate) mod remove;

use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use lib4maria_catalog::{MediaEntry, MediaKind};
use lib4maria_lib::Library;
use lib4maria_store::FileStore;

use crate::CliError;

/// Resolve the data directory and open the library stored there.
pub(crate) fn open_library(data_dir: Option<PathBuf>) -> Result<Library<FileStore>, CliError> {
    let dir = lib4maria_lib::settings::resolve_data_dir(data_dir);
    log::debug!("Data directory: {}", dir.display());
    Ok(lib4maria_lib::open_library(&dir)?)
}

/// Truncate a string to a maximum number of characters, appending "..." if needed.
pub(crate) fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max > 3 {
        let kept: String = s.chars().take(max - 3).collect();
        format!("{}...", kept)
    } else {
        s.chars().take(max).collect()
    }
}

/// Print one entry as a short block: headline, genres and rating, description.
pub(crate) fn print_entry(entry: &MediaEntry) {
    let star = if entry.is_favorite {
        format!("{}", "\u{2605}".if_supports_color(Stdout, |t| t.yellow()))
    } else {
        " ".to_string()
    };
    let kind = match entry.kind {
        MediaKind::Movie => format!("{}", "Movie".if_supports_color(Stdout, |t| t.cyan())),
        MediaKind::Series => format!("{}", "Series".if_supports_color(Stdout, |t| t.magenta())),
    };
    let year = if entry.release_year.is_empty() {
        String::new()
    } else {
        format!(" ({})", entry.release_year)
    };

    log::info!(
        "{} {}{} [{}] {}",
        star,
        entry.title.if_supports_color(Stdout, |t| t.bold()),
        year,
        kind,
        format!("#{}", entry.id).if_supports_color(Stdout, |t| t.dimmed()),
    );

    let mut details = Vec::new();
    if !entry.themes.is_empty() {
        details.push(entry.themes.join(", "));
    }
    if !entry.rating.is_empty() {
        details.push(format!("Rating {}/10", entry.rating));
    }
    if !details.is_empty() {
        log::info!("    {}", details.join(" \u{00B7} "));
    }
    if !entry.description.is_empty() {
        log::info!(
            "    {}",
            truncate_str(&entry.description, 76).if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
}
