use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

use super::{open_library, print_entry};

/// Suggest something to watch from the current view.
pub(crate) fn run_random(data_dir: Option<PathBuf>, search: Option<String>) -> Result<(), CliError> {
    let mut library = open_library(data_dir)?;
    if let Some(term) = search {
        library.set_search(term);
    }

    let mut rng = rand::rng();
    match library.pick_random(&mut rng) {
        Some(entry) => {
            log::info!(
                "{}",
                "How about this one?".if_supports_color(Stdout, |t| t.bold()),
            );
            print_entry(entry);
        }
        None => log::warn!("Nothing to pick from: no entries match the current filters"),
    }
    Ok(())
}
