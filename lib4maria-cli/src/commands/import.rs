use std::io::Write;
use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use lib4maria_import::{ImportMode, ImportStats};
use lib4maria_lib::ImportPreference;
use lib4maria_lib::settings::{load_import_preference, settings_path};

use crate::CliError;

use super::open_library;

/// Import a backup file, merging or replacing according to the flags, the
/// saved preference, or the user's answer.
pub(crate) fn run_import(
    data_dir: Option<PathBuf>,
    path: PathBuf,
    merge: bool,
    replace: bool,
) -> Result<(), CliError> {
    let preset = if merge {
        Some(ImportMode::Merge)
    } else if replace {
        Some(ImportMode::Replace)
    } else {
        match load_import_preference(&settings_path()) {
            ImportPreference::Always(mode) => Some(mode),
            ImportPreference::Ask => None,
        }
    };

    let mut library = open_library(data_dir)?;

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::runtime(format!("Failed to create tokio runtime: {}", e)))?;

    let outcome = rt.block_on(library.import_file(&path, |stats| {
        report_stats(&path, stats);
        preset.unwrap_or_else(|| ask_mode(stats))
    }))?;

    log::info!(
        "{} {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        outcome.message(),
    );
    log::info!("  Library now holds {} entries", outcome.total);
    Ok(())
}

fn report_stats(path: &Path, stats: &ImportStats) {
    log::info!(
        "Read {} entries from {}",
        stats.accepted,
        path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    if stats.skipped > 0 {
        log::warn!(
            "{} of {} entries were invalid and will be skipped",
            stats.skipped,
            stats.candidates,
        );
    }
}

/// Ask whether to add to the existing library. Yes (the default) merges, no
/// replaces.
fn ask_mode(stats: &ImportStats) -> ImportMode {
    loop {
        print!(
            "Add {} items to your existing library? {} ",
            stats.accepted,
            "[Y/n, n replaces it]".if_supports_color(Stdout, |t| t.dimmed()),
        );
        let _ = std::io::stdout().flush();

        let mut input = String::new();
        match std::io::stdin().read_line(&mut input) {
            Ok(0) | Err(_) => {
                log::warn!("No answer; adding to the existing library");
                return ImportMode::Merge;
            }
            Ok(_) => {}
        }
        match input.trim().to_lowercase().as_str() {
            "" | "y" | "yes" => return ImportMode::Merge,
            "n" | "no" => return ImportMode::Replace,
            _ => log::warn!("Please answer y or n"),
        }
    }
}
