use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use lib4maria_lib::ImportPreference;
use lib4maria_lib::settings::{
    default_data_dir, load_data_dir, load_import_preference, load_settings_string,
    resolve_data_dir, save_data_dir, settings_path,
};

use crate::CliError;

/// Show the settings file, its values, and where the catalog lives.
pub(crate) fn run_config_show(data_dir: Option<PathBuf>) -> Result<(), CliError> {
    let path = settings_path();

    log::info!(
        "{}",
        "lib4maria Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    let source = if data_dir.is_some() {
        "--data-dir"
    } else if load_data_dir(&path).is_some() {
        "settings"
    } else {
        "default"
    };
    log::info!(
        "  Data directory: {} {}",
        resolve_data_dir(data_dir)
            .display()
            .if_supports_color(Stdout, |t| t.cyan()),
        format!("({})", source).if_supports_color(Stdout, |t| t.dimmed()),
    );

    let import = match load_import_preference(&path) {
        ImportPreference::Ask => "ask".to_string(),
        ImportPreference::Always(mode) => mode.to_string(),
    };
    log::info!("  Import mode:    {}", import);

    if let Some(contents) = load_settings_string() {
        crate::log_blank();
        for line in contents.lines() {
            log::info!("    {}", line.if_supports_color(Stdout, |t| t.dimmed()));
        }
    }
    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path() -> Result<(), CliError> {
    log::info!("{}", settings_path().display());
    Ok(())
}

/// Save or reset the default data directory.
pub(crate) fn run_config_set_data_dir(path: Option<PathBuf>) -> Result<(), CliError> {
    let path = match path {
        Some(p) if p.is_relative() => Some(std::env::current_dir()?.join(p)),
        other => other,
    };
    save_data_dir(path.as_deref())
        .map_err(|e| CliError::config(format!("Failed to save settings: {}", e)))?;

    match path {
        Some(p) => log::info!(
            "{} Data directory set to {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            p.display().if_supports_color(Stdout, |t| t.cyan()),
        ),
        None => log::info!(
            "{} Data directory reset to the default ({})",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            default_data_dir().display(),
        ),
    }
    Ok(())
}
