//! Shared application settings (data directory, import preference).
//!
//! The settings file is `~/.config/lib4maria/settings.toml`:
//!
//! ```toml
//! [storage]
//! data_dir = "/home/maria/media-catalog"
//!
//! [import]
//! mode = "ask"   # or "merge" / "replace"
//! ```

use std::io;
use std::path::{Path, PathBuf};

use lib4maria_import::ImportMode;

/// Canonical path to the settings file: `~/.config/lib4maria/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("lib4maria").join("settings.toml")
}

/// Platform data directory for the catalog store, e.g.
/// `~/.local/share/lib4maria` on Linux.
pub fn default_data_dir() -> PathBuf {
    match dirs::data_dir() {
        Some(dir) => dir.join("lib4maria"),
        None => PathBuf::from(".lib4maria"),
    }
}

/// Resolve the data directory using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. Saved `storage.data_dir` in `settings.toml`
/// 3. [`default_data_dir`]
pub fn resolve_data_dir(cli_override: Option<PathBuf>) -> PathBuf {
    resolve_data_dir_from(cli_override, &settings_path())
}

/// [`resolve_data_dir`] against an explicit settings file.
pub fn resolve_data_dir_from(cli_override: Option<PathBuf>, settings: &Path) -> PathBuf {
    if let Some(p) = cli_override {
        return p;
    }
    if let Some(p) = load_data_dir(settings) {
        return p;
    }
    default_data_dir()
}

fn load_document(settings: &Path) -> Option<toml::Value> {
    let contents = std::fs::read_to_string(settings).ok()?;
    contents.parse().ok()
}

/// Read `storage.data_dir`, if set and non-empty.
pub fn load_data_dir(settings: &Path) -> Option<PathBuf> {
    let doc = load_document(settings)?;
    let dir = doc.get("storage")?.get("data_dir")?.as_str()?;
    if dir.is_empty() {
        None
    } else {
        Some(PathBuf::from(dir))
    }
}

/// How imports are applied when the user does not say.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportPreference {
    /// Prompt each time.
    #[default]
    Ask,
    Always(ImportMode),
}

/// Read `import.mode`. Missing or unrecognised values mean [`ImportPreference::Ask`].
pub fn load_import_preference(settings: &Path) -> ImportPreference {
    let Some(doc) = load_document(settings) else {
        return ImportPreference::Ask;
    };
    let mode = doc
        .get("import")
        .and_then(|t| t.get("mode"))
        .and_then(|m| m.as_str());
    match mode.map(str::parse::<ImportMode>) {
        Some(Ok(mode)) => ImportPreference::Always(mode),
        Some(Err(e)) => {
            log::warn!("Ignoring import.mode in {}: {}", settings.display(), e);
            ImportPreference::Ask
        }
        None => ImportPreference::Ask,
    }
}

/// Save the data directory, or remove it with `None`. Other keys in the
/// settings file are left as they are.
pub fn save_data_dir(path: Option<&Path>) -> io::Result<()> {
    save_data_dir_to(&settings_path(), path)
}

/// [`save_data_dir`] against an explicit settings file.
pub fn save_data_dir_to(settings: &Path, path: Option<&Path>) -> io::Result<()> {
    let mut doc = load_document(settings).unwrap_or_else(|| toml::Value::Table(Default::default()));
    let storage = section_mut(&mut doc, "storage")?;
    match path {
        Some(p) => {
            storage.insert(
                "data_dir".to_string(),
                toml::Value::String(p.to_string_lossy().into_owned()),
            );
        }
        None => {
            storage.remove("data_dir");
        }
    }
    write_document(settings, &doc)
}

/// The `[name]` table of `doc`, created if absent.
fn section_mut<'a>(doc: &'a mut toml::Value, name: &str) -> io::Result<&'a mut toml::Table> {
    doc.as_table_mut()
        .ok_or_else(|| io::Error::other("settings root is not a table"))?
        .entry(name)
        .or_insert_with(|| toml::Value::Table(Default::default()))
        .as_table_mut()
        .ok_or_else(|| io::Error::other(format!("[{name}] is not a table")))
}

/// Replace the settings file through a temporary sibling and a rename.
fn write_document(settings: &Path, doc: &toml::Value) -> io::Result<()> {
    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let text = toml::to_string_pretty(doc).map_err(io::Error::other)?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, text)?;
    std::fs::rename(&tmp, settings)
}

/// Load the full settings file as a pretty-printed TOML string for display.
pub fn load_settings_string() -> Option<String> {
    let doc = load_document(&settings_path())?;
    toml::to_string_pretty(&doc).ok()
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
