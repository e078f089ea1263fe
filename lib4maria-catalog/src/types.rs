//! Data model types for the media catalog.
//!
//! These types define the persisted and exported JSON shape of a catalog
//! entry, the genre vocabulary used by the creation form, and the filter
//! state that survives reloads.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Identifier of a catalog entry: milliseconds since the Unix epoch at
/// creation (or import) time, adjusted to stay unique.
pub type EntryId = i64;

// ── Media Kind ──────────────────────────────────────────────────────────────

/// Whether an entry is a film or a series. Serialized as `"movie"` / `"series"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    #[default]
    Movie,
    Series,
}

impl MediaKind {
    pub const ALL: [MediaKind; 2] = [MediaKind::Movie, MediaKind::Series];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Series => "series",
        }
    }

    /// Human label used in headings ("Random Movie Pick!").
    pub fn label(&self) -> &'static str {
        match self {
            Self::Movie => "Movie",
            Self::Series => "Series",
        }
    }

    /// Strict match against the wire value. Used by the import validator,
    /// so no case folding or aliases.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "movie" => Some(Self::Movie),
            "series" => Some(Self::Series),
            _ => None,
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaKind {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "movie" | "movies" | "film" => Ok(Self::Movie),
            "series" | "show" | "tv" => Ok(Self::Series),
            _ => Err(ParseValueError::new("media kind", s)),
        }
    }
}

// ── Theme ───────────────────────────────────────────────────────────────────

/// Genre tag from the fixed vocabulary offered by the creation form.
///
/// Stored entries keep their themes as plain text, so imported documents may
/// carry tags outside this list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Theme {
    Action,
    Comedy,
    Drama,
    Horror,
    SciFi,
    Romance,
    Thriller,
    Documentary,
    Crime,
    Mystery,
    History,
    Biography,
}

impl Theme {
    /// Vocabulary in display order.
    pub const ALL: [Theme; 12] = [
        Theme::Action,
        Theme::Comedy,
        Theme::Drama,
        Theme::Horror,
        Theme::SciFi,
        Theme::Romance,
        Theme::Thriller,
        Theme::Documentary,
        Theme::Crime,
        Theme::Mystery,
        Theme::History,
        Theme::Biography,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Action => "Action",
            Self::Comedy => "Comedy",
            Self::Drama => "Drama",
            Self::Horror => "Horror",
            Self::SciFi => "Sci-Fi",
            Self::Romance => "Romance",
            Self::Thriller => "Thriller",
            Self::Documentary => "Documentary",
            Self::Crime => "Crime",
            Self::Mystery => "Mystery",
            Self::History => "History",
            Self::Biography => "Biography",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ParseValueError;

    /// Case-insensitive; `scifi` and `sci fi` are accepted for `Sci-Fi`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .trim()
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();
        Theme::ALL
            .into_iter()
            .find(|t| {
                let name: String = t
                    .as_str()
                    .chars()
                    .filter(|c| c.is_alphanumeric())
                    .flat_map(char::to_lowercase)
                    .collect();
                name == wanted
            })
            .ok_or_else(|| ParseValueError::new("theme", s))
    }
}

// ── Media Entry ─────────────────────────────────────────────────────────────

/// A catalog record, in the exact JSON shape used by storage and backups.
///
/// Only `id`, `title` and `type` are required when decoding persisted data;
/// the remaining fields fall back to their defaults. Fields this version does
/// not know about are kept in `extra` and written back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaEntry {
    pub id: EntryId,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    #[serde(default)]
    pub themes: Vec<String>,
    #[serde(default)]
    pub release_year: String,
    #[serde(default)]
    pub rating: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MediaEntry {
    /// Case-insensitive substring match on the title or any theme.
    ///
    /// `needle` must already be lowercased.
    pub fn matches_search(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(needle)
            || self
                .themes
                .iter()
                .any(|theme| theme.to_lowercase().contains(needle))
    }
}

// ── Draft ───────────────────────────────────────────────────────────────────

/// Why a draft cannot be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("a title is required")]
    EmptyTitle,
    #[error("select at least one genre")]
    NoThemes,
}

/// The creation form: everything an entry has except its id and favorite flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaDraft {
    pub title: String,
    pub kind: MediaKind,
    /// Selected genres in the order they were picked.
    pub themes: Vec<Theme>,
    pub release_year: String,
    pub rating: String,
    pub description: String,
}

impl MediaDraft {
    pub fn new(title: impl Into<String>, kind: MediaKind) -> Self {
        Self {
            title: title.into(),
            kind,
            ..Default::default()
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        if !self.themes.contains(&theme) {
            self.themes.push(theme);
        }
        self
    }

    pub fn with_release_year(mut self, year: impl Into<String>) -> Self {
        self.release_year = year.into();
        self
    }

    pub fn with_rating(mut self, rating: impl Into<String>) -> Self {
        self.rating = rating.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Select the theme if it is not selected, deselect it otherwise.
    pub fn toggle_theme(&mut self, theme: Theme) {
        if let Some(pos) = self.themes.iter().position(|t| *t == theme) {
            self.themes.remove(pos);
        } else {
            self.themes.push(theme);
        }
    }

    /// A draft can be submitted once it has a title and at least one genre.
    pub fn check(&self) -> Result<(), DraftError> {
        if self.title.trim().is_empty() {
            return Err(DraftError::EmptyTitle);
        }
        if self.themes.is_empty() {
            return Err(DraftError::NoThemes);
        }
        Ok(())
    }

    /// Turn the draft into an entry. Does not validate; see [`MediaDraft::check`].
    pub fn into_entry(self, id: EntryId) -> MediaEntry {
        MediaEntry {
            id,
            title: self.title,
            kind: self.kind,
            themes: self.themes.iter().map(|t| t.as_str().to_string()).collect(),
            release_year: self.release_year,
            rating: self.rating,
            description: self.description,
            is_favorite: false,
            extra: Map::new(),
        }
    }
}

// ── Filter State ────────────────────────────────────────────────────────────

/// Which kinds are shown. Persisted as `all` / `movie` / `series`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KindFilter {
    #[default]
    All,
    Only(MediaKind),
}

impl KindFilter {
    pub const MOVIE: KindFilter = KindFilter::Only(MediaKind::Movie);
    pub const SERIES: KindFilter = KindFilter::Only(MediaKind::Series);

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(kind) => kind.as_str(),
        }
    }

    /// Parse the persisted text exactly as [`KindFilter::as_str`] writes it.
    /// Anything else, including the aliases `FromStr` accepts, means `All`.
    pub fn from_stored(s: &str) -> Self {
        match s {
            "all" => Self::All,
            other => MediaKind::from_wire(other).map_or(Self::All, Self::Only),
        }
    }

    pub fn matches(&self, kind: MediaKind) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == kind,
        }
    }
}

impl fmt::Display for KindFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KindFilter {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<MediaKind>()
            .map(Self::Only)
            .map_err(|_| ParseValueError::new("kind filter", s))
    }
}

/// The view's filter settings. `search` is session-only and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub kind: KindFilter,
    pub favorites_only: bool,
    pub search: String,
}

/// Error for text that does not name a known kind, filter, or theme.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {what}: '{value}'")]
pub struct ParseValueError {
    what: &'static str,
    value: String,
}

impl ParseValueError {
    fn new(what: &'static str, value: &str) -> Self {
        Self {
            what,
            value: value.to_string(),
        }
    }
}
