//! Built-in sample collection shown on first run.

use serde_json::Map;

use crate::types::{MediaEntry, MediaKind};

/// The two sample entries used when no saved catalog can be loaded.
pub fn seed_entries() -> Vec<MediaEntry> {
    vec![
        MediaEntry {
            id: 1,
            title: "Inception".to_string(),
            kind: MediaKind::Movie,
            themes: vec!["Sci-Fi".into(), "Action".into(), "Thriller".into()],
            release_year: "2010".to_string(),
            rating: "9".to_string(),
            description: "A thief who steals corporate secrets through dream-sharing \
                          technology is given the inverse task of planting an idea into \
                          the mind of a C.E.O."
                .to_string(),
            is_favorite: false,
            extra: Map::new(),
        },
        MediaEntry {
            id: 2,
            title: "Breaking Bad".to_string(),
            kind: MediaKind::Series,
            themes: vec!["Drama".into(), "Crime".into(), "Thriller".into()],
            release_year: "2008".to_string(),
            rating: "10".to_string(),
            description: "A high school chemistry teacher turned methamphetamine \
                          manufacturer partners with a former student to secure his \
                          family's financial future."
                .to_string(),
            is_favorite: true,
            extra: Map::new(),
        },
    ]
}
