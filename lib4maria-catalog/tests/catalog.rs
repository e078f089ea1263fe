use lib4maria_catalog::*;
use serde_json::json;

fn dune_draft() -> MediaDraft {
    MediaDraft::new("Dune", MediaKind::Movie)
        .with_theme(Theme::SciFi)
        .with_release_year("2021")
        .with_rating("8")
        .with_description("Spice.")
}

#[test]
fn add_appends_non_favorite_entry_with_clock_id() {
    let clock = FixedClock::new(1_700_000_000_000);
    let mut catalog = Catalog::new(seed_entries());
    let id = catalog.add(dune_draft(), &clock).unwrap();

    assert_eq!(id, 1_700_000_000_000);
    let last = catalog.entries().last().unwrap();
    assert_eq!(last.id, id);
    assert_eq!(last.title, "Dune");
    assert_eq!(last.themes, vec!["Sci-Fi".to_string()]);
    assert!(!last.is_favorite);
}

#[test]
fn same_millisecond_adds_get_distinct_ids() {
    let clock = FixedClock::new(10);
    let mut catalog = Catalog::default();
    let a = catalog.add(dune_draft(), &clock).unwrap();
    let b = catalog.add(dune_draft(), &clock).unwrap();
    assert_eq!(a, 10);
    assert_eq!(b, 11);
}

#[test]
fn draft_requires_title_and_theme() {
    let clock = FixedClock::new(0);
    let mut catalog = Catalog::default();

    let untitled = MediaDraft::new("   ", MediaKind::Movie).with_theme(Theme::Drama);
    assert_eq!(catalog.add(untitled, &clock), Err(DraftError::EmptyTitle));

    let no_themes = MediaDraft::new("Heat", MediaKind::Movie);
    assert_eq!(catalog.add(no_themes, &clock), Err(DraftError::NoThemes));

    assert!(catalog.is_empty());
}

#[test]
fn toggle_theme_selects_and_deselects() {
    let mut draft = MediaDraft::new("Heat", MediaKind::Movie);
    draft.toggle_theme(Theme::Crime);
    draft.toggle_theme(Theme::Thriller);
    draft.toggle_theme(Theme::Crime);
    assert_eq!(draft.themes, vec![Theme::Thriller]);
}

#[test]
fn toggle_favorite_reports_new_state() {
    let mut catalog = Catalog::new(seed_entries());
    assert_eq!(catalog.toggle_favorite(1), Some(true));
    assert_eq!(catalog.toggle_favorite(1), Some(false));
    assert_eq!(catalog.toggle_favorite(404), None);
}

#[test]
fn remove_reports_whether_anything_changed() {
    let mut catalog = Catalog::new(seed_entries());
    assert!(catalog.remove(2));
    assert!(!catalog.remove(2));
    assert_eq!(catalog.len(), 1);
}

#[test]
fn seed_has_inception_and_breaking_bad() {
    let seed = seed_entries();
    assert_eq!(seed.len(), 2);
    assert_eq!(seed[0].id, 1);
    assert_eq!(seed[0].title, "Inception");
    assert_eq!(seed[0].kind, MediaKind::Movie);
    assert!(!seed[0].is_favorite);
    assert_eq!(seed[1].id, 2);
    assert_eq!(seed[1].kind, MediaKind::Series);
    assert!(seed[1].is_favorite);
}

#[test]
fn entry_uses_original_json_field_names() {
    let entry = seed_entries().remove(0);
    let value = serde_json::to_value(&entry).unwrap();
    assert_eq!(value["type"], "movie");
    assert_eq!(value["releaseYear"], "2010");
    assert_eq!(value["isFavorite"], false);
    assert!(value.get("kind").is_none());
    assert!(value.get("extra").is_none());
}

#[test]
fn unknown_fields_survive_a_round_trip() {
    let value = json!({
        "id": 3,
        "title": "Arrival",
        "type": "movie",
        "themes": [],
        "releaseYear": "2016",
        "rating": "8",
        "description": "",
        "isFavorite": false,
        "watchedOn": "2024-01-02"
    });
    let entry: MediaEntry = serde_json::from_value(value.clone()).unwrap();
    assert_eq!(entry.extra.get("watchedOn"), Some(&json!("2024-01-02")));
    assert_eq!(serde_json::to_value(&entry).unwrap(), value);
}

#[test]
fn older_entries_missing_optional_fields_still_decode() {
    let entry: MediaEntry =
        serde_json::from_value(json!({ "id": 9, "title": "Fargo", "type": "series" })).unwrap();
    assert!(entry.themes.is_empty());
    assert!(!entry.is_favorite);
    assert_eq!(entry.release_year, "");
}

#[test]
fn kind_filter_parses_persisted_text() {
    assert_eq!(KindFilter::from_stored("all"), KindFilter::All);
    assert_eq!(KindFilter::from_stored("movie"), KindFilter::MOVIE);
    assert_eq!(KindFilter::from_stored("series"), KindFilter::SERIES);
    assert_eq!(KindFilter::from_stored("garbage"), KindFilter::All);
    // Command-line aliases and other casings are not stored forms.
    for text in ["tv", "film", "show", "Movie", " series"] {
        assert_eq!(KindFilter::from_stored(text), KindFilter::All, "{text}");
    }
    assert_eq!("tv".parse::<KindFilter>().unwrap(), KindFilter::SERIES);
    assert_eq!(KindFilter::SERIES.to_string(), "series");
}

#[test]
fn theme_parsing_is_forgiving() {
    assert_eq!("sci-fi".parse::<Theme>().unwrap(), Theme::SciFi);
    assert_eq!("SciFi".parse::<Theme>().unwrap(), Theme::SciFi);
    assert_eq!("documentary".parse::<Theme>().unwrap(), Theme::Documentary);
    assert!("western".parse::<Theme>().is_err());
}

#[test]
fn pick_random_respects_filter_state() {
    use rand::SeedableRng;
    let catalog = Catalog::new(seed_entries());
    let mut rng = rand::rngs::StdRng::seed_from_u64(1);
    let series_only = FilterState {
        kind: KindFilter::SERIES,
        ..Default::default()
    };
    let picked = catalog.pick_random(&series_only, &mut rng).unwrap();
    assert_eq!(picked.title, "Breaking Bad");

    let nothing = FilterState {
        search: "zzz".to_string(),
        ..Default::default()
    };
    assert!(catalog.pick_random(&nothing, &mut rng).is_none());
}
