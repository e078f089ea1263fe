use lib4maria_catalog::is_valid_entry;
use serde_json::{Value, json};

fn well_formed() -> Value {
    json!({
        "id": 7,
        "title": "Dune",
        "type": "movie",
        "themes": ["Sci-Fi"],
        "releaseYear": "2021",
        "rating": "8",
        "description": "Spice.",
        "isFavorite": false
    })
}

#[test]
fn accepts_well_formed_entry() {
    assert!(is_valid_entry(&well_formed()));
}

#[test]
fn accepts_series_and_empty_themes() {
    let mut v = well_formed();
    v["type"] = json!("series");
    v["themes"] = json!([]);
    assert!(is_valid_entry(&v));
}

#[test]
fn id_is_not_required() {
    let mut v = well_formed();
    v.as_object_mut().unwrap().remove("id");
    assert!(is_valid_entry(&v));
}

#[test]
fn rejects_unknown_kind() {
    let mut v = well_formed();
    v["type"] = json!("bad-kind");
    assert!(!is_valid_entry(&v));

    v["type"] = json!("Movie");
    assert!(!is_valid_entry(&v), "kind match is exact");
}

#[test]
fn rejects_each_missing_field() {
    for field in [
        "title",
        "type",
        "themes",
        "releaseYear",
        "rating",
        "description",
        "isFavorite",
    ] {
        let mut v = well_formed();
        v.as_object_mut().unwrap().remove(field);
        assert!(!is_valid_entry(&v), "missing {field} should be rejected");
    }
}

#[test]
fn rejects_wrong_types() {
    let mut v = well_formed();
    v["releaseYear"] = json!(2021);
    assert!(!is_valid_entry(&v));

    let mut v = well_formed();
    v["isFavorite"] = json!("false");
    assert!(!is_valid_entry(&v));

    let mut v = well_formed();
    v["themes"] = json!("Sci-Fi");
    assert!(!is_valid_entry(&v));

    let mut v = well_formed();
    v["themes"] = json!(["Drama", 3]);
    assert!(!is_valid_entry(&v));
}

#[test]
fn rejects_non_objects() {
    assert!(!is_valid_entry(&json!(null)));
    assert!(!is_valid_entry(&json!([])));
    assert!(!is_valid_entry(&json!("Dune")));
}

#[test]
fn year_and_rating_are_not_range_checked() {
    let mut v = well_formed();
    v["releaseYear"] = json!("sometime in the nineties");
    v["rating"] = json!("11");
    assert!(is_valid_entry(&v));
}
