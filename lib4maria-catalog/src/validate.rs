//! Shape check for entries arriving from outside the application.
//!
//! This is the ingestion gate for imported documents only. Entries created
//! through a [`MediaDraft`](crate::MediaDraft) are trusted by construction, and
//! year/rating are deliberately accepted as any text.

use serde_json::Value;

use crate::types::MediaKind;

/// Returns `true` if `candidate` is a JSON object with every entry field
/// present and of the right type, and a recognised `type`.
///
/// `id` is not checked: imported entries always get a fresh one.
pub fn is_valid_entry(candidate: &Value) -> bool {
    let Some(obj) = candidate.as_object() else {
        return false;
    };
    let is_string = |key: &str| obj.get(key).is_some_and(Value::is_string);

    is_string("title")
        && obj
            .get("type")
            .and_then(Value::as_str)
            .and_then(MediaKind::from_wire)
            .is_some()
        && obj
            .get("themes")
            .and_then(Value::as_array)
            .is_some_and(|themes| themes.iter().all(Value::is_string))
        && is_string("releaseYear")
        && is_string("rating")
        && is_string("description")
        && obj.get("isFavorite").is_some_and(Value::is_boolean)
}
