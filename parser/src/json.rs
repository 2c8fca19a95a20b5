//! The tolerant JSON layer every pack file is read through.

use serde_json::{Map, Value};

/// The ordered document type advancement JSON decodes into.
///
/// serde_json is built with `preserve_order`, so objects iterate in the order their
/// entries appear in the file. Criteria decoding relies on that order.
pub type JsonObject = Map<String, Value>;

/// Parses `text` into an ordered JSON object.
///
/// Pack data occasionally contains the escaped apostrophe `\'` inside string values,
/// which strict JSON rejects. On a parse failure every such sequence is stripped and
/// the parse retried once. Text that still fails, and documents whose root is not an
/// object, decode to `None` so that one broken file cannot abort a pack decode.
pub fn safe_load_json(text: &str) -> Option<JsonObject> {
    let value = match serde_json::from_str::<Value>(text) {
        Ok(value) => value,
        Err(error) => {
            log::debug!("Retrying JSON parse with escaped apostrophes stripped: {}", error);
            serde_json::from_str(&text.replace("\\'", "")).ok()?
        }
    };

    match value {
        Value::Object(object) => Some(object),
        _ => None,
    }
}

/// Convenience accessors over [JsonObject] used throughout advancement decoding.
///
/// Every getter is type strict. A present field of the wrong type reads the same as
/// an absent field.
pub trait JsonObjectExt {
    /// Gets a string field.
    fn str_field(&self, key: &str) -> Option<&str>;

    /// Gets an integer field.
    fn int_field(&self, key: &str) -> Option<i64>;

    /// Gets a boolean field.
    fn bool_field(&self, key: &str) -> Option<bool>;

    /// Gets a nested object field.
    fn object_field(&self, key: &str) -> Option<&JsonObject>;

    /// Gets an array field.
    fn array_field(&self, key: &str) -> Option<&[Value]>;
}

impl JsonObjectExt for JsonObject {
    fn str_field(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    fn int_field(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_i64)
    }

    fn bool_field(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    fn object_field(&self, key: &str) -> Option<&JsonObject> {
        self.get(key).and_then(Value::as_object)
    }

    fn array_field(&self, key: &str) -> Option<&[Value]> {
        self.get(key).and_then(Value::as_array).map(Vec::as_slice)
    }
}

#[test]
fn repair_pass_strips_escaped_apostrophes() {
    let json = r#"{
        "title": "The Haggler\'s Dozen",
        "count": 13
    }"#;

    let document = safe_load_json(json).unwrap();
    assert_eq!(document.str_field("title"), Some("The Hagglers Dozen"));
    assert_eq!(document.int_field("count"), Some(13));
}

#[test]
fn unbalanced_document_is_absent() {
    assert!(safe_load_json(r#"{"criteria": {"x": {"trigger": "impossible""#).is_none());
}

#[test]
fn non_object_root_is_absent() {
    assert!(safe_load_json("[1, 2, 3]").is_none());
    assert!(safe_load_json("\"just a string\"").is_none());
}

#[test]
fn nested_objects_keep_insertion_order() {
    let json = r#"{"zebra": 1, "apple": 2, "mango": {"z": 0, "a": 1}}"#;

    let document = safe_load_json(json).unwrap();
    let keys: Vec<&String> = document.keys().collect();
    assert_eq!(keys, ["zebra", "apple", "mango"]);

    let nested_keys: Vec<&String> = document.object_field("mango").unwrap().keys().collect();
    assert_eq!(nested_keys, ["z", "a"]);
}

#[test]
fn wrong_typed_fields_read_as_absent() {
    let document = safe_load_json(r#"{"experience": "lots", "hidden": 1}"#).unwrap();
    assert_eq!(document.int_field("experience"), None);
    assert_eq!(document.bool_field("hidden"), None);
    assert_eq!(document.str_field("experience"), Some("lots"));
}
