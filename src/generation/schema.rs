//! Schema utilities for structured outputs.

use serde_json::Value;

/// Keywords the provider's `responseSchema` (an OpenAPI subset) rejects.
///
/// Array and numeric bounds (`minItems`, `maxItems`, `minimum`, ...) are
/// supported and kept.
const UNSUPPORTED_KEYWORDS: &[&str] = &[
    "$schema",
    "$id",
    "$defs",
    "definitions",
    "additionalProperties",
    "examples",
];

/// Rewrite a JSON schema into the subset accepted as a `responseSchema`.
pub fn transform_for_response(schema: Value) -> Value {
    strip_unsupported(schema)
}

fn strip_unsupported(mut value: Value) -> Value {
    if let Value::Object(ref mut map) = value {
        for keyword in UNSUPPORTED_KEYWORDS {
            map.remove(*keyword);
        }

        for (_, v) in map.iter_mut() {
            *v = strip_unsupported(std::mem::take(v));
        }
    }

    if let Value::Array(ref mut arr) = value {
        for v in arr.iter_mut() {
            *v = strip_unsupported(std::mem::take(v));
        }
    }

    value
}

/// Full JSON schema for `T`, as shown to the model inside a prompt.
pub fn display_schema<T: schemars::JsonSchema>() -> serde_json::Result<Value> {
    let schema = schemars::schema_for!(T);
    serde_json::to_value(schema)
}

/// Schema for `T` restricted to what the provider accepts as `responseSchema`.
pub fn response_schema<T: schemars::JsonSchema>() -> serde_json::Result<Value> {
    display_schema::<T>().map(transform_for_response)
}

/// Pin the length of the array property `field` to exactly `len` items.
///
/// Returns `false` when the schema has no such array property.
pub fn set_array_length(schema: &mut Value, field: &str, len: usize) -> bool {
    let Some(Value::Object(property)) = schema
        .get_mut("properties")
        .and_then(|props| props.get_mut(field))
    else {
        return false;
    };

    if property.get("type") != Some(&Value::String("array".to_string())) {
        return false;
    }

    property.insert("minItems".to_string(), Value::from(len));
    property.insert("maxItems".to_string(), Value::from(len));
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(schemars::JsonSchema)]
    #[allow(dead_code)]
    struct Clip {
        /// Title of the clip.
        title: String,
        tags: Vec<String>,
    }

    #[test]
    fn test_transform_strips_meta_keywords() {
        let schema = json!({
            "$schema": "https://json-schema.org/draft/2020-12/schema",
            "type": "object",
            "additionalProperties": false,
            "properties": {
                "inner": {
                    "type": "object",
                    "additionalProperties": false,
                    "properties": {"name": {"type": "string"}}
                }
            }
        });

        let result = transform_for_response(schema);

        assert!(result.get("$schema").is_none());
        assert!(result.get("additionalProperties").is_none());
        assert!(
            result["properties"]["inner"]
                .get("additionalProperties")
                .is_none()
        );
        assert_eq!(result["properties"]["inner"]["type"], "object");
    }

    #[test]
    fn test_transform_keeps_array_bounds() {
        let schema = json!({
            "type": "array",
            "items": {"type": "string"},
            "minItems": 3,
            "maxItems": 3
        });

        let result = transform_for_response(schema.clone());
        assert_eq!(result, schema);
    }

    #[test]
    fn test_response_schema_from_type() {
        let schema = response_schema::<Clip>().unwrap();

        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"]["tags"]["type"], "array");
        assert_eq!(
            schema["properties"]["title"]["description"],
            "Title of the clip."
        );
        assert!(schema.get("$schema").is_none());
    }

    #[test]
    fn test_set_array_length() {
        let mut schema = response_schema::<Clip>().unwrap();

        assert!(set_array_length(&mut schema, "tags", 4));
        assert_eq!(schema["properties"]["tags"]["minItems"], 4);
        assert_eq!(schema["properties"]["tags"]["maxItems"], 4);

        assert!(!set_array_length(&mut schema, "title", 4));
        assert!(!set_array_length(&mut schema, "missing", 4));
    }
}
