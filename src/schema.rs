//! JSON Schema inference from example documents.
//!
//! Given a sample JSON object, [`infer`] produces a schema tree describing
//! its shape, suitable for a JSON-Schema `properties`/`items` tree. The
//! companion pass [`enforce_no_additional_props`] closes object nodes for
//! strict structured-output modes.

use serde_json::{Map, Value, json};

use crate::error::ConnectorError;

/// Classified kind of a JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonType {
    Object,
    Array,
    String,
    Number,
    Boolean,
    Null,
}

impl JsonType {
    /// Classify a parsed JSON value.
    ///
    /// Arrays and nulls are matched before the remaining kinds; a check that
    /// started from "object-like" would misfile both.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Array(_) => Self::Array,
            Value::Null => Self::Null,
            Value::Object(_) => Self::Object,
            Value::String(_) => Self::String,
            Value::Number(_) => Self::Number,
            Value::Bool(_) => Self::Boolean,
        }
    }

    /// JSON-Schema type name for this kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::Array => "array",
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Null => "null",
        }
    }
}

/// Items description of an inferred array node.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemsSchema {
    /// Empty source array: the items shape is left open.
    Untyped,
    /// All elements share one classified type.
    Node(Box<SchemaNode>),
    /// Mixed element types, one branch per distinct type.
    AnyOf(Vec<SchemaNode>),
}

/// One node of an inferred schema tree.
///
/// Built fresh by each [`infer`] call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    Object {
        /// Child schemas in source key order.
        properties: Vec<(String, SchemaNode)>,
        /// Every key seen, in source order. Optionality is not inferred.
        required: Vec<String>,
    },
    Array {
        items: ItemsSchema,
    },
    Scalar(JsonType),
}

impl SchemaNode {
    /// Placeholder schema for an object whose content is not sampled.
    fn empty_object() -> Self {
        Self::Object {
            properties: Vec::new(),
            required: Vec::new(),
        }
    }

    /// Render this node as a JSON-Schema fragment.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Object {
                properties,
                required,
            } => {
                let mut props = Map::new();
                for (key, child) in properties {
                    props.insert(key.clone(), child.to_json());
                }
                json!({
                    "type": "object",
                    "properties": props,
                    "required": required,
                })
            }
            Self::Array { items } => {
                let items_json = match items {
                    ItemsSchema::Untyped => json!({}),
                    ItemsSchema::Node(node) => node.to_json(),
                    ItemsSchema::AnyOf(branches) => json!({
                        "anyOf": branches.iter().map(Self::to_json).collect::<Vec<_>>(),
                    }),
                };
                json!({ "type": "array", "items": items_json })
            }
            Self::Scalar(kind) => json!({ "type": kind.as_str() }),
        }
    }
}

/// Infer a schema from an example JSON value.
///
/// The top level must be an object; anything else is a [`ConnectorError::ParseError`].
/// The input is assumed to be already-parsed JSON and is not re-validated.
pub fn infer(example: &Value) -> Result<SchemaNode, ConnectorError> {
    match example {
        Value::Object(map) => Ok(infer_object(map)),
        other => Err(ConnectorError::ParseError(format!(
            "schema inference requires a top-level JSON object, got {}",
            JsonType::of(other).as_str()
        ))),
    }
}

/// Parse example text and infer a schema from it.
///
/// Text that does not parse is surfaced as [`ConnectorError::InvalidJson`],
/// distinct from the non-object [`ConnectorError::ParseError`].
pub fn infer_from_text(example_text: &str) -> Result<SchemaNode, ConnectorError> {
    let example: Value = serde_json::from_str(example_text)
        .map_err(|e| ConnectorError::InvalidJson(e.to_string()))?;
    infer(&example)
}

fn infer_object(map: &Map<String, Value>) -> SchemaNode {
    let mut properties = Vec::with_capacity(map.len());
    let mut required = Vec::with_capacity(map.len());
    for (key, value) in map {
        required.push(key.clone());
        properties.push((key.clone(), infer_value(value)));
    }
    SchemaNode::Object {
        properties,
        required,
    }
}

fn infer_value(value: &Value) -> SchemaNode {
    match value {
        Value::Object(map) => infer_object(map),
        Value::Array(elements) => SchemaNode::Array {
            items: infer_items(elements),
        },
        other => SchemaNode::Scalar(JsonType::of(other)),
    }
}

fn infer_items(elements: &[Value]) -> ItemsSchema {
    // Distinct element types, first-appearance order.
    let mut kinds: Vec<JsonType> = Vec::new();
    for element in elements {
        let kind = JsonType::of(element);
        if !kinds.contains(&kind) {
            kinds.push(kind);
        }
    }

    match kinds.as_slice() {
        [] => ItemsSchema::Untyped,
        [JsonType::Object] => {
            // Object arrays are sampled from the first element only; later
            // elements' extra or missing fields are ignored.
            if let Some(Value::Object(first)) = elements.first() {
                ItemsSchema::Node(Box::new(infer_object(first)))
            } else {
                ItemsSchema::Untyped
            }
        }
        [kind] => ItemsSchema::Node(Box::new(SchemaNode::Scalar(*kind))),
        mixed => ItemsSchema::AnyOf(
            mixed
                .iter()
                .map(|kind| match kind {
                    // Mixed arrays do not sample object content; the object
                    // branch is an empty placeholder.
                    JsonType::Object => SchemaNode::empty_object(),
                    other => SchemaNode::Scalar(*other),
                })
                .collect(),
        ),
    }
}

/// Recursively set `additionalProperties: false` on every object-typed node
/// that does not already declare it.
///
/// Operates on arbitrary schema fragments, including hand-written ones:
/// already-present keys are left untouched and nodes that are not
/// object/array shaped are skipped rather than rejected. Idempotent.
pub fn enforce_no_additional_props(schema: &mut Value) {
    let Some(node) = schema.as_object_mut() else {
        return;
    };
    match node.get("type").and_then(Value::as_str) {
        Some("object") => {
            if !node.contains_key("additionalProperties") {
                node.insert("additionalProperties".to_string(), Value::Bool(false));
            }
            if let Some(props) = node.get_mut("properties").and_then(Value::as_object_mut) {
                for child in props.values_mut() {
                    enforce_no_additional_props(child);
                }
            }
        }
        Some("array") => {
            if let Some(items) = node.get_mut("items") {
                enforce_no_additional_props(items);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_arrays_and_nulls_before_scalars() {
        assert_eq!(JsonType::of(&json!([1, 2])), JsonType::Array);
        assert_eq!(JsonType::of(&Value::Null), JsonType::Null);
        assert_eq!(JsonType::of(&json!({})), JsonType::Object);
        assert_eq!(JsonType::of(&json!("x")), JsonType::String);
        assert_eq!(JsonType::of(&json!(1.5)), JsonType::Number);
        assert_eq!(JsonType::of(&json!(true)), JsonType::Boolean);
    }

    #[test]
    fn infers_flat_object() {
        let schema = infer(&json!({"a": 1, "b": "x", "c": [1, 2, 3]}))
            .expect("ok")
            .to_json();
        assert_eq!(
            schema,
            json!({
                "type": "object",
                "properties": {
                    "a": {"type": "number"},
                    "b": {"type": "string"},
                    "c": {"type": "array", "items": {"type": "number"}},
                },
                "required": ["a", "b", "c"],
            })
        );
    }

    #[test]
    fn required_preserves_source_key_order() {
        let schema = infer_from_text(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#)
            .expect("ok")
            .to_json();
        assert_eq!(schema["required"], json!(["zeta", "alpha", "mid"]));
    }

    #[test]
    fn object_array_samples_first_element_only() {
        let schema = infer(&json!({"items": [{"id": 1}, {"id": 2, "extra": true}]}))
            .expect("ok")
            .to_json();
        assert_eq!(
            schema["properties"]["items"]["items"],
            json!({
                "type": "object",
                "properties": {"id": {"type": "number"}},
                "required": ["id"],
            })
        );
    }

    #[test]
    fn mixed_array_yields_any_of() {
        let schema = infer(&json!({"v": [1, "a"]})).expect("ok").to_json();
        assert_eq!(
            schema["properties"]["v"],
            json!({
                "type": "array",
                "items": {"anyOf": [{"type": "number"}, {"type": "string"}]},
            })
        );
    }

    #[test]
    fn mixed_array_object_branch_is_placeholder() {
        let schema = infer(&json!({"v": [{"id": 1}, "a"]})).expect("ok").to_json();
        assert_eq!(
            schema["properties"]["v"]["items"]["anyOf"][0],
            json!({"type": "object", "properties": {}, "required": []})
        );
    }

    #[test]
    fn empty_array_items_left_open() {
        let schema = infer(&json!({"v": []})).expect("ok").to_json();
        assert_eq!(
            schema["properties"]["v"],
            json!({"type": "array", "items": {}})
        );
    }

    #[test]
    fn null_values_classify_as_null_type() {
        let schema = infer(&json!({"v": null})).expect("ok").to_json();
        assert_eq!(schema["properties"]["v"], json!({"type": "null"}));
    }

    #[test]
    fn non_object_top_level_is_parse_error() {
        assert!(matches!(
            infer(&json!([1, 2])),
            Err(ConnectorError::ParseError(_))
        ));
        assert!(matches!(
            infer(&json!("text")),
            Err(ConnectorError::ParseError(_))
        ));
    }

    #[test]
    fn unparseable_text_is_invalid_json() {
        assert!(matches!(
            infer_from_text("{not json"),
            Err(ConnectorError::InvalidJson(_))
        ));
    }

    #[test]
    fn enforce_closes_nested_objects() {
        let mut schema = json!({
            "type": "object",
            "properties": {
                "inner": {"type": "object", "properties": {"x": {"type": "string"}}},
                "list": {"type": "array", "items": {"type": "object"}},
            },
        });
        enforce_no_additional_props(&mut schema);
        assert_eq!(schema["additionalProperties"], json!(false));
        assert_eq!(schema["properties"]["inner"]["additionalProperties"], json!(false));
        assert_eq!(
            schema["properties"]["list"]["items"]["additionalProperties"],
            json!(false)
        );
    }

    #[test]
    fn enforce_leaves_existing_declaration_untouched() {
        let mut schema = json!({"type": "object", "additionalProperties": true});
        enforce_no_additional_props(&mut schema);
        assert_eq!(schema["additionalProperties"], json!(true));
    }

    #[test]
    fn enforce_is_idempotent() {
        let mut once = json!({
            "type": "object",
            "properties": {"a": {"type": "object"}},
        });
        enforce_no_additional_props(&mut once);
        let mut twice = once.clone();
        enforce_no_additional_props(&mut twice);
        assert_eq!(once, twice);
    }

    #[test]
    fn enforce_skips_malformed_fragments() {
        let mut fragment = json!({"anyOf": [{"type": "number"}]});
        let before = fragment.clone();
        enforce_no_additional_props(&mut fragment);
        assert_eq!(fragment, before);

        let mut not_object = json!(42);
        enforce_no_additional_props(&mut not_object);
        assert_eq!(not_object, json!(42));
    }

    #[test]
    fn inference_output_is_itself_inferable() {
        // Feeding a serialized schema back in as an example yields a schema
        // describing the meta shape, not a fixed point.
        let first = infer(&json!({"a": 1})).expect("ok").to_json();
        let second = infer(&first).expect("ok").to_json();
        assert_eq!(second["type"], json!("object"));
        assert_eq!(second["required"], json!(["type", "properties", "required"]));
        assert_eq!(second["properties"]["type"], json!({"type": "string"}));
    }
}
