use serde_json::{json, Value};

pub const SCHEMA_DRAFT: &str = "http://json-schema.org/draft-07/schema#";

fn string_variant(title: &str) -> Value {
    json!({ "type": "string", "title": title })
}

/// A context definition is a map whose keys are terms, compact IRIs, IRIs or keywords.
/// https://www.w3.org/TR/json-ld11/#context-definitions
fn context_definition_schema() -> Value {
    json!({
        "type": "object",
        "title": "JSON-LD Context Definition",
        "additionalProperties": {
            "title": "Context Definition non-keyword key/value",
            "oneOf": [
                string_variant("Internationalized Resource Identifier (IRI)"),
                string_variant("Compact IRI"),
                string_variant("term"),
                string_variant("blank node identifier"),
                string_variant("keyword"),
                { "type": "null", "title": "null" },
                { "type": "object", "title": "expanded term definition" },
            ]
        }
    })
}

fn context_item_schema() -> Value {
    json!({
        "title": "JSON-LD @context item",
        "oneOf": [
            string_variant("IRI Reference"),
            context_definition_schema(),
            { "type": "null", "title": "Null" },
        ]
    })
}

/// JSON Schema for the value of `@context`, as consumed by schema-driven form renderers.
///
/// The string variants overlap, so a strict `oneOf` evaluator rejects every string
/// property value; `Validator` treats them as one branch instead.
pub fn context_schema() -> Value {
    let item = context_item_schema();
    json!({
        "$schema": SCHEMA_DRAFT,
        "oneOf": [
            item.clone(),
            {
                "title": "Array of JSON-LD @context item",
                "type": "array",
                "items": item,
            }
        ]
    })
}
