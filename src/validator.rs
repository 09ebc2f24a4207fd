use crate::errors::Result;
use crate::keywords::{is_context_keyword, looks_like_keyword, CONTEXT_KEYWORDS};
use crate::options::{KeywordPolicy, ValidatorOptions};
use crate::pointer::InstancePath;
use itertools::Itertools;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;
use tracing::{debug, trace};

/// =========================
/// Result types
/// =========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The value's JSON type matches no variant permitted at this position.
    TypeMismatch,
    /// A context definition entry is neither a string, null, nor an object.
    InvalidContextDefinitionValue,
    /// An element of a context array is not a valid context item.
    InvalidArrayElement,
    /// An `@`-key outside the keyword set, under `KeywordPolicy::Closed`.
    UnknownKeyword,
    /// Document mode only: no top-level `@context` entry.
    MissingContext,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    pub path: InstancePath,
    pub kind: ErrorKind,
    pub message: String,
}

impl ValidationError {
    fn new(path: InstancePath, kind: ErrorKind, message: impl Into<String>) -> Self {
        Self { path, kind, message: message.into() }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self { valid: errors.is_empty(), errors }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn into_result(self) -> std::result::Result<(), Vec<ValidationError>> {
        if self.valid {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

/// =========================
/// Variant names used in messages
/// =========================

const ITEM_VARIANTS: &[&str] = &["IRI reference (string)", "context definition (object)", "null"];

const VALUE_VARIANTS: &[&str] = &[
    "IRI reference (string)",
    "context definition (object)",
    "null",
    "an array of these",
];

// IRI, compact IRI, term, blank node identifier and keyword all collapse to "string".
const DEFINITION_VALUE_VARIANTS: &[&str] = &[
    "IRI, compact IRI, term, blank node identifier or keyword (string)",
    "null",
    "expanded term definition (object)",
];

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn expected(variants: &[&str], found: &Value) -> String {
    let listed = match variants.split_last() {
        Some((last, [])) => (*last).to_string(),
        Some((last, rest)) => format!("{}, or {}", rest.iter().join(", "), last),
        None => String::new(),
    };
    format!("expected {listed}; found {}", json_type(found))
}

/// =========================
/// Validator
/// =========================

/// Checks the syntactic shape of a JSON-LD `@context` value.
///
/// Holds only immutable options, so one instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    options: ValidatorOptions,
}

impl Validator {
    pub fn new(options: ValidatorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ValidatorOptions {
        &self.options
    }

    /// Validate a decoded value. Every violation is collected; this never fails.
    pub fn validate(&self, value: &Value) -> ValidationResult {
        let root = InstancePath::root();
        let mut errors = Vec::new();

        if self.options.unwrap_document {
            match value.as_object().and_then(|doc| doc.get("@context")) {
                Some(context) => {
                    self.check_context_value(context, &root.push_key("@context"), &mut errors)
                }
                None => errors.push(ValidationError::new(
                    root,
                    ErrorKind::MissingContext,
                    format!(
                        "expected a JSON-LD document (object) with an \"@context\" entry; found {}",
                        json_type(value)
                    ),
                )),
            }
        } else {
            self.check_context_value(value, &root, &mut errors);
        }

        let result = ValidationResult::from_errors(errors);
        debug!(valid = result.valid, errors = result.errors.len(), "validated context");
        result
    }

    /// Decode `text` as JSON, then validate it.
    pub fn validate_str(&self, text: &str) -> Result<ValidationResult> {
        let value: Value = serde_json::from_str(text)?;
        Ok(self.validate(&value))
    }

    fn check_context_value(&self, value: &Value, path: &InstancePath, errors: &mut Vec<ValidationError>) {
        match value {
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    self.check_item(
                        item,
                        &path.push_index(i),
                        ErrorKind::InvalidArrayElement,
                        ITEM_VARIANTS,
                        errors,
                    );
                }
            }
            other => self.check_item(other, path, ErrorKind::TypeMismatch, VALUE_VARIANTS, errors),
        }
    }

    // null, then IRI reference, then context definition. Only the object branch can fail
    // for a reason other than the JSON type, so its errors are the only ones worth reporting.
    fn check_item(
        &self,
        value: &Value,
        path: &InstancePath,
        kind: ErrorKind,
        variants: &[&str],
        errors: &mut Vec<ValidationError>,
    ) {
        trace!(path = %path, kind = json_type(value), "context item");
        match value {
            Value::Null | Value::String(_) => {}
            Value::Object(map) => self.check_definition(map, path, errors),
            other => errors.push(ValidationError::new(path.clone(), kind, expected(variants, other))),
        }
    }

    fn check_definition(&self, map: &Map<String, Value>, path: &InstancePath, errors: &mut Vec<ValidationError>) {
        for (key, value) in map {
            let at = path.push_key(key);

            if self.options.keyword_policy == KeywordPolicy::Closed
                && looks_like_keyword(key)
                && !is_context_keyword(key)
            {
                errors.push(ValidationError::new(
                    at.clone(),
                    ErrorKind::UnknownKeyword,
                    format!(
                        "unknown keyword {key:?}; expected one of {}",
                        CONTEXT_KEYWORDS.iter().join(", ")
                    ),
                ));
            }

            match value {
                Value::Null | Value::String(_) | Value::Object(_) => {}
                other => errors.push(ValidationError::new(
                    at,
                    ErrorKind::InvalidContextDefinitionValue,
                    expected(DEFINITION_VALUE_VARIANTS, other),
                )),
            }
        }
    }
}

/// Convenience: validate with default options.
pub fn validate(value: &Value) -> ValidationResult {
    Validator::default().validate(value)
}

/// Convenience: decode and validate with default options.
pub fn validate_str(text: &str) -> Result<ValidationResult> {
    Validator::default().validate_str(text)
}
