//! Error types for FHIR JSON decoding.
//!
//! Every failure is reported as a [`DecodeError`]: a [`DecodeErrorKind`] plus the
//! JSON-pointer path of the node that failed. Decoding is all-or-nothing, so an
//! error is the only thing a caller sees when any part of the input is rejected.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// The JSON value kinds, used to describe type mismatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    /// Returns the kind of a JSON value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => JsonKind::Null,
            Value::Bool(_) => JsonKind::Bool,
            Value::Number(_) => JsonKind::Number,
            Value::String(_) => JsonKind::String,
            Value::Array(_) => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            JsonKind::Null => "null",
            JsonKind::Bool => "boolean",
            JsonKind::Number => "number",
            JsonKind::String => "string",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What went wrong while decoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// The `resourceType` discriminator has no registry entry.
    #[error("unknown resource type `{0}`")]
    UnknownResourceType(String),

    /// A resource object has no `resourceType` member.
    #[error("missing resourceType property")]
    MissingResourceType,

    /// A concrete resource was decoded from an object tagged with another type.
    #[error("resourceType `{found}` does not match expected `{expected}`")]
    ResourceTypeMismatch {
        expected: &'static str,
        found: String,
    },

    /// A choice member used a type suffix outside the field's allowed set.
    #[error("`{stem}[x]` does not allow type `{type_name}`")]
    UnknownVariant {
        stem: &'static str,
        type_name: String,
    },

    /// A mandatory choice field has no matching member.
    #[error("required choice `{stem}[x]` is missing")]
    MissingRequiredChoice { stem: &'static str },

    /// More than one type suffix of the same choice stem is present.
    #[error("choice `{stem}[x]` has more than one variant: {found:?}")]
    MultipleChoiceVariants {
        stem: &'static str,
        found: Vec<String>,
    },

    /// A complex choice variant was paired with a `_` companion member.
    #[error("`_{key}` is only allowed for primitive values")]
    UnexpectedCompanion { key: String },

    /// A primitive array and its `_` companion array cannot be aligned.
    #[error("malformed primitive array at index {index}: {reason}")]
    MalformedPrimitiveArray { index: usize, reason: &'static str },

    /// Nesting exceeded the configured maximum depth.
    #[error("maximum nesting depth of {max} exceeded")]
    DepthExceeded { max: usize },

    /// The JSON value kind disagrees with the target type.
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: JsonKind,
    },

    /// The JSON kind is right but the value does not fit the target type.
    #[error("invalid {type_name} value `{value}`")]
    InvalidValue {
        type_name: &'static str,
        value: String,
    },

    /// A structurally required member is absent.
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    /// Strict mode found a member the model does not recognise.
    #[error("unrecognized field `{0}`")]
    UnknownField(String),
}

impl DecodeErrorKind {
    /// Builds a [`DecodeErrorKind::TypeMismatch`] for the given JSON value.
    pub fn type_mismatch(expected: &'static str, found: &Value) -> Self {
        DecodeErrorKind::TypeMismatch {
            expected,
            found: JsonKind::of(found),
        }
    }
}

/// A decode failure located by a JSON-pointer path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at {}", display_path(.path))]
pub struct DecodeError {
    pub kind: DecodeErrorKind,
    /// JSON pointer (RFC 6901) to the failing node; empty for the document root.
    pub path: String,
}

impl DecodeError {
    pub fn new(kind: DecodeErrorKind, path: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.into(),
        }
    }

    pub fn kind(&self) -> &DecodeErrorKind {
        &self.kind
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

fn display_path(path: &str) -> &str {
    if path.is_empty() { "<root>" } else { path }
}

pub type DecodeResult<T> = std::result::Result<T, DecodeError>;
