//! The FHIR JSON codec traits.
//!
//! Model types implement [`FhirJson`] (usually through `#[derive(FhirJson)]`)
//! and decode from a borrowed `serde_json` tree. All FHIR-specific wire rules
//! live in [`ObjectReader`] and [`ObjectWriter`]: `_` companions for
//! primitives, choice members, and preservation of unknown members.
//!
//! Decoding is all-or-nothing. A [`DecodeContext`] tracks the JSON-pointer
//! path and nesting depth for one call; the first failure is returned as a
//! [`DecodeError`] and no partially built value escapes.

mod choice;
mod primitive;
mod reader;
mod writer;

pub use choice::{ChoiceType, decode_complex_variant, decode_primitive_variant};
pub use primitive::{PrimitiveValue, decode_primitive_member, encode_companion};
pub use reader::{ObjectReader, resource_type_of};
pub use writer::ObjectWriter;

pub use meridian_serde_support::{
    DecodeContext, DecodeError, DecodeErrorKind, DecodeOptions, DecodeResult,
};

/// A JSON object as produced and consumed by the codec.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;
/// A JSON value as produced and consumed by the codec.
pub type JsonValue = serde_json::Value;

/// A value with a FHIR JSON representation.
pub trait FhirJson: Sized {
    /// Decodes from any JSON value.
    ///
    /// The default accepts objects only and counts one level of nesting
    /// before handing the members to [`FhirJson::decode_object`].
    fn decode_json(value: &JsonValue, ctx: &mut DecodeContext<'_>) -> DecodeResult<Self> {
        match value {
            JsonValue::Object(map) => ctx.descend(|ctx| Self::decode_object(map, ctx)),
            other => Err(ctx.error(DecodeErrorKind::type_mismatch("object", other))),
        }
    }

    /// Decodes from the members of a JSON object.
    fn decode_object(map: &JsonMap, ctx: &mut DecodeContext<'_>) -> DecodeResult<Self>;

    fn encode_json(&self) -> JsonValue {
        JsonValue::Object(self.encode_object())
    }

    fn encode_object(&self) -> JsonMap;

    /// Decodes `value` in a fresh context built from `options`.
    fn from_json_with(value: &JsonValue, options: &DecodeOptions) -> DecodeResult<Self> {
        let mut ctx = DecodeContext::new(options);
        Self::decode_json(value, &mut ctx)
    }
}

/// Boxed fields break type cycles such as `Reference` -> `Identifier` -> `Reference`.
impl<T: FhirJson> FhirJson for Box<T> {
    fn decode_json(value: &JsonValue, ctx: &mut DecodeContext<'_>) -> DecodeResult<Self> {
        T::decode_json(value, ctx).map(Box::new)
    }

    fn decode_object(map: &JsonMap, ctx: &mut DecodeContext<'_>) -> DecodeResult<Self> {
        T::decode_object(map, ctx).map(Box::new)
    }

    fn encode_json(&self) -> JsonValue {
        (**self).encode_json()
    }

    fn encode_object(&self) -> JsonMap {
        (**self).encode_object()
    }
}

/// Implemented by every concrete resource type.
pub trait ResourceKind: FhirJson {
    /// The `resourceType` discriminator of the type.
    const RESOURCE_TYPE: &'static str;
}

/// `serde::Serialize` through the codec.
pub fn serialize_json<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: FhirJson,
    S: serde::Serializer,
{
    serde::Serialize::serialize(&value.encode_json(), serializer)
}

/// `serde::Deserialize` through the codec with default (lenient) options.
pub fn deserialize_json<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: FhirJson,
    D: serde::Deserializer<'de>,
{
    let value = <JsonValue as serde::Deserialize>::deserialize(deserializer)?;
    T::from_json_with(&value, &DecodeOptions::default()).map_err(serde::de::Error::custom)
}
