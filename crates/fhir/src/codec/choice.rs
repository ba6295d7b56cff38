use meridian_serde_support::suffix_matches;
use serde_json::Value;

use super::primitive::decode_primitive_member;
use super::{
    DecodeContext, DecodeErrorKind, DecodeResult, FhirJson, ObjectWriter, PrimitiveValue,
};
use crate::element::Element;

/// A `stem[x]` field: one variant per allowed type.
///
/// Implemented with `#[derive(ChoiceType)]`. The stem is not part of the type,
/// so `Observation.value[x]` and `Observation.component.value[x]` can share one
/// enum.
pub trait ChoiceType: Sized {
    /// The FHIR type names of the variants, in declaration order.
    const TYPE_NAMES: &'static [&'static str];

    /// The FHIR type name of the populated variant.
    fn type_name(&self) -> &'static str;

    /// Maps a key suffix (`DateTime`) back to its type name (`dateTime`).
    fn type_name_for_suffix(suffix: &str) -> Option<&'static str> {
        Self::TYPE_NAMES
            .iter()
            .copied()
            .find(|type_name| suffix_matches(type_name, suffix))
    }

    /// Decodes the variant for `type_name` from the member `key` and its
    /// `_key` companion.
    ///
    /// `None` means the members carried nothing, e.g. a primitive whose only
    /// member is an empty `_key` object.
    fn decode_variant(
        ctx: &mut DecodeContext<'_>,
        stem: &'static str,
        type_name: &str,
        key: &str,
        value: Option<&Value>,
        companion: Option<&Value>,
    ) -> DecodeResult<Option<Self>>;

    /// Writes the populated variant under `key`.
    fn encode_variant(&self, key: &str, writer: &mut ObjectWriter);
}

/// Decodes a primitive variant; a companion-only member yields a value-less
/// element and an empty companion yields nothing.
pub fn decode_primitive_variant<V, E>(
    ctx: &mut DecodeContext<'_>,
    key: &str,
    value: Option<&Value>,
    companion: Option<&Value>,
) -> DecodeResult<Option<Element<V, E>>>
where
    V: PrimitiveValue,
    E: FhirJson,
{
    decode_primitive_member(ctx, key, value, companion)
}

/// Decodes a complex variant, which never has a `_` companion.
pub fn decode_complex_variant<T: FhirJson>(
    ctx: &mut DecodeContext<'_>,
    key: &str,
    value: Option<&Value>,
    companion: Option<&Value>,
) -> DecodeResult<Option<T>> {
    if companion.is_some_and(|c| !c.is_null()) {
        return Err(ctx.error_at(
            &format!("_{key}"),
            DecodeErrorKind::UnexpectedCompanion {
                key: key.to_string(),
            },
        ));
    }
    let null = Value::Null;
    let value = value.unwrap_or(&null);
    ctx.at_key(key, |ctx| T::decode_json(value, ctx)).map(Some)
}
