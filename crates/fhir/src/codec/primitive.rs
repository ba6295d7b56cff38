use serde_json::Value;

use super::{DecodeContext, DecodeErrorKind, DecodeResult, FhirJson, JsonMap};
use crate::element::Element;
use crate::precise_decimal::PreciseDecimal;

/// Conversion between a primitive's Rust value and its JSON form.
///
/// Conversions are strict about the JSON kind: a boolean is never read from a
/// string and a number is never read from a string. A value of the right kind
/// that does not fit (`1.5` as an integer) is an `InvalidValue`.
pub trait PrimitiveValue: Sized {
    /// The FHIR type name used in error messages.
    const TYPE_NAME: &'static str;

    fn from_json(value: &Value) -> Result<Self, DecodeErrorKind>;

    fn to_json(&self) -> Value;
}

impl PrimitiveValue for bool {
    const TYPE_NAME: &'static str = "boolean";

    fn from_json(value: &Value) -> Result<Self, DecodeErrorKind> {
        match value {
            Value::Bool(b) => Ok(*b),
            other => Err(DecodeErrorKind::type_mismatch("boolean", other)),
        }
    }

    fn to_json(&self) -> Value {
        Value::Bool(*self)
    }
}

impl PrimitiveValue for i32 {
    const TYPE_NAME: &'static str = "integer";

    fn from_json(value: &Value) -> Result<Self, DecodeErrorKind> {
        match value {
            Value::Number(n) => n
                .as_i64()
                .and_then(|v| i32::try_from(v).ok())
                .ok_or_else(|| DecodeErrorKind::InvalidValue {
                    type_name: Self::TYPE_NAME,
                    value: n.to_string(),
                }),
            other => Err(DecodeErrorKind::type_mismatch("number", other)),
        }
    }

    fn to_json(&self) -> Value {
        Value::from(*self)
    }
}

/// unsignedInt shares the 32-bit signed range of integer.
const UNSIGNED_INT_MAX: u32 = i32::MAX as u32;

impl PrimitiveValue for u32 {
    const TYPE_NAME: &'static str = "unsignedInt";

    fn from_json(value: &Value) -> Result<Self, DecodeErrorKind> {
        match value {
            Value::Number(n) => n
                .as_u64()
                .and_then(|v| u32::try_from(v).ok())
                .filter(|v| *v <= UNSIGNED_INT_MAX)
                .ok_or_else(|| DecodeErrorKind::InvalidValue {
                    type_name: Self::TYPE_NAME,
                    value: n.to_string(),
                }),
            other => Err(DecodeErrorKind::type_mismatch("number", other)),
        }
    }

    fn to_json(&self) -> Value {
        Value::from(*self)
    }
}

impl PrimitiveValue for String {
    const TYPE_NAME: &'static str = "string";

    fn from_json(value: &Value) -> Result<Self, DecodeErrorKind> {
        match value {
            Value::String(s) => Ok(s.clone()),
            other => Err(DecodeErrorKind::type_mismatch("string", other)),
        }
    }

    fn to_json(&self) -> Value {
        Value::String(self.clone())
    }
}

impl PrimitiveValue for PreciseDecimal {
    const TYPE_NAME: &'static str = "decimal";

    fn from_json(value: &Value) -> Result<Self, DecodeErrorKind> {
        match value {
            Value::Number(n) => Ok(PreciseDecimal::parse(&n.to_string())),
            other => Err(DecodeErrorKind::type_mismatch("number", other)),
        }
    }

    fn to_json(&self) -> Value {
        PreciseDecimal::to_json(self)
    }
}

/// Decodes a JSON string member; `null` is treated as absent.
pub(crate) fn decode_string(
    value: &Value,
    ctx: &mut DecodeContext<'_>,
) -> DecodeResult<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        other => Err(ctx.error(DecodeErrorKind::type_mismatch("string", other))),
    }
}

/// Decodes a JSON array of complex values; `null` is treated as absent.
pub(crate) fn decode_list<T: FhirJson>(
    value: &Value,
    ctx: &mut DecodeContext<'_>,
) -> DecodeResult<Option<Vec<T>>> {
    match value {
        Value::Null => Ok(None),
        Value::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                out.push(ctx.at_index(index, |ctx| T::decode_json(item, ctx))?);
            }
            Ok(Some(out))
        }
        other => Err(ctx.error(DecodeErrorKind::type_mismatch("array", other))),
    }
}

/// Decodes the `{id, extension}` object of a `_` companion member.
///
/// An empty extension list is normalised to `None`, matching what the encoder
/// writes. Other members are rejected in strict mode and dropped otherwise.
pub(crate) fn decode_companion<E: FhirJson>(
    map: &JsonMap,
    ctx: &mut DecodeContext<'_>,
) -> DecodeResult<(Option<String>, Option<Vec<E>>)> {
    ctx.descend(|ctx| {
        let mut id = None;
        let mut extension: Option<Vec<E>> = None;
        for (key, value) in map {
            match key.as_str() {
                "id" => id = ctx.at_key(key, |ctx| decode_string(value, ctx))?,
                "extension" => extension = ctx.at_key(key, |ctx| decode_list(value, ctx))?,
                other if ctx.is_strict() => {
                    return Err(ctx.error_at(
                        other,
                        DecodeErrorKind::UnknownField(other.to_string()),
                    ));
                }
                other => {
                    tracing::warn!(
                        field = other,
                        path = %ctx.pointer(),
                        "dropping unrecognized member of primitive companion"
                    );
                }
            }
        }
        Ok((id, extension.filter(|ext| !ext.is_empty())))
    })
}

/// Decodes a single primitive from its value member and `_` companion.
///
/// `key` is the value member's name; errors on the companion are located at
/// `_key`. Returns `None` when neither side carries anything.
pub fn decode_primitive_member<V, E>(
    ctx: &mut DecodeContext<'_>,
    key: &str,
    value: Option<&Value>,
    companion: Option<&Value>,
) -> DecodeResult<Option<Element<V, E>>>
where
    V: PrimitiveValue,
    E: FhirJson,
{
    let value = match value.filter(|v| !v.is_null()) {
        Some(raw) => Some(ctx.at_key(key, |ctx| {
            V::from_json(raw).map_err(|kind| ctx.error(kind))
        })?),
        None => None,
    };

    let companion_key = format!("_{key}");
    let (id, extension) = match companion.filter(|v| !v.is_null()) {
        Some(Value::Object(map)) => ctx.at_key(&companion_key, |ctx| decode_companion(map, ctx))?,
        Some(other) => {
            return Err(ctx.error_at(
                &companion_key,
                DecodeErrorKind::type_mismatch("object", other),
            ));
        }
        None => (None, None),
    };

    let element = Element {
        id,
        extension,
        value,
    };
    Ok((!element.is_empty()).then_some(element))
}

/// Builds the `_` companion object of a primitive, `None` when it has no metadata.
pub fn encode_companion<E: FhirJson>(
    id: &Option<String>,
    extension: &Option<Vec<E>>,
) -> Option<JsonMap> {
    let mut map = JsonMap::new();
    if let Some(id) = id {
        map.insert("id".to_string(), Value::String(id.clone()));
    }
    if let Some(extension) = extension.as_ref().filter(|ext| !ext.is_empty()) {
        map.insert(
            "extension".to_string(),
            Value::Array(extension.iter().map(FhirJson::encode_json).collect()),
        );
    }
    (!map.is_empty()).then_some(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn boolean_rejects_strings() {
        assert_eq!(bool::from_json(&json!(true)), Ok(true));
        assert_eq!(
            bool::from_json(&json!("true")),
            Err(DecodeErrorKind::type_mismatch("boolean", &json!("true")))
        );
    }

    #[test]
    fn integer_requires_integral_number_in_range() {
        assert_eq!(i32::from_json(&json!(-5)), Ok(-5));
        assert!(matches!(
            i32::from_json(&json!(1.5)),
            Err(DecodeErrorKind::InvalidValue { type_name: "integer", .. })
        ));
        assert!(matches!(
            i32::from_json(&json!(4_000_000_000u64)),
            Err(DecodeErrorKind::InvalidValue { .. })
        ));
        assert!(matches!(
            i32::from_json(&json!("1")),
            Err(DecodeErrorKind::TypeMismatch { .. })
        ));
    }

    #[test]
    fn unsigned_rejects_negative() {
        assert_eq!(u32::from_json(&json!(7)), Ok(7));
        assert!(matches!(
            u32::from_json(&json!(-1)),
            Err(DecodeErrorKind::InvalidValue { type_name: "unsignedInt", .. })
        ));
    }

    #[test]
    fn unsigned_stops_at_signed_range() {
        assert_eq!(u32::from_json(&json!(2147483647)), Ok(2147483647));
        assert_eq!(
            u32::from_json(&json!(2147483648u64)),
            Err(DecodeErrorKind::InvalidValue {
                type_name: "unsignedInt",
                value: "2147483648".to_string(),
            })
        );
    }

    #[test]
    fn decimal_keeps_text() {
        let value: Value = serde_json::from_str("85.50").unwrap();
        let decimal = PreciseDecimal::from_json(&value).unwrap();
        assert_eq!(decimal.original_string(), "85.50");
        assert_eq!(PrimitiveValue::to_json(&decimal), value);
    }
}
