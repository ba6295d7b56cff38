//! Alignment of primitive arrays with their `_` companion arrays.
//!
//! FHIR JSON splits a repeating primitive into two parallel arrays:
//!
//! ```json
//! {
//!   "given": ["Peter", null, "James"],
//!   "_given": [null, {"extension": [...]}, null]
//! }
//! ```
//!
//! Decoding zips both arrays into slots. The shorter array is padded with
//! `null`; a slot where both sides are `null` cannot be explained and is
//! rejected. Encoding always writes the value array and writes the companion
//! array only when at least one slot carries metadata.

use serde_json::{Map, Value};

use crate::context::DecodeContext;
use crate::error::{DecodeError, DecodeErrorKind};

/// One logical position of a primitive array.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignedSlot<'a> {
    /// The raw primitive, `None` when the value array holds `null` here.
    pub value: Option<&'a Value>,
    /// The `{id, extension}` object, `None` when the companion holds `null`.
    pub companion: Option<&'a Map<String, Value>>,
}

/// Zips `name` and `_name` into one sequence of slots.
///
/// Errors are located below `name` (value side) or `_name` (companion side)
/// relative to the context's current path.
pub fn align_primitive_array<'a>(
    ctx: &mut DecodeContext<'_>,
    name: &str,
    values: Option<&'a Value>,
    companions: Option<&'a Value>,
) -> Result<Vec<AlignedSlot<'a>>, DecodeError> {
    let companion_key = format!("_{name}");

    let values: &[Value] = match values {
        None | Some(Value::Null) => &[],
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(
                ctx.error_at(name, DecodeErrorKind::type_mismatch("array", other))
            );
        }
    };
    let companions: &[Value] = match companions {
        None | Some(Value::Null) => &[],
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(ctx.error_at(
                &companion_key,
                DecodeErrorKind::type_mismatch("array", other),
            ));
        }
    };

    let len = values.len().max(companions.len());
    let mut slots = Vec::with_capacity(len);
    for index in 0..len {
        let value = values.get(index).filter(|v| !v.is_null());
        let companion = match companions.get(index) {
            None | Some(Value::Null) => None,
            Some(Value::Object(map)) => Some(map),
            Some(other) => {
                return Err(ctx.at_key(&companion_key, |ctx| {
                    ctx.at_index(index, |ctx| {
                        ctx.error(DecodeErrorKind::type_mismatch("object or null", other))
                    })
                }));
            }
        };

        if value.is_none() && companion.is_none() {
            let side = if index < values.len() { name } else { companion_key.as_str() };
            return Err(ctx.at_key(side, |ctx| {
                ctx.at_index(index, |ctx| {
                    ctx.error(DecodeErrorKind::MalformedPrimitiveArray {
                        index,
                        reason: "neither a value nor an extension is present",
                    })
                })
            }));
        }

        slots.push(AlignedSlot { value, companion });
    }

    if slots.len() != values.len() || slots.len() != companions.len() {
        tracing::trace!(
            field = name,
            values = values.len(),
            companions = companions.len(),
            "padded primitive array to common length"
        );
    }

    Ok(slots)
}

/// Builds the value array and optional companion array for encoding.
#[derive(Debug, Default)]
pub struct PrimitiveSlots {
    values: Vec<Value>,
    companions: Vec<Value>,
    annotated: bool,
}

impl PrimitiveSlots {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
            companions: Vec::with_capacity(capacity),
            annotated: false,
        }
    }

    /// Appends one slot. `companion` should be `None` unless it holds an `id`
    /// or a non-empty extension list.
    pub fn push(&mut self, value: Option<Value>, companion: Option<Map<String, Value>>) {
        self.values.push(value.unwrap_or(Value::Null));
        match companion {
            Some(map) if !map.is_empty() => {
                self.annotated = true;
                self.companions.push(Value::Object(map));
            }
            _ => self.companions.push(Value::Null),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the value array and, when any slot is annotated, the companion array.
    pub fn finish(self) -> (Value, Option<Value>) {
        let companions = self.annotated.then(|| Value::Array(self.companions));
        (Value::Array(self.values), companions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::DecodeOptions;
    use serde_json::json;

    fn align(
        values: Option<Value>,
        companions: Option<Value>,
    ) -> Result<Vec<(Option<Value>, Option<Value>)>, DecodeError> {
        let options = DecodeOptions::default();
        let mut ctx = DecodeContext::new(&options);
        let slots = align_primitive_array(&mut ctx, "given", values.as_ref(), companions.as_ref())?;
        Ok(slots
            .into_iter()
            .map(|slot| {
                (
                    slot.value.cloned(),
                    slot.companion.map(|m| Value::Object(m.clone())),
                )
            })
            .collect())
    }

    #[test]
    fn zips_values_with_sparse_companions() {
        let slots = align(
            Some(json!([1, 2, 3])),
            Some(json!([null, {"id": "a"}, null])),
        )
        .unwrap();
        assert_eq!(slots.len(), 3);
        assert_eq!(slots[0], (Some(json!(1)), None));
        assert_eq!(slots[1], (Some(json!(2)), Some(json!({"id": "a"}))));
        assert_eq!(slots[2], (Some(json!(3)), None));
    }

    #[test]
    fn absent_value_with_annotation_is_kept() {
        let slots = align(
            Some(json!(["a", null])),
            Some(json!([null, {"extension": [{"url": "http://x"}]}])),
        )
        .unwrap();
        assert_eq!(slots[1].0, None);
        assert!(slots[1].1.is_some());
    }

    #[test]
    fn shorter_companion_array_is_padded() {
        let slots = align(Some(json!(["a", "b", "c"])), Some(json!([{"id": "x"}]))).unwrap();
        assert_eq!(slots.len(), 3);
        assert!(slots[0].1.is_some());
        assert!(slots[2].1.is_none());
    }

    #[test]
    fn companion_only_array_is_accepted() {
        let slots = align(None, Some(json!([{"id": "x"}, {"id": "y"}]))).unwrap();
        assert_eq!(slots.len(), 2);
        assert!(slots.iter().all(|(v, c)| v.is_none() && c.is_some()));
    }

    #[test]
    fn unexplained_null_slot_is_malformed() {
        let err = align(Some(json!(["a", null])), Some(json!([null, null]))).unwrap_err();
        assert_eq!(
            err.kind,
            DecodeErrorKind::MalformedPrimitiveArray {
                index: 1,
                reason: "neither a value nor an extension is present",
            }
        );
        assert_eq!(err.path, "/given/1");
    }

    #[test]
    fn excess_null_companions_are_malformed() {
        let err = align(Some(json!(["a"])), Some(json!([null, null]))).unwrap_err();
        assert!(matches!(
            err.kind,
            DecodeErrorKind::MalformedPrimitiveArray { index: 1, .. }
        ));
        assert_eq!(err.path, "/_given/1");
    }

    #[test]
    fn non_array_values_are_type_mismatch() {
        let err = align(Some(json!("a")), None).unwrap_err();
        assert_eq!(err.kind, DecodeErrorKind::type_mismatch("array", &json!("a")));
        assert_eq!(err.path, "/given");
    }

    #[test]
    fn non_object_companion_entry_is_type_mismatch() {
        let err = align(Some(json!(["a"])), Some(json!(["oops"]))).unwrap_err();
        assert_eq!(err.path, "/_given/0");
    }

    #[test]
    fn slots_omit_companion_array_when_plain() {
        let mut slots = PrimitiveSlots::with_capacity(2);
        slots.push(Some(json!("a")), None);
        slots.push(Some(json!("b")), Some(Map::new()));
        let (values, companions) = slots.finish();
        assert_eq!(values, json!(["a", "b"]));
        assert!(companions.is_none());
    }

    #[test]
    fn slots_emit_companion_array_when_annotated() {
        let mut meta = Map::new();
        meta.insert("id".to_string(), json!("a"));

        let mut slots = PrimitiveSlots::default();
        slots.push(Some(json!(1)), None);
        slots.push(Some(json!(2)), Some(meta));
        slots.push(Some(json!(3)), None);
        let (values, companions) = slots.finish();
        assert_eq!(values, json!([1, 2, 3]));
        assert_eq!(companions, Some(json!([null, {"id": "a"}, null])));
    }
}
