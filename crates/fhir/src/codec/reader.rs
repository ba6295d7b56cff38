use std::collections::HashSet;

use meridian_serde_support::{align_primitive_array, choice_suffix};
use serde_json::Value;

use super::primitive::{decode_companion, decode_list, decode_primitive_member, decode_string};
use super::{
    ChoiceType, DecodeContext, DecodeErrorKind, DecodeResult, FhirJson, JsonMap, PrimitiveValue,
};
use crate::element::Element;

/// Reads the `resourceType` discriminator of a resource object.
pub fn resource_type_of<'m>(
    map: &'m JsonMap,
    ctx: &mut DecodeContext<'_>,
) -> DecodeResult<&'m str> {
    match map.get("resourceType") {
        None | Some(Value::Null) => Err(ctx.error(DecodeErrorKind::MissingResourceType)),
        Some(Value::String(resource_type)) => Ok(resource_type),
        Some(other) => Err(ctx.error_at(
            "resourceType",
            DecodeErrorKind::type_mismatch("string", other),
        )),
    }
}

/// Field-by-field access to a JSON object during decoding.
///
/// Every member that is read is marked as claimed. [`ObjectReader::finish`]
/// reports the members nobody claimed: an error in strict mode, preserved
/// members otherwise.
#[derive(Debug)]
pub struct ObjectReader<'a> {
    map: &'a JsonMap,
    claimed: HashSet<&'a str>,
}

impl<'a> ObjectReader<'a> {
    pub fn new(map: &'a JsonMap) -> Self {
        Self {
            map,
            claimed: HashSet::with_capacity(map.len()),
        }
    }

    fn get(&mut self, key: &str) -> Option<&'a Value> {
        let (key, value) = self.map.get_key_value(key)?;
        self.claimed.insert(key.as_str());
        Some(value)
    }

    fn get_companion(&mut self, key: &str) -> Option<&'a Value> {
        self.get(&format!("_{key}"))
    }

    /// Checks that the object is tagged with `expected`.
    pub fn expect_resource_type(
        &mut self,
        ctx: &mut DecodeContext<'_>,
        expected: &'static str,
    ) -> DecodeResult<()> {
        let found = resource_type_of(self.map, ctx)?;
        self.get("resourceType");
        if found != expected {
            return Err(ctx.error_at(
                "resourceType",
                DecodeErrorKind::ResourceTypeMismatch {
                    expected,
                    found: found.to_string(),
                },
            ));
        }
        Ok(())
    }

    /// A plain string member such as `id` or `url`.
    pub fn string(
        &mut self,
        ctx: &mut DecodeContext<'_>,
        key: &str,
    ) -> DecodeResult<Option<String>> {
        match self.get(key) {
            Some(value) => ctx.at_key(key, |ctx| decode_string(value, ctx)),
            None => Ok(None),
        }
    }

    pub fn required_string(
        &mut self,
        ctx: &mut DecodeContext<'_>,
        key: &'static str,
    ) -> DecodeResult<String> {
        self.string(ctx, key)?
            .ok_or_else(|| ctx.error(DecodeErrorKind::MissingField(key)))
    }

    /// A single primitive together with its `_key` companion.
    pub fn primitive<V, E>(
        &mut self,
        ctx: &mut DecodeContext<'_>,
        key: &str,
    ) -> DecodeResult<Option<Element<V, E>>>
    where
        V: PrimitiveValue,
        E: FhirJson,
    {
        let value = self.get(key);
        let companion = self.get_companion(key);
        decode_primitive_member(ctx, key, value, companion)
    }

    pub fn required_primitive<V, E>(
        &mut self,
        ctx: &mut DecodeContext<'_>,
        key: &'static str,
    ) -> DecodeResult<Element<V, E>>
    where
        V: PrimitiveValue,
        E: FhirJson,
    {
        self.primitive(ctx, key)?
            .ok_or_else(|| ctx.error(DecodeErrorKind::MissingField(key)))
    }

    /// A repeating primitive, aligned with its `_key` companion array.
    pub fn primitive_list<V, E>(
        &mut self,
        ctx: &mut DecodeContext<'_>,
        key: &str,
    ) -> DecodeResult<Option<Vec<Element<V, E>>>>
    where
        V: PrimitiveValue,
        E: FhirJson,
    {
        let values = self.get(key).filter(|v| !v.is_null());
        let companions = self.get_companion(key).filter(|v| !v.is_null());
        if values.is_none() && companions.is_none() {
            return Ok(None);
        }

        let companion_key = format!("_{key}");
        let slots = align_primitive_array(ctx, key, values, companions)?;
        let mut elements = Vec::with_capacity(slots.len());
        for (index, slot) in slots.into_iter().enumerate() {
            let value = match slot.value {
                Some(raw) => Some(ctx.at_key(key, |ctx| {
                    ctx.at_index(index, |ctx| V::from_json(raw).map_err(|kind| ctx.error(kind)))
                })?),
                None => None,
            };
            let (id, extension) = match slot.companion {
                Some(map) => ctx.at_key(&companion_key, |ctx| {
                    ctx.at_index(index, |ctx| decode_companion(map, ctx))
                })?,
                None => (None, None),
            };

            let element = Element {
                id,
                extension,
                value,
            };
            if element.is_empty() {
                return Err(ctx.at_key(&companion_key, |ctx| {
                    ctx.at_index(index, |ctx| {
                        ctx.error(DecodeErrorKind::MalformedPrimitiveArray {
                            index,
                            reason: "companion carries neither an id nor an extension",
                        })
                    })
                }));
            }
            elements.push(element);
        }
        Ok(Some(elements))
    }

    /// A single complex element, backbone element or resource.
    pub fn complex<T: FhirJson>(
        &mut self,
        ctx: &mut DecodeContext<'_>,
        key: &str,
    ) -> DecodeResult<Option<T>> {
        match self.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => ctx.at_key(key, |ctx| T::decode_json(value, ctx)).map(Some),
        }
    }

    pub fn required_complex<T: FhirJson>(
        &mut self,
        ctx: &mut DecodeContext<'_>,
        key: &'static str,
    ) -> DecodeResult<T> {
        self.complex(ctx, key)?
            .ok_or_else(|| ctx.error(DecodeErrorKind::MissingField(key)))
    }

    pub fn complex_list<T: FhirJson>(
        &mut self,
        ctx: &mut DecodeContext<'_>,
        key: &str,
    ) -> DecodeResult<Option<Vec<T>>> {
        match self.get(key) {
            Some(value) => ctx.at_key(key, |ctx| decode_list(value, ctx)),
            None => Ok(None),
        }
    }

    /// A `stem[x]` choice member.
    ///
    /// Scans the members not claimed so far for `stem` followed by an
    /// uppercase type suffix, with or without a leading `_`.
    pub fn choice<C: ChoiceType>(
        &mut self,
        ctx: &mut DecodeContext<'_>,
        stem: &'static str,
    ) -> DecodeResult<Option<C>> {
        let map = self.map;
        let mut suffixes: Vec<&'a str> = Vec::new();
        let mut nulls: Vec<&'a str> = Vec::new();
        for (key, value) in map {
            if self.claimed.contains(key.as_str()) {
                continue;
            }
            let Some(suffix) = choice_suffix(stem, key) else {
                continue;
            };
            if value.is_null() {
                nulls.push(key);
            } else if !suffixes.contains(&suffix) {
                suffixes.push(suffix);
            }
        }
        self.claimed.extend(nulls);

        let suffix = match suffixes.as_slice() {
            [] => return Ok(None),
            [suffix] => *suffix,
            many => {
                return Err(ctx.error(DecodeErrorKind::MultipleChoiceVariants {
                    stem,
                    found: many
                        .iter()
                        .map(|suffix| format!("{stem}{suffix}"))
                        .collect(),
                }));
            }
        };

        let key = format!("{stem}{suffix}");
        let Some(type_name) = C::type_name_for_suffix(suffix) else {
            return Err(ctx.error_at(
                &key,
                DecodeErrorKind::UnknownVariant {
                    stem,
                    type_name: suffix.to_string(),
                },
            ));
        };

        let value = self.get(&key);
        let companion = self.get_companion(&key);
        C::decode_variant(ctx, stem, type_name, &key, value, companion)
    }

    pub fn required_choice<C: ChoiceType>(
        &mut self,
        ctx: &mut DecodeContext<'_>,
        stem: &'static str,
    ) -> DecodeResult<C> {
        self.choice(ctx, stem)?
            .ok_or_else(|| ctx.error(DecodeErrorKind::MissingRequiredChoice { stem }))
    }

    /// Returns the members nobody claimed, in document order.
    ///
    /// Strict mode fails on the first such member.
    pub fn finish(self, ctx: &mut DecodeContext<'_>) -> DecodeResult<JsonMap> {
        let mut unknown = JsonMap::new();
        for (key, value) in self.map {
            if self.claimed.contains(key.as_str()) {
                continue;
            }
            if ctx.is_strict() {
                return Err(ctx.error_at(key, DecodeErrorKind::UnknownField(key.clone())));
            }
            tracing::debug!(
                field = %key,
                path = %ctx.pointer(),
                "preserving unrecognized member"
            );
            unknown.insert(key.clone(), value.clone());
        }
        Ok(unknown)
    }
}
