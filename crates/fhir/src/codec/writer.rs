use meridian_serde_support::{PrimitiveSlots, choice_key};
use serde_json::Value;

use super::primitive::encode_companion;
use super::{ChoiceType, FhirJson, JsonMap, PrimitiveValue};
use crate::element::Element;

/// Builds the JSON object of a model value in declared field order.
///
/// Absent fields are skipped. A resource writer starts with `resourceType`;
/// preserved unknown members go last.
#[derive(Debug, Default)]
pub struct ObjectWriter {
    map: JsonMap,
}

impl ObjectWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A writer whose first member is `resourceType`.
    pub fn resource(resource_type: &str) -> Self {
        let mut writer = Self::new();
        writer.insert("resourceType", Value::String(resource_type.to_string()));
        writer
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.map.insert(key.into(), value);
    }

    pub fn string(&mut self, key: &str, value: &Option<String>) {
        if let Some(value) = value {
            self.required_string(key, value);
        }
    }

    pub fn required_string(&mut self, key: &str, value: &str) {
        self.insert(key, Value::String(value.to_string()));
    }

    pub fn primitive<V, E>(&mut self, key: &str, element: &Option<Element<V, E>>)
    where
        V: PrimitiveValue,
        E: FhirJson,
    {
        if let Some(element) = element {
            self.put_primitive(key, element);
        }
    }

    pub fn required_primitive<V, E>(&mut self, key: &str, element: &Element<V, E>)
    where
        V: PrimitiveValue,
        E: FhirJson,
    {
        self.put_primitive(key, element);
    }

    /// Writes `key` and, when the element has metadata, `_key`.
    pub fn put_primitive<V, E>(&mut self, key: &str, element: &Element<V, E>)
    where
        V: PrimitiveValue,
        E: FhirJson,
    {
        if let Some(value) = &element.value {
            self.insert(key, value.to_json());
        }
        if let Some(companion) = encode_companion(&element.id, &element.extension) {
            self.insert(format!("_{key}"), Value::Object(companion));
        }
    }

    /// Writes the value array and, when any element has metadata, the `_` array.
    pub fn primitive_list<V, E>(&mut self, key: &str, elements: &Option<Vec<Element<V, E>>>)
    where
        V: PrimitiveValue,
        E: FhirJson,
    {
        let Some(elements) = elements else {
            return;
        };
        let mut slots = PrimitiveSlots::with_capacity(elements.len());
        for element in elements {
            slots.push(
                element.value.as_ref().map(PrimitiveValue::to_json),
                encode_companion(&element.id, &element.extension),
            );
        }
        let (values, companions) = slots.finish();
        self.insert(key, values);
        if let Some(companions) = companions {
            self.insert(format!("_{key}"), companions);
        }
    }

    pub fn complex<T: FhirJson>(&mut self, key: &str, value: &Option<T>) {
        if let Some(value) = value {
            self.put_complex(key, value);
        }
    }

    pub fn required_complex<T: FhirJson>(&mut self, key: &str, value: &T) {
        self.put_complex(key, value);
    }

    pub fn put_complex<T: FhirJson>(&mut self, key: &str, value: &T) {
        self.insert(key, value.encode_json());
    }

    pub fn complex_list<T: FhirJson>(&mut self, key: &str, values: &Option<Vec<T>>) {
        if let Some(values) = values {
            self.insert(key, Value::Array(values.iter().map(FhirJson::encode_json).collect()));
        }
    }

    /// Writes the single `stem + TypeName` member of a choice.
    pub fn choice<C: ChoiceType>(&mut self, stem: &str, value: &Option<C>) {
        if let Some(value) = value {
            self.required_choice(stem, value);
        }
    }

    pub fn required_choice<C: ChoiceType>(&mut self, stem: &str, value: &C) {
        let key = choice_key(stem, value.type_name());
        value.encode_variant(&key, self);
    }

    /// Appends preserved members that do not collide with declared ones.
    pub fn extend_unknown(&mut self, unknown: &JsonMap) {
        for (key, value) in unknown {
            if !self.map.contains_key(key) {
                self.map.insert(key.clone(), value.clone());
            }
        }
    }

    pub fn finish(self) -> JsonMap {
        self.map
    }
}
