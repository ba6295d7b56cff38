//! Property-based round trips over generated resource trees.
//!
//! Generated trees avoid the shapes the wire form cannot carry: empty
//! elements and empty lists are never written, so they are never generated.

#![cfg(feature = "R4")]

use meridian_fhir::r4::*;
use meridian_fhir::{Element, PreciseDecimal};
use meridian_serde::{Codec, json_differences};
use proptest::prelude::*;

fn text() -> impl Strategy<Value = std::string::String> {
    "[A-Za-z0-9][A-Za-z0-9 .-]{0,11}"
}

fn element_id() -> impl Strategy<Value = Option<std::string::String>> {
    prop::option::of("[a-z][a-z0-9-]{0,7}")
}

fn decimal() -> impl Strategy<Value = PreciseDecimal> {
    (-1_000_000i64..1_000_000, 0u32..4).prop_map(|(mantissa, scale)| {
        PreciseDecimal::from(rust_decimal::Decimal::new(mantissa, scale))
    })
}

fn leaf_extension() -> impl Strategy<Value = Extension> {
    let value = prop_oneof![
        text().prop_map(|s| ExtensionValue::String(Element::from(s))),
        any::<i32>().prop_map(|i| ExtensionValue::Integer(Element::from(i))),
        any::<bool>().prop_map(|b| ExtensionValue::Boolean(Element::from(b))),
        decimal().prop_map(|d| ExtensionValue::Decimal(Element::from(d))),
        "[a-z]{1,8}".prop_map(|c| ExtensionValue::Code(Element::from(c))),
    ];
    ("[a-z]{1,10}", value).prop_map(|(name, value)| Extension {
        url: format!("http://example.org/fhir/StructureDefinition/{name}"),
        value: Some(value),
        ..Default::default()
    })
}

fn extensions() -> impl Strategy<Value = Option<Vec<Extension>>> {
    prop::option::of(prop::collection::vec(leaf_extension(), 1..3))
}

/// A primitive element that is never empty.
fn element<V: std::fmt::Debug + Clone>(
    value: impl Strategy<Value = V>,
) -> impl Strategy<Value = Element<V, Extension>> {
    (prop::option::of(value), element_id(), extensions())
        .prop_filter("empty elements are not written", |(value, id, extension)| {
            value.is_some() || id.is_some() || extension.is_some()
        })
        .prop_map(|(value, id, extension)| Element {
            id,
            extension,
            value,
        })
}

fn human_name() -> impl Strategy<Value = HumanName> {
    (
        element(text()),
        prop::option::of(prop::collection::vec(element(text()), 1..4)),
        prop::option::of(element(prop_oneof![
            Just("official".to_string()),
            Just("usual".to_string()),
            Just("nickname".to_string()),
        ])),
    )
        .prop_map(|(family, given, r#use)| HumanName {
            family: Some(family),
            given,
            r#use,
            ..Default::default()
        })
}

fn patient() -> impl Strategy<Value = Patient> {
    let deceased = prop::option::of(prop_oneof![
        any::<bool>().prop_map(|b| PatientDeceased::Boolean(Element::from(b))),
        "20[0-2][0-9]-0[1-9]-1[0-9]".prop_map(|d| PatientDeceased::DateTime(Element::from(d))),
    ]);
    let multiple_birth = prop::option::of(prop_oneof![
        element(any::<bool>()).prop_map(PatientMultipleBirth::Boolean),
        element(1i32..5).prop_map(PatientMultipleBirth::Integer),
    ]);
    (
        element_id(),
        prop::option::of(element(any::<bool>())),
        prop::option::of(prop::collection::vec(human_name(), 1..3)),
        prop::option::of(element("19[0-9]{2}-0[1-9]-2[0-8]")),
        deceased,
        multiple_birth,
        extensions(),
    )
        .prop_map(
            |(id, active, name, birth_date, deceased, multiple_birth, extension)| Patient {
                id,
                active,
                name,
                birth_date,
                deceased,
                multiple_birth,
                extension,
                ..Default::default()
            },
        )
}

fn observation_value() -> impl Strategy<Value = ObservationValue> {
    prop_oneof![
        (decimal(), prop::option::of(element(text()))).prop_map(|(value, unit)| {
            ObservationValue::Quantity(Quantity {
                value: Some(Element::from(value)),
                unit,
                ..Default::default()
            })
        }),
        element(text()).prop_map(ObservationValue::String),
        element(any::<bool>()).prop_map(ObservationValue::Boolean),
        element(any::<i32>()).prop_map(ObservationValue::Integer),
        text().prop_map(|text| ObservationValue::CodeableConcept(CodeableConcept {
            text: Some(Element::from(text)),
            ..Default::default()
        })),
    ]
}

fn observation() -> impl Strategy<Value = Observation> {
    (
        element_id(),
        element(prop_oneof![Just("final".to_string()), Just("preliminary".to_string())]),
        prop::option::of(observation_value()),
        prop::option::of(prop::collection::vec(patient(), 1..3)),
    )
        .prop_map(|(id, status, value, contained)| Observation {
            id,
            status: Some(status),
            value,
            contained: contained.map(|patients| patients.into_iter().map(Resource::from).collect()),
            ..Default::default()
        })
}

fn resource() -> impl Strategy<Value = Resource> {
    prop_oneof![
        patient().prop_map(Resource::from),
        observation().prop_map(Resource::from),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_decode_inverts_encode(resource in resource()) {
        let codec = Codec::strict();
        let encoded = codec.encode(&resource);
        let decoded: Resource = codec.decode(&encoded).unwrap();
        prop_assert_eq!(&decoded, &resource);
    }

    #[test]
    fn prop_encoding_is_a_fixed_point(resource in resource()) {
        let codec = Codec::strict();
        let encoded = codec.encode(&resource);
        let decoded: Resource = codec.decode(&encoded).unwrap();
        let reencoded = codec.encode(&decoded);
        prop_assert!(json_differences(&encoded, &reencoded).is_empty());
    }

    #[test]
    fn prop_resource_type_leads(resource in resource()) {
        let encoded = Codec::default().encode(&resource);
        let first = encoded.as_object().and_then(|map| map.keys().next().cloned());
        prop_assert_eq!(first.as_deref(), Some("resourceType"));
    }

    #[test]
    fn prop_companion_arrays_align(name in human_name()) {
        let patient = Patient { name: Some(vec![name]), ..Default::default() };
        let encoded = Codec::default().encode(&patient);
        let name = &encoded["name"][0];
        if let Some(companions) = name.get("_given") {
            let values = name["given"].as_array().unwrap();
            prop_assert_eq!(companions.as_array().unwrap().len(), values.len());
        }
    }
}
