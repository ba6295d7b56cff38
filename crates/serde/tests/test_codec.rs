use meridian_fhir::r4::*;
use meridian_fhir::{Element, PreciseDecimal};
use meridian_serde::{
    Codec, DecodeErrorKind, DecodeOptions, SerdeError, from_json_slice, from_json_str,
    from_json_value, pretty, to_json_string, to_json_string_pretty, to_json_value, to_json_vec,
};
use rust_decimal_macros::dec;
use serde_json::json;

#[test]
fn test_free_functions_round_trip() {
    let input = r#"{"resourceType":"Patient","id":"p1","active":true,"gender":"other"}"#;
    let patient: Patient = from_json_str(input).unwrap();
    assert_eq!(patient.id.as_deref(), Some("p1"));
    assert_eq!(to_json_string(&patient).unwrap(), input);

    let from_bytes: Patient = from_json_slice(input.as_bytes()).unwrap();
    assert_eq!(from_bytes, patient);
    assert_eq!(to_json_vec(&patient).unwrap(), input.as_bytes());

    let value = to_json_value(&patient);
    let from_value: Patient = from_json_value(value).unwrap();
    assert_eq!(from_value, patient);

    let indented = to_json_string_pretty(&patient).unwrap();
    assert!(indented.contains("\n  \"id\": \"p1\""));
}

#[test]
fn test_decimal_text_survives() {
    let input = r#"{"resourceType":"Observation","valueQuantity":{"value":1.50,"unit":"mg"}}"#;
    let observation: Observation = from_json_str(input).unwrap();

    let Some(ObservationValue::Quantity(quantity)) = &observation.value else {
        panic!("expected valueQuantity");
    };
    let value = quantity
        .value
        .as_ref()
        .and_then(|v| v.value.as_ref())
        .unwrap();
    assert_eq!(value.original_string(), "1.50");
    assert_eq!(value.value(), Some(dec!(1.5)));
    assert_eq!(value, &PreciseDecimal::from(dec!(1.5)));
    assert_eq!(to_json_string(&observation).unwrap(), input);
}

#[test]
fn test_not_a_resource() {
    let err = from_json_str::<Resource>(r#"{"resourceType": "NotAResource", "id": "x"}"#)
        .unwrap_err();
    let SerdeError::Decode(decode) = &err else {
        panic!("expected a decode error, got {err:?}");
    };
    assert_eq!(
        decode.kind,
        DecodeErrorKind::UnknownResourceType("NotAResource".to_string())
    );
    assert_eq!(err.path(), Some("/resourceType"));
    assert!(err.to_string().contains("NotAResource"));
}

#[test]
fn test_decode_resource_dispatches_bundle_entries() {
    let value = json!({
        "resourceType": "Bundle",
        "type": "collection",
        "entry": [
            {"resource": {"resourceType": "Patient", "id": "a"}},
            {"resource": {"resourceType": "Observation", "id": "b", "valueBoolean": true}},
            {"fullUrl": "urn:uuid:c"}
        ]
    });
    let resource = Codec::strict().decode_resource(&value).unwrap();

    let bundle = resource.downcast_ref::<Bundle>().unwrap();
    let kinds: Vec<ResourceType> = bundle.resources().map(Resource::resource_type).collect();
    assert_eq!(kinds, [ResourceType::Patient, ResourceType::Observation]);
    assert_eq!(Codec::strict().encode(&resource), value);
}

#[test]
fn test_error_inside_bundle_is_located() {
    let value = json!({
        "resourceType": "Bundle",
        "entry": [
            {"resource": {"resourceType": "Patient"}},
            {"resource": {"resourceType": "Observation", "valueFoo": 1}}
        ]
    });
    let err = Codec::lenient().decode_resource(&value).unwrap_err();
    assert_eq!(err.path(), Some("/entry/1/resource/valueFoo"));
}

#[test]
fn test_constructed_tree_encodes_like_decoded_tree() {
    let patient = Patient {
        id: Some("built".to_string()),
        active: Some(Element::from(true)),
        name: Some(vec![HumanName {
            family: Some(Element::from("Chalmers".to_string())),
            given: Some(vec![
                Element::from("Peter".to_string()),
                Element::<std::string::String, Extension>::default().with_id("g2"),
            ]),
            ..Default::default()
        }]),
        multiple_birth: Some(PatientMultipleBirth::Integer(Element::from(2))),
        ..Default::default()
    };

    let encoded = to_json_value(&patient);
    assert_eq!(
        encoded,
        json!({
            "resourceType": "Patient",
            "id": "built",
            "active": true,
            "name": [{
                "family": "Chalmers",
                "given": ["Peter", null],
                "_given": [null, {"id": "g2"}]
            }],
            "multipleBirthInteger": 2
        })
    );
    let decoded: Patient = Codec::strict().decode(&encoded).unwrap();
    assert_eq!(decoded, patient);
}

#[test]
fn test_pretty_outline() {
    let patient: Patient =
        from_json_str(r#"{"resourceType":"Patient","id":"p1","name":[{"family":"Chalmers"}]}"#)
            .unwrap();
    assert_eq!(
        pretty(&patient),
        "Patient\n  id: \"p1\"\n  name:\n    - family: \"Chalmers\"\n"
    );
    let resource = Resource::from(patient);
    assert_eq!(resource.to_string(), pretty(&resource));
}

#[test]
fn test_codec_respects_max_depth() {
    let codec = Codec::new(DecodeOptions::strict().with_max_depth(2));
    let err = codec
        .decode_str::<Resource>(
            r#"{"resourceType":"Basic","extension":[{"url":"a","extension":[{"url":"b","valueString":"deep"}]}]}"#,
        )
        .unwrap_err();
    assert!(matches!(
        err.as_decode().map(|e| &e.kind),
        Some(DecodeErrorKind::DepthExceeded { max: 2 })
    ));
    assert_eq!(err.path(), Some("/extension/0/extension/0"));
}

/// A Patient wrapping `levels - 1` further Patients through `contained`.
fn contained_chain_text(levels: usize) -> std::string::String {
    let mut text = format!(r#"{{"resourceType":"Patient","id":"p{}"}}"#, levels - 1);
    for level in (0..levels - 1).rev() {
        text = format!(r#"{{"resourceType":"Patient","id":"p{level}","contained":[{text}]}}"#);
    }
    text
}

fn on_large_stack(f: impl FnOnce() + Send + 'static) {
    std::thread::Builder::new()
        .stack_size(16 * 1024 * 1024)
        .spawn(f)
        .unwrap()
        .join()
        .unwrap();
}

#[test]
fn test_text_chains_honour_default_depth() {
    on_large_stack(|| {
        let codec = Codec::default();
        let resource: Resource = codec.decode_str(&contained_chain_text(64)).unwrap();
        assert_eq!(resource.id(), Some("p0"));

        let err = codec
            .decode_str::<Resource>(&contained_chain_text(65))
            .unwrap_err();
        let decode = err.as_decode().unwrap();
        assert_eq!(decode.kind, DecodeErrorKind::DepthExceeded { max: 64 });
        assert_eq!(decode.path, "/contained/0".repeat(64));

        let bytes = contained_chain_text(65).into_bytes();
        let err = codec.decode_slice::<Resource>(&bytes).unwrap_err();
        assert_eq!(err.path(), Some("/contained/0".repeat(64).as_str()));
    });
}

#[test]
fn test_text_chains_honour_raised_depth() {
    on_large_stack(|| {
        let codec = Codec::new(DecodeOptions::default().with_max_depth(100));
        let input = contained_chain_text(100);
        let resource: Resource = codec.decode_str(&input).unwrap();
        assert_eq!(codec.encode_string(&resource).unwrap(), input);

        let err = codec
            .decode_str::<Resource>(&contained_chain_text(101))
            .unwrap_err();
        let decode = err.as_decode().unwrap();
        assert_eq!(decode.kind, DecodeErrorKind::DepthExceeded { max: 100 });
        assert_eq!(decode.path, "/contained/0".repeat(100));
    });
}

#[test]
fn test_unbounded_array_nesting_is_rejected_before_parsing() {
    let input = format!(
        r#"{{"resourceType":"Basic","extra":{}1{}}}"#,
        "[".repeat(10_000),
        "]".repeat(10_000)
    );
    let err = Codec::lenient().decode_str::<Resource>(&input).unwrap_err();
    assert!(matches!(
        err.as_decode().map(|e| &e.kind),
        Some(DecodeErrorKind::DepthExceeded { max: 64 })
    ));
}
