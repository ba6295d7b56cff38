use meridian_fhir::FhirJson;
use meridian_fhir::codec::{DecodeErrorKind, DecodeOptions};
use meridian_fhir::r4::*;
use serde_json::json;

#[test]
fn test_modifier_extension_with_unknown_url_survives() {
    let value = json!({
        "resourceType": "Patient",
        "id": "mod-ext",
        "modifierExtension": [{
            "url": "http://example.org/fhir/StructureDefinition/not-registered-anywhere",
            "valueCodeableConcept": {"coding": [{"system": "http://example.org", "code": "x"}]}
        }],
        "active": true
    });

    for options in [DecodeOptions::strict(), DecodeOptions::lenient()] {
        let patient = Patient::from_json_with(&value, &options).unwrap();
        let modifier = &patient.modifier_extension.as_ref().unwrap()[0];
        assert_eq!(
            modifier.url,
            "http://example.org/fhir/StructureDefinition/not-registered-anywhere"
        );
        assert!(matches!(
            modifier.value,
            Some(ExtensionValue::CodeableConcept(_))
        ));
        assert_eq!(patient.encode_json(), value);
    }
}

#[test]
fn test_nested_extensions_round_trip() {
    let value = json!({
        "resourceType": "Patient",
        "extension": [{
            "url": "http://hl7.org/fhir/us/core/StructureDefinition/us-core-race",
            "extension": [
                {
                    "url": "ombCategory",
                    "valueCoding": {"system": "urn:oid:2.16.840.1.113883.6.238", "code": "2106-3", "display": "White"}
                },
                {"url": "text", "valueString": "White"}
            ]
        }]
    });
    let patient = Patient::from_json_with(&value, &DecodeOptions::strict()).unwrap();

    let race = &patient.extension.as_ref().unwrap()[0];
    assert!(race.value.is_none());
    let children = race.extension.as_ref().unwrap();
    assert_eq!(children.len(), 2);
    assert!(matches!(children[0].value, Some(ExtensionValue::Coding(_))));
    assert_eq!(patient.encode_json(), value);
}

#[test]
fn test_extension_url_is_required() {
    let value = json!({"resourceType": "Patient", "extension": [{"valueString": "orphan"}]});
    let err = Patient::from_json_with(&value, &DecodeOptions::lenient()).unwrap_err();

    assert_eq!(err.kind, DecodeErrorKind::MissingField("url"));
    assert_eq!(err.path, "/extension/0");
}

#[test]
fn test_unmodelled_open_type_is_unknown_variant() {
    let value = json!({
        "resourceType": "Basic",
        "extension": [{"url": "http://example.org/dose", "valueDosage": {"text": "once"}}]
    });
    let err = Basic::from_json_with(&value, &DecodeOptions::lenient()).unwrap_err();

    assert_eq!(
        err.kind,
        DecodeErrorKind::UnknownVariant {
            stem: "value",
            type_name: "Dosage".to_string()
        }
    );
    assert_eq!(err.path, "/extension/0/valueDosage");
}

#[test]
fn test_strict_mode_rejects_unknown_member_with_path() {
    let value = json!({
        "resourceType": "Patient",
        "name": [{"family": "Chalmers", "nickname": "Pete"}]
    });
    let err = Patient::from_json_with(&value, &DecodeOptions::strict()).unwrap_err();

    assert_eq!(err.kind, DecodeErrorKind::UnknownField("nickname".to_string()));
    assert_eq!(err.path, "/name/0/nickname");
}

#[test]
fn test_lenient_mode_preserves_unknown_members() {
    let value = json!({
        "resourceType": "Patient",
        "id": "lenient",
        "futureField": {"nested": [1, 2]},
        "name": [{"family": "Chalmers", "nickname": "Pete"}]
    });
    let patient = Patient::from_json_with(&value, &DecodeOptions::lenient()).unwrap();

    assert_eq!(
        patient.unknown_fields.get("futureField"),
        Some(&json!({"nested": [1, 2]}))
    );
    let name = &patient.name.as_ref().unwrap()[0];
    assert_eq!(name.unknown_fields.get("nickname"), Some(&json!("Pete")));

    let encoded = patient.encode_json();
    assert_eq!(encoded, value);
    // Unknown members follow the declared ones.
    let keys: Vec<&str> = encoded
        .as_object()
        .unwrap()
        .keys()
        .map(std::string::String::as_str)
        .collect();
    assert_eq!(keys, ["resourceType", "id", "name", "futureField"]);
}

#[test]
fn test_stray_companion_member_is_dropped_when_lenient() {
    let value = json!({
        "resourceType": "Patient",
        "gender": "male",
        "_gender": {"id": "g", "comment": "stray"}
    });

    let patient = Patient::from_json_with(&value, &DecodeOptions::lenient()).unwrap();
    assert_eq!(patient.gender.as_ref().unwrap().id.as_deref(), Some("g"));
    assert_eq!(
        patient.encode_json(),
        json!({"resourceType": "Patient", "gender": "male", "_gender": {"id": "g"}})
    );

    let err = Patient::from_json_with(&value, &DecodeOptions::strict()).unwrap_err();
    assert_eq!(err.kind, DecodeErrorKind::UnknownField("comment".to_string()));
    assert_eq!(err.path, "/_gender/comment");
}

#[test]
fn test_resource_type_mismatch_on_direct_decode() {
    let value = json!({"resourceType": "Observation", "status": "final"});
    let err = Patient::from_json_with(&value, &DecodeOptions::lenient()).unwrap_err();

    assert_eq!(
        err.kind,
        DecodeErrorKind::ResourceTypeMismatch {
            expected: "Patient",
            found: "Observation".to_string()
        }
    );
    assert_eq!(err.path, "/resourceType");

    let err = Patient::from_json_with(&json!({"id": "x"}), &DecodeOptions::lenient()).unwrap_err();
    assert_eq!(err.kind, DecodeErrorKind::MissingResourceType);
}

#[test]
fn test_narrative_and_meta_pass_through() {
    let value = json!({
        "resourceType": "Organization",
        "meta": {
            "versionId": "3",
            "lastUpdated": "2024-05-01T10:00:00Z",
            "profile": ["http://hl7.org/fhir/StructureDefinition/Organization"],
            "tag": [{"system": "http://example.org/tags", "code": "demo"}]
        },
        "text": {
            "status": "generated",
            "div": "<div xmlns=\"http://www.w3.org/1999/xhtml\">Burgers University Medical Center</div>"
        },
        "name": "Burgers University Medical Center",
        "alias": ["BUMC"]
    });
    let organization = Organization::from_json_with(&value, &DecodeOptions::strict()).unwrap();

    let meta = organization.meta.as_ref().unwrap();
    assert_eq!(meta.version_id.as_ref().and_then(|v| v.value.as_deref()), Some("3"));
    assert_eq!(organization.encode_json(), value);
}
