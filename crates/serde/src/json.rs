//! JSON entry points with default (lenient) options.
//!
//! These are thin wrappers over [`Codec::default`] for callers that do not
//! need to configure decoding.

use meridian_fhir::FhirJson;
use serde_json::Value;

use crate::codec::Codec;
use crate::error::Result;

/// Decode a FHIR value from a JSON string.
///
/// # Examples
///
/// ```
/// use meridian_serde::json::from_json_str;
/// use meridian_fhir::r4::Patient;
///
/// let json = r#"{"resourceType": "Patient", "id": "example"}"#;
/// let patient: Patient = from_json_str(json)?;
/// assert_eq!(patient.id.as_deref(), Some("example"));
/// # Ok::<(), meridian_serde::SerdeError>(())
/// ```
pub fn from_json_str<T: FhirJson>(s: &str) -> Result<T> {
    Codec::default().decode_str(s)
}

/// Decode a FHIR value from a JSON byte slice.
pub fn from_json_slice<T: FhirJson>(v: &[u8]) -> Result<T> {
    Codec::default().decode_slice(v)
}

/// Decode a FHIR value from a `serde_json::Value`.
///
/// # Examples
///
/// ```
/// use meridian_serde::json::from_json_value;
/// use meridian_fhir::r4::Resource;
/// use serde_json::json;
///
/// let resource: Resource = from_json_value(json!({"resourceType": "Basic", "id": "b"}))?;
/// assert_eq!(resource.id(), Some("b"));
/// # Ok::<(), meridian_serde::SerdeError>(())
/// ```
pub fn from_json_value<T: FhirJson>(value: Value) -> Result<T> {
    Codec::default().decode(&value)
}

/// Encode a FHIR value to a `serde_json::Value`.
pub fn to_json_value<T: FhirJson>(value: &T) -> Value {
    value.encode_json()
}

/// Encode a FHIR value to a compact JSON string.
///
/// # Examples
///
/// ```
/// use meridian_serde::json::to_json_string;
/// use meridian_fhir::r4::Patient;
///
/// let patient = Patient::default();
/// assert_eq!(to_json_string(&patient)?, r#"{"resourceType":"Patient"}"#);
/// # Ok::<(), meridian_serde::SerdeError>(())
/// ```
pub fn to_json_string<T: FhirJson>(value: &T) -> Result<String> {
    Codec::default().encode_string(value)
}

/// Encode a FHIR value to an indented JSON string.
pub fn to_json_string_pretty<T: FhirJson>(value: &T) -> Result<String> {
    Codec::default().encode_string_pretty(value)
}

/// Encode a FHIR value to a JSON byte vector.
pub fn to_json_vec<T: FhirJson>(value: &T) -> Result<Vec<u8>> {
    Codec::default().encode_vec(value)
}
