//! The configurable codec.
//!
//! [`Codec`] owns a set of [`DecodeOptions`] and runs every decode call in a
//! fresh context, so one instance can be shared freely between threads.

use meridian_fhir::FhirJson;
#[cfg(feature = "R4")]
use meridian_fhir::r4::Resource;
use meridian_serde_support::{DecodeOptions, check_nesting};
use serde::Deserialize;
use serde_json::Value;

use crate::error::Result;

/// Decodes and encodes FHIR JSON with fixed options.
///
/// # Examples
///
/// ```
/// use meridian_serde::Codec;
/// use meridian_fhir::r4::Patient;
///
/// let codec = Codec::strict();
/// let patient: Patient = codec.decode_str(r#"{"resourceType": "Patient", "id": "a"}"#)?;
/// assert_eq!(codec.encode_string(&patient)?, r#"{"resourceType":"Patient","id":"a"}"#);
/// # Ok::<(), meridian_serde::SerdeError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Codec {
    options: DecodeOptions,
}

impl Codec {
    pub fn new(options: DecodeOptions) -> Self {
        Self { options }
    }

    /// A codec that rejects unrecognised members.
    pub fn strict() -> Self {
        Self::new(DecodeOptions::strict())
    }

    /// A codec that preserves unrecognised members for re-encoding.
    pub fn lenient() -> Self {
        Self::new(DecodeOptions::lenient())
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Decodes a parsed JSON tree.
    pub fn decode<T: FhirJson>(&self, value: &Value) -> Result<T> {
        tracing::debug!(
            target_type = std::any::type_name::<T>(),
            strict = self.options.strict,
            max_depth = self.options.max_depth,
            "decoding FHIR JSON"
        );
        Ok(T::from_json_with(value, &self.options)?)
    }

    pub fn decode_str<T: FhirJson>(&self, s: &str) -> Result<T> {
        self.decode(&self.parse_str(s)?)
    }

    pub fn decode_slice<T: FhirJson>(&self, v: &[u8]) -> Result<T> {
        self.decode(&self.parse_slice(v)?)
    }

    /// Parses JSON text into a tree, bounding its nesting by `max_depth`.
    ///
    /// Text nested deeper than the options allow fails with `DepthExceeded`
    /// at the same path decoding would report, whatever the depth.
    pub fn parse_str(&self, s: &str) -> Result<Value> {
        check_nesting(s.as_bytes(), &self.options)?;
        let mut de = serde_json::Deserializer::from_str(s);
        de.disable_recursion_limit();
        let value = Value::deserialize(&mut de)?;
        de.end()?;
        Ok(value)
    }

    pub fn parse_slice(&self, v: &[u8]) -> Result<Value> {
        check_nesting(v, &self.options)?;
        let mut de = serde_json::Deserializer::from_slice(v);
        de.disable_recursion_limit();
        let value = Value::deserialize(&mut de)?;
        de.end()?;
        Ok(value)
    }

    /// Decodes a resource whose type is only known from its `resourceType`.
    #[cfg(feature = "R4")]
    pub fn decode_resource(&self, value: &Value) -> Result<Resource> {
        self.decode(value)
    }

    pub fn encode<T: FhirJson>(&self, value: &T) -> Value {
        value.encode_json()
    }

    pub fn encode_string<T: FhirJson>(&self, value: &T) -> Result<String> {
        Ok(serde_json::to_string(&self.encode(value))?)
    }

    pub fn encode_string_pretty<T: FhirJson>(&self, value: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.encode(value))?)
    }

    pub fn encode_vec<T: FhirJson>(&self, value: &T) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(&self.encode(value))?)
    }
}

#[cfg(all(test, feature = "R4"))]
mod tests {
    use super::*;
    use crate::SerdeError;
    use meridian_serde_support::DecodeErrorKind;

    #[test]
    fn syntax_errors_are_json_errors() {
        let err = Codec::default()
            .decode_str::<Resource>("{not json")
            .unwrap_err();
        assert!(matches!(err, SerdeError::Json(_)));
        assert_eq!(err.path(), None);
    }

    #[test]
    fn decode_errors_keep_their_path() {
        let err = Codec::strict()
            .decode_str::<Resource>(r#"{"resourceType": "Patient", "active": "yes"}"#)
            .unwrap_err();
        assert_eq!(err.path(), Some("/active"));
        assert!(matches!(
            err.as_decode().map(|e| &e.kind),
            Some(DecodeErrorKind::TypeMismatch { expected: "boolean", .. })
        ));
    }

    #[test]
    fn options_are_applied() {
        let input = r#"{"resourceType": "Basic", "extra": 1}"#;
        assert!(Codec::strict().decode_str::<Resource>(input).is_err());
        let lenient: Resource = Codec::lenient().decode_str(input).unwrap();
        assert_eq!(
            Codec::lenient().encode_string(&lenient).unwrap(),
            r#"{"resourceType":"Basic","extra":1}"#
        );

        let shallow = Codec::new(DecodeOptions::default().with_max_depth(1));
        let err = shallow
            .decode_str::<Resource>(r#"{"resourceType": "Basic", "code": {"text": "x"}}"#)
            .unwrap_err();
        assert_eq!(err.path(), Some("/code"));
    }

    #[test]
    fn parse_reports_depth_before_building_the_tree() {
        let codec = Codec::new(DecodeOptions::default().with_max_depth(2));
        let err = codec
            .parse_str(r#"{"resourceType": "Basic", "extra": {"a": {"b": 1}}}"#)
            .unwrap_err();
        assert_eq!(err.path(), Some("/extra/a"));

        let value = codec.parse_slice(br#"{"extra": {"a": [1, 2]}}"#).unwrap();
        assert_eq!(value["extra"]["a"][1], 2);
        assert!(matches!(codec.parse_str("{} {}"), Err(SerdeError::Json(_))));
    }
}
