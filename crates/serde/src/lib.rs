//! # Meridian FHIR Serialization
//!
//! Entry points for reading and writing FHIR JSON with the
//! [`meridian_fhir`] model.
//!
//! - [`Codec`] carries [`DecodeOptions`] (strict or lenient handling of
//!   unrecognised members, maximum nesting depth) and exposes decode and
//!   encode over strings, byte slices and `serde_json` trees.
//! - [`json`] offers the same operations as free functions with default
//!   options.
//! - [`diff`] compares two JSON trees, which is how round-trip fidelity is
//!   checked.
//! - [`pretty`] renders an indented outline of any model value.
//!
//! ## Examples
//!
//! ```
//! use meridian_serde::{Codec, DecodeOptions};
//! use meridian_fhir::r4::{Resource, ResourceType};
//!
//! let codec = Codec::new(DecodeOptions::lenient().with_max_depth(32));
//! let resource: Resource = codec.decode_str(
//!     r#"{"resourceType": "Observation", "status": "final", "valueBoolean": true}"#,
//! )?;
//! assert_eq!(resource.resource_type(), ResourceType::Observation);
//! # Ok::<(), meridian_serde::SerdeError>(())
//! ```

pub mod codec;
pub mod diff;
pub mod error;
pub mod json;

pub use codec::Codec;
pub use diff::{Difference, json_differences};
pub use error::{Result, SerdeError};
pub use meridian_fhir::pretty::{self, pretty};
pub use meridian_serde_support::{DEFAULT_MAX_DEPTH, DecodeError, DecodeErrorKind, DecodeOptions};

pub use json::{
    from_json_slice, from_json_str, from_json_value, to_json_string, to_json_string_pretty,
    to_json_value, to_json_vec,
};
