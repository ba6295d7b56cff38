//! # Meridian FHIR Model
//!
//! Strongly-typed FHIR R4 model types and the JSON codec that moves them in
//! and out of `serde_json` trees.
//!
//! ## Layout
//!
//! - [`Element`] and [`PreciseDecimal`]: the primitive building blocks.
//! - [`codec`]: the [`FhirJson`] and [`ChoiceType`] traits plus the object
//!   reader and writer that implement FHIR's JSON conventions.
//! - [`r4`]: the R4 catalogue: data types, the open `value[x]` type set,
//!   resources and the polymorphic [`r4::Resource`] with its registry.
//! - [`pretty`]: an indented outline of any model value, used for `Display`.
//!
//! ## Example
//!
//! ```rust
//! use meridian_fhir::FhirJson;
//! use meridian_fhir::codec::DecodeOptions;
//! use meridian_fhir::r4::Resource;
//! use serde_json::json;
//!
//! let value = json!({"resourceType": "Patient", "id": "example", "active": true});
//! let resource = Resource::from_json_with(&value, &DecodeOptions::default()).unwrap();
//! assert_eq!(resource.id(), Some("example"));
//! assert_eq!(resource.encode_json(), value);
//! ```

// Lets the derive macros name `::meridian_fhir` from inside this crate.
extern crate self as meridian_fhir;

pub mod codec;
mod element;
mod precise_decimal;
pub mod pretty;
#[cfg(feature = "R4")]
pub mod r4;

pub use codec::{ChoiceType, FhirJson};
pub use element::Element;
pub use meridian_fhir_macro::{ChoiceType, FhirJson};
pub use precise_decimal::PreciseDecimal;

#[doc(hidden)]
pub mod __private {
    pub use serde;
}
