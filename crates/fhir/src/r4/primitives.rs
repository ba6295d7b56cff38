//! R4 primitive types.
//!
//! Every primitive is an [`Element`] over its Rust value type. Types that only
//! differ in their lexical rules (`code`, `uri`, `dateTime`) share the `String`
//! representation; the codec does not validate their formats.

use super::Extension;
use crate::element::Element;
use crate::precise_decimal::PreciseDecimal;

pub type Boolean = Element<bool, Extension>;
pub type Integer = Element<i32, Extension>;
pub type UnsignedInt = Element<u32, Extension>;
/// Positive integers share `u32`; zero is not rejected.
pub type PositiveInt = Element<u32, Extension>;
pub type Decimal = Element<PreciseDecimal, Extension>;

pub type String = Element<std::string::String, Extension>;
pub type Uri = Element<std::string::String, Extension>;
pub type Url = Element<std::string::String, Extension>;
pub type Canonical = Element<std::string::String, Extension>;
pub type Code = Element<std::string::String, Extension>;
pub type Id = Element<std::string::String, Extension>;
pub type Oid = Element<std::string::String, Extension>;
pub type Uuid = Element<std::string::String, Extension>;
pub type Markdown = Element<std::string::String, Extension>;
pub type Base64Binary = Element<std::string::String, Extension>;
pub type Date = Element<std::string::String, Extension>;
pub type DateTime = Element<std::string::String, Extension>;
pub type Instant = Element<std::string::String, Extension>;
pub type Time = Element<std::string::String, Extension>;
pub type Xhtml = Element<std::string::String, Extension>;
