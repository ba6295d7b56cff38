//! Runtime support shared by the FHIR JSON codec.
//!
//! This crate holds the pieces of the codec that do not depend on the model:
//! the per-call [`DecodeContext`], the error kinds, the aligner for primitive
//! arrays and their `_` companions, choice-key parsing and the nesting check
//! run over raw text before it is parsed.

pub mod align;
pub mod choice;
pub mod context;
pub mod error;
pub mod nesting;

pub use align::{AlignedSlot, PrimitiveSlots, align_primitive_array};
pub use choice::{choice_key, choice_suffix, suffix_matches, type_suffix};
pub use context::{DEFAULT_MAX_DEPTH, DecodeContext, DecodeOptions};
pub use error::{DecodeError, DecodeErrorKind, DecodeResult, JsonKind};
pub use nesting::check_nesting;
