//! FHIR R4 model types.
//!
//! The catalogue is flat: every primitive alias, data type, resource and
//! choice enum is reachable as `meridian_fhir::r4::Name`.

mod datatypes;
mod extension;
mod metadata;
mod primitives;
mod resource;
mod resources;

pub use datatypes::*;
pub use extension::*;
pub use metadata::*;
pub use primitives::*;
pub use resource::{Resource, ResourceDecoder, ResourceType, registry};
pub use resources::*;
