//! The R4 resources known to this crate.
//!
//! Each module holds one resource with its backbone elements and choice
//! types. All of them are registered with [`super::Resource`].

mod basic;
mod binary;
mod bundle;
mod condition;
mod medication_request;
mod observation;
mod operation_outcome;
mod organization;
mod parameters;
mod patient;
mod practitioner;
mod questionnaire_response;

pub use basic::*;
pub use binary::*;
pub use bundle::*;
pub use condition::*;
pub use medication_request::*;
pub use observation::*;
pub use operation_outcome::*;
pub use organization::*;
pub use parameters::*;
pub use patient::*;
pub use practitioner::*;
pub use questionnaire_response::*;
