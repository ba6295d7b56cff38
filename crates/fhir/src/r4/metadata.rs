//! R4 metadata and special-purpose data types.

use crate::codec::JsonMap;
use crate::{ChoiceType, FhirJson};

use super::Extension;
use super::datatypes::*;
use super::primitives::*;

/// Metadata about a resource.
#[derive(Debug, Clone, PartialEq, Default, FhirJson)]
pub struct Meta {
    #[fhir(string)]
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir(primitive)]
    pub version_id: Option<Id>,
    #[fhir(primitive)]
    pub last_updated: Option<Instant>,
    #[fhir(primitive)]
    pub source: Option<Uri>,
    #[fhir(primitive)]
    pub profile: Option<Vec<Canonical>>,
    pub security: Option<Vec<Coding>>,
    pub tag: Option<Vec<Coding>>,
    #[fhir(unknown)]
    pub unknown_fields: JsonMap,
}

/// Human-readable summary of the resource (essential clinical and business information).
///
/// `div` is kept as the XHTML text it arrived with.
#[derive(Debug, Clone, PartialEq, Default, FhirJson)]
pub struct Narrative {
    #[fhir(string)]
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    /// generated | extensions | additional | empty
    #[fhir(primitive)]
    pub status: Option<Code>,
    #[fhir(primitive)]
    pub div: Option<Xhtml>,
    #[fhir(unknown)]
    pub unknown_fields: JsonMap,
}

#[derive(Debug, Clone, PartialEq, Default, FhirJson)]
pub struct ContactDetail {
    #[fhir(string)]
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir(primitive)]
    pub name: Option<String>,
    pub telecom: Option<Vec<ContactPoint>>,
    #[fhir(unknown)]
    pub unknown_fields: JsonMap,
}

#[derive(Debug, Clone, PartialEq, Default, FhirJson)]
pub struct Contributor {
    #[fhir(string)]
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    /// author | editor | reviewer | endorser
    #[fhir(primitive)]
    pub r#type: Option<Code>,
    #[fhir(primitive)]
    pub name: Option<String>,
    pub contact: Option<Vec<ContactDetail>>,
    #[fhir(unknown)]
    pub unknown_fields: JsonMap,
}

/// An expression that can be used to generate a value.
#[derive(Debug, Clone, PartialEq, Default, FhirJson)]
pub struct Expression {
    #[fhir(string)]
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir(primitive)]
    pub description: Option<String>,
    #[fhir(primitive)]
    pub name: Option<Id>,
    #[fhir(primitive)]
    pub language: Option<Code>,
    #[fhir(primitive)]
    pub expression: Option<String>,
    #[fhir(primitive)]
    pub reference: Option<Uri>,
    #[fhir(unknown)]
    pub unknown_fields: JsonMap,
}

#[derive(Debug, Clone, PartialEq, Default, FhirJson)]
pub struct ParameterDefinition {
    #[fhir(string)]
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir(primitive)]
    pub name: Option<Code>,
    #[fhir(primitive)]
    pub r#use: Option<Code>,
    #[fhir(primitive)]
    pub min: Option<Integer>,
    #[fhir(primitive)]
    pub max: Option<String>,
    #[fhir(primitive)]
    pub documentation: Option<String>,
    #[fhir(primitive)]
    pub r#type: Option<Code>,
    #[fhir(primitive)]
    pub profile: Option<Canonical>,
    #[fhir(unknown)]
    pub unknown_fields: JsonMap,
}

/// Related artifacts for a knowledge resource.
#[derive(Debug, Clone, PartialEq, Default, FhirJson)]
pub struct RelatedArtifact {
    #[fhir(string)]
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir(primitive)]
    pub r#type: Option<Code>,
    #[fhir(primitive)]
    pub label: Option<String>,
    #[fhir(primitive)]
    pub display: Option<String>,
    #[fhir(primitive)]
    pub citation: Option<Markdown>,
    #[fhir(primitive)]
    pub url: Option<Url>,
    pub document: Option<Attachment>,
    #[fhir(primitive)]
    pub resource: Option<Canonical>,
    #[fhir(unknown)]
    pub unknown_fields: JsonMap,
}

/// Describes the context of use for a conformance or knowledge resource.
///
/// `value[x]` is mandatory, so there is no `Default`.
#[derive(Debug, Clone, PartialEq, FhirJson)]
pub struct UsageContext {
    #[fhir(string)]
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub code: Option<Coding>,
    #[fhir(choice)]
    pub value: UsageContextValue,
    #[fhir(unknown)]
    pub unknown_fields: JsonMap,
}

#[derive(Debug, Clone, PartialEq, ChoiceType)]
pub enum UsageContextValue {
    CodeableConcept(CodeableConcept),
    Quantity(Quantity),
    Range(Range),
    Reference(Reference),
}
