use crate::FhirJson;
use crate::codec::JsonMap;
use crate::r4::*;

/// Resource for non-supported content.
#[derive(Debug, Clone, PartialEq, Default, FhirJson)]
#[fhir(resource = "Basic")]
pub struct Basic {
    #[fhir(string)]
    pub id: Option<std::string::String>,
    pub meta: Option<Meta>,
    #[fhir(primitive)]
    pub implicit_rules: Option<Uri>,
    #[fhir(primitive)]
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Option<Vec<Resource>>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub identifier: Option<Vec<Identifier>>,
    pub code: Option<CodeableConcept>,
    pub subject: Option<Reference>,
    #[fhir(primitive)]
    pub created: Option<Date>,
    pub author: Option<Reference>,
    #[fhir(unknown)]
    pub unknown_fields: JsonMap,
}
