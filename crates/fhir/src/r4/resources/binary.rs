use crate::FhirJson;
use crate::codec::JsonMap;
use crate::r4::*;

/// Pure binary content defined by a format other than FHIR.
#[derive(Debug, Clone, PartialEq, Default, FhirJson)]
#[fhir(resource = "Binary")]
pub struct Binary {
    #[fhir(string)]
    pub id: Option<std::string::String>,
    pub meta: Option<Meta>,
    #[fhir(primitive)]
    pub implicit_rules: Option<Uri>,
    #[fhir(primitive)]
    pub language: Option<Code>,
    #[fhir(primitive)]
    pub content_type: Code,
    pub security_context: Option<Reference>,
    #[fhir(primitive)]
    pub data: Option<Base64Binary>,
    #[fhir(unknown)]
    pub unknown_fields: JsonMap,
}
