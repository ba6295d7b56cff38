use crate::FhirJson;
use crate::codec::JsonMap;
use crate::r4::*;

/// A grouping of people or organizations with a common purpose.
#[derive(Debug, Clone, PartialEq, Default, FhirJson)]
#[fhir(resource = "Organization")]
pub struct Organization {
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
    #[fhir(primitive)]
    pub active: Option<Boolean>,
    pub r#type: Option<Vec<CodeableConcept>>,
    #[fhir(primitive)]
    pub name: Option<String>,
    #[fhir(primitive)]
    pub alias: Option<Vec<String>>,
    pub telecom: Option<Vec<ContactPoint>>,
    pub address: Option<Vec<Address>>,
    pub part_of: Option<Reference>,
    pub contact: Option<Vec<OrganizationContact>>,
    pub endpoint: Option<Vec<Reference>>,
    #[fhir(unknown)]
    pub unknown_fields: JsonMap,
}

#[derive(Debug, Clone, PartialEq, Default, FhirJson)]
pub struct OrganizationContact {
    #[fhir(string)]
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub purpose: Option<CodeableConcept>,
    pub name: Option<HumanName>,
    pub telecom: Option<Vec<ContactPoint>>,
    pub address: Option<Address>,
    #[fhir(unknown)]
    pub unknown_fields: JsonMap,
}
