use crate::FhirJson;
use crate::codec::JsonMap;
use crate::r4::*;

/// A person with a formal responsibility in the provisioning of healthcare or
/// related services.
#[derive(Debug, Clone, PartialEq, Default, FhirJson)]
#[fhir(resource = "Practitioner")]
pub struct Practitioner {
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
    pub name: Option<Vec<HumanName>>,
    pub telecom: Option<Vec<ContactPoint>>,
    pub address: Option<Vec<Address>>,
    #[fhir(primitive)]
    pub gender: Option<Code>,
    #[fhir(primitive)]
    pub birth_date: Option<Date>,
    pub photo: Option<Vec<Attachment>>,
    pub qualification: Option<Vec<PractitionerQualification>>,
    pub communication: Option<Vec<CodeableConcept>>,
    #[fhir(unknown)]
    pub unknown_fields: JsonMap,
}

/// Certification, licenses, or training pertaining to the provision of care.
#[derive(Debug, Clone, PartialEq, Default, FhirJson)]
pub struct PractitionerQualification {
    #[fhir(string)]
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub identifier: Option<Vec<Identifier>>,
    pub code: Option<CodeableConcept>,
    pub period: Option<Period>,
    pub issuer: Option<Reference>,
    #[fhir(unknown)]
    pub unknown_fields: JsonMap,
}
