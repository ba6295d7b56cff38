use crate::codec::JsonMap;
use crate::r4::*;
use crate::{ChoiceType, FhirJson};

/// Information about an individual or animal receiving care or other
/// health-related services.
#[derive(Debug, Clone, PartialEq, Default, FhirJson)]
#[fhir(resource = "Patient")]
pub struct Patient {
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
    /// male | female | other | unknown
    #[fhir(primitive)]
    pub gender: Option<Code>,
    #[fhir(primitive)]
    pub birth_date: Option<Date>,
    #[fhir(choice)]
    pub deceased: Option<PatientDeceased>,
    pub address: Option<Vec<Address>>,
    pub marital_status: Option<CodeableConcept>,
    #[fhir(choice)]
    pub multiple_birth: Option<PatientMultipleBirth>,
    pub photo: Option<Vec<Attachment>>,
    pub contact: Option<Vec<PatientContact>>,
    pub communication: Option<Vec<PatientCommunication>>,
    pub general_practitioner: Option<Vec<Reference>>,
    pub managing_organization: Option<Reference>,
    pub link: Option<Vec<PatientLink>>,
    #[fhir(unknown)]
    pub unknown_fields: JsonMap,
}

/// `Patient.deceased[x]`
#[derive(Debug, Clone, PartialEq, ChoiceType)]
pub enum PatientDeceased {
    #[fhir(primitive)]
    Boolean(Boolean),
    #[fhir(primitive)]
    DateTime(DateTime),
}

/// `Patient.multipleBirth[x]`
#[derive(Debug, Clone, PartialEq, ChoiceType)]
pub enum PatientMultipleBirth {
    #[fhir(primitive)]
    Boolean(Boolean),
    #[fhir(primitive)]
    Integer(Integer),
}

/// A contact party (e.g. guardian, partner, friend) for the patient.
#[derive(Debug, Clone, PartialEq, Default, FhirJson)]
pub struct PatientContact {
    #[fhir(string)]
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub relationship: Option<Vec<CodeableConcept>>,
    pub name: Option<HumanName>,
    pub telecom: Option<Vec<ContactPoint>>,
    pub address: Option<Address>,
    #[fhir(primitive)]
    pub gender: Option<Code>,
    pub organization: Option<Reference>,
    pub period: Option<Period>,
    #[fhir(unknown)]
    pub unknown_fields: JsonMap,
}

#[derive(Debug, Clone, PartialEq, Default, FhirJson)]
pub struct PatientCommunication {
    #[fhir(string)]
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub language: Option<CodeableConcept>,
    #[fhir(primitive)]
    pub preferred: Option<Boolean>,
    #[fhir(unknown)]
    pub unknown_fields: JsonMap,
}

/// Link to another patient resource that concerns the same actual person.
#[derive(Debug, Clone, PartialEq, Default, FhirJson)]
pub struct PatientLink {
    #[fhir(string)]
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub other: Option<Reference>,
    /// replaced-by | replaces | refer | seealso
    #[fhir(primitive)]
    pub r#type: Option<Code>,
    #[fhir(unknown)]
    pub unknown_fields: JsonMap,
}
