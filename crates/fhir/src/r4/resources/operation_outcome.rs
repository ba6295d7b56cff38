use crate::FhirJson;
use crate::codec::JsonMap;
use crate::r4::*;

/// Information about the success/failure of an action.
#[derive(Debug, Clone, PartialEq, Default, FhirJson)]
#[fhir(resource = "OperationOutcome")]
pub struct OperationOutcome {
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
    pub issue: Option<Vec<OperationOutcomeIssue>>,
    #[fhir(unknown)]
    pub unknown_fields: JsonMap,
}

/// A single issue associated with the action.
#[derive(Debug, Clone, PartialEq, Default, FhirJson)]
pub struct OperationOutcomeIssue {
    #[fhir(string)]
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    /// fatal | error | warning | information
    #[fhir(primitive)]
    pub severity: Code,
    #[fhir(primitive)]
    pub code: Code,
    pub details: Option<CodeableConcept>,
    #[fhir(primitive)]
    pub diagnostics: Option<String>,
    #[fhir(primitive)]
    pub location: Option<Vec<String>>,
    #[fhir(primitive)]
    pub expression: Option<Vec<String>>,
    #[fhir(unknown)]
    pub unknown_fields: JsonMap,
}
