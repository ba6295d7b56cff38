use crate::codec::JsonMap;
use crate::r4::*;
use crate::{ChoiceType, FhirJson};

/// Detailed information about conditions, problems or diagnoses.
#[derive(Debug, Clone, PartialEq, Default, FhirJson)]
#[fhir(resource = "Condition")]
pub struct Condition {
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
    pub clinical_status: Option<CodeableConcept>,
    pub verification_status: Option<CodeableConcept>,
    pub category: Option<Vec<CodeableConcept>>,
    pub severity: Option<CodeableConcept>,
    pub code: Option<CodeableConcept>,
    pub body_site: Option<Vec<CodeableConcept>>,
    pub subject: Option<Reference>,
    pub encounter: Option<Reference>,
    #[fhir(choice)]
    pub onset: Option<ConditionOnset>,
    #[fhir(choice)]
    pub abatement: Option<ConditionAbatement>,
    #[fhir(primitive)]
    pub recorded_date: Option<DateTime>,
    pub recorder: Option<Reference>,
    pub asserter: Option<Reference>,
    pub stage: Option<Vec<ConditionStage>>,
    pub evidence: Option<Vec<ConditionEvidence>>,
    pub note: Option<Vec<Annotation>>,
    #[fhir(unknown)]
    pub unknown_fields: JsonMap,
}

/// `Condition.onset[x]`
#[derive(Debug, Clone, PartialEq, ChoiceType)]
pub enum ConditionOnset {
    #[fhir(primitive)]
    DateTime(DateTime),
    Age(Age),
    Period(Period),
    Range(Range),
    #[fhir(primitive)]
    String(String),
}

/// `Condition.abatement[x]`
#[derive(Debug, Clone, PartialEq, ChoiceType)]
pub enum ConditionAbatement {
    #[fhir(primitive)]
    DateTime(DateTime),
    Age(Age),
    Period(Period),
    Range(Range),
    #[fhir(primitive)]
    String(String),
}

/// Stage/grade, usually assessed formally.
#[derive(Debug, Clone, PartialEq, Default, FhirJson)]
pub struct ConditionStage {
    #[fhir(string)]
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub summary: Option<CodeableConcept>,
    pub assessment: Option<Vec<Reference>>,
    pub r#type: Option<CodeableConcept>,
    #[fhir(unknown)]
    pub unknown_fields: JsonMap,
}

/// Supporting evidence.
#[derive(Debug, Clone, PartialEq, Default, FhirJson)]
pub struct ConditionEvidence {
    #[fhir(string)]
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub code: Option<Vec<CodeableConcept>>,
    pub detail: Option<Vec<Reference>>,
    #[fhir(unknown)]
    pub unknown_fields: JsonMap,
}
