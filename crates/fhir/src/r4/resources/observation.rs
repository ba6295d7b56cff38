use crate::codec::JsonMap;
use crate::r4::*;
use crate::{ChoiceType, FhirJson};

/// Measurements and simple assertions made about a patient, device or other
/// subject.
#[derive(Debug, Clone, PartialEq, Default, FhirJson)]
#[fhir(resource = "Observation")]
pub struct Observation {
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
    pub based_on: Option<Vec<Reference>>,
    pub part_of: Option<Vec<Reference>>,
    /// registered | preliminary | final | amended +
    #[fhir(primitive)]
    pub status: Option<Code>,
    pub category: Option<Vec<CodeableConcept>>,
    pub code: Option<CodeableConcept>,
    pub subject: Option<Reference>,
    pub focus: Option<Vec<Reference>>,
    pub encounter: Option<Reference>,
    #[fhir(choice)]
    pub effective: Option<ObservationEffective>,
    #[fhir(primitive)]
    pub issued: Option<Instant>,
    pub performer: Option<Vec<Reference>>,
    #[fhir(choice)]
    pub value: Option<ObservationValue>,
    pub data_absent_reason: Option<CodeableConcept>,
    pub interpretation: Option<Vec<CodeableConcept>>,
    pub note: Option<Vec<Annotation>>,
    pub body_site: Option<CodeableConcept>,
    pub method: Option<CodeableConcept>,
    pub specimen: Option<Reference>,
    pub device: Option<Reference>,
    pub reference_range: Option<Vec<ObservationReferenceRange>>,
    pub has_member: Option<Vec<Reference>>,
    pub derived_from: Option<Vec<Reference>>,
    pub component: Option<Vec<ObservationComponent>>,
    #[fhir(unknown)]
    pub unknown_fields: JsonMap,
}

/// `Observation.effective[x]`
#[derive(Debug, Clone, PartialEq, ChoiceType)]
pub enum ObservationEffective {
    #[fhir(primitive)]
    DateTime(DateTime),
    Period(Period),
    Timing(Box<Timing>),
    #[fhir(primitive)]
    Instant(Instant),
}

/// `Observation.value[x]`, shared with `Observation.component.value[x]`.
#[derive(Debug, Clone, PartialEq, ChoiceType)]
pub enum ObservationValue {
    Quantity(Quantity),
    CodeableConcept(CodeableConcept),
    #[fhir(primitive)]
    String(String),
    #[fhir(primitive)]
    Boolean(Boolean),
    #[fhir(primitive)]
    Integer(Integer),
    Range(Range),
    Ratio(Ratio),
    SampledData(Box<SampledData>),
    #[fhir(primitive)]
    Time(Time),
    #[fhir(primitive)]
    DateTime(DateTime),
    Period(Period),
}

/// Provides guide for interpretation.
#[derive(Debug, Clone, PartialEq, Default, FhirJson)]
pub struct ObservationReferenceRange {
    #[fhir(string)]
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub low: Option<SimpleQuantity>,
    pub high: Option<SimpleQuantity>,
    pub r#type: Option<CodeableConcept>,
    pub applies_to: Option<Vec<CodeableConcept>>,
    pub age: Option<Range>,
    #[fhir(primitive)]
    pub text: Option<String>,
    #[fhir(unknown)]
    pub unknown_fields: JsonMap,
}

/// Component results.
#[derive(Debug, Clone, PartialEq, Default, FhirJson)]
pub struct ObservationComponent {
    #[fhir(string)]
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub code: Option<CodeableConcept>,
    #[fhir(choice)]
    pub value: Option<ObservationValue>,
    pub data_absent_reason: Option<CodeableConcept>,
    pub interpretation: Option<Vec<CodeableConcept>>,
    pub reference_range: Option<Vec<ObservationReferenceRange>>,
    #[fhir(unknown)]
    pub unknown_fields: JsonMap,
}
