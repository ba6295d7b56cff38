use crate::codec::JsonMap;
use crate::r4::*;
use crate::{ChoiceType, FhirJson};

/// An order or request for both supply of the medication and the instructions
/// for administration of the medication to a patient.
///
/// `medication[x]` is mandatory, so there is no `Default`. Dosage
/// instructions are not modelled and travel as unknown members.
#[derive(Debug, Clone, PartialEq, FhirJson)]
#[fhir(resource = "MedicationRequest")]
pub struct MedicationRequest {
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
    pub status: Option<Code>,
    pub status_reason: Option<CodeableConcept>,
    /// proposal | plan | order | original-order | reflex-order | filler-order | instance-order | option
    #[fhir(primitive)]
    pub intent: Option<Code>,
    pub category: Option<Vec<CodeableConcept>>,
    #[fhir(primitive)]
    pub priority: Option<Code>,
    #[fhir(primitive)]
    pub do_not_perform: Option<Boolean>,
    #[fhir(choice)]
    pub reported: Option<MedicationRequestReported>,
    #[fhir(choice)]
    pub medication: MedicationRequestMedication,
    pub subject: Option<Reference>,
    pub encounter: Option<Reference>,
    #[fhir(primitive)]
    pub authored_on: Option<DateTime>,
    pub requester: Option<Reference>,
    pub reason_code: Option<Vec<CodeableConcept>>,
    pub reason_reference: Option<Vec<Reference>>,
    pub note: Option<Vec<Annotation>>,
    pub dispense_request: Option<MedicationRequestDispenseRequest>,
    pub substitution: Option<MedicationRequestSubstitution>,
    #[fhir(unknown)]
    pub unknown_fields: JsonMap,
}

impl MedicationRequest {
    /// A request with only the mandatory medication set.
    pub fn new(medication: MedicationRequestMedication) -> Self {
        Self {
            id: None,
            meta: None,
            implicit_rules: None,
            language: None,
            text: None,
            contained: None,
            extension: None,
            modifier_extension: None,
            identifier: None,
            status: None,
            status_reason: None,
            intent: None,
            category: None,
            priority: None,
            do_not_perform: None,
            reported: None,
            medication,
            subject: None,
            encounter: None,
            authored_on: None,
            requester: None,
            reason_code: None,
            reason_reference: None,
            note: None,
            dispense_request: None,
            substitution: None,
            unknown_fields: JsonMap::new(),
        }
    }
}

/// `MedicationRequest.reported[x]`
#[derive(Debug, Clone, PartialEq, ChoiceType)]
pub enum MedicationRequestReported {
    #[fhir(primitive)]
    Boolean(Boolean),
    Reference(Box<Reference>),
}

/// `MedicationRequest.medication[x]`
#[derive(Debug, Clone, PartialEq, ChoiceType)]
pub enum MedicationRequestMedication {
    CodeableConcept(Box<CodeableConcept>),
    Reference(Box<Reference>),
}

/// Medication supply authorization.
#[derive(Debug, Clone, PartialEq, Default, FhirJson)]
pub struct MedicationRequestDispenseRequest {
    #[fhir(string)]
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub validity_period: Option<Period>,
    #[fhir(primitive)]
    pub number_of_repeats_allowed: Option<UnsignedInt>,
    pub quantity: Option<SimpleQuantity>,
    pub expected_supply_duration: Option<Duration>,
    pub performer: Option<Reference>,
    #[fhir(unknown)]
    pub unknown_fields: JsonMap,
}

/// Any restrictions on medication substitution.
#[derive(Debug, Clone, PartialEq, FhirJson)]
pub struct MedicationRequestSubstitution {
    #[fhir(string)]
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    #[fhir(choice)]
    pub allowed: MedicationRequestSubstitutionAllowed,
    pub reason: Option<CodeableConcept>,
    #[fhir(unknown)]
    pub unknown_fields: JsonMap,
}

/// `MedicationRequest.substitution.allowed[x]`
#[derive(Debug, Clone, PartialEq, ChoiceType)]
pub enum MedicationRequestSubstitutionAllowed {
    #[fhir(primitive)]
    Boolean(Boolean),
    CodeableConcept(Box<CodeableConcept>),
}
