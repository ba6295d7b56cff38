use crate::codec::JsonMap;
use crate::r4::*;
use crate::{ChoiceType, FhirJson};

/// A structured set of questions and their answers.
///
/// Items nest to any depth through `item` and `answer.item`; the decoder's
/// depth limit bounds them.
#[derive(Debug, Clone, PartialEq, Default, FhirJson)]
#[fhir(resource = "QuestionnaireResponse")]
pub struct QuestionnaireResponse {
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
    pub identifier: Option<Identifier>,
    pub based_on: Option<Vec<Reference>>,
    pub part_of: Option<Vec<Reference>>,
    #[fhir(primitive)]
    pub questionnaire: Option<Canonical>,
    /// in-progress | completed | amended | entered-in-error | stopped
    #[fhir(primitive)]
    pub status: Option<Code>,
    pub subject: Option<Reference>,
    pub encounter: Option<Reference>,
    #[fhir(primitive)]
    pub authored: Option<DateTime>,
    pub author: Option<Reference>,
    pub source: Option<Reference>,
    pub item: Option<Vec<QuestionnaireResponseItem>>,
    #[fhir(unknown)]
    pub unknown_fields: JsonMap,
}

/// Groups and questions.
#[derive(Debug, Clone, PartialEq, Default, FhirJson)]
pub struct QuestionnaireResponseItem {
    #[fhir(string)]
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    #[fhir(primitive)]
    pub link_id: Option<String>,
    #[fhir(primitive)]
    pub definition: Option<Uri>,
    #[fhir(primitive)]
    pub text: Option<String>,
    pub answer: Option<Vec<QuestionnaireResponseItemAnswer>>,
    pub item: Option<Vec<QuestionnaireResponseItem>>,
    #[fhir(unknown)]
    pub unknown_fields: JsonMap,
}

/// The response(s) to the question.
#[derive(Debug, Clone, PartialEq, Default, FhirJson)]
pub struct QuestionnaireResponseItemAnswer {
    #[fhir(string)]
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    #[fhir(choice)]
    pub value: Option<QuestionnaireResponseItemAnswerValue>,
    pub item: Option<Vec<QuestionnaireResponseItem>>,
    #[fhir(unknown)]
    pub unknown_fields: JsonMap,
}

/// `QuestionnaireResponse.item.answer.value[x]`
#[derive(Debug, Clone, PartialEq, ChoiceType)]
pub enum QuestionnaireResponseItemAnswerValue {
    #[fhir(primitive)]
    Boolean(Boolean),
    #[fhir(primitive)]
    Decimal(Decimal),
    #[fhir(primitive)]
    Integer(Integer),
    #[fhir(primitive)]
    Date(Date),
    #[fhir(primitive)]
    DateTime(DateTime),
    #[fhir(primitive)]
    Time(Time),
    #[fhir(primitive)]
    String(String),
    #[fhir(primitive)]
    Uri(Uri),
    Attachment(Box<Attachment>),
    Coding(Box<Coding>),
    Quantity(Box<Quantity>),
    Reference(Box<Reference>),
}
