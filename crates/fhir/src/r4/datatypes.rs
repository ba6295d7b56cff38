//! R4 general-purpose data types.

use crate::codec::JsonMap;
use crate::{ChoiceType, FhirJson};

use super::Extension;
use super::primitives::*;

/// A reference to a code defined by a terminology system.
#[derive(Debug, Clone, PartialEq, Default, FhirJson)]
pub struct Coding {
    #[fhir(string)]
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir(primitive)]
    pub system: Option<Uri>,
    #[fhir(primitive)]
    pub version: Option<String>,
    #[fhir(primitive)]
    pub code: Option<Code>,
    #[fhir(primitive)]
    pub display: Option<String>,
    #[fhir(primitive)]
    pub user_selected: Option<Boolean>,
    #[fhir(unknown)]
    pub unknown_fields: JsonMap,
}

/// Concept - reference to a terminology or just text.
#[derive(Debug, Clone, PartialEq, Default, FhirJson)]
pub struct CodeableConcept {
    #[fhir(string)]
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub coding: Option<Vec<Coding>>,
    #[fhir(primitive)]
    pub text: Option<String>,
    #[fhir(unknown)]
    pub unknown_fields: JsonMap,
}

/// A measured or measurable amount.
#[derive(Debug, Clone, PartialEq, Default, FhirJson)]
pub struct Quantity {
    #[fhir(string)]
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir(primitive)]
    pub value: Option<Decimal>,
    /// `<` | `<=` | `>=` | `>`
    #[fhir(primitive)]
    pub comparator: Option<Code>,
    #[fhir(primitive)]
    pub unit: Option<String>,
    #[fhir(primitive)]
    pub system: Option<Uri>,
    #[fhir(primitive)]
    pub code: Option<Code>,
    #[fhir(unknown)]
    pub unknown_fields: JsonMap,
}

// Profiles of Quantity share its structure.
pub type Age = Quantity;
pub type Count = Quantity;
pub type Distance = Quantity;
pub type Duration = Quantity;
pub type SimpleQuantity = Quantity;

/// Set of values bounded by low and high.
#[derive(Debug, Clone, PartialEq, Default, FhirJson)]
pub struct Range {
    #[fhir(string)]
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub low: Option<SimpleQuantity>,
    pub high: Option<SimpleQuantity>,
    #[fhir(unknown)]
    pub unknown_fields: JsonMap,
}

/// A ratio of two Quantity values - a numerator and a denominator.
#[derive(Debug, Clone, PartialEq, Default, FhirJson)]
pub struct Ratio {
    #[fhir(string)]
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub numerator: Option<Quantity>,
    pub denominator: Option<Quantity>,
    #[fhir(unknown)]
    pub unknown_fields: JsonMap,
}

/// An amount of economic utility in some recognized currency.
#[derive(Debug, Clone, PartialEq, Default, FhirJson)]
pub struct Money {
    #[fhir(string)]
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir(primitive)]
    pub value: Option<Decimal>,
    #[fhir(primitive)]
    pub currency: Option<Code>,
    #[fhir(unknown)]
    pub unknown_fields: JsonMap,
}

/// A series of measurements taken by a device.
#[derive(Debug, Clone, PartialEq, Default, FhirJson)]
pub struct SampledData {
    #[fhir(string)]
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub origin: Option<SimpleQuantity>,
    #[fhir(primitive)]
    pub period: Option<Decimal>,
    #[fhir(primitive)]
    pub factor: Option<Decimal>,
    #[fhir(primitive)]
    pub lower_limit: Option<Decimal>,
    #[fhir(primitive)]
    pub upper_limit: Option<Decimal>,
    #[fhir(primitive)]
    pub dimensions: Option<PositiveInt>,
    #[fhir(primitive)]
    pub data: Option<String>,
    #[fhir(unknown)]
    pub unknown_fields: JsonMap,
}

/// Time range defined by start and end date/time.
#[derive(Debug, Clone, PartialEq, Default, FhirJson)]
pub struct Period {
    #[fhir(string)]
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir(primitive)]
    pub start: Option<DateTime>,
    #[fhir(primitive)]
    pub end: Option<DateTime>,
    #[fhir(unknown)]
    pub unknown_fields: JsonMap,
}

/// An identifier intended for computation.
#[derive(Debug, Clone, PartialEq, Default, FhirJson)]
pub struct Identifier {
    #[fhir(string)]
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    /// usual | official | temp | secondary | old
    #[fhir(primitive)]
    pub r#use: Option<Code>,
    pub r#type: Option<CodeableConcept>,
    #[fhir(primitive)]
    pub system: Option<Uri>,
    #[fhir(primitive)]
    pub value: Option<String>,
    pub period: Option<Period>,
    pub assigner: Option<Box<Reference>>,
    #[fhir(unknown)]
    pub unknown_fields: JsonMap,
}

/// A reference from one resource to another.
///
/// References are carried as data; nothing here resolves them.
#[derive(Debug, Clone, PartialEq, Default, FhirJson)]
pub struct Reference {
    #[fhir(string)]
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir(primitive)]
    pub reference: Option<String>,
    #[fhir(primitive)]
    pub r#type: Option<Uri>,
    pub identifier: Option<Identifier>,
    #[fhir(primitive)]
    pub display: Option<String>,
    #[fhir(unknown)]
    pub unknown_fields: JsonMap,
}

/// Name of a human - parts and usage.
#[derive(Debug, Clone, PartialEq, Default, FhirJson)]
pub struct HumanName {
    #[fhir(string)]
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir(primitive)]
    pub r#use: Option<Code>,
    #[fhir(primitive)]
    pub text: Option<String>,
    #[fhir(primitive)]
    pub family: Option<String>,
    #[fhir(primitive)]
    pub given: Option<Vec<String>>,
    #[fhir(primitive)]
    pub prefix: Option<Vec<String>>,
    #[fhir(primitive)]
    pub suffix: Option<Vec<String>>,
    pub period: Option<Period>,
    #[fhir(unknown)]
    pub unknown_fields: JsonMap,
}

/// An address expressed using postal conventions.
#[derive(Debug, Clone, PartialEq, Default, FhirJson)]
pub struct Address {
    #[fhir(string)]
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir(primitive)]
    pub r#use: Option<Code>,
    #[fhir(primitive)]
    pub r#type: Option<Code>,
    #[fhir(primitive)]
    pub text: Option<String>,
    #[fhir(primitive)]
    pub line: Option<Vec<String>>,
    #[fhir(primitive)]
    pub city: Option<String>,
    #[fhir(primitive)]
    pub district: Option<String>,
    #[fhir(primitive)]
    pub state: Option<String>,
    #[fhir(primitive)]
    pub postal_code: Option<String>,
    #[fhir(primitive)]
    pub country: Option<String>,
    pub period: Option<Period>,
    #[fhir(unknown)]
    pub unknown_fields: JsonMap,
}

/// Details of a technology mediated contact point (phone, fax, email, etc.).
#[derive(Debug, Clone, PartialEq, Default, FhirJson)]
pub struct ContactPoint {
    #[fhir(string)]
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir(primitive)]
    pub system: Option<Code>,
    #[fhir(primitive)]
    pub value: Option<String>,
    #[fhir(primitive)]
    pub r#use: Option<Code>,
    #[fhir(primitive)]
    pub rank: Option<PositiveInt>,
    pub period: Option<Period>,
    #[fhir(unknown)]
    pub unknown_fields: JsonMap,
}

/// Content in a format defined elsewhere.
#[derive(Debug, Clone, PartialEq, Default, FhirJson)]
pub struct Attachment {
    #[fhir(string)]
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir(primitive)]
    pub content_type: Option<Code>,
    #[fhir(primitive)]
    pub language: Option<Code>,
    #[fhir(primitive)]
    pub data: Option<Base64Binary>,
    #[fhir(primitive)]
    pub url: Option<Url>,
    #[fhir(primitive)]
    pub size: Option<UnsignedInt>,
    #[fhir(primitive)]
    pub hash: Option<Base64Binary>,
    #[fhir(primitive)]
    pub title: Option<String>,
    #[fhir(primitive)]
    pub creation: Option<DateTime>,
    #[fhir(unknown)]
    pub unknown_fields: JsonMap,
}

/// Text node with attribution.
#[derive(Debug, Clone, PartialEq, Default, FhirJson)]
pub struct Annotation {
    #[fhir(string)]
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir(choice)]
    pub author: Option<AnnotationAuthor>,
    #[fhir(primitive)]
    pub time: Option<DateTime>,
    #[fhir(primitive)]
    pub text: Option<Markdown>,
    #[fhir(unknown)]
    pub unknown_fields: JsonMap,
}

/// `Annotation.author[x]`
#[derive(Debug, Clone, PartialEq, ChoiceType)]
pub enum AnnotationAuthor {
    Reference(Box<Reference>),
    #[fhir(primitive)]
    String(String),
}

/// A digital signature along with supporting context.
#[derive(Debug, Clone, PartialEq, Default, FhirJson)]
pub struct Signature {
    #[fhir(string)]
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub r#type: Option<Vec<Coding>>,
    #[fhir(primitive)]
    pub when: Option<Instant>,
    pub who: Option<Reference>,
    pub on_behalf_of: Option<Reference>,
    #[fhir(primitive)]
    pub target_format: Option<Code>,
    #[fhir(primitive)]
    pub sig_format: Option<Code>,
    #[fhir(primitive)]
    pub data: Option<Base64Binary>,
    #[fhir(unknown)]
    pub unknown_fields: JsonMap,
}

/// A timing schedule that specifies an event that may occur multiple times.
#[derive(Debug, Clone, PartialEq, Default, FhirJson)]
pub struct Timing {
    #[fhir(string)]
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    #[fhir(primitive)]
    pub event: Option<Vec<DateTime>>,
    pub repeat: Option<TimingRepeat>,
    pub code: Option<CodeableConcept>,
    #[fhir(unknown)]
    pub unknown_fields: JsonMap,
}

/// When the event is to occur.
#[derive(Debug, Clone, PartialEq, Default, FhirJson)]
pub struct TimingRepeat {
    #[fhir(string)]
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir(choice)]
    pub bounds: Option<TimingRepeatBounds>,
    #[fhir(primitive)]
    pub count: Option<PositiveInt>,
    #[fhir(primitive)]
    pub count_max: Option<PositiveInt>,
    #[fhir(primitive)]
    pub duration: Option<Decimal>,
    #[fhir(primitive)]
    pub duration_max: Option<Decimal>,
    #[fhir(primitive)]
    pub duration_unit: Option<Code>,
    #[fhir(primitive)]
    pub frequency: Option<PositiveInt>,
    #[fhir(primitive)]
    pub frequency_max: Option<PositiveInt>,
    #[fhir(primitive)]
    pub period: Option<Decimal>,
    #[fhir(primitive)]
    pub period_max: Option<Decimal>,
    #[fhir(primitive)]
    pub period_unit: Option<Code>,
    #[fhir(primitive)]
    pub day_of_week: Option<Vec<Code>>,
    #[fhir(primitive)]
    pub time_of_day: Option<Vec<Time>>,
    #[fhir(primitive)]
    pub when: Option<Vec<Code>>,
    #[fhir(primitive)]
    pub offset: Option<UnsignedInt>,
    #[fhir(unknown)]
    pub unknown_fields: JsonMap,
}

/// `Timing.repeat.bounds[x]`
#[derive(Debug, Clone, PartialEq, ChoiceType)]
pub enum TimingRepeatBounds {
    Duration(Duration),
    Range(Range),
    Period(Period),
}
