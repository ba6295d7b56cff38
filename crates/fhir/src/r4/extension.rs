use crate::codec::JsonMap;
use crate::{ChoiceType, FhirJson};

use super::datatypes::*;
use super::metadata::*;
use super::primitives::*;

/// Optional extension element.
///
/// An extension carries a `url` and either a `value[x]` or nested extensions.
/// Extensions are preserved whether or not their `url` is known.
#[derive(Debug, Clone, PartialEq, Default, FhirJson)]
pub struct Extension {
    #[fhir(string)]
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    /// Identifies the meaning of the extension
    #[fhir(string)]
    pub url: std::string::String,
    #[fhir(choice)]
    pub value: Option<ExtensionValue>,
    #[fhir(unknown)]
    pub unknown_fields: JsonMap,
}

impl Extension {
    /// An extension with a value and no nested extensions.
    pub fn with_value(url: impl Into<std::string::String>, value: ExtensionValue) -> Self {
        Self {
            url: url.into(),
            value: Some(value),
            ..Self::default()
        }
    }
}

/// The R4 open type set of `value[x]`.
///
/// Used by `Extension.value[x]` and `Parameters.parameter.value[x]`.
/// `DataRequirement`, `Dosage` and `TriggerDefinition` are not modelled.
#[derive(Debug, Clone, PartialEq, ChoiceType)]
pub enum ExtensionValue {
    #[fhir(primitive, type_name = "base64Binary")]
    Base64Binary(Base64Binary),
    #[fhir(primitive)]
    Boolean(Boolean),
    #[fhir(primitive)]
    Canonical(Canonical),
    #[fhir(primitive)]
    Code(Code),
    #[fhir(primitive)]
    Date(Date),
    #[fhir(primitive)]
    DateTime(DateTime),
    #[fhir(primitive)]
    Decimal(Decimal),
    #[fhir(primitive)]
    Id(Id),
    #[fhir(primitive)]
    Instant(Instant),
    #[fhir(primitive)]
    Integer(Integer),
    #[fhir(primitive)]
    Markdown(Markdown),
    #[fhir(primitive)]
    Oid(Oid),
    #[fhir(primitive)]
    PositiveInt(PositiveInt),
    #[fhir(primitive)]
    String(String),
    #[fhir(primitive)]
    Time(Time),
    #[fhir(primitive)]
    UnsignedInt(UnsignedInt),
    #[fhir(primitive)]
    Uri(Uri),
    #[fhir(primitive)]
    Url(Url),
    #[fhir(primitive)]
    Uuid(Uuid),
    Address(Box<Address>),
    Age(Box<Age>),
    Annotation(Box<Annotation>),
    Attachment(Box<Attachment>),
    CodeableConcept(Box<CodeableConcept>),
    Coding(Box<Coding>),
    ContactPoint(Box<ContactPoint>),
    Count(Box<Count>),
    Distance(Box<Distance>),
    Duration(Box<Duration>),
    HumanName(Box<HumanName>),
    Identifier(Box<Identifier>),
    Money(Box<Money>),
    Period(Box<Period>),
    Quantity(Box<Quantity>),
    Range(Box<Range>),
    Ratio(Box<Ratio>),
    Reference(Box<Reference>),
    SampledData(Box<SampledData>),
    Signature(Box<Signature>),
    Timing(Box<Timing>),
    ContactDetail(Box<ContactDetail>),
    Contributor(Box<Contributor>),
    Expression(Box<Expression>),
    ParameterDefinition(Box<ParameterDefinition>),
    RelatedArtifact(Box<RelatedArtifact>),
    UsageContext(Box<UsageContext>),
    Meta(Box<Meta>),
}
