use crate::FhirJson;
use crate::codec::JsonMap;
use crate::r4::*;

/// A container for a collection of resources.
///
/// Entries hold their resource polymorphically, so a bundle decodes whatever
/// the registry knows about.
#[derive(Debug, Clone, PartialEq, Default, FhirJson)]
#[fhir(resource = "Bundle")]
pub struct Bundle {
    #[fhir(string)]
    pub id: Option<std::string::String>,
    pub meta: Option<Meta>,
    #[fhir(primitive)]
    pub implicit_rules: Option<Uri>,
    #[fhir(primitive)]
    pub language: Option<Code>,
    pub identifier: Option<Identifier>,
    /// document | message | transaction | transaction-response | batch | batch-response | history | searchset | collection
    #[fhir(primitive)]
    pub r#type: Option<Code>,
    #[fhir(primitive)]
    pub timestamp: Option<Instant>,
    #[fhir(primitive)]
    pub total: Option<UnsignedInt>,
    pub link: Option<Vec<BundleLink>>,
    pub entry: Option<Vec<BundleEntry>>,
    pub signature: Option<Signature>,
    #[fhir(unknown)]
    pub unknown_fields: JsonMap,
}

impl Bundle {
    /// The resources carried by the entries, in entry order.
    pub fn resources(&self) -> impl Iterator<Item = &Resource> {
        self.entry
            .iter()
            .flatten()
            .filter_map(|entry| entry.resource.as_ref())
    }
}

/// Links related to this Bundle.
#[derive(Debug, Clone, PartialEq, Default, FhirJson)]
pub struct BundleLink {
    #[fhir(string)]
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    #[fhir(primitive)]
    pub relation: Option<String>,
    #[fhir(primitive)]
    pub url: Option<Uri>,
    #[fhir(unknown)]
    pub unknown_fields: JsonMap,
}

/// Entry in the bundle - will have a resource or information.
#[derive(Debug, Clone, PartialEq, Default, FhirJson)]
pub struct BundleEntry {
    #[fhir(string)]
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub link: Option<Vec<BundleLink>>,
    #[fhir(primitive)]
    pub full_url: Option<Uri>,
    pub resource: Option<Resource>,
    pub search: Option<BundleEntrySearch>,
    pub request: Option<BundleEntryRequest>,
    pub response: Option<BundleEntryResponse>,
    #[fhir(unknown)]
    pub unknown_fields: JsonMap,
}

#[derive(Debug, Clone, PartialEq, Default, FhirJson)]
pub struct BundleEntrySearch {
    #[fhir(string)]
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    /// match | include | outcome
    #[fhir(primitive)]
    pub mode: Option<Code>,
    #[fhir(primitive)]
    pub score: Option<Decimal>,
    #[fhir(unknown)]
    pub unknown_fields: JsonMap,
}

#[derive(Debug, Clone, PartialEq, Default, FhirJson)]
pub struct BundleEntryRequest {
    #[fhir(string)]
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    #[fhir(primitive)]
    pub method: Option<Code>,
    #[fhir(primitive)]
    pub url: Option<Uri>,
    #[fhir(primitive)]
    pub if_none_match: Option<String>,
    #[fhir(primitive)]
    pub if_modified_since: Option<Instant>,
    #[fhir(primitive)]
    pub if_match: Option<String>,
    #[fhir(primitive)]
    pub if_none_exist: Option<String>,
    #[fhir(unknown)]
    pub unknown_fields: JsonMap,
}

#[derive(Debug, Clone, PartialEq, Default, FhirJson)]
pub struct BundleEntryResponse {
    #[fhir(string)]
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    #[fhir(primitive)]
    pub status: Option<String>,
    #[fhir(primitive)]
    pub location: Option<Uri>,
    #[fhir(primitive)]
    pub etag: Option<String>,
    #[fhir(primitive)]
    pub last_modified: Option<Instant>,
    pub outcome: Option<Resource>,
    #[fhir(unknown)]
    pub unknown_fields: JsonMap,
}
