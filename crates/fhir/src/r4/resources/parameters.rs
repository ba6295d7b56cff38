use crate::FhirJson;
use crate::codec::JsonMap;
use crate::r4::*;

/// Operation request or response.
#[derive(Debug, Clone, PartialEq, Default, FhirJson)]
#[fhir(resource = "Parameters")]
pub struct Parameters {
    #[fhir(string)]
    pub id: Option<std::string::String>,
    pub meta: Option<Meta>,
    #[fhir(primitive)]
    pub implicit_rules: Option<Uri>,
    #[fhir(primitive)]
    pub language: Option<Code>,
    pub parameter: Option<Vec<ParametersParameter>>,
    #[fhir(unknown)]
    pub unknown_fields: JsonMap,
}

impl Parameters {
    /// First top-level parameter called `name`.
    pub fn get(&self, name: &str) -> Option<&ParametersParameter> {
        self.parameter
            .iter()
            .flatten()
            .find(|parameter| parameter.name.value.as_deref() == Some(name))
    }
}

/// `Parameters.parameter.value[x]` accepts the same open type set as
/// `Extension.value[x]`.
pub type ParametersParameterValue = ExtensionValue;

#[derive(Debug, Clone, PartialEq, Default, FhirJson)]
pub struct ParametersParameter {
    #[fhir(string)]
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    #[fhir(primitive)]
    pub name: String,
    #[fhir(choice)]
    pub value: Option<ParametersParameterValue>,
    pub resource: Option<Resource>,
    pub part: Option<Vec<ParametersParameter>>,
    #[fhir(unknown)]
    pub unknown_fields: JsonMap,
}
