//! The polymorphic [`Resource`] and its registry.
//!
//! A payload whose kind is only known at runtime (a top-level document,
//! `contained`, `Bundle.entry.resource`, `Parameters.parameter.resource`)
//! decodes through [`Resource`]. The `resourceType` member selects a decoder
//! from [`registry`]; the concrete type then reads the remaining members.

use std::any::Any;
use std::fmt;
use std::str::FromStr;

use crate::codec::{
    DecodeContext, DecodeErrorKind, DecodeResult, FhirJson, JsonMap, ResourceKind,
    resource_type_of,
};

use super::resources::*;

/// Decodes the members of an object already known to carry a given
/// `resourceType`.
pub type ResourceDecoder = fn(&JsonMap, &mut DecodeContext<'_>) -> DecodeResult<Resource>;

fn decode_as<T>(map: &JsonMap, ctx: &mut DecodeContext<'_>) -> DecodeResult<Resource>
where
    T: ResourceKind + Into<Resource>,
{
    T::decode_object(map, ctx).map(Into::into)
}

macro_rules! resource_catalogue {
    ($($name:ident),* $(,)?) => {
        /// Any resource known to this crate.
        ///
        /// Variants are boxed to keep the enum pointer-sized; a `Bundle` of
        /// `Resource`s otherwise inflates every stack frame that holds one.
        #[derive(Debug, Clone, PartialEq)]
        pub enum Resource {
            $($name(Box<$name>),)*
        }

        /// The `resourceType` discriminators known to this crate.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum ResourceType {
            $($name,)*
        }

        impl ResourceType {
            /// Every known resource type, in declaration order.
            pub const ALL: &'static [ResourceType] = &[$(ResourceType::$name,)*];

            pub fn as_str(self) -> &'static str {
                match self {
                    $(ResourceType::$name => <$name as ResourceKind>::RESOURCE_TYPE,)*
                }
            }
        }

        impl Resource {
            pub fn resource_type(&self) -> ResourceType {
                match self {
                    $(Resource::$name(_) => ResourceType::$name,)*
                }
            }

            /// The logical id, if the resource has one.
            pub fn id(&self) -> Option<&str> {
                match self {
                    $(Resource::$name(resource) => resource.id.as_deref(),)*
                }
            }

            /// Borrows the concrete resource when it is a `T`.
            pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
                let any: &dyn Any = match self {
                    $(Resource::$name(resource) => &**resource,)*
                };
                any.downcast_ref()
            }

            fn encode_variant(&self) -> JsonMap {
                match self {
                    $(Resource::$name(resource) => resource.encode_object(),)*
                }
            }
        }

        $(
            impl From<$name> for Resource {
                fn from(resource: $name) -> Self {
                    Resource::$name(Box::new(resource))
                }
            }
        )*

        const DECODERS: &[(&str, ResourceDecoder)] = &[
            $((<$name as ResourceKind>::RESOURCE_TYPE, decode_as::<$name>),)*
        ];
    };
}

resource_catalogue! {
    Basic,
    Binary,
    Bundle,
    Condition,
    MedicationRequest,
    Observation,
    OperationOutcome,
    Organization,
    Parameters,
    Patient,
    Practitioner,
    QuestionnaireResponse,
}

impl Resource {
    /// Whether `resource_type` names a registered resource.
    pub fn is_resource_type(resource_type: &str) -> bool {
        registry::lookup(resource_type).is_some()
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = DecodeErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceType::ALL
            .iter()
            .copied()
            .find(|resource_type| resource_type.as_str() == s)
            .ok_or_else(|| DecodeErrorKind::UnknownResourceType(s.to_string()))
    }
}

/// The process-wide `resourceType` to decoder map.
pub mod registry {
    use std::collections::HashMap;

    use once_cell::sync::Lazy;

    use super::{DECODERS, ResourceDecoder};

    static REGISTRY: Lazy<HashMap<&'static str, ResourceDecoder>> =
        Lazy::new(|| DECODERS.iter().copied().collect());

    /// The decoder registered for `resource_type`.
    pub fn lookup(resource_type: &str) -> Option<ResourceDecoder> {
        REGISTRY.get(resource_type).copied()
    }

    /// Every registered discriminator, sorted.
    pub fn resource_types() -> Vec<&'static str> {
        let mut types: Vec<_> = REGISTRY.keys().copied().collect();
        types.sort_unstable();
        types
    }
}

impl FhirJson for Resource {
    fn decode_object(map: &JsonMap, ctx: &mut DecodeContext<'_>) -> DecodeResult<Self> {
        let resource_type = resource_type_of(map, ctx)?;
        match registry::lookup(resource_type) {
            Some(decode) => {
                tracing::trace!(resource_type, path = %ctx.pointer(), "dispatching resource");
                decode(map, ctx)
            }
            None => Err(ctx.error_at(
                "resourceType",
                DecodeErrorKind::UnknownResourceType(resource_type.to_string()),
            )),
        }
    }

    fn encode_object(&self) -> JsonMap {
        self.encode_variant()
    }
}

impl serde::Serialize for Resource {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        crate::codec::serialize_json(self, serializer)
    }
}

impl<'de> serde::Deserialize<'de> for Resource {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        crate::codec::deserialize_json(deserializer)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::pretty::pretty(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{DecodeError, DecodeOptions};
    use serde_json::json;

    #[test]
    fn registry_covers_every_resource_type() {
        let registered = registry::resource_types();
        assert_eq!(registered.len(), ResourceType::ALL.len());
        for resource_type in ResourceType::ALL {
            assert!(registered.contains(&resource_type.as_str()));
            assert_eq!(resource_type.as_str().parse::<ResourceType>(), Ok(*resource_type));
        }
    }

    #[test]
    fn resource_type_parse_rejects_unknown_names() {
        assert_eq!(
            "NotAResource".parse::<ResourceType>(),
            Err(DecodeErrorKind::UnknownResourceType("NotAResource".to_string()))
        );
        assert!(!Resource::is_resource_type("patient"));
        assert!(Resource::is_resource_type("Patient"));
    }

    #[test]
    fn dispatch_does_not_depend_on_key_order() {
        let value = json!({"id": "late", "active": false, "resourceType": "Patient"});
        let resource = Resource::from_json_with(&value, &DecodeOptions::strict()).unwrap();
        assert_eq!(resource.resource_type(), ResourceType::Patient);
        assert_eq!(resource.id(), Some("late"));
        let patient = resource.downcast_ref::<Patient>().unwrap();
        assert_eq!(patient.active.as_ref().and_then(|a| a.value), Some(false));
        assert!(resource.downcast_ref::<Observation>().is_none());
    }

    #[test]
    fn encoding_writes_resource_type_first() {
        let value = json!({"id": "1", "resourceType": "Basic"});
        let resource = Resource::from_json_with(&value, &DecodeOptions::default()).unwrap();
        let encoded = resource.encode_object();
        assert_eq!(encoded.keys().next().map(String::as_str), Some("resourceType"));
    }

    #[test]
    fn unknown_resource_type_is_located() {
        let value = json!({"resourceType": "NotAResource"});
        let err: DecodeError =
            Resource::from_json_with(&value, &DecodeOptions::default()).unwrap_err();
        assert_eq!(
            err.kind,
            DecodeErrorKind::UnknownResourceType("NotAResource".to_string())
        );
        assert_eq!(err.path, "/resourceType");
    }

    #[test]
    fn serde_goes_through_the_codec() {
        let value = json!({"resourceType": "Binary", "contentType": "text/plain", "data": "aGk="});
        let resource: Resource = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(serde_json::to_value(&resource).unwrap(), value);
    }
}
