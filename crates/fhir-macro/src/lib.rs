//! Derive macros for the FHIR JSON codec.
//!
//! `#[derive(FhirJson)]` generates the field-by-field decoder and encoder of a
//! model struct; `#[derive(ChoiceType)]` generates the variant dispatch of a
//! `value[x]` style enum. The generated code goes through the reader and writer
//! in `meridian_fhir::codec`, so every struct shares one set of rules for
//! primitives, `_` companions, choice members and unknown fields.
//!
//! # Struct attributes
//!
//! - `#[fhir(resource = "Patient")]`: the struct is a resource; decoding checks
//!   `resourceType`, encoding writes it first, and `serde` impls are emitted.
//!
//! # Field attributes
//!
//! - no attribute: a complex element (`FhirJson`), single or list.
//! - `#[fhir(primitive)]`: an `Element<V, E>` with its `_` companion.
//! - `#[fhir(string)]`: a plain JSON string (`id` of elements and resources,
//!   `Extension.url`).
//! - `#[fhir(choice)]` or `#[fhir(choice = "stem")]`: a `stem[x]` member.
//! - `#[fhir(unknown)]`: the map receiving unrecognised members.
//! - `#[fhir(rename = "key")]`: overrides the lowerCamelCase JSON key.
//!
//! The field type decides cardinality: `Option<Vec<T>>` is a list,
//! `Option<T>` is optional and a bare `T` is required.

use heck::ToLowerCamelCase;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{
    Attribute, Data, DeriveInput, Fields, GenericArgument, Ident, LitStr, PathArguments, Type,
    parse_macro_input,
};

#[proc_macro_derive(FhirJson, attributes(fhir))]
pub fn derive_fhir_json(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_fhir_json(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

#[proc_macro_derive(ChoiceType, attributes(fhir))]
pub fn derive_choice_type(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_choice_type(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

#[derive(Default)]
struct ContainerAttrs {
    resource: Option<LitStr>,
}

fn container_attrs(attrs: &[Attribute]) -> syn::Result<ContainerAttrs> {
    let mut out = ContainerAttrs::default();
    for attr in attrs.iter().filter(|a| a.path().is_ident("fhir")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("resource") {
                out.resource = Some(meta.value()?.parse()?);
                Ok(())
            } else {
                Err(meta.error("unsupported #[fhir] container attribute"))
            }
        })?;
    }
    Ok(out)
}

enum FieldKind {
    Complex,
    Primitive,
    Str,
    Choice(Option<LitStr>),
    Unknown,
}

struct FieldAttrs {
    kind: FieldKind,
    rename: Option<LitStr>,
}

fn field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs {
        kind: FieldKind::Complex,
        rename: None,
    };
    for attr in attrs.iter().filter(|a| a.path().is_ident("fhir")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                out.rename = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("primitive") {
                out.kind = FieldKind::Primitive;
            } else if meta.path.is_ident("string") {
                out.kind = FieldKind::Str;
            } else if meta.path.is_ident("unknown") {
                out.kind = FieldKind::Unknown;
            } else if meta.path.is_ident("choice") {
                let stem = if meta.input.peek(syn::Token![=]) {
                    Some(meta.value()?.parse()?)
                } else {
                    None
                };
                out.kind = FieldKind::Choice(stem);
            } else {
                return Err(meta.error("unsupported #[fhir] field attribute"));
            }
            Ok(())
        })?;
    }
    Ok(out)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Shape {
    Required,
    Optional,
    List,
}

fn generic_arg<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    let Type::Path(path) = ty else {
        return None;
    };
    if path.qself.is_some() {
        return None;
    }
    let segment = path.path.segments.last()?;
    if segment.ident != wrapper {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    args.args.iter().find_map(|arg| match arg {
        GenericArgument::Type(ty) => Some(ty),
        _ => None,
    })
}

fn shape_of(ty: &Type) -> Shape {
    match generic_arg(ty, "Option") {
        Some(inner) if generic_arg(inner, "Vec").is_some() => Shape::List,
        Some(_) => Shape::Optional,
        None => Shape::Required,
    }
}

/// Picks the reader/writer method for a field; both sides share the name.
fn accessor(kind: &FieldKind, shape: Shape, span: proc_macro2::Span) -> syn::Result<Ident> {
    let name = match (kind, shape) {
        (FieldKind::Complex, Shape::Optional) => "complex",
        (FieldKind::Complex, Shape::Required) => "required_complex",
        (FieldKind::Complex, Shape::List) => "complex_list",
        (FieldKind::Primitive, Shape::Optional) => "primitive",
        (FieldKind::Primitive, Shape::Required) => "required_primitive",
        (FieldKind::Primitive, Shape::List) => "primitive_list",
        (FieldKind::Str, Shape::Optional) => "string",
        (FieldKind::Str, Shape::Required) => "required_string",
        (FieldKind::Choice(_), Shape::Optional) => "choice",
        (FieldKind::Choice(_), Shape::Required) => "required_choice",
        (FieldKind::Str, Shape::List) | (FieldKind::Choice(_), Shape::List) => {
            return Err(syn::Error::new(
                span,
                "string and choice fields cannot repeat",
            ));
        }
        (FieldKind::Unknown, _) => {
            return Err(syn::Error::new(span, "unknown fields are not accessed by key"));
        }
    };
    Ok(Ident::new(name, span))
}

fn expand_fhir_json(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new(
            input.span(),
            "FhirJson can only be derived for structs",
        ));
    };
    let Fields::Named(fields) = &data.fields else {
        return Err(syn::Error::new(
            input.span(),
            "FhirJson requires named fields",
        ));
    };

    let container = container_attrs(&input.attrs)?;
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let mut decode_lets = Vec::new();
    let mut inits = Vec::new();
    let mut encodes = Vec::new();
    let mut unknown: Option<&Ident> = None;

    for (index, field) in fields.named.iter().enumerate() {
        let ident = field
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new(field.span(), "expected a named field"))?;
        let attrs = field_attrs(&field.attrs)?;

        if let FieldKind::Unknown = attrs.kind {
            if unknown.is_some() {
                return Err(syn::Error::new(
                    field.span(),
                    "only one #[fhir(unknown)] field is allowed",
                ));
            }
            unknown = Some(ident);
            continue;
        }

        let default_key = ident.unraw().to_string().to_lower_camel_case();
        let key = match (&attrs.kind, &attrs.rename) {
            (FieldKind::Choice(Some(stem)), _) => stem.clone(),
            (_, Some(rename)) => rename.clone(),
            _ => LitStr::new(&default_key, ident.span()),
        };
        let method = accessor(&attrs.kind, shape_of(&field.ty), field.span())?;
        let var = format_ident!("__field{}", index);

        decode_lets.push(quote! { let #var = reader.#method(ctx, #key)?; });
        inits.push(quote! { #ident: #var });
        encodes.push(quote! { writer.#method(#key, &self.#ident); });
    }

    let finish_decode = match unknown {
        Some(ident) => {
            inits.push(quote! { #ident: __unknown });
            quote! { let __unknown = reader.finish(ctx)?; }
        }
        None => quote! { reader.finish(ctx)?; },
    };
    let finish_encode = match unknown {
        Some(ident) => quote! { writer.extend_unknown(&self.#ident); },
        None => quote! {},
    };

    let (check_type, new_writer, resource_impls) = match &container.resource {
        Some(resource_type) => (
            quote! { reader.expect_resource_type(ctx, #resource_type)?; },
            quote! { ::meridian_fhir::codec::ObjectWriter::resource(#resource_type) },
            resource_impls(name, resource_type),
        ),
        None => (
            quote! {},
            quote! { ::meridian_fhir::codec::ObjectWriter::new() },
            quote! {},
        ),
    };

    Ok(quote! {
        impl #impl_generics ::meridian_fhir::codec::FhirJson for #name #ty_generics #where_clause {
            fn decode_object(
                map: &::meridian_fhir::codec::JsonMap,
                ctx: &mut ::meridian_fhir::codec::DecodeContext<'_>,
            ) -> ::meridian_fhir::codec::DecodeResult<Self> {
                let mut reader = ::meridian_fhir::codec::ObjectReader::new(map);
                #check_type
                #(#decode_lets)*
                #finish_decode
                ::core::result::Result::Ok(Self { #(#inits),* })
            }

            fn encode_object(&self) -> ::meridian_fhir::codec::JsonMap {
                let mut writer = #new_writer;
                #(#encodes)*
                #finish_encode
                writer.finish()
            }
        }

        #resource_impls
    })
}

fn resource_impls(name: &Ident, resource_type: &LitStr) -> TokenStream2 {
    quote! {
        impl ::meridian_fhir::codec::ResourceKind for #name {
            const RESOURCE_TYPE: &'static str = #resource_type;
        }

        impl ::meridian_fhir::__private::serde::Serialize for #name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: ::meridian_fhir::__private::serde::Serializer,
            {
                ::meridian_fhir::codec::serialize_json(self, serializer)
            }
        }

        impl<'de> ::meridian_fhir::__private::serde::Deserialize<'de> for #name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: ::meridian_fhir::__private::serde::Deserializer<'de>,
            {
                ::meridian_fhir::codec::deserialize_json(deserializer)
            }
        }
    }
}

struct VariantAttrs {
    primitive: bool,
    type_name: Option<LitStr>,
}

fn variant_attrs(attrs: &[Attribute]) -> syn::Result<VariantAttrs> {
    let mut out = VariantAttrs {
        primitive: false,
        type_name: None,
    };
    for attr in attrs.iter().filter(|a| a.path().is_ident("fhir")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("primitive") {
                out.primitive = true;
            } else if meta.path.is_ident("type_name") {
                out.type_name = Some(meta.value()?.parse()?);
            } else {
                return Err(meta.error("unsupported #[fhir] variant attribute"));
            }
            Ok(())
        })?;
    }
    Ok(out)
}

fn expand_choice_type(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new(
            input.span(),
            "ChoiceType can only be derived for enums",
        ));
    };
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let mut type_names = Vec::new();
    let mut name_arms = Vec::new();
    let mut decode_arms = Vec::new();
    let mut encode_arms = Vec::new();

    for variant in &data.variants {
        match &variant.fields {
            Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {}
            _ => {
                return Err(syn::Error::new(
                    variant.span(),
                    "choice variants must wrap exactly one value",
                ));
            }
        }

        let attrs = variant_attrs(&variant.attrs)?;
        let ident = &variant.ident;
        // FHIR spells primitive type names in lowerCamelCase and complex ones in UpperCamelCase.
        let type_name = attrs.type_name.unwrap_or_else(|| {
            let spelled = if attrs.primitive {
                ident.to_string().to_lower_camel_case()
            } else {
                ident.to_string()
            };
            LitStr::new(&spelled, ident.span())
        });
        let (decode_fn, put) = if attrs.primitive {
            (
                quote! { ::meridian_fhir::codec::decode_primitive_variant },
                quote! { put_primitive },
            )
        } else {
            (
                quote! { ::meridian_fhir::codec::decode_complex_variant },
                quote! { put_complex },
            )
        };

        name_arms.push(quote! { Self::#ident(_) => #type_name });
        decode_arms.push(quote! {
            #type_name => ::core::result::Result::Ok(
                #decode_fn(ctx, key, value, companion)?.map(Self::#ident)
            )
        });
        encode_arms.push(quote! { Self::#ident(inner) => writer.#put(key, inner) });
        type_names.push(type_name);
    }

    Ok(quote! {
        impl #impl_generics ::meridian_fhir::codec::ChoiceType for #name #ty_generics #where_clause {
            const TYPE_NAMES: &'static [&'static str] = &[#(#type_names),*];

            fn type_name(&self) -> &'static str {
                match self {
                    #(#name_arms,)*
                }
            }

            fn decode_variant(
                ctx: &mut ::meridian_fhir::codec::DecodeContext<'_>,
                stem: &'static str,
                type_name: &str,
                key: &str,
                value: ::core::option::Option<&::meridian_fhir::codec::JsonValue>,
                companion: ::core::option::Option<&::meridian_fhir::codec::JsonValue>,
            ) -> ::meridian_fhir::codec::DecodeResult<::core::option::Option<Self>> {
                match type_name {
                    #(#decode_arms,)*
                    other => ::core::result::Result::Err(ctx.error_at(
                        key,
                        ::meridian_fhir::codec::DecodeErrorKind::UnknownVariant {
                            stem,
                            type_name: ::std::string::ToString::to_string(other),
                        },
                    )),
                }
            }

            fn encode_variant(&self, key: &str, writer: &mut ::meridian_fhir::codec::ObjectWriter) {
                match self {
                    #(#encode_arms,)*
                }
            }
        }
    })
}
