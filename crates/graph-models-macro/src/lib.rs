//! # Graph Models Procedural Macros
//!
//! Declares Microsoft Graph wire types. Generated code refers to the runtime
//! through `::graph_models`, so these macros are used via the `graph-models`
//! crate rather than directly.
//!
//! ## Main Macros
//!
//! - `#[model]` - Attribute macro for entity and complex types
//! - `define_family!` - Function-like macro for discriminated families
//!
//! ## Models
//!
//! ```ignore
//! /// A sponsor drawn from an attribute rule.
//! #[model(odata_type = "#microsoft.graph.attributeRuleMembers")]
//! pub struct AttributeRuleMembers {
//!     pub description: Option<String>,
//!     pub membership_rule: Option<String>,
//! }
//! ```
//!
//! Every property must be an `Option`. The macro adds the `@odata.type`
//! property at the front and an additional-data map at the back, so unknown
//! keys survive a decode and encode unchanged.
//!
//! Inherited properties are declared once in a field group and flattened into
//! each concrete type:
//!
//! ```ignore
//! #[model(fields)]
//! pub struct DirectoryObjectFields {
//!     pub id: Option<String>,
//!     pub deleted_date_time: Option<DateTimeOffset>,
//! }
//!
//! #[model(odata_type = "#microsoft.graph.application")]
//! pub struct Application {
//!     #[serde(flatten)]
//!     pub base: DirectoryObjectFields,
//!     pub app_id: Option<String>,
//! }
//! ```
//!
//! ## Families
//!
//! ```ignore
//! define_family! {
//!     pub DirectoryObject(DirectoryObjectBase) {
//!         "#microsoft.graph.application" => Application,
//!         "#microsoft.graph.servicePrincipal" => ServicePrincipal,
//!     }
//! }
//! ```

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{
    Attribute, Error, Fields, Ident, ItemStruct, LitStr, PathArguments, Result, Token, Type,
    Visibility, meta::ParseNestedMeta, parse::ParseStream, parse_macro_input, parse_quote,
    punctuated::Punctuated, spanned::Spanned,
};

/// Property names the `#[model]` expansion injects itself.
const RESERVED_FIELDS: [&str; 2] = ["odata_type", "additional_data"];

/// Arguments accepted by `#[model(...)]`.
#[derive(Default)]
struct ModelArgs {
    /// Discriminator written to `@odata.type`.
    odata_type: Option<LitStr>,
    /// Declares a field group rather than a standalone model.
    fields: bool,
}

impl ModelArgs {
    fn parse(&mut self, meta: &ParseNestedMeta) -> Result<()> {
        if meta.path.is_ident("odata_type") {
            let tag: LitStr = meta.value()?.parse()?;
            if !tag.value().starts_with('#') {
                return Err(Error::new(tag.span(), "odata_type must start with '#'"));
            }
            self.odata_type = Some(tag);
            Ok(())
        } else if meta.path.is_ident("fields") {
            self.fields = true;
            Ok(())
        } else {
            Err(meta.error("unsupported model argument, expected `odata_type = \"...\"` or `fields`"))
        }
    }
}

/// Serde flags already present on a field.
#[derive(Default)]
struct SerdeFlags {
    flatten: bool,
    default: bool,
    skip_serializing_if: bool,
}

/// Reads the `#[serde(...)]` attributes of a field.
fn serde_flags(attrs: &[Attribute]) -> Result<SerdeFlags> {
    let mut flags = SerdeFlags::default();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("serde")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("flatten") {
                flags.flatten = true;
            } else if meta.path.is_ident("default") {
                flags.default = true;
            } else if meta.path.is_ident("skip_serializing_if") {
                flags.skip_serializing_if = true;
            }

            if meta.input.peek(Token![=]) {
                meta.value()?.parse::<syn::Expr>()?;
            } else if meta.input.peek(syn::token::Paren) {
                meta.input.parse::<proc_macro2::TokenTree>()?;
            }
            Ok(())
        })?;
    }

    Ok(flags)
}

fn is_option(ty: &Type) -> bool {
    let Type::Path(path) = ty else {
        return false;
    };
    path.qself.is_none()
        && path.path.segments.last().is_some_and(|segment| {
            segment.ident == "Option" && matches!(segment.arguments, PathArguments::AngleBracketed(_))
        })
}

/// Attribute macro for Graph entity and complex types.
///
/// - `#[model]` declares a type with no discriminator
/// - `#[model(odata_type = "#microsoft.graph.x")]` declares its tag
/// - `#[model(fields)]` declares a flat group of inherited properties
///
/// # Errors
///
/// Returns a compile error if:
/// - The struct is generic or has unnamed fields
/// - A property is not an `Option`
/// - A property uses a reserved name (`odata_type`, `additional_data`)
/// - More than one field is flattened, or a field group flattens at all
#[proc_macro_attribute]
pub fn model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let mut args = ModelArgs::default();
    let parser = syn::meta::parser(|meta| args.parse(&meta));
    parse_macro_input!(attr with parser);

    let item = parse_macro_input!(item as ItemStruct);

    match expand_model(&args, &item) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

/// Expands a `#[model]` attribute into the rewritten struct and its impls.
///
/// # Errors
///
/// See [`model`].
fn expand_model(args: &ModelArgs, item: &ItemStruct) -> Result<proc_macro2::TokenStream> {
    let ident = &item.ident;
    let name = ident.to_string();

    if !item.generics.params.is_empty() || item.generics.where_clause.is_some() {
        return Err(Error::new(item.generics.span(), "#[model] does not support generics"));
    }
    if args.fields && args.odata_type.is_some() {
        return Err(Error::new(ident.span(), "field groups carry no odata_type"));
    }

    let Fields::Named(named) = &item.fields else {
        return Err(Error::new(
            ident.span(),
            "#[model] requires a struct with named fields",
        ));
    };

    let mut fields = Vec::with_capacity(named.named.len());
    let mut flattened: Option<&Ident> = None;

    for field in &named.named {
        let field_ident = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new(field.span(), "expected a named field"))?;

        if RESERVED_FIELDS.iter().any(|reserved| field_ident == reserved) {
            return Err(Error::new(
                field_ident.span(),
                format!("`{field_ident}` is generated by #[model] and cannot be declared"),
            ));
        }

        let flags = serde_flags(&field.attrs)?;
        let mut field = field.clone();

        if flags.flatten {
            if args.fields {
                return Err(Error::new(
                    field_ident.span(),
                    "field groups must list inherited properties directly, not flatten",
                ));
            }
            if let Some(previous) = flattened {
                return Err(Error::new(
                    field_ident.span(),
                    format!("only one field group may be flattened, `{previous}` already is"),
                ));
            }
            flattened = Some(field_ident);
        } else {
            if !is_option(&field.ty) {
                return Err(Error::new(
                    field.ty.span(),
                    "model properties must be `Option<T>`",
                ));
            }

            let mut missing = Vec::new();
            if !flags.default {
                missing.push(quote!(default));
            }
            if !flags.skip_serializing_if {
                missing.push(quote!(skip_serializing_if = "Option::is_none"));
            }
            if !missing.is_empty() {
                field.attrs.push(parse_quote!(#[serde(#(#missing),*)]));
            }
        }

        fields.push(field);
    }

    let attrs = &item.attrs;
    let vis = &item.vis;

    let derives = quote! {
        ::core::fmt::Debug,
        ::core::clone::Clone,
        ::core::cmp::PartialEq,
        ::graph_models::__private::serde::Serialize,
        ::graph_models::__private::serde::Deserialize,
        ::graph_models::__private::schemars::JsonSchema
    };
    let container_attrs = quote! {
        #[serde(crate = "::graph_models::__private::serde", rename_all = "camelCase")]
        #[schemars(crate = "::graph_models::__private::schemars")]
    };

    if args.fields {
        return Ok(quote! {
            #(#attrs)*
            #[derive(#derives, ::core::default::Default)]
            #container_attrs
            #vis struct #ident {
                #(#fields,)*
            }
        });
    }

    let field_idents: Vec<_> = fields.iter().filter_map(|field| field.ident.as_ref()).collect();
    let odata_type = match &args.odata_type {
        Some(tag) => quote!(::core::option::Option::Some(#tag)),
        None => quote!(::core::option::Option::None),
    };

    Ok(quote! {
        #(#attrs)*
        #[derive(#derives)]
        #container_attrs
        #vis struct #ident {
            #[serde(rename = "@odata.type", default, skip_serializing_if = "Option::is_none")]
            pub odata_type: ::core::option::Option<::std::string::String>,
            #(#fields,)*
            #[serde(flatten)]
            pub additional_data: ::graph_models::AdditionalData,
        }

        impl ::core::default::Default for #ident {
            fn default() -> Self {
                Self {
                    odata_type: <Self as ::graph_models::Model>::ODATA_TYPE
                        .map(::std::borrow::ToOwned::to_owned),
                    #(#field_idents: ::core::default::Default::default(),)*
                    additional_data: ::core::default::Default::default(),
                }
            }
        }

        impl #ident {
            /// Creates an empty instance carrying the type's discriminator.
            #[must_use]
            pub fn new() -> Self {
                <Self as ::core::default::Default>::default()
            }
        }

        impl ::graph_models::AdditionalDataHolder for #ident {
            fn additional_data(&self) -> &::graph_models::AdditionalData {
                &self.additional_data
            }

            fn additional_data_mut(&mut self) -> &mut ::graph_models::AdditionalData {
                &mut self.additional_data
            }
        }

        impl ::graph_models::Model for #ident {
            const MODEL_NAME: &'static str = #name;
            const ODATA_TYPE: ::core::option::Option<&'static str> = #odata_type;

            fn odata_type(&self) -> ::core::option::Option<&str> {
                self.odata_type.as_deref()
            }
        }

        // Sealed token prevents external construction of ModelEntry
        ::graph_models::__private::inventory::submit! {
            ::graph_models::__private::ModelEntry {
                name: #name,
                odata_type: <#ident as ::graph_models::Model>::ODATA_TYPE,
                kind: ::graph_models::__private::ModelKind::Model,
                discriminators: &[],
                roundtrip_fn: ::graph_models::__private::roundtrip_value::<#ident>,
                summary_fn: ::graph_models::__private::summarize::<#ident>,
                schema_fn: ::graph_models::__private::schema_value::<#ident>,
                __sealed: ::graph_models::__private::sealed(),
            }
        }
    })
}

/// Declares a discriminated family over a base type and its subtypes.
///
/// ```ignore
/// define_family! {
///     /// Any subject set.
///     pub SubjectSet(SubjectSetBase) {
///         "#microsoft.graph.singleUser" => SingleUser,
///         "#microsoft.graph.groupMembers" => GroupMembers,
///     }
/// }
/// ```
///
/// This macro generates:
/// - An enum with a `Base` variant plus one variant per listed type
/// - A decode that dispatches on `@odata.type` and falls back to `Base`
/// - Serde and schema impls, delegating to the active variant
/// - A compile-time check that each tag matches the variant's `odata_type`
/// - Registration with the model inventory
#[proc_macro]
pub fn define_family(input: TokenStream) -> TokenStream {
    let def = parse_macro_input!(input as FamilyDef);

    match expand_family(&def) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

/// Parsed family definition from the macro input.
struct FamilyDef {
    attrs: Vec<Attribute>,
    vis: Visibility,
    /// Name of the generated enum
    name: Ident,
    /// Type decoded when the tag is absent or unrecognized
    base: Ident,
    variants: Vec<FamilyVariant>,
}

/// One `"#tag" => Type` line.
struct FamilyVariant {
    tag: LitStr,
    ty: Ident,
}

impl syn::parse::Parse for FamilyVariant {
    fn parse(input: ParseStream) -> Result<Self> {
        let tag: LitStr = input.parse()?;
        input.parse::<Token![=>]>()?;
        let ty: Ident = input.parse()?;
        Ok(Self { tag, ty })
    }
}

impl syn::parse::Parse for FamilyDef {
    fn parse(input: ParseStream) -> Result<Self> {
        // Parse: vis Name(Base) { "#tag" => Variant, ... }
        let attrs = input.call(Attribute::parse_outer)?;
        let vis: Visibility = input.parse()?;
        let name: Ident = input.parse()?;

        let base_content;
        syn::parenthesized!(base_content in input);
        let base: Ident = base_content.parse()?;

        let variants_content;
        syn::braced!(variants_content in input);
        let variants =
            Punctuated::<FamilyVariant, Token![,]>::parse_terminated(&variants_content)?;

        Ok(Self {
            attrs,
            vis,
            name,
            base,
            variants: variants.into_iter().collect(),
        })
    }
}

/// Expands a family definition into the enum and its impls.
///
/// # Errors
///
/// Returns an error if a tag is malformed or repeated, or a variant type is
/// listed twice or named `Base`.
fn expand_family(def: &FamilyDef) -> Result<proc_macro2::TokenStream> {
    let FamilyDef {
        attrs,
        vis,
        name,
        base,
        variants,
    } = def;
    let name_str = name.to_string();

    if variants.is_empty() {
        return Err(Error::new(name.span(), "a family needs at least one subtype"));
    }

    for (index, variant) in variants.iter().enumerate() {
        if !variant.tag.value().starts_with('#') {
            return Err(Error::new(variant.tag.span(), "discriminators must start with '#'"));
        }
        if variant.ty == "Base" {
            return Err(Error::new(variant.ty.span(), "`Base` is reserved for the base variant"));
        }
        for earlier in &variants[..index] {
            if earlier.tag.value() == variant.tag.value() {
                return Err(Error::new(variant.tag.span(), "discriminator listed twice"));
            }
            if earlier.ty == variant.ty {
                return Err(Error::new(variant.ty.span(), "subtype listed twice"));
            }
        }
    }

    let tags: Vec<_> = variants.iter().map(|variant| &variant.tag).collect();
    let types: Vec<_> = variants.iter().map(|variant| &variant.ty).collect();
    let tag_checks = variants.iter().map(|variant| {
        let FamilyVariant { tag, ty } = variant;
        let message = LitStr::new(
            &format!("{ty} must declare odata_type = \"{}\"", tag.value()),
            Span::call_site(),
        );
        quote! {
            ::core::assert!(
                ::graph_models::__private::tag_matches(<#ty as ::graph_models::Model>::ODATA_TYPE, #tag),
                #message
            );
        }
    });

    Ok(quote! {
        #(#attrs)*
        #[derive(::core::fmt::Debug, ::core::clone::Clone, ::core::cmp::PartialEq)]
        #[allow(clippy::large_enum_variant, reason = "variants mirror Graph subtypes")]
        #vis enum #name {
            /// Absent or unrecognized discriminator.
            Base(#base),
            #(#types(#types),)*
        }

        const _: () = {
            #(#tag_checks)*
        };

        impl #name {
            /// Tags this family dispatches on, in declaration order.
            pub const DISCRIMINATORS: &'static [&'static str] = &[#(#tags),*];

            /// Decodes a JSON value, choosing the variant from `@odata.type`.
            ///
            /// # Errors
            ///
            /// Returns an error if the value is not an object, its tag is not a
            /// string, or the selected variant fails to decode.
            pub fn from_value(
                value: ::graph_models::__private::serde_json::Value,
            ) -> ::graph_models::Result<Self> {
                let tag = ::graph_models::__private::discriminator_of(&value, #name_str)?
                    .map(::std::borrow::ToOwned::to_owned);
                match tag.as_deref() {
                    #(::core::option::Option::Some(#tags) => {
                        ::graph_models::__private::decode_value(value).map(Self::#types)
                    })*
                    other => {
                        ::graph_models::__private::note_fallback(
                            #name_str,
                            other,
                            <#base as ::graph_models::Model>::ODATA_TYPE,
                        );
                        ::graph_models::__private::decode_value(value).map(Self::Base)
                    }
                }
            }

            /// Name of the concrete type held.
            pub fn variant_name(&self) -> &'static str {
                match self {
                    Self::Base(_) => <#base as ::graph_models::Model>::MODEL_NAME,
                    #(Self::#types(_) => <#types as ::graph_models::Model>::MODEL_NAME,)*
                }
            }
        }

        impl ::core::default::Default for #name {
            fn default() -> Self {
                Self::Base(::core::default::Default::default())
            }
        }

        impl ::core::convert::From<#base> for #name {
            fn from(inner: #base) -> Self {
                Self::Base(inner)
            }
        }

        #(
            impl ::core::convert::From<#types> for #name {
                fn from(inner: #types) -> Self {
                    Self::#types(inner)
                }
            }
        )*

        impl ::graph_models::__private::serde::Serialize for #name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: ::graph_models::__private::serde::Serializer,
            {
                match self {
                    Self::Base(inner) => {
                        ::graph_models::__private::serde::Serialize::serialize(inner, serializer)
                    }
                    #(Self::#types(inner) => {
                        ::graph_models::__private::serde::Serialize::serialize(inner, serializer)
                    })*
                }
            }
        }

        impl<'de> ::graph_models::__private::serde::Deserialize<'de> for #name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: ::graph_models::__private::serde::Deserializer<'de>,
            {
                let value = <::graph_models::__private::serde_json::Value
                    as ::graph_models::__private::serde::Deserialize>::deserialize(deserializer)?;
                Self::from_value(value)
                    .map_err(<D::Error as ::graph_models::__private::serde::de::Error>::custom)
            }
        }

        impl ::graph_models::__private::schemars::JsonSchema for #name {
            fn schema_name() -> ::std::borrow::Cow<'static, str> {
                ::std::borrow::Cow::Borrowed(#name_str)
            }

            fn json_schema(
                generator: &mut ::graph_models::__private::schemars::SchemaGenerator,
            ) -> ::graph_models::__private::schemars::Schema {
                ::graph_models::__private::schemars::json_schema!({
                    "anyOf": [
                        generator.subschema_for::<#base>(),
                        #(generator.subschema_for::<#types>(),)*
                    ]
                })
            }
        }

        impl ::graph_models::AdditionalDataHolder for #name {
            fn additional_data(&self) -> &::graph_models::AdditionalData {
                match self {
                    Self::Base(inner) => ::graph_models::AdditionalDataHolder::additional_data(inner),
                    #(Self::#types(inner) => ::graph_models::AdditionalDataHolder::additional_data(inner),)*
                }
            }

            fn additional_data_mut(&mut self) -> &mut ::graph_models::AdditionalData {
                match self {
                    Self::Base(inner) => ::graph_models::AdditionalDataHolder::additional_data_mut(inner),
                    #(Self::#types(inner) => ::graph_models::AdditionalDataHolder::additional_data_mut(inner),)*
                }
            }
        }

        impl ::graph_models::Model for #name {
            const MODEL_NAME: &'static str = #name_str;
            const ODATA_TYPE: ::core::option::Option<&'static str> =
                <#base as ::graph_models::Model>::ODATA_TYPE;

            fn odata_type(&self) -> ::core::option::Option<&str> {
                match self {
                    Self::Base(inner) => ::graph_models::Model::odata_type(inner),
                    #(Self::#types(inner) => ::graph_models::Model::odata_type(inner),)*
                }
            }

            fn model_name(&self) -> &'static str {
                self.variant_name()
            }
        }

        // Sealed token prevents external construction of ModelEntry
        ::graph_models::__private::inventory::submit! {
            ::graph_models::__private::ModelEntry {
                name: #name_str,
                odata_type: <#base as ::graph_models::Model>::ODATA_TYPE,
                kind: ::graph_models::__private::ModelKind::Family,
                discriminators: #name::DISCRIMINATORS,
                roundtrip_fn: ::graph_models::__private::roundtrip_value::<#name>,
                summary_fn: ::graph_models::__private::summarize::<#name>,
                schema_fn: ::graph_models::__private::schema_value::<#name>,
                __sealed: ::graph_models::__private::sealed(),
            }
        }
    })
}
