//! Attribute parsing and codegen for the `Reflect` derive.

use darling::{FromDeriveInput, FromField};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

/// Parsed derive input.
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(schema), supports(struct_named))]
struct ReflectArgs {
    ident: syn::Ident,
    generics: syn::Generics,
    data: darling::ast::Data<(), ReflectFieldArgs>,
}

/// Parsed `#[schema(...)]` attributes on one field. Every tag stays a plain
/// string; interpretation belongs to the runtime engine.
#[derive(Debug, FromField)]
#[darling(attributes(schema))]
struct ReflectFieldArgs {
    ident: Option<syn::Ident>,
    ty: syn::Type,
    vis: syn::Visibility,

    /// External property name, optionally suffixed `,omitempty`, or `-`.
    #[darling(default)]
    name: Option<String>,

    #[darling(default)]
    description: Option<String>,

    /// Boolean literal overriding computed requiredness.
    #[darling(default)]
    required: Option<String>,

    /// Comma-separated enum literal list (`enum` itself is a Rust keyword).
    #[darling(default)]
    values: Option<String>,

    #[darling(default)]
    default: Option<String>,

    /// Merge this field's own properties into the parent object.
    #[darling(default)]
    flatten: bool,
}

pub(crate) fn derive_reflect_impl(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let args = match ReflectArgs::from_derive_input(&input) {
        Ok(args) => args,
        Err(e) => return e.write_errors().into(),
    };
    expand(&args).into()
}

fn expand(args: &ReflectArgs) -> TokenStream {
    let ident = &args.ident;

    // The field table lives in a `static`, which cannot mention type
    // parameters. Generic parameter structs implement `Reflect` by hand.
    if !args.generics.params.is_empty() {
        return syn::Error::new_spanned(
            &args.generics,
            "`Reflect` cannot be derived for generic structs",
        )
        .to_compile_error();
    }

    let fields = match &args.data {
        darling::ast::Data::Struct(fields) => &fields.fields,
        // `supports(struct_named)` already rejected everything else.
        darling::ast::Data::Enum(_) => unreachable!(),
    };

    let entries: Vec<TokenStream> = fields
        .iter()
        .filter(|field| matches!(field.vis, syn::Visibility::Public(_)))
        .map(field_entry)
        .collect();

    quote! {
        #[automatically_derived]
        impl ::introspec_core::reflect::Reflect for #ident {
            fn shape() -> ::introspec_core::reflect::Shape {
                static FIELDS: &[::introspec_core::reflect::FieldShape] = &[
                    #(#entries),*
                ];
                ::introspec_core::reflect::Shape::Struct(::introspec_core::reflect::StructShape {
                    key: concat!(module_path!(), "::", stringify!(#ident)),
                    fields: FIELDS,
                })
            }
        }
    }
}

fn field_entry(field: &ReflectFieldArgs) -> TokenStream {
    let ident = field.ident.as_ref().expect("named field").to_string();
    let ty = &field.ty;

    let mut entry = quote! {
        ::introspec_core::reflect::FieldShape::new(
            #ident,
            <#ty as ::introspec_core::reflect::Reflect>::shape,
        )
    };
    if let Some(name) = &field.name {
        entry = quote! { #entry.with_name(#name) };
    }
    if let Some(description) = &field.description {
        entry = quote! { #entry.with_description(#description) };
    }
    if let Some(required) = &field.required {
        entry = quote! { #entry.with_required(#required) };
    }
    if let Some(values) = &field.values {
        entry = quote! { #entry.with_enum(#values) };
    }
    if let Some(default) = &field.default {
        entry = quote! { #entry.with_default(#default) };
    }
    if field.flatten {
        entry = quote! { #entry.flattened() };
    }
    entry
}
