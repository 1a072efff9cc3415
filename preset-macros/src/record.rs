//! Record derive implementation
//!
//! Expands `#[derive(Record)]` into an `impl ::preset::Record` with three
//! parts:
//!
//! - `fields()` - a `'static` table of `FieldDecl`s in declaration order
//! - `zeroed()` - the struct with every field at `Default::default()`
//! - `assign()` - one match arm per field index, moving a `Value` into the
//!   field through `preset::Primitive`
//!
//! Field kinds are classified syntactically by
//! [`preset_macros_support::classify`]; anything it does not recognise is
//! declared `Kind::Unsupported` and never receives a default.

use darling::ast::{Data, Fields, Style};
use darling::util::Ignored;
use darling::{FromDeriveInput, FromField};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{parse_quote, DeriveInput, GenericParam, Ident, Index, Member, Type, Visibility};

use preset_macros_support::{classify, field_name, is_writable, FieldKind};

/// Derive input accepted by `#[derive(Record)]`
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(preset), supports(struct_any))]
struct RecordInput {
    ident: Ident,
    generics: syn::Generics,
    data: Data<Ignored, RecordField>,
}

/// One struct field and its `#[preset(...)]` options
#[derive(Debug, FromField)]
#[darling(attributes(preset))]
struct RecordField {
    ident: Option<Ident>,
    ty: Type,
    vis: Visibility,

    /// Default value in textual form
    #[darling(default, rename = "default")]
    default_text: Option<String>,
}

/// Everything the generated impl needs to know about one field
struct FieldInfo {
    name: String,
    member: Member,
    ty: Type,
    kind: FieldKind,
    default_text: Option<String>,
    writable: bool,
}

/// Expands `#[derive(Record)]`
pub fn expand_record(input: DeriveInput) -> syn::Result<TokenStream> {
    let input = RecordInput::from_derive_input(&input)
        .map_err(|e| syn::Error::new_spanned(&input.ident, e.to_string()))?;

    if let Some(lifetime) = input.generics.lifetimes().next() {
        return Err(syn::Error::new_spanned(
            lifetime,
            "#[derive(Record)] does not support lifetime parameters",
        ));
    }

    let ident = &input.ident;
    let fields = input
        .data
        .take_struct()
        .ok_or_else(|| syn::Error::new_spanned(ident, "#[derive(Record)] only supports structs"))?;
    let style = fields.style;
    let infos = collect_fields(fields);

    let generics = with_record_bounds(input.generics.clone());
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let decls = infos.iter().map(generate_decl);
    let zeroed = generate_zeroed(style, &infos);
    let arms = infos.iter().enumerate().map(|(index, info)| generate_assign_arm(index, info));
    let len = infos.len();

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::preset::Record for #ident #ty_generics #where_clause {
            fn fields() -> &'static [::preset::FieldDecl] {
                const FIELDS: &[::preset::FieldDecl] = &[#(#decls),*];
                FIELDS
            }

            fn zeroed() -> Self {
                #zeroed
            }

            #[allow(unused_variables)]
            fn assign(
                &mut self,
                index: usize,
                value: ::preset::Value,
            ) -> ::core::result::Result<(), ::preset::AssignError> {
                match index {
                    #(#arms)*
                    _ => ::core::result::Result::Err(::preset::AssignError::OutOfRange {
                        index,
                        len: #len,
                    }),
                }
            }
        }
    })
}

/// Flatten darling's field list into per-field info, in declaration order
fn collect_fields(fields: Fields<RecordField>) -> Vec<FieldInfo> {
    fields
        .fields
        .into_iter()
        .enumerate()
        .map(|(index, field)| FieldInfo {
            name: field_name(field.ident.as_ref(), index),
            member: match field.ident {
                Some(ident) => Member::Named(ident),
                None => Member::Unnamed(Index::from(index)),
            },
            kind: classify(&field.ty),
            writable: is_writable(&field.vis),
            ty: field.ty,
            default_text: field.default_text,
        })
        .collect()
}

/// Bounds every type parameter by `'static`, which `Record: 'static` needs,
/// and by `Default`, which `zeroed()` needs for fields of that type.
fn with_record_bounds(mut generics: syn::Generics) -> syn::Generics {
    for param in &mut generics.params {
        if let GenericParam::Type(type_param) = param {
            type_param.bounds.push(parse_quote!('static));
            type_param.bounds.push(parse_quote!(::core::default::Default));
        }
    }
    generics
}

fn kind_path(kind: FieldKind) -> TokenStream {
    let variant = format_ident!("{}", kind.variant_name());
    quote!(::preset::Kind::#variant)
}

/// Generate the `FieldDecl` for one field
fn generate_decl(info: &FieldInfo) -> TokenStream {
    let name = &info.name;
    let kind = kind_path(info.kind);
    let writable = info.writable;
    let default_text = match &info.default_text {
        Some(text) => quote!(::core::option::Option::Some(#text)),
        None => quote!(::core::option::Option::None),
    };

    quote! {
        ::preset::FieldDecl::new(#name, #kind, #default_text, #writable)
    }
}

/// Generate the body of `zeroed()`
fn generate_zeroed(style: Style, infos: &[FieldInfo]) -> TokenStream {
    let zero = quote!(::core::default::Default::default());
    match style {
        Style::Struct => {
            let inits = infos.iter().map(|info| {
                let member = &info.member;
                quote!(#member: #zero)
            });
            quote!(Self { #(#inits),* })
        },
        Style::Tuple => {
            let zeros = infos.iter().map(|_| &zero);
            quote!(Self(#(#zeros),*))
        },
        Style::Unit => quote!(Self),
    }
}

/// Generate the `assign()` match arm for the field at `index`
fn generate_assign_arm(index: usize, info: &FieldInfo) -> TokenStream {
    let name = &info.name;

    if !info.writable {
        return quote! {
            #index => ::core::result::Result::Err(::preset::AssignError::NotWritable {
                field: #name,
            }),
        };
    }

    if !info.kind.is_supported() {
        return quote! {
            #index => ::core::result::Result::Err(::preset::AssignError::Unsupported {
                field: #name,
            }),
        };
    }

    let member = &info.member;
    let ty = &info.ty;
    let kind = kind_path(info.kind);
    quote! {
        #index => {
            self.#member = <#ty as ::preset::Primitive>::from_value(value).map_err(|found| {
                ::preset::AssignError::KindMismatch {
                    field: #name,
                    expected: #kind,
                    found: found.kind(),
                }
            })?;
            ::core::result::Result::Ok(())
        },
    }
}
