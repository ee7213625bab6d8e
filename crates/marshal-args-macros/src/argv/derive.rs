//! Implementation of the `#[derive(MarshalArgs)]` macro.
//!
//! Generates `MarshalArgs::arg_fields`, listing tagged fields in declaration
//! order and splicing `#[argv(flatten)]` fields in place.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{ext::IdentExt, spanned::Spanned, Data, DeriveInput, Error, Fields, Result, Visibility};

use super::attrs::{parse_argv_attrs, ArgvAttr};

/// Main implementation of the MarshalArgs derive macro.
pub fn marshal_args_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(Error::new(
                    input.span(),
                    "MarshalArgs can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new(
                input.span(),
                "MarshalArgs can only be derived for structs",
            ))
        }
    };

    let mut pushes: Vec<TokenStream> = Vec::new();

    for field in fields.iter() {
        let field_name = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new(field.span(), "expected named field"))?;

        let attr = match parse_argv_attrs(&field.attrs)? {
            Some(attr) => attr,
            None => continue,
        };

        match attr {
            ArgvAttr::Flatten => {
                pushes.push(quote! {
                    fields.extend(::marshal_args::MarshalArgs::arg_fields(&self.#field_name));
                });
            }
            ArgvAttr::Tag(tag) => {
                let name = field_name.unraw().to_string();
                let tag = tag.to_tokens();
                // Private fields are described but never encoded.
                let hidden = match field.vis {
                    Visibility::Inherited => quote! { .hidden() },
                    _ => quote! {},
                };
                pushes.push(quote! {
                    fields.push(::marshal_args::Field::new(#name, #tag, &self.#field_name)#hidden);
                });
            }
        }
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::marshal_args::MarshalArgs for #struct_name #ty_generics #where_clause {
            #[allow(unused_mut)]
            fn arg_fields(&self) -> ::std::vec::Vec<::marshal_args::Field<'_>> {
                let mut fields = ::std::vec::Vec::new();
                #(#pushes)*
                fields
            }
        }
    };

    Ok(expanded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(input: DeriveInput) -> Result<String> {
        marshal_args_derive_impl(input).map(|tokens| tokens.to_string())
    }

    #[test]
    fn test_rejects_enum() {
        let err = expand(syn::parse_quote! {
            enum Mode { A, B }
        })
        .unwrap_err();
        assert!(err.to_string().contains("only be derived for structs"));
    }

    #[test]
    fn test_rejects_tuple_struct() {
        let err = expand(syn::parse_quote! {
            struct Pair(#[argv(0)] String, #[argv(1)] String);
        })
        .unwrap_err();
        assert!(err.to_string().contains("named fields"));
    }

    #[test]
    fn test_untagged_fields_are_ignored() {
        let out = expand(syn::parse_quote! {
            pub struct Opts {
                pub note: String,
                #[argv("--size")]
                pub size: String,
            }
        })
        .unwrap();
        assert!(out.contains("\"size\""));
        assert!(!out.contains("note"));
    }

    #[test]
    fn test_private_fields_are_hidden() {
        let out = expand(syn::parse_quote! {
            pub struct Opts {
                #[argv("--password")]
                password: String,
            }
        })
        .unwrap();
        assert!(out.contains("hidden"));
    }

    #[test]
    fn test_raw_identifiers_are_unrawed() {
        let out = expand(syn::parse_quote! {
            pub struct Opts {
                #[argv("--type")]
                pub r#type: String,
            }
        })
        .unwrap();
        assert!(out.contains("\"type\""));
    }

    #[test]
    fn test_flatten_delegates() {
        let out = expand(syn::parse_quote! {
            pub struct Opts {
                #[argv(flatten)]
                pub common: Common,
            }
        })
        .unwrap();
        assert!(out.contains("extend"));
        assert!(out.contains("common"));
        assert!(!out.contains("Field :: new"));
    }
}
