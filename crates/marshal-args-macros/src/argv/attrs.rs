//! Attribute parsing for the MarshalArgs derive macro.
//!
//! Parses the `#[argv(...)]` field attribute.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    spanned::Spanned,
    Attribute, Error, Ident, LitInt, LitStr, Result,
};

/// Tag of an argument field, resolved at compile time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgTag {
    /// `#[argv("--flag")]`
    Named(String),
    /// `#[argv(0)]` or `#[argv("0")]`
    Positional(usize),
}

impl ArgTag {
    /// Interpret tag text: a non-negative decimal integer is a slot index.
    pub fn from_text(text: &str) -> Self {
        match text.parse::<usize>() {
            Ok(pos) => ArgTag::Positional(pos),
            Err(_) => ArgTag::Named(text.to_string()),
        }
    }

    /// Expression building the runtime `Tag`.
    pub fn to_tokens(&self) -> TokenStream {
        match self {
            ArgTag::Named(flag) => quote! { ::marshal_args::Tag::Named(#flag) },
            ArgTag::Positional(pos) => quote! { ::marshal_args::Tag::Positional(#pos) },
        }
    }
}

/// Field-level attribute from `#[argv(...)]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgvAttr {
    /// The field is an argument.
    Tag(ArgTag),
    /// The field is a nested option struct spliced in place.
    Flatten,
}

impl Parse for ArgvAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let lookahead = input.lookahead1();

        let attr = if lookahead.peek(LitStr) {
            let lit: LitStr = input.parse()?;
            let text = lit.value();
            if text.is_empty() {
                return Err(Error::new(lit.span(), "argv tag must not be empty"));
            }
            ArgvAttr::Tag(ArgTag::from_text(&text))
        } else if lookahead.peek(LitInt) {
            let lit: LitInt = input.parse()?;
            ArgvAttr::Tag(ArgTag::Positional(lit.base10_parse::<usize>()?))
        } else if lookahead.peek(Ident) {
            let ident: Ident = input.parse()?;
            if ident != "flatten" {
                return Err(Error::new(
                    ident.span(),
                    format!(
                        "unknown argv attribute: '{}'. Expected a flag string, a slot index, or flatten",
                        ident
                    ),
                ));
            }
            ArgvAttr::Flatten
        } else {
            return Err(lookahead.error());
        };

        if !input.is_empty() {
            return Err(input.error("unexpected tokens after argv attribute"));
        }

        Ok(attr)
    }
}

/// Extract the `#[argv(...)]` attribute from a field's attributes.
///
/// Returns `None` for fields without one.
pub fn parse_argv_attrs(attrs: &[Attribute]) -> Result<Option<ArgvAttr>> {
    let mut found = None;

    for attr in attrs {
        if !attr.path().is_ident("argv") {
            continue;
        }
        if found.is_some() {
            return Err(Error::new(attr.span(), "duplicate argv attribute"));
        }
        found = Some(attr.parse_args::<ArgvAttr>()?);
    }

    Ok(found)
}
