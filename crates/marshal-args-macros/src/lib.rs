//! Proc macros for marshal-args.
//!
//! # Available Macros
//!
//! - [`MarshalArgs`] - Generate the argument field list of an option struct
//!
//! The generated code refers to `::marshal_args`, so use the derive through
//! the `marshal-args` crate, which re-exports it.

mod argv;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives `MarshalArgs` for a struct with named fields.
///
/// Fields opt in with `#[argv(...)]`:
///
/// | Attribute | Meaning |
/// |-----------|---------|
/// | `#[argv("--flag")]` | Named argument, emitted as `--flag` or `--flag=value` |
/// | `#[argv(0)]` / `#[argv("0")]` | Positional argument at slot 0 |
/// | `#[argv(flatten)]` | Splice the fields of a nested `MarshalArgs` struct here |
///
/// Fields without the attribute are ignored. Tagged fields that are not
/// `pub` are described as hidden and never encoded.
///
/// # Example
///
/// ```ignore
/// use marshal_args::{MarshalArgs, YesNo};
///
/// #[derive(MarshalArgs)]
/// pub struct CreateOptions {
///     #[argv(flatten)]
///     pub common: CommonOptions,
///     #[argv("--size")]
///     pub size: String,
///     #[argv("--activate")]
///     pub activate: Option<YesNo>,
///     #[argv(0)]
///     pub vg_name: String,
/// }
/// ```
///
/// # Compile-Time Errors
///
/// - Deriving on an enum, union, tuple struct or unit struct
/// - A field with more than one `#[argv]` attribute
/// - An `#[argv]` argument that is not a string, an integer or `flatten`
#[proc_macro_derive(MarshalArgs, attributes(argv))]
pub fn marshal_args_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    argv::marshal_args_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
