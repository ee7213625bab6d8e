//! Implementation of the `#[derive(MarshalArgs)]` macro.
//!
//! Replaces runtime field reflection with a generated, declaration-ordered
//! list of field descriptors.

mod attrs;
mod derive;

pub use derive::marshal_args_derive_impl;
