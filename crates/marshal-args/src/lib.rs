//! Marshal typed option structs into command-line argument vectors.
//!
//! Instead of concatenating flag strings by hand, callers describe an
//! invocation as a plain struct and let this crate produce the exact
//! argument vector the external tool expects.
//!
//! # Quick Start
//!
//! ```rust
//! use marshal_args::{MarshalArgs, YesNo, YES};
//!
//! #[derive(MarshalArgs, Default)]
//! pub struct Credentials {
//!     #[argv("--user")]
//!     pub user: String,
//!     #[argv("--password")]
//!     pub password: String,
//! }
//!
//! #[derive(MarshalArgs, Default)]
//! pub struct CopyOptions {
//!     #[argv(flatten)]
//!     pub credentials: Credentials,
//!     #[argv("--verbose")]
//!     pub verbose: Option<YesNo>,
//!     #[argv(1)]
//!     pub file: String,
//!     #[argv(0)]
//!     pub destination: String,
//!     #[argv("--repeated")]
//!     pub repeated: Vec<String>,
//! }
//!
//! let opts = CopyOptions {
//!     credentials: Credentials { user: "root".into(), ..Default::default() },
//!     verbose: YES,
//!     file: "/tmp/foo".into(),
//!     destination: "/tmp/bar".into(),
//!     repeated: vec!["foo".into(), "bar".into()],
//! };
//!
//! assert_eq!(
//!     opts.marshal_args(),
//!     [
//!         "--user=root",
//!         "--verbose=y",
//!         "--repeated=foo",
//!         "--repeated=bar",
//!         "/tmp/bar",
//!         "/tmp/foo",
//!     ]
//! );
//! ```
//!
//! # Output Layout
//!
//! ```text
//! argv = named tokens (declaration order, flattened structs inline)
//!      ++ positional tokens (ascending slot index)
//! ```
//!
//! Fields holding the zero value of their shape are omitted.
//!
//! # Field Shapes
//!
//! | Shape | Positional | Named |
//! |-------|------------|-------|
//! | `bool` | `true` / `false` | bare `tag` when true |
//! | integers | decimal text | `tag=<n>` |
//! | `String`, `&str` | verbatim | `tag=<text>` |
//! | `Vec<String>`, `Vec<&str>` | successive slots | one `tag=<item>` per item |
//! | [`ArgText`] types | rendered text | `tag=<text>` |
//!
//! `Option<T>` encodes like `T`; only `None` counts as empty.

// Lets the derive's `::marshal_args::` paths resolve inside this crate's own tests.
extern crate self as marshal_args;

mod encoder;
mod field;
mod tag;
mod value;
mod yesno;

pub use encoder::{marshal, Encoder, PositionalSlots};
pub use field::{Field, MarshalArgs};
pub use tag::Tag;
pub use value::{ArgText, ArgValue, Shape};
pub use yesno::{YesNo, NO, YES};

pub use marshal_args_macros::MarshalArgs;
