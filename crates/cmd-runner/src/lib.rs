//! Run external commands and capture their output.
//!
//! Only the standard output of a fully successful run is ever returned.
//! A non-zero exit, a timeout or a cancellation yields a [`RunError`] and
//! any partial output is dropped.

pub mod cancel;
pub mod error;
pub mod runner;

pub use cancel::CancelToken;
pub use error::{Result, RunError};
pub use runner::Runner;
