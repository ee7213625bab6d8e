//! Typed client for the LVM2 command-line tools.
//!
//! Each lvm sub-command has an option struct whose fields marshal to the
//! exact flags lvm expects, and a [`Client`] method that runs it:
//!
//! ```no_run
//! use lvm2::{Client, CreateLVOptions, UpdateVGOptions, YES};
//!
//! let client = Client::new();
//!
//! client.update_volume_group(&UpdateVGOptions {
//!     name: "vg0".into(),
//!     activate: YES,
//!     ..Default::default()
//! })?;
//!
//! client.create_logical_volume(&CreateLVOptions {
//!     name: "data".into(),
//!     vg_name: "vg0".into(),
//!     size: "100M".into(),
//!     ..Default::default()
//! })?;
//! # Ok::<(), lvm2::Lvm2Error>(())
//! ```
//!
//! Commands are synchronous. Use [`ClientBuilder::timeout`] or
//! [`Client::with_cancel_token`] to bound them.

mod client;
mod error;
mod options;
mod report;

pub use client::{Client, ClientBuilder, DEFAULT_LVM_PATH};
pub use error::{Lvm2Error, Result};
pub use options::*;
pub use report::{decode_report, LogicalVolume, PhysicalVolume, ReportRecord, VolumeGroup};

pub use cmd_runner::{CancelToken, RunError};
pub use marshal_args::{MarshalArgs, YesNo, NO, YES};
