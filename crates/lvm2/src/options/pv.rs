//! Physical volume options.

use marshal_args::{MarshalArgs, YesNo};

use super::{CommonOptions, ReportOptions};

/// `pvs`: display physical volumes.
#[derive(Debug, Clone, Default, PartialEq, Eq, MarshalArgs)]
pub struct ListPVOptions {
    #[argv(flatten)]
    pub common: CommonOptions,
    #[argv(flatten)]
    pub report: ReportOptions,
    /// Also show devices that are not physical volumes.
    #[argv("--all")]
    pub all: bool,
    /// Restrict the report to these devices.
    #[argv(0)]
    pub names: Vec<String>,
}

/// `pvcreate`: initialize a device as a physical volume.
#[derive(Debug, Clone, Default, PartialEq, Eq, MarshalArgs)]
pub struct CreatePVOptions {
    #[argv(flatten)]
    pub common: CommonOptions,
    #[argv("--force")]
    pub force: bool,
    /// Use this UUID instead of a random one.
    #[argv("--uuid")]
    pub uuid: String,
    #[argv("--restorefile")]
    pub restore_file: String,
    #[argv("--norestorefile")]
    pub no_restore_file: bool,
    #[argv("--dataalignment")]
    pub data_alignment: String,
    #[argv("--dataalignmentoffset")]
    pub data_alignment_offset: String,
    #[argv("--metadatasize")]
    pub metadata_size: String,
    #[argv("--pvmetadatacopies")]
    pub metadata_copies: Option<u32>,
    #[argv("--metadataignore")]
    pub metadata_ignore: Option<YesNo>,
    #[argv("--setphysicalvolumesize")]
    pub set_physical_volume_size: String,
    #[argv("--zero")]
    pub zero: Option<YesNo>,
    /// Device to initialize.
    #[argv(0)]
    pub name: String,
}

/// `pvchange`: change physical volume attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, MarshalArgs)]
pub struct UpdatePVOptions {
    #[argv(flatten)]
    pub common: CommonOptions,
    #[argv("--addtag")]
    pub add_tags: Vec<String>,
    #[argv("--deltag")]
    pub del_tags: Vec<String>,
    #[argv("--allocatable")]
    pub allocatable: Option<YesNo>,
    #[argv("--metadataignore")]
    pub metadata_ignore: Option<YesNo>,
    /// Generate a new random UUID.
    #[argv("--uuid")]
    pub uuid: bool,
    #[argv(0)]
    pub name: String,
}

/// `pvremove`: wipe the physical volume label from a device.
#[derive(Debug, Clone, Default, PartialEq, Eq, MarshalArgs)]
pub struct RemovePVOptions {
    #[argv(flatten)]
    pub common: CommonOptions,
    #[argv("--force")]
    pub force: bool,
    #[argv(0)]
    pub name: String,
}

/// `pvck`: check and repair physical volume metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, MarshalArgs)]
pub struct CheckPVOptions {
    #[argv(flatten)]
    pub common: CommonOptions,
    /// Dump metadata: `headers`, `metadata`, `metadata_all` or `metadata_search`.
    #[argv("--dump")]
    pub dump: String,
    #[argv("--repair")]
    pub repair: bool,
    #[argv("--repairtype")]
    pub repair_type: String,
    #[argv("--file")]
    pub file: String,
    #[argv("--settings")]
    pub settings: String,
    #[argv(0)]
    pub name: String,
}

/// `pvmove`: move allocated extents off a physical volume.
#[derive(Debug, Clone, Default, PartialEq, Eq, MarshalArgs)]
pub struct MovePEOptions {
    #[argv(flatten)]
    pub common: CommonOptions,
    #[argv("--alloc")]
    pub alloc: String,
    #[argv("--atomic")]
    pub atomic: bool,
    /// Only move extents belonging to this logical volume.
    #[argv("--name")]
    pub lv_name: String,
    #[argv("--noudevsync")]
    pub no_udev_sync: bool,
    #[argv(0)]
    pub source: String,
    /// Destination physical volumes. Any free space in the group when empty.
    #[argv(1)]
    pub destinations: Vec<String>,
}

/// `pvresize`: resize a physical volume.
#[derive(Debug, Clone, Default, PartialEq, Eq, MarshalArgs)]
pub struct ResizePVOptions {
    #[argv(flatten)]
    pub common: CommonOptions,
    /// New size, e.g. `100M`. Defaults to the device size.
    #[argv("--setphysicalvolumesize")]
    pub set_physical_volume_size: String,
    #[argv(0)]
    pub name: String,
}
