//! Volume group options.

use marshal_args::{MarshalArgs, YesNo};

use super::{CommonOptions, ReportOptions};

/// `vgs`: display volume groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, MarshalArgs)]
pub struct ListVGOptions {
    #[argv(flatten)]
    pub common: CommonOptions,
    #[argv(flatten)]
    pub report: ReportOptions,
    #[argv(0)]
    pub names: Vec<String>,
}

/// `vgcreate`: create a volume group from physical volumes.
#[derive(Debug, Clone, Default, PartialEq, Eq, MarshalArgs)]
pub struct CreateVGOptions {
    #[argv(flatten)]
    pub common: CommonOptions,
    #[argv("--addtag")]
    pub tags: Vec<String>,
    /// Allocation policy: `contiguous`, `cling`, `normal`, `anywhere`, ...
    #[argv("--alloc")]
    pub alloc: String,
    #[argv("--physicalextentsize")]
    pub physical_extent_size: String,
    #[argv("--maxlogicalvolumes")]
    pub max_logical_volumes: u32,
    #[argv("--maxphysicalvolumes")]
    pub max_physical_volumes: u32,
    #[argv("--metadatasize")]
    pub metadata_size: String,
    #[argv("--vgmetadatacopies")]
    pub metadata_copies: String,
    #[argv("--dataalignment")]
    pub data_alignment: String,
    #[argv("--shared")]
    pub shared: bool,
    #[argv("--systemid")]
    pub system_id: String,
    #[argv("--zero")]
    pub zero: Option<YesNo>,
    #[argv(0)]
    pub name: String,
    #[argv(1)]
    pub pv_names: Vec<String>,
}

/// `vgchange`: change volume group attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, MarshalArgs)]
pub struct UpdateVGOptions {
    #[argv(flatten)]
    pub common: CommonOptions,
    /// Activate or deactivate every logical volume in the group.
    #[argv("--activate")]
    pub activate: Option<YesNo>,
    #[argv("--setautoactivation")]
    pub auto_activation: Option<YesNo>,
    #[argv("--addtag")]
    pub add_tags: Vec<String>,
    #[argv("--deltag")]
    pub del_tags: Vec<String>,
    #[argv("--alloc")]
    pub alloc: String,
    #[argv("--autobackup")]
    pub auto_backup: Option<YesNo>,
    #[argv("--resizeable")]
    pub resizeable: Option<YesNo>,
    #[argv("--logicalvolume")]
    pub max_logical_volumes: Option<u32>,
    #[argv("--maxphysicalvolumes")]
    pub max_physical_volumes: Option<u32>,
    #[argv("--physicalextentsize")]
    pub physical_extent_size: String,
    #[argv("--systemid")]
    pub system_id: String,
    /// Generate a new random UUID.
    #[argv("--uuid")]
    pub uuid: bool,
    #[argv("--refresh")]
    pub refresh: bool,
    #[argv(0)]
    pub name: String,
}

/// `vgremove`: remove a volume group.
#[derive(Debug, Clone, Default, PartialEq, Eq, MarshalArgs)]
pub struct RemoveVGOptions {
    #[argv(flatten)]
    pub common: CommonOptions,
    /// Remove the group even if it still holds logical volumes.
    #[argv("--force")]
    pub force: bool,
    #[argv("--noudevsync")]
    pub no_udev_sync: bool,
    #[argv(0)]
    pub name: String,
}

/// `vgck`: check volume group metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, MarshalArgs)]
pub struct CheckVGOptions {
    #[argv(flatten)]
    pub common: CommonOptions,
    /// Rewrite metadata to correct inconsistencies.
    #[argv("--updatemetadata")]
    pub update_metadata: bool,
    #[argv(0)]
    pub name: String,
}

/// `vgexport`: unregister a volume group from the system.
#[derive(Debug, Clone, Default, PartialEq, Eq, MarshalArgs)]
pub struct ExportVGOptions {
    #[argv(flatten)]
    pub common: CommonOptions,
    #[argv("--all")]
    pub all: bool,
    #[argv(0)]
    pub name: String,
}

/// `vgimport`: register an exported volume group.
#[derive(Debug, Clone, Default, PartialEq, Eq, MarshalArgs)]
pub struct ImportVGOptions {
    #[argv(flatten)]
    pub common: CommonOptions,
    #[argv("--all")]
    pub all: bool,
    #[argv("--force")]
    pub force: bool,
    #[argv(0)]
    pub name: String,
}

/// `vgimportclone`: import a volume group from cloned physical volumes.
#[derive(Debug, Clone, Default, PartialEq, Eq, MarshalArgs)]
pub struct ImportVGFromClonedOptions {
    #[argv(flatten)]
    pub common: CommonOptions,
    /// Name for the imported group.
    #[argv("--basevgname")]
    pub base_vg_name: String,
    #[argv("--import")]
    pub import: bool,
    #[argv("--importdevices")]
    pub import_devices: bool,
    #[argv(0)]
    pub pv_names: Vec<String>,
}

/// `vgmerge`: merge `source` into `destination`.
#[derive(Debug, Clone, Default, PartialEq, Eq, MarshalArgs)]
pub struct MergeVGOptions {
    #[argv(flatten)]
    pub common: CommonOptions,
    #[argv(0)]
    pub destination: String,
    #[argv(1)]
    pub source: String,
}

/// `vgextend`: add physical volumes to a volume group.
#[derive(Debug, Clone, Default, PartialEq, Eq, MarshalArgs)]
pub struct ExtendVGOptions {
    #[argv(flatten)]
    pub common: CommonOptions,
    #[argv("--force")]
    pub force: bool,
    #[argv("--restoremissing")]
    pub restore_missing: bool,
    #[argv("--metadatasize")]
    pub metadata_size: String,
    #[argv("--zero")]
    pub zero: Option<YesNo>,
    #[argv(0)]
    pub name: String,
    #[argv(1)]
    pub pv_names: Vec<String>,
}

/// `vgreduce`: remove physical volumes from a volume group.
#[derive(Debug, Clone, Default, PartialEq, Eq, MarshalArgs)]
pub struct ReduceVGOptions {
    #[argv(flatten)]
    pub common: CommonOptions,
    /// Remove every unused physical volume.
    #[argv("--all")]
    pub all: bool,
    /// Drop missing physical volumes from the metadata.
    #[argv("--removemissing")]
    pub remove_missing: bool,
    #[argv("--mirrorsonly")]
    pub mirrors_only: bool,
    #[argv("--force")]
    pub force: bool,
    #[argv(0)]
    pub name: String,
    #[argv(1)]
    pub pv_names: Vec<String>,
}

/// `vgrename`: rename a volume group.
#[derive(Debug, Clone, Default, PartialEq, Eq, MarshalArgs)]
pub struct RenameVGOptions {
    #[argv(flatten)]
    pub common: CommonOptions,
    /// Current name or UUID.
    #[argv(0)]
    pub from: String,
    #[argv(1)]
    pub to: String,
}

/// `vgsplit`: move physical volumes into another (possibly new) volume group.
#[derive(Debug, Clone, Default, PartialEq, Eq, MarshalArgs)]
pub struct MovePVOptions {
    #[argv(flatten)]
    pub common: CommonOptions,
    #[argv("--alloc")]
    pub alloc: String,
    #[argv("--maxlogicalvolumes")]
    pub max_logical_volumes: u32,
    #[argv("--maxphysicalvolumes")]
    pub max_physical_volumes: u32,
    /// Move the physical volumes backing this logical volume.
    #[argv("--name")]
    pub lv_name: String,
    #[argv(0)]
    pub source: String,
    #[argv(1)]
    pub destination: String,
    #[argv(2)]
    pub pv_names: Vec<String>,
}

/// `vgmknodes`: create device nodes for active logical volumes.
#[derive(Debug, Clone, Default, PartialEq, Eq, MarshalArgs)]
pub struct MakeVGDeviceNodesOptions {
    #[argv(flatten)]
    pub common: CommonOptions,
    #[argv("--refresh")]
    pub refresh: bool,
    /// Volume groups or logical volumes. Every group when empty.
    #[argv(0)]
    pub names: Vec<String>,
}
