//! Logical volume options.
//!
//! Logical volumes are addressed as `vg/lv` unless noted otherwise.

use marshal_args::{MarshalArgs, YesNo};

use super::{CommonOptions, ReportOptions};

/// `lvs`: display logical volumes.
#[derive(Debug, Clone, Default, PartialEq, Eq, MarshalArgs)]
pub struct ListLVOptions {
    #[argv(flatten)]
    pub common: CommonOptions,
    #[argv(flatten)]
    pub report: ReportOptions,
    /// Include internal volumes such as mirror images and pool metadata.
    #[argv("--all")]
    pub all: bool,
    /// Volume groups or `vg/lv` names.
    #[argv(0)]
    pub names: Vec<String>,
}

/// `lvcreate`: create a logical volume in a volume group.
#[derive(Debug, Clone, Default, PartialEq, Eq, MarshalArgs)]
pub struct CreateLVOptions {
    #[argv(flatten)]
    pub common: CommonOptions,
    /// Name of the new volume. lvm picks one when empty.
    #[argv("--name")]
    pub name: String,
    /// Size with unit suffix, e.g. `100M`.
    #[argv("--size")]
    pub size: String,
    /// Size in extents or as a percentage, e.g. `100%FREE`.
    #[argv("--extents")]
    pub extents: String,
    /// Segment type: `linear`, `striped`, `raid1`, `thin-pool`, ...
    #[argv("--type")]
    pub r#type: String,
    #[argv("--activate")]
    pub activate: Option<YesNo>,
    #[argv("--addtag")]
    pub tags: Vec<String>,
    #[argv("--alloc")]
    pub alloc: String,
    #[argv("--mirrors")]
    pub mirrors: Option<u32>,
    #[argv("--stripes")]
    pub stripes: Option<u32>,
    #[argv("--stripesize")]
    pub stripe_size: String,
    #[argv("--regionsize")]
    pub region_size: String,
    #[argv("--thinpool")]
    pub thin_pool: String,
    #[argv("--virtualsize")]
    pub virtual_size: String,
    #[argv("--snapshot")]
    pub snapshot: bool,
    #[argv("--permission")]
    pub permission: String,
    #[argv("--readahead")]
    pub read_ahead: String,
    #[argv("--wipesignatures")]
    pub wipe_signatures: Option<YesNo>,
    #[argv("--zero")]
    pub zero: Option<YesNo>,
    /// Volume group, or origin `vg/lv` for snapshots.
    #[argv(0)]
    pub vg_name: String,
    /// Restrict allocation to these physical volumes.
    #[argv(1)]
    pub pv_names: Vec<String>,
}

/// `lvchange`: change logical volume attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, MarshalArgs)]
pub struct UpdateLVOptions {
    #[argv(flatten)]
    pub common: CommonOptions,
    #[argv("--activate")]
    pub activate: Option<YesNo>,
    #[argv("--addtag")]
    pub add_tags: Vec<String>,
    #[argv("--deltag")]
    pub del_tags: Vec<String>,
    #[argv("--alloc")]
    pub alloc: String,
    #[argv("--contiguous")]
    pub contiguous: Option<YesNo>,
    /// `r` or `rw`.
    #[argv("--permission")]
    pub permission: String,
    #[argv("--readahead")]
    pub read_ahead: String,
    #[argv("--setactivationskip")]
    pub activation_skip: Option<YesNo>,
    #[argv("--refresh")]
    pub refresh: bool,
    #[argv("--resync")]
    pub resync: bool,
    #[argv(0)]
    pub name: String,
}

/// `lvremove`: remove a logical volume.
#[derive(Debug, Clone, Default, PartialEq, Eq, MarshalArgs)]
pub struct RemoveLVOptions {
    #[argv(flatten)]
    pub common: CommonOptions,
    /// Remove active volumes without prompting.
    #[argv("--force")]
    pub force: bool,
    #[argv("--noudevsync")]
    pub no_udev_sync: bool,
    #[argv(0)]
    pub name: String,
}

/// `lvconvert`: change the layout of a logical volume.
#[derive(Debug, Clone, Default, PartialEq, Eq, MarshalArgs)]
pub struct ConvertLVLayoutOptions {
    #[argv(flatten)]
    pub common: CommonOptions,
    #[argv("--type")]
    pub r#type: String,
    /// Number of additional mirror images; `Some(0)` removes all mirrors.
    #[argv("--mirrors")]
    pub mirrors: Option<u32>,
    #[argv("--stripes")]
    pub stripes: Option<u32>,
    #[argv("--stripesize")]
    pub stripe_size: String,
    #[argv("--regionsize")]
    pub region_size: String,
    #[argv("--splitmirrors")]
    pub split_mirrors: Option<u32>,
    #[argv("--merge")]
    pub merge: bool,
    #[argv("--repair")]
    pub repair: bool,
    #[argv("--alloc")]
    pub alloc: String,
    #[argv(0)]
    pub name: String,
    /// Physical volumes to allocate new images from.
    #[argv(1)]
    pub pv_names: Vec<String>,
}

/// `lvextend`: grow a logical volume.
#[derive(Debug, Clone, Default, PartialEq, Eq, MarshalArgs)]
pub struct ExtendLVOptions {
    #[argv(flatten)]
    pub common: CommonOptions,
    /// New absolute size, or relative with a leading `+`.
    #[argv("--size")]
    pub size: String,
    #[argv("--extents")]
    pub extents: String,
    /// Resize the filesystem along with the volume.
    #[argv("--resizefs")]
    pub resize_fs: bool,
    #[argv("--nofsck")]
    pub no_fsck: bool,
    #[argv("--alloc")]
    pub alloc: String,
    #[argv(0)]
    pub name: String,
    #[argv(1)]
    pub pv_names: Vec<String>,
}

/// `lvreduce`: shrink a logical volume.
#[derive(Debug, Clone, Default, PartialEq, Eq, MarshalArgs)]
pub struct ReduceLVOptions {
    #[argv(flatten)]
    pub common: CommonOptions,
    /// New absolute size, or relative with a leading `-`.
    #[argv("--size")]
    pub size: String,
    #[argv("--extents")]
    pub extents: String,
    #[argv("--resizefs")]
    pub resize_fs: bool,
    #[argv("--nofsck")]
    pub no_fsck: bool,
    #[argv("--force")]
    pub force: bool,
    #[argv(0)]
    pub name: String,
}

/// `lvrename`: rename a logical volume.
#[derive(Debug, Clone, Default, PartialEq, Eq, MarshalArgs)]
pub struct RenameLVOptions {
    #[argv(flatten)]
    pub common: CommonOptions,
    /// Current `vg/lv` name.
    #[argv(0)]
    pub from: String,
    /// New volume name, without the group.
    #[argv(1)]
    pub to: String,
}
