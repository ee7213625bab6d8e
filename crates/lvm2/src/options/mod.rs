//! Typed options for each lvm sub-command.
//!
//! Every option struct derives [`MarshalArgs`]; [`argv`] prefixes the
//! marshaled options with the sub-command name and its fixed flags.

use marshal_args::MarshalArgs;

use crate::report::ReportRecord;

mod lv;
mod pv;
mod vg;

pub use lv::*;
pub use pv::*;
pub use vg::*;

/// An lvm sub-command and the flags it is always run with.
pub trait LvmCommand: MarshalArgs {
    /// Sub-command name, e.g. `vgcreate`.
    const COMMAND: &'static str;
    /// Flags placed between the sub-command and the marshaled options.
    const LEADING_ARGS: &'static [&'static str];
}

/// A reporting sub-command (`pvs`, `vgs`, `lvs`).
pub trait ListCommand: LvmCommand {
    type Record: ReportRecord;
}

/// Full argument vector for `opts`, without the lvm binary itself.
///
/// ```
/// use lvm2::{argv, RemoveVGOptions};
///
/// let opts = RemoveVGOptions { name: "vg0".into(), ..Default::default() };
/// assert_eq!(argv(&opts), ["vgremove", "--yes", "vg0"]);
/// ```
pub fn argv<O: LvmCommand>(opts: &O) -> Vec<String> {
    let mut args = leading_argv::<O>();
    args.extend(opts.marshal_args());
    args
}

/// Sub-command and fixed flags only.
pub(crate) fn leading_argv<O: LvmCommand>() -> Vec<String> {
    std::iter::once(O::COMMAND)
        .chain(O::LEADING_ARGS.iter().copied())
        .map(str::to_string)
        .collect()
}

const REPORT_JSON: &str = "--reportformat=json";

macro_rules! lvm_commands {
    ($($opts:ty => $cmd:literal [$($lead:expr),* $(,)?]),* $(,)?) => {
        $(
            impl LvmCommand for $opts {
                const COMMAND: &'static str = $cmd;
                const LEADING_ARGS: &'static [&'static str] = &[$($lead),*];
            }
        )*
    };
}

lvm_commands! {
    ListPVOptions => "pvs" [REPORT_JSON, "--binary", "--options=pv_all,vg_name"],
    CreatePVOptions => "pvcreate" ["--yes"],
    UpdatePVOptions => "pvchange" ["--yes"],
    RemovePVOptions => "pvremove" ["--yes"],
    CheckPVOptions => "pvck" ["--yes"],
    MovePEOptions => "pvmove" ["--yes"],
    ResizePVOptions => "pvresize" ["--yes"],
    ListVGOptions => "vgs" [REPORT_JSON, "--binary", "--options=vg_all"],
    CreateVGOptions => "vgcreate" ["--yes"],
    UpdateVGOptions => "vgchange" ["--yes"],
    RemoveVGOptions => "vgremove" ["--yes"],
    CheckVGOptions => "vgck" ["--yes"],
    ExportVGOptions => "vgexport" ["--yes"],
    ImportVGOptions => "vgimport" ["--yes"],
    ImportVGFromClonedOptions => "vgimportclone" ["--yes"],
    MergeVGOptions => "vgmerge" ["--yes"],
    ExtendVGOptions => "vgextend" ["--yes"],
    ReduceVGOptions => "vgreduce" ["--yes"],
    RenameVGOptions => "vgrename" ["--yes"],
    MovePVOptions => "vgsplit" ["--yes"],
    MakeVGDeviceNodesOptions => "vgmknodes" ["--yes"],
    ListLVOptions => "lvs" [REPORT_JSON, "--binary", "--options=lv_all,seg_all,vg_name"],
    CreateLVOptions => "lvcreate" ["--yes"],
    UpdateLVOptions => "lvchange" ["--yes"],
    RemoveLVOptions => "lvremove" ["--yes"],
    ConvertLVLayoutOptions => "lvconvert" ["--yes"],
    ExtendLVOptions => "lvextend" ["--yes"],
    ReduceLVOptions => "lvreduce" ["--yes"],
    RenameLVOptions => "lvrename" ["--yes"],
}

impl ListCommand for ListPVOptions {
    type Record = crate::report::PhysicalVolume;
}

impl ListCommand for ListVGOptions {
    type Record = crate::report::VolumeGroup;
}

impl ListCommand for ListLVOptions {
    type Record = crate::report::LogicalVolume;
}

/// Options understood by every lvm sub-command.
#[derive(Debug, Clone, Default, PartialEq, Eq, MarshalArgs)]
pub struct CommonOptions {
    /// Override lvm.conf settings, e.g. `devices/filter=["a|.*|"]`.
    #[argv("--config")]
    pub config: String,
    #[argv("--commandprofile")]
    pub command_profile: String,
    /// Restrict the command to these devices.
    #[argv("--devices")]
    pub devices: Vec<String>,
    #[argv("--devicesfile")]
    pub devices_file: String,
    #[argv("--debug")]
    pub debug: bool,
    #[argv("--nolocking")]
    pub no_locking: bool,
    #[argv("--lockopt")]
    pub lock_opt: String,
}

/// Options shared by the reporting sub-commands.
#[derive(Debug, Clone, Default, PartialEq, Eq, MarshalArgs)]
pub struct ReportOptions {
    /// Selection criteria, e.g. `vg_tags=backup`.
    #[argv("--select")]
    pub select: String,
    /// Sort keys, e.g. `-lv_size`.
    #[argv("--sort")]
    pub sort: String,
    #[argv("--foreign")]
    pub foreign: bool,
    #[argv("--ignorelockingfailure")]
    pub ignore_locking_failure: bool,
    #[argv("--readonly")]
    pub read_only: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use marshal_args::YES;

    #[test]
    fn test_list_leading_args() {
        assert_eq!(
            leading_argv::<ListPVOptions>(),
            ["pvs", "--reportformat=json", "--binary", "--options=pv_all,vg_name"]
        );
        assert_eq!(
            leading_argv::<ListLVOptions>(),
            ["lvs", "--reportformat=json", "--binary", "--options=lv_all,seg_all,vg_name"]
        );
    }

    #[test]
    fn test_common_options_lead_each_command() {
        let opts = CreateLVOptions {
            common: CommonOptions {
                devices: vec!["/dev/sdb".into(), "/dev/sdc".into()],
                debug: true,
                ..Default::default()
            },
            name: "data".into(),
            size: "100M".into(),
            activate: YES,
            vg_name: "vg0".into(),
            ..Default::default()
        };

        assert_eq!(
            argv(&opts),
            [
                "lvcreate",
                "--yes",
                "--devices=/dev/sdb",
                "--devices=/dev/sdc",
                "--debug",
                "--name=data",
                "--size=100M",
                "--activate=y",
                "vg0",
            ]
        );
    }

    #[test]
    fn test_default_options_add_nothing() {
        assert_eq!(argv(&ListVGOptions::default()), leading_argv::<ListVGOptions>());
        assert_eq!(argv(&CheckVGOptions::default()), ["vgck", "--yes"]);
    }
}
