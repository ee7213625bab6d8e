//! The lvm2 client.

use std::path::{Path, PathBuf};
use std::time::Duration;

use cmd_runner::{CancelToken, Runner};
use tracing::debug;

use crate::error::Result;
use crate::options::*;
use crate::report::{decode_report, LogicalVolume, PhysicalVolume, VolumeGroup};

/// Where the lvm binary lives on most distributions.
pub const DEFAULT_LVM_PATH: &str = "/sbin/lvm";

/// Runs lvm sub-commands with typed options.
///
/// Mutating commands run with `--yes`, so lvm never waits for a prompt.
/// Listing commands return the decoded JSON report.
///
/// ```no_run
/// use lvm2::{Client, CreateVGOptions, ListVGOptions};
///
/// let client = Client::new();
/// client.create_volume_group(&CreateVGOptions {
///     name: "vg0".into(),
///     pv_names: vec!["/dev/sdb".into()],
///     ..Default::default()
/// })?;
///
/// let vgs = client.list_volume_groups(Some(&ListVGOptions {
///     names: vec!["vg0".into()],
///     ..Default::default()
/// }))?;
/// assert_eq!(vgs[0].name, "vg0");
/// # Ok::<(), lvm2::Lvm2Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    runner: Runner,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// A client for [`DEFAULT_LVM_PATH`] without timeout.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    pub fn lvm_path(&self) -> &Path {
        self.runner.program()
    }

    /// A copy of this client whose commands are killed once `token` is
    /// cancelled.
    pub fn with_cancel_token(&self, token: CancelToken) -> Self {
        Self {
            runner: self.runner.clone().with_cancel_token(token),
        }
    }

    // -------------------------------------------------------------------------
    // Physical volumes
    // -------------------------------------------------------------------------

    /// Display attributes of physical volumes.
    pub fn list_physical_volumes(
        &self,
        opts: Option<&ListPVOptions>,
    ) -> Result<Vec<PhysicalVolume>> {
        self.list(opts)
    }

    /// Initialize a device as a physical volume.
    pub fn create_physical_volume(&self, opts: &CreatePVOptions) -> Result<()> {
        self.exec(opts)
    }

    /// Change physical volume attributes.
    pub fn update_physical_volume(&self, opts: &UpdatePVOptions) -> Result<()> {
        self.exec(opts)
    }

    /// Remove a physical volume from a device.
    pub fn remove_physical_volume(&self, opts: &RemovePVOptions) -> Result<()> {
        self.exec(opts)
    }

    /// Check or repair physical volume metadata.
    pub fn check_physical_volume(&self, opts: &CheckPVOptions) -> Result<()> {
        self.exec(opts)
    }

    /// Move extents from one physical volume to others.
    pub fn move_physical_extents(&self, opts: &MovePEOptions) -> Result<()> {
        self.exec(opts)
    }

    /// Resize a physical volume.
    pub fn resize_physical_volume(&self, opts: &ResizePVOptions) -> Result<()> {
        self.exec(opts)
    }

    // -------------------------------------------------------------------------
    // Volume groups
    // -------------------------------------------------------------------------

    /// Display volume group information.
    pub fn list_volume_groups(&self, opts: Option<&ListVGOptions>) -> Result<Vec<VolumeGroup>> {
        self.list(opts)
    }

    pub fn create_volume_group(&self, opts: &CreateVGOptions) -> Result<()> {
        self.exec(opts)
    }

    /// Change volume group attributes, including activation.
    pub fn update_volume_group(&self, opts: &UpdateVGOptions) -> Result<()> {
        self.exec(opts)
    }

    pub fn remove_volume_group(&self, opts: &RemoveVGOptions) -> Result<()> {
        self.exec(opts)
    }

    /// Check or repair volume group metadata.
    pub fn check_volume_group(&self, opts: &CheckVGOptions) -> Result<()> {
        self.exec(opts)
    }

    /// Unregister a volume group from the system.
    pub fn export_volume_group(&self, opts: &ExportVGOptions) -> Result<()> {
        self.exec(opts)
    }

    /// Register an exported volume group with the system.
    pub fn import_volume_group(&self, opts: &ImportVGOptions) -> Result<()> {
        self.exec(opts)
    }

    /// Import a volume group from cloned physical volumes.
    pub fn import_volume_group_from_cloned(
        &self,
        opts: &ImportVGFromClonedOptions,
    ) -> Result<()> {
        self.exec(opts)
    }

    pub fn merge_volume_groups(&self, opts: &MergeVGOptions) -> Result<()> {
        self.exec(opts)
    }

    /// Add physical volumes to a volume group.
    pub fn extend_volume_group(&self, opts: &ExtendVGOptions) -> Result<()> {
        self.exec(opts)
    }

    /// Remove physical volumes from a volume group.
    pub fn reduce_volume_group(&self, opts: &ReduceVGOptions) -> Result<()> {
        self.exec(opts)
    }

    pub fn rename_volume_group(&self, opts: &RenameVGOptions) -> Result<()> {
        self.exec(opts)
    }

    /// Move physical volumes between volume groups.
    pub fn move_physical_volumes(&self, opts: &MovePVOptions) -> Result<()> {
        self.exec(opts)
    }

    /// Create device files for active logical volumes.
    pub fn make_volume_group_device_nodes(&self, opts: &MakeVGDeviceNodesOptions) -> Result<()> {
        self.exec(opts)
    }

    // -------------------------------------------------------------------------
    // Logical volumes
    // -------------------------------------------------------------------------

    /// Display logical volume information, one record per segment.
    pub fn list_logical_volumes(
        &self,
        opts: Option<&ListLVOptions>,
    ) -> Result<Vec<LogicalVolume>> {
        self.list(opts)
    }

    pub fn create_logical_volume(&self, opts: &CreateLVOptions) -> Result<()> {
        self.exec(opts)
    }

    /// Change logical volume attributes, including activation.
    pub fn update_logical_volume(&self, opts: &UpdateLVOptions) -> Result<()> {
        self.exec(opts)
    }

    pub fn remove_logical_volume(&self, opts: &RemoveLVOptions) -> Result<()> {
        self.exec(opts)
    }

    /// Change the layout of a logical volume, e.g. linear to raid1.
    pub fn convert_logical_volume_layout(&self, opts: &ConvertLVLayoutOptions) -> Result<()> {
        self.exec(opts)
    }

    /// Add space to a logical volume.
    pub fn extend_logical_volume(&self, opts: &ExtendLVOptions) -> Result<()> {
        self.exec(opts)
    }

    /// Reduce the size of a logical volume.
    pub fn reduce_logical_volume(&self, opts: &ReduceLVOptions) -> Result<()> {
        self.exec(opts)
    }

    pub fn rename_logical_volume(&self, opts: &RenameLVOptions) -> Result<()> {
        self.exec(opts)
    }

    fn exec<O: LvmCommand>(&self, opts: &O) -> Result<()> {
        self.runner.run(argv(opts))?;
        Ok(())
    }

    fn list<O: ListCommand>(&self, opts: Option<&O>) -> Result<Vec<O::Record>> {
        let args = match opts {
            Some(opts) => argv(opts),
            None => leading_argv::<O>(),
        };

        let report = self.runner.run(args)?;
        let records = decode_report::<O::Record>(&report)?;
        debug!(command = O::COMMAND, records = records.len(), "decoded lvm report");
        Ok(records)
    }
}

/// Configures a [`Client`].
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    lvm_path: PathBuf,
    timeout: Option<Duration>,
    cancel: Option<CancelToken>,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            lvm_path: PathBuf::from(DEFAULT_LVM_PATH),
            timeout: None,
            cancel: None,
        }
    }
}

impl ClientBuilder {
    /// Path of the lvm binary.
    pub fn lvm_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.lvm_path = path.into();
        self
    }

    /// Kill any command that runs longer than `timeout`.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Kill running commands once `token` is cancelled.
    pub fn cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn build(self) -> Client {
        let mut runner = Runner::new(self.lvm_path);
        if let Some(timeout) = self.timeout {
            runner = runner.with_timeout(timeout);
        }
        if let Some(token) = self.cancel {
            runner = runner.with_cancel_token(token);
        }
        Client { runner }
    }
}
