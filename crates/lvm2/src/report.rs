//! Records decoded from `--reportformat=json` output.
//!
//! lvm prints every column as a string, sizes included (`"100.00m"`), so
//! records keep them as text. Missing columns decode to empty strings.
//!
//! ```text
//! {"report": [{"pv": [{"pv_name": "/dev/sdb", ...}]}]}
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// A record type found under a well-known key of the first report section.
pub trait ReportRecord: DeserializeOwned {
    /// Key of the record list, e.g. `"pv"`.
    const KEY: &'static str;
}

/// Decode the records of the first report section.
///
/// A report without sections, or a section without the record key, yields
/// no records.
pub fn decode_report<T: ReportRecord>(json: &[u8]) -> Result<Vec<T>> {
    let mut report: Value = serde_json::from_slice(json)?;

    let records = report
        .get_mut("report")
        .and_then(|sections| sections.get_mut(0))
        .and_then(|section| section.get_mut(T::KEY))
        .map(Value::take);

    match records {
        Some(records) => Ok(serde_json::from_value(records)?),
        None => Ok(Vec::new()),
    }
}

fn split_tags(tags: &str) -> Vec<&str> {
    tags.split(',').filter(|tag| !tag.is_empty()).collect()
}

/// A physical volume, as reported by `pvs --options=pv_all,vg_name`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicalVolume {
    #[serde(rename = "pv_fmt")]
    pub format: String,
    #[serde(rename = "pv_uuid")]
    pub uuid: String,
    #[serde(rename = "dev_size")]
    pub device_size: String,
    #[serde(rename = "pv_name")]
    pub name: String,
    #[serde(rename = "pv_major")]
    pub major: String,
    #[serde(rename = "pv_minor")]
    pub minor: String,
    #[serde(rename = "pv_mda_free")]
    pub metadata_free: String,
    #[serde(rename = "pv_mda_size")]
    pub metadata_size: String,
    #[serde(rename = "pv_ext_vsn")]
    pub extension_version: String,
    pub pe_start: String,
    #[serde(rename = "pv_size")]
    pub size: String,
    #[serde(rename = "pv_free")]
    pub free: String,
    #[serde(rename = "pv_used")]
    pub used: String,
    #[serde(rename = "pv_attr")]
    pub attr: String,
    #[serde(rename = "pv_allocatable")]
    pub allocatable: String,
    #[serde(rename = "pv_exported")]
    pub exported: String,
    #[serde(rename = "pv_missing")]
    pub missing: String,
    #[serde(rename = "pv_pe_count")]
    pub pe_count: String,
    #[serde(rename = "pv_pe_alloc_count")]
    pub pe_alloc_count: String,
    #[serde(rename = "pv_tags")]
    pub tags: String,
    #[serde(rename = "pv_mda_count")]
    pub metadata_count: String,
    #[serde(rename = "pv_mda_used_count")]
    pub metadata_used_count: String,
    #[serde(rename = "pv_ba_start")]
    pub bootloader_area_start: String,
    #[serde(rename = "pv_ba_size")]
    pub bootloader_area_size: String,
    #[serde(rename = "pv_in_use")]
    pub in_use: String,
    #[serde(rename = "pv_duplicate")]
    pub duplicate: String,
    #[serde(rename = "pv_device_id")]
    pub device_id: String,
    #[serde(rename = "pv_device_id_type")]
    pub device_id_type: String,
    pub vg_name: String,
}

impl PhysicalVolume {
    /// Tags attached to the volume.
    pub fn tag_list(&self) -> Vec<&str> {
        split_tags(&self.tags)
    }
}

impl ReportRecord for PhysicalVolume {
    const KEY: &'static str = "pv";
}

/// A volume group, as reported by `vgs --options=vg_all`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeGroup {
    #[serde(rename = "vg_fmt")]
    pub format: String,
    #[serde(rename = "vg_uuid")]
    pub uuid: String,
    #[serde(rename = "vg_name")]
    pub name: String,
    #[serde(rename = "vg_attr")]
    pub attr: String,
    #[serde(rename = "vg_permissions")]
    pub permissions: String,
    #[serde(rename = "vg_extendable")]
    pub extendable: String,
    #[serde(rename = "vg_exported")]
    pub exported: String,
    #[serde(rename = "vg_autoactivation")]
    pub autoactivation: String,
    #[serde(rename = "vg_partial")]
    pub partial: String,
    #[serde(rename = "vg_allocation_policy")]
    pub allocation_policy: String,
    #[serde(rename = "vg_clustered")]
    pub clustered: String,
    #[serde(rename = "vg_shared")]
    pub shared: String,
    #[serde(rename = "vg_size")]
    pub size: String,
    #[serde(rename = "vg_free")]
    pub free: String,
    #[serde(rename = "vg_sysid")]
    pub sysid: String,
    #[serde(rename = "vg_systemid")]
    pub system_id: String,
    #[serde(rename = "vg_lock_type")]
    pub lock_type: String,
    #[serde(rename = "vg_lock_args")]
    pub lock_args: String,
    #[serde(rename = "vg_extent_size")]
    pub extent_size: String,
    #[serde(rename = "vg_extent_count")]
    pub extent_count: String,
    #[serde(rename = "vg_free_count")]
    pub free_count: String,
    pub max_lv: String,
    pub max_pv: String,
    pub pv_count: String,
    #[serde(rename = "vg_missing_pv_count")]
    pub missing_pv_count: String,
    pub lv_count: String,
    pub snap_count: String,
    #[serde(rename = "vg_seqno")]
    pub seqno: String,
    #[serde(rename = "vg_tags")]
    pub tags: String,
    #[serde(rename = "vg_profile")]
    pub profile: String,
    #[serde(rename = "vg_mda_count")]
    pub metadata_count: String,
    #[serde(rename = "vg_mda_used_count")]
    pub metadata_used_count: String,
    #[serde(rename = "vg_mda_free")]
    pub metadata_free: String,
    #[serde(rename = "vg_mda_size")]
    pub metadata_size: String,
    #[serde(rename = "vg_mda_copies")]
    pub metadata_copies: String,
}

impl VolumeGroup {
    /// Tags attached to the group.
    pub fn tag_list(&self) -> Vec<&str> {
        split_tags(&self.tags)
    }
}

impl ReportRecord for VolumeGroup {
    const KEY: &'static str = "vg";
}

/// A logical volume segment, as reported by
/// `lvs --options=lv_all,seg_all,vg_name`.
///
/// Volumes with several segments appear once per segment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogicalVolume {
    #[serde(rename = "lv_uuid")]
    pub uuid: String,
    #[serde(rename = "lv_name")]
    pub name: String,
    #[serde(rename = "lv_full_name")]
    pub full_name: String,
    #[serde(rename = "lv_path")]
    pub path: String,
    #[serde(rename = "lv_dm_path")]
    pub dm_path: String,
    #[serde(rename = "lv_parent")]
    pub parent: String,
    #[serde(rename = "lv_layout")]
    pub layout: String,
    #[serde(rename = "lv_role")]
    pub role: String,
    #[serde(rename = "lv_initial_image_sync")]
    pub initial_image_sync: String,
    #[serde(rename = "lv_image_synced")]
    pub image_synced: String,
    #[serde(rename = "lv_merging")]
    pub merging: String,
    #[serde(rename = "lv_converting")]
    pub converting: String,
    #[serde(rename = "lv_allocation_policy")]
    pub allocation_policy: String,
    #[serde(rename = "lv_allocation_locked")]
    pub allocation_locked: String,
    #[serde(rename = "lv_fixed_minor")]
    pub fixed_minor: String,
    #[serde(rename = "lv_skip_activation")]
    pub skip_activation: String,
    #[serde(rename = "lv_when_full")]
    pub when_full: String,
    #[serde(rename = "lv_active")]
    pub active: String,
    #[serde(rename = "lv_active_locally")]
    pub active_locally: String,
    #[serde(rename = "lv_active_exclusively")]
    pub active_exclusively: String,
    #[serde(rename = "lv_permissions")]
    pub permissions: String,
    #[serde(rename = "lv_suspended")]
    pub suspended: String,
    #[serde(rename = "lv_read_ahead")]
    pub read_ahead: String,
    #[serde(rename = "lv_size")]
    pub size: String,
    #[serde(rename = "lv_attr")]
    pub attr: String,
    #[serde(rename = "lv_tags")]
    pub tags: String,
    #[serde(rename = "lv_health_status")]
    pub health_status: String,
    #[serde(rename = "lv_kernel_major")]
    pub kernel_major: String,
    #[serde(rename = "lv_kernel_minor")]
    pub kernel_minor: String,
    pub origin: String,
    pub origin_size: String,
    pub pool_lv: String,
    pub data_lv: String,
    pub metadata_lv: String,
    pub data_percent: String,
    pub snap_percent: String,
    pub metadata_percent: String,
    pub copy_percent: String,
    pub sync_percent: String,
    pub mirror_log: String,
    pub move_pv: String,
    pub convert_lv: String,
    pub segtype: String,
    pub stripes: String,
    pub data_stripes: String,
    pub stripe_size: String,
    pub region_size: String,
    pub chunk_size: String,
    pub seg_start: String,
    pub seg_size: String,
    pub seg_size_pe: String,
    pub seg_tags: String,
    pub devices: String,
    pub vg_name: String,
}

impl LogicalVolume {
    /// Tags attached to the volume.
    pub fn tag_list(&self) -> Vec<&str> {
        split_tags(&self.tags)
    }
}

impl ReportRecord for LogicalVolume {
    const KEY: &'static str = "lv";
}
