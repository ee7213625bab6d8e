//! Client tests against a fake `lvm` script.
//!
//! The script records its arguments and replays canned output, so these
//! tests exercise the full argv → process → report path without touching
//! real block devices.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use lvm2::{
    CancelToken, Client, CommonOptions, ConvertLVLayoutOptions, CreatePVOptions, CreateVGOptions,
    ListLVOptions, ListPVOptions, ListVGOptions, Lvm2Error, ReportOptions, RunError,
    UpdateVGOptions, NO, YES,
};
use serial_test::serial;
use tempfile::TempDir;

// =============================================================================
// Fake lvm
// =============================================================================

const FAKE_LVM: &str = r#"#!/bin/sh
dir=$(dirname "$0")
printf '%s\n' "$@" > "$dir/args.log"
[ -f "$dir/stdout" ] && cat "$dir/stdout"
[ -f "$dir/stderr" ] && cat "$dir/stderr" >&2
[ -f "$dir/sleep" ] && sleep "$(cat "$dir/sleep")"
exit "$(cat "$dir/status" 2>/dev/null || echo 0)"
"#;

struct FakeLvm {
    dir: TempDir,
}

impl FakeLvm {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lvm");
        fs::write(&path, FAKE_LVM).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        FakeLvm { dir }
    }

    fn path(&self) -> PathBuf {
        self.dir.path().join("lvm")
    }

    fn client(&self) -> Client {
        Client::builder().lvm_path(self.path()).build()
    }

    fn stdout(self, text: &str) -> Self {
        fs::write(self.dir.path().join("stdout"), text).unwrap();
        self
    }

    fn stderr(self, text: &str) -> Self {
        fs::write(self.dir.path().join("stderr"), text).unwrap();
        self
    }

    fn status(self, code: i32) -> Self {
        fs::write(self.dir.path().join("status"), code.to_string()).unwrap();
        self
    }

    fn sleep(self, secs: u32) -> Self {
        fs::write(self.dir.path().join("sleep"), secs.to_string()).unwrap();
        self
    }

    fn args(&self) -> Vec<String> {
        read_lines(&self.dir.path().join("args.log"))
    }
}

fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

// =============================================================================
// Mutating commands
// =============================================================================

#[test]
#[serial]
fn test_create_physical_volume() {
    let lvm = FakeLvm::new();
    lvm.client()
        .create_physical_volume(&CreatePVOptions {
            name: "/dev/nbd0".into(),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(lvm.args(), ["pvcreate", "--yes", "/dev/nbd0"]);
}

#[test]
#[serial]
fn test_create_volume_group_with_tags() {
    let lvm = FakeLvm::new();
    lvm.client()
        .create_volume_group(&CreateVGOptions {
            common: CommonOptions {
                devices_file: "test.devices".into(),
                ..Default::default()
            },
            name: "vg0".into(),
            pv_names: vec!["/dev/nbd0".into()],
            tags: vec!["lvm2-test".into()],
            ..Default::default()
        })
        .unwrap();

    assert_eq!(
        lvm.args(),
        [
            "vgcreate",
            "--yes",
            "--devicesfile=test.devices",
            "--addtag=lvm2-test",
            "vg0",
            "/dev/nbd0"
        ]
    );
}

#[test]
#[serial]
fn test_yes_no_switches() {
    let lvm = FakeLvm::new();
    let client = lvm.client();

    client
        .update_volume_group(&UpdateVGOptions {
            name: "vg0".into(),
            activate: NO,
            ..Default::default()
        })
        .unwrap();
    assert_eq!(lvm.args(), ["vgchange", "--yes", "--activate=n", "vg0"]);

    client
        .update_volume_group(&UpdateVGOptions {
            name: "vg0".into(),
            activate: YES,
            add_tags: vec!["a".into(), "b".into()],
            ..Default::default()
        })
        .unwrap();
    assert_eq!(
        lvm.args(),
        ["vgchange", "--yes", "--activate=y", "--addtag=a", "--addtag=b", "vg0"]
    );
}

#[test]
#[serial]
fn test_convert_layout() {
    let lvm = FakeLvm::new();
    lvm.client()
        .convert_logical_volume_layout(&ConvertLVLayoutOptions {
            name: "vg0/data".into(),
            r#type: "raid1".into(),
            mirrors: Some(1),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(
        lvm.args(),
        ["lvconvert", "--yes", "--type=raid1", "--mirrors=1", "vg0/data"]
    );
}

// =============================================================================
// Reports
// =============================================================================

#[test]
#[serial]
fn test_list_physical_volumes() {
    let lvm = FakeLvm::new().stdout(
        r#"{
  "report": [
    {
      "pv": [
        {"pv_name":"/dev/nbd0", "vg_name":"vg0", "pv_size":"100.00m", "pv_tags":"x,y"}
      ]
    }
  ]
}"#,
    );

    let pvs = lvm
        .client()
        .list_physical_volumes(Some(&ListPVOptions {
            names: vec!["/dev/nbd0".into()],
            ..Default::default()
        }))
        .unwrap();

    assert_eq!(pvs.len(), 1);
    assert_eq!(pvs[0].name, "/dev/nbd0");
    assert_eq!(pvs[0].size, "100.00m");
    assert_eq!(pvs[0].tag_list(), ["x", "y"]);
    assert_eq!(
        lvm.args(),
        [
            "pvs",
            "--reportformat=json",
            "--binary",
            "--options=pv_all,vg_name",
            "/dev/nbd0"
        ]
    );
}

#[test]
#[serial]
fn test_list_without_options() {
    let lvm = FakeLvm::new().stdout(r#"{"report":[{"vg":[{"vg_name":"vg0"},{"vg_name":"vg1"}]}]}"#);

    let vgs = lvm.client().list_volume_groups(None).unwrap();

    let names: Vec<_> = vgs.iter().map(|vg| vg.name.as_str()).collect();
    assert_eq!(names, ["vg0", "vg1"]);
    assert_eq!(
        lvm.args(),
        ["vgs", "--reportformat=json", "--binary", "--options=vg_all"]
    );
}

#[test]
#[serial]
fn test_list_with_select() {
    let lvm = FakeLvm::new().stdout(r#"{"report":[{"vg":[]}]}"#);

    let vgs = lvm
        .client()
        .list_volume_groups(Some(&ListVGOptions {
            report: ReportOptions {
                select: "vg_tags=lvm2-test".into(),
                ..Default::default()
            },
            ..Default::default()
        }))
        .unwrap();

    assert!(vgs.is_empty());
    assert_eq!(lvm.args().last().unwrap(), "--select=vg_tags=lvm2-test");
}

#[test]
#[serial]
fn test_list_logical_volume_segments() {
    let lvm = FakeLvm::new().stdout(
        r#"{"report":[{"lv":[
            {"lv_name":"data","vg_name":"vg0","lv_size":"200.00m","segtype":"linear","seg_size":"100.00m"},
            {"lv_name":"data","vg_name":"vg0","lv_size":"200.00m","segtype":"linear","seg_size":"100.00m"}
        ]}]}"#,
    );

    let lvs = lvm
        .client()
        .list_logical_volumes(Some(&ListLVOptions {
            names: vec!["vg0/data".into()],
            ..Default::default()
        }))
        .unwrap();

    assert_eq!(lvs.len(), 2);
    assert!(lvs.iter().all(|lv| lv.size == "200.00m" && lv.segtype == "linear"));
}

#[test]
#[serial]
fn test_malformed_report() {
    let lvm = FakeLvm::new().stdout("  WARNING: something odd\n");

    let err = lvm.client().list_logical_volumes(None).unwrap_err();
    assert!(matches!(err, Lvm2Error::Report(_)));
    assert!(err.to_string().contains("failed to parse lvm output"));
}

// =============================================================================
// Failures
// =============================================================================

#[test]
#[serial]
fn test_failure_carries_stderr() {
    let lvm = FakeLvm::new()
        .stdout(r#"{"report":[{"pv":[]}]}"#)
        .stderr("  Failed to find physical volume \"/dev/nbd9\".\n")
        .status(5);

    let err = lvm
        .client()
        .list_physical_volumes(Some(&ListPVOptions {
            names: vec!["/dev/nbd9".into()],
            ..Default::default()
        }))
        .unwrap_err();

    assert_eq!(err.stderr(), Some("Failed to find physical volume \"/dev/nbd9\"."));
    assert!(err.to_string().contains("Failed to find physical volume"));
    assert!(matches!(
        err,
        Lvm2Error::Command(RunError::Failed { .. })
    ));
}

#[test]
#[serial]
fn test_missing_binary() {
    let client = Client::builder()
        .lvm_path("/nonexistent/sbin/lvm")
        .build();
    let err = client.list_volume_groups(None).unwrap_err();
    assert!(matches!(err, Lvm2Error::Command(RunError::Spawn { .. })));
}

#[test]
#[serial]
fn test_timeout() {
    let lvm = FakeLvm::new().sleep(5);
    let client = Client::builder()
        .lvm_path(lvm.path())
        .timeout(Duration::from_millis(200))
        .build();

    let err = client.list_volume_groups(None).unwrap_err();
    assert!(matches!(err, Lvm2Error::Command(RunError::Timeout { .. })));
}

#[test]
#[serial]
fn test_cancelled_before_start() {
    let lvm = FakeLvm::new();
    let token = CancelToken::new();
    token.cancel();

    let err = lvm
        .client()
        .with_cancel_token(token)
        .remove_volume_group(&Default::default())
        .unwrap_err();
    assert!(matches!(err, Lvm2Error::Command(RunError::Cancelled { .. })));
}
