//! Command-line definition and dispatch.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use lvm2::{
    argv, Client, CreateLVOptions, CreatePVOptions, CreateVGOptions, ListLVOptions, ListPVOptions,
    ListVGOptions, RemoveLVOptions, ReportOptions, UpdateVGOptions, YesNo, DEFAULT_LVM_PATH,
};
use serde_json::Value;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "lvmctl", version, about = "Manage LVM volumes through typed requests")]
pub struct Cli {
    /// Path of the lvm binary.
    #[arg(long, env = "LVM_PATH", default_value = DEFAULT_LVM_PATH, global = true)]
    pub lvm_path: PathBuf,

    /// Kill lvm if it runs longer than this many seconds.
    #[arg(long, value_name = "SECONDS", global = true)]
    pub timeout: Option<u64>,

    /// Print the lvm command line instead of running it.
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List physical volumes.
    Pvs {
        #[arg(long)]
        select: Option<String>,
        names: Vec<String>,
    },
    /// List volume groups.
    Vgs {
        #[arg(long)]
        select: Option<String>,
        names: Vec<String>,
    },
    /// List logical volumes.
    Lvs {
        #[arg(long)]
        select: Option<String>,
        /// Include internal volumes.
        #[arg(long)]
        all: bool,
        names: Vec<String>,
    },
    /// Initialize a device as a physical volume.
    Pvcreate {
        device: String,
        #[arg(long)]
        force: bool,
    },
    /// Create a volume group.
    Vgcreate {
        name: String,
        #[arg(required = true)]
        devices: Vec<String>,
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
    /// Change volume group attributes.
    Vgchange {
        name: String,
        /// Activate (y) or deactivate (n) every volume in the group.
        #[arg(long, value_parser = parse_yes_no)]
        activate: Option<YesNo>,
        #[arg(long = "addtag")]
        add_tags: Vec<String>,
    },
    /// Create a logical volume.
    Lvcreate {
        vg: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        size: String,
        #[arg(long = "type")]
        segment_type: Option<String>,
    },
    /// Remove a logical volume (`vg/lv`).
    Lvremove { name: String },
}

fn parse_yes_no(value: &str) -> std::result::Result<YesNo, String> {
    match value {
        "y" | "yes" => Ok(YesNo(true)),
        "n" | "no" => Ok(YesNo(false)),
        other => Err(format!("expected y or n, got '{}'", other)),
    }
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let request = Request::from(self.command);

        if self.dry_run {
            let mut line = vec![self.lvm_path.display().to_string()];
            line.extend(request.argv());
            println!("{}", shell_words::join(line));
            return Ok(());
        }

        let mut builder = Client::builder().lvm_path(&self.lvm_path);
        if let Some(secs) = self.timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build();

        info!(command = request.name(), "running lvm");
        if let Some(report) = request
            .execute(&client)
            .with_context(|| format!("{} failed", request.name()))?
        {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Ok(())
    }
}

/// A parsed command, as lvm2 options.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    ListPv(ListPVOptions),
    ListVg(ListVGOptions),
    ListLv(ListLVOptions),
    CreatePv(CreatePVOptions),
    CreateVg(CreateVGOptions),
    UpdateVg(UpdateVGOptions),
    CreateLv(CreateLVOptions),
    RemoveLv(RemoveLVOptions),
}

fn report(select: Option<String>) -> ReportOptions {
    ReportOptions {
        select: select.unwrap_or_default(),
        ..Default::default()
    }
}

impl From<Command> for Request {
    fn from(command: Command) -> Self {
        match command {
            Command::Pvs { select, names } => Request::ListPv(ListPVOptions {
                report: report(select),
                names,
                ..Default::default()
            }),
            Command::Vgs { select, names } => Request::ListVg(ListVGOptions {
                report: report(select),
                names,
                ..Default::default()
            }),
            Command::Lvs { select, all, names } => Request::ListLv(ListLVOptions {
                report: report(select),
                all,
                names,
                ..Default::default()
            }),
            Command::Pvcreate { device, force } => Request::CreatePv(CreatePVOptions {
                name: device,
                force,
                ..Default::default()
            }),
            Command::Vgcreate {
                name,
                devices,
                tags,
            } => Request::CreateVg(CreateVGOptions {
                name,
                pv_names: devices,
                tags,
                ..Default::default()
            }),
            Command::Vgchange {
                name,
                activate,
                add_tags,
            } => Request::UpdateVg(UpdateVGOptions {
                name,
                activate,
                add_tags,
                ..Default::default()
            }),
            Command::Lvcreate {
                vg,
                name,
                size,
                segment_type,
            } => Request::CreateLv(CreateLVOptions {
                vg_name: vg,
                name,
                size,
                r#type: segment_type.unwrap_or_default(),
                ..Default::default()
            }),
            Command::Lvremove { name } => Request::RemoveLv(RemoveLVOptions {
                name,
                ..Default::default()
            }),
        }
    }
}

impl Request {
    /// lvm arguments this request runs with.
    pub fn argv(&self) -> Vec<String> {
        match self {
            Request::ListPv(opts) => argv(opts),
            Request::ListVg(opts) => argv(opts),
            Request::ListLv(opts) => argv(opts),
            Request::CreatePv(opts) => argv(opts),
            Request::CreateVg(opts) => argv(opts),
            Request::UpdateVg(opts) => argv(opts),
            Request::CreateLv(opts) => argv(opts),
            Request::RemoveLv(opts) => argv(opts),
        }
    }

    /// The lvm sub-command name.
    pub fn name(&self) -> &'static str {
        match self {
            Request::ListPv(_) => "pvs",
            Request::ListVg(_) => "vgs",
            Request::ListLv(_) => "lvs",
            Request::CreatePv(_) => "pvcreate",
            Request::CreateVg(_) => "vgcreate",
            Request::UpdateVg(_) => "vgchange",
            Request::CreateLv(_) => "lvcreate",
            Request::RemoveLv(_) => "lvremove",
        }
    }

    /// Run the request. Listing requests return their records as JSON.
    pub fn execute(&self, client: &Client) -> Result<Option<Value>> {
        match self {
            Request::ListPv(opts) => Ok(Some(serde_json::to_value(
                client.list_physical_volumes(Some(opts))?,
            )?)),
            Request::ListVg(opts) => Ok(Some(serde_json::to_value(
                client.list_volume_groups(Some(opts))?,
            )?)),
            Request::ListLv(opts) => Ok(Some(serde_json::to_value(
                client.list_logical_volumes(Some(opts))?,
            )?)),
            Request::CreatePv(opts) => {
                client.create_physical_volume(opts)?;
                Ok(None)
            }
            Request::CreateVg(opts) => {
                client.create_volume_group(opts)?;
                Ok(None)
            }
            Request::UpdateVg(opts) => {
                client.update_volume_group(opts)?;
                Ok(None)
            }
            Request::CreateLv(opts) => {
                client.create_logical_volume(opts)?;
                Ok(None)
            }
            Request::RemoveLv(opts) => {
                client.remove_logical_volume(opts)?;
                Ok(None)
            }
        }
    }
}
