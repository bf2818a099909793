//! Host probes
//!
//! Every question gurt asks the operating system goes through [`Host`]. Each
//! method is an independent, best-effort probe: `None` means "not available
//! here" and callers simply skip whatever they would have printed.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
#[cfg(not(unix))]
use sysinfo::Disks;
use sysinfo::System;
use tracing::debug;

/// OS identity as reported by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platform {
    pub name: String,
    pub release: String,
    pub machine: String,
}

/// Space on one filesystem, in bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiskUsage {
    pub total: u64,
    pub used: u64,
    pub free: u64,
}

impl DiskUsage {
    /// Sizes from raw `statvfs` counts, as `df` reports them: blocks reserved
    /// for root are neither used nor free.
    pub fn from_blocks(
        blocks: u64,
        blocks_free: u64,
        blocks_available: u64,
        fragment_size: u64,
    ) -> Self {
        Self {
            total: blocks.saturating_mul(fragment_size),
            used: blocks.saturating_sub(blocks_free).saturating_mul(fragment_size),
            free: blocks_available.saturating_mul(fragment_size),
        }
    }
}

/// Best-effort access to facts about the machine.
pub trait Host {
    fn platform(&self) -> Option<Platform>;

    /// Version string of the toolchain this binary was built with
    fn runtime_version(&self) -> Option<String>;

    /// Trimmed stdout of `program args...`, or `None` if it could not run,
    /// exited non-zero or printed nothing.
    fn command_output(&self, program: &str, args: &[&str]) -> Option<String>;

    fn read_to_string(&self, path: &Path) -> Option<String>;

    fn current_dir(&self) -> Option<PathBuf>;

    /// Usage of the filesystem holding `path`
    fn disk_usage(&self, path: &Path) -> Option<DiskUsage>;
}

/// The real machine.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemHost;

impl SystemHost {
    pub fn new() -> Self {
        Self
    }
}

impl Host for SystemHost {
    fn platform(&self) -> Option<Platform> {
        let name = System::name().unwrap_or_else(|| std::env::consts::OS.to_string());
        let release = System::kernel_version().unwrap_or_default();
        Some(Platform {
            name,
            release,
            machine: std::env::consts::ARCH.to_string(),
        })
    }

    fn runtime_version(&self) -> Option<String> {
        option_env!("GURT_RUSTC_VERSION").map(str::to_string)
    }

    fn command_output(&self, program: &str, args: &[&str]) -> Option<String> {
        let output = match Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
        {
            Ok(output) => output,
            Err(e) => {
                debug!(program, error = %e, "probe command could not be started");
                return None;
            }
        };

        if !output.status.success() {
            debug!(program, status = %output.status, "probe command failed");
            return None;
        }

        let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    fn read_to_string(&self, path: &Path) -> Option<String> {
        match fs::read_to_string(path) {
            Ok(contents) => Some(contents),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "probe file unreadable");
                None
            }
        }
    }

    fn current_dir(&self) -> Option<PathBuf> {
        std::env::current_dir().ok()
    }

    #[cfg(unix)]
    fn disk_usage(&self, path: &Path) -> Option<DiskUsage> {
        match nix::sys::statvfs::statvfs(path) {
            Ok(stat) => Some(DiskUsage::from_blocks(
                u64::from(stat.blocks()),
                u64::from(stat.blocks_free()),
                u64::from(stat.blocks_available()),
                u64::from(stat.fragment_size()),
            )),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "statvfs failed");
                None
            }
        }
    }

    #[cfg(not(unix))]
    fn disk_usage(&self, path: &Path) -> Option<DiskUsage> {
        let path = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        let disks = Disks::new_with_refreshed_list();

        // The filesystem holding `path` is the deepest mount point above it
        let disk = disks
            .list()
            .iter()
            .filter(|disk| path.starts_with(disk.mount_point()))
            .max_by_key(|disk| disk.mount_point().components().count())?;

        let total = disk.total_space();
        let free = disk.available_space();
        Some(DiskUsage {
            total,
            used: total.saturating_sub(free),
            free,
        })
    }
}
