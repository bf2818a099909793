//! System info report
//!
//! Each line comes from its own probe. A probe that fails, is missing or
//! returns garbage drops only its own line; the rest of the report is unaffected.

use crate::ansi;
use crate::host::{DiskUsage, Host};
use std::io::Write;
use std::path::Path;
use tracing::debug;

pub const UPTIME_COUNTER_FILE: &str = "/proc/uptime";

const GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// One labelled line of the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoLine {
    pub label: &'static str,
    pub value: String,
}

impl InfoLine {
    fn new(label: &'static str, value: String) -> Self {
        Self { label, value }
    }
}

pub fn platform_line(host: &dyn Host) -> Option<InfoLine> {
    let p = host.platform()?;
    let value = [p.name, p.release, p.machine]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    Some(InfoLine::new("Platform:", value))
}

pub fn runtime_line(host: &dyn Host) -> Option<InfoLine> {
    host.runtime_version()
        .map(|version| InfoLine::new("Rust:", version))
}

pub fn uname_line(host: &dyn Host) -> Option<InfoLine> {
    host.command_output("uname", &["-a"])
        .map(|uname| InfoLine::new("Uname:", uname))
}

/// Prefer `uptime -p`; fall back to the kernel's uptime counter.
pub fn uptime_line(host: &dyn Host) -> Option<InfoLine> {
    let pretty = host.command_output("uptime", &["-p"]).or_else(|| {
        let counter = host.read_to_string(Path::new(UPTIME_COUNTER_FILE))?;
        let parsed = parse_uptime_counter(&counter);
        if parsed.is_none() {
            debug!("uptime counter present but unparseable");
        }
        parsed
    })?;
    Some(InfoLine::new("Uptime:", pretty))
}

/// Turn the first field of an uptime counter ("350735.47 234388.90") into "4d 1h 25m".
pub fn parse_uptime_counter(contents: &str) -> Option<String> {
    let secs: f64 = contents.split_whitespace().next()?.parse().ok()?;
    if !secs.is_finite() || secs < 0.0 {
        return None;
    }
    let mins = (secs / 60.0) as u64;
    let hrs = mins / 60;
    let days = hrs / 24;
    Some(format!("{}d {}h {}m", days, hrs % 24, mins % 60))
}

pub fn format_gib(bytes: u64) -> String {
    format!("{:.2} GiB", bytes as f64 / GIB)
}

pub fn disk_line(host: &dyn Host) -> Option<InfoLine> {
    let cwd = host.current_dir()?;
    let DiskUsage { total, used, free } = host.disk_usage(&cwd)?;
    Some(InfoLine::new(
        "Disk (cwd):",
        format!(
            "{} used: {} free: {}",
            format_gib(total),
            format_gib(used),
            format_gib(free)
        ),
    ))
}

/// Run every probe and keep the lines that produced something.
pub fn collect(host: &dyn Host) -> Vec<InfoLine> {
    let probes: [fn(&dyn Host) -> Option<InfoLine>; 5] = [
        platform_line,
        runtime_line,
        uname_line,
        uptime_line,
        disk_line,
    ];
    probes.iter().filter_map(|probe| probe(host)).collect()
}

pub fn show_system_info<W: Write>(out: &mut W, host: &dyn Host) -> std::io::Result<()> {
    writeln!(out, "{}", ansi::bold("System Info"))?;
    for line in collect(host) {
        writeln!(out, "{:<11} {}", line.label, line.value)?;
    }
    writeln!(out)?;
    Ok(())
}
