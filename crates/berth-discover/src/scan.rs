use std::collections::HashSet;

use crate::ports::{extract_port, DEBUG_MARKER};

/// One debuggable process as seen by discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugTarget {
    pub pid: u32,
    pub port: u16,
    pub label: String,
    pub command: String,
}

/// Process discovery collaborator.
///
/// Returns at most one target per distinct port (first match wins, order
/// otherwise unspecified). An empty host process list is an empty result,
/// never an error.
pub trait ProcessLister {
    fn list(&mut self) -> Vec<DebugTarget>;
}

/// Build targets from raw `(pid, name, cmdline)` tuples: filter to command
/// lines containing `marker`, extract a port, dedupe by port.
pub fn targets_from_commands<I>(processes: I, marker: &str) -> Vec<DebugTarget>
where
    I: IntoIterator<Item = (u32, String, String)>,
{
    let mut seen: HashSet<u16> = HashSet::new();
    let mut targets = Vec::new();
    for (pid, name, cmdline) in processes {
        if !cmdline.contains(marker) {
            continue;
        }
        let port = match extract_port(&cmdline) {
            Some(p) => p,
            None => continue,
        };
        if !seen.insert(port) {
            continue;
        }
        targets.push(DebugTarget {
            pid,
            port,
            label: derive_label(&cmdline, &name),
            command: cmdline,
        });
    }
    // Sorted for stable display; callers must not rely on ordering.
    targets.sort_by_key(|t| t.port);
    targets
}

/// Label for a target: the script being debugged when one is visible in the
/// command line, the process name otherwise.
fn derive_label(cmdline: &str, name: &str) -> String {
    cmdline
        .split_whitespace()
        .rev()
        .find(|tok| tok.ends_with(".py"))
        .map(|tok| {
            tok.rsplit(['/', '\\'])
                .next()
                .unwrap_or(tok)
                .to_string()
        })
        .unwrap_or_else(|| name.to_string())
}

/// Production lister backed by the OS process table.
pub struct SystemLister {
    sys: sysinfo::System,
    marker: String,
}

impl SystemLister {
    pub fn new() -> Self {
        Self::with_marker(DEBUG_MARKER)
    }

    pub fn with_marker(marker: &str) -> Self {
        Self {
            sys: sysinfo::System::new(),
            marker: marker.to_string(),
        }
    }
}

impl Default for SystemLister {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessLister for SystemLister {
    fn list(&mut self) -> Vec<DebugTarget> {
        self.sys
            .refresh_processes(sysinfo::ProcessesToUpdate::All, true);
        let processes = self.sys.processes().iter().map(|(pid, process)| {
            let cmdline = process
                .cmd()
                .iter()
                .map(|a| a.to_string_lossy())
                .collect::<Vec<_>>()
                .join(" ");
            (
                pid.as_u32(),
                process.name().to_string_lossy().to_string(),
                cmdline,
            )
        });
        targets_from_commands(processes, &self.marker)
    }
}
