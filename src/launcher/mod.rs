//! Opening a result in the editor
//!
//! Activation is fire-and-forget: the child process is spawned and handed to a
//! reaper thread that collects its exit status. Failures are only logged.

use std::process::{Child, Command, Stdio};
use std::thread;

use tracing::{debug, warn};

use crate::utils::is_uri;

const FOLDER_URI_FLAG: &str = "--folder-uri";

/// Trait for opening a folder (allows mocking in tests)
pub trait Launcher: Send + Sync {
    fn launch(&self, uri: &str);
}

/// Spawns the editor executable on the folder
#[derive(Debug, Clone)]
pub struct ProcessLauncher {
    program: String,
}

impl ProcessLauncher {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments passed to the editor for `uri`
    ///
    /// URIs (local `file://` or remote) go through `--folder-uri`; bare paths are passed as-is.
    pub fn args_for(uri: &str) -> Vec<&str> {
        if is_uri(uri) { vec![FOLDER_URI_FLAG, uri] } else { vec![uri] }
    }
}

impl Launcher for ProcessLauncher {
    fn launch(&self, uri: &str) {
        let args = Self::args_for(uri);
        let spawned = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match spawned {
            Ok(child) => {
                debug!(pid = child.id(), program = %self.program(), uri, "Launched editor");
                reap(child);
            }
            Err(e) => warn!("Failed to launch {} for {}: {}", self.program, uri, e),
        }
    }
}

/// Wait for `child` on a detached thread so it never lingers as a zombie
fn reap(mut child: Child) {
    let pid = child.id();
    let spawned = thread::Builder::new().name(format!("reap-{}", pid)).spawn(move || {
        match child.wait() {
            Ok(status) => debug!(pid, %status, "Editor launcher exited"),
            Err(e) => warn!("Failed to wait for editor process {}: {}", pid, e),
        }
    });

    if let Err(e) = spawned {
        warn!("Failed to start reaper for editor process {}: {}", pid, e);
    }
}
