//! Wrapper around the external synchronization executable.
//!
//! The actual file crawling lives in an opaque helper binary; this crate
//! only starts it, skips the start when a previous run is still alive, and
//! reports the outcome. Periodic triggering lives in [`scheduler`].

pub mod scheduler;

pub use scheduler::Scheduler;

use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;
use tracing::{info, warn};

/// Directory the helper keeps its session state in, under its work dir.
const STATE_DIR_NAME: &str = "browser_data";

/// Where the helper lives and what it is pointed at.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Path to the synchronization executable.
    pub executable: PathBuf,
    /// Directory the helper downloads files into.
    pub target_dir: PathBuf,
    /// Directory the helper treats as its own root (second argument; its
    /// state directory is derived from this).
    pub work_dir: PathBuf,
}

/// Argument selecting what the helper should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncMode {
    /// Regular incremental synchronization.
    Sync,
    /// First-time setup / dependency download.
    Setup,
}

impl SyncMode {
    pub fn code(&self) -> &'static str {
        match self {
            SyncMode::Sync => "sync",
            SyncMode::Setup => "setup",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The helper ran and exited cleanly.
    Completed,
    /// A previous run is still alive; nothing was started.
    AlreadyRunning,
}

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("invalid runner configuration: {message}")]
    InvalidConfiguration { message: String },
    #[error("failed to start {executable}: {message}")]
    Spawn { executable: String, message: String },
    #[error("sync run failed with status {status}: {stderr}")]
    Failed { status: i32, stderr: String },
    #[error("io error: {0}")]
    Io(String),
}

#[derive(Debug)]
pub struct SyncRunner {
    cfg: RunnerConfig,
    exe_name: String,
}

impl SyncRunner {
    pub fn new(cfg: RunnerConfig) -> Result<Self, RunnerError> {
        let executable = resolve_existing_path(&cfg.executable, "sync executable")?;
        let exe_name = executable
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| RunnerError::InvalidConfiguration {
                message: format!("`{}` has no file name", executable.display()),
            })?;
        Ok(Self {
            cfg: RunnerConfig { executable, ..cfg },
            exe_name,
        })
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.cfg
    }

    /// Run the helper in the given mode and wait for it to exit.
    ///
    /// When a process with the helper's executable name is already alive
    /// the start is skipped and [`SyncOutcome::AlreadyRunning`] returned.
    pub fn run(&self, mode: SyncMode) -> Result<SyncOutcome, RunnerError> {
        if process_running(&self.exe_name) {
            info!(exe = %self.exe_name, "sync helper already running, skipping");
            return Ok(SyncOutcome::AlreadyRunning);
        }

        info!(mode = mode.code(), exe = %self.exe_name, "starting sync run");
        let output = Command::new(&self.cfg.executable)
            .arg(&self.cfg.target_dir)
            .arg(&self.cfg.work_dir)
            .arg(mode.code())
            .output()
            .map_err(|e| RunnerError::Spawn {
                executable: self.cfg.executable.display().to_string(),
                message: e.to_string(),
            })?;

        if output.status.success() {
            info!(mode = mode.code(), "sync run finished");
            Ok(SyncOutcome::Completed)
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!(mode = mode.code(), %stderr, "sync run failed");
            Err(RunnerError::Failed {
                status: output.status.code().unwrap_or(-1),
                stderr,
            })
        }
    }

    /// Remove the helper's state directory so the next setup starts clean.
    /// A directory that is already gone counts as success.
    pub fn reset_data(&self) -> Result<(), RunnerError> {
        let state_dir = self.state_dir();
        match std::fs::remove_dir_all(&state_dir) {
            Ok(()) => {
                info!(dir = %state_dir.display(), "sync state reset");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(RunnerError::Io(e.to_string())),
        }
    }

    pub fn state_dir(&self) -> PathBuf {
        self.cfg.work_dir.join(STATE_DIR_NAME)
    }
}

fn resolve_existing_path(path: &Path, what: &str) -> Result<PathBuf, RunnerError> {
    if path.exists() {
        Ok(path.to_path_buf())
    } else {
        Err(RunnerError::InvalidConfiguration {
            message: format!("{what} `{}` does not exist", path.display()),
        })
    }
}

/// Best-effort process-table probe by executable name. Probe failures read
/// as "not running" so a broken probe never blocks synchronization.
#[cfg(windows)]
fn process_running(exe_name: &str) -> bool {
    let output = match Command::new("tasklist").output() {
        Ok(o) => o,
        Err(_) => return false,
    };
    String::from_utf8_lossy(&output.stdout)
        .to_lowercase()
        .contains(&exe_name.to_lowercase())
}

#[cfg(not(windows))]
fn process_running(exe_name: &str) -> bool {
    Command::new("pgrep")
        .arg("-x")
        .arg(exe_name)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}
