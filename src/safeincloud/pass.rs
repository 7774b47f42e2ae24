//! CLI bridge for `pass`, the standard unix password store.
//!
//! Spawns one `pass insert --multiline <path>` subprocess per entry and
//! feeds the formatted text over stdin. The call blocks until pass exits
//! and no timeout is applied, so a stuck gpg pinentry stalls the run.

use log::debug;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use super::error::{ImportError, ImportResult};

/// Destination store abstraction. The import loop only needs "persist this
/// text block under this path"; everything else about the store (format,
/// encryption, git) belongs to the external tool.
pub trait SecretStore {
    fn insert(&self, path: &str, entry: &str) -> ImportResult<()>;
}

/// `pass` subprocess bridge.
#[derive(Debug, Clone, Default)]
pub struct PassCli {
    /// Path to the `pass` binary (None = look in PATH).
    cli_path: Option<String>,
    /// PASSWORD_STORE_DIR for the child process (None = pass default).
    store_dir: Option<PathBuf>,
}

impl PassCli {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the `pass` binary location.
    pub fn with_cli_path(mut self, path: &str) -> Self {
        self.cli_path = Some(path.to_string());
        self
    }

    /// Point pass at a non-default store directory.
    pub fn with_store_dir(mut self, dir: PathBuf) -> Self {
        self.store_dir = Some(dir);
        self
    }

    fn pass_path(&self) -> &str {
        self.cli_path.as_deref().unwrap_or("pass")
    }
}

impl SecretStore for PassCli {
    fn insert(&self, path: &str, entry: &str) -> ImportResult<()> {
        debug!("running: {} insert --multiline {}", self.pass_path(), path);

        let mut cmd = Command::new(self.pass_path());
        cmd.args(["insert", "--multiline", path])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(ref dir) = self.store_dir {
            cmd.env("PASSWORD_STORE_DIR", dir);
        }

        let mut child = cmd.spawn().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ImportError::PassNotFound(self.pass_path().to_string())
            } else {
                ImportError::Io(e.to_string())
            }
        })?;

        let write_result = child
            .stdin
            .as_mut()
            .ok_or_else(|| ImportError::Io("could not open pass stdin".into()))?
            .write_all(entry.as_bytes());
        if let Err(e) = write_result {
            // A fast-failing pass closes its stdin before we finish writing;
            // the exit status below carries the real diagnostic.
            if e.kind() != std::io::ErrorKind::BrokenPipe {
                return Err(e.into());
            }
        }

        // Blocking wait; also closes stdin so pass sees EOF.
        let output = child.wait_with_output()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = if stderr.trim().is_empty() {
                format!("pass exited with code {}", output.status.code().unwrap_or(-1))
            } else {
                stderr.trim().to_string()
            };
            debug!("pass insert {} failed: {}", path, message);
            return Err(ImportError::Store { path: path.to_string(), message });
        }

        Ok(())
    }
}
