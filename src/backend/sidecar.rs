//! Local backend process management

use std::process::{Child, Command, Stdio};

use crate::error::{Error, Result};

/// Manages a backend server started alongside the window
pub struct Sidecar {
    process: Option<Child>,
    command: Vec<String>,
}

impl Sidecar {
    /// `command` is the program followed by its arguments,
    /// e.g. `["uvicorn", "main:app", "--port", "8000"]`.
    pub fn new(command: Vec<String>) -> Self {
        Self {
            process: None,
            command,
        }
    }

    /// Start the backend
    pub fn start(&mut self) -> Result<()> {
        if self.process.is_some() {
            return Ok(());
        }

        let (program, args) = self
            .command
            .split_first()
            .ok_or_else(|| Error::Backend("empty backend command".to_string()))?;

        let child = Command::new(program)
            .args(args)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| Error::Backend(format!("failed to start {}: {}", program, e)))?;

        tracing::info!("Started backend {:?} (pid {})", self.command, child.id());
        self.process = Some(child);
        Ok(())
    }

    /// Stop the backend
    pub fn stop(&mut self) {
        if let Some(mut process) = self.process.take() {
            let _ = process.kill();
            let _ = process.wait();
            tracing::info!("Stopped backend");
        }
    }

    /// Check if the backend is still running
    pub fn is_running(&mut self) -> bool {
        if let Some(ref mut process) = self.process {
            match process.try_wait() {
                Ok(Some(_)) => {
                    self.process = None;
                    false
                }
                Ok(None) => true,
                Err(_) => false,
            }
        } else {
            false
        }
    }
}

impl Drop for Sidecar {
    fn drop(&mut self) {
        self.stop();
    }
}
