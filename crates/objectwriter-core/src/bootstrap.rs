//! Makes sure the packaging tool exists before a recommended build.

use std::process::{Command, Stdio};

use crate::config::{InstallerConfig, PackagingConfig};
use crate::{CoreError, CoreResult};

/// Probes for the packaging tool and installs it on request.
#[derive(Debug, Clone, Default)]
pub struct Bootstrapper {
    packaging: PackagingConfig,
    installer: InstallerConfig,
}

impl Bootstrapper {
    pub fn new(packaging: PackagingConfig, installer: InstallerConfig) -> Self {
        Self {
            packaging,
            installer,
        }
    }

    /// Name of the tool being probed.
    pub fn tool(&self) -> &str {
        &self.packaging.tool
    }

    /// Runs `<tool> <version_flag>`.
    ///
    /// A spawn failure and a non-zero exit both count as "not installed".
    pub fn is_installed(&self) -> bool {
        let status = Command::new(&self.packaging.tool)
            .arg(&self.packaging.version_flag)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match status {
            Ok(status) => {
                tracing::debug!(
                    "{} {} exited with {}",
                    self.packaging.tool,
                    self.packaging.version_flag,
                    status
                );
                status.success()
            }
            Err(e) => {
                tracing::debug!("{} could not be started: {}", self.packaging.tool, e);
                false
            }
        }
    }

    /// Runs the installer and waits for it.
    pub fn install(&self) -> CoreResult<()> {
        tracing::info!(
            "Installing {} via {} {}",
            self.packaging.tool,
            self.installer.program,
            self.installer.args.join(" ")
        );

        let output = Command::new(&self.installer.program)
            .args(&self.installer.args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| CoreError::InstallationFailed {
                tool: self.packaging.tool.clone(),
                reason: e.to_string(),
            })?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let reason = match stderr.lines().rev().find(|l| !l.trim().is_empty()) {
                Some(line) => format!("{} ({})", output.status, line.trim()),
                None => output.status.to_string(),
            };
            Err(CoreError::InstallationFailed {
                tool: self.packaging.tool.clone(),
                reason,
            })
        }
    }
}
