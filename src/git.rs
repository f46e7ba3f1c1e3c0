use crate::error::CitError;
use async_trait::async_trait;
use std::fmt;
use std::io::Write;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// One invocation of the git executable, without the executable itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitStep {
    args: Vec<String>,
    capture_stderr: bool,
}

impl GitStep {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            capture_stderr: false,
        }
    }

    /// Capture standard error so a failure can be inspected. The captured
    /// text is still echoed back to the user.
    pub fn capturing_stderr(mut self) -> Self {
        self.capture_stderr = true;
        self
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn captures_stderr(&self) -> bool {
        self.capture_stderr
    }

    /// Full command line as the user would type it
    pub fn command_line(&self, executable: &str) -> String {
        if self.args.is_empty() {
            executable.to_string()
        } else {
            format!("{} {}", executable, self)
        }
    }
}

impl fmt::Display for GitStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.args.join(" "))
    }
}

/// Service that executes git steps
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GitRunner: Send + Sync {
    /// Run a single step to completion
    async fn run(&self, step: &GitStep) -> Result<(), CitError>;
}

/// Runs steps as child processes, one at a time
#[derive(Debug, Clone)]
pub struct ProcessGit {
    executable: String,
}

impl ProcessGit {
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
        }
    }
}

#[async_trait]
impl GitRunner for ProcessGit {
    async fn run(&self, step: &GitStep) -> Result<(), CitError> {
        let command = step.command_line(&self.executable);
        debug!(%command, "running");

        let mut cmd = Command::new(&self.executable);
        cmd.args(step.args())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit());

        let (status, stderr) = if step.captures_stderr() {
            let output = cmd
                .stderr(Stdio::piped())
                .output()
                .await
                .map_err(|source| CitError::Spawn {
                    command: command.clone(),
                    source,
                })?;
            // Best effort, the user still gets the exit status if this fails
            let _ = std::io::stderr().write_all(&output.stderr);
            (
                output.status,
                String::from_utf8_lossy(&output.stderr).into_owned(),
            )
        } else {
            let status = cmd
                .stderr(Stdio::inherit())
                .status()
                .await
                .map_err(|source| CitError::Spawn {
                    command: command.clone(),
                    source,
                })?;
            (status, String::new())
        };

        if !status.success() {
            // Callers decide whether a failure is worth surfacing
            debug!(%command, code = ?status.code(), "command failed");
            return Err(CitError::CommandFailed {
                command,
                code: status.code(),
                stderr,
            });
        }

        Ok(())
    }
}

/// Prints each step instead of running it
#[derive(Debug, Clone)]
pub struct DryRunGit {
    executable: String,
}

impl DryRunGit {
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
        }
    }
}

#[async_trait]
impl GitRunner for DryRunGit {
    async fn run(&self, step: &GitStep) -> Result<(), CitError> {
        println!("🔍 would run: {}", step.command_line(&self.executable));
        Ok(())
    }
}
