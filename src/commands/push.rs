use crate::cli::args::PushOptions;
use crate::commands::Handler;
use crate::error::CitError;
use crate::git::{GitRunner, GitStep};
use anyhow::Result;
use tracing::warn;

/// Text git prints when it refuses to proceed over a dirty working tree.
/// Matched case-insensitively; the wording depends on git version and locale.
const UNCOMMITTED_CHANGES: &str = "uncommitted changes";

/// Push command implementation
pub struct PushCommand;

impl PushCommand {
    /// Explicit files are staged and pushed without force
    pub fn plan(&self, options: &PushOptions) -> Vec<GitStep> {
        if !options.files.is_empty() {
            // Paths starting with `-` must not be read as options
            let mut add = vec!["add".to_string(), "--".to_string()];
            add.extend(options.files.iter().cloned());
            return vec![
                GitStep::new(add).capturing_stderr(),
                GitStep::new(["push"]).capturing_stderr(),
            ];
        }

        let push = if options.force {
            GitStep::new(["push", "--force"])
        } else {
            GitStep::new(["push"])
        };
        vec![push.capturing_stderr()]
    }
}

impl Handler for PushCommand {
    type Args = PushOptions;

    async fn execute(&self, args: PushOptions, git: &dyn GitRunner) -> Result<()> {
        if args.force && !args.files.is_empty() {
            warn!("--force is ignored when files are given");
        }

        for step in self.plan(&args) {
            git.run(&step).await.map_err(classify_failure)?;
        }
        Ok(())
    }
}

/// Turn a failure mentioning uncommitted changes into its own error
fn classify_failure(err: CitError) -> CitError {
    match err {
        CitError::CommandFailed { ref stderr, .. }
            if stderr.to_lowercase().contains(UNCOMMITTED_CHANGES) =>
        {
            CitError::UncommittedChanges
        }
        other => other,
    }
}
