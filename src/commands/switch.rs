use crate::cli::args::SwitchOptions;
use crate::commands::Handler;
use crate::git::{GitRunner, GitStep};
use anyhow::Result;
use tracing::debug;

/// Switch command implementation: check out a branch, creating it if needed
pub struct SwitchCommand;

impl SwitchCommand {
    pub fn checkout(branch: &str) -> GitStep {
        GitStep::new(["checkout", branch])
    }

    pub fn create(branch: &str) -> GitStep {
        GitStep::new(["checkout", "-b", branch])
    }
}

impl Handler for SwitchCommand {
    type Args = SwitchOptions;

    async fn execute(&self, args: SwitchOptions, git: &dyn GitRunner) -> Result<()> {
        // Any failure of the plain checkout gets exactly one retry with -b
        if let Err(err) = git.run(&Self::checkout(&args.branch)).await {
            debug!(branch = %args.branch, error = %err, "checkout failed, creating branch");
            git.run(&Self::create(&args.branch)).await?;
        }
        Ok(())
    }
}
