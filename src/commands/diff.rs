use crate::commands::{run_steps, Handler};
use crate::git::{GitRunner, GitStep};
use anyhow::Result;

/// Diff command implementation
pub struct DiffCommand;

impl Handler for DiffCommand {
    type Args = ();

    async fn execute(&self, _args: (), git: &dyn GitRunner) -> Result<()> {
        run_steps(git, &[GitStep::new(["diff"])]).await?;
        Ok(())
    }
}
