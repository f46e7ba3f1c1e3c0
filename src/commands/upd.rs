use crate::commands::{run_steps, Handler};
use crate::git::{GitRunner, GitStep};
use anyhow::Result;

/// Upd command implementation: stage the current directory
pub struct UpdCommand;

impl Handler for UpdCommand {
    type Args = ();

    async fn execute(&self, _args: (), git: &dyn GitRunner) -> Result<()> {
        run_steps(git, &[GitStep::new(["add", "."])]).await?;
        Ok(())
    }
}
