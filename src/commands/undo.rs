use crate::commands::{run_steps, Handler};
use crate::git::{GitRunner, GitStep};
use anyhow::Result;

/// Undo command implementation: soft reset of the last commit
pub struct UndoCommand;

impl Handler for UndoCommand {
    type Args = ();

    async fn execute(&self, _args: (), git: &dyn GitRunner) -> Result<()> {
        run_steps(git, &[GitStep::new(["reset", "--soft", "HEAD~1"])]).await?;
        Ok(())
    }
}
