pub mod commit;
pub mod config;
pub mod diff;
pub mod help;
pub mod log;
pub mod push;
pub mod switch;
pub mod undo;
pub mod upd;

pub use commit::CommitCommand;
pub use config::ConfigCommand;
pub use diff::DiffCommand;
pub use help::HelpCommand;
pub use log::LogCommand;
pub use push::PushCommand;
pub use switch::SwitchCommand;
pub use undo::UndoCommand;
pub use upd::UpdCommand;

use crate::error::CitError;
use crate::git::{GitRunner, GitStep};
use anyhow::Result;

/// A cit command: turns its arguments into git invocations and runs them
pub trait Handler {
    type Args;

    async fn execute(&self, args: Self::Args, git: &dyn GitRunner) -> Result<()>;
}

/// Run steps in order, stopping at the first failure
pub async fn run_steps(git: &dyn GitRunner, steps: &[GitStep]) -> Result<(), CitError> {
    for step in steps {
        git.run(step).await?;
    }
    Ok(())
}
