use crate::cli::args::LogOptions;
use crate::commands::{run_steps, Handler};
use crate::git::{GitRunner, GitStep};
use anyhow::Result;

/// Log command implementation
pub struct LogCommand;

impl LogCommand {
    /// Only flags that were asked for are passed on
    pub fn plan(&self, options: &LogOptions) -> GitStep {
        let mut args = vec!["log".to_string()];
        if options.short {
            args.push("--oneline".to_string());
        }
        if let Some(amount) = options.amount {
            args.push("-n".to_string());
            args.push(amount.to_string());
        }
        GitStep::new(args)
    }
}

impl Handler for LogCommand {
    type Args = LogOptions;

    async fn execute(&self, args: LogOptions, git: &dyn GitRunner) -> Result<()> {
        run_steps(git, &[self.plan(&args)]).await?;
        Ok(())
    }
}
