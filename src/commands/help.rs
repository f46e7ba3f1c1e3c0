use crate::commands::commit::CommitType;
use crate::commands::Handler;
use crate::git::GitRunner;
use anyhow::Result;
use std::fmt::Write;

const COMMANDS: &str = "
🢒 Help menu
    • commit, c         Commits with a meaningful commit message
    • push, p           Pushes the current branch to the remote if no changes
    • upd               Runs 'git add .' command
    • undo, u           Undoes the last commit
    • log, l            Shows the git log
    • switch, s         Switch branches, creating as needed
    • diff, d           Shows the git diff
";

const PUSH_ALL_EXAMPLE: &str = "
🢒 Push all files to the repository:
    • cit commit -t Fix -m 'Fixed Push init'
    • cit upd
    • cit push
";

const PUSH_ONE_EXAMPLE: &str = "
🢒 Push one file to the repository:
    • cit commit -t Feature -m 'Added math function'
    • cit push src/math.rs
";

/// The static help menu: commands, the emoji table and two usage examples
pub fn render() -> String {
    let mut text = String::from(COMMANDS);
    text.push_str("\n🢒 Emojis for commit types\n");
    for commit_type in CommitType::ALL {
        // Writing to a String cannot fail
        let _ = writeln!(text, "    {} \t- {}", commit_type.emoji(), commit_type);
    }
    text.push_str(PUSH_ALL_EXAMPLE);
    text.push_str(PUSH_ONE_EXAMPLE);
    text
}

/// Shown for a missing or unrecognized command
pub struct HelpCommand;

impl Handler for HelpCommand {
    type Args = ();

    async fn execute(&self, _args: (), _git: &dyn GitRunner) -> Result<()> {
        println!("{}", render());
        Ok(())
    }
}
