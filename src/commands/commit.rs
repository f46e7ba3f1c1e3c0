use crate::cli::args::CommitOptions;
use crate::commands::{run_steps, Handler};
use crate::error::CitError;
use crate::git::{GitRunner, GitStep};
use anyhow::Result;
use clap::ValueEnum;
use std::fmt;

/// Conventional commit label, matched case-sensitively on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CommitType {
    #[value(name = "Chore")]
    Chore,
    #[value(name = "Feature")]
    Feature,
    #[value(name = "Feat")]
    Feat,
    #[value(name = "Refactor")]
    Refactor,
    #[value(name = "Fix")]
    Fix,
    #[value(name = "Test")]
    Test,
    #[value(name = "Style")]
    Style,
    #[value(name = "Doc")]
    Doc,
    #[value(name = "Deps")]
    Deps,
    #[value(name = "Deploy")]
    Deploy,
    #[value(name = "Wip")]
    Wip,
}

impl CommitType {
    /// Every label, in help menu order
    pub const ALL: [CommitType; 11] = [
        CommitType::Chore,
        CommitType::Feature,
        CommitType::Feat,
        CommitType::Refactor,
        CommitType::Fix,
        CommitType::Test,
        CommitType::Style,
        CommitType::Doc,
        CommitType::Deps,
        CommitType::Deploy,
        CommitType::Wip,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CommitType::Chore => "Chore",
            CommitType::Feature => "Feature",
            CommitType::Feat => "Feat",
            CommitType::Refactor => "Refactor",
            CommitType::Fix => "Fix",
            CommitType::Test => "Test",
            CommitType::Style => "Style",
            CommitType::Doc => "Doc",
            CommitType::Deps => "Deps",
            CommitType::Deploy => "Deploy",
            CommitType::Wip => "Wip",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            CommitType::Chore => "🔨",
            CommitType::Feature | CommitType::Feat => "✨",
            CommitType::Refactor => "\u{267B}\u{FE0F}",
            CommitType::Fix => "🐛",
            CommitType::Test => "✅",
            CommitType::Style => "🎨",
            CommitType::Doc => "📝",
            CommitType::Deps => "📦",
            CommitType::Deploy => "🚀",
            CommitType::Wip => "🚧",
        }
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Build the commit message, e.g. `🐛 Fix(auth): Fixed Push init`.
///
/// Without a type there is no emoji and no label, only the optional area.
pub fn format_message(
    commit_type: Option<CommitType>,
    area: Option<&str>,
    message: &str,
    emojis: bool,
) -> String {
    let scope = match (commit_type, area) {
        (Some(commit_type), Some(area)) => Some(format!("{}({})", commit_type, area)),
        (Some(commit_type), None) => Some(commit_type.to_string()),
        (None, Some(area)) => Some(area.to_string()),
        (None, None) => None,
    };

    let header = match (commit_type, scope) {
        (Some(commit_type), Some(scope)) if emojis => {
            Some(format!("{} {}", commit_type.emoji(), scope))
        }
        (_, scope) => scope,
    };

    match header {
        Some(header) => format!("{}: {}", header, message),
        None => message.to_string(),
    }
}

/// Commit command implementation: stage everything, then commit
pub struct CommitCommand {
    emojis: bool,
}

impl CommitCommand {
    pub fn new(emojis: bool) -> Self {
        Self { emojis }
    }

    /// Steps for a commit with an already validated message
    pub fn plan(&self, options: &CommitOptions, message: &str) -> Vec<GitStep> {
        let formatted = format_message(
            options.commit_type,
            options.area.as_deref(),
            message,
            self.emojis,
        );

        let mut commit = vec!["commit".to_string(), "-m".to_string(), formatted];
        if options.no_verify {
            commit.push("--no-verify".to_string());
        }

        vec![GitStep::new(["add", "-A"]), GitStep::new(commit)]
    }
}

impl Handler for CommitCommand {
    type Args = CommitOptions;

    async fn execute(&self, args: CommitOptions, git: &dyn GitRunner) -> Result<()> {
        let message = args.message.as_deref().ok_or(CitError::MissingMessage)?;
        let steps = self.plan(&args, message);
        run_steps(git, &steps).await?;
        Ok(())
    }
}
