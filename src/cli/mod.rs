pub mod args;

use crate::commands::commit::CommitType;
use crate::commands::{
    CommitCommand, ConfigCommand, DiffCommand, Handler, HelpCommand, LogCommand, PushCommand,
    SwitchCommand, UndoCommand, UpdCommand,
};
use crate::config::Settings;
use crate::git::GitRunner;
use anyhow::Result;
use args::{CommitOptions, ConfigArgs, LogOptions, PushOptions, SwitchOptions};
use clap::{Parser, Subcommand};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "cit")]
#[command(about = "Cit is a git wrapper that makes pushes and commits easier.")]
#[command(version)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Show each git invocation as it runs
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print the git invocations without running them
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Commits with a meaningful commit message
    #[command(visible_alias = "c")]
    Commit {
        /// The type of commit
        #[arg(short = 't', long = "type", value_enum)]
        commit_type: Option<CommitType>,

        /// The section of the code this commit focuses on
        #[arg(short, long)]
        area: Option<String>,

        /// The commit message
        #[arg(short, long)]
        message: Option<String>,

        /// Pass --no-verify to git commit
        #[arg(short, long)]
        no_verify: bool,
    },
    /// Pushes the current branch to the remote. Will not push if there are uncommitted changes
    #[command(visible_alias = "p")]
    Push {
        /// Force push. Ignored when files are given
        #[arg(short, long)]
        force: bool,

        /// The file(s) to stage before pushing
        files: Vec<String>,
    },
    /// Runs 'git add .'
    Upd,
    /// Undoes the last commit, keeping its changes staged
    #[command(visible_alias = "u")]
    Undo,
    /// Shows the git log
    #[command(visible_alias = "l")]
    Log {
        /// Show a shortened, one line per commit log
        #[arg(short, long)]
        short: bool,

        /// The amount of commits to show
        amount: Option<u32>,
    },
    /// Switch branches, creating as needed
    #[command(visible_alias = "s")]
    Switch {
        /// The branch to switch to
        branch: String,
    },
    /// Shows the git diff
    #[command(visible_alias = "d")]
    Diff,
    /// Show or generate the cit configuration
    Config {
        /// Show current configuration path and status
        #[arg(long)]
        show: bool,

        /// Generate sample configuration
        #[arg(long)]
        init: bool,
    },
    /// Anything else falls through to the help menu
    #[command(external_subcommand)]
    External(Vec<String>),
}

/// A parsed invocation, ready for dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Commit(CommitOptions),
    Log(LogOptions),
    Push(PushOptions),
    Upd,
    Undo,
    Switch(SwitchOptions),
    Diff,
    Config(ConfigArgs),
    Unknown,
}

impl Cli {
    /// Route the parsed arguments to a command. A missing or unrecognized
    /// subcommand is not an error, it shows the help menu.
    pub fn into_command(self) -> Command {
        match self.command {
            Some(Commands::Commit {
                commit_type,
                area,
                message,
                no_verify,
            }) => Command::Commit(CommitOptions {
                commit_type,
                area,
                message,
                no_verify,
            }),
            Some(Commands::Push { force, files }) => Command::Push(PushOptions { force, files }),
            Some(Commands::Upd) => Command::Upd,
            Some(Commands::Undo) => Command::Undo,
            Some(Commands::Log { short, amount }) => Command::Log(LogOptions { short, amount }),
            Some(Commands::Switch { branch }) => Command::Switch(SwitchOptions { branch }),
            Some(Commands::Diff) => Command::Diff,
            Some(Commands::Config { show, init }) => Command::Config(ConfigArgs { show, init }),
            Some(Commands::External(args)) => {
                debug!(?args, "unrecognized command");
                Command::Unknown
            }
            None => Command::Unknown,
        }
    }
}

/// Command dispatcher that routes parsed commands to their implementations
pub struct CommandDispatcher {
    settings: Settings,
    git: Box<dyn GitRunner>,
}

impl CommandDispatcher {
    pub fn new(settings: Settings, git: Box<dyn GitRunner>) -> Self {
        Self { settings, git }
    }

    pub async fn dispatch(&self, command: Command) -> Result<()> {
        let git = self.git.as_ref();
        match command {
            Command::Commit(options) => {
                CommitCommand::new(self.settings.emojis_enabled())
                    .execute(options, git)
                    .await
            }
            Command::Log(options) => LogCommand.execute(options, git).await,
            Command::Push(options) => PushCommand.execute(options, git).await,
            Command::Upd => UpdCommand.execute((), git).await,
            Command::Undo => UndoCommand.execute((), git).await,
            Command::Switch(options) => SwitchCommand.execute(options, git).await,
            Command::Diff => DiffCommand.execute((), git).await,
            Command::Config(args) => ConfigCommand::new(&self.settings).execute(args, git).await,
            Command::Unknown => HelpCommand.execute((), git).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CitError;
    use crate::git::MockGitRunner;
    use clap::error::ErrorKind;
    use clap::CommandFactory;

    fn route(args: &[&str]) -> Command {
        Cli::try_parse_from(args.iter().copied())
            .unwrap()
            .into_command()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_name() {
        assert_eq!(Cli::command().get_name(), "cit");
    }

    #[test]
    fn test_commit_parsing() {
        let command = route(&[
            "cit", "commit", "-t", "Fix", "-a", "auth", "-m", "Fixed Push init", "-n",
        ]);
        assert_eq!(
            command,
            Command::Commit(CommitOptions {
                commit_type: Some(CommitType::Fix),
                area: Some("auth".to_string()),
                message: Some("Fixed Push init".to_string()),
                no_verify: true,
            })
        );
    }

    #[test]
    fn test_commit_parsing_minimal_with_alias() {
        let command = route(&["cit", "c", "--message", "wip"]);
        assert_eq!(
            command,
            Command::Commit(CommitOptions {
                message: Some("wip".to_string()),
                ..CommitOptions::default()
            })
        );
    }

    #[test]
    fn test_commit_type_is_case_sensitive() {
        let err = Cli::try_parse_from(["cit", "commit", "-t", "fix", "-m", "x"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);

        let err = Cli::try_parse_from(["cit", "commit", "--type", "Bogus"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_every_commit_type_label_is_accepted() {
        for label in [
            "Chore", "Feature", "Feat", "Refactor", "Fix", "Test", "Style", "Doc", "Deps",
            "Deploy", "Wip",
        ] {
            match route(&["cit", "commit", "-t", label, "-m", "x"]) {
                Command::Commit(options) => {
                    assert_eq!(options.commit_type.map(|t| t.label()), Some(label));
                }
                other => panic!("Expected commit command, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_push_parsing() {
        assert_eq!(route(&["cit", "push"]), Command::Push(PushOptions::default()));
        assert_eq!(
            route(&["cit", "p", "--force", "a.txt", "b.txt"]),
            Command::Push(PushOptions {
                force: true,
                files: vec!["a.txt".to_string(), "b.txt".to_string()],
            })
        );
    }

    #[test]
    fn test_log_parsing() {
        assert_eq!(route(&["cit", "log"]), Command::Log(LogOptions::default()));
        assert_eq!(
            route(&["cit", "l", "-s", "5"]),
            Command::Log(LogOptions {
                short: true,
                amount: Some(5),
            })
        );
        let err = Cli::try_parse_from(["cit", "log", "many"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_switch_requires_branch() {
        assert_eq!(
            route(&["cit", "s", "feature/login"]),
            Command::Switch(SwitchOptions {
                branch: "feature/login".to_string(),
            })
        );
        let err = Cli::try_parse_from(["cit", "switch"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_optionless_commands_and_aliases() {
        assert_eq!(route(&["cit", "upd"]), Command::Upd);
        assert_eq!(route(&["cit", "undo"]), Command::Undo);
        assert_eq!(route(&["cit", "u"]), Command::Undo);
        assert_eq!(route(&["cit", "diff"]), Command::Diff);
        assert_eq!(route(&["cit", "d"]), Command::Diff);
    }

    #[test]
    fn test_unknown_or_missing_command_is_help() {
        assert_eq!(route(&["cit"]), Command::Unknown);
        assert_eq!(route(&["cit", "bogus"]), Command::Unknown);
        assert_eq!(route(&["cit", "bogus", "--with", "args"]), Command::Unknown);
    }

    #[test]
    fn test_help_word_shows_menu() {
        assert_eq!(route(&["cit", "help"]), Command::Unknown);
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from(["cit", "push", "--dry-run", "-v"]).unwrap();
        assert!(cli.dry_run);
        assert!(cli.verbose);

        let cli = Cli::try_parse_from(["cit", "--dry-run", "diff"]).unwrap();
        assert!(cli.dry_run);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_config_parsing() {
        assert_eq!(
            route(&["cit", "config", "--show"]),
            Command::Config(ConfigArgs {
                show: true,
                init: false,
            })
        );
    }

    #[test]
    fn test_dispatch_help_and_config_never_run_git() {
        let mut git = MockGitRunner::new();
        git.expect_run().never();
        let dispatcher = CommandDispatcher::new(Settings::default(), Box::new(git));

        tokio_test::block_on(async {
            dispatcher.dispatch(Command::Unknown).await.unwrap();
            dispatcher
                .dispatch(Command::Config(ConfigArgs::default()))
                .await
                .unwrap();
        });
    }

    #[test]
    fn test_dispatch_rejects_missing_message_before_staging() {
        let mut git = MockGitRunner::new();
        git.expect_run().never();
        let dispatcher = CommandDispatcher::new(Settings::default(), Box::new(git));

        let err = tokio_test::block_on(dispatcher.dispatch(Command::Commit(CommitOptions {
            commit_type: Some(CommitType::Fix),
            ..CommitOptions::default()
        })))
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CitError>(),
            Some(CitError::MissingMessage)
        ));
    }

    #[test]
    fn test_dispatch_commit_uses_emoji_setting() {
        let mut git = MockGitRunner::new();
        git.expect_run()
            .withf(|step| step.args() == ["add", "-A"])
            .times(1)
            .returning(|_| Ok(()));
        git.expect_run()
            .withf(|step| step.args() == ["commit", "-m", "Fix: Fixed Push init"])
            .times(1)
            .returning(|_| Ok(()));

        let settings = Settings::resolve(Default::default(), None, Some("true"), false);
        let dispatcher = CommandDispatcher::new(settings, Box::new(git));

        tokio_test::block_on(dispatcher.dispatch(Command::Commit(CommitOptions {
            commit_type: Some(CommitType::Fix),
            message: Some("Fixed Push init".to_string()),
            ..CommitOptions::default()
        })))
        .unwrap();
    }
}
