use std::io;

/// Failures surfaced while dispatching a command to git
#[derive(Debug, thiserror::Error)]
pub enum CitError {
    /// The git executable could not be started at all
    #[error("failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    /// A git invocation ran and exited unsuccessfully
    #[error("`{command}` exited with {}", describe_exit(.code))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        /// Captured standard error, empty unless the step asked for capture
        stderr: String,
    },

    /// Push refused because the working tree has uncommitted changes
    #[error("there are uncommitted changes")]
    UncommittedChanges,

    /// Commit invoked without a message
    #[error("a commit message is required (use --message)")]
    MissingMessage,
}

impl CitError {
    /// Process exit status for this failure
    pub fn exit_code(&self) -> u8 {
        match self {
            // Same status clap uses for usage errors
            CitError::MissingMessage => 2,
            _ => 1,
        }
    }

    /// Line shown to the user when this failure ends the process
    pub fn user_message(&self) -> String {
        match self {
            CitError::UncommittedChanges => "There are uncommitted changes".to_string(),
            CitError::MissingMessage => format!("error: {}", self),
            CitError::Spawn { .. } | CitError::CommandFailed { .. } => {
                "💥 Unable to run command".to_string()
            }
        }
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "no status (terminated by signal)".to_string(),
    }
}
