use crate::commands::commit::CommitType;

/// Arguments specific to commit command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitOptions {
    pub commit_type: Option<CommitType>,
    pub area: Option<String>,
    pub message: Option<String>,
    pub no_verify: bool,
}

/// Arguments specific to push command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PushOptions {
    pub force: bool,
    /// Files to stage before pushing, in the order given
    pub files: Vec<String>,
}

/// Arguments specific to log command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogOptions {
    pub short: bool,
    pub amount: Option<u32>,
}

/// Arguments specific to switch command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchOptions {
    pub branch: String,
}

/// Arguments specific to config command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigArgs {
    pub show: bool,
    pub init: bool,
}
