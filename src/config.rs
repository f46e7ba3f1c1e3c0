use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment toggle that suppresses commit emojis when set to exactly `true`
pub const DISABLE_EMOJIS_ENV: &str = "QIT_DISABLE_EMOJIS";

/// Repository-specific config file, looked up in the current directory
pub const REPO_CONFIG_FILE: &str = ".cit.yaml";

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub behavior: BehaviorConfig,
    #[serde(default)]
    pub git: GitConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct BehaviorConfig {
    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub disable_emojis: bool,
}

/// Configuration for the wrapped executable
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GitConfig {
    #[serde(default = "default_executable")]
    pub executable: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            executable: default_executable(),
        }
    }
}

fn default_executable() -> String {
    "git".to_string()
}

impl Config {
    /// Load configuration from the standard config paths, returning the file
    /// it came from if any
    pub fn load() -> Result<(Self, Option<PathBuf>)> {
        // Try loading in this order:
        // 1. .cit.yaml in current directory (repo-specific)
        // 2. ~/.config/cit/config.yaml (user-specific)
        // 3. Default configuration
        let mut candidates = vec![PathBuf::from(REPO_CONFIG_FILE)];
        candidates.extend(Self::user_config_path());

        for path in candidates {
            if path.exists() {
                let config = Self::load_from_path(&path)?;
                return Ok((config, Some(path)));
            }
        }

        Ok((Self::default(), None))
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!("Config file does not exist: {}", path.display());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Get the user configuration path
    pub fn user_config_path() -> Option<PathBuf> {
        if let Some(config_dir) = dirs::config_dir() {
            Some(config_dir.join("cit").join("config.yaml"))
        } else {
            // Fallback to home directory
            dirs::home_dir().map(|home_dir| home_dir.join(".config").join("cit").join("config.yaml"))
        }
    }

    /// Create a sample configuration file
    pub fn create_sample_config() -> Result<String> {
        let sample = Config::default();
        serde_yaml::to_string(&sample).context("Failed to serialize sample configuration")
    }
}

/// Why commit emojis are turned off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmojiSwitch {
    Enabled,
    DisabledByEnv,
    DisabledByConfig,
}

/// Effective settings, resolved once at startup from config, environment and flags
#[derive(Debug, Clone)]
pub struct Settings {
    pub emojis: EmojiSwitch,
    pub verbose: bool,
    pub executable: String,
    pub config_path: Option<PathBuf>,
}

impl Settings {
    pub fn resolve(
        config: Config,
        config_path: Option<PathBuf>,
        disable_emojis_env: Option<&str>,
        verbose_flag: bool,
    ) -> Self {
        let emojis = if disable_emojis_env == Some("true") {
            EmojiSwitch::DisabledByEnv
        } else if config.behavior.disable_emojis {
            EmojiSwitch::DisabledByConfig
        } else {
            EmojiSwitch::Enabled
        };

        Self {
            emojis,
            verbose: verbose_flag || config.behavior.verbose,
            executable: config.git.executable,
            config_path,
        }
    }

    pub fn emojis_enabled(&self) -> bool {
        self.emojis == EmojiSwitch::Enabled
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::resolve(Config::default(), None, None, false)
    }
}
