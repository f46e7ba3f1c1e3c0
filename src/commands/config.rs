use crate::cli::args::ConfigArgs;
use crate::commands::Handler;
use crate::config::{Config, EmojiSwitch, Settings, DISABLE_EMOJIS_ENV, REPO_CONFIG_FILE};
use crate::git::GitRunner;
use anyhow::Result;
use std::path::PathBuf;

/// Config command implementation (never touches git)
pub struct ConfigCommand<'a> {
    settings: &'a Settings,
}

impl<'a> ConfigCommand<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Effective settings summary for `--show`
    fn describe_settings(&self) -> Vec<String> {
        let emojis = match self.settings.emojis {
            EmojiSwitch::Enabled => "on".to_string(),
            EmojiSwitch::DisabledByEnv => format!("off ({}=true)", DISABLE_EMOJIS_ENV),
            EmojiSwitch::DisabledByConfig => "off (behavior.disable_emojis)".to_string(),
        };
        let source = match &self.settings.config_path {
            Some(path) => path.display().to_string(),
            None => "built-in defaults".to_string(),
        };

        vec![
            format!("Loaded from: {}", source),
            format!("Emojis: {}", emojis),
            format!("Git executable: {}", self.settings.executable),
            format!("Verbose: {}", self.settings.verbose),
        ]
    }

    fn show(&self) {
        println!("🔍 cit configuration status:");
        println!();

        // Check for repo-specific config
        if PathBuf::from(REPO_CONFIG_FILE).exists() {
            println!("✅ Repository config: {}", REPO_CONFIG_FILE);
        } else {
            println!("❌ Repository config: {} (not found)", REPO_CONFIG_FILE);
        }

        // Check for user config
        match Config::user_config_path() {
            Some(path) if path.exists() => println!("✅ User config: {}", path.display()),
            Some(path) => {
                println!("❌ User config: {} (not found)", path.display());
                if let Some(parent) = path.parent() {
                    if !parent.exists() {
                        println!("   💡 Create directory: mkdir -p {}", parent.display());
                    }
                }
            }
            None => println!("❌ User config: Unable to determine config directory"),
        }

        println!();
        for line in self.describe_settings() {
            println!("   {}", line);
        }
        println!();
        println!("💡 To create a sample config: cit config --init > ~/.config/cit/config.yaml");
    }
}

impl Handler for ConfigCommand<'_> {
    type Args = ConfigArgs;

    async fn execute(&self, args: ConfigArgs, _git: &dyn GitRunner) -> Result<()> {
        if args.init {
            let sample_config = Config::create_sample_config()?;
            println!("# Sample cit configuration");
            println!("# Copy this to ~/.config/cit/config.yaml or {}", REPO_CONFIG_FILE);
            println!();
            println!("{}", sample_config);
            return Ok(());
        }

        if args.show {
            self.show();
            return Ok(());
        }

        // If no flags provided, show help
        println!("cit config management");
        println!();
        println!("Options:");
        println!("  --show  Show current configuration status");
        println!("  --init  Generate sample configuration");
        println!();
        println!("Examples:");
        println!("  cit config --show");
        println!("  cit config --init > ~/.config/cit/config.yaml");
        println!("  cit config --init > {}  # Repository-specific config", REPO_CONFIG_FILE);

        Ok(())
    }
}
