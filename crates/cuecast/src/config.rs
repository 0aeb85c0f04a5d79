//! Startup configuration.
//!
//! Configuration is assembled once, before any work begins, with this
//! precedence (later sources override earlier):
//! 1. Bundled defaults (cuecast.toml shipped with the binary)
//! 2. User config in home directory (~/.config/cuecast/cuecast.toml)
//! 3. User config in current directory (./cuecast.toml)
//! 4. An explicit `--config` file
//! 5. Environment variables (`TELEGRAM_BOT_TOKEN`, `TELEGRAM_CHAT_ID`, `SCRIPT_FILE`)
//!
//! Command-line flags are applied last by the binary.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat};
use cuecast_error::{ConfigError, CuecastError, CuecastResult};
use cuecast_rate_limit::{RetryPolicy, RetryPolicyConfig};
use cuecast_telegram::DEFAULT_API_BASE_URL;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Bundled default configuration
const DEFAULT_CONFIG: &str = include_str!("../../../cuecast.toml");

/// Environment-sourced values, read once at startup.
///
/// Empty variables count as unset.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    /// `TELEGRAM_BOT_TOKEN`
    pub bot_token: Option<String>,
    /// `TELEGRAM_CHAT_ID`
    pub chat_id: Option<String>,
    /// `SCRIPT_FILE`
    pub script_file: Option<String>,
}

impl EnvOverrides {
    /// Read the process environment.
    pub fn from_env() -> Self {
        fn var(name: &str) -> Option<String> {
            std::env::var(name).ok().filter(|value| !value.is_empty())
        }

        Self {
            bot_token: var("TELEGRAM_BOT_TOKEN"),
            chat_id: var("TELEGRAM_CHAT_ID"),
            script_file: var("SCRIPT_FILE"),
        }
    }
}

impl fmt::Debug for EnvOverrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvOverrides")
            .field("bot_token", &self.bot_token.as_ref().map(|_| "<redacted>"))
            .field("chat_id", &self.chat_id)
            .field("script_file", &self.script_file)
            .finish()
    }
}

/// The `[telegram]` section.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct TelegramSettings {
    /// Bot API server
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Bot token; normally supplied through the environment
    #[serde(default)]
    pub bot_token: Option<String>,
    /// Destination chat; normally supplied through the environment
    #[serde(default)]
    pub chat_id: Option<String>,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl fmt::Debug for TelegramSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramSettings")
            .field("api_base_url", &self.api_base_url)
            .field("bot_token", &self.bot_token.as_ref().map(|_| "<redacted>"))
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

/// The `[script]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScriptSettings {
    /// Screenplay file to read
    #[serde(default = "default_script_path")]
    pub path: PathBuf,
}

fn default_script_path() -> PathBuf {
    PathBuf::from("Bee.txt")
}

/// Merged settings before credentials are checked.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Telegram connection settings
    pub telegram: TelegramSettings,
    /// Script input settings
    pub script: ScriptSettings,
    /// Retry policy
    #[serde(default)]
    pub delivery: RetryPolicyConfig,
}

impl Settings {
    /// Load settings with the full precedence chain.
    ///
    /// User config files are optional and silently skipped if not found; an
    /// explicit file must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or the merged result does
    /// not deserialize.
    #[instrument(skip(env))]
    pub fn load(explicit: Option<&Path>, env: &EnvOverrides) -> CuecastResult<Self> {
        debug!("Loading configuration: env > explicit > current dir > home dir > bundled defaults");

        let mut builder = Self::bundled();

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/cuecast/cuecast.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("cuecast").required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path));
        }

        Self::finish(builder, env)
    }

    /// Load bundled defaults plus a single file, ignoring user config locations.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path, env), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>, env: &EnvOverrides) -> CuecastResult<Self> {
        let builder = Self::bundled().add_source(File::from(path.as_ref()));
        Self::finish(builder, env)
    }

    /// Bundled defaults plus environment values only.
    ///
    /// # Errors
    ///
    /// Returns an error if the merged result does not deserialize.
    pub fn from_env(env: &EnvOverrides) -> CuecastResult<Self> {
        Self::finish(Self::bundled(), env)
    }

    fn bundled() -> ConfigBuilder<DefaultState> {
        Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
    }

    fn finish(builder: ConfigBuilder<DefaultState>, env: &EnvOverrides) -> CuecastResult<Self> {
        builder
            .set_override_option("telegram.bot_token", env.bot_token.clone())
            .and_then(|b| b.set_override_option("telegram.chat_id", env.chat_id.clone()))
            .and_then(|b| b.set_override_option("script.path", env.script_file.clone()))
            .map_err(|e| {
                CuecastError::from(ConfigError::new(format!(
                    "Failed to apply environment overrides: {}",
                    e
                )))
            })?
            .build()
            .map_err(|e| {
                CuecastError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                CuecastError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Replace the script path, as the `--script` flag does.
    pub fn with_script_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.script.path = path.into();
        self
    }

    /// Check that credentials are present and produce the runtime configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] naming every missing credential.
    pub fn into_config(self) -> Result<CuecastConfig, ConfigError> {
        let retry_policy = RetryPolicy::from(&self.delivery);
        let Settings {
            telegram, script, ..
        } = self;

        match (telegram.bot_token, telegram.chat_id) {
            (Some(bot_token), Some(chat_id)) => Ok(CuecastConfig {
                bot_token,
                chat_id,
                script_path: script.path,
                api_base_url: telegram.api_base_url,
                retry_policy,
            }),
            (token, chat) => {
                let missing = [
                    token.is_none().then_some("TELEGRAM_BOT_TOKEN"),
                    chat.is_none().then_some("TELEGRAM_CHAT_ID"),
                ]
                .into_iter()
                .flatten()
                .collect();

                Err(ConfigError::missing_variables(missing))
            }
        }
    }
}

/// Validated runtime configuration, constructed once at startup.
#[derive(Clone, PartialEq, Eq)]
pub struct CuecastConfig {
    bot_token: String,
    chat_id: String,
    script_path: PathBuf,
    api_base_url: String,
    retry_policy: RetryPolicy,
}

impl CuecastConfig {
    /// Bot API credential.
    pub fn bot_token(&self) -> &str {
        &self.bot_token
    }

    /// Destination chat identifier.
    pub fn chat_id(&self) -> &str {
        &self.chat_id
    }

    /// Screenplay to deliver.
    pub fn script_path(&self) -> &Path {
        &self.script_path
    }

    /// Bot API server.
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Pacing and retry behavior.
    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry_policy
    }
}

impl fmt::Debug for CuecastConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CuecastConfig")
            .field("bot_token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .field("script_path", &self.script_path)
            .field("api_base_url", &self.api_base_url)
            .field("retry_policy", &self.retry_policy)
            .finish()
    }
}
