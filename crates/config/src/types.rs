use serde::Deserialize;
use std::{collections::HashMap, env, path::PathBuf};

use crate::ConfigError;

/// Snapshot of environment variables the configuration is built from
pub type EnvVars = HashMap<String, String>;

/// Look up a variable, treating empty or whitespace-only values as unset
fn lookup(vars: &EnvVars, key: &str) -> Option<String> {
    vars.get(key)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn parse_var<T: std::str::FromStr>(
    vars: &EnvVars,
    key: &str,
    expected: &str,
) -> Result<Option<T>, ConfigError> {
    match lookup(vars, key) {
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(format!("{key} must be {expected}"))),
        None => Ok(None),
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub telegram: TelegramConfig,
    pub cors: CorsConfig,
    #[serde(rename = "static")]
    pub static_files: StaticConfig,
}

impl RelayConfig {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is applied first when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_vars(&env::vars().collect())
    }

    /// Build configuration from an explicit set of variables
    pub fn from_vars(vars: &EnvVars) -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_vars(vars)?,
            logging: LoggingConfig::from_vars(vars),
            telegram: TelegramConfig::from_vars(vars)?,
            cors: CorsConfig::from_vars(vars),
            static_files: StaticConfig::from_vars(vars),
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_vars(vars: &EnvVars) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        // PORT is what most hosting platforms inject; SERVER_PORT wins when both are set
        let port = match parse_var(vars, "SERVER_PORT", "a valid port number")? {
            Some(port) => port,
            None => parse_var(vars, "PORT", "a valid port number")?.unwrap_or(defaults.port),
        };

        Ok(Self {
            host: lookup(vars, "SERVER_HOST").unwrap_or(defaults.host),
            port,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

/// Logging Configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub modules: HashMap<String, String>,
}

impl LoggingConfig {
    pub fn from_vars(vars: &EnvVars) -> Self {
        let mut modules = HashMap::new();

        // Load module-specific log levels
        if let Some(level) = lookup(vars, "LOG_MODULE_API") {
            modules.insert("api".to_string(), level);
        }
        if let Some(level) = lookup(vars, "LOG_MODULE_SERVICES") {
            modules.insert("services".to_string(), level);
        }

        Self {
            level: lookup(vars, "LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            format: lookup(vars, "LOG_FORMAT").unwrap_or_else(|| "pretty".to_string()),
            modules,
        }
    }

    /// Filter directive string for `EnvFilter`, e.g. `info,api=debug`
    pub fn filter_directive(&self) -> String {
        let mut modules: Vec<_> = self.modules.iter().collect();
        modules.sort();

        let mut filter = self.level.clone();
        for (module, level) in modules {
            filter.push_str(&format!(",{module}={level}"));
        }
        filter
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            modules: HashMap::new(),
        }
    }
}

pub const DEFAULT_TELEGRAM_API_BASE_URL: &str = "https://api.telegram.org";

/// Messaging backend credentials and endpoint.
///
/// Credentials are optional here: a missing token or chat id is a
/// configuration fault that is reported per request, not at startup.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct TelegramConfig {
    pub bot_token: Option<String>,
    pub chat_id: Option<String>,
    pub api_base_url: String,
    pub timeout_seconds: Option<u64>,
    /// Names (never values) of environment variables that look like bot/chat settings
    #[serde(skip)]
    pub env_keys: Vec<String>,
}

impl TelegramConfig {
    pub fn from_vars(vars: &EnvVars) -> Result<Self, ConfigError> {
        let mut env_keys: Vec<String> = vars
            .keys()
            .filter(|key| {
                let upper = key.to_ascii_uppercase();
                upper.contains("BOT") || upper.contains("CHAT")
            })
            .cloned()
            .collect();
        env_keys.sort();

        Ok(Self {
            bot_token: lookup(vars, "BOT_TOKEN"),
            chat_id: lookup(vars, "TELEGRAM_CHAT_ID"),
            api_base_url: lookup(vars, "TELEGRAM_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_TELEGRAM_API_BASE_URL.to_string()),
            timeout_seconds: parse_var(vars, "TELEGRAM_TIMEOUT_SECONDS", "a number of seconds")?,
            env_keys,
        })
    }

    /// Both credentials, or `None` if either is missing
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let token = self.bot_token.as_deref().filter(|t| !t.is_empty())?;
        let chat = self.chat_id.as_deref().filter(|c| !c.is_empty())?;
        Some((token, chat))
    }
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            bot_token: None,
            chat_id: None,
            api_base_url: DEFAULT_TELEGRAM_API_BASE_URL.to_string(),
            timeout_seconds: None,
            env_keys: Vec::new(),
        }
    }
}

// The bot token must never end up in logs through `{:?}`
impl std::fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("bot_token_set", &self.bot_token.is_some())
            .field("chat_id_set", &self.chat_id.is_some())
            .field("api_base_url", &self.api_base_url)
            .field("timeout_seconds", &self.timeout_seconds)
            .field("env_keys", &self.env_keys)
            .finish()
    }
}

/// Origins accepted for cross-origin requests
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum AllowedOrigin {
    Any,
    List(Vec<String>),
}

impl AllowedOrigin {
    /// Parse `*` or a comma-separated origin list
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw == "*" {
            return AllowedOrigin::Any;
        }

        let origins: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect();

        if origins.is_empty() {
            AllowedOrigin::Any
        } else {
            AllowedOrigin::List(origins)
        }
    }
}

impl From<String> for AllowedOrigin {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origin: AllowedOrigin,
}

impl CorsConfig {
    pub fn from_vars(vars: &EnvVars) -> Self {
        Self {
            allowed_origin: lookup(vars, "ALLOWED_ORIGIN")
                .map(|raw| AllowedOrigin::parse(&raw))
                .unwrap_or(AllowedOrigin::Any),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origin: AllowedOrigin::Any,
        }
    }
}

/// Optional static site served next to the API
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StaticConfig {
    pub dir: Option<PathBuf>,
}

impl StaticConfig {
    pub fn from_vars(vars: &EnvVars) -> Self {
        Self {
            dir: lookup(vars, "STATIC_DIR").map(PathBuf::from),
        }
    }
}
