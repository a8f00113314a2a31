use crate::error::{config::ConfigError, AppError};

const DEFAULT_COMMAND_PREFIX: &str = "b.";

pub struct Config {
    pub database_url: String,
    pub discord_bot_token: String,

    /// Prefix for text invocations of the commands; slash commands ignore it.
    pub command_prefix: String,
    /// Roles treated as staff. Empty means the administrator permission alone suffices.
    pub staff_role_ids: Vec<u64>,
    /// Apply the bundled schema on startup; the host bot normally owns it.
    pub run_migrations: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_vars(|name| std::env::var(name).ok())?)
    }

    /// Builds the configuration from a variable lookup function.
    ///
    /// # Arguments
    /// - `var` - Returns the value of the named variable, or `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and every value parsed
    /// - `Err(ConfigError::MissingEnvVar)` - A required variable is unset
    /// - `Err(ConfigError::InvalidEnvVar)` - A variable could not be parsed
    pub fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required =
            |name: &str| var(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()));

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            command_prefix: var("COMMAND_PREFIX")
                .filter(|prefix| !prefix.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_COMMAND_PREFIX.to_string()),
            staff_role_ids: match var("STAFF_ROLE_IDS") {
                Some(value) => parse_id_list("STAFF_ROLE_IDS", &value)?,
                None => Vec::new(),
            },
            run_migrations: match var("RUN_MIGRATIONS") {
                Some(value) => parse_bool("RUN_MIGRATIONS", &value)?,
                None => false,
            },
        })
    }
}

fn parse_id_list(name: &str, value: &str) -> Result<Vec<u64>, ConfigError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| match id.parse::<u64>() {
            Ok(parsed) if parsed != 0 => Ok(parsed),
            _ => Err(ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value: value.to_string(),
            }),
        })
        .collect()
}

fn parse_bool(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}
