use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::errors::{BrewenvError, Result};
use crate::domain::models::build_mode::BuildMode;
use crate::domain::variants;

/// Default project file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "brewenv.toml";

/// Current format version supported by this build of brewenv.
pub const CURRENT_FORMAT_VERSION: u32 = 1;

static ENV_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9][a-z0-9_-]*$").expect("environment name pattern is always valid")
});

/// Top-level project configuration read from `brewenv.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub brewenv: BrewenvSection,
    #[serde(default)]
    pub environments: BTreeMap<String, EnvEntry>,
}

impl AppConfig {
    /// Load the configuration.
    ///
    /// An explicit `path` must exist. Without one, `brewenv.toml` in the
    /// working directory is read if present; otherwise only the built-in
    /// variants are available.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) if !p.exists() => {
                return Err(BrewenvError::FileNotFound {
                    path: p.to_path_buf(),
                });
            }
            Some(p) => p.to_path_buf(),
            None => {
                let default = Path::new(CONFIG_FILE_NAME);
                if !default.exists() {
                    tracing::debug!("no {CONFIG_FILE_NAME} found, using built-in variants only");
                    return Ok(Self::default());
                }
                default.to_path_buf()
            }
        };

        tracing::debug!(path = %config_path.display(), "loading project configuration");
        let content = std::fs::read_to_string(&config_path)?;
        Self::parse(&content)
    }

    /// Parse and validate configuration text.
    ///
    /// Rejects newer format versions, malformed environment names and
    /// custom environments that shadow a built-in name.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| BrewenvError::InvalidConfig {
            detail: format!("Failed to parse {CONFIG_FILE_NAME}: {e}"),
        })?;

        if config.brewenv.format_version > CURRENT_FORMAT_VERSION {
            return Err(BrewenvError::FormatVersionTooNew {
                project_version: config.brewenv.format_version,
                supported_version: CURRENT_FORMAT_VERSION,
            });
        }

        for env_name in config.environments.keys() {
            validate_env_name(env_name)?;
            if BuildMode::from_name(env_name).is_some() {
                return Err(BrewenvError::InvalidConfig {
                    detail: format!(
                        "'{env_name}' is a built-in environment and cannot be redefined; \
                         declare a new environment that inherits from it instead"
                    ),
                });
            }
        }

        if let Some(default_env) = &config.brewenv.default_env
            && BuildMode::from_name(default_env).is_none()
            && !config.environments.contains_key(default_env)
        {
            return Err(BrewenvError::InvalidConfig {
                detail: format!(
                    "default_env '{default_env}' is not defined; available environments: {}",
                    config.environment_names().join(", ")
                ),
            });
        }

        Ok(config)
    }

    /// Environment used when none is requested. Built-in aliases
    /// (`dev`, `prod`) are returned under their canonical names.
    pub fn default_env(&self) -> &str {
        match self.brewenv.default_env.as_deref() {
            Some(name) => BuildMode::from_name(name).map_or(name, |mode| mode.name()),
            None => variants::active_mode().name(),
        }
    }

    /// Built-in names followed by custom names, sorted.
    pub fn environment_names(&self) -> Vec<String> {
        let mut names = vec![
            BuildMode::Development.name().to_string(),
            BuildMode::Production.name().to_string(),
        ];
        names.extend(self.environments.keys().cloned());
        names
    }
}

/// Validate that an environment name is safe to use in file names.
pub fn validate_env_name(name: &str) -> Result<()> {
    if ENV_NAME.is_match(name) {
        Ok(())
    } else {
        Err(BrewenvError::InvalidEnvName {
            name: name.to_string(),
        })
    }
}

/// The `[brewenv]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BrewenvSection {
    /// Format version for backward compatibility. Defaults to 1 if missing.
    #[serde(default = "default_format_version")]
    pub format_version: u32,
    pub default_env: Option<String>,
}

impl Default for BrewenvSection {
    fn default() -> Self {
        Self {
            format_version: default_format_version(),
            default_env: None,
        }
    }
}

fn default_format_version() -> u32 {
    1
}

/// A custom environment in `[environments.<name>]`.
///
/// Every field except `inherits` overrides one literal of the parent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnvEntry {
    /// Parent environment. Defaults to `development`.
    pub inherits: Option<String>,
    pub production: Option<bool>,
    pub api_server_url: Option<String>,
    pub auth: Option<AuthOverlay>,
}

/// The `[environments.<name>.auth]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthOverlay {
    pub domain_prefix: Option<String>,
    pub audience: Option<String>,
    pub client_id: Option<String>,
    pub callback_url: Option<String>,
}
