//! Configuration loader with TOML parsing, discovery and environment overrides

use super::schema::CloakConfig;
use crate::domain::errors::CloakError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// File name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "cloakprompt.toml";

static ENV_VAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("env var pattern is valid")
});

/// A configuration together with the file it came from
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// Source file, `None` when the built-in defaults were used
    pub path: Option<PathBuf>,
    pub config: CloakConfig,
}

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into CloakConfig
/// 4. Applies environment variable overrides (CLOAKPROMPT_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use cloakprompt::config::loader::load_config;
///
/// let config = load_config("cloakprompt.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<CloakConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(CloakError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        CloakError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    parse_config(&contents)
}

/// Parses configuration from TOML text
///
/// Runs the same substitution, override and validation steps as [`load_config`].
pub fn parse_config(contents: &str) -> Result<CloakConfig> {
    let contents = substitute_env_vars(contents)?;

    let config: CloakConfig = toml::from_str(&contents)
        .map_err(|e| CloakError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    finish(config)
}

/// Resolves and loads the active configuration
///
/// An explicit path must exist. Without one the first existing file from
/// [`config_search_paths`] is used, falling back to the built-in defaults.
pub fn load_config_or_default(explicit: Option<&Path>) -> Result<LoadedConfig> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => find_config_file(),
    };

    match path {
        Some(path) => {
            let config = load_config(&path)?;
            tracing::debug!(path = %path.display(), "Loaded configuration file");
            Ok(LoadedConfig {
                path: Some(path),
                config,
            })
        }
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(LoadedConfig {
                path: None,
                config: finish(CloakConfig::default())?,
            })
        }
    }
}

/// Locations searched for a configuration file, in priority order
///
/// 1. `./cloakprompt.toml`
/// 2. `config.toml` in the platform config directory
pub fn config_search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
    if let Some(path) = default_config_path() {
        paths.push(path);
    }
    paths
}

/// First existing file from [`config_search_paths`]
pub fn find_config_file() -> Option<PathBuf> {
    config_search_paths().into_iter().find(|p| p.is_file())
}

/// Per-user configuration file in the platform config directory
pub fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "cloakprompt")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

fn finish(mut config: CloakConfig) -> Result<CloakConfig> {
    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        CloakError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error listing every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let mut result = String::with_capacity(input.len());
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let processed = ENV_VAR_RE.replace_all(line, |caps: &regex::Captures<'_>| {
            let var_name = &caps[1];
            match std::env::var(var_name) {
                Ok(value) => value,
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                    caps[0].to_string()
                }
            }
        });
        result.push_str(&processed);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(CloakError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the CLOAKPROMPT_* prefix
///
/// For example: CLOAKPROMPT_LOG_LEVEL, CLOAKPROMPT_LOGGING_LOCAL_PATH,
/// CLOAKPROMPT_DISABLED_PATTERNS
fn apply_env_overrides(config: &mut CloakConfig) -> Result<()> {
    if let Ok(val) = std::env::var("CLOAKPROMPT_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Ok(val) = std::env::var("CLOAKPROMPT_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().map_err(|_| {
            CloakError::Configuration(format!(
                "Invalid CLOAKPROMPT_LOGGING_LOCAL_ENABLED value '{val}'"
            ))
        })?;
    }
    if let Ok(val) = std::env::var("CLOAKPROMPT_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("CLOAKPROMPT_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    config
        .cloaking
        .apply_env_overrides()
        .map_err(|e| CloakError::Configuration(format!("{e:#}")))?;

    Ok(())
}
