//! Runtime configuration read from the environment and an optional `.env` file.

use std::collections::HashMap;
use std::env;
use std::fs::File;
use std::path::PathBuf;

use chanmap_client::ClientConfig;
use chanmap_core::{ExportOptions, ImportOptions, ProviderIdSource};
use thiserror::Error;

pub const ENDPOINT_VAR: &str = "JELLYFIN_SERVER_ENDPOINT";
pub const TOKEN_VAR: &str = "JELLYFIN_API_TOKEN";
pub const NAME_FILTER_VAR: &str = "CHANMAP_NAME_FILTER";
pub const THRESHOLD_VAR: &str = "CHANMAP_MATCH_THRESHOLD";
pub const PROVIDER_ID_SOURCE_VAR: &str = "CHANMAP_PROVIDER_ID_SOURCE";
pub const OUTPUT_DIR_VAR: &str = "CHANMAP_OUTPUT_DIR";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    Missing(&'static str),
    #[error("environment variable {var} has invalid value `{value}`: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
    #[error("failed to read dotenv file: {0}")]
    DotEnv(String),
}

/// Everything a run needs besides operator input.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub client: ClientConfig,
    pub import: ImportOptions,
    pub export: ExportOptions,
}

impl AppConfig {
    /// Read the process environment, falling back to the nearest `.env` file
    /// in the current directory or its parents. Process variables win.
    pub fn from_env() -> Result<Self, ConfigError> {
        let file_vars = collect_dotenv(dotenvy::dotenv_iter())?;
        Self::from_env_and(&file_vars)
    }

    fn from_env_and(file_vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok().or_else(|| file_vars.get(key).cloned()))
    }

    /// Build the configuration from an arbitrary variable source.
    ///
    /// Required variables that are set but blank count as missing. An empty
    /// name filter is kept and matches every tuner channel.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &'static str| {
            lookup(var)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .ok_or(ConfigError::Missing(var))
        };
        let client = ClientConfig::new(required(ENDPOINT_VAR)?, required(TOKEN_VAR)?);

        let mut import = ImportOptions::default();
        let mut export = ExportOptions::default();
        if let Some(filter) = lookup(NAME_FILTER_VAR) {
            import.name_filter = filter;
        }
        if let Some(value) = lookup(THRESHOLD_VAR) {
            import.threshold = parse_threshold(&value)?;
        }
        if let Some(value) = lookup(PROVIDER_ID_SOURCE_VAR) {
            import.provider_id_source =
                value
                    .parse::<ProviderIdSource>()
                    .map_err(|reason| ConfigError::Invalid {
                        var: PROVIDER_ID_SOURCE_VAR,
                        value: value.clone(),
                        reason,
                    })?;
        }
        if let Some(dir) = lookup(OUTPUT_DIR_VAR).filter(|dir| !dir.trim().is_empty()) {
            let dir = PathBuf::from(dir);
            import.output_dir = dir.clone();
            export.input_dir = dir;
        }

        Ok(Self {
            client,
            import,
            export,
        })
    }
}

/// Collect dotenv pairs. A missing file contributes nothing.
fn collect_dotenv(
    source: dotenvy::Result<dotenvy::Iter<File>>,
) -> Result<HashMap<String, String>, ConfigError> {
    match source {
        Ok(iter) => iter
            .map(|item| item.map_err(|e| ConfigError::DotEnv(e.to_string())))
            .collect(),
        Err(error) if error.not_found() => Ok(HashMap::new()),
        Err(error) => Err(ConfigError::DotEnv(error.to_string())),
    }
}

fn parse_threshold(value: &str) -> Result<u8, ConfigError> {
    let invalid = |reason: &str| ConfigError::Invalid {
        var: THRESHOLD_VAR,
        value: value.to_string(),
        reason: reason.to_string(),
    };
    let threshold: u8 = value
        .trim()
        .parse()
        .map_err(|_| invalid("expected a whole number"))?;
    if threshold > 100 {
        return Err(invalid("must be between 0 and 100"));
    }
    Ok(threshold)
}
