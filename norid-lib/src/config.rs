//! Configuration file parsing and management.
//!
//! This module handles loading configuration from TOML files and `NORID_*`
//! environment variables, and merging file configurations with proper
//! precedence rules. Turning the layers into a [`crate::ClientConfig`] is up
//! to the caller, which also knows about command-line flags.

use crate::endpoints::{parse_dns_server, EndpointOverrides, Environment};
use crate::error::NoridError;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

/// Configuration loaded from TOML files.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FileConfig {
    /// Default values for CLI options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,

    /// Output formatting preferences
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputConfig>,

    /// Host, port and base URL overrides for the selected environment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoints: Option<EndpointOverrides>,
}

/// Default configuration values that map to CLI options.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DefaultsConfig {
    /// `production` or `test`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,

    /// Overall timeout (as string, e.g., "10s", "1m")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,

    /// Connect timeout, same format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connect_timeout: Option<String>,

    /// JSON output by default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json: Option<bool>,
}

/// Output formatting configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    /// Pretty-print JSON
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_pretty: Option<bool>,
}

/// Configuration discovery and loading functionality.
pub struct ConfigManager {
    /// Report every discovered file at `info` instead of `debug`
    pub verbose: bool,
}

impl ConfigManager {
    /// Create a new configuration manager.
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Load configuration from a specific file.
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<FileConfig, NoridError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(NoridError::file_error(
                path.to_string_lossy(),
                "Configuration file not found",
            ));
        }

        let content = fs::read_to_string(path).map_err(|e| {
            NoridError::file_error(
                path.to_string_lossy(),
                format!("Failed to read configuration file: {}", e),
            )
        })?;

        let config: FileConfig = toml::from_str(&content).map_err(|e| {
            NoridError::config(format!(
                "Failed to parse TOML configuration {}: {}",
                path.display(),
                e
            ))
        })?;

        self.validate_config(&config)?;

        Ok(config)
    }

    /// Discover and load configuration files in precedence order.
    ///
    /// XDG config, then `~/.norid.toml`, then the local file; later files win
    /// field by field. Files that fail to load are skipped with a warning.
    pub fn discover_and_load(&self) -> Result<FileConfig, NoridError> {
        let candidates: Vec<PathBuf> = [
            self.get_xdg_config_path(),
            self.get_global_config_path(),
            self.get_local_config_path(),
        ]
        .into_iter()
        .flatten()
        .collect();

        Ok(self.load_layers(&candidates))
    }

    /// Load and merge `paths`, lowest precedence first.
    pub fn load_layers(&self, paths: &[PathBuf]) -> FileConfig {
        let mut merged_config = FileConfig::default();
        let mut loaded_files = Vec::new();

        for path in paths {
            match self.load_file(path) {
                Ok(config) => {
                    merged_config = self.merge_configs(merged_config, config);
                    loaded_files.push(path.clone());
                }
                Err(e) => warn!(path = %path.display(), error = %e, "skipping configuration file"),
            }
        }

        for (i, path) in loaded_files.iter().enumerate() {
            let status = if i == loaded_files.len() - 1 {
                "highest precedence"
            } else {
                "overridden where set later"
            };
            if self.verbose {
                info!(path = %path.display(), status, "loaded configuration file");
            } else {
                debug!(path = %path.display(), status, "loaded configuration file");
            }
        }

        merged_config
    }

    /// Looks for configuration files in the current directory.
    fn get_local_config_path(&self) -> Option<PathBuf> {
        let candidates = ["./norid.toml", "./.norid.toml"];

        candidates
            .iter()
            .map(Path::new)
            .find(|path| path.exists())
            .map(Path::to_path_buf)
    }

    /// Looks for configuration files in the user's home directory.
    fn get_global_config_path(&self) -> Option<PathBuf> {
        let home = env::var_os("HOME")?;
        let path = Path::new(&home).join(".norid.toml");
        if path.exists() {
            Some(path)
        } else {
            None
        }
    }

    /// Follows the XDG Base Directory Specification.
    fn get_xdg_config_path(&self) -> Option<PathBuf> {
        let config_dir = env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| env::var_os("HOME").map(|home| Path::new(&home).join(".config")))?;

        let path = config_dir.join("norid").join("config.toml");
        if path.exists() {
            Some(path)
        } else {
            None
        }
    }

    /// Merge two configurations with proper precedence.
    ///
    /// Values from `higher` take precedence over values from `lower`.
    pub fn merge_configs(&self, lower: FileConfig, higher: FileConfig) -> FileConfig {
        FileConfig {
            defaults: match (lower.defaults, higher.defaults) {
                (Some(mut lower_defaults), Some(higher_defaults)) => {
                    if higher_defaults.environment.is_some() {
                        lower_defaults.environment = higher_defaults.environment;
                    }
                    if higher_defaults.timeout.is_some() {
                        lower_defaults.timeout = higher_defaults.timeout;
                    }
                    if higher_defaults.connect_timeout.is_some() {
                        lower_defaults.connect_timeout = higher_defaults.connect_timeout;
                    }
                    if higher_defaults.json.is_some() {
                        lower_defaults.json = higher_defaults.json;
                    }
                    Some(lower_defaults)
                }
                (lower_defaults, higher_defaults) => higher_defaults.or(lower_defaults),
            },
            output: match (lower.output, higher.output) {
                (Some(mut lower_output), Some(higher_output)) => {
                    if higher_output.json_pretty.is_some() {
                        lower_output.json_pretty = higher_output.json_pretty;
                    }
                    Some(lower_output)
                }
                (lower_output, higher_output) => higher_output.or(lower_output),
            },
            endpoints: match (lower.endpoints, higher.endpoints) {
                (Some(mut lower_ep), Some(higher_ep)) => {
                    if higher_ep.rdap_base_url.is_some() {
                        lower_ep.rdap_base_url = higher_ep.rdap_base_url;
                    }
                    if higher_ep.whois_host.is_some() {
                        lower_ep.whois_host = higher_ep.whois_host;
                    }
                    if higher_ep.whois_port.is_some() {
                        lower_ep.whois_port = higher_ep.whois_port;
                    }
                    if higher_ep.das_host.is_some() {
                        lower_ep.das_host = higher_ep.das_host;
                    }
                    if higher_ep.das_port.is_some() {
                        lower_ep.das_port = higher_ep.das_port;
                    }
                    if higher_ep.dns_server.is_some() {
                        lower_ep.dns_server = higher_ep.dns_server;
                    }
                    Some(lower_ep)
                }
                (lower_ep, higher_ep) => higher_ep.or(lower_ep),
            },
        }
    }

    /// Validate a configuration for common issues.
    pub fn validate_config(&self, config: &FileConfig) -> Result<(), NoridError> {
        if let Some(defaults) = &config.defaults {
            if let Some(environment) = &defaults.environment {
                environment.parse::<Environment>()?;
            }

            for (key, value) in [
                ("timeout", &defaults.timeout),
                ("connect_timeout", &defaults.connect_timeout),
            ] {
                if let Some(timeout_str) = value {
                    if parse_timeout(timeout_str).is_none() {
                        return Err(NoridError::config(format!(
                            "Invalid {} '{}'. Use a positive value like '5s', '30s', '2m'",
                            key, timeout_str
                        )));
                    }
                }
            }
        }

        if let Some(endpoints) = &config.endpoints {
            if let Some(base_url) = &endpoints.rdap_base_url {
                let parsed = Url::parse(base_url)?;
                if parsed.scheme() != "http" && parsed.scheme() != "https" {
                    return Err(NoridError::config(format!(
                        "rdap_base_url must be http(s): {}",
                        base_url
                    )));
                }
            }

            for (key, host) in [
                ("whois_host", &endpoints.whois_host),
                ("das_host", &endpoints.das_host),
            ] {
                if let Some(host) = host {
                    if host.trim().is_empty() || host.contains(char::is_whitespace) {
                        return Err(NoridError::config(format!("Invalid {} '{}'", key, host)));
                    }
                }
            }

            if endpoints.whois_port == Some(0) || endpoints.das_port == Some(0) {
                return Err(NoridError::config("Ports must be greater than 0"));
            }

            if let Some(server) = &endpoints.dns_server {
                parse_dns_server(server)?;
            }
        }

        Ok(())
    }
}

/// Environment variable configuration that mirrors CLI options.
///
/// This represents configuration values that can be set via `NORID_*`
/// environment variables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvConfig {
    pub environment: Option<Environment>,
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
    pub json: Option<bool>,
    pub config: Option<String>,
}

/// Load configuration from environment variables.
///
/// Invalid values are logged as warnings and ignored.
pub fn load_env_config() -> EnvConfig {
    env_config_from(|key| env::var(key).ok())
}

/// Build an [`EnvConfig`] from any variable source.
pub fn env_config_from<F>(lookup: F) -> EnvConfig
where
    F: Fn(&str) -> Option<String>,
{
    let mut env_config = EnvConfig::default();

    // NORID_ENV - registry environment
    if let Some(val) = lookup("NORID_ENV") {
        match val.trim().parse::<Environment>() {
            Ok(environment) => {
                debug!(%environment, "using NORID_ENV");
                env_config.environment = Some(environment);
            }
            Err(_) => warn!(value = %val, "ignoring invalid NORID_ENV, use production/test"),
        }
    }

    // NORID_TIMEOUT / NORID_CONNECT_TIMEOUT
    for (key, slot) in [
        ("NORID_TIMEOUT", &mut env_config.timeout),
        ("NORID_CONNECT_TIMEOUT", &mut env_config.connect_timeout),
    ] {
        if let Some(val) = lookup(key) {
            match parse_timeout(&val) {
                Some(timeout) => {
                    debug!(key, ?timeout, "using timeout from environment");
                    *slot = Some(timeout);
                }
                None => warn!(
                    key,
                    value = %val,
                    "ignoring invalid timeout, use format like '5s', '30s', '2m'"
                ),
            }
        }
    }

    // NORID_JSON - enable JSON output
    if let Some(val) = lookup("NORID_JSON") {
        match parse_bool(&val) {
            Some(json) => env_config.json = Some(json),
            None => warn!(value = %val, "ignoring invalid NORID_JSON, use true/false"),
        }
    }

    // NORID_CONFIG - explicit config file
    if let Some(config_path) = lookup("NORID_CONFIG") {
        if !config_path.trim().is_empty() {
            env_config.config = Some(config_path);
        }
    }

    env_config
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Parse a timeout like "5s", "2m" or bare seconds. Zero is rejected.
pub fn parse_timeout(timeout_str: &str) -> Option<Duration> {
    let timeout_str = timeout_str.trim().to_lowercase();

    let seconds = if let Some(secs) = timeout_str.strip_suffix('s') {
        secs.parse::<u64>().ok()
    } else if let Some(mins) = timeout_str.strip_suffix('m') {
        mins.parse::<u64>().ok().and_then(|m| m.checked_mul(60))
    } else {
        timeout_str.parse::<u64>().ok()
    }?;

    if seconds == 0 {
        None
    } else {
        Some(Duration::from_secs(seconds))
    }
}
