//! Render configuration for the CLI: an optional TOML file with
//! command-line overrides applied on top.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use umlhex::{UmlHexError, config::RenderConfig};

use crate::Args;

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<ConfigError> for UmlHexError {
    fn from(err: ConfigError) -> Self {
        UmlHexError::Config(err.to_string())
    }
}

/// Load the configuration and apply the overrides given in `args`.
///
/// # Errors
///
/// Returns error if the configuration file cannot be loaded or the
/// resulting configuration is invalid.
pub fn resolve_config(args: &Args) -> Result<RenderConfig, UmlHexError> {
    let mut config = load_config(args.config.as_ref())?;

    if let Some(base_url) = &args.base_url {
        config = config.with_base_url(base_url.as_str());
    }
    if let Some(output_dir) = &args.output_dir {
        config = config.with_output_dir(output_dir.as_str());
    }
    if let Some(timeout) = args.timeout {
        config = config.with_timeout(Duration::from_secs(timeout));
    }

    validate(&config)?;

    debug!(
        base_url = config.base_url(),
        output_dir = config.output_dir().display().to_string(),
        timeout:? = config.timeout();
        "Resolved configuration"
    );

    Ok(config)
}

/// Name of the project-local configuration file.
const LOCAL_CONFIG: &str = "umlhex/config.toml";

/// Load the render configuration.
///
/// An explicit path must exist. Otherwise the first existing file among
/// [`LOCAL_CONFIG`] and the platform config directory is used, falling back
/// to [`RenderConfig::default`].
///
/// # Errors
///
/// Returns [`UmlHexError::Config`] for a missing explicit file or invalid
/// TOML, and [`UmlHexError::Io`] when a file cannot be read.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<RenderConfig, UmlHexError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::MissingFile(path.to_path_buf()).into());
        }
        return read_config(path);
    }

    match candidate_paths().into_iter().find(|path| path.exists()) {
        Some(path) => read_config(&path),
        None => {
            debug!("No configuration file found, using defaults");
            Ok(RenderConfig::default())
        }
    }
}

/// Implicit configuration locations, most specific first.
fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(LOCAL_CONFIG)];
    match ProjectDirs::from("com", "umlhex", "umlhex") {
        Some(dirs) => paths.push(dirs.config_dir().join("config.toml")),
        None => debug!("No platform config directory"),
    }
    paths
}

fn read_config(path: &Path) -> Result<RenderConfig, UmlHexError> {
    info!(path = path.display().to_string(); "Loading configuration");

    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()).into())
}

fn validate(config: &RenderConfig) -> Result<(), ConfigError> {
    let base_url = config.base_url();
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        return Err(ConfigError::Validation(format!(
            "base_url must be an http(s) URL, got `{base_url}`"
        )));
    }
    if config.timeout().is_zero() {
        return Err(ConfigError::Validation(
            "timeout must be greater than zero".to_string(),
        ));
    }
    Ok(())
}
