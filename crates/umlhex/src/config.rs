//! Configuration types for remote diagram rendering.
//!
//! [`RenderConfig`] holds everything the pipeline needs to know about its
//! environment: which server renders the diagrams, where the images go, and
//! how long a single request may take. It implements [`serde::Deserialize`]
//! so it can be loaded from external sources, with every field optional.
//!
//! # Example
//!
//! ```
//! # use umlhex::config::RenderConfig;
//! let config = RenderConfig::default();
//! assert_eq!(config.base_url(), "http://www.plantuml.com/plantuml/png/");
//! assert_eq!(config.url_for("~h41"), "http://www.plantuml.com/plantuml/png/~h41");
//! ```

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Deserializer};

/// Public PlantUML server endpoint producing PNG images.
pub const DEFAULT_BASE_URL: &str = "http://www.plantuml.com/plantuml/png/";

/// Directory images are written to when none is configured.
pub const DEFAULT_OUTPUT_DIR: &str = "diagrams_hex";

/// Request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for the render pipeline.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    /// Endpoint the encoded payload is appended to.
    #[serde(default = "default_base_url")]
    base_url: String,

    /// Directory receiving the rendered images.
    #[serde(default = "default_output_dir")]
    output_dir: PathBuf,

    /// Upper bound for one HTTP request. Read from `timeout_secs`.
    #[serde(
        rename = "timeout_secs",
        default = "default_timeout",
        deserialize_with = "deserialize_secs"
    )]
    timeout: Duration,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn default_timeout() -> Duration {
    Duration::from_secs(DEFAULT_TIMEOUT_SECS)
}

fn deserialize_secs<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    u64::deserialize(deserializer).map(Duration::from_secs)
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            output_dir: default_output_dir(),
            timeout: default_timeout(),
        }
    }
}

impl RenderConfig {
    /// Returns a copy with a different base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Returns a copy with a different output directory.
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Returns a copy with a different request timeout.
    ///
    /// The value is kept as given, sub-second precision included. A zero
    /// timeout is refused later by [`HttpFetcher::new`](crate::fetch::HttpFetcher::new).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the output directory.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Returns the request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Builds the request URL for an already encoded payload.
    ///
    /// This is plain concatenation: the encoder output is URL safe.
    pub fn url_for(&self, encoded: &str) -> String {
        let mut url = String::with_capacity(self.base_url.len() + encoded.len());
        url.push_str(&self.base_url);
        url.push_str(encoded);
        url
    }
}
