//! Process configuration.
//!
//! Resolved once at startup from the environment and command-line
//! options, before the terminal enters raw mode, so a missing API key is
//! reported as a plain error message.

use std::path::PathBuf;

use crate::cli::RunOptions;
use crate::error::ConfigError;
use crate::session::MODEL_NAME;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Runtime configuration.
///
/// # Example
///
/// ```ignore
/// use justicia::config::AppConfig;
///
/// let config = AppConfig::new("key")
///     .with_model("gemini-2.5-pro")
///     .with_connect_timeout_secs(5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Gemini API key (GEMINI_API_KEY, falling back to API_KEY)
    pub api_key: String,
    /// Model name (JUSTICIA_MODEL or --model)
    pub model: String,
    /// API root without trailing slash (GEMINI_BASE_URL)
    pub base_url: String,
    /// Connect timeout for the HTTP client (JUSTICIA_CONNECT_TIMEOUT)
    pub connect_timeout_secs: u64,
    /// Where tracing output goes (JUSTICIA_LOG_FILE or --log-file)
    pub log_file: PathBuf,
}

impl AppConfig {
    /// Configuration with `api_key` and defaults for everything else.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: MODEL_NAME.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            log_file: default_log_file(),
        }
    }

    /// Set the model name sent in the request path.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the API root, e.g. a local server in tests.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_connect_timeout_secs(mut self, secs: u64) -> Self {
        self.connect_timeout_secs = secs;
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = path.into();
        self
    }

    /// Resolve from the process environment, with `options` taking
    /// precedence over environment variables.
    pub fn from_env(options: &RunOptions) -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok(), options)
    }

    /// Resolve using `lookup` for variable values. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F, options: &RunOptions) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_key = var("GEMINI_API_KEY")
            .or_else(|| var("API_KEY"))
            .ok_or(ConfigError::MissingApiKey)?;
        let mut config = Self::new(api_key);

        if let Some(model) = options.model.clone().or_else(|| var("JUSTICIA_MODEL")) {
            config = config.with_model(model);
        }
        if let Some(url) = var("GEMINI_BASE_URL") {
            config = config.with_base_url(url.trim_end_matches('/'));
        }
        if let Some(raw) = var("JUSTICIA_CONNECT_TIMEOUT") {
            let secs = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidTimeout { value: raw.clone() })?;
            config = config.with_connect_timeout_secs(secs);
        }
        if let Some(path) = options
            .log_file
            .clone()
            .or_else(|| var("JUSTICIA_LOG_FILE").map(PathBuf::from))
        {
            config = config.with_log_file(path);
        }
        Ok(config)
    }
}

/// `<data dir>/justicia/justicia.log`, or the working directory when the
/// platform has no data dir.
pub fn default_log_file() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("justicia"))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("justicia.log")
}
