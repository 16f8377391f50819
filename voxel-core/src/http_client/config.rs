use crate::error::{ConfigValidationError, Result, ValidationResult};
use serde::Deserialize;
use std::time::Duration;
use url::Url;

/// Base URL used when nothing else is configured.
pub const FALLBACK_BASE_URL: &str = "http://localhost:8000";

/// Base URL baked in at build time from `VOXEL_API_URL`, or
/// [`FALLBACK_BASE_URL`] when the variable was not set during compilation.
pub const DEFAULT_BASE_URL: &str = match option_env!("VOXEL_API_URL") {
    Some(url) => url,
    None => FALLBACK_BASE_URL,
};

/// Default cap on response bodies (10MB).
pub const DEFAULT_MAX_RESPONSE_SIZE: usize = 10 * 1024 * 1024;

const MAX_TIMEOUT: Duration = Duration::from_secs(300);

/// API client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL every request path is appended to, as `<base>/<path>`
    pub base_url: String,
    /// Whole-call timeout. `None` leaves latency unbounded (the default).
    pub timeout: Option<Duration>,
    /// TCP connect timeout. `None` keeps the transport default.
    pub connect_timeout: Option<Duration>,
    /// User-Agent header value
    pub user_agent: String,
    /// Log request bodies at debug level
    pub verbose: bool,
    /// Maximum response body size in bytes
    pub max_response_size: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            connect_timeout: None,
            user_agent: format!("voxel-client/{}", env!("CARGO_PKG_VERSION")),
            verbose: false,
            max_response_size: DEFAULT_MAX_RESPONSE_SIZE,
        }
    }
}

/// Shape of the `VOXEL_*` environment variables.
#[derive(Debug, Default, Deserialize)]
struct EnvOverrides {
    api_url: Option<String>,
    timeout_secs: Option<u64>,
    connect_timeout_secs: Option<u64>,
    verbose: Option<bool>,
    max_response_size: Option<usize>,
}

impl ApiConfig {
    /// Creates a configuration builder.
    ///
    /// ```rust
    /// use voxel_core::http_client::ApiConfig;
    /// use std::time::Duration;
    ///
    /// let config = ApiConfig::builder()
    ///     .base_url("https://api.example.com/")
    ///     .timeout(Duration::from_secs(20))
    ///     .build();
    /// assert_eq!(config.base_url, "https://api.example.com");
    /// ```
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    /// Loads the configuration from `VOXEL_*` environment variables, reading
    /// a `.env` file first when one is present.
    ///
    /// Recognized variables: `VOXEL_API_URL`, `VOXEL_TIMEOUT_SECS`,
    /// `VOXEL_CONNECT_TIMEOUT_SECS`, `VOXEL_VERBOSE`,
    /// `VOXEL_MAX_RESPONSE_SIZE`. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        let overrides: EnvOverrides = envy::prefixed("VOXEL_")
            .from_env()
            .map_err(|e| ConfigValidationError::invalid("environment", e.to_string()))?;
        Ok(Self::default().with_overrides(overrides))
    }

    fn with_overrides(self, overrides: EnvOverrides) -> Self {
        let mut builder = ApiConfigBuilder { config: self };
        if let Some(url) = overrides.api_url {
            builder = builder.base_url(url);
        }
        if let Some(secs) = overrides.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = overrides.connect_timeout_secs {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }
        if let Some(verbose) = overrides.verbose {
            builder = builder.verbose(verbose);
        }
        if let Some(size) = overrides.max_response_size {
            builder = builder.max_response_size(size);
        }
        builder.build()
    }

    /// Validates the configuration.
    ///
    /// Errors: unparseable base URL, a scheme other than http/https, a base
    /// URL carrying a query or fragment, a timeout above 5 minutes, a zero
    /// response size limit. Warnings: plain http to a non-local host, a
    /// timeout under one second.
    ///
    /// ```rust
    /// use voxel_core::http_client::ApiConfig;
    ///
    /// let config = ApiConfig::builder().base_url("ftp://files.example.com").build();
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> std::result::Result<ValidationResult, ConfigValidationError> {
        let mut result = ValidationResult::new();

        if self.base_url.is_empty() {
            return Err(ConfigValidationError::missing("base_url"));
        }

        let url = Url::parse(&self.base_url)
            .map_err(|e| ConfigValidationError::invalid("base_url", e.to_string()))?;

        match url.scheme() {
            "https" => {}
            "http" => {
                let local = matches!(
                    url.host_str(),
                    Some("localhost" | "127.0.0.1" | "[::1]" | "0.0.0.0")
                );
                if !local {
                    result.add_warning(format!(
                        "base_url {} uses plain http; bearer tokens will be sent unencrypted",
                        self.base_url
                    ));
                }
            }
            other => {
                return Err(ConfigValidationError::invalid(
                    "base_url",
                    format!("unsupported scheme '{other}', expected http or https"),
                ));
            }
        }

        if url.query().is_some() || url.fragment().is_some() {
            return Err(ConfigValidationError::invalid(
                "base_url",
                "base_url must not carry a query string or fragment",
            ));
        }

        if let Some(timeout) = self.timeout {
            if timeout > MAX_TIMEOUT {
                return Err(ConfigValidationError::too_high(
                    "timeout",
                    format!("{timeout:?}"),
                    "5 minutes",
                ));
            }
            if timeout < Duration::from_secs(1) {
                result.add_warning(format!(
                    "timeout {timeout:?} is very short, may cause frequent timeouts"
                ));
            }
        }

        if self.max_response_size == 0 {
            return Err(ConfigValidationError::invalid(
                "max_response_size",
                "max_response_size cannot be zero",
            ));
        }

        Ok(result)
    }
}

/// Fluent builder for [`ApiConfig`].
#[derive(Debug, Clone, Default)]
pub struct ApiConfigBuilder {
    config: ApiConfig,
}

impl ApiConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL. Trailing slashes are trimmed so that joining with
    /// `/<path>` never produces `//`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.config.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Set a whole-call timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Set the TCP connect timeout
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = Some(timeout);
        self
    }

    /// Set the User-Agent header value
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Enable or disable request body logging
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    /// Set the maximum response body size in bytes
    pub fn max_response_size(mut self, bytes: usize) -> Self {
        self.config.max_response_size = bytes;
        self
    }

    /// Build the configuration
    pub fn build(self) -> ApiConfig {
        self.config
    }
}
