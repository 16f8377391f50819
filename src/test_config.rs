//! Test configuration management.
//!
//! Provides environment variable-based test configuration with support for:
//! - Gating tests that need a live backend
//! - A backend URL and access token for those tests
//! - Logging level configuration
//!
//! Variables are read with the `VOXEL_` prefix, e.g.
//! `VOXEL_ENABLE_INTEGRATION_TESTS=true` or `VOXEL_ACCESS_TOKEN=...`.

use serde::Deserialize;
use std::sync::Arc;
use voxel_core::logging::{LogConfig, LogLevel, try_init_logging};
use voxel_core::{ApiConfig, NoSession, SessionProvider, StaticToken};

/// Test configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct TestConfig {
    /// Enable tests that talk to a live backend.
    #[serde(default)]
    pub enable_integration_tests: bool,

    /// Test timeout in seconds.
    #[serde(default = "default_timeout")]
    pub test_timeout_seconds: u64,

    /// Backend base URL (overrides the build-time default).
    pub api_url: Option<String>,

    /// Access token for authenticated integration tests.
    pub access_token: Option<String>,

    /// Logging level used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub rust_log: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            enable_integration_tests: false,
            test_timeout_seconds: default_timeout(),
            api_url: None,
            access_token: None,
            rust_log: default_log_level(),
        }
    }
}

// Serde default value functions
fn default_timeout() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

impl TestConfig {
    /// Load configuration from environment variables.
    ///
    /// Attempts to load `.env` file automatically if present.
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables cannot be deserialized into configuration.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use voxel_client::test_config::TestConfig;
    ///
    /// let config = TestConfig::from_env().unwrap();
    /// ```
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::prefixed("VOXEL_").from_env::<Self>()
    }

    /// Load configuration from a specific `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be loaded or parsed.
    pub fn from_dotenv(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::from_filename(path)?;
        Ok(Self::from_env()?)
    }

    /// Check if integration tests should be skipped.
    #[must_use]
    pub fn should_skip_integration_tests(&self) -> bool {
        !self.enable_integration_tests
    }

    /// Check if an access token is configured.
    #[must_use]
    pub fn has_access_token(&self) -> bool {
        self.access_token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Client configuration for the backend under test.
    #[must_use]
    pub fn api_config(&self) -> ApiConfig {
        let builder = ApiConfig::builder()
            .timeout(std::time::Duration::from_secs(self.test_timeout_seconds));
        match &self.api_url {
            Some(url) => builder.base_url(url.clone()).build(),
            None => builder.build(),
        }
    }

    /// Session provider for the configured token, or anonymous access.
    #[must_use]
    pub fn session(&self) -> Arc<dyn SessionProvider> {
        match &self.access_token {
            Some(token) if !token.is_empty() => Arc::new(StaticToken::new(token.as_str())),
            _ => Arc::new(NoSession),
        }
    }

    /// Log level parsed from `rust_log`; unknown values fall back to info.
    #[must_use]
    pub fn log_level(&self) -> LogLevel {
        match self.rust_log.to_ascii_lowercase().as_str() {
            "trace" => LogLevel::Trace,
            "debug" => LogLevel::Debug,
            "warn" => LogLevel::Warn,
            "error" => LogLevel::Error,
            _ => LogLevel::Info,
        }
    }

    /// Initialize the tracing logging system. Safe to call from every test.
    pub fn init_logging(&self) {
        try_init_logging(&LogConfig {
            level: self.log_level(),
            ..LogConfig::test()
        });
    }
}

/// Conditionally skip a test based on a runtime condition.
///
/// Prints a warning message and returns early from the test function if the condition is true.
///
/// # Examples
///
/// ```no_run
/// use voxel_client::skip_if;
/// # use voxel_client::test_config::TestConfig;
///
/// #[tokio::test]
/// async fn test_live_backend() {
///     let config = TestConfig::from_env().unwrap();
///     skip_if!(config.should_skip_integration_tests(), "Integration tests disabled");
/// }
/// ```
#[macro_export]
macro_rules! skip_if {
    ($condition:expr, $reason:expr) => {
        if $condition {
            println!("⚠️  Skipping test: {}", $reason);
            return;
        }
    };
}
