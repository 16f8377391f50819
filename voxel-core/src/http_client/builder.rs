use crate::error::Result;
use crate::session::SessionProvider;
use std::fmt;
use std::sync::Arc;
use tracing::warn;

use super::config::ApiConfig;
use super::transport::{ReqwestTransport, Transport};

/// Authenticated JSON client for the Voxel API.
///
/// Cheap to clone; clones share the transport and the session provider.
#[derive(Clone)]
pub struct ApiClient {
    config: Arc<ApiConfig>,
    session: Arc<dyn SessionProvider>,
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    /// Creates a client that sends requests through `reqwest`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation or the
    /// `reqwest` client cannot be built.
    pub fn new(config: ApiConfig, session: impl SessionProvider + 'static) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Self::with_transport(config, Arc::new(session), Arc::new(transport))
    }

    /// Creates a client on top of a custom transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn with_transport(
        mut config: ApiConfig,
        session: Arc<dyn SessionProvider>,
        transport: Arc<dyn Transport>,
    ) -> Result<Self> {
        config.base_url = config.base_url.trim_end_matches('/').to_string();

        let validation = config.validate()?;
        for warning in &validation.warnings {
            warn!(warning = %warning, "API client configuration warning");
        }

        Ok(Self {
            config: Arc::new(config),
            session,
            transport,
        })
    }

    /// Returns a reference to the configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Joins a request path onto the base URL as `<base>/<path>`.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url, path)
    }

    pub(crate) fn session(&self) -> &dyn SessionProvider {
        self.session.as_ref()
    }

    pub(crate) fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
