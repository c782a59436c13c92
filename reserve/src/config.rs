//! Endpoint and connection configuration

use crate::error::ReserveError;
use mvtk_soap::ClientOptions;
use std::time::Duration;

/// Environment variable holding the base endpoint URL
pub const ENDPOINT_ENV: &str = "MVTK_RESERVE_ENDPOINT";

/// Base endpoint plus connection options used for every call
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReserveConfig {
    endpoint: String,
    options: ClientOptions,
}

impl ReserveConfig {
    /// Create a configuration with the base endpoint from the environment
    ///
    /// # Errors
    ///
    /// Returns `ReserveError::MissingEndpoint` if `MVTK_RESERVE_ENDPOINT` is not set
    pub fn from_env() -> Result<Self, ReserveError> {
        let endpoint = std::env::var(ENDPOINT_ENV).map_err(|_| ReserveError::MissingEndpoint)?;

        Ok(Self::new(endpoint))
    }

    /// Create a configuration with an explicit base endpoint
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            options: ClientOptions::default(),
        }
    }

    /// Builder: Set connection options
    #[must_use]
    pub fn with_options(mut self, options: ClientOptions) -> Self {
        self.options = options;
        self
    }

    /// Builder: Set request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.options = self.options.with_timeout(timeout);
        self
    }

    /// Builder: Attach basic credentials to the transport
    #[must_use]
    pub fn with_basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.options = self.options.with_basic_auth(username, password);
        self
    }

    /// Builder: Post calls to `endpoint` instead of the address the service description declares
    #[must_use]
    pub fn with_endpoint_override(mut self, endpoint: impl Into<String>) -> Self {
        self.options = self.options.with_endpoint(endpoint);
        self
    }

    /// Base endpoint URL
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Connection options
    #[must_use]
    pub const fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// Service description URL for a service path
    #[must_use]
    pub fn wsdl_url(&self, service_path: &str) -> String {
        format!("{}{service_path}", self.endpoint.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wsdl_url_joins_base_and_path() {
        let config = ReserveConfig::new("https://reserve.example.test/");
        assert_eq!(
            config.wsdl_url("/Auth/PurchaseNumberAuthSvc.svc?singleWsdl"),
            "https://reserve.example.test/Auth/PurchaseNumberAuthSvc.svc?singleWsdl"
        );
    }

    #[test]
    fn test_builder_sets_options() {
        let config = ReserveConfig::new("https://reserve.example.test")
            .with_timeout(Duration::from_secs(10))
            .with_basic_auth("user", "secret")
            .with_endpoint_override("https://proxy.example.test/svc");

        assert_eq!(config.endpoint(), "https://reserve.example.test");
        assert_eq!(config.options().timeout, Some(Duration::from_secs(10)));
        assert!(config.options().basic_auth.is_some());
        assert_eq!(
            config.options().endpoint.as_deref(),
            Some("https://proxy.example.test/svc")
        );
    }
}
