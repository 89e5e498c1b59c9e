//! Main client implementation.
//!
//! This module provides the `NoridClient` facade that owns one RDAP, one
//! whois and one DAS client for a single registry environment and dispatches
//! [`LookupRequest`]s to them. A DNS client rides along for record lookups.

use crate::endpoints::{resolve_endpoints, Endpoints};
use crate::error::NoridError;
use crate::protocols::{DasClient, DnsClient, RdapClient, WhoisClient};
use crate::types::{ClientConfig, LookupOutcome, LookupRequest};
use tracing::debug;

/// Lookup client for one registry environment.
///
/// The environment is fixed at construction; every endpoint used by this
/// client belongs to it.
///
/// # Example
///
/// ```rust,no_run
/// use norid_lib::{ClientConfig, Environment, LookupRequest, NoridClient, RequestKind};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = NoridClient::new(ClientConfig::default().with_environment(Environment::Test))?;
///     let outcome = client
///         .execute(&LookupRequest::new(RequestKind::Domain, "norid.no"))
///         .await?;
///     println!("{:?}", outcome);
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct NoridClient {
    config: ClientConfig,
    endpoints: Endpoints,
    rdap: RdapClient,
    whois: WhoisClient,
    das: DasClient,
    dns: DnsClient,
}

impl NoridClient {
    /// Create a client for `config.environment`, applying any endpoint
    /// overrides from the configuration.
    ///
    /// # Errors
    ///
    /// `ConfigError` for invalid overrides or when the HTTP client cannot be
    /// built.
    pub fn new(config: ClientConfig) -> Result<Self, NoridError> {
        let mut endpoints = resolve_endpoints(config.environment);
        if let Some(overrides) = &config.endpoint_overrides {
            endpoints = endpoints.with_overrides(overrides)?;
        }

        debug!(
            environment = %endpoints.environment,
            rdap = ?endpoints.rdap.base_url,
            whois = %endpoints.whois.address(),
            das = %endpoints.das.address(),
            "resolved endpoints"
        );

        let rdap = RdapClient::new(endpoints.rdap.clone(), &config)?;
        let whois = WhoisClient::new(endpoints.whois.clone(), &config);
        let das = DasClient::new(endpoints.das.clone(), &config);
        let dns = DnsClient::new(&config)?;

        Ok(Self {
            config,
            endpoints,
            rdap,
            whois,
            das,
            dns,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn rdap(&self) -> &RdapClient {
        &self.rdap
    }

    pub fn whois(&self) -> &WhoisClient {
        &self.whois
    }

    pub fn das(&self) -> &DasClient {
        &self.das
    }

    pub fn dns(&self) -> &DnsClient {
        &self.dns
    }

    /// Validate a request and run it against RDAP.
    ///
    /// Direct lookups yield [`LookupOutcome::Record`], or
    /// [`LookupOutcome::Exists`] when `use_head` is set; searches yield
    /// [`LookupOutcome::Search`]. Nothing is sent if validation fails.
    pub async fn execute(&self, request: &LookupRequest) -> Result<LookupOutcome, NoridError> {
        request.validate()?;
        let key = request.key_or_pattern.trim();

        if let Some(kind) = request.kind.lookup_kind() {
            if request.options.use_head {
                return Ok(LookupOutcome::Exists(self.rdap.exists(kind, key).await?));
            }
            return Ok(LookupOutcome::Record(self.rdap.lookup(kind, key).await?));
        }

        let (kind, params) = request.search_params()?;
        Ok(LookupOutcome::Search(self.rdap.search(kind, &params).await?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints::{EndpointOverrides, Environment};
    use crate::types::{LookupOptions, RequestKind};

    #[test]
    fn test_client_uses_one_environment() {
        let client =
            NoridClient::new(ClientConfig::default().with_environment(Environment::Test)).unwrap();
        assert_eq!(client.endpoints().environment, Environment::Test);
        assert_eq!(client.rdap().endpoint().host, "rdap.test.norid.no");
        assert_eq!(client.whois().endpoint().host, "whois.test.norid.no");
        assert_eq!(client.das().endpoint().host, "finger.test.norid.no");
    }

    #[test]
    fn test_client_applies_overrides() {
        let overrides = EndpointOverrides {
            whois_host: Some("127.0.0.1".to_string()),
            whois_port: Some(4343),
            ..Default::default()
        };
        let client =
            NoridClient::new(ClientConfig::default().with_endpoint_overrides(overrides)).unwrap();
        assert_eq!(client.whois().endpoint().address(), "127.0.0.1:4343");
        assert_eq!(client.das().endpoint().address(), "finger.norid.no:79");
    }

    #[test]
    fn test_client_rejects_bad_overrides() {
        let overrides = EndpointOverrides {
            rdap_base_url: Some("not a url".to_string()),
            ..Default::default()
        };
        assert!(NoridClient::new(ClientConfig::default().with_endpoint_overrides(overrides)).is_err());

        let overrides = EndpointOverrides {
            dns_server: Some("resolver.example".to_string()),
            ..Default::default()
        };
        assert!(NoridClient::new(ClientConfig::default().with_endpoint_overrides(overrides)).is_err());
    }

    #[tokio::test]
    async fn test_execute_validates_before_sending() {
        let client = NoridClient::new(ClientConfig::default()).unwrap();

        let request = LookupRequest::new(RequestKind::DomainSearch, "*.no").with_options(
            LookupOptions {
                sort_key: Some("handle".to_string()),
                ..Default::default()
            },
        );
        let err = client.execute(&request).await.unwrap_err();
        assert!(matches!(err, NoridError::InvalidInput { .. }));
    }
}
