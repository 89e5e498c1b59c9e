//! DAS (Domain Availability Service) client, finger-style on TCP port 79.
//!
//! The service answers with a short status line. The core returns it as-is;
//! the CLI decides what it means.

use crate::endpoints::Endpoint;
use crate::error::NoridError;
use crate::protocols::line::{query_line, LineTransport};
use crate::types::ClientConfig;
use crate::utils::validate_domain;
use tracing::debug;

/// DAS client bound to one endpoint.
#[derive(Debug, Clone)]
pub struct DasClient {
    transport: LineTransport,
    force_utf8: bool,
}

impl DasClient {
    pub fn new(endpoint: Endpoint, config: &ClientConfig) -> Self {
        Self {
            transport: LineTransport::new(endpoint, config),
            force_utf8: false,
        }
    }

    /// Always send the charset flag, not only for IDN names.
    pub fn with_utf8(mut self, force_utf8: bool) -> Self {
        self.force_utf8 = force_utf8;
        self
    }

    pub fn endpoint(&self) -> &Endpoint {
        self.transport.endpoint()
    }

    /// Ask whether `domain` is registered and return the raw answer.
    pub async fn lookup(&self, domain: &str) -> Result<String, NoridError> {
        self.lookup_with_charset(domain, self.force_utf8).await
    }

    /// Like [`lookup`](Self::lookup), choosing the charset flag per call.
    /// IDN names get the flag either way; the finger server reads Latin-1
    /// otherwise.
    pub async fn lookup_with_charset(
        &self,
        domain: &str,
        force_utf8: bool,
    ) -> Result<String, NoridError> {
        validate_domain(domain)?;
        let line = query_line(domain, force_utf8);
        debug!(endpoint = %self.endpoint().address(), line = %line, "DAS query");
        self.transport.exchange(&line).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints::{resolve_endpoints, Environment};

    #[tokio::test]
    async fn test_rejects_invalid_domain_before_connecting() {
        let endpoints = resolve_endpoints(Environment::Test);
        let client = DasClient::new(endpoints.das, &ClientConfig::default());
        assert_eq!(client.endpoint().address(), "finger.test.norid.no:79");

        let err = client.lookup("not a domain").await.unwrap_err();
        assert!(matches!(err, NoridError::InvalidInput { .. }));
    }
}
