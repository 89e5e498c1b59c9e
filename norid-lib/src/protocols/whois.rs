//! Whois client (TCP port 43).
//!
//! Sends the query as one line and hands back the server's text untouched.
//! Whois output is free-form; interpreting it is left to the caller.

use crate::endpoints::Endpoint;
use crate::error::NoridError;
use crate::protocols::line::{query_line, LineTransport};
use crate::types::ClientConfig;
use crate::utils::validate_query_line;
use tracing::debug;

/// Whois client bound to one endpoint.
#[derive(Debug, Clone)]
pub struct WhoisClient {
    transport: LineTransport,
    /// Always send the charset flag, not only for non-ASCII names
    force_utf8: bool,
}

impl WhoisClient {
    /// Create a whois client for `endpoint`, taking timeouts and the
    /// response size limit from `config`.
    pub fn new(endpoint: Endpoint, config: &ClientConfig) -> Self {
        Self {
            transport: LineTransport::new(endpoint, config),
            force_utf8: false,
        }
    }

    /// Always ask the server for UTF-8 output.
    pub fn with_utf8(mut self, force_utf8: bool) -> Self {
        self.force_utf8 = force_utf8;
        self
    }

    pub fn endpoint(&self) -> &Endpoint {
        self.transport.endpoint()
    }

    /// Look up a domain name or handle and return the raw response text.
    ///
    /// # Errors
    ///
    /// * `InvalidInput` for an empty query or one containing line breaks
    /// * `NetworkError` / `Timeout` for connect, write and read failures
    /// * `ProtocolError` when the response is larger than the configured limit
    pub async fn lookup(&self, query: &str) -> Result<String, NoridError> {
        self.lookup_with_charset(query, self.force_utf8).await
    }

    /// Like [`lookup`](Self::lookup), choosing the charset flag per call.
    pub async fn lookup_with_charset(
        &self,
        query: &str,
        force_utf8: bool,
    ) -> Result<String, NoridError> {
        validate_query_line(query)?;
        let line = query_line(query, force_utf8);
        debug!(endpoint = %self.endpoint().address(), query = %line, "whois query");
        self.transport.exchange(&line).await
    }
}
