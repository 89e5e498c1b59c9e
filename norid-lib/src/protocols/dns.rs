//! DNS record lookups.
//!
//! Asks the system resolver (or a configured server) for the common record
//! types of a domain. Record data is returned as presentation text; the
//! registry services above remain the source of truth for registration.

use crate::endpoints::parse_dns_server;
use crate::error::NoridError;
use crate::types::ClientConfig;
use crate::utils::validate_domain;
use serde::Serialize;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{debug, warn};
use trust_dns_resolver::config::{NameServerConfigGroup, ResolverConfig, ResolverOpts};
use trust_dns_resolver::error::{ResolveError, ResolveErrorKind};
use trust_dns_resolver::proto::op::ResponseCode;
use trust_dns_resolver::proto::rr::{Name, RecordType};
use trust_dns_resolver::TokioAsyncResolver;

/// Record types asked for, in output order.
pub const DNS_RECORD_TYPES: [RecordType; 6] = [
    RecordType::A,
    RecordType::AAAA,
    RecordType::MX,
    RecordType::NS,
    RecordType::TXT,
    RecordType::CNAME,
];

/// All records of one type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DnsRecordSet {
    pub record_type: String,
    pub values: Vec<String>,
}

/// Result of a DNS lookup. `exists` is false only on NXDOMAIN; a name with
/// no records of the asked types exists with an empty `records`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DnsAnswer {
    pub domain: String,
    pub exists: bool,
    pub records: Vec<DnsRecordSet>,
}

/// DNS client. A fresh resolver is built per lookup, so nothing is cached
/// between calls.
#[derive(Debug, Clone)]
pub struct DnsClient {
    /// Configured server; the system resolver when unset
    server: Option<SocketAddr>,
    timeout: Duration,
}

impl DnsClient {
    /// # Errors
    ///
    /// `ConfigError` if the `dns_server` override is not an IP address.
    pub fn new(config: &ClientConfig) -> Result<Self, NoridError> {
        let server = config
            .endpoint_overrides
            .as_ref()
            .and_then(|overrides| overrides.dns_server.as_deref())
            .map(parse_dns_server)
            .transpose()?;

        Ok(Self {
            server,
            timeout: config.timeout,
        })
    }

    pub fn server(&self) -> Option<SocketAddr> {
        self.server
    }

    /// Look up the A, AAAA, MX, NS, TXT and CNAME records of `domain`.
    ///
    /// Types without records are left out. NXDOMAIN stops the lookup and
    /// yields `exists: false`.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for a malformed name, `Timeout` when the resolver does
    /// not answer in time and `NetworkError` for any other resolver failure.
    pub async fn lookup(&self, domain: &str) -> Result<DnsAnswer, NoridError> {
        validate_domain(domain)?;
        let domain = domain.trim();

        let mut name =
            Name::from_utf8(domain).map_err(|e| NoridError::invalid_input(domain, e.to_string()))?;
        name.set_fqdn(true);

        let (config, options) = self.resolver_config();
        let resolver = TokioAsyncResolver::tokio(config, options);

        let mut records = Vec::new();
        for record_type in DNS_RECORD_TYPES {
            debug!(name = %name, %record_type, "DNS query");
            match resolver.lookup(name.clone(), record_type).await {
                Ok(lookup) => {
                    let values: Vec<String> = lookup
                        .record_iter()
                        .filter(|record| record.record_type() == record_type)
                        .filter_map(|record| record.data())
                        .map(|data| data.to_string())
                        .collect();
                    if !values.is_empty() {
                        records.push(DnsRecordSet {
                            record_type: record_type.to_string(),
                            values,
                        });
                    }
                }
                Err(e) => match e.kind() {
                    ResolveErrorKind::NoRecordsFound { response_code, .. }
                        if *response_code == ResponseCode::NXDomain =>
                    {
                        debug!(name = %name, "NXDOMAIN");
                        return Ok(DnsAnswer {
                            domain: domain.to_string(),
                            exists: false,
                            records: Vec::new(),
                        });
                    }
                    ResolveErrorKind::NoRecordsFound { .. } => {
                        debug!(name = %name, %record_type, "no records");
                    }
                    _ => return Err(self.resolve_error(record_type, &e)),
                },
            }
        }

        Ok(DnsAnswer {
            domain: domain.to_string(),
            exists: true,
            records,
        })
    }

    fn resolver_config(&self) -> (ResolverConfig, ResolverOpts) {
        let (config, mut options) = match self.server {
            Some(server) => {
                let group = NameServerConfigGroup::from_ips_clear(&[server.ip()], server.port(), true);
                (ResolverConfig::from_parts(None, vec![], group), ResolverOpts::default())
            }
            None => trust_dns_resolver::system_conf::read_system_conf().unwrap_or_else(|e| {
                warn!(error = %e, "cannot read system resolver configuration, using defaults");
                (ResolverConfig::default(), ResolverOpts::default())
            }),
        };

        // One attempt per query, bounded like every other exchange.
        options.timeout = self.timeout;
        options.attempts = 1;
        (config, options)
    }

    fn server_name(&self) -> String {
        self.server
            .map(|server| server.to_string())
            .unwrap_or_else(|| "system resolver".to_string())
    }

    fn resolve_error(&self, record_type: RecordType, err: &ResolveError) -> NoridError {
        let operation = format!("{} query", record_type);
        match err.kind() {
            ResolveErrorKind::Timeout => NoridError::timeout(self.server_name(), operation, self.timeout),
            _ => NoridError::network(self.server_name(), operation, err.to_string()),
        }
    }
}
