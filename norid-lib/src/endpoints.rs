//! Endpoint resolution for the production and test registry environments.
//!
//! Pure lookup tables: no network access, no global state. A client picks
//! its [`Endpoints`] once at construction and never mixes environments.

use crate::error::NoridError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use url::Url;

pub const WHOIS_PORT: u16 = 43;
pub const DAS_PORT: u16 = 79;
pub const DNS_PORT: u16 = 53;
const HTTPS_PORT: u16 = 443;

/// Registry environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    #[default]
    Production,
    Test,
}

impl FromStr for Environment {
    type Err = NoridError;

    /// Accepts exactly `production` or `test`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "production" => Ok(Environment::Production),
            "test" => Ok(Environment::Test),
            other => Err(NoridError::config(format!(
                "Unknown environment '{}'. Use 'production' or 'test'",
                other
            ))),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Production => write!(f, "production"),
            Environment::Test => write!(f, "test"),
        }
    }
}

/// Lookup service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Protocol {
    Rdap,
    Whois,
    Das,
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Protocol::Rdap => write!(f, "RDAP"),
            Protocol::Whois => write!(f, "whois"),
            Protocol::Das => write!(f, "DAS"),
        }
    }
}

/// Where one service lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Endpoint {
    pub protocol: Protocol,
    pub host: String,
    pub port: u16,
    /// Only set for RDAP
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl Endpoint {
    fn line(protocol: Protocol, host: &str, port: u16) -> Self {
        Self {
            protocol,
            host: host.to_string(),
            port,
            base_url: None,
        }
    }

    fn rdap(base_url: &str) -> Result<Self, NoridError> {
        let parsed = Url::parse(base_url)?;
        if parsed.scheme() != "https" && parsed.scheme() != "http" {
            return Err(NoridError::config(format!(
                "RDAP base URL must be http(s): {}",
                base_url
            )));
        }
        let host = parsed
            .host_str()
            .ok_or_else(|| NoridError::config(format!("RDAP base URL has no host: {}", base_url)))?
            .to_string();
        Ok(Self {
            protocol: Protocol::Rdap,
            host,
            port: parsed.port_or_known_default().unwrap_or(HTTPS_PORT),
            base_url: Some(base_url.trim_end_matches('/').to_string()),
        })
    }

    /// `host:port`, used in error messages and for connecting.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// The three services of one environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Endpoints {
    pub environment: Environment,
    pub rdap: Endpoint,
    pub whois: Endpoint,
    pub das: Endpoint,
}

/// Per-field replacements for the built-in endpoint table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rdap_base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whois_host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whois_port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub das_host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub das_port: Option<u16>,
    /// DNS server as `ip` or `ip:port`, instead of the system resolver
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_server: Option<String>,
}

impl EndpointOverrides {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Return the fixed endpoint triple for an environment.
pub fn resolve_endpoints(environment: Environment) -> Endpoints {
    let (rdap_url, rdap_host, whois_host, das_host) = match environment {
        Environment::Production => (
            "https://rdap.norid.no",
            "rdap.norid.no",
            "whois.norid.no",
            "finger.norid.no",
        ),
        Environment::Test => (
            "https://rdap.test.norid.no",
            "rdap.test.norid.no",
            "whois.test.norid.no",
            "finger.test.norid.no",
        ),
    };

    Endpoints {
        environment,
        rdap: Endpoint {
            protocol: Protocol::Rdap,
            host: rdap_host.to_string(),
            port: HTTPS_PORT,
            base_url: Some(rdap_url.to_string()),
        },
        whois: Endpoint::line(Protocol::Whois, whois_host, WHOIS_PORT),
        das: Endpoint::line(Protocol::Das, das_host, DAS_PORT),
    }
}

impl Endpoints {
    /// Apply overrides on top of the resolved table.
    pub fn with_overrides(mut self, overrides: &EndpointOverrides) -> Result<Self, NoridError> {
        if let Some(base_url) = &overrides.rdap_base_url {
            self.rdap = Endpoint::rdap(base_url)?;
        }
        if let Some(host) = &overrides.whois_host {
            self.whois.host = host.clone();
        }
        if let Some(port) = overrides.whois_port {
            self.whois.port = checked_port(port)?;
        }
        if let Some(host) = &overrides.das_host {
            self.das.host = host.clone();
        }
        if let Some(port) = overrides.das_port {
            self.das.port = checked_port(port)?;
        }
        Ok(self)
    }
}

/// Parse a DNS server address. A bare IP gets port 53.
pub fn parse_dns_server(server: &str) -> Result<SocketAddr, NoridError> {
    let server = server.trim();
    if let Ok(ip) = server.parse::<IpAddr>() {
        return Ok(SocketAddr::new(ip, DNS_PORT));
    }
    let address = server.parse::<SocketAddr>().map_err(|_| {
        NoridError::config(format!(
            "DNS server must be an IP address or ip:port, got '{}'",
            server
        ))
    })?;
    checked_port(address.port())?;
    Ok(address)
}

fn checked_port(port: u16) -> Result<u16, NoridError> {
    if port == 0 {
        Err(NoridError::config("Port must be greater than 0"))
    } else {
        Ok(port)
    }
}
