//! # Norid Library
//!
//! Lookup clients for the public services of the `.no` registry: RDAP over
//! HTTPS, whois on TCP port 43 and DAS on TCP port 79.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use norid_lib::{ClientConfig, LookupResult, NoridClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = NoridClient::new(ClientConfig::default())?;
//!
//!     match client.rdap().domain("norid.no").await? {
//!         LookupResult::Found(domain) => println!("{} {:?}", domain.name, domain.nameservers),
//!         LookupResult::NotFound { reason } => println!("not found: {}", reason),
//!         LookupResult::Error { status, message } => println!("HTTP {}: {}", status, message),
//!     }
//!
//!     println!("{}", client.das().lookup("norid.no").await?);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **RDAP**: lookups, HEAD existence checks, searches with sort, field
//!   sets, counts and cursor paging, plus the domain-count extension
//! - **Whois / DAS**: raw line-protocol text, returned unchanged
//! - **DNS**: A, AAAA, MX, NS, TXT and CNAME records of a domain
//! - **Environments**: production and test, chosen per client
//! - **Configurable**: TOML files and `NORID_*` environment variables

// Re-export main public API types and functions
// This makes them available as norid_lib::TypeName
pub use client::NoridClient;
pub use config::{
    env_config_from, load_env_config, parse_timeout, ConfigManager, DefaultsConfig, EnvConfig,
    FileConfig, OutputConfig,
};
pub use endpoints::{
    parse_dns_server, resolve_endpoints, Endpoint, EndpointOverrides, Endpoints, Environment,
    Protocol, DAS_PORT, DNS_PORT, WHOIS_PORT,
};
pub use error::NoridError;
pub use protocols::{
    classify_not_found, legal_sort_properties, query_line, DasClient, DnsAnswer, DnsClient,
    DnsRecordSet, LineState, RdapClient, WhoisClient, CHARSET_FLAG,
};
pub use types::{
    ClientConfig, DomainRecord, EntityKind, EntityRecord, FieldSet, LookupKind, LookupOptions,
    LookupOutcome, LookupRequest, LookupResult, NameserverRecord, NotFoundReason, Record,
    RequestKind, SearchFilter, SearchItem, SearchKind, SearchParams, SearchResult, SortDirection,
    SortKey, DEFAULT_CONNECT_TIMEOUT, DEFAULT_MAX_RESPONSE_BYTES, DEFAULT_TIMEOUT,
};
pub use utils::{validate_domain, validate_handle, validate_search_pattern, validate_search_text};

// Public modules
pub mod protocols;

// Internal modules - these are not part of the public API
mod client;
mod config;
mod endpoints;
mod error;
mod types;
mod utils;

// Type alias for convenience
pub type Result<T> = std::result::Result<T, NoridError>;

// Library version and metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// User-Agent sent with every RDAP request.
pub const USER_AGENT: &str = concat!("norid/", env!("CARGO_PKG_VERSION"));
