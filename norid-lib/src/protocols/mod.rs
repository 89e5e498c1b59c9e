//! Protocol implementations for registry lookups.
//!
//! RDAP runs over HTTPS; whois and DAS share a single-line TCP transport.
//! DNS lookups go through trust-dns.

/// RDAP (Registration Data Access Protocol) client and response normalizers
pub mod rdap;

/// Whois client (TCP/43)
pub mod whois;

/// DAS client (finger-style, TCP/79)
pub mod das;

/// RDAP URL builders and request validation
pub mod query;

/// Line-protocol transport shared by whois and DAS
pub mod line;

/// DNS record lookups
pub mod dns;

// Re-export commonly used functions and types
pub use das::DasClient;
pub use dns::{DnsAnswer, DnsClient, DnsRecordSet, DNS_RECORD_TYPES};
pub use line::{query_line, LineState, CHARSET_FLAG};
pub use query::{extract_cursor, legal_sort_properties, validate_search, validate_sort_key};
pub use rdap::{classify_not_found, RdapClient};
pub use whois::WhoisClient;
