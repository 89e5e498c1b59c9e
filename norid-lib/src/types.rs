//! Core data types for registry lookups.
//!
//! This module defines the request side (lookup kinds, search filters, sort
//! keys, client configuration) and the result side (normalized records,
//! lookup and search results) shared by every client in the crate.

use crate::endpoints::{EndpointOverrides, Environment};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Default overall timeout for one lookup.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default bound for establishing a connection.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Largest whois/DAS response we accept before giving up.
pub const DEFAULT_MAX_RESPONSE_BYTES: usize = 1024 * 1024;

/// Configuration shared by all clients of one [`crate::NoridClient`].
///
/// The environment is an explicit value here rather than process-wide state,
/// so two clients for different environments can live side by side.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Which registry environment to talk to
    pub environment: Environment,

    /// Overall bound for one HTTP exchange or one line-protocol read
    pub timeout: Duration,

    /// Bound for establishing TCP/TLS connections
    pub connect_timeout: Duration,

    /// User-Agent sent with RDAP requests
    pub user_agent: String,

    /// Upper limit for whois/DAS responses
    pub max_response_bytes: usize,

    /// Optional host/port/base URL overrides for the selected environment
    pub endpoint_overrides: Option<EndpointOverrides>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Production,
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            user_agent: crate::USER_AGENT.to_string(),
            max_response_bytes: DEFAULT_MAX_RESPONSE_BYTES,
            endpoint_overrides: None,
        }
    }
}

impl ClientConfig {
    /// Select the registry environment.
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Set the overall timeout for each lookup.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the connect timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set a custom User-Agent.
    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Cap the size of whois/DAS responses.
    pub fn with_max_response_bytes(mut self, max: usize) -> Self {
        self.max_response_bytes = max.max(1);
        self
    }

    /// Point one or more services somewhere else (mirror, mock server).
    pub fn with_endpoint_overrides(mut self, overrides: EndpointOverrides) -> Self {
        self.endpoint_overrides = Some(overrides);
        self
    }
}

/// Object type of a direct RDAP lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupKind {
    Domain,
    Entity,
    /// Looked up by handle; host names are not unique in the registry.
    Nameserver,
}

impl LookupKind {
    /// Path segment under the RDAP base URL.
    pub fn path(&self) -> &'static str {
        match self {
            LookupKind::Domain => "domain",
            LookupKind::Entity => "entity",
            LookupKind::Nameserver => "nameserver_handle",
        }
    }

    /// Expected `objectClassName` in the RDAP response.
    pub fn object_class(&self) -> &'static str {
        match self {
            LookupKind::Domain => "domain",
            LookupKind::Entity => "entity",
            LookupKind::Nameserver => "nameserver",
        }
    }
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.object_class())
    }
}

/// Object type of an RDAP search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchKind {
    Domains,
    Nameservers,
    Entities,
}

impl SearchKind {
    /// Path segment under the RDAP base URL.
    pub fn path(&self) -> &'static str {
        match self {
            SearchKind::Domains => "domains",
            SearchKind::Nameservers => "nameservers",
            SearchKind::Entities => "entities",
        }
    }

    /// Member of the response object holding the result array.
    pub fn results_member(&self) -> &'static str {
        match self {
            SearchKind::Domains => "domainSearchResults",
            SearchKind::Nameservers => "nameserverSearchResults",
            SearchKind::Entities => "entitySearchResults",
        }
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Primary key of a search: which query parameter carries the pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchFilter {
    /// `name` (domains, nameservers)
    Name(String),
    /// `registrant` (domains)
    Registrant(String),
    /// `identity` (domains, entities)
    Identity(String),
    /// `nsIp` (domains)
    NsIp(String),
    /// `nsLdhName` (domains)
    NsLdhName(String),
    /// `ip` (nameservers)
    Ip(String),
    /// `fn` (entities)
    Fn(String),
}

impl SearchFilter {
    /// Build a filter from its query parameter name.
    pub fn from_param(param: &str, value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        match param {
            "name" => Some(Self::Name(value)),
            "registrant" => Some(Self::Registrant(value)),
            "identity" => Some(Self::Identity(value)),
            "nsIp" => Some(Self::NsIp(value)),
            "nsLdhName" => Some(Self::NsLdhName(value)),
            "ip" => Some(Self::Ip(value)),
            "fn" => Some(Self::Fn(value)),
            _ => None,
        }
    }

    /// Query parameter name.
    pub fn param(&self) -> &'static str {
        match self {
            Self::Name(_) => "name",
            Self::Registrant(_) => "registrant",
            Self::Identity(_) => "identity",
            Self::NsIp(_) => "nsIp",
            Self::NsLdhName(_) => "nsLdhName",
            Self::Ip(_) => "ip",
            Self::Fn(_) => "fn",
        }
    }

    /// The pattern or key being searched for.
    pub fn value(&self) -> &str {
        match self {
            Self::Name(v)
            | Self::Registrant(v)
            | Self::Identity(v)
            | Self::NsIp(v)
            | Self::NsLdhName(v)
            | Self::Ip(v)
            | Self::Fn(v) => v,
        }
    }

    /// Name filters (`fn`, `registrant`) take free text such as
    /// `Norid AS`; the rest take a single token.
    pub fn is_free_text(&self) -> bool {
        matches!(self, Self::Fn(_) | Self::Registrant(_))
    }

    /// Whether this filter is accepted by the given search endpoint.
    pub fn allowed_for(&self, kind: SearchKind) -> bool {
        match kind {
            SearchKind::Domains => matches!(
                self,
                Self::Name(_)
                    | Self::Registrant(_)
                    | Self::Identity(_)
                    | Self::NsIp(_)
                    | Self::NsLdhName(_)
            ),
            SearchKind::Nameservers => matches!(self, Self::Name(_) | Self::Ip(_)),
            SearchKind::Entities => matches!(self, Self::Fn(_) | Self::Identity(_)),
        }
    }
}

/// Sort direction of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Sort key for a search, rendered as `property` or `property:d`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    pub property: String,
    pub direction: SortDirection,
}

impl SortKey {
    /// Ascending sort on `property`.
    pub fn ascending<S: Into<String>>(property: S) -> Self {
        Self {
            property: property.into(),
            direction: SortDirection::Ascending,
        }
    }

    /// Descending sort on `property`.
    pub fn descending<S: Into<String>>(property: S) -> Self {
        Self {
            property: property.into(),
            direction: SortDirection::Descending,
        }
    }

    /// Parse the wire form (`name`, `name:a`, `name:d`).
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        if let Some(property) = input.strip_suffix(":d") {
            Self::descending(property)
        } else if let Some(property) = input.strip_suffix(":a") {
            Self::ascending(property)
        } else {
            Self::ascending(input)
        }
    }

    /// Value of the `sort` query parameter.
    pub fn to_param(&self) -> String {
        match self.direction {
            SortDirection::Ascending => self.property.clone(),
            SortDirection::Descending => format!("{}:d", self.property),
        }
    }
}

/// Partial response selection for searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldSet {
    /// Complete objects
    Full,
    /// Identifiers only
    Id,
}

impl FieldSet {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldSet::Full => "full",
            FieldSet::Id => "id",
        }
    }
}

impl std::str::FromStr for FieldSet {
    type Err = crate::NoridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" => Ok(FieldSet::Full),
            "id" => Ok(FieldSet::Id),
            other => Err(crate::NoridError::invalid_input(
                other,
                "field set must be 'full' or 'id'",
            )),
        }
    }
}

/// Parameters of one RDAP search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub filter: SearchFilter,
    pub sort: Option<SortKey>,
    pub field_set: Option<FieldSet>,
    /// Ask the server for `totalCount`
    pub count: bool,
    /// Opaque continuation token from a previous [`SearchResult::next_cursor`]
    pub cursor: Option<String>,
}

impl SearchParams {
    pub fn new(filter: SearchFilter) -> Self {
        Self {
            filter,
            sort: None,
            field_set: None,
            count: false,
            cursor: None,
        }
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn with_field_set(mut self, field_set: FieldSet) -> Self {
        self.field_set = Some(field_set);
        self
    }

    pub fn with_count(mut self, count: bool) -> Self {
        self.count = count;
        self
    }

    /// Continue a previous search. The token is sent exactly as given.
    pub fn with_cursor<S: Into<String>>(mut self, cursor: S) -> Self {
        self.cursor = Some(cursor.into());
        self
    }
}

/// What a [`LookupRequest`] asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestKind {
    Domain,
    Entity,
    Nameserver,
    NameserverSearch,
    DomainSearch,
    EntitySearch,
}

impl RequestKind {
    /// Direct lookup kind, if this is not a search.
    pub fn lookup_kind(&self) -> Option<LookupKind> {
        match self {
            RequestKind::Domain => Some(LookupKind::Domain),
            RequestKind::Entity => Some(LookupKind::Entity),
            RequestKind::Nameserver => Some(LookupKind::Nameserver),
            _ => None,
        }
    }

    /// Search kind, if this is a search.
    pub fn search_kind(&self) -> Option<SearchKind> {
        match self {
            RequestKind::DomainSearch => Some(SearchKind::Domains),
            RequestKind::NameserverSearch => Some(SearchKind::Nameservers),
            RequestKind::EntitySearch => Some(SearchKind::Entities),
            _ => None,
        }
    }
}

/// Options attached to a [`LookupRequest`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupOptions {
    /// Render as JSON (presentation only)
    pub json_view: bool,
    pub sort_key: Option<String>,
    pub sort_dir: SortDirection,
    pub field_set: Option<FieldSet>,
    /// HEAD existence check instead of a GET
    pub use_head: bool,
    /// Request `totalCount` (searches)
    pub count: bool,
    /// Continuation token (searches)
    pub cursor: Option<String>,
    /// Search parameter carrying the pattern; defaults per search kind
    pub filter: Option<String>,
}

/// One user-level lookup, validated before dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub kind: RequestKind,
    pub key_or_pattern: String,
    pub options: LookupOptions,
}

impl LookupRequest {
    pub fn new<S: Into<String>>(kind: RequestKind, key_or_pattern: S) -> Self {
        Self {
            kind,
            key_or_pattern: key_or_pattern.into(),
            options: LookupOptions::default(),
        }
    }

    pub fn with_options(mut self, options: LookupOptions) -> Self {
        self.options = options;
        self
    }
}

/// Why a direct lookup found nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotFoundReason {
    Unregistered,
    PermanentlyUnavailable,
    TemporarilyUnavailable,
}

impl fmt::Display for NotFoundReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotFoundReason::Unregistered => write!(f, "not registered"),
            NotFoundReason::PermanentlyUnavailable => write!(f, "permanently unavailable"),
            NotFoundReason::TemporarilyUnavailable => write!(f, "temporarily unavailable"),
        }
    }
}

/// Outcome of a direct lookup: exactly one of found, not found or error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum LookupResult<T> {
    Found(T),
    NotFound { reason: NotFoundReason },
    Error { status: u16, message: String },
}

impl<T> LookupResult<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, LookupResult::Found(_))
    }

    /// The payload, if found.
    pub fn found(&self) -> Option<&T> {
        match self {
            LookupResult::Found(value) => Some(value),
            _ => None,
        }
    }

    /// Convert the payload, keeping the other variants.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> LookupResult<U> {
        match self {
            LookupResult::Found(value) => LookupResult::Found(f(value)),
            LookupResult::NotFound { reason } => LookupResult::NotFound { reason },
            LookupResult::Error { status, message } => LookupResult::Error { status, message },
        }
    }
}

/// A registered domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DomainRecord {
    /// LDH (ASCII) name, e.g. "norid.no"
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,

    /// Unicode form for internationalized names
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unicode_name: Option<String>,

    pub status: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub registered_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_changed_date: Option<String>,

    /// Name server host names in response order
    pub nameservers: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub registrar_handle: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub registrar_name: Option<String>,
}

/// Kind of contact object, from the vCard `kind` or the handle suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Role,
    Person,
    Org,
}

/// A contact, organisation or registrar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityRecord {
    pub handle: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<EntityKind>,

    /// RDAP roles (registrar, registrant, technical...)
    pub roles: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub registered_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_changed_date: Option<String>,
}

/// A name server object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NameserverRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,

    pub hostname: String,

    pub ipv4: Vec<String>,

    pub ipv6: Vec<String>,

    pub status: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub registered_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_changed_date: Option<String>,
}

/// Payload of a successful direct lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "object", rename_all = "snake_case")]
pub enum Record {
    Domain(DomainRecord),
    Entity(EntityRecord),
    Nameserver(NameserverRecord),
}

/// One entry of a search result.
pub type SearchItem = Record;

/// Result page of an RDAP search.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchResult {
    /// Items in server order
    pub items: Vec<SearchItem>,

    /// `totalCount`, when requested and reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u64>,

    /// Opaque token for the next page, exactly as the server sent it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}

/// What [`crate::NoridClient::execute`] produced for a request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum LookupOutcome {
    Record(LookupResult<Record>),
    Exists(bool),
    Search(SearchResult),
}
