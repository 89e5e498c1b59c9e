//! RDAP (Registration Data Access Protocol) client.
//!
//! Direct lookups (GET), existence checks (HEAD), searches with cursor paging
//! and the registry's domain-count extension. Responses are normalized into
//! the record types of [`crate::types`]; anything else in the RDAP JSON is
//! ignored.

use crate::endpoints::Endpoint;
use crate::error::NoridError;
use crate::protocols::query::{
    count_url, extract_cursor, lookup_url, search_url, validate_lookup_key, validate_search,
};
use crate::types::{
    ClientConfig, DomainRecord, EntityKind, EntityRecord, LookupKind, LookupResult,
    NameserverRecord, NotFoundReason, Record, SearchKind, SearchParams, SearchResult,
};
use crate::utils::validate_search_pattern;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, RETRY_AFTER};
use reqwest::{Response, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Media types sent in the `Accept` header.
pub const RDAP_ACCEPT: &str = "application/rdap+json, application/json";

/// RDAP client bound to one base URL.
///
/// Every call is one HTTP exchange; idle connections are not kept, so nothing
/// is shared between calls.
#[derive(Clone)]
pub struct RdapClient {
    /// HTTP client with the Accept header, User-Agent and timeouts preset
    http_client: reqwest::Client,
    endpoint: Endpoint,
    base_url: Url,
    /// Overall bound for one exchange (reported in timeout errors)
    timeout: Duration,
    max_response_bytes: usize,
}

impl RdapClient {
    /// Create a client for `endpoint`.
    ///
    /// # Errors
    ///
    /// `ConfigError` if the endpoint has no usable base URL or the HTTP client
    /// cannot be built.
    pub fn new(endpoint: Endpoint, config: &ClientConfig) -> Result<Self, NoridError> {
        let base = endpoint
            .base_url
            .as_deref()
            .ok_or_else(|| NoridError::config("RDAP endpoint has no base URL"))?;
        let base_url = Url::parse(base)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(RDAP_ACCEPT));

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| NoridError::config(format!("Failed to create RDAP HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            endpoint,
            base_url,
            timeout: config.timeout,
            max_response_bytes: config.max_response_bytes,
        })
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Look up one object by key.
    ///
    /// * 200 → `Found` with the normalized record
    /// * 404 → `NotFound`, reason taken from the body wording
    /// * 429 → `Err(RateLimited)`, never retried
    /// * anything else → `LookupResult::Error`
    pub async fn lookup(
        &self,
        kind: LookupKind,
        key: &str,
    ) -> Result<LookupResult<Record>, NoridError> {
        let result = self.fetch_object(kind, key).await?;
        Ok(result.map(|json| match kind {
            LookupKind::Domain => Record::Domain(extract_domain_record(&json)),
            LookupKind::Entity => Record::Entity(extract_entity_record(&json)),
            LookupKind::Nameserver => Record::Nameserver(extract_nameserver_record(&json)),
        }))
    }

    /// Look up a domain by name.
    pub async fn domain(&self, name: &str) -> Result<LookupResult<DomainRecord>, NoridError> {
        let result = self.fetch_object(LookupKind::Domain, name).await?;
        Ok(result.map(|json| extract_domain_record(&json)))
    }

    /// Look up a contact, organisation or registrar by handle.
    pub async fn entity(&self, handle: &str) -> Result<LookupResult<EntityRecord>, NoridError> {
        let result = self.fetch_object(LookupKind::Entity, handle).await?;
        Ok(result.map(|json| extract_entity_record(&json)))
    }

    /// Look up a name server by handle. Host names are not unique in the
    /// registry; use [`search`](Self::search) to find servers by name.
    pub async fn nameserver(
        &self,
        handle: &str,
    ) -> Result<LookupResult<NameserverRecord>, NoridError> {
        let result = self.fetch_object(LookupKind::Nameserver, handle).await?;
        Ok(result.map(|json| extract_nameserver_record(&json)))
    }

    /// HEAD check: `true` only for status 200. No body is read.
    ///
    /// # Errors
    ///
    /// Only for invalid keys and transport failures. Every HTTP status,
    /// including 429, maps to a boolean.
    pub async fn exists(&self, kind: LookupKind, key: &str) -> Result<bool, NoridError> {
        let (url, response) = self.head(kind, key).await?;
        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            warn!(url = %url, "RDAP server rate limited an existence check");
        }

        Ok(status == StatusCode::OK)
    }

    /// Whether `domain` is registered, by HEAD. Unlike
    /// [`exists`](Self::exists) only the two definite answers map to a
    /// boolean: 200 is registered, 404 is not.
    ///
    /// # Errors
    ///
    /// `RateLimited` on 429 and `RdapError` for any other status, so a
    /// server failure is never read as "available".
    pub async fn registered(&self, domain: &str) -> Result<bool, NoridError> {
        let (url, response) = self.head(LookupKind::Domain, domain).await?;
        match response.status() {
            StatusCode::OK => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            StatusCode::TOO_MANY_REQUESTS => Err(self.rate_limited(&url, &response)),
            code => Err(NoridError::rdap_with_status(
                domain.trim(),
                error_message(code, ""),
                code.as_u16(),
            )),
        }
    }

    /// Run a search. Filter, sort key and cursor are validated before the
    /// request is sent.
    ///
    /// A 404 means no matches and yields an empty result.
    pub async fn search(
        &self,
        kind: SearchKind,
        params: &SearchParams,
    ) -> Result<SearchResult, NoridError> {
        validate_search(kind, params)?;
        let url = search_url(&self.base_url, kind, params)?;

        let response = self.get(&url).await?;
        let status = response.status();

        match status {
            StatusCode::OK => {
                let body = self.read_body(&url, response).await?;
                let json = parse_json_object(&self.endpoint_name(), &body)?;
                Ok(parse_search_response(kind, &json))
            }
            StatusCode::NOT_FOUND => Ok(SearchResult::default()),
            StatusCode::TOO_MANY_REQUESTS => Err(self.rate_limited(&url, &response)),
            code => {
                let body = self.read_body(&url, response).await.unwrap_or_default();
                Err(NoridError::rdap_with_status(
                    url.as_str(),
                    error_message(code, &body),
                    code.as_u16(),
                ))
            }
        }
    }

    /// Number of domains held by an identity (organisation number or
    /// similar), via the registry's `norid_domain_count` extension.
    pub async fn domain_count(&self, identity: &str) -> Result<u64, NoridError> {
        validate_search_pattern(identity)?;
        let url = count_url(&self.base_url, identity)?;

        let response = self.get(&url).await?;
        match response.status() {
            StatusCode::OK => {
                let body = self.read_body(&url, response).await?;
                let json: Value = serde_json::from_str(&body).map_err(|e| {
                    NoridError::protocol_with_content(
                        self.endpoint_name(),
                        format!("domain count is not JSON: {}", e),
                        &body,
                    )
                })?;
                parse_domain_count(&json).ok_or_else(|| {
                    NoridError::protocol_with_content(
                        self.endpoint_name(),
                        "domain count response has no integer count",
                        &body,
                    )
                })
            }
            StatusCode::NOT_FOUND => Ok(0),
            StatusCode::TOO_MANY_REQUESTS => Err(self.rate_limited(&url, &response)),
            code => {
                let body = self.read_body(&url, response).await.unwrap_or_default();
                Err(NoridError::rdap_with_status(
                    identity,
                    error_message(code, &body),
                    code.as_u16(),
                ))
            }
        }
    }

    /// GET an object and check its class; the JSON is left for the caller
    /// to normalize.
    async fn fetch_object(
        &self,
        kind: LookupKind,
        key: &str,
    ) -> Result<LookupResult<Value>, NoridError> {
        validate_lookup_key(kind, key)?;
        let url = lookup_url(&self.base_url, kind, key)?;

        let response = self.get(&url).await?;
        let status = response.status();

        match status {
            StatusCode::OK => {
                let body = self.read_body(&url, response).await?;
                let json = parse_json_object(&self.endpoint_name(), &body)?;
                check_object_class(&self.endpoint_name(), kind, &json)?;
                Ok(LookupResult::Found(json))
            }
            StatusCode::NOT_FOUND => {
                let body = self.read_body(&url, response).await?;
                let reason = classify_not_found(&body);
                debug!(url = %url, %reason, "RDAP object not found");
                Ok(LookupResult::NotFound { reason })
            }
            StatusCode::TOO_MANY_REQUESTS => Err(self.rate_limited(&url, &response)),
            code => {
                let body = self.read_body(&url, response).await?;
                Ok(LookupResult::Error {
                    status: code.as_u16(),
                    message: error_message(code, &body),
                })
            }
        }
    }

    async fn head(&self, kind: LookupKind, key: &str) -> Result<(Url, Response), NoridError> {
        validate_lookup_key(kind, key)?;
        let url = lookup_url(&self.base_url, kind, key)?;

        debug!(url = %url, "RDAP HEAD");
        let response = self
            .http_client
            .head(url.clone())
            .send()
            .await
            .map_err(|e| self.transport_error(&url, "HEAD", e))?;
        debug!(url = %url, status = response.status().as_u16(), "RDAP HEAD response");
        Ok((url, response))
    }

    async fn get(&self, url: &Url) -> Result<Response, NoridError> {
        debug!(url = %url, "RDAP GET");
        let response = self
            .http_client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| self.transport_error(url, "GET", e))?;
        debug!(url = %url, status = response.status().as_u16(), "RDAP response");
        Ok(response)
    }

    /// Read the body, failing with `ProtocolError` once it passes
    /// `max_response_bytes`.
    async fn read_body(&self, url: &Url, mut response: Response) -> Result<String, NoridError> {
        let limit = self.max_response_bytes;
        if response.content_length().is_some_and(|len| len > limit as u64) {
            return Err(self.body_too_large(url));
        }

        let mut body = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| self.transport_error(url, "read body", e))?
        {
            if body.len() + chunk.len() > limit {
                return Err(self.body_too_large(url));
            }
            body.extend_from_slice(&chunk);
        }

        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    fn body_too_large(&self, url: &Url) -> NoridError {
        warn!(url = %url, limit = self.max_response_bytes, "RDAP response too large");
        NoridError::protocol(
            self.endpoint_name(),
            format!("response exceeds {} bytes", self.max_response_bytes),
        )
    }

    fn transport_error(&self, url: &Url, operation: &str, err: reqwest::Error) -> NoridError {
        if err.is_timeout() {
            NoridError::timeout(url.as_str(), operation, self.timeout)
        } else {
            NoridError::network(url.as_str(), operation, err.to_string())
        }
    }

    fn rate_limited(&self, url: &Url, response: &Response) -> NoridError {
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<u64>().ok())
            .map(Duration::from_secs);

        warn!(url = %url, ?retry_after, "RDAP server rate limited the request");
        NoridError::rate_limited(self.endpoint_name(), "Too Many Requests", retry_after)
    }

    fn endpoint_name(&self) -> String {
        self.endpoint.host.clone()
    }
}

/// Why a 404 happened, from the body wording alone.
///
/// Exact, case-sensitive substring checks: `permanently` wins over
/// `currently`, and anything else means the object is simply not registered.
pub fn classify_not_found(body: &str) -> NotFoundReason {
    if body.contains("permanently") {
        NotFoundReason::PermanentlyUnavailable
    } else if body.contains("currently") {
        NotFoundReason::TemporarilyUnavailable
    } else {
        NotFoundReason::Unregistered
    }
}

/// Human-readable message for an unexpected status.
///
/// Prefers the `title`/`description` of an RDAP error object, then the body
/// text, then the status reason phrase.
pub fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<Value>(body) {
        let title = json.get("title").and_then(|t| t.as_str());
        let description = json
            .get("description")
            .and_then(|d| d.as_array())
            .map(|lines| {
                lines
                    .iter()
                    .filter_map(|l| l.as_str())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .filter(|d| !d.is_empty());

        match (title, description) {
            (Some(title), Some(description)) => return format!("{}: {}", title, description),
            (Some(title), None) => return title.to_string(),
            (None, Some(description)) => return description,
            (None, None) => {}
        }
    }

    let text = body.trim();
    if !text.is_empty() {
        return text.chars().take(200).collect();
    }

    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
}

fn parse_json_object(endpoint: &str, body: &str) -> Result<Value, NoridError> {
    let json: Value = serde_json::from_str(body).map_err(|e| {
        NoridError::protocol_with_content(endpoint, format!("response is not JSON: {}", e), body)
    })?;

    if json.is_object() {
        Ok(json)
    } else {
        Err(NoridError::protocol_with_content(
            endpoint,
            "response is not a JSON object",
            body,
        ))
    }
}

fn check_object_class(endpoint: &str, kind: LookupKind, json: &Value) -> Result<(), NoridError> {
    match json.get("objectClassName").and_then(|c| c.as_str()) {
        Some(class) if class != kind.object_class() => Err(NoridError::protocol(
            endpoint,
            format!(
                "expected a {} object, got objectClassName '{}'",
                kind.object_class(),
                class
            ),
        )),
        _ => Ok(()),
    }
}

/// Normalize a search response envelope.
pub fn parse_search_response(kind: SearchKind, json: &Value) -> SearchResult {
    let items = json
        .get(kind.results_member())
        .and_then(|r| r.as_array())
        .map(|results| {
            results
                .iter()
                .map(|item| match kind {
                    SearchKind::Domains => Record::Domain(extract_domain_record(item)),
                    SearchKind::Nameservers => {
                        Record::Nameserver(extract_nameserver_record(item))
                    }
                    SearchKind::Entities => Record::Entity(extract_entity_record(item)),
                })
                .collect()
        })
        .unwrap_or_default();

    let paging = json.get("paging_metadata");

    let total_count = paging
        .and_then(|p| p.get("totalCount"))
        .and_then(|c| c.as_u64())
        .or_else(|| json.get("totalCount").and_then(|c| c.as_u64()));

    let next_cursor = paging
        .and_then(|p| p.get("links"))
        .and_then(|l| l.as_array())
        .and_then(|links| {
            links
                .iter()
                .find(|link| link.get("rel").and_then(|r| r.as_str()) == Some("next"))
        })
        .and_then(|link| link.get("href"))
        .and_then(|h| h.as_str())
        .and_then(extract_cursor);

    SearchResult {
        items,
        total_count,
        next_cursor,
    }
}

/// Count from a bare integer or an object with `domainCount` / `count`.
fn parse_domain_count(json: &Value) -> Option<u64> {
    if let Some(count) = json.as_u64() {
        return Some(count);
    }

    json.get("domainCount")
        .or_else(|| json.get("count"))
        .and_then(|c| c.as_u64())
}

/// Extract a domain record from an RDAP domain object.
pub fn extract_domain_record(json: &Value) -> DomainRecord {
    let mut record = DomainRecord {
        name: string_field(json, "ldhName")
            .or_else(|| string_field(json, "unicodeName"))
            .unwrap_or_default(),
        handle: string_field(json, "handle"),
        unicode_name: string_field(json, "unicodeName"),
        status: string_list(json, "status"),
        ..Default::default()
    };

    let (registered, changed) = extract_event_dates(json);
    record.registered_date = registered;
    record.last_changed_date = changed;

    if let Some(nameservers) = json.get("nameservers").and_then(|ns| ns.as_array()) {
        for nameserver in nameservers {
            if let Some(name) = string_field(nameserver, "ldhName")
                .or_else(|| string_field(nameserver, "unicodeName"))
            {
                record.nameservers.push(name);
            }
        }
    }

    if let Some(registrar) = find_entity_with_role(json, "registrar") {
        record.registrar_handle = string_field(registrar, "handle");
        record.registrar_name = vcard_text(registrar, "fn");
    }

    record
}

/// Extract an entity record from an RDAP entity object.
pub fn extract_entity_record(json: &Value) -> EntityRecord {
    let handle = string_field(json, "handle").unwrap_or_default();
    let kind = vcard_text(json, "kind")
        .and_then(|k| entity_kind_from_vcard(&k))
        .or_else(|| entity_kind_from_handle(&handle));
    let (registered_date, last_changed_date) = extract_event_dates(json);

    EntityRecord {
        kind,
        roles: string_list(json, "roles"),
        name: vcard_text(json, "fn"),
        organization: vcard_text(json, "org"),
        address: vcard_address(json),
        phone: vcard_text(json, "tel")
            .map(|tel| tel.strip_prefix("tel:").map(str::to_string).unwrap_or(tel)),
        email: vcard_text(json, "email"),
        registered_date,
        last_changed_date,
        handle,
    }
}

/// Extract a name server record from an RDAP nameserver object.
pub fn extract_nameserver_record(json: &Value) -> NameserverRecord {
    let addresses = json.get("ipAddresses");
    let (registered_date, last_changed_date) = extract_event_dates(json);

    NameserverRecord {
        handle: string_field(json, "handle"),
        hostname: string_field(json, "ldhName")
            .or_else(|| string_field(json, "unicodeName"))
            .unwrap_or_default(),
        ipv4: addresses.map(|a| string_list(a, "v4")).unwrap_or_default(),
        ipv6: addresses.map(|a| string_list(a, "v6")).unwrap_or_default(),
        status: string_list(json, "status"),
        registered_date,
        last_changed_date,
    }
}

fn string_field(json: &Value, key: &str) -> Option<String> {
    json.get(key)
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .map(String::from)
}

fn string_list(json: &Value, key: &str) -> Vec<String> {
    json.get(key)
        .and_then(|v| v.as_array())
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

/// `(registration, last changed)` event dates.
fn extract_event_dates(json: &Value) -> (Option<String>, Option<String>) {
    let mut registered = None;
    let mut changed = None;

    if let Some(events) = json.get("events").and_then(|e| e.as_array()) {
        for event in events {
            if let (Some(action), Some(date)) = (
                event.get("eventAction").and_then(|a| a.as_str()),
                event.get("eventDate").and_then(|d| d.as_str()),
            ) {
                match action {
                    "registration" => registered = Some(date.to_string()),
                    "last changed" => changed = Some(date.to_string()),
                    _ => {}
                }
            }
        }
    }

    (registered, changed)
}

fn find_entity_with_role<'a>(json: &'a Value, role: &str) -> Option<&'a Value> {
    json.get("entities")?.as_array()?.iter().find(|entity| {
        entity
            .get("roles")
            .and_then(|r| r.as_array())
            .map(|roles| roles.iter().any(|r| r.as_str() == Some(role)))
            .unwrap_or(false)
    })
}

/// Properties of a jCard: `["vcard", [[name, params, type, value...], ...]]`.
fn vcard_properties(entity: &Value) -> impl Iterator<Item = &Vec<Value>> {
    entity
        .get("vcardArray")
        .and_then(|v| v.as_array())
        .and_then(|a| a.get(1))
        .and_then(|a| a.as_array())
        .into_iter()
        .flatten()
        .filter_map(|item| item.as_array())
        .filter(|item| item.len() >= 4)
}

fn vcard_text(entity: &Value, name: &str) -> Option<String> {
    vcard_properties(entity)
        .find(|item| item.first().and_then(|f| f.as_str()) == Some(name))
        .and_then(|item| item.get(3))
        .and_then(|value| value.as_str())
        .filter(|value| !value.is_empty())
        .map(String::from)
}

/// Postal address, from the `label` parameter or the structured value.
fn vcard_address(entity: &Value) -> Option<String> {
    let adr = vcard_properties(entity)
        .find(|item| item.first().and_then(|f| f.as_str()) == Some("adr"))?;

    if let Some(label) = adr
        .get(1)
        .and_then(|params| params.get("label"))
        .and_then(|l| l.as_str())
        .filter(|l| !l.trim().is_empty())
    {
        return Some(label.replace('\n', ", "));
    }

    let mut parts = Vec::new();
    collect_strings(adr.get(3)?, &mut parts);
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

fn collect_strings(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::String(s) if !s.trim().is_empty() => out.push(s.trim().to_string()),
        Value::Array(items) => items.iter().for_each(|item| collect_strings(item, out)),
        _ => {}
    }
}

fn entity_kind_from_vcard(kind: &str) -> Option<EntityKind> {
    match kind {
        "individual" => Some(EntityKind::Person),
        "org" => Some(EntityKind::Org),
        "group" => Some(EntityKind::Role),
        _ => None,
    }
}

/// Registry handles end in `P-NORID`, `O-NORID` or `R-NORID` by type.
fn entity_kind_from_handle(handle: &str) -> Option<EntityKind> {
    let upper = handle.to_ascii_uppercase();
    if upper.ends_with("P-NORID") {
        Some(EntityKind::Person)
    } else if upper.ends_with("O-NORID") {
        Some(EntityKind::Org)
    } else if upper.ends_with("R-NORID") {
        Some(EntityKind::Role)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints::{resolve_endpoints, Environment};
    use serde_json::json;

    #[test]
    fn test_rdap_client_creation() {
        let endpoints = resolve_endpoints(Environment::Test);
        let client = RdapClient::new(endpoints.rdap, &ClientConfig::default()).unwrap();
        assert_eq!(client.base_url().as_str(), "https://rdap.test.norid.no/");
        assert_eq!(client.endpoint().host, "rdap.test.norid.no");
    }

    #[test]
    fn test_client_requires_base_url() {
        let endpoints = resolve_endpoints(Environment::Production);
        assert!(RdapClient::new(endpoints.whois, &ClientConfig::default()).is_err());
    }

    #[test]
    fn test_classify_not_found() {
        assert_eq!(
            classify_not_found("Domain is permanently unavailable"),
            NotFoundReason::PermanentlyUnavailable
        );
        assert_eq!(
            classify_not_found("Domain is currently unavailable"),
            NotFoundReason::TemporarilyUnavailable
        );
        assert_eq!(
            classify_not_found("permanently and currently"),
            NotFoundReason::PermanentlyUnavailable
        );
        assert_eq!(classify_not_found(""), NotFoundReason::Unregistered);
        assert_eq!(
            classify_not_found("Domain is not available for registration"),
            NotFoundReason::Unregistered
        );
        // Case-sensitive on purpose
        assert_eq!(
            classify_not_found("Permanently unavailable"),
            NotFoundReason::Unregistered
        );
    }

    #[test]
    fn test_error_message_sources() {
        let rdap_error = r#"{"errorCode":400,"title":"Bad request","description":["Illegal sort"]}"#;
        assert_eq!(
            error_message(StatusCode::BAD_REQUEST, rdap_error),
            "Bad request: Illegal sort"
        );
        assert_eq!(
            error_message(StatusCode::BAD_GATEWAY, "  upstream down \n"),
            "upstream down"
        );
        assert_eq!(
            error_message(StatusCode::SERVICE_UNAVAILABLE, ""),
            "Service Unavailable"
        );
    }

    #[test]
    fn test_extract_domain_record() {
        let json = json!({
            "objectClassName": "domain",
            "handle": "NOR12345D-NORID",
            "ldhName": "norid.no",
            "status": ["active"],
            "events": [
                {"eventAction": "registration", "eventDate": "1999-11-15T00:00:00Z"},
                {"eventAction": "last changed", "eventDate": "2024-01-10T08:30:00Z"}
            ],
            "nameservers": [
                {"objectClassName": "nameserver", "ldhName": "nn.uninett.no"},
                {"objectClassName": "nameserver", "ldhName": "x.nic.no"}
            ],
            "entities": [
                {"handle": "NH55R-NORID", "roles": ["technical"]},
                {
                    "handle": "reg2-NORID",
                    "roles": ["registrar"],
                    "vcardArray": ["vcard", [["version", {}, "text", "4.0"], ["fn", {}, "text", "UNINETT AS"]]]
                }
            ]
        });

        let record = extract_domain_record(&json);
        assert_eq!(record.name, "norid.no");
        assert_eq!(record.handle.as_deref(), Some("NOR12345D-NORID"));
        assert_eq!(record.status, vec!["active"]);
        assert_eq!(record.registered_date.as_deref(), Some("1999-11-15T00:00:00Z"));
        assert_eq!(record.last_changed_date.as_deref(), Some("2024-01-10T08:30:00Z"));
        assert_eq!(record.nameservers, vec!["nn.uninett.no", "x.nic.no"]);
        assert_eq!(record.registrar_handle.as_deref(), Some("reg2-NORID"));
        assert_eq!(record.registrar_name.as_deref(), Some("UNINETT AS"));
    }

    #[test]
    fn test_extract_entity_record() {
        let json = json!({
            "objectClassName": "entity",
            "handle": "NH55R-NORID",
            "roles": ["technical"],
            "vcardArray": ["vcard", [
                ["version", {}, "text", "4.0"],
                ["fn", {}, "text", "Norid Hostmaster"],
                ["org", {}, "text", "Norid AS"],
                ["tel", {"type": "voice"}, "uri", "tel:+47.73557355"],
                ["email", {}, "text", "hostmaster@norid.no"],
                ["adr", {}, "text", ["", "", "Abels gate 5", "Trondheim", "", "7030", "NO"]]
            ]]
        });

        let record = extract_entity_record(&json);
        assert_eq!(record.handle, "NH55R-NORID");
        assert_eq!(record.kind, Some(EntityKind::Role));
        assert_eq!(record.roles, vec!["technical"]);
        assert_eq!(record.name.as_deref(), Some("Norid Hostmaster"));
        assert_eq!(record.organization.as_deref(), Some("Norid AS"));
        assert_eq!(record.phone.as_deref(), Some("+47.73557355"));
        assert_eq!(record.email.as_deref(), Some("hostmaster@norid.no"));
        assert_eq!(
            record.address.as_deref(),
            Some("Abels gate 5, Trondheim, 7030, NO")
        );
    }

    #[test]
    fn test_entity_kind_prefers_vcard_kind() {
        let json = json!({
            "handle": "NOR1O-NORID",
            "vcardArray": ["vcard", [["kind", {}, "text", "individual"]]]
        });
        assert_eq!(extract_entity_record(&json).kind, Some(EntityKind::Person));

        let by_handle = json!({"handle": "UNI1O-NORID"});
        assert_eq!(extract_entity_record(&by_handle).kind, Some(EntityKind::Org));

        let registrar = json!({"handle": "reg1-NORID"});
        assert_eq!(extract_entity_record(&registrar).kind, None);
    }

    #[test]
    fn test_extract_nameserver_record() {
        let json = json!({
            "objectClassName": "nameserver",
            "handle": "X11H-NORID",
            "ldhName": "x.nic.no",
            "ipAddresses": {"v4": ["192.0.2.53"], "v6": ["2001:db8::53"]},
            "status": ["active"]
        });

        let record = extract_nameserver_record(&json);
        assert_eq!(record.handle.as_deref(), Some("X11H-NORID"));
        assert_eq!(record.hostname, "x.nic.no");
        assert_eq!(record.ipv4, vec!["192.0.2.53"]);
        assert_eq!(record.ipv6, vec!["2001:db8::53"]);
    }

    #[test]
    fn test_parse_search_response_with_paging() {
        let json = json!({
            "nameserverSearchResults": [
                {"objectClassName": "nameserver", "handle": "X11H-NORID", "ldhName": "x.nic.no"},
                {"objectClassName": "nameserver", "handle": "Y22H-NORID", "ldhName": "y.nic.no"}
            ],
            "paging_metadata": {
                "totalCount": 73,
                "pageSize": 2,
                "links": [
                    {"rel": "self", "href": "https://rdap.norid.no/nameservers?name=*.nic.no"},
                    {"rel": "next", "href": "https://rdap.norid.no/nameservers?name=*.nic.no&cursor=b2Zmc2V0OjI%3D"}
                ]
            }
        });

        let result = parse_search_response(SearchKind::Nameservers, &json);
        assert_eq!(result.items.len(), 2);
        assert_eq!(result.total_count, Some(73));
        assert_eq!(result.next_cursor.as_deref(), Some("b2Zmc2V0OjI%3D"));
        match &result.items[1] {
            Record::Nameserver(ns) => assert_eq!(ns.hostname, "y.nic.no"),
            other => panic!("unexpected item: {:?}", other),
        }
    }

    #[test]
    fn test_parse_search_response_top_level_count() {
        let json = json!({"domainSearchResults": [], "totalCount": 0});
        let result = parse_search_response(SearchKind::Domains, &json);
        assert!(result.items.is_empty());
        assert_eq!(result.total_count, Some(0));
        assert_eq!(result.next_cursor, None);
    }

    #[test]
    fn test_parse_domain_count() {
        assert_eq!(parse_domain_count(&json!(12)), Some(12));
        assert_eq!(parse_domain_count(&json!({"domainCount": 3})), Some(3));
        assert_eq!(parse_domain_count(&json!({"count": 5})), Some(5));
        assert_eq!(parse_domain_count(&json!({"count": "5"})), None);
        assert_eq!(parse_domain_count(&json!("many")), None);
    }

    #[test]
    fn test_object_class_mismatch() {
        let json = json!({"objectClassName": "entity", "handle": "X11H-NORID"});
        assert!(check_object_class("rdap.norid.no", LookupKind::Nameserver, &json).is_err());
        assert!(check_object_class("rdap.norid.no", LookupKind::Entity, &json).is_ok());
        assert!(check_object_class("rdap.norid.no", LookupKind::Domain, &json!({})).is_ok());
    }
}
