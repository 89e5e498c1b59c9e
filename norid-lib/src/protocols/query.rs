//! RDAP URL construction and request validation.
//!
//! Builds lookup, search and count URLs, enforces which filters and sort keys
//! each search endpoint accepts, and pulls the continuation cursor out of a
//! `next` link. All checks here happen before any I/O.

use crate::error::NoridError;
use crate::types::{
    LookupKind, LookupRequest, SearchFilter, SearchKind, SearchParams, SortKey,
};
use crate::utils::{
    validate_domain, validate_handle, validate_search_pattern, validate_search_text,
    validate_sort_syntax,
};
use url::form_urlencoded::byte_serialize;
use url::Url;

/// Sort properties every search endpoint accepts.
const COMMON_SORT_PROPERTIES: &[&str] = &["registrationDate", "lastChangedDate"];

const DOMAIN_SORT_PROPERTIES: &[&str] = &["name", "expirationDate"];

const NAMESERVER_SORT_PROPERTIES: &[&str] = &["name", "ipV4", "ipV6"];

const ENTITY_SORT_PROPERTIES: &[&str] = &[
    "handle", "fn", "org", "email", "voice", "country", "cc", "city",
];

/// Sort properties accepted for a search kind (RFC 8977 names).
pub fn legal_sort_properties(kind: SearchKind) -> Vec<&'static str> {
    let specific = match kind {
        SearchKind::Domains => DOMAIN_SORT_PROPERTIES,
        SearchKind::Nameservers => NAMESERVER_SORT_PROPERTIES,
        SearchKind::Entities => ENTITY_SORT_PROPERTIES,
    };
    specific
        .iter()
        .chain(COMMON_SORT_PROPERTIES.iter())
        .copied()
        .collect()
}

/// Reject a sort key that the search endpoint does not support.
pub fn validate_sort_key(kind: SearchKind, sort: &SortKey) -> Result<(), NoridError> {
    validate_sort_syntax(&sort.property)?;

    let legal = legal_sort_properties(kind);
    if legal.contains(&sort.property.as_str()) {
        Ok(())
    } else {
        Err(NoridError::invalid_input(
            sort.to_param(),
            format!(
                "sort key not supported for {} search (allowed: {})",
                kind,
                legal.join(", ")
            ),
        ))
    }
}

/// Validate a complete set of search parameters for `kind`.
pub fn validate_search(kind: SearchKind, params: &SearchParams) -> Result<(), NoridError> {
    if !params.filter.allowed_for(kind) {
        return Err(NoridError::invalid_input(
            params.filter.param(),
            format!("'{}' is not a search filter for {}", params.filter.param(), kind),
        ));
    }

    if params.filter.is_free_text() {
        validate_search_text(params.filter.value())?;
    } else {
        validate_search_pattern(params.filter.value())?;
    }

    if let Some(sort) = &params.sort {
        validate_sort_key(kind, sort)?;
    }

    if let Some(cursor) = &params.cursor {
        if cursor.is_empty() {
            return Err(NoridError::invalid_input(cursor, "Cursor cannot be empty"));
        }
    }

    Ok(())
}

/// Validate the key of a direct lookup.
pub fn validate_lookup_key(kind: LookupKind, key: &str) -> Result<(), NoridError> {
    match kind {
        LookupKind::Domain => validate_domain(key),
        LookupKind::Entity | LookupKind::Nameserver => validate_handle(key),
    }
}

/// `{base}/{type_path}/{key}`
pub fn lookup_url(base: &Url, kind: LookupKind, key: &str) -> Result<Url, NoridError> {
    with_segments(base, &[kind.path(), key.trim()])
}

/// `{base}/norid_domain_count/{identity}`
pub fn count_url(base: &Url, identity: &str) -> Result<Url, NoridError> {
    with_segments(base, &["norid_domain_count", identity.trim()])
}

/// `{base}/{domains|nameservers|entities}?...`
///
/// Parameter order is fixed: filter, `sort`, `fieldSet`, `count`, `cursor`.
/// User-supplied values are form-encoded; the cursor is appended as-is so a
/// token taken from a `next` link goes back out byte for byte.
pub fn search_url(base: &Url, kind: SearchKind, params: &SearchParams) -> Result<Url, NoridError> {
    let mut url = with_segments(base, &[kind.path()])?;

    let mut pairs = vec![format!(
        "{}={}",
        params.filter.param(),
        encode(params.filter.value())
    )];
    if let Some(sort) = &params.sort {
        pairs.push(format!("sort={}", sort.to_param()));
    }
    if let Some(field_set) = params.field_set {
        pairs.push(format!("fieldSet={}", field_set.as_str()));
    }
    if params.count {
        pairs.push("count=true".to_string());
    }
    if let Some(cursor) = &params.cursor {
        pairs.push(format!("cursor={}", cursor));
    }

    url.set_query(Some(&pairs.join("&")));
    Ok(url)
}

/// Raw value of the `cursor` parameter in a paging link, still encoded.
pub fn extract_cursor(href: &str) -> Option<String> {
    let (_, query) = href.split_once('?')?;
    let query = query.split('#').next().unwrap_or(query);

    query
        .split('&')
        .find_map(|pair| pair.strip_prefix("cursor="))
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

impl LookupRequest {
    /// Check the request against its kind before anything is sent.
    pub fn validate(&self) -> Result<(), NoridError> {
        let options = &self.options;

        if let Some(kind) = self.kind.lookup_kind() {
            if options.sort_key.is_some()
                || options.field_set.is_some()
                || options.cursor.is_some()
                || options.count
                || options.filter.is_some()
            {
                return Err(NoridError::invalid_input(
                    &self.key_or_pattern,
                    "sort, field set, count, cursor and filter only apply to searches",
                ));
            }
            return validate_lookup_key(kind, &self.key_or_pattern);
        }

        if options.use_head {
            return Err(NoridError::invalid_input(
                &self.key_or_pattern,
                "existence checks (HEAD) only apply to direct lookups",
            ));
        }

        let (kind, params) = self.search_params()?;
        validate_search(kind, &params)
    }

    /// Translate a search request into endpoint parameters.
    pub fn search_params(&self) -> Result<(SearchKind, SearchParams), NoridError> {
        let kind = self.kind.search_kind().ok_or_else(|| {
            NoridError::invalid_input(&self.key_or_pattern, "not a search request")
        })?;
        let options = &self.options;

        let param = options.filter.as_deref().unwrap_or(match kind {
            SearchKind::Domains | SearchKind::Nameservers => "name",
            SearchKind::Entities => "fn",
        });
        let filter = SearchFilter::from_param(param, self.key_or_pattern.trim()).ok_or_else(|| {
            NoridError::invalid_input(param, "unknown search filter")
        })?;

        let mut params = SearchParams::new(filter).with_count(options.count);
        if let Some(sort) = &options.sort_key {
            let mut key = SortKey::parse(sort);
            if options.sort_dir == crate::types::SortDirection::Descending {
                key.direction = crate::types::SortDirection::Descending;
            }
            params = params.with_sort(key);
        }
        if let Some(field_set) = options.field_set {
            params = params.with_field_set(field_set);
        }
        if let Some(cursor) = &options.cursor {
            params = params.with_cursor(cursor.clone());
        }

        Ok((kind, params))
    }
}

fn encode(value: &str) -> String {
    byte_serialize(value.as_bytes()).collect()
}

fn with_segments(base: &Url, segments: &[&str]) -> Result<Url, NoridError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| NoridError::config(format!("RDAP base URL cannot be a base: {}", base)))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FieldSet, LookupOptions, RequestKind, SortDirection};

    fn base() -> Url {
        Url::parse("https://rdap.norid.no").unwrap()
    }

    #[test]
    fn test_lookup_urls() {
        assert_eq!(
            lookup_url(&base(), LookupKind::Domain, "norid.no").unwrap().as_str(),
            "https://rdap.norid.no/domain/norid.no"
        );
        assert_eq!(
            lookup_url(&base(), LookupKind::Nameserver, "X11H-NORID")
                .unwrap()
                .as_str(),
            "https://rdap.norid.no/nameserver_handle/X11H-NORID"
        );
        assert_eq!(
            count_url(&base(), "985821585").unwrap().as_str(),
            "https://rdap.norid.no/norid_domain_count/985821585"
        );
    }

    #[test]
    fn test_lookup_url_keeps_base_path() {
        let base = Url::parse("http://127.0.0.1:9000/rdap/").unwrap();
        assert_eq!(
            lookup_url(&base, LookupKind::Entity, "reg1-NORID").unwrap().as_str(),
            "http://127.0.0.1:9000/rdap/entity/reg1-NORID"
        );
    }

    #[test]
    fn test_search_url_parameter_order() {
        let params = SearchParams::new(SearchFilter::Name("*.nic.no".to_string()))
            .with_sort(SortKey::descending("name"))
            .with_field_set(FieldSet::Id)
            .with_count(true)
            .with_cursor("eyJvZmZzZXQiOjEwfQ%3D%3D");

        let url = search_url(&base(), SearchKind::Nameservers, &params).unwrap();
        assert_eq!(
            url.as_str(),
            "https://rdap.norid.no/nameservers?name=*.nic.no&sort=name:d&fieldSet=id&count=true&cursor=eyJvZmZzZXQiOjEwfQ%3D%3D"
        );
    }

    #[test]
    fn test_search_url_encodes_user_values() {
        let params = SearchParams::new(SearchFilter::Fn("Norid AS&x=1".to_string()));
        let url = search_url(&base(), SearchKind::Entities, &params).unwrap();
        assert_eq!(url.query(), Some("fn=Norid+AS%26x%3D1"));
    }

    #[test]
    fn test_sort_key_legality_per_kind() {
        assert!(validate_sort_key(SearchKind::Domains, &SortKey::ascending("handle")).is_err());
        assert!(validate_sort_key(SearchKind::Entities, &SortKey::ascending("handle")).is_ok());
        assert!(validate_sort_key(SearchKind::Domains, &SortKey::descending("name")).is_ok());
        assert!(
            validate_sort_key(SearchKind::Nameservers, &SortKey::ascending("registrationDate"))
                .is_ok()
        );
        assert!(validate_sort_key(SearchKind::Nameservers, &SortKey::ascending("fn")).is_err());
    }

    #[test]
    fn test_validate_search_rejects_foreign_filter() {
        let params = SearchParams::new(SearchFilter::Ip("192.0.2.1".to_string()));
        assert!(validate_search(SearchKind::Domains, &params).is_err());
        assert!(validate_search(SearchKind::Nameservers, &params).is_ok());
    }

    #[test]
    fn test_name_filters_accept_spaces() {
        let by_name = SearchParams::new(SearchFilter::Fn("Norid AS".to_string()));
        assert!(validate_search(SearchKind::Entities, &by_name).is_ok());

        let by_registrant = SearchParams::new(SearchFilter::Registrant("Ola Nordmann".to_string()));
        assert!(validate_search(SearchKind::Domains, &by_registrant).is_ok());

        let by_domain = SearchParams::new(SearchFilter::Name("two words.no".to_string()));
        assert!(validate_search(SearchKind::Domains, &by_domain).is_err());

        let url = search_url(&base(), SearchKind::Entities, &by_name).unwrap();
        assert_eq!(url.query(), Some("fn=Norid+AS"));
    }

    #[test]
    fn test_extract_cursor() {
        assert_eq!(
            extract_cursor("https://rdap.norid.no/domains?name=*.no&cursor=abc%3D%3D_-x&count=true"),
            Some("abc%3D%3D_-x".to_string())
        );
        assert_eq!(
            extract_cursor("/entities?fn=x&cursor=tok#frag"),
            Some("tok".to_string())
        );
        assert_eq!(extract_cursor("https://rdap.norid.no/domains?name=x"), None);
        assert_eq!(extract_cursor("https://rdap.norid.no/domains?cursor="), None);
        assert_eq!(extract_cursor("https://rdap.norid.no/domains"), None);
    }

    #[test]
    fn test_request_validation() {
        let lookup = LookupRequest::new(RequestKind::Domain, "norid.no");
        assert!(lookup.validate().is_ok());

        let sorted_lookup = LookupRequest::new(RequestKind::Domain, "norid.no").with_options(
            LookupOptions {
                sort_key: Some("name".to_string()),
                ..Default::default()
            },
        );
        assert!(sorted_lookup.validate().is_err());

        let head_search = LookupRequest::new(RequestKind::DomainSearch, "*.no").with_options(
            LookupOptions {
                use_head: true,
                ..Default::default()
            },
        );
        assert!(head_search.validate().is_err());

        let bad_handle = LookupRequest::new(RequestKind::Nameserver, "ns1.norid.no");
        assert!(bad_handle.validate().is_err());
    }

    #[test]
    fn test_request_search_params() {
        let request = LookupRequest::new(RequestKind::EntitySearch, "Norid*").with_options(
            LookupOptions {
                sort_key: Some("handle".to_string()),
                sort_dir: SortDirection::Descending,
                field_set: Some(FieldSet::Full),
                count: true,
                ..Default::default()
            },
        );
        assert!(request.validate().is_ok());

        let (kind, params) = request.search_params().unwrap();
        assert_eq!(kind, SearchKind::Entities);
        assert_eq!(params.filter, SearchFilter::Fn("Norid*".to_string()));
        assert_eq!(params.sort, Some(SortKey::descending("handle")));
        assert!(params.count);

        let domain_sorted_by_handle = LookupRequest::new(RequestKind::DomainSearch, "*.no")
            .with_options(LookupOptions {
                sort_key: Some("handle".to_string()),
                ..Default::default()
            });
        assert!(domain_sorted_by_handle.validate().is_err());
    }
}
