//! Input validation helpers.
//!
//! Every check here runs before a request leaves the process, so malformed
//! input surfaces as [`NoridError::InvalidInput`] instead of a server error.

use crate::error::NoridError;
use regex::Regex;
use std::sync::OnceLock;

/// Norid handles: alphanumerics followed by `-NORID` (e.g. `X11H-NORID`).
const HANDLE_PATTERN: &str = r"(?i)^[a-z0-9]+-norid$";

/// RDAP sort property, optionally with `:a`/`:d`.
const SORT_PATTERN: &str = r"^[A-Za-z][A-Za-z0-9]*(:[ad])?$";

fn compiled(
    cell: &'static OnceLock<Result<Regex, regex::Error>>,
    pattern: &str,
) -> Result<&'static Regex, NoridError> {
    cell.get_or_init(|| Regex::new(pattern))
        .as_ref()
        .map_err(|e| NoridError::config(format!("invalid built-in pattern: {}", e)))
}

/// Validate a domain name.
///
/// Accepts internationalized labels (Unicode letters and digits), since the
/// registry serves IDN names directly.
pub fn validate_domain(domain: &str) -> Result<(), NoridError> {
    let domain = domain.trim();

    if domain.is_empty() {
        return Err(NoridError::invalid_input(domain, "Domain name cannot be empty"));
    }

    if domain.chars().count() > 253 {
        return Err(NoridError::invalid_input(domain, "Domain name is too long"));
    }

    if !is_valid_fqdn(domain) {
        return Err(NoridError::invalid_input(
            domain,
            "Expected a fully qualified name such as 'norid.no'",
        ));
    }

    Ok(())
}

/// Validate a registry handle such as `reg1-NORID` or `X11H-NORID`.
pub fn validate_handle(handle: &str) -> Result<(), NoridError> {
    static PATTERN: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();
    let pattern = compiled(&PATTERN, HANDLE_PATTERN)?;

    if pattern.is_match(handle.trim()) {
        Ok(())
    } else {
        Err(NoridError::invalid_input(
            handle,
            "Expected a handle ending in '-NORID', e.g. 'X11H-NORID'",
        ))
    }
}

/// Validate a search pattern. `*` wildcards are allowed.
pub fn validate_search_pattern(pattern: &str) -> Result<(), NoridError> {
    if pattern.trim().is_empty() {
        return Err(NoridError::invalid_input(pattern, "Search pattern cannot be empty"));
    }

    if pattern.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(NoridError::invalid_input(
            pattern,
            "Search pattern cannot contain whitespace or control characters",
        ));
    }

    Ok(())
}

/// Validate a free-text search value such as a person or company name.
/// Interior spaces are allowed; control characters are not.
pub fn validate_search_text(text: &str) -> Result<(), NoridError> {
    if text.trim().is_empty() {
        return Err(NoridError::invalid_input(text, "Search pattern cannot be empty"));
    }

    if text.chars().any(|c| c.is_control()) {
        return Err(NoridError::invalid_input(
            text,
            "Search pattern cannot contain control characters",
        ));
    }

    Ok(())
}

/// Validate the syntax of a sort key (`name`, `name:d`). Legality for a
/// given object kind is checked by the query builder.
pub fn validate_sort_syntax(sort: &str) -> Result<(), NoridError> {
    static PATTERN: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();
    let pattern = compiled(&PATTERN, SORT_PATTERN)?;

    if pattern.is_match(sort) {
        Ok(())
    } else {
        Err(NoridError::invalid_input(
            sort,
            "Sort key must look like 'name' or 'name:d'",
        ))
    }
}

/// Validate a single line for the whois/DAS protocols: anything printable,
/// but no line breaks that would smuggle a second query.
pub fn validate_query_line(query: &str) -> Result<(), NoridError> {
    if query.trim().is_empty() {
        return Err(NoridError::invalid_input(query, "Query cannot be empty"));
    }

    if query.chars().any(|c| c.is_control()) {
        return Err(NoridError::invalid_input(
            query,
            "Query cannot contain control characters",
        ));
    }

    Ok(())
}

/// Validate that an FQDN has basic valid structure.
fn is_valid_fqdn(domain: &str) -> bool {
    if domain.starts_with('.')
        || domain.ends_with('.')
        || domain.starts_with('-')
        || domain.ends_with('-')
    {
        return false;
    }

    let parts: Vec<&str> = domain.split('.').collect();
    if parts.len() < 2 {
        return false;
    }

    parts.iter().all(|part| is_valid_label(part))
}

fn is_valid_label(label: &str) -> bool {
    if label.is_empty() || label.chars().count() > 63 {
        return false;
    }

    if label.starts_with('-') || label.ends_with('-') {
        return false;
    }

    label.chars().all(|c| c.is_alphanumeric() || c == '-')
}
