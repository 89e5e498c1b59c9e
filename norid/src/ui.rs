//! Human-readable output for the norid CLI.
//!
//! Record cards, search tables and the DAS verdict. Uses only the `console`
//! crate for colors and alignment; JSON output lives in `main.rs`.

use console::{pad_str, style, Alignment};
use norid_lib::{
    DnsAnswer, DomainRecord, EntityKind, EntityRecord, NameserverRecord, NotFoundReason, Record,
    SearchResult,
};
use serde::Serialize;

const RULE_WIDTH: usize = 60;

// ── DAS interpretation ───────────────────────────────────────────────────────

/// Best-effort reading of a DAS answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DasStatus {
    Available,
    Taken,
    Invalid,
    Unknown,
}

impl DasStatus {
    /// Classify the raw DAS text. Order matters: "not available" and
    /// "not registered" must be checked before their shorter forms.
    pub fn classify(response: &str) -> Self {
        let lower = response.to_lowercase();

        if lower.contains("available") && !lower.contains("not available") {
            DasStatus::Available
        } else if lower.contains("not registered") {
            DasStatus::Available
        } else if lower.contains("registered") || lower.contains("delegated") {
            DasStatus::Taken
        } else if lower.contains("invalid") {
            DasStatus::Invalid
        } else {
            DasStatus::Unknown
        }
    }

    /// From a definite RDAP answer (200 or 404), when DAS itself could not
    /// be reached.
    pub fn from_registered(registered: bool) -> Self {
        if registered {
            DasStatus::Taken
        } else {
            DasStatus::Available
        }
    }
}

/// Print the DAS verdict for a domain.
pub fn print_das_result(domain: &str, status: DasStatus, response: &str) {
    let padded_domain = pad_str(domain, 30, Alignment::Left, Some(".."));

    match status {
        DasStatus::Available => println!(
            "  {}  {}",
            style(&padded_domain).white(),
            style("AVAILABLE").green().bold()
        ),
        DasStatus::Taken => println!(
            "  {}  {}",
            style(&padded_domain).white(),
            style("TAKEN").red()
        ),
        DasStatus::Invalid => println!(
            "  {}  {}",
            style(&padded_domain).white(),
            style("INVALID").yellow()
        ),
        DasStatus::Unknown => {
            println!(
                "  {}  {}",
                style(&padded_domain).white(),
                style("UNKNOWN").yellow()
            );
            for line in response.lines().filter(|l| !l.trim().is_empty()) {
                println!("    {}", style(line.trim()).dim());
            }
        }
    }
}

/// Note that the answer came from RDAP instead of `service`.
pub fn print_fallback_notice(service: &str, reason: &str) {
    eprintln!(
        "{} {} unreachable ({}), answered via RDAP",
        style("note:").yellow().bold(),
        service,
        reason
    );
}

// ── Whois text from RDAP ─────────────────────────────────────────────────────

/// Whois-style lines for a domain fetched over RDAP, used when the whois
/// port cannot be reached.
pub fn whois_from_rdap(domain: &DomainRecord) -> String {
    let mut lines = vec![format!("Domain Name: {}", domain.name)];
    if let Some(date) = &domain.registered_date {
        lines.push(format!("Created: {}", short_date(date)));
    }
    if let Some(date) = &domain.last_changed_date {
        lines.push(format!("Updated: {}", short_date(date)));
    }
    if !domain.status.is_empty() {
        lines.push(format!("Status: {}", domain.status.join(", ")));
    }
    for nameserver in &domain.nameservers {
        lines.push(format!("Name Server: {}", nameserver));
    }
    if let Some(handle) = &domain.registrar_handle {
        lines.push(format!("Registrar: {}", handle));
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

// ── DNS ──────────────────────────────────────────────────────────────────────

pub fn print_dns(answer: &DnsAnswer) {
    if !answer.exists {
        println!(
            "  {}  {}",
            style(&answer.domain).white(),
            style("does not exist (NXDOMAIN)").yellow()
        );
        return;
    }

    print_title("DNS", &answer.domain);
    if answer.records.is_empty() {
        println!("  {}", style("No records found").dim());
    }
    for set in &answer.records {
        for value in &set.values {
            println!(
                "  {} {}",
                style(pad_str(&set.record_type, 6, Alignment::Left, None)).cyan(),
                value
            );
        }
    }
    println!();
}

// ── Record cards ─────────────────────────────────────────────────────────────

fn print_title(label: &str, value: &str) {
    println!();
    println!("{}", style("=".repeat(RULE_WIDTH)).blue());
    println!("  {}", style(format!("{}: {}", label, value)).green().bold());
    println!("{}", style("=".repeat(RULE_WIDTH)).blue());
}

fn print_field(label: &str, value: &str) {
    println!(
        "  {} {}",
        style(pad_str(&format!("{}:", label), 14, Alignment::Left, None)).dim(),
        value
    );
}

fn print_optional(label: &str, value: Option<&str>) {
    if let Some(value) = value {
        print_field(label, value);
    }
}

/// Date part of an RFC 3339 timestamp.
pub fn short_date(timestamp: &str) -> &str {
    timestamp.get(..10).unwrap_or(timestamp)
}

pub fn print_domain(domain: &DomainRecord) {
    print_title("Domain", &domain.name);

    if let Some(unicode) = domain
        .unicode_name
        .as_deref()
        .filter(|u| *u != domain.name)
    {
        print_field("Unicode", unicode);
    }
    print_optional("Handle", domain.handle.as_deref());
    if !domain.status.is_empty() {
        print_field("Status", &domain.status.join(", "));
    }
    print_optional("Registered", domain.registered_date.as_deref().map(short_date));
    print_optional("Changed", domain.last_changed_date.as_deref().map(short_date));

    if let Some(handle) = &domain.registrar_handle {
        let registrar = match &domain.registrar_name {
            Some(name) => format!("{} ({})", handle, name),
            None => handle.clone(),
        };
        print_field("Registrar", &registrar);
    }

    if !domain.nameservers.is_empty() {
        println!();
        println!("  {}", style("Name servers").bold());
        for nameserver in &domain.nameservers {
            println!("    - {}", nameserver);
        }
    }
    println!();
}

fn entity_kind_label(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Role => "role",
        EntityKind::Person => "person",
        EntityKind::Org => "organization",
    }
}

pub fn print_entity(entity: &EntityRecord) {
    print_title("Entity", &entity.handle);

    print_optional("Type", entity.kind.map(entity_kind_label));
    if !entity.roles.is_empty() {
        print_field("Roles", &entity.roles.join(", "));
    }
    print_optional("Name", entity.name.as_deref());
    print_optional("Organization", entity.organization.as_deref());
    print_optional("Address", entity.address.as_deref());
    print_optional("Phone", entity.phone.as_deref());
    print_optional("Email", entity.email.as_deref());
    print_optional("Registered", entity.registered_date.as_deref().map(short_date));
    print_optional("Changed", entity.last_changed_date.as_deref().map(short_date));
    println!();
}

pub fn print_nameserver(nameserver: &NameserverRecord) {
    print_title("Name server", &nameserver.hostname);

    print_optional("Handle", nameserver.handle.as_deref());
    if !nameserver.status.is_empty() {
        print_field("Status", &nameserver.status.join(", "));
    }
    for ip in &nameserver.ipv4 {
        print_field("IPv4", ip);
    }
    for ip in &nameserver.ipv6 {
        print_field("IPv6", ip);
    }
    print_optional("Registered", nameserver.registered_date.as_deref().map(short_date));
    print_optional("Changed", nameserver.last_changed_date.as_deref().map(short_date));
    println!();
}

pub fn print_record(record: &Record) {
    match record {
        Record::Domain(domain) => print_domain(domain),
        Record::Entity(entity) => print_entity(entity),
        Record::Nameserver(nameserver) => print_nameserver(nameserver),
    }
}

pub fn print_not_found(key: &str, reason: NotFoundReason) {
    let verdict = match reason {
        NotFoundReason::Unregistered => style(reason.to_string()).green(),
        NotFoundReason::PermanentlyUnavailable => style(reason.to_string()).red(),
        NotFoundReason::TemporarilyUnavailable => style(reason.to_string()).yellow(),
    };
    println!("  {}  {}", style(key).white(), verdict);
}

pub fn print_exists(key: &str, exists: bool) {
    let padded_key = pad_str(key, 30, Alignment::Left, Some(".."));
    if exists {
        println!("  {}  {}", style(&padded_key).white(), style("EXISTS").red());
    } else {
        println!(
            "  {}  {}",
            style(&padded_key).white(),
            style("NOT FOUND").green().bold()
        );
    }
}

pub fn print_count(identity: &str, count: u64) {
    println!(
        "  {}  {} domain{}",
        style(identity).white(),
        style(count).bold(),
        if count == 1 { "" } else { "s" }
    );
}

// ── Search tables ────────────────────────────────────────────────────────────

/// Handle, name and detail columns for one search item.
pub fn search_row(item: &Record) -> [String; 3] {
    match item {
        Record::Domain(domain) => [
            domain.handle.clone().unwrap_or_default(),
            domain.name.clone(),
            domain.status.join(", "),
        ],
        Record::Nameserver(nameserver) => [
            nameserver.handle.clone().unwrap_or_default(),
            nameserver.hostname.clone(),
            nameserver
                .ipv4
                .iter()
                .chain(nameserver.ipv6.iter())
                .cloned()
                .collect::<Vec<_>>()
                .join(", "),
        ],
        Record::Entity(entity) => [
            entity.handle.clone(),
            entity
                .name
                .clone()
                .or_else(|| entity.organization.clone())
                .unwrap_or_default(),
            entity.roles.join(", "),
        ],
    }
}

pub fn print_search(result: &SearchResult) {
    if result.items.is_empty() {
        println!("  {}", style("No matches").dim());
    } else {
        println!(
            "  {} {} {}",
            style(pad_str("HANDLE", 18, Alignment::Left, None)).bold(),
            style(pad_str("NAME", 32, Alignment::Left, None)).bold(),
            style("DETAILS").bold()
        );
        for item in &result.items {
            let [handle, name, details] = search_row(item);
            println!(
                "  {} {} {}",
                pad_str(&handle, 18, Alignment::Left, Some("..")),
                pad_str(&name, 32, Alignment::Left, Some("..")),
                style(details).dim()
            );
        }
    }

    println!();
    match result.total_count {
        Some(total) => println!(
            "  {}",
            style(format!("{} shown, {} total", result.items.len(), total)).dim()
        ),
        None => println!("  {}", style(format!("{} shown", result.items.len())).dim()),
    }
    if let Some(cursor) = &result.next_cursor {
        println!(
            "  {} --cursor {}",
            style("More results:").dim(),
            style(cursor).cyan()
        );
    }
}
