//! Norid CLI Application
//!
//! A command-line interface for looking up `.no` domains, contacts and name
//! servers through the registry's RDAP, whois and DAS services, and for
//! reading a domain's DNS records.
//! This CLI application is a thin presentation layer over norid-lib.

mod ui;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use norid_lib::{
    load_env_config, parse_timeout, ClientConfig, ConfigManager, EnvConfig, Environment,
    FieldSet, FileConfig, LookupOptions, LookupOutcome, LookupRequest, LookupResult,
    NoridClient, RequestKind, SortDirection,
};
use serde::Serialize;
use serde_json::json;
use std::io::{self, Write};
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use ui::DasStatus;

const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Yellow.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

/// CLI arguments for norid
#[derive(Parser, Debug)]
#[command(name = "norid")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Look up .no domains, contacts and name servers")]
#[command(
    long_about = "Look up .no domains, contacts and name servers via the Norid RDAP, whois and DAS services.\n\nUse --test (or --env test) to query the registry's test environment."
)]
#[command(styles = STYLES)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Use the registry's test environment (same as --env test)
    #[arg(long = "test", global = true, conflicts_with = "env", help_heading = "Environment")]
    pub test: bool,

    /// Registry environment: production or test
    #[arg(long = "env", value_name = "ENV", global = true, help_heading = "Environment")]
    pub env: Option<String>,

    /// Output results in JSON format
    #[arg(short = 'j', long = "json", global = true, help_heading = "Output Format")]
    pub json: bool,

    /// Overall timeout per lookup (e.g. 10s, 1m)
    #[arg(long = "timeout", value_name = "DURATION", global = true, help_heading = "Configuration")]
    pub timeout: Option<String>,

    /// Use specific config file instead of automatic discovery
    #[arg(long = "config", value_name = "FILE", global = true, help_heading = "Configuration")]
    pub config: Option<String>,

    /// More log output on stderr (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true, help_heading = "Configuration")]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Look up a domain via RDAP
    Domain {
        /// Domain name, e.g. norid.no
        name: String,

        /// Only check whether the domain exists (RDAP HEAD)
        #[arg(long = "available")]
        available: bool,
    },

    /// Look up a contact, organization or registrar by handle
    Entity {
        /// Handle, e.g. NOR1O-NORID
        handle: String,
    },

    /// Look up a name server by handle
    Nameserver {
        /// Handle, e.g. X11H-NORID
        handle: String,
    },

    /// Search domains, name servers or entities
    Search {
        /// What to search for
        #[arg(value_enum)]
        target: SearchTarget,

        /// Search pattern; `*` is a wildcard
        pattern: String,

        /// Search parameter carrying the pattern (name, registrant, identity, nsIp, nsLdhName, ip, fn)
        #[arg(long = "by", value_name = "FILTER")]
        by: Option<String>,

        /// Sort key, e.g. name or registrationDate:d
        #[arg(long = "sort", value_name = "KEY")]
        sort: Option<String>,

        /// Sort descending
        #[arg(long = "desc")]
        desc: bool,

        /// Partial response: full or id
        #[arg(long = "field-set", value_name = "SET")]
        field_set: Option<String>,

        /// Ask the server for the total number of matches
        #[arg(long = "count")]
        count: bool,

        /// Continue a previous search
        #[arg(long = "cursor", value_name = "TOKEN")]
        cursor: Option<String>,
    },

    /// Number of domains held by an organization number or handle
    Count {
        identity: String,
    },

    /// Raw whois lookup
    Whois {
        domain: String,

        /// Always send the `-c utf-8` charset flag
        #[arg(long = "utf8")]
        utf8: bool,

        /// Build whois-style text from RDAP when the whois port cannot be reached
        #[arg(long = "rdap-fallback")]
        rdap_fallback: bool,
    },

    /// Domain availability via DAS
    Das {
        domain: String,

        /// Print the raw DAS response instead of a verdict
        #[arg(long = "raw")]
        raw: bool,

        /// Always send the `-c utf-8` charset flag
        #[arg(long = "utf8")]
        utf8: bool,

        /// Ask RDAP when DAS cannot be reached
        #[arg(long = "rdap-fallback")]
        rdap_fallback: bool,
    },

    /// DNS records (A, AAAA, MX, NS, TXT, CNAME) of a domain
    Dns {
        domain: String,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchTarget {
    Domains,
    Nameservers,
    Entities,
}

impl SearchTarget {
    fn request_kind(self) -> RequestKind {
        match self {
            SearchTarget::Domains => RequestKind::DomainSearch,
            SearchTarget::Nameservers => RequestKind::NameserverSearch,
            SearchTarget::Entities => RequestKind::EntitySearch,
        }
    }
}

/// Everything the CLI needs after config files, environment and flags are merged.
#[derive(Debug, Clone)]
pub(crate) struct Settings {
    pub(crate) client: ClientConfig,
    pub(crate) json: bool,
    pub(crate) json_pretty: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            client: ClientConfig::default(),
            json: false,
            json_pretty: true,
        }
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    init_tracing(args.verbose);

    match run(args).await {
        Ok(code) => {
            // process::exit skips destructors; raw whois text may lack a final newline
            let _ = io::stdout().flush();
            process::exit(code)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

/// Log to stderr so JSON on stdout stays clean. `RUST_LOG` wins over `-v`.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("warn,norid={},norid_lib={}", level, level))
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Run one command and return the process exit code.
async fn run(args: Args) -> Result<i32, Box<dyn std::error::Error>> {
    let settings = build_settings(&args, load_env_config())?;
    debug!(
        environment = %settings.client.environment,
        timeout = ?settings.client.timeout,
        json = settings.json,
        "settings resolved"
    );

    let client = NoridClient::new(settings.client.clone())?;

    match &args.command {
        Command::Domain { .. }
        | Command::Entity { .. }
        | Command::Nameserver { .. }
        | Command::Search { .. } => {
            let request = lookup_request(&args.command, &settings)?;
            run_lookup(&client, &request, &settings).await
        }
        Command::Count { identity } => {
            let count = client.rdap().domain_count(identity).await?;
            if settings.json {
                print_json(&json!({ "identity": identity, "count": count }), &settings)?;
            } else {
                ui::print_count(identity, count);
            }
            Ok(0)
        }
        Command::Whois {
            domain,
            utf8,
            rdap_fallback,
        } => run_whois(&client, domain, *utf8, *rdap_fallback, &settings).await,
        Command::Das {
            domain,
            raw,
            utf8,
            rdap_fallback,
        } => run_das(&client, domain, *raw, *utf8, *rdap_fallback, &settings).await,
        Command::Dns { domain } => {
            let answer = client.dns().lookup(domain).await?;
            if settings.json {
                print_json(&answer, &settings)?;
            } else {
                ui::print_dns(&answer);
            }
            Ok(0)
        }
    }
}

/// The RDAP request behind `domain`, `entity`, `nameserver` and `search`.
fn lookup_request(
    command: &Command,
    settings: &Settings,
) -> Result<LookupRequest, Box<dyn std::error::Error>> {
    let (kind, key, mut options) = match command {
        Command::Domain { name, available } => (
            RequestKind::Domain,
            name,
            LookupOptions {
                use_head: *available,
                ..Default::default()
            },
        ),
        Command::Entity { handle } => (RequestKind::Entity, handle, LookupOptions::default()),
        Command::Nameserver { handle } => {
            (RequestKind::Nameserver, handle, LookupOptions::default())
        }
        Command::Search {
            target, pattern, ..
        } => (target.request_kind(), pattern, search_options(command)?),
        other => return Err(format!("{:?} is not an RDAP lookup", other).into()),
    };
    options.json_view = settings.json;

    Ok(LookupRequest::new(kind, key.as_str()).with_options(options))
}

/// Lookup options for `search`, from its flags.
fn search_options(command: &Command) -> Result<LookupOptions, Box<dyn std::error::Error>> {
    let Command::Search {
        by,
        sort,
        desc,
        field_set,
        count,
        cursor,
        ..
    } = command
    else {
        return Ok(LookupOptions::default());
    };

    let field_set = field_set
        .as_deref()
        .map(str::parse::<FieldSet>)
        .transpose()?;

    Ok(LookupOptions {
        sort_key: sort.clone(),
        sort_dir: if *desc {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        },
        field_set,
        count: *count,
        cursor: cursor.clone(),
        filter: by.clone(),
        ..Default::default()
    })
}

async fn run_lookup(
    client: &NoridClient,
    request: &LookupRequest,
    settings: &Settings,
) -> Result<i32, Box<dyn std::error::Error>> {
    let outcome = client.execute(request).await?;
    let key = request.key_or_pattern.trim();

    if request.options.json_view {
        match &outcome {
            LookupOutcome::Record(result) => print_json(result, settings)?,
            LookupOutcome::Exists(exists) => {
                print_json(&json!({ "key": key, "exists": exists }), settings)?
            }
            LookupOutcome::Search(result) => print_json(result, settings)?,
        }
    } else {
        match &outcome {
            LookupOutcome::Record(LookupResult::Found(record)) => ui::print_record(record),
            LookupOutcome::Record(LookupResult::NotFound { reason }) => {
                ui::print_not_found(key, *reason)
            }
            LookupOutcome::Record(LookupResult::Error { status, message }) => {
                eprintln!("Error: HTTP {}: {}", status, message)
            }
            LookupOutcome::Exists(exists) => ui::print_exists(key, *exists),
            LookupOutcome::Search(result) => ui::print_search(result),
        }
    }

    Ok(exit_code(&outcome))
}

/// Not-found is an answer, not a failure; only server errors exit non-zero.
fn exit_code(outcome: &LookupOutcome) -> i32 {
    match outcome {
        LookupOutcome::Record(LookupResult::Error { .. }) => 1,
        _ => 0,
    }
}

async fn run_whois(
    client: &NoridClient,
    domain: &str,
    utf8: bool,
    rdap_fallback: bool,
    settings: &Settings,
) -> Result<i32, Box<dyn std::error::Error>> {
    let (response, source) = match client.whois().lookup_with_charset(domain, utf8).await {
        Ok(response) => (response, "whois"),
        Err(e) if rdap_fallback && e.is_network() => {
            debug!(error = %e, "whois failed, falling back to RDAP");
            if !settings.json {
                ui::print_fallback_notice("whois", &e.to_string());
            }
            match client.rdap().domain(domain.trim()).await? {
                LookupResult::Found(record) => (ui::whois_from_rdap(&record), "rdap"),
                LookupResult::NotFound { reason } => {
                    if settings.json {
                        print_json(
                            &json!({ "query": domain, "source": "rdap", "not_found": reason }),
                            settings,
                        )?;
                    } else {
                        ui::print_not_found(domain.trim(), reason);
                    }
                    return Ok(0);
                }
                LookupResult::Error { status, message } => {
                    return Err(format!("RDAP fallback failed: HTTP {}: {}", status, message).into())
                }
            }
        }
        Err(e) => return Err(e.into()),
    };

    if settings.json {
        print_json(
            &json!({ "query": domain, "source": source, "response": response }),
            settings,
        )?;
    } else {
        print!("{}", response);
    }
    Ok(0)
}

async fn run_das(
    client: &NoridClient,
    domain: &str,
    raw: bool,
    utf8: bool,
    rdap_fallback: bool,
    settings: &Settings,
) -> Result<i32, Box<dyn std::error::Error>> {
    let (status, response, source) = match client.das().lookup_with_charset(domain, utf8).await {
        Ok(response) => (DasStatus::classify(&response), Some(response), "das"),
        Err(e) if rdap_fallback && e.is_network() => {
            debug!(error = %e, "DAS failed, falling back to RDAP HEAD");
            if !settings.json {
                ui::print_fallback_notice("DAS", &e.to_string());
            }
            let registered = client.rdap().registered(domain.trim()).await?;
            (DasStatus::from_registered(registered), None, "rdap")
        }
        Err(e) => return Err(e.into()),
    };

    if settings.json {
        print_json(
            &json!({
                "domain": domain.trim(),
                "status": status,
                "source": source,
                "response": response,
            }),
            settings,
        )?;
    } else if raw {
        match &response {
            Some(text) => print!("{}", text),
            None => ui::print_das_result(domain.trim(), status, ""),
        }
    } else {
        ui::print_das_result(domain.trim(), status, response.as_deref().unwrap_or(""));
    }

    Ok(0)
}

fn print_json<T: Serialize>(value: &T, settings: &Settings) -> Result<(), serde_json::Error> {
    let output = if settings.json_pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", output);
    Ok(())
}

/// Build settings with proper precedence.
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables (NORID_*)
/// 3. Local config file (./norid.toml or ./.norid.toml)
/// 4. Global config file (~/.norid.toml)
/// 5. XDG config file (~/.config/norid/config.toml)
/// 6. Built-in defaults
fn build_settings(
    args: &Args,
    env_config: EnvConfig,
) -> Result<Settings, Box<dyn std::error::Error>> {
    let config_manager = ConfigManager::new(args.verbose > 0);

    // Step 1: config files, explicit path first
    let explicit_path = args.config.as_ref().or(env_config.config.as_ref());
    let file_config = match explicit_path {
        Some(path) => {
            debug!(path = %path, "using explicit config file");
            config_manager
                .load_file(path)
                .map_err(|e| format!("Failed to load config file '{}': {}", path, e))?
        }
        None => config_manager.discover_and_load()?,
    };

    let settings = merge_file_config(Settings::default(), file_config)?;

    // Step 2: environment variables (NORID_*)
    let settings = apply_environment_config(settings, &env_config);

    // Step 3: CLI arguments (highest precedence)
    apply_cli_args(settings, args)
}

fn merge_file_config(
    mut settings: Settings,
    file_config: FileConfig,
) -> Result<Settings, Box<dyn std::error::Error>> {
    if let Some(defaults) = file_config.defaults {
        if let Some(environment) = defaults.environment {
            settings.client.environment = environment.parse()?;
        }
        if let Some(timeout) = defaults.timeout.as_deref().and_then(parse_timeout) {
            settings.client.timeout = timeout;
        }
        if let Some(timeout) = defaults.connect_timeout.as_deref().and_then(parse_timeout) {
            settings.client.connect_timeout = timeout;
        }
        if let Some(json) = defaults.json {
            settings.json = json;
        }
    }

    if let Some(output) = file_config.output {
        if let Some(json_pretty) = output.json_pretty {
            settings.json_pretty = json_pretty;
        }
    }

    if let Some(endpoints) = file_config.endpoints {
        if !endpoints.is_empty() {
            settings.client = settings.client.with_endpoint_overrides(endpoints);
        }
    }

    Ok(settings)
}

fn apply_environment_config(mut settings: Settings, env_config: &EnvConfig) -> Settings {
    if let Some(environment) = env_config.environment {
        settings.client.environment = environment;
    }
    if let Some(timeout) = env_config.timeout {
        settings.client.timeout = timeout;
    }
    if let Some(timeout) = env_config.connect_timeout {
        settings.client.connect_timeout = timeout;
    }
    if let Some(json) = env_config.json {
        settings.json = json;
    }
    settings
}

fn apply_cli_args(
    mut settings: Settings,
    args: &Args,
) -> Result<Settings, Box<dyn std::error::Error>> {
    if args.test {
        settings.client.environment = Environment::Test;
    } else if let Some(env) = &args.env {
        settings.client.environment = env.parse()?;
    }

    if let Some(timeout_str) = &args.timeout {
        settings.client.timeout = parse_timeout(timeout_str).ok_or_else(|| {
            format!(
                "Invalid timeout '{}'. Use a positive value like '5s', '30s', '2m'",
                timeout_str
            )
        })?;
    }

    if args.json {
        settings.json = true;
    }

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use norid_lib::{DefaultsConfig, EndpointOverrides, OutputConfig};
    use std::time::Duration;

    fn create_test_args() -> Args {
        Args {
            command: Command::Domain {
                name: "norid.no".to_string(),
                available: false,
            },
            test: false,
            env: None,
            json: false,
            timeout: None,
            config: None,
            verbose: 0,
        }
    }

    #[test]
    fn test_parse_subcommands() {
        let args = Args::try_parse_from(["norid", "--test", "domain", "norid.no", "--available"])
            .unwrap();
        assert!(args.test);
        assert_eq!(
            args.command,
            Command::Domain {
                name: "norid.no".to_string(),
                available: true
            }
        );

        let args = Args::try_parse_from([
            "norid", "search", "entities", "Norid*", "--by", "fn", "--count", "-j",
        ])
        .unwrap();
        assert!(args.json);
        match args.command {
            Command::Search {
                target, by, count, ..
            } => {
                assert_eq!(target, SearchTarget::Entities);
                assert_eq!(by.as_deref(), Some("fn"));
                assert!(count);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_test_flag_conflicts_with_env() {
        assert!(Args::try_parse_from(["norid", "--test", "--env", "test", "das", "norid.no"]).is_err());
    }

    #[test]
    fn test_verbose_counts() {
        let args = Args::try_parse_from(["norid", "-vv", "das", "norid.no"]).unwrap();
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_search_options_from_flags() {
        let command = Command::Search {
            target: SearchTarget::Domains,
            pattern: "*.nic.no".to_string(),
            by: None,
            sort: Some("name".to_string()),
            desc: true,
            field_set: Some("id".to_string()),
            count: true,
            cursor: Some("eyJvZmZzZXQiOjJ9".to_string()),
        };

        let options = search_options(&command).unwrap();
        assert_eq!(options.sort_key.as_deref(), Some("name"));
        assert_eq!(options.sort_dir, SortDirection::Descending);
        assert_eq!(options.field_set, Some(FieldSet::Id));
        assert!(options.count);
        assert_eq!(options.cursor.as_deref(), Some("eyJvZmZzZXQiOjJ9"));
    }

    #[test]
    fn test_search_options_reject_bad_field_set() {
        let command = Command::Search {
            target: SearchTarget::Domains,
            pattern: "*.no".to_string(),
            by: None,
            sort: None,
            desc: false,
            field_set: Some("brief".to_string()),
            count: false,
            cursor: None,
        };
        assert!(search_options(&command).is_err());
    }

    #[test]
    fn test_precedence_file_env_cli() {
        let file_config = FileConfig {
            defaults: Some(DefaultsConfig {
                environment: Some("test".to_string()),
                timeout: Some("20s".to_string()),
                json: Some(true),
                ..Default::default()
            }),
            output: Some(OutputConfig {
                json_pretty: Some(false),
            }),
            endpoints: Some(EndpointOverrides {
                das_port: Some(7979),
                ..Default::default()
            }),
        };

        let settings = merge_file_config(Settings::default(), file_config).unwrap();
        assert_eq!(settings.client.environment, Environment::Test);
        assert_eq!(settings.client.timeout, Duration::from_secs(20));
        assert!(settings.json);
        assert!(!settings.json_pretty);
        assert!(settings.client.endpoint_overrides.is_some());

        let env_config = EnvConfig {
            environment: Some(Environment::Production),
            timeout: Some(Duration::from_secs(15)),
            ..Default::default()
        };
        let settings = apply_environment_config(settings, &env_config);
        assert_eq!(settings.client.environment, Environment::Production);
        assert_eq!(settings.client.timeout, Duration::from_secs(15));

        let mut args = create_test_args();
        args.test = true;
        args.timeout = Some("5s".to_string());
        let settings = apply_cli_args(settings, &args).unwrap();
        assert_eq!(settings.client.environment, Environment::Test);
        assert_eq!(settings.client.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_cli_rejects_bad_values() {
        let mut args = create_test_args();
        args.env = Some("staging".to_string());
        assert!(apply_cli_args(Settings::default(), &args).is_err());

        let mut args = create_test_args();
        args.timeout = Some("0s".to_string());
        assert!(apply_cli_args(Settings::default(), &args).is_err());
    }

    #[test]
    fn test_missing_explicit_config_fails() {
        let mut args = create_test_args();
        args.config = Some("/nonexistent/norid.toml".to_string());
        let err = build_settings(&args, EnvConfig::default()).unwrap_err();
        assert!(err.to_string().contains("Failed to load config file"));
    }

    #[test]
    fn test_every_lookup_command_carries_json_view() {
        let settings = Settings {
            json: true,
            ..Default::default()
        };
        let commands = [
            Command::Domain {
                name: "norid.no".to_string(),
                available: false,
            },
            Command::Entity {
                handle: "NOR1O-NORID".to_string(),
            },
            Command::Nameserver {
                handle: "X11H-NORID".to_string(),
            },
            Command::Search {
                target: SearchTarget::Entities,
                pattern: "Norid AS".to_string(),
                by: None,
                sort: None,
                desc: false,
                field_set: None,
                count: false,
                cursor: None,
            },
        ];

        for command in &commands {
            let request = lookup_request(command, &settings).unwrap();
            assert!(request.options.json_view, "{:?}", command);
            request.validate().unwrap();

            let plain = lookup_request(command, &Settings::default()).unwrap();
            assert!(!plain.options.json_view, "{:?}", command);
        }

        let available = lookup_request(
            &Command::Domain {
                name: "norid.no".to_string(),
                available: true,
            },
            &settings,
        )
        .unwrap();
        assert!(available.options.use_head);

        let whois = Command::Whois {
            domain: "norid.no".to_string(),
            utf8: false,
            rdap_fallback: false,
        };
        assert!(lookup_request(&whois, &settings).is_err());
    }

    #[test]
    fn test_parse_fallback_and_charset_flags() {
        let args =
            Args::try_parse_from(["norid", "das", "blåbær.no", "--utf8", "--rdap-fallback"]).unwrap();
        assert_eq!(
            args.command,
            Command::Das {
                domain: "blåbær.no".to_string(),
                raw: false,
                utf8: true,
                rdap_fallback: true,
            }
        );

        let args = Args::try_parse_from(["norid", "whois", "norid.no", "--rdap-fallback"]).unwrap();
        assert!(matches!(
            args.command,
            Command::Whois {
                rdap_fallback: true,
                ..
            }
        ));

        let args = Args::try_parse_from(["norid", "-j", "dns", "norid.no"]).unwrap();
        assert!(args.json);
        assert_eq!(
            args.command,
            Command::Dns {
                domain: "norid.no".to_string()
            }
        );
    }

    #[test]
    fn test_exit_code_for_outcomes() {
        let error = LookupOutcome::Record(LookupResult::Error {
            status: 500,
            message: "Internal Server Error".to_string(),
        });
        assert_eq!(exit_code(&error), 1);

        let missing = LookupOutcome::Record(LookupResult::NotFound {
            reason: norid_lib::NotFoundReason::Unregistered,
        });
        assert_eq!(exit_code(&missing), 0);
        assert_eq!(exit_code(&LookupOutcome::Exists(false)), 0);
    }
}
