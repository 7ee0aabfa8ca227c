//! Command-line definition and conversion to library options.

use clap::builder::BoolishValueParser;
use clap::{Arg, ArgAction, ArgMatches, Command};
use ec2lslib::source::STDIN;
use ec2lslib::{DisplayOptions, MissPolicy, RecordFilter, RenderConfig, RenderFormat};

use crate::logging::LoggingConfig;

/// Display and filter arguments shared by the root command and `list`.
fn listing_args() -> Vec<Arg> {
    vec![
        Arg::new("output")
            .short('o')
            .long("output")
            .env("EC2LS_OUTPUT")
            .default_value("table")
            .value_parser(["plain", "simple", "table", "color"])
            .global(true)
            .help("Output format"),
        Arg::new("field")
            .short('f')
            .long("field")
            .env("EC2LS_FIELDS")
            .action(ArgAction::Append)
            .value_delimiter(',')
            .global(true)
            .help("Field to show as [Name=]expression (repeatable, comma separated)"),
        Arg::new("header")
            .long("header")
            .action(ArgAction::SetTrue)
            .overrides_with("no-header")
            .global(true)
            .help("Always print the header row"),
        Arg::new("no-header")
            .long("no-header")
            .action(ArgAction::SetTrue)
            .overrides_with("header")
            .global(true)
            .help("Never print the header row"),
        Arg::new("strict")
            .long("strict")
            .env("EC2LS_STRICT")
            .action(ArgAction::SetTrue)
            .value_parser(BoolishValueParser::new())
            .global(true)
            .help("Show <error: ...> for invalid field expressions instead of an empty cell"),
        Arg::new("input")
            .short('i')
            .long("input")
            .env("EC2LS_INPUT")
            .default_value(STDIN)
            .global(true)
            .help("describe-instances JSON to read ('-' for stdin)"),
        Arg::new("instance-id")
            .long("instance-id")
            .action(ArgAction::Append)
            .global(true)
            .help("Only show this instance (repeatable)"),
        Arg::new("filter")
            .long("filter")
            .action(ArgAction::Append)
            .global(true)
            .help("Only show instances where EXPR resolves to VALUE, as EXPR=VALUE (repeatable)"),
        Arg::new("verbose")
            .short('v')
            .long("verbose")
            .action(ArgAction::Count)
            .global(true)
            .help("Log more to stderr (-v info, -vv debug, -vvv trace)"),
        Arg::new("log-level")
            .long("log-level")
            .env("EC2LS_LOG")
            .global(true)
            .help("Log level or filter directive (overrides -v and RUST_LOG)"),
    ]
}

/// Build the clap Command structure
pub fn build_command() -> Command {
    Command::new("ec2ls")
        .version(env!("CARGO_PKG_VERSION"))
        .about("List EC2 instances and print selected attributes")
        .after_help(
            "Fields are [Name=]expression. Expressions are tags.<key>, id, state, \
             or a path into the instance such as Placement.AvailabilityZone or \
             NetworkInterfaces[0].PrivateIpAddress.",
        )
        .args(listing_args())
        .subcommand(Command::new("list").about("List instances (default command)"))
}

/// Everything a listing run needs, taken from parsed arguments.
#[derive(Debug, Clone)]
pub struct ListSettings {
    pub input: String,
    pub filter: RecordFilter,
    pub display: DisplayOptions,
    pub render: RenderConfig,
    pub logging: LoggingConfig,
}

/// Extract logging choices from matches
pub fn extract_logging(matches: &ArgMatches) -> LoggingConfig {
    LoggingConfig {
        level: matches.get_one::<String>("log-level").cloned(),
        verbosity: matches.get_count("verbose"),
    }
}

/// Build render configuration from matches
fn extract_render(matches: &ArgMatches) -> RenderConfig {
    let format = matches
        .get_one::<String>("output")
        .map(|s| RenderFormat::from_name(s))
        .unwrap_or_default();

    let mut config = RenderConfig::new(format);
    if matches.get_flag("header") {
        config = config.show_header(true);
    } else if matches.get_flag("no-header") {
        config = config.show_header(false);
    }
    if matches.get_flag("strict") {
        config = config.misses(MissPolicy::Marker);
    }
    config
}

/// Build record filter from matches
fn extract_filter(matches: &ArgMatches) -> anyhow::Result<RecordFilter> {
    let mut filter = RecordFilter::new();

    if let Some(ids) = matches.get_many::<String>("instance-id") {
        for id in ids {
            filter = filter.instance_id(id);
        }
    }

    if let Some(conditions) = matches.get_many::<String>("filter") {
        for condition in conditions {
            filter = filter.condition(condition)?;
        }
    }

    Ok(filter)
}

impl ListSettings {
    pub fn from_matches(matches: &ArgMatches) -> anyhow::Result<Self> {
        let fields: Vec<String> = matches
            .get_many::<String>("field")
            .map(|v| v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()).collect())
            .unwrap_or_default();

        Ok(Self {
            input: matches
                .get_one::<String>("input")
                .cloned()
                .unwrap_or_else(|| STDIN.to_string()),
            filter: extract_filter(matches)?,
            display: DisplayOptions::new().fields(fields),
            render: extract_render(matches),
            logging: extract_logging(matches),
        })
    }
}

/// Matches for the listing: the `list` subcommand's, or the root's.
pub fn listing_matches(matches: &ArgMatches) -> &ArgMatches {
    match matches.subcommand() {
        Some(("list", sub)) => sub,
        _ => matches,
    }
}
