// Command line interface parsing
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use clap::builder::{
    NonEmptyStringValueParser,
    PossibleValuesParser,
};
use clap::error::ErrorKind;
use clap::{
    crate_description,
    crate_name,
    crate_version,
    Arg,
    ArgMatches,
    Command,
};
use crate::common::{
    ClientConfig,
    ObjectVersions,
    OutputFormat,
    Region,
    DEFAULT_PROFILE,
};
use std::ffi::OsString;
use std::process;
use std::str::FromStr;
use tracing::debug;

// Default AWS region if one isn't provided on the command line
const DEFAULT_REGION: &str = "eu-west-1";

// Default output format for the list command
const DEFAULT_OUTPUT_FORMAT: &str = "table";

// Default object versions removed by the delete command
const DEFAULT_OBJECT_VERSIONS: &str = "current";

// These should match the string values in the FromStr impls
const OUTPUT_FORMATS: [&str; 2] = [
    "plain",
    "table",
];

const OBJECT_VERSIONS: [&str; 2] = [
    "all",
    "current",
];

/// The subcommand that was selected.
#[derive(Debug, Eq, PartialEq)]
pub enum Action {
    /// List all buckets.
    List,

    /// Delete buckets matching the bucket filter.
    Delete,
}

// Ensures that a custom endpoint at least looks like a URL.
fn is_valid_endpoint(s: &str) -> Result<String, String> {
    if s.starts_with("http://") || s.starts_with("https://") {
        Ok(s.to_string())
    }
    else {
        Err("Endpoint must begin with http:// or https://".into())
    }
}

// Create clap app
fn create_app() -> Command {
    debug!("Creating CLI app");

    Command::new(crate_name!())
        .version(crate_version!())
        .about(crate_description!())
        .subcommand_required(true)
        .arg(
            Arg::new("PROFILE")
                .env("AWS_PROFILE")
                .hide_env_values(true)
                .long("profile")
                .short('p')
                .value_name("PROFILE")
                .help("Credential profile to use")
                .global(true)
                .default_value(DEFAULT_PROFILE)
                .value_parser(NonEmptyStringValueParser::new())
        )
        .arg(
            Arg::new("REGION")
                .env("AWS_REGION")
                .hide_env_values(true)
                .long("region")
                .short('r')
                .value_name("REGION")
                .help("Set the AWS region to create the client in.")
                .global(true)
                .default_value(DEFAULT_REGION)
                .value_parser(NonEmptyStringValueParser::new())
        )
        .arg(
            Arg::new("ENDPOINT")
                .env("S3RMB_ENDPOINT")
                .hide_env_values(true)
                .long("endpoint")
                .short('e')
                .value_name("URL")
                .help("Custom endpoint for S3 compatible stores")
                .global(true)
                .value_parser(is_valid_endpoint)
        )
        .subcommand(
            Command::new("list")
                .about("List all buckets and their regions")
                .arg(
                    Arg::new("OUTPUT")
                        .long("output")
                        .short('o')
                        .value_name("FORMAT")
                        .help("Show a table of regions or plain lines with creation times")
                        .default_value(DEFAULT_OUTPUT_FORMAT)
                        .value_parser(PossibleValuesParser::new(OUTPUT_FORMATS))
                )
        )
        .subcommand(
            Command::new("delete")
                .about("Delete buckets, and their content, whose name contains BUCKET")
                .arg(
                    Arg::new("BUCKET")
                        .long("bucket")
                        .short('b')
                        .value_name("BUCKET")
                        .help("Substring that bucket names must contain")
                        .required(true)
                        .value_parser(NonEmptyStringValueParser::new())
                )
                .arg(
                    Arg::new("OBJECT_VERSIONS")
                        .long("object-versions")
                        .short('o')
                        .value_name("VERSIONS")
                        .help("Delete current objects only, or all versions and delete markers")
                        .default_value(DEFAULT_OBJECT_VERSIONS)
                        .value_parser(PossibleValuesParser::new(OBJECT_VERSIONS))
                )
        )
}

// Returns the string value of an argument, if it has one.
fn value<'a>(matches: &'a ArgMatches, id: &str) -> Option<&'a str> {
    matches.get_one::<String>(id).map(String::as_str)
}

/// Turns parsed arguments into the selected `Action` and a `ClientConfig`.
pub fn client_config(matches: &ArgMatches) -> (Action, ClientConfig) {
    let mut config = ClientConfig::default();

    if let Some(profile) = value(matches, "PROFILE") {
        config.profile = profile.into();
    }

    if let Some(region) = value(matches, "REGION") {
        config.region = Region::default().set_region(region);
    }

    config.endpoint = value(matches, "ENDPOINT").map(String::from);

    let action = match matches.subcommand() {
        Some(("delete", delete)) => {
            config.bucket_filter = value(delete, "BUCKET").map(String::from);

            // Values are restricted to OBJECT_VERSIONS, this always parses.
            if let Some(versions) = value(delete, "OBJECT_VERSIONS") {
                config.object_versions = ObjectVersions::from_str(versions)
                    .unwrap_or_default();
            }

            Action::Delete
        },
        Some(("list", list)) => {
            // Values are restricted to OUTPUT_FORMATS, this always parses.
            if let Some(format) = value(list, "OUTPUT") {
                config.output_format = OutputFormat::from_str(format)
                    .unwrap_or_default();
            }

            Action::List
        },
        // subcommand_required stops us getting here.
        _ => unreachable!(),
    };

    debug!("Parsed {:?} with {:?}", action, config);

    (action, config)
}

// Parse the given arguments, returning clap errors.
fn try_parse_from<I, T>(args: I) -> Result<(Action, ClientConfig), clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = create_app().try_get_matches_from(args)?;

    Ok(client_config(&matches))
}

/// Parses the process arguments.
///
/// Usage errors, including unknown subcommands, exit with status 1.
pub fn parse_args() -> (Action, ClientConfig) {
    debug!("Parsing command line arguments");

    match try_parse_from(std::env::args_os()) {
        Ok(parsed) => parsed,
        Err(e)     => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                eprintln!("{}", e);
                process::exit(1);
            },
        },
    }
}
