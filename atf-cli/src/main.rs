//! Command-line interface for atf
//! This binary parses, checks and merges ATF transliterations.
//!
//! Usage:
//!   atf parse `<path>` [--format `<format>`]           - Parse and print the dict form or canonical atf
//!   atf check `<path>`                                 - List every error annotation, exit 1 on errors
//!   atf merge `<old.json>` `<new.atf>` [--algorithm]   - Merge an edited source into an annotated text
//!
//! Every command accepts `--config <file>` to layer a configuration file over the defaults and
//! `--verbose` to log at debug level. `ATF_LOG` sets the log filter otherwise.

use atf_config::{AtfConfig, Loader, OutputFormat};
use atf_parser::atf::formats::{from_json, to_json};
use atf_parser::atf::loader::{LoaderError, TextLoader};
use atf_parser::{AtfParser, Text};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::fmt::Display;
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("atf")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for parsing, checking and merging ATF transliterations")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the built-in defaults")
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log at debug level")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("parse")
                .about("Parse a transliteration and print it")
                .arg(
                    Arg::new("path")
                        .help("Path to the atf file")
                        .required(true)
                        .index(1),
                )
                .arg(format_arg()),
        )
        .subcommand(
            Command::new("check")
                .about("Report every invalid line of a transliteration")
                .arg(
                    Arg::new("path")
                        .help("Path to the atf file")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("merge")
                .about("Merge an edited transliteration into an annotated text")
                .arg(
                    Arg::new("old")
                        .help("Annotated text in json dict form")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("new")
                        .help("Edited atf source")
                        .required(true)
                        .index(2),
                )
                .arg(
                    Arg::new("algorithm")
                        .long("algorithm")
                        .short('a')
                        .help("Diff algorithm")
                        .value_parser(["lcs", "myers"]),
                )
                .arg(format_arg()),
        )
}

fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .short('f')
        .help("Output format (default from config: json)")
        .value_parser(["json", "yaml", "atf"])
}

fn main() {
    let matches = cli().get_matches();
    init_logging(matches.get_flag("verbose"));

    let (name, command) = match matches.subcommand() {
        Some(subcommand) => subcommand,
        None => fail("a subcommand is required"),
    };
    let config = load_config(&matches, command);
    match name {
        "parse" => handle_parse_command(command, &config),
        "check" => handle_check_command(command, &config),
        "merge" => handle_merge_command(command, &config),
        other => fail(format!("unknown command '{}'", other)),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("ATF_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    // Logs go to stderr so stdout stays clean for output
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn fail(message: impl Display) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}

/// Defaults, then the `--config` file, then command line flags.
fn load_config(matches: &ArgMatches, command: &ArgMatches) -> AtfConfig {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    let overrides = [("format", "output.format"), ("algorithm", "merge.algorithm")];
    for (arg, key) in overrides {
        let value = command
            .try_get_one::<String>(arg)
            .ok()
            .flatten()
            .cloned();
        if let Some(value) = value {
            loader = loader
                .set_override(key, value)
                .unwrap_or_else(|e| fail(format!("invalid --{}: {}", arg, e)));
        }
    }
    let config = loader
        .build()
        .unwrap_or_else(|e| fail(format!("invalid configuration: {}", e)));
    tracing::debug!(?config, "loaded configuration");
    config
}

fn path<'a>(command: &'a ArgMatches, name: &str) -> &'a str {
    command
        .get_one::<String>(name)
        .map(String::as_str)
        .unwrap_or_else(|| fail(format!("missing <{}>", name)))
}

fn parse_file(path: &str, config: &AtfConfig) -> Result<Text, LoaderError> {
    let parser = AtfParser::new(config.parser);
    TextLoader::from_path(path)?.parse_with(&parser)
}

fn render(text: &Text, config: &AtfConfig) -> String {
    let rendered = match config.output.format {
        OutputFormat::Json => to_json(text, config.output.pretty).map_err(|e| e.to_string()),
        OutputFormat::Yaml => serde_yaml::to_string(text).map_err(|e| e.to_string()),
        OutputFormat::Atf => Ok(text.atf()),
    };
    rendered.unwrap_or_else(|e| fail(format!("cannot format output: {}", e)))
}

fn report(error: LoaderError) -> ! {
    match error {
        LoaderError::Transliteration(error) => {
            eprintln!("{}", error);
            eprint!("{}", error.report());
            std::process::exit(1);
        }
        other => fail(other),
    }
}

/// Handle the parse command
fn handle_parse_command(command: &ArgMatches, config: &AtfConfig) {
    let text = parse_file(path(command, "path"), config).unwrap_or_else(|e| report(e));
    println!("{}", render(&text, config));
}

/// Handle the check command
fn handle_check_command(command: &ArgMatches, config: &AtfConfig) {
    let path = path(command, "path");
    let text = parse_file(path, config).unwrap_or_else(|e| report(e));
    println!("{}: {} line(s), no errors", path, text.lines().len());
}

/// Handle the merge command
fn handle_merge_command(command: &ArgMatches, config: &AtfConfig) {
    let old_path = path(command, "old");
    let source = std::fs::read_to_string(old_path)
        .unwrap_or_else(|e| fail(format!("cannot read {}: {}", old_path, e)));
    let old: Text = from_json(&source).unwrap_or_else(|e| fail(format!("{}: {}", old_path, e)));
    let new = parse_file(path(command, "new"), config).unwrap_or_else(|e| report(e));
    let merged = old.merge_with(&new, config.merge.algorithm);
    println!("{}", render(&merged, config));
}
