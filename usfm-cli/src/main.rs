//! Command-line interface for usfm2dict
//! Extracts verse text from USFM files and writes it as a JSON object keyed by verse reference.
//!
//! Usage:
//!   usfm2dict `<files>...` [--output `<file>`] [--pretty]            - Extract verses
//!   usfm2dict `<files>...` --format token-simple                   - Inspect the token stream
//!
//! Settings come from the built-in defaults, then `./usfm2dict.toml` if present, then the file
//! given with `--config`, then the flags.

mod error;
mod inputs;
mod output;

use clap::{Arg, ArgAction, ArgMatches, Command};
use error::CliError;
use log::LevelFilter;
use std::path::Path;
use usfm_config::{Loader, OutputFormat, Usfm2DictConfig, USER_CONFIG_FILE};
use usfm_parser::UsfmParser;

fn build_cli() -> Command {
    Command::new("usfm2dict")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extract verse text from USFM files into a JSON dictionary")
        .arg(
            Arg::new("usfm_files")
                .help("USFM files to process (glob patterns are expanded)")
                .required(true)
                .num_args(1..)
                .index(1),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Write the result to this file instead of stdout"),
        )
        .arg(
            Arg::new("pretty")
                .long("pretty")
                .short('p')
                .help("Pretty-print the JSON output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format")
                .value_parser(["verses", "token-json", "token-simple"]),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Additional configuration file (TOML)"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .help("Log level (off, error, warn, info, debug, trace); RUST_LOG takes precedence"),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    if let Err(e) = run(&matches) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(matches: &ArgMatches) -> Result<Usfm2DictConfig, CliError> {
    let mut loader = Loader::new().with_optional_file(USER_CONFIG_FILE);

    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if matches.get_flag("pretty") {
        loader = loader.set_override("output.pretty", true)?;
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if let Some(level) = matches.get_one::<String>("log-level") {
        loader = loader.set_override("logging.level", level.as_str())?;
    }

    Ok(loader.build()?)
}

fn init_logging(level: &str) -> Result<(), CliError> {
    let filter: LevelFilter = level
        .parse()
        .map_err(|_| CliError::LogLevel(level.to_string()))?;
    env_logger::Builder::new()
        .filter_level(filter)
        .parse_default_env()
        .init();
    Ok(())
}

fn run(matches: &ArgMatches) -> Result<(), CliError> {
    let config = load_config(matches)?;
    init_logging(&config.logging.level)?;

    let patterns: Vec<&String> = matches
        .get_many::<String>("usfm_files")
        .unwrap_or_default()
        .collect();
    let paths = inputs::expand_patterns(&patterns);
    let files = inputs::load_sources(&paths);
    log::debug!("{} of {} inputs readable", files.len(), paths.len());

    let rendered = match config.output.format {
        OutputFormat::Verses => {
            let parser = UsfmParser::new();
            let verses = inputs::extract_verses(&parser, &files);
            output::render_verses(&verses, &config.output)?
        }
        OutputFormat::TokenJson => output::render_tokens_json(&files, &config.output)?,
        OutputFormat::TokenSimple => output::render_tokens_simple(&files),
    };

    let destination = matches.get_one::<String>("output").map(Path::new);
    output::write_output(&rendered, destination)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_files_are_required() {
        assert!(build_cli().try_get_matches_from(["usfm2dict"]).is_err());
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let result = build_cli().try_get_matches_from(["usfm2dict", "a.usfm", "-f", "xml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_flags_override_defaults() {
        let matches = build_cli()
            .try_get_matches_from(["usfm2dict", "a.usfm", "-p", "-f", "token-json"])
            .expect("valid arguments");
        let config = load_config(&matches).expect("config");
        assert!(config.output.pretty);
        assert_eq!(config.output.format, OutputFormat::TokenJson);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let matches = build_cli()
            .try_get_matches_from(["usfm2dict", "a.usfm", "--config", "/nonexistent/cfg.toml"])
            .expect("valid arguments");
        assert!(matches!(load_config(&matches), Err(CliError::Config(_))));
    }
}
