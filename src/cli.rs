use std::path::PathBuf;
use std::str::FromStr;

use clap::{command, crate_authors, crate_description, crate_name, crate_version, Arg, ArgMatches, Command};

use crate::constants::{CONFIG_HELP, INPUT_HELP, LOG_FILE_HELP, MODE_HELP, OUTPUT_HELP, VERBOSE_HELP};
use crate::converter::ConversionMode;
use crate::errors::{generic_error, Result};

/// Builds the command-line interface
///
/// Defines the following arguments:
/// - `input`: File with one hexadecimal value per line
/// - `output`: File the decimal values are written to
/// - `mode`: How each line is interpreted
/// - `config`: Path to a settings file
/// - `verbose`: Increase verbosity level
/// - `log_file`: Also write the log to a file
pub fn build_command() -> Command {
    let arg_input = Arg::new("input")
        .help(INPUT_HELP)
        .required(true)
        .index(1);

    let arg_output = Arg::new("output")
        .help(OUTPUT_HELP)
        .required(true)
        .index(2);

    // define arg for the conversion mode
    let arg_mode = Arg::new("mode")
        .short('m')
        .long("mode")
        .help(MODE_HELP)
        .value_parser(["integer", "float"]);

    // define arg for reading from a specific settings file
    let arg_config = Arg::new("config")
        .short('c')
        .long("config")
        .help(CONFIG_HELP);

    // define arg for verbosity level
    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(clap::ArgAction::Count);

    // define arg for log file
    let arg_log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .help(LOG_FILE_HELP);

    command!()
        .author(crate_authors!())
        .about(crate_description!())
        .name(crate_name!())
        .version(crate_version!())
        .arg(arg_input)
        .arg(arg_output)
        .arg(arg_mode)
        .arg(arg_config)
        .arg(arg_log_file)
        .arg(arg_verbose)
}

/// Parses the process arguments
///
/// Exits with a usage message when the arguments are invalid.
pub fn get_matches() -> ArgMatches {
    build_command().get_matches()
}

/// Gets the input and output paths, with `~` expanded
///
/// # Errors
/// Returns an error if either positional argument is missing
pub fn get_paths(matches: &ArgMatches) -> Result<(PathBuf, PathBuf)> {
    let input = get_path(matches, "input")?;
    let output = get_path(matches, "output")?;
    Ok((input, output))
}

fn get_path(matches: &ArgMatches, name: &str) -> Result<PathBuf> {
    matches
        .get_one::<String>(name)
        .map(|value| expand_path(value))
        .ok_or_else(|| generic_error(&format!("Missing required argument: {name}")))
}

fn expand_path(value: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(value).into_owned())
}

/// Gets the conversion mode, if one was given
pub fn get_mode(matches: &ArgMatches) -> Result<Option<ConversionMode>> {
    matches
        .get_one::<String>("mode")
        .map(|value| ConversionMode::from_str(value).map_err(|e| generic_error(&e)))
        .transpose()
}

/// Gets the number of -v/--verbose flags
pub fn get_verbosity_count(matches: &ArgMatches) -> u8 {
    matches.get_count("verbose")
}

/// Gets the settings file path, if one was given
pub fn get_config_file(matches: &ArgMatches) -> Option<PathBuf> {
    matches.get_one::<String>("config").map(|value| expand_path(value))
}

/// Gets the log file path, if one was given
pub fn get_log_file(matches: &ArgMatches) -> Option<PathBuf> {
    matches.get_one::<String>("log_file").map(|value| expand_path(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ArgMatches {
        build_command().try_get_matches_from(args).unwrap()
    }

    #[test]
    fn test_positional_paths() {
        let matches = parse(&["hex2dec", "values.hex", "values.dec"]);
        let (input, output) = get_paths(&matches).unwrap();

        assert_eq!(input, PathBuf::from("values.hex"));
        assert_eq!(output, PathBuf::from("values.dec"));
    }

    #[test]
    fn test_missing_output_is_rejected() {
        let result = build_command().try_get_matches_from(["hex2dec", "values.hex"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_mode_option() {
        let matches = parse(&["hex2dec", "a", "b"]);
        assert_eq!(get_mode(&matches).unwrap(), None);

        let matches = parse(&["hex2dec", "--mode", "float", "a", "b"]);
        assert_eq!(get_mode(&matches).unwrap(), Some(ConversionMode::Float));

        let result = build_command().try_get_matches_from(["hex2dec", "-m", "octal", "a", "b"]);
        assert!(result.is_err(), "Unknown modes are rejected by the parser");
    }

    #[test]
    fn test_verbosity_count() {
        assert_eq!(get_verbosity_count(&parse(&["hex2dec", "a", "b"])), 0);
        assert_eq!(get_verbosity_count(&parse(&["hex2dec", "-v", "a", "b"])), 1);
        assert_eq!(get_verbosity_count(&parse(&["hex2dec", "-vvv", "a", "b"])), 3);
    }

    #[test]
    fn test_optional_files() {
        let matches = parse(&["hex2dec", "a", "b"]);
        assert_eq!(get_config_file(&matches), None);
        assert_eq!(get_log_file(&matches), None);

        let matches = parse(&["hex2dec", "-c", "settings.yaml", "--log-file", "run.log", "a", "b"]);
        assert_eq!(get_config_file(&matches), Some(PathBuf::from("settings.yaml")));
        assert_eq!(get_log_file(&matches), Some(PathBuf::from("run.log")));
    }

    #[test]
    fn test_tilde_is_expanded() {
        let Some(home) = std::env::var_os("HOME") else {
            return;
        };
        let matches = parse(&["hex2dec", "~/values.hex", "b"]);
        let (input, _) = get_paths(&matches).unwrap();
        assert_eq!(input, PathBuf::from(home).join("values.hex"));
    }
}
