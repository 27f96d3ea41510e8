//! Settings loading and run option resolution
//!
//! Settings are optional. They come from an explicit `--config` file or from
//! `config.yaml` in the platform config directory, and command-line values
//! always take precedence over them.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::ArgMatches;
use directories::ProjectDirs;
use log::debug;
use serde::Deserialize;

use crate::cli::{get_config_file, get_log_file, get_mode, get_paths, get_verbosity_count};
use crate::constants::{APPLICATION, DEFAULT_CONFIG_FILE, ORGANIZATION, QUALIFIER};
use crate::converter::ConversionMode;
use crate::errors::{config_parsing_error, file_operation_error, generic_error, Result};
use crate::logging::LogLevel;

/// Defaults read from a YAML settings file
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub mode: Option<ConversionMode>,
    pub verbosity: Option<String>,
    pub log_file: Option<String>,
}

impl Settings {
    /// Loads settings from a YAML file
    ///
    /// An empty file yields the default settings.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid settings YAML
    pub fn load(file: &Path) -> Result<Settings> {
        let content = fs::read_to_string(file)
            .map_err(|e| file_operation_error(e, file.to_path_buf(), "read"))?;

        if content.trim().is_empty() {
            return Ok(Settings::default());
        }

        let settings: Settings = serde_yaml::from_str(&content).map_err(|e| {
            let detail = format!("{}: {}", file.display(), e);
            config_parsing_error(e, &detail)
        })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Checks values that serde cannot check on its own
    pub fn validate(&self) -> Result<()> {
        self.log_level()?;
        Ok(())
    }

    /// Gets the configured log level, if any
    pub fn log_level(&self) -> Result<Option<LogLevel>> {
        self.verbosity
            .as_deref()
            .map(|v| LogLevel::from_str(v).map_err(|e| generic_error(&e)))
            .transpose()
    }
}

/// Locate the default settings file in the platform config directory
///
/// Returns `None` when the directory cannot be determined or holds no file.
pub fn find_default_settings_file() -> Option<PathBuf> {
    let folder = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)?;
    let path = folder.config_dir().join(DEFAULT_CONFIG_FILE);
    path.exists().then_some(path)
}

/// Load the settings for this run
///
/// An explicitly requested file must exist. The default file is used only
/// when present.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    let file = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => find_default_settings_file(),
    };

    match file {
        Some(path) => {
            debug!("Loading settings from {}", path.display());
            Settings::load(&path)
        }
        None => Ok(Settings::default()),
    }
}

/// Everything a single run needs, after merging arguments and settings
#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub mode: ConversionMode,
    pub verbosity: LogLevel,
    pub log_file: Option<PathBuf>,
}

impl RunOptions {
    /// Merge command-line arguments over settings
    pub fn resolve(matches: &ArgMatches, settings: &Settings) -> Result<RunOptions> {
        let (input, output) = get_paths(matches)?;

        let mode = get_mode(matches)?
            .or(settings.mode)
            .unwrap_or_default();

        let verbosity = match get_verbosity_count(matches) {
            0 => settings.log_level()?.unwrap_or(LogLevel::Info),
            count => LogLevel::from_occurrences(count),
        };

        let log_file = get_log_file(matches).or_else(|| {
            settings
                .log_file
                .as_deref()
                .map(|file| PathBuf::from(shellexpand::tilde(file).into_owned()))
        });

        Ok(RunOptions {
            input,
            output,
            mode,
            verbosity,
            log_file,
        })
    }

    /// Parse arguments, load the matching settings and merge them
    pub fn from_matches(matches: &ArgMatches) -> Result<RunOptions> {
        let settings = load_settings(get_config_file(matches).as_deref())?;
        RunOptions::resolve(matches, &settings)
    }
}
