pub use cli::*;
pub use config::{RunOptions, Settings};
pub use errors::*;

pub mod cli;
pub mod config;
mod constants;
pub mod converter;
mod errors;
pub mod logging;

use converter::{ConversionSummary, LineConverter};

pub mod prelude {
    pub use crate::config::{load_settings, RunOptions, Settings};
    pub use crate::converter::{convert_line, ConversionMode, ConversionSummary, LineConverter};
    pub use crate::errors::{
        config_parsing_error, file_operation_error, generic_error, malformed_literal_error,
    };
    pub use crate::errors::{Error, Result};
    pub use crate::logging::{format_message, init_logger, LogLevel};
    pub use crate::perform_conversion;
}

/// Convert the input file named in `options` into its output file
///
/// # Errors
/// Fails on the first unreadable file, unwritable file or malformed line.
/// Lines converted before a malformed line stay in the output file.
pub fn perform_conversion(options: &RunOptions) -> Result<ConversionSummary> {
    let converter = LineConverter::builder().mode(options.mode).build();
    converter.convert_file(&options.input, &options.output)
}
