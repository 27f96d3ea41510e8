//! Constants used throughout the application
//!
//! This module centralises all constants used in the application to make
//! them easier to manage and update.

/// Qualifier string used for application identification
pub const QUALIFIER: &str = "com";

/// Organisation name used for application identification
pub const ORGANIZATION: &str = "Ondřej Vágner";

/// Application name used for identification
///
/// Used to locate the default settings file in the platform config directory.
pub const APPLICATION: &str = "hex2dec";

/// Name of the settings file looked up in the platform config directory
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

/// Optional prefix accepted in front of a hexadecimal literal
pub const HEX_PREFIXES: [&str; 2] = ["0x", "0X"];

/// Number of bytes in a big-endian double
pub const FLOAT_WIDTH_BYTES: usize = 8;

/// Help text for the input positional argument
pub const INPUT_HELP: &str = "File with one hexadecimal value per line";

/// Help text for the output positional argument
pub const OUTPUT_HELP: &str = "File to write the decimal values to (created or overwritten)";

/// Help text for the mode command-line option
pub const MODE_HELP: &str = "How each line is interpreted: `integer` or `float` (8-byte big-endian double)";

/// Help text for the config command-line option
pub const CONFIG_HELP: &str = "Read defaults from a specific settings file";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the log file command-line option
pub const LOG_FILE_HELP: &str = "Also write the log to this file";
