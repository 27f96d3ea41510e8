use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Custom error type for the hex2dec application
#[derive(Debug)]
pub enum Error {
    /// Error related to opening, reading or writing a file
    FileOperation {
        source: io::Error,
        path: PathBuf,
        operation: String,
    },
    /// A line that is not a valid hexadecimal literal
    MalformedLiteral {
        line: usize,
        content: String,
        detail: String,
    },
    /// Error related to settings parsing
    ConfigParsing {
        source: Box<dyn StdError + Send + Sync>,
        detail: String,
    },
    /// Generic error with a message
    Generic { message: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FileOperation {
                path, operation, ..
            } => {
                write!(f, "Failed to {} file: {}", operation, path.display())
            }
            Error::MalformedLiteral {
                line,
                content,
                detail,
            } => {
                if *line == 0 {
                    write!(f, "Malformed hexadecimal literal '{content}': {detail}")
                } else {
                    write!(
                        f,
                        "Malformed hexadecimal literal '{content}' on line {line}: {detail}"
                    )
                }
            }
            Error::ConfigParsing { detail, .. } => {
                write!(f, "Settings parsing error: {detail}")
            }
            Error::Generic { message } => {
                write!(f, "{message}")
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::FileOperation { source, .. } => Some(source),
            Error::ConfigParsing { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl Error {
    /// Attach a 1-based line number to a malformed literal error
    ///
    /// Other variants are returned unchanged.
    pub fn at_line(self, number: usize) -> Self {
        match self {
            Error::MalformedLiteral {
                content, detail, ..
            } => Error::MalformedLiteral {
                line: number,
                content,
                detail,
            },
            other => other,
        }
    }
}

/// Custom Result type for the hex2dec application
///
/// # Examples
/// ```
/// use hex2dec::prelude::{Result, generic_error};
///
/// fn example_function() -> Result<String> {
///     Ok("255".to_string())
///
///     // Or return an error
///     // Err(generic_error("Something went wrong"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create a file operation error
pub fn file_operation_error(err: io::Error, path: PathBuf, operation: &str) -> Error {
    Error::FileOperation {
        source: err,
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create a malformed literal error
///
/// The line number is unknown at this point and set with [`Error::at_line`].
pub fn malformed_literal_error(content: &str, detail: &str) -> Error {
    Error::MalformedLiteral {
        line: 0,
        content: content.to_string(),
        detail: detail.to_string(),
    }
}

/// Helper function to create a settings parsing error
pub fn config_parsing_error<E: StdError + Send + Sync + 'static>(err: E, detail: &str) -> Error {
    Error::ConfigParsing {
        source: Box::new(err),
        detail: detail.to_string(),
    }
}

/// Helper function to create a generic error
pub fn generic_error(message: &str) -> Error {
    Error::Generic {
        message: message.to_string(),
    }
}
