//! Line converter module
//!
//! Turns a stream of hexadecimal lines into a stream of decimal lines.

mod core;
pub mod literal;
mod mode;

pub use self::core::{ConversionSummary, LineConverter, LineConverterBuilder};
pub use literal::convert_line;
pub use mode::ConversionMode;
