use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// How a hexadecimal line is interpreted
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ConversionMode {
    /// Non-negative integer of unbounded width
    #[default]
    Integer,
    /// Eight bytes holding a big-endian IEEE-754 double
    Float,
}

impl FromStr for ConversionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "integer" => Ok(ConversionMode::Integer),
            "float" => Ok(ConversionMode::Float),
            _ => Err(format!("Unknown conversion mode: {s}")),
        }
    }
}

impl fmt::Display for ConversionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionMode::Integer => write!(f, "integer"),
            ConversionMode::Float => write!(f, "float"),
        }
    }
}
