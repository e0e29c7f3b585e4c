//! Format selection and handler trait

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::handlers::{DotenvHandler, PropertiesHandler};
use crate::mapping::ConfigMapping;

/// Supported document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Format {
    Dotenv,
    Properties,
}

impl Format {
    /// Resolve a single-letter command code: `e` for dotenv, `p` for properties.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'e' => Some(Self::Dotenv),
            'p' => Some(Self::Properties),
            _ => None,
        }
    }

    /// Human-readable name used in messages
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dotenv => "Dotenv",
            Self::Properties => "Properties",
        }
    }

    /// The handler that decodes this format
    pub fn handler(&self) -> Box<dyn FormatHandler> {
        match self {
            Self::Dotenv => Box::new(DotenvHandler::new()),
            Self::Properties => Box::new(PropertiesHandler::new()),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Trait for format-specific decoders
pub trait FormatHandler: Send + Sync {
    /// Format identifier
    fn format(&self) -> Format;

    /// Decode source text into an ordered mapping
    fn decode(&self, source: &str) -> Result<ConfigMapping>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(Format::from_code('e'), Some(Format::Dotenv));
        assert_eq!(Format::from_code('p'), Some(Format::Properties));
        assert_eq!(Format::from_code('x'), None);
    }

    #[test]
    fn test_handler_matches_format() {
        assert_eq!(Format::Dotenv.handler().format(), Format::Dotenv);
        assert_eq!(Format::Properties.handler().format(), Format::Properties);
    }
}
