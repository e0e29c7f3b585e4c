//! Key remapping between mappings

use props_content::ConfigMapping;

use crate::{Error, Result};

/// A single `from -> to` instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingPair {
    pub from: String,
    pub to: String,
}

impl MappingPair {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Group a flat argument list into pairs, preserving order.
    ///
    /// An odd number of arguments is [`Error::InvalidPairs`].
    pub fn parse_list(args: &[String]) -> Result<Vec<Self>> {
        if args.len() % 2 != 0 {
            return Err(Error::InvalidPairs { count: args.len() });
        }
        Ok(args
            .chunks_exact(2)
            .map(|pair| Self::new(&pair[0], &pair[1]))
            .collect())
    }
}

/// Copy values from `source` into `destination` following `pairs` in order.
///
/// When `from` is not a key of `source`, the literal `from` string is
/// written instead. Later pairs overwrite earlier ones with the same `to`.
pub fn map_keys(
    source: &ConfigMapping,
    mut destination: ConfigMapping,
    pairs: &[MappingPair],
) -> ConfigMapping {
    for pair in pairs {
        let value = match source.get(&pair.from) {
            Some(value) => value.clone(),
            None => {
                tracing::debug!(from = %pair.from, to = %pair.to, "key not in source, using literal");
                pair.from.clone()
            }
        };
        destination.insert(pair.to.clone(), value);
    }
    destination
}
