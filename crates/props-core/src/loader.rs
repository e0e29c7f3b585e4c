//! Format-aware document loading

use props_content::{ConfigMapping, Format};
use props_fs::{DocumentRef, io};

use crate::{Error, Result};

/// Load a document as a mapping.
///
/// The sentinel yields an empty mapping without touching the filesystem.
/// A path that does not exist is [`Error::FileNotFound`].
pub fn load(format: Format, document: &DocumentRef) -> Result<ConfigMapping> {
    let Some(path) = document.path() else {
        return Ok(ConfigMapping::new());
    };

    if !path.exists() {
        return Err(Error::FileNotFound {
            format,
            path: path.to_path_buf(),
        });
    }

    let text = io::read_text(path)?;
    let mapping = format.handler().decode(&text).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        path = %path.display(),
        %format,
        entries = mapping.len(),
        "loaded document"
    );
    Ok(mapping)
}

/// Look up a single key in a document.
pub fn lookup(format: Format, document: &DocumentRef, key: &str) -> Result<Option<String>> {
    let mut mapping = load(format, document)?;
    Ok(mapping.swap_remove(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_loads_empty_for_both_formats() {
        for format in [Format::Dotenv, Format::Properties] {
            assert!(load(format, &DocumentRef::Empty).unwrap().is_empty());
        }
    }

    #[test]
    fn test_lookup_in_sentinel_is_none() {
        assert_eq!(lookup(Format::Dotenv, &DocumentRef::Empty, "A").unwrap(), None);
    }
}
