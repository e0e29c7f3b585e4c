//! Document identity
//!
//! A document argument is either a path on disk or the sentinel `-`
//! (or an omitted argument), which stands for an empty document.

use std::fmt;
use std::path::{Path, PathBuf};

/// Literal argument that denotes "no document".
pub const SENTINEL: &str = "-";

/// A reference to a configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DocumentRef {
    /// The sentinel: always an empty mapping, never read from disk.
    Empty,
    /// A file on disk.
    Path(PathBuf),
}

impl DocumentRef {
    /// Build a reference from an optional command-line argument.
    ///
    /// `None`, the empty string and `-` all map to [`DocumentRef::Empty`].
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None | Some("") | Some(SENTINEL) => Self::Empty,
            Some(path) => Self::Path(PathBuf::from(path)),
        }
    }

    /// The file path, unless this is the sentinel.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Empty => None,
            Self::Path(path) => Some(path),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Whether the reference names an existing regular file.
    ///
    /// The sentinel never exists.
    pub fn is_file(&self) -> bool {
        self.path().is_some_and(Path::is_file)
    }
}

impl From<&str> for DocumentRef {
    fn from(arg: &str) -> Self {
        Self::from_arg(Some(arg))
    }
}

impl fmt::Display for DocumentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str(SENTINEL),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_forms() {
        assert_eq!(DocumentRef::from_arg(None), DocumentRef::Empty);
        assert_eq!(DocumentRef::from_arg(Some("-")), DocumentRef::Empty);
        assert_eq!(DocumentRef::from_arg(Some("")), DocumentRef::Empty);
    }

    #[test]
    fn test_path_form() {
        let doc = DocumentRef::from("conf/app.properties");
        assert_eq!(doc.path(), Some(Path::new("conf/app.properties")));
        assert!(!doc.is_empty());
        assert_eq!(doc.to_string(), "conf/app.properties");
    }

    #[test]
    fn test_sentinel_is_never_a_file() {
        assert!(!DocumentRef::Empty.is_file());
        assert_eq!(DocumentRef::Empty.to_string(), "-");
    }
}
