//! Ordered key/value mapping shared by both formats

use indexmap::IndexMap;

/// Ordered, key-unique string mapping.
///
/// Inserting an existing key replaces its value and keeps the key's
/// original position, so re-emitted output stays stable.
pub type ConfigMapping = IndexMap<String, String>;
