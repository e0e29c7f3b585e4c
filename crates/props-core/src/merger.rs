//! Merging several documents of one format
//!
//! Documents are folded left to right and values already merged are never
//! replaced, so the first document listed has the highest precedence.

use std::path::PathBuf;

use props_content::{ConfigMapping, Format};
use props_fs::DocumentRef;

use crate::{Result, loader};

/// Outcome of [`merge_documents`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    pub mapping: ConfigMapping,
    /// Paths that were listed but do not exist.
    pub skipped: Vec<PathBuf>,
}

/// Fold `documents` into one mapping; the earliest value for a key wins.
///
/// Each step takes the next document as the base and lays the accumulated
/// mapping over it. Keys keep the next document's order, followed by keys
/// only the accumulator has.
pub fn merge<I>(documents: I) -> ConfigMapping
where
    I: IntoIterator<Item = ConfigMapping>,
{
    documents
        .into_iter()
        .fold(ConfigMapping::new(), |merged, mut document| {
            document.extend(merged);
            document
        })
}

/// Load and merge documents, skipping the sentinel and missing files.
///
/// Any other read or parse failure aborts the merge.
pub fn merge_documents(format: Format, documents: &[DocumentRef]) -> Result<MergeReport> {
    let mut skipped = Vec::new();
    let mut loaded = Vec::with_capacity(documents.len());

    for document in documents {
        let Some(path) = document.path() else {
            continue;
        };
        if !document.is_file() {
            tracing::warn!(path = %path.display(), "skipping file that does not exist");
            skipped.push(path.to_path_buf());
            continue;
        }
        loaded.push(loader::load(format, document)?);
    }

    Ok(MergeReport {
        mapping: merge(loaded),
        skipped,
    })
}
