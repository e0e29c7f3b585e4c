//! Merge commands (`me`, `mp`)

use colored::Colorize;
use props_content::Format;
use props_core::merge_documents;
use props_fs::DocumentRef;

use crate::cli::MergeArgs;
use crate::commands::output;
use crate::context::RunContext;
use crate::error::Result;

/// Merge the listed documents and emit the result.
///
/// A bare `--save` overwrites the first listed document.
pub fn run_merge(ctx: &RunContext, format: Format, args: &MergeArgs) -> Result<()> {
    let documents: Vec<DocumentRef> = args
        .documents
        .iter()
        .map(|arg| DocumentRef::from(arg.as_str()))
        .collect();
    let target = documents.first().cloned().unwrap_or(DocumentRef::Empty);

    ctx.sink(&target)?;

    let report = merge_documents(format, &documents)?;
    for path in &report.skipped {
        eprintln!(
            "{}: Skipping file that does not exist: {}",
            "Warning".yellow().bold(),
            path.display()
        );
    }

    output::emit(ctx, &target, &report.mapping)
}
