//! Mapping commands (`e2p`, `p2e`, `p2p`, `e2e`)

use props_content::Format;
use props_core::{MappingPair, loader, map_keys};
use props_fs::DocumentRef;

use crate::cli::MapArgs;
use crate::commands::output;
use crate::context::RunContext;
use crate::error::Result;

/// Copy keys from the source into the destination and emit the result.
pub fn run_map(ctx: &RunContext, formats: (Format, Format), args: &MapArgs) -> Result<()> {
    let (source_format, destination_format) = formats;
    let pairs = MappingPair::parse_list(&args.pairs)?;

    let source_doc = DocumentRef::from_arg(args.source.as_deref());
    let destination_doc = DocumentRef::from_arg(args.destination.as_deref());

    // Validate the output target before reading anything
    ctx.sink(&destination_doc)?;

    let source = loader::load(source_format, &source_doc)?;
    let destination = loader::load(destination_format, &destination_doc)?;

    let result = map_keys(&source, destination, &pairs);
    output::emit(ctx, &destination_doc, &result)
}
