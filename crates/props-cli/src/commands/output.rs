//! Rendering and writing properties output

use std::io::Write;

use props_content::{ConfigMapping, PropertiesHandler};
use props_fs::{DocumentRef, io};

use crate::context::{RunContext, Sink};
use crate::error::Result;

/// Render `mapping` as properties and send it where `--save` points.
///
/// `own` is the document a bare `--save` overwrites.
pub fn emit(ctx: &RunContext, own: &DocumentRef, mapping: &ConfigMapping) -> Result<()> {
    let sink = ctx.sink(own)?;
    let text = PropertiesHandler::new().stringify_with(mapping, &ctx.writer);

    match sink {
        Sink::Stdout => {
            let mut stdout = std::io::stdout().lock();
            // An empty document still prints one blank line
            if text.is_empty() {
                writeln!(stdout)?;
            } else {
                stdout.write_all(text.as_bytes())?;
            }
            stdout.flush()?;
        }
        Sink::File(path) => {
            io::write_text(&path, &text)?;
            tracing::debug!(path = %path.display(), entries = mapping.len(), "saved output");
        }
    }
    Ok(())
}
