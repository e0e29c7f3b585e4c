//! Read commands (`re`, `rp`)

use std::io::Write;

use props_content::Format;
use props_core::loader;
use props_fs::DocumentRef;

use crate::cli::ReadArgs;
use crate::error::Result;

/// Print the value of one key; prints nothing when the key is absent.
pub fn run_read(format: Format, args: &ReadArgs) -> Result<()> {
    let document = DocumentRef::from(args.source.as_str());

    match loader::lookup(format, &document, &args.key)? {
        Some(value) => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{value}")?;
        }
        None => tracing::debug!(key = %args.key, %document, "key not present"),
    }
    Ok(())
}
