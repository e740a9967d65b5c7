use crate::bundle::types::{Block, BlockBody, BundleReport};
use crate::tokenizer;
use anyhow::{Context, Result};
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};
use tracing::{debug, warn};

/// Writes one block per source, in order, to `out`.
///
/// Unreadable sources are recorded inline and never stop the run; the only
/// errors returned are failures to write to `out` itself.
pub fn write_bundle<W, P>(
    out: &mut W,
    sources: &[P],
) -> io::Result<BundleReport>
where
    W: Write,
    P: AsRef<Path>,
{
    let mut report = BundleReport::default();
    for source in sources {
        let block = Block::read(source.as_ref());
        if let BlockBody::Unreadable(reason) = &block.body {
            warn!("could not read {}: {reason}", block.path.display());
            report.unreadable.push(block.path.clone());
        }
        let rendered = block.render();
        out.write_all(rendered.as_bytes())?;
        debug!(
            "wrote {} ({} bytes)",
            block.path.display(),
            rendered.len()
        );
        report.blocks += 1;
        report.bytes_written += rendered.len() as u64;
        report.tokens += tokenizer::count(&rendered);
    }
    Ok(report)
}

/// Bundles `sources` into `dest`, truncating anything already there.
pub fn save_bundle<P: AsRef<Path>>(
    sources: &[P],
    dest: &Path,
) -> Result<BundleReport> {
    let file = File::create(dest)
        .with_context(|| format!("Failed to create destination {}", dest.display()))?;
    let mut out = BufWriter::new(file);
    let report = write_bundle(&mut out, sources)
        .with_context(|| format!("Failed to write destination {}", dest.display()))?;
    out.flush()
        .with_context(|| format!("Failed to flush destination {}", dest.display()))?;
    Ok(report)
}
