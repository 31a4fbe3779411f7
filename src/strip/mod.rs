use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

mod candidate;
mod walk;


use candidate::Candidate;

/// Rename every `*.disabled` file under `root` to its name without the suffix.
///
/// A candidate whose target already exists is skipped. The first failed rename
/// aborts the pass; files renamed before it stay renamed. Notices go to `out`,
/// and the summary line is only written when the whole tree was processed.
pub fn process(root: &Path, out: &mut impl Write) -> Result<usize> {
    debug!("Scanning {}", root.display());
    let mut count = 0usize;

    for path in walk::files(root) {
        let Some(candidate) = Candidate::from_path(&path) else {
            continue;
        };
        let (source, target) = (candidate.source.display(), candidate.target.display());

        // symlink_metadata so a dangling link at the target still counts as taken.
        if fs::symlink_metadata(&candidate.target).is_ok() {
            debug!("Conflict at {target}, leaving {source}");
            writeln!(out, "Skipped (already exists): {target}")?;
            continue;
        }

        debug!("Renaming {source} -> {target}");
        fs::rename(&candidate.source, &candidate.target)
            .with_context(|| format!("Failed to rename {source} -> {target}"))?;
        writeln!(out, "Renamed: {source} -> {target}")?;
        count += 1;
    }

    writeln!(out, "Done! Renamed {count} files.")?;
    out.flush()?;
    Ok(count)
}
