// src/watchset/ancestry.rs

//! Bounded directory-ancestry walk.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::warn;

/// Hard bound on the ancestry walk. BEM namespace paths are at most three
/// segments deep (block / __elem / _mod), so anything close to this bound
/// means malformed input rather than a legitimate layout.
pub(crate) const MAX_ANCESTRY_DEPTH: usize = 32;

/// Record `dir` and every ancestor directory above it into `out`, stopping
/// at the path-root fixed point (the empty relative path).
///
/// The empty ancestor is deliberately not recorded: joined with a level it
/// is the level itself, which the builder already includes verbatim.
pub(crate) fn push_ancestors(dir: &Path, out: &mut BTreeSet<PathBuf>) {
    let mut cur = dir;
    for _ in 0..MAX_ANCESTRY_DEPTH {
        if cur.as_os_str().is_empty() {
            return;
        }
        out.insert(cur.to_path_buf());
        match cur.parent() {
            Some(parent) if parent != cur => cur = parent,
            _ => return,
        }
    }
    warn!(dir = %dir.display(), "ancestry walk exceeded maximum depth, truncating");
}
