use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bemwatch::{BemUnit, DEPS_TECH, bem_path};
use tracing::debug;

/// Materialise the on-disk artifact directories for a set of units under a
/// level rooted at `root`, the way a real component library lays them out.
///
/// Returns the absolute path of the created level.
pub fn materialize_level(root: &Path, level: &str, units: &[BemUnit]) -> Result<PathBuf> {
    let level_dir = root.join(level);
    fs::create_dir_all(&level_dir)
        .with_context(|| format!("creating level directory {}", level_dir.display()))?;

    for unit in units {
        let rel = bem_path(unit, DEPS_TECH, None)
            .with_context(|| format!("mapping unit {unit}"))?;
        let dir = level_dir.join(rel.parent().unwrap_or_else(|| Path::new("")));
        fs::create_dir_all(&dir)
            .with_context(|| format!("creating unit directory {}", dir.display()))?;

        let decl = level_dir.join(&rel);
        fs::write(&decl, b"module.exports = [];\n")
            .with_context(|| format!("writing declaration {}", decl.display()))?;
        debug!(path = %decl.display(), "materialized declaration");
    }

    Ok(level_dir)
}
