// src/watchset/builder.rs

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::{BemWatchError, Result};
use crate::fs::ExistenceCheck;
use crate::naming::bem_path;
use crate::unit::BemUnit;
use crate::watchset::ancestry::push_ancestors;

/// Tech suffix of the dependency-declaration artifact: the file that, if it
/// changes, could change the dependency graph.
pub const DEPS_TECH: &str = "deps.js";

/// Compute the full, unfiltered watch set for the given units and levels.
///
/// The result contains each level verbatim plus, for every level, the level
/// joined with every ancestor directory implied by every unit's
/// dependency-declaration path. Deduplicated and lexicographically sorted,
/// so repeated calls with identical input yield identical sequences.
///
/// This is an over-approximation: candidates are listed whether or not they
/// exist on disk. Safe, but coarser-grained invalidation; use
/// [`build_watch_set_existing`] to filter down to directories that exist.
///
/// Any invalid unit fails the whole computation: a partial watch set could
/// silently miss invalidations.
pub fn build_watch_set<P: AsRef<Path>>(units: &[BemUnit], levels: &[P]) -> Result<Vec<PathBuf>> {
    let mut dirs = BTreeSet::new();
    for unit in units {
        let rel = bem_path(unit, DEPS_TECH, None)?;
        if let Some(dir) = rel.parent() {
            push_ancestors(dir, &mut dirs);
        }
    }

    let mut paths = BTreeSet::new();
    for level in levels {
        let level = level.as_ref();
        paths.insert(level.to_path_buf());
        for dir in &dirs {
            paths.insert(level.join(dir));
        }
    }

    debug!(
        units = units.len(),
        levels = levels.len(),
        paths = paths.len(),
        "computed watch set"
    );

    Ok(paths.into_iter().collect())
}

/// Compute the watch set filtered down to candidates that exist as
/// directories, as reported by the injected `check` capability.
///
/// The filtered result is always a subset of [`build_watch_set`] for the
/// same input. A failing probe fails the whole computation with
/// [`BemWatchError::ExistenceCheck`]; this function never silently falls
/// back to the unfiltered superset, so callers can distinguish "filtered"
/// from "unable to filter".
pub async fn build_watch_set_existing<P, C>(
    units: &[BemUnit],
    levels: &[P],
    check: &C,
) -> Result<Vec<PathBuf>>
where
    P: AsRef<Path>,
    C: ExistenceCheck,
{
    let candidates = build_watch_set(units, levels)?;

    let exists = check
        .dirs_exist(&candidates)
        .await
        .map_err(BemWatchError::ExistenceCheck)?;

    let filtered: Vec<PathBuf> = candidates
        .into_iter()
        .filter(|path| exists.get(path).copied().unwrap_or(false))
        .collect();

    debug!(paths = filtered.len(), "filtered watch set to existing directories");

    Ok(filtered)
}
