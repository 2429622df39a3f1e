// src/lib.rs

//! Watch-set computation for incremental BEM builds.
//!
//! Given a resolved set of BEM units (block / element / modifier) and a list
//! of search-root levels, this crate computes the set of filesystem paths
//! that a cached build result depends on: the levels themselves plus every
//! ancestor directory of every unit's dependency-declaration artifact, fanned
//! out across all levels.
//!
//! Two pieces:
//! - [`naming::bem_path`]: pure mapping from an abstract unit to its
//!   canonical on-disk path for a given tech suffix.
//! - [`watchset::build_watch_set`] / [`watchset::build_watch_set_existing`]:
//!   the deduplicated, deterministically ordered path set, optionally
//!   filtered down to directories that exist on disk via an injected
//!   [`fs::ExistenceCheck`].
//!
//! It does **not** resolve dependencies, watch files, or invalidate caches;
//! those belong to the surrounding build pipeline. The output here is the
//! input to that pipeline's watcher: "this build depended on these paths".

pub mod errors;
pub mod fs;
pub mod logging;
pub mod naming;
pub mod unit;
pub mod watchset;

pub use errors::{BemWatchError, Result};
pub use fs::{ExistenceCheck, FsExistenceCheck};
pub use naming::bem_path;
pub use unit::{BemModifier, BemUnit, ModVal};
pub use watchset::{DEPS_TECH, build_watch_set, build_watch_set_existing};
